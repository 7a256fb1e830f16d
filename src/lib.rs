//! Editing engine for the court-side play diagram board.
//!
//! The crate owns everything between raw pointer/keyboard events and pixels:
//! the scene of placed players and arrows, picking, bounded undo, the gesture
//! state machine with its live arrow draft, and the draw pass. Hosts (the
//! browser page, or a native shell) only forward events, run the timers the
//! engine asks for, and hand the engine a [`paint::Painter`] to draw into.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Editing session: [`engine::EngineCore`] and the actions it emits |
//! | [`scene`] | Element types and the append-ordered scene store |
//! | [`hit`] | Topmost-first picking against rotated elements |
//! | [`history`] | Bounded snapshot stack behind undo |
//! | [`input`] | Tools, pointer sources, keys and the gesture state machine |
//! | [`palette`] | Drop payloads from the palette and element creation |
//! | [`viewport`] | Drawing surface size and deferred resize handling |
//! | [`render`] | Draw pass from scene state to a painter |
//! | [`paint`] | Painter trait plus recording, raster and browser backends |
//! | [`geom`] | Points and the shared world-to-local transform |
//! | [`config`] | Tunables with defaults and environment overrides |
//! | [`error`] | Error type for parsing surfaces |
//! | [`consts`] | Default numeric constants |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod history;
pub mod hit;
pub mod input;
pub mod paint;
pub mod palette;
pub mod render;
pub mod scene;
pub mod viewport;

pub use config::EditorConfig;
pub use engine::{Action, EngineCore};
pub use error::EditorError;
pub use geom::Point;
pub use scene::{ArrowStyle, Element, ElementId, ElementKind, Glyph, Scene, Team};

#[cfg(feature = "web")]
pub use engine::Engine;
