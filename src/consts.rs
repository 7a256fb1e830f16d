//! Default numeric constants for the editing engine.
//!
//! Every value here is the default of a field on
//! [`crate::config::EditorConfig`]; code paths read the config, not these.

// ── Glyph geometry ──────────────────────────────────────────────

/// Radius of a player marker in surface pixels.
pub const PLAYER_RADIUS: f64 = 15.0;

/// Length of an arrowhead along the shaft, in surface pixels.
pub const ARROW_HEAD_SIZE: f64 = 8.0;

/// Length given to arrows that are created without a drawn gesture.
pub const DEFAULT_ARROW_LENGTH: f64 = 60.0;

/// Share of the surface width used as the reference arrow length on narrow
/// surfaces (dropped arrows, arrow pick floor).
pub const DROPPED_ARROW_WIDTH_RATIO: f64 = 0.1;

/// Stroke width for arrow shafts and the player cross.
pub const GLYPH_LINE_WIDTH: f64 = 3.0;

/// Dash pattern for the `dashed` arrow style: on, off.
pub const ARROW_DASH: [f64; 2] = [8.0, 6.0];

// ── Hit-testing ─────────────────────────────────────────────────

/// Player pick radius as a multiple of the drawn radius.
pub const PLAYER_HIT_SLACK: f64 = 1.2;

/// Arrow pick radius is `max(length, default length) / ARROW_HIT_DIVISOR`.
pub const ARROW_HIT_DIVISOR: f64 = 1.8;

// ── Editing ─────────────────────────────────────────────────────

/// Number of snapshots kept by the undo history.
pub const HISTORY_DEPTH: usize = 20;

/// Rotation applied by one rotate action: π / 4 (45°).
pub const ROTATE_STEP: f64 = std::f64::consts::FRAC_PI_4;

// ── Rendering ───────────────────────────────────────────────────

/// Gap between a glyph and its selection outline.
pub const SELECTION_PADDING: f64 = 3.0;

/// Stroke width of the selection outline.
pub const SELECTION_LINE_WIDTH: f64 = 2.0;

/// Global alpha for the live arrow draft.
pub const DRAFT_ALPHA: f64 = 0.5;

// ── Layout ──────────────────────────────────────────────────────

/// Delay before re-measuring the surface after a layout change (matches the
/// sidebar transition).
pub const RESIZE_DELAY_MS: u64 = 310;
