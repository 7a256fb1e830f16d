//! Input model: tools, pointer sources, keys, and the gesture state machine.
//!
//! `Tool` is the user's chosen interpretation of pointer gestures. It is set
//! from outside (the tool selector) and is orthogonal to `InputState`, which
//! tracks the gesture in flight between pointer-down and pointer-up and
//! carries everything needed to finish it on release.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use crate::error::EditorError;
use crate::geom::Point;
use crate::scene::{ArrowStyle, Element, ElementId};

/// Which tool is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Pick, move, delete and rotate existing elements (default).
    #[default]
    Select,
    /// Draw arrows of the given style by dragging.
    Arrow(ArrowStyle),
}

impl Tool {
    /// Build a tool from a selector name and its optional parameter, e.g.
    /// `("arrow", Some("dashed"))`. A full `"arrow:dashed"` name is accepted
    /// too.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnknownTool`] for names other than `select` and
    /// `arrow`, and [`EditorError::UnknownArrowStyle`] for a bad style.
    pub fn from_parts(name: &str, param: Option<&str>) -> Result<Self, EditorError> {
        match (name, param) {
            ("select", _) => Ok(Self::Select),
            ("arrow", Some(style)) => Ok(Self::Arrow(style.parse()?)),
            ("arrow", None) => Ok(Self::Arrow(ArrowStyle::default())),
            (full, None) if full.contains(':') => full.parse(),
            (other, _) => Err(EditorError::UnknownTool(other.to_string())),
        }
    }

    /// Whether this is the selection tool.
    #[must_use]
    pub fn is_select(self) -> bool {
        self == Self::Select
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select => f.write_str("select"),
            Self::Arrow(style) => write!(f, "arrow:{style}"),
        }
    }
}

impl FromStr for Tool {
    type Err = EditorError;

    /// Parse `select` or `arrow:<style>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if s == "select" => Ok(Self::Select),
            Some(("arrow", style)) => Ok(Self::Arrow(style.parse()?)),
            _ => Err(EditorError::UnknownTool(s.to_string())),
        }
    }
}

/// Raw pointer position as delivered by the host, already in surface-local
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// A mouse event at a position.
    Mouse(Point),
    /// A touch event: contacts still down, and contacts that changed in this
    /// event (the only ones present on touch end).
    Touch { touches: Vec<Point>, changed: Vec<Point> },
}

impl PointerInput {
    /// The single point a gesture follows: the first active touch, else the
    /// first changed touch, else the mouse position.
    #[must_use]
    pub fn position(&self) -> Option<Point> {
        match self {
            Self::Mouse(p) => Some(*p),
            Self::Touch { touches, changed } => touches.first().or(changed.first()).copied(),
        }
    }
}

/// A keyboard key.
///
/// The inner string holds the key name as reported by the browser (e.g. `"Delete"`, `"Escape"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// `Delete` or `Backspace`.
    #[must_use]
    pub fn is_delete(&self) -> bool {
        matches!(self.0.as_str(), "Delete" | "Backspace")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        matches!(self.0.as_str(), "Escape" | "Esc")
    }
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Currently active tool.
    pub tool: Tool,
    /// The id of the currently selected element, if any.
    pub selected_id: Option<ElementId>,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is moving the selected element.
    Dragging {
        /// Id of the element being dragged.
        id: ElementId,
        /// Pointer minus pivot at pointer-down; held constant for the drag.
        offset: Point,
        /// Pivot at pointer-down, to tell a real move from a click.
        origin: Point,
    },
    /// The user is drawing a new arrow.
    DraftingArrow {
        /// Surface point where the gesture started.
        anchor: Point,
        /// Live, uncommitted arrow spanning anchor to pointer.
        draft: Element,
    },
}

impl InputState {
    /// The live draft, if an arrow is being drawn.
    #[must_use]
    pub fn draft(&self) -> Option<&Element> {
        match self {
            Self::DraftingArrow { draft, .. } => Some(draft),
            Self::Idle | Self::Dragging { .. } => None,
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
