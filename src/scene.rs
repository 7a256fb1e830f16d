//! Scene model: placed elements and the append-ordered store that owns them.
//!
//! An [`Element`] is either a player marker or an arrow, positioned by its
//! pivot and rotated about it. The [`Scene`] keeps elements in append order,
//! which is also paint order: later elements draw over earlier ones and win
//! picks where they overlap.
//!
//! The store performs no geometric validation. Callers (the engine) keep the
//! invariants: ids are never reused, committed arrows are longer than the
//! commit threshold, and selections never point at removed elements.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EditorError;
use crate::geom::Point;

/// Unique identifier for an element. Assigned once, never reused.
pub type ElementId = Uuid;

/// Side a player belongs to; drives fill and text colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    #[default]
    Home,
    Away,
}

/// What is drawn inside a player marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Glyph {
    /// Two diagonal strokes.
    #[serde(alias = "X", alias = "x")]
    Cross,
    /// The player's label, centered.
    Number,
}

impl FromStr for Glyph {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cross" | "X" | "x" => Ok(Self::Cross),
            "number" => Ok(Self::Number),
            other => Err(EditorError::UnknownGlyph(other.to_string())),
        }
    }
}

/// Stroke style of an arrow shaft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrowStyle {
    #[default]
    Straight,
    Dashed,
    Arc,
    Zigzag,
}

impl ArrowStyle {
    /// Every style, in palette order.
    pub const ALL: [ArrowStyle; 4] = [Self::Straight, Self::Dashed, Self::Arc, Self::Zigzag];

    /// The style's tag as used in tool names and payloads.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Straight => "straight",
            Self::Dashed => "dashed",
            Self::Arc => "arc",
            Self::Zigzag => "zigzag",
        }
    }
}

impl fmt::Display for ArrowStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrowStyle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| EditorError::UnknownArrowStyle(s.to_string()))
    }
}

/// Kind-specific payload of an element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    /// Circular player marker.
    Player { glyph: Glyph, label: String, team: Team },
    /// Directional arrow spanning `length` pixels along the local x-axis,
    /// tail at `-length / 2`, head at `+length / 2`.
    Arrow { style: ArrowStyle, length: f64 },
}

/// A placed diagram element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Pivot x in surface coordinates.
    pub x: f64,
    /// Pivot y in surface coordinates.
    pub y: f64,
    /// Rotation in radians about the pivot. Never normalized.
    pub rotation: f64,
    /// Player or arrow payload.
    #[serde(flatten)]
    pub kind: ElementKind,
}

impl Element {
    /// A new unrotated player at `(x, y)` with a fresh id.
    #[must_use]
    pub fn player(x: f64, y: f64, glyph: Glyph, label: impl Into<String>, team: Team) -> Self {
        Self {
            id: Uuid::new_v4(),
            x,
            y,
            rotation: 0.0,
            kind: ElementKind::Player { glyph, label: label.into(), team },
        }
    }

    /// A new arrow pivoted at `(x, y)` with a fresh id.
    #[must_use]
    pub fn arrow(x: f64, y: f64, rotation: f64, style: ArrowStyle, length: f64) -> Self {
        Self { id: Uuid::new_v4(), x, y, rotation, kind: ElementKind::Arrow { style, length } }
    }

    /// The pivot as a point.
    #[must_use]
    pub fn pivot(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Move the pivot.
    pub fn set_pivot(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
    }

    /// Shaft length for arrows, `None` for players.
    #[must_use]
    pub fn arrow_length(&self) -> Option<f64> {
        match self.kind {
            ElementKind::Arrow { length, .. } => Some(length),
            ElementKind::Player { .. } => None,
        }
    }
}

/// Append-ordered store of the elements on the surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    elements: Vec<Element>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Append an element on top of everything else.
    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == *id)?;
        Some(self.elements.remove(index))
    }

    /// Return a reference to an element by id.
    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == *id)
    }

    /// Return a mutable reference to an element by id.
    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == *id)
    }

    /// Replace every element with copies of `elements`.
    ///
    /// The scene owns its copies, so the caller's slice (typically a history
    /// snapshot) stays untouched by later edits.
    pub fn replace_all(&mut self, elements: &[Element]) {
        self.elements = elements.to_vec();
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Elements in paint order (bottom first).
    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.elements.iter()
    }

    /// Elements in paint order as a slice.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of elements in the scene.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the scene has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
