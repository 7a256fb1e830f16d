//! Palette drops: the payload a palette button hands over, and the element it
//! creates.
//!
//! The payload is the button's data set serialized as JSON, e.g.
//! `{"type":"player","shape":"X","colorType":"home"}` or
//! `{"type":"player","shape":"number","text":"7","colorType":"away"}`.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use serde::Deserialize;

use crate::error::EditorError;
use crate::geom::Point;
use crate::scene::{ArrowStyle, Element, Glyph, Team};

/// Element family requested by a palette button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    Player,
    Arrow,
}

/// Creation payload from the palette.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PalettePayload {
    /// Element family.
    #[serde(rename = "type")]
    pub kind: PaletteKind,
    /// Player glyph (`X` / `cross` / `number`).
    #[serde(default)]
    pub shape: Option<Glyph>,
    /// Player label for the `number` glyph.
    #[serde(default)]
    pub text: Option<String>,
    /// Player team.
    #[serde(default)]
    pub color_type: Option<Team>,
    /// Arrow style.
    #[serde(default)]
    pub arrow_type: Option<ArrowStyle>,
}

impl PalettePayload {
    /// A player payload.
    #[must_use]
    pub fn player(glyph: Glyph, label: impl Into<String>, team: Team) -> Self {
        Self {
            kind: PaletteKind::Player,
            shape: Some(glyph),
            text: Some(label.into()),
            color_type: Some(team),
            arrow_type: None,
        }
    }

    /// Parse the JSON a palette button transfers on drop.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidPayload`] for malformed JSON, unknown
    /// kinds, or unknown tags.
    pub fn parse(json: &str) -> Result<Self, EditorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the element this payload describes, pivoted at `at`.
    ///
    /// Arrows get `arrow_length`, which the caller derives from the surface.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::MissingField`] when a player payload lacks its
    /// glyph or team.
    pub fn into_element(self, at: Point, arrow_length: f64) -> Result<Element, EditorError> {
        match self.kind {
            PaletteKind::Player => {
                let glyph = self.shape.ok_or(EditorError::MissingField { kind: "player", field: "shape" })?;
                let team = self.color_type.ok_or(EditorError::MissingField { kind: "player", field: "colorType" })?;
                Ok(Element::player(at.x, at.y, glyph, self.text.unwrap_or_default(), team))
            }
            PaletteKind::Arrow => {
                let style = self.arrow_type.unwrap_or_default();
                Ok(Element::arrow(at.x, at.y, 0.0, style, arrow_length))
            }
        }
    }
}
