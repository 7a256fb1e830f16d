//! Error type for the engine's parsing surfaces.
//!
//! Event handlers on [`crate::engine::EngineCore`] never return errors: a
//! malformed request is logged and leaves the session untouched. These errors
//! surface only from the explicit parsers (`FromStr` impls, palette payloads,
//! color literals) so hosts can validate input up front.

/// Error returned when host-supplied input cannot be interpreted.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The palette drop payload was not valid JSON or had the wrong shape.
    #[error("invalid palette payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),
    /// The payload parsed but lacks a field its element kind requires.
    #[error("palette payload for {kind} is missing `{field}`")]
    MissingField { kind: &'static str, field: &'static str },
    /// The tool name is not `select` or `arrow:<style>`.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// The arrow style tag is not one of the known styles.
    #[error("unknown arrow style: {0}")]
    UnknownArrowStyle(String),
    /// The player glyph tag is not one of the known glyphs.
    #[error("unknown glyph: {0}")]
    UnknownGlyph(String),
    /// A color literal is not `#rrggbb` or `#rrggbbaa`.
    #[error("invalid color literal: {0}")]
    InvalidColor(String),
}
