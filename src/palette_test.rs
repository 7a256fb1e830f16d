#![allow(clippy::float_cmp)]

use super::*;
use crate::scene::ElementKind;

fn at() -> Point {
    Point::new(100.0, 100.0)
}

// =============================================================
// parse
// =============================================================

#[test]
fn parses_cross_player_with_palette_spelling() {
    let payload = PalettePayload::parse(r#"{"type":"player","shape":"X","colorType":"home"}"#).unwrap();
    assert_eq!(payload.kind, PaletteKind::Player);
    assert_eq!(payload.shape, Some(Glyph::Cross));
    assert_eq!(payload.color_type, Some(Team::Home));
}

#[test]
fn parses_number_player() {
    let payload =
        PalettePayload::parse(r#"{"type":"player","shape":"number","text":"7","colorType":"away"}"#).unwrap();
    assert_eq!(payload, PalettePayload::player(Glyph::Number, "7", Team::Away));
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(PalettePayload::parse("{not json"), Err(EditorError::InvalidPayload(_))));
}

#[test]
fn rejects_unknown_kind_and_tags() {
    assert!(PalettePayload::parse(r#"{"type":"cone"}"#).is_err());
    assert!(PalettePayload::parse(r#"{"type":"player","shape":"star","colorType":"home"}"#).is_err());
    assert!(PalettePayload::parse(r#"{"type":"player","shape":"X","colorType":"neutral"}"#).is_err());
}

#[test]
fn extra_fields_are_ignored() {
    let payload = PalettePayload::parse(r#"{"type":"player","shape":"X","colorType":"home","draggable":"true"}"#);
    assert!(payload.is_ok());
}

// =============================================================
// into_element
// =============================================================

#[test]
fn player_payload_builds_player_at_drop_point() {
    let el = PalettePayload::player(Glyph::Cross, "", Team::Home).into_element(at(), 60.0).unwrap();
    assert_eq!((el.x, el.y, el.rotation), (100.0, 100.0, 0.0));
    assert_eq!(el.kind, ElementKind::Player { glyph: Glyph::Cross, label: String::new(), team: Team::Home });
}

#[test]
fn number_without_text_gets_empty_label() {
    let payload = PalettePayload::parse(r#"{"type":"player","shape":"number","colorType":"home"}"#).unwrap();
    let el = payload.into_element(at(), 60.0).unwrap();
    assert!(matches!(el.kind, ElementKind::Player { ref label, .. } if label.is_empty()));
}

#[test]
fn player_without_team_is_rejected() {
    let payload = PalettePayload::parse(r#"{"type":"player","shape":"X"}"#).unwrap();
    assert!(matches!(
        payload.into_element(at(), 60.0),
        Err(EditorError::MissingField { field: "colorType", .. })
    ));
}

#[test]
fn player_without_shape_is_rejected() {
    let payload = PalettePayload::parse(r#"{"type":"player","colorType":"home"}"#).unwrap();
    assert!(matches!(payload.into_element(at(), 60.0), Err(EditorError::MissingField { field: "shape", .. })));
}

#[test]
fn arrow_payload_uses_given_length_and_default_style() {
    let payload = PalettePayload::parse(r#"{"type":"arrow"}"#).unwrap();
    let el = payload.into_element(at(), 42.0).unwrap();
    assert_eq!(el.kind, ElementKind::Arrow { style: ArrowStyle::Straight, length: 42.0 });
}
