#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// env_parse
// =============================================================

#[test]
fn env_parse_missing_returns_default() {
    let val: usize = env_parse("__COURTBOARD_TEST_MISSING__", 42);
    assert_eq!(val, 42);
}

#[test]
fn env_parse_present_valid() {
    unsafe { std::env::set_var("__COURTBOARD_TEST_VALID__", " 12.5 ") };
    let val: f64 = env_parse("__COURTBOARD_TEST_VALID__", 0.0);
    assert_eq!(val, 12.5);
    unsafe { std::env::remove_var("__COURTBOARD_TEST_VALID__") };
}

#[test]
fn env_parse_present_invalid_returns_default() {
    unsafe { std::env::set_var("__COURTBOARD_TEST_INVALID__", "lots") };
    let val: usize = env_parse("__COURTBOARD_TEST_INVALID__", 7);
    assert_eq!(val, 7);
    unsafe { std::env::remove_var("__COURTBOARD_TEST_INVALID__") };
}

// =============================================================
// EditorConfig
// =============================================================

#[test]
fn defaults_match_constants() {
    let c = EditorConfig::default();
    assert_eq!(c.history_depth, 20);
    assert_eq!(c.player_radius, 15.0);
    assert_eq!(c.arrow_head_size, 8.0);
    assert_eq!(c.rotate_step, std::f64::consts::FRAC_PI_4);
    assert!(!c.distinct_arrow_styles);
}

#[test]
fn derived_radii_and_threshold() {
    let c = EditorConfig::default();
    assert_eq!(c.commit_threshold(), 16.0);
    assert!((c.player_pick_radius() - 18.0).abs() < 1e-12);
    // Short arrows fall back to the floor.
    assert_eq!(c.arrow_pick_radius(10.0, 60.0), 60.0 / 1.8);
    assert_eq!(c.arrow_pick_radius(180.0, 60.0), 100.0);
}

#[test]
fn arrow_reference_length_tracks_narrow_surfaces() {
    let c = EditorConfig::default();
    assert_eq!(c.arrow_reference_length(1920.0), 60.0);
    assert_eq!(c.arrow_reference_length(200.0), 20.0);
    assert_eq!(c.arrow_reference_length(0.0), 0.0);
}

#[test]
fn from_env_overlays_known_keys() {
    unsafe {
        std::env::set_var("COURTBOARD_HISTORY_DEPTH", "5");
        std::env::set_var("COURTBOARD_DISTINCT_ARROW_STYLES", "true");
        std::env::set_var("COURTBOARD_PLAYER_RADIUS", "not-a-number");
    }
    let c = EditorConfig::from_env();
    unsafe {
        std::env::remove_var("COURTBOARD_HISTORY_DEPTH");
        std::env::remove_var("COURTBOARD_DISTINCT_ARROW_STYLES");
        std::env::remove_var("COURTBOARD_PLAYER_RADIUS");
    }
    assert_eq!(c.history_depth, 5);
    assert!(c.distinct_arrow_styles);
    assert_eq!(c.player_radius, 15.0);
}

#[test]
fn partial_json_keeps_defaults() {
    let c: EditorConfig =
        serde_json::from_str(r##"{"history_depth": 3, "palette": {"home": "#000000"}}"##).unwrap();
    assert_eq!(c.history_depth, 3);
    assert_eq!(c.palette.home, Color::rgb(0, 0, 0));
    assert_eq!(c.palette.away, Palette::default().away);
    assert_eq!(c.arrow_head_size, 8.0);
}

#[test]
fn team_colors_contrast() {
    let p = Palette::default();
    assert_eq!(p.team_fill(Team::Home), p.home);
    assert_eq!(p.team_text(Team::Home), p.text_light);
    assert_eq!(p.team_fill(Team::Away), p.away);
    assert_eq!(p.team_text(Team::Away), p.text_dark);
}
