//! Editor tunables: glyph geometry, history depth, colors.
//!
//! Defaults live in [`crate::consts`]. A host can hand over a partial JSON
//! object (missing fields keep their defaults) or overlay `COURTBOARD_*`
//! environment variables with [`EditorConfig::from_env`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    ARROW_HEAD_SIZE, ARROW_HIT_DIVISOR, DEFAULT_ARROW_LENGTH, DRAFT_ALPHA, DROPPED_ARROW_WIDTH_RATIO, HISTORY_DEPTH,
    PLAYER_HIT_SLACK, PLAYER_RADIUS, RESIZE_DELAY_MS, ROTATE_STEP, SELECTION_PADDING,
};
use crate::paint::Color;
use crate::scene::Team;

/// Colors used by the draw pass.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Fill for home players.
    pub home: Color,
    /// Fill for away players.
    pub away: Color,
    /// Shaft and head of arrows.
    pub arrow: Color,
    /// Glyph color on dark fills.
    pub text_light: Color,
    /// Glyph color on light fills.
    pub text_dark: Color,
    /// Selection outline.
    pub selection: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            home: Color::rgb(0xEF, 0x44, 0x44),
            away: Color::rgb(0x22, 0xD3, 0xEE),
            arrow: Color::rgb(0xEC, 0x48, 0x99),
            text_light: Color::rgb(0xF8, 0xFA, 0xFC),
            text_dark: Color::rgb(0x0F, 0x17, 0x2A),
            selection: Color::rgb(0xF9, 0x73, 0x16),
        }
    }
}

impl Palette {
    /// Marker fill for `team`.
    #[must_use]
    pub fn team_fill(&self, team: Team) -> Color {
        match team {
            Team::Home => self.home,
            Team::Away => self.away,
        }
    }

    /// Glyph color that contrasts with the fill for `team`.
    #[must_use]
    pub fn team_text(&self, team: Team) -> Color {
        match team {
            Team::Home => self.text_light,
            Team::Away => self.text_dark,
        }
    }
}

/// Tunables for one editing session.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Snapshots kept by the undo history (at least 1).
    pub history_depth: usize,
    /// Drawn radius of player markers.
    pub player_radius: f64,
    /// Arrowhead length; twice this is the minimum committed arrow length.
    pub arrow_head_size: f64,
    /// Cap on the reference arrow length used for drops and picking.
    pub default_arrow_length: f64,
    /// Radians added by one rotate action.
    pub rotate_step: f64,
    /// Gap between a glyph and its selection outline.
    pub selection_padding: f64,
    /// Global alpha of the live draft.
    pub draft_alpha: f64,
    /// Delay before re-measuring the surface after a layout change.
    pub resize_delay_ms: u64,
    /// Draw arc and zigzag arrows with their own shaft shapes instead of a
    /// straight segment.
    pub distinct_arrow_styles: bool,
    /// Draw colors.
    pub palette: Palette,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: HISTORY_DEPTH,
            player_radius: PLAYER_RADIUS,
            arrow_head_size: ARROW_HEAD_SIZE,
            default_arrow_length: DEFAULT_ARROW_LENGTH,
            rotate_step: ROTATE_STEP,
            selection_padding: SELECTION_PADDING,
            draft_alpha: DRAFT_ALPHA,
            resize_delay_ms: RESIZE_DELAY_MS,
            distinct_arrow_styles: false,
            palette: Palette::default(),
        }
    }
}

impl EditorConfig {
    /// Defaults overlaid with environment variables.
    ///
    /// - `COURTBOARD_HISTORY_DEPTH`
    /// - `COURTBOARD_PLAYER_RADIUS`
    /// - `COURTBOARD_ARROW_HEAD_SIZE`
    /// - `COURTBOARD_DEFAULT_ARROW_LENGTH`
    /// - `COURTBOARD_ROTATE_STEP` (radians)
    /// - `COURTBOARD_SELECTION_PADDING`
    /// - `COURTBOARD_DRAFT_ALPHA`
    /// - `COURTBOARD_RESIZE_DELAY_MS`
    /// - `COURTBOARD_DISTINCT_ARROW_STYLES` (`true` / `false`)
    ///
    /// Missing or unparsable values keep the default.
    #[must_use]
    pub fn from_env() -> Self {
        let d = Self::default();
        Self {
            history_depth: env_parse("COURTBOARD_HISTORY_DEPTH", d.history_depth),
            player_radius: env_parse("COURTBOARD_PLAYER_RADIUS", d.player_radius),
            arrow_head_size: env_parse("COURTBOARD_ARROW_HEAD_SIZE", d.arrow_head_size),
            default_arrow_length: env_parse("COURTBOARD_DEFAULT_ARROW_LENGTH", d.default_arrow_length),
            rotate_step: env_parse("COURTBOARD_ROTATE_STEP", d.rotate_step),
            selection_padding: env_parse("COURTBOARD_SELECTION_PADDING", d.selection_padding),
            draft_alpha: env_parse("COURTBOARD_DRAFT_ALPHA", d.draft_alpha),
            resize_delay_ms: env_parse("COURTBOARD_RESIZE_DELAY_MS", d.resize_delay_ms),
            distinct_arrow_styles: env_parse("COURTBOARD_DISTINCT_ARROW_STYLES", d.distinct_arrow_styles),
            palette: d.palette,
        }
    }

    /// Minimum draft length that commits on release; shorter gestures are taps.
    #[must_use]
    pub fn commit_threshold(&self) -> f64 {
        self.arrow_head_size * 2.0
    }

    /// Catch radius for players.
    #[must_use]
    pub fn player_pick_radius(&self) -> f64 {
        self.player_radius * PLAYER_HIT_SLACK
    }

    /// Reference arrow length for a surface `surface_width` pixels wide: a
    /// tenth of the width, capped at the default length.
    #[must_use]
    pub fn arrow_reference_length(&self, surface_width: f64) -> f64 {
        (surface_width * DROPPED_ARROW_WIDTH_RATIO).min(self.default_arrow_length)
    }

    /// Catch radius for an arrow of `length`; `floor` keeps short arrows
    /// grabbable (see [`Self::arrow_reference_length`]).
    #[must_use]
    pub fn arrow_pick_radius(&self, length: f64, floor: f64) -> f64 {
        length.max(floor) / ARROW_HIT_DIVISOR
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}
