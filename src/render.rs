//! Rendering: draws the scene, the selection outline and the live draft.
//!
//! This module receives read-only views of session state and produces pixels
//! through a [`Painter`]; it never mutates anything. Each element is drawn in
//! its local frame (translated to the pivot, rotated by `rotation`).
//!
//! Draw order: clear, elements in paint order, the selection outline (select
//! tool only), then the draft on top at reduced opacity.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::EditorConfig;
use crate::consts::{ARROW_DASH, GLYPH_LINE_WIDTH, SELECTION_LINE_WIDTH};
use crate::input::Tool;
use crate::paint::{Painter, Path, StrokeStyle, TextStyle};
use crate::scene::{ArrowStyle, Element, ElementId, ElementKind, Glyph, Scene, Team};
use crate::viewport::Viewport;

/// Number of segments in a zigzag shaft.
const ZIGZAG_SEGMENTS: u32 = 4;

/// Everything one draw pass reads.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub scene: &'a Scene,
    pub selection: Option<ElementId>,
    pub tool: Tool,
    pub draft: Option<&'a Element>,
    pub viewport: Viewport,
}

/// Draw the full frame.
///
/// Nothing is drawn while the surface has no size.
///
/// # Errors
///
/// Returns the painter's error if any drawing call fails.
pub fn draw<P: Painter>(painter: &mut P, frame: &Frame<'_>, config: &EditorConfig) -> Result<(), P::Error> {
    if !frame.viewport.is_ready() {
        return Ok(());
    }
    painter.clear(frame.viewport.width, frame.viewport.height)?;

    for el in frame.scene {
        draw_element(painter, el, config)?;
    }

    if frame.tool.is_select() {
        if let Some(el) = frame.selection.and_then(|id| frame.scene.get(&id)) {
            in_local_frame(painter, el, |p| draw_selection(p, el, config))?;
        }
    }

    if let Some(draft) = frame.draft {
        painter.save();
        painter.set_alpha(config.draft_alpha);
        let result = draw_element(painter, draft, config);
        painter.restore();
        result?;
    }

    Ok(())
}

/// Draw one element in its local frame.
///
/// # Errors
///
/// Returns the painter's error if any drawing call fails.
pub fn draw_element<P: Painter>(painter: &mut P, el: &Element, config: &EditorConfig) -> Result<(), P::Error> {
    in_local_frame(painter, el, |p| match &el.kind {
        ElementKind::Player { glyph, label, team } => draw_player(p, *glyph, label, *team, config),
        ElementKind::Arrow { style, length } => draw_arrow(p, *style, *length, config),
    })
}

/// Run `f` with the painter translated to the element's pivot and rotated by
/// its rotation; the previous state is restored even when `f` fails.
fn in_local_frame<P, F>(painter: &mut P, el: &Element, f: F) -> Result<(), P::Error>
where
    P: Painter,
    F: FnOnce(&mut P) -> Result<(), P::Error>,
{
    painter.save();
    let result = painter
        .translate(el.x, el.y)
        .and_then(|()| painter.rotate(el.rotation))
        .and_then(|()| f(painter));
    painter.restore();
    result
}

// =============================================================
// Players
// =============================================================

fn draw_player<P: Painter>(
    p: &mut P,
    glyph: Glyph,
    label: &str,
    team: Team,
    config: &EditorConfig,
) -> Result<(), P::Error> {
    let r = config.player_radius;
    let text_color = config.palette.team_text(team);

    p.fill(&Path::circle(0.0, 0.0, r), config.palette.team_fill(team))?;

    match glyph {
        Glyph::Cross => {
            let d = r * 0.7;
            let cross = Path::new().move_to(-d, -d).line_to(d, d).move_to(d, -d).line_to(-d, d);
            p.stroke(&cross, &StrokeStyle::solid(text_color, GLYPH_LINE_WIDTH))
        }
        Glyph::Number if label.is_empty() => Ok(()),
        // Nudged down a pixel to sit optically centered.
        Glyph::Number => p.fill_text(label, 0.0, 1.0, &TextStyle { color: text_color, size: r * 1.2 }),
    }
}

// =============================================================
// Arrows
// =============================================================

fn draw_arrow<P: Painter>(p: &mut P, style: ArrowStyle, length: f64, config: &EditorConfig) -> Result<(), P::Error> {
    let color = config.palette.arrow;
    let mut stroke = StrokeStyle::solid(color, GLYPH_LINE_WIDTH);
    if style == ArrowStyle::Dashed {
        stroke.dash = ARROW_DASH.to_vec();
    }
    p.stroke(&shaft_path(style, length, config), &stroke)?;

    let tip = length / 2.0;
    let h = config.arrow_head_size;
    let head = Path::new()
        .move_to(tip, 0.0)
        .line_to(tip - h, -h / 1.5)
        .line_to(tip - h, h / 1.5)
        .close();
    p.fill(&head, color)
}

/// Shaft from the tail at `-length / 2` to the head at `+length / 2`.
///
/// Arc and zigzag share the straight segment unless
/// [`EditorConfig::distinct_arrow_styles`] is set.
fn shaft_path(style: ArrowStyle, length: f64, config: &EditorConfig) -> Path {
    let start = -length / 2.0;
    let end = length / 2.0;
    let path = Path::new().move_to(start, 0.0);

    match style {
        ArrowStyle::Arc if config.distinct_arrow_styles => path.quad_to(0.0, -length / 2.5, end, 0.0),
        ArrowStyle::Zigzag if config.distinct_arrow_styles => {
            let segment = length / f64::from(ZIGZAG_SEGMENTS);
            let amplitude = config.player_radius * 0.5;
            (0..ZIGZAG_SEGMENTS).fold(path, |path, i| {
                let x = start + f64::from(i + 1) * segment;
                if i + 1 == ZIGZAG_SEGMENTS {
                    path.line_to(x, 0.0)
                } else if i % 2 == 0 {
                    path.line_to(x, -amplitude)
                } else {
                    path.line_to(x, amplitude)
                }
            })
        }
        ArrowStyle::Straight | ArrowStyle::Dashed | ArrowStyle::Arc | ArrowStyle::Zigzag => path.line_to(end, 0.0),
    }
}

// =============================================================
// Selection
// =============================================================

fn draw_selection<P: Painter>(p: &mut P, el: &Element, config: &EditorConfig) -> Result<(), P::Error> {
    let pad = config.selection_padding;
    let outline = match el.kind {
        ElementKind::Player { .. } => Path::circle(0.0, 0.0, config.player_radius + pad),
        ElementKind::Arrow { length, .. } => {
            let half_len = length / 2.0;
            let half_width = config.arrow_head_size * 1.5;
            Path::rect(
                -half_len - pad,
                -half_width - pad,
                length + 2.0 * pad,
                half_width * 2.0 + 2.0 * pad,
            )
        }
    };
    p.stroke(&outline, &StrokeStyle::solid(config.palette.selection, SELECTION_LINE_WIDTH))
}
