//! Raster painter backed by a `tiny-skia` pixmap.
//!
//! Anti-aliased fills and strokes with a Canvas2D-style transform stack.
//! `tiny-skia` has no text shaping, so labels are skipped (counted, not drawn).

#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform};
use tracing::trace;

use super::{Color, Painter, Path, PathOp, StrokeStyle, TextStyle};

/// Error returned by the raster backend.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The requested surface has a zero or unsupported dimension.
    #[error("cannot allocate a {width}x{height} pixmap")]
    InvalidSize { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy)]
struct State {
    transform: Transform,
    alpha: f64,
}

/// Painter that rasterizes into an owned RGBA pixmap.
pub struct PixmapPainter {
    pixmap: Pixmap,
    state: State,
    stack: Vec<State>,
    skipped_text: usize,
}

impl PixmapPainter {
    /// Allocate a transparent `width` x `height` surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidSize`] when either dimension is zero or
    /// the pixmap is too large to allocate.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap = Pixmap::new(width, height).ok_or(RenderError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            state: State { transform: Transform::identity(), alpha: 1.0 },
            stack: Vec::new(),
            skipped_text: 0,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha color of the pixel at `(x, y)`, `None` outside the surface.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color { r: c.red(), g: c.green(), b: c.blue(), a: c.alpha() })
    }

    /// Number of text draws skipped for lack of a font backend.
    #[must_use]
    pub fn skipped_text(&self) -> usize {
        self.skipped_text
    }

    /// The underlying pixmap.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Give up the painter and keep the pixels.
    #[must_use]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn paint(&self, color: Color) -> Paint<'static> {
        let alpha = (f64::from(color.a) * self.state.alpha.clamp(0.0, 1.0)).round() as u8;
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, alpha);
        paint.anti_alias = true;
        paint
    }
}

fn build_path(path: &Path) -> Option<tiny_skia::Path> {
    if path.is_empty() {
        return None;
    }
    let mut pb = PathBuilder::new();
    for op in path.ops() {
        match *op {
            PathOp::MoveTo(x, y) => pb.move_to(x as f32, y as f32),
            PathOp::LineTo(x, y) => pb.line_to(x as f32, y as f32),
            PathOp::QuadTo { cx, cy, x, y } => pb.quad_to(cx as f32, cy as f32, x as f32, y as f32),
            PathOp::Circle { cx, cy, r } => pb.push_circle(cx as f32, cy as f32, r as f32),
            PathOp::Rect { x, y, w, h } => {
                if let Some(rect) = Rect::from_xywh(x as f32, y as f32, w as f32, h as f32) {
                    pb.push_rect(rect);
                }
            }
            PathOp::Close => pb.close(),
        }
    }
    pb.finish()
}

impl Painter for PixmapPainter {
    type Error = RenderError;

    fn clear(&mut self, _width: f64, _height: f64) -> Result<(), RenderError> {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        Ok(())
    }

    fn save(&mut self) {
        self.stack.push(self.state);
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), RenderError> {
        self.state.transform = self.state.transform.pre_translate(dx as f32, dy as f32);
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<(), RenderError> {
        // tiny-skia rotations are in degrees.
        self.state.transform = self.state.transform.pre_rotate(radians.to_degrees() as f32);
        Ok(())
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.state.alpha = alpha;
    }

    fn fill(&mut self, path: &Path, color: Color) -> Result<(), RenderError> {
        let Some(p) = build_path(path) else {
            return Ok(());
        };
        let paint = self.paint(color);
        self.pixmap.fill_path(&p, &paint, FillRule::Winding, self.state.transform, None);
        Ok(())
    }

    fn stroke(&mut self, path: &Path, style: &StrokeStyle) -> Result<(), RenderError> {
        let Some(p) = build_path(path) else {
            return Ok(());
        };
        let dash = if style.dash.is_empty() {
            None
        } else {
            StrokeDash::new(style.dash.iter().map(|d| *d as f32).collect(), 0.0)
        };
        let stroke = Stroke { width: style.width as f32, dash, ..Stroke::default() };
        let paint = self.paint(style.color);
        self.pixmap.stroke_path(&p, &paint, &stroke, self.state.transform, None);
        Ok(())
    }

    fn fill_text(&mut self, text: &str, _x: f64, _y: f64, _style: &TextStyle) -> Result<(), RenderError> {
        trace!(text, "pixmap painter skipped text");
        self.skipped_text += 1;
        Ok(())
    }
}
