//! Drawing backends.
//!
//! The renderer talks to a [`Painter`]: a small, Canvas2D-shaped surface with
//! a transform stack, global alpha, path fill/stroke and text. Three backends
//! implement it:
//!
//! | Backend | Use |
//! |---------|-----|
//! | [`DisplayList`] | Records every call; inspection and tests |
//! | [`PixmapPainter`] | Native raster target on `tiny-skia` |
//! | `CanvasRenderingContext2d` | Browser canvas (`web` feature) |


mod display_list;
mod pixmap;
#[cfg(feature = "web")]
mod web;

pub use display_list::{DisplayList, DrawCommand};
pub use pixmap::{PixmapPainter, RenderError};

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::EditorError;

/// Straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// An opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS `rgba()` form, for canvas style strings.
    #[must_use]
    pub fn to_css(self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, f64::from(self.a) / 255.0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = EditorError;

    /// Parse `#rrggbb` or `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EditorError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !(hex.len() == 6 || hex.len() == 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Self { r: channel(0)?, g: channel(2)?, b: channel(4)?, a })
    }
}

impl TryFrom<String> for Color {
    type Error = EditorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One step of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(f64, f64),
    LineTo(f64, f64),
    /// Quadratic curve through control `(cx, cy)` to `(x, y)`.
    QuadTo { cx: f64, cy: f64, x: f64, y: f64 },
    /// Closed circle as its own subpath.
    Circle { cx: f64, cy: f64, r: f64 },
    /// Axis-aligned rectangle as its own subpath.
    Rect { x: f64, y: f64, w: f64, h: f64 },
    Close,
}

/// A path in the painter's current local coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    ops: Vec<PathOp>,
}

impl Path {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A path holding a single circle.
    #[must_use]
    pub fn circle(cx: f64, cy: f64, r: f64) -> Self {
        Self { ops: vec![PathOp::Circle { cx, cy, r }] }
    }

    /// A path holding a single rectangle.
    #[must_use]
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { ops: vec![PathOp::Rect { x, y, w, h }] }
    }

    #[must_use]
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.ops.push(PathOp::MoveTo(x, y));
        self
    }

    #[must_use]
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.ops.push(PathOp::LineTo(x, y));
        self
    }

    #[must_use]
    pub fn quad_to(mut self, cx: f64, cy: f64, x: f64, y: f64) -> Self {
        self.ops.push(PathOp::QuadTo { cx, cy, x, y });
        self
    }

    #[must_use]
    pub fn close(mut self) -> Self {
        self.ops.push(PathOp::Close);
        self
    }

    #[must_use]
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Stroke parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f64,
    /// On/off dash lengths; empty for a solid line.
    pub dash: Vec<f64>,
}

impl StrokeStyle {
    /// A solid stroke.
    #[must_use]
    pub fn solid(color: Color, width: f64) -> Self {
        Self { color, width, dash: Vec::new() }
    }
}

/// Text parameters. Text is centered on the given point in both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    /// Font size in pixels (bold sans-serif).
    pub size: f64,
}

/// A drawing surface with a Canvas2D-like transform stack.
///
/// `translate` and `rotate` compose onto the current transform; `save` and
/// `restore` push and pop the transform together with the global alpha.
pub trait Painter {
    /// Backend failure type.
    type Error;

    /// Clear `width` x `height` surface pixels to transparent.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the surface cannot be cleared.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Push the current transform and alpha.
    fn save(&mut self);

    /// Pop the transform and alpha pushed by the matching [`Painter::save`].
    fn restore(&mut self);

    /// Translate the current transform.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the transform cannot be applied.
    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Self::Error>;

    /// Rotate the current transform by `radians` (clockwise with y down).
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the transform cannot be applied.
    fn rotate(&mut self, radians: f64) -> Result<(), Self::Error>;

    /// Set the alpha multiplied into every subsequent draw.
    fn set_alpha(&mut self, alpha: f64);

    /// Fill `path` with `color` (non-zero winding).
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the path cannot be filled.
    fn fill(&mut self, path: &Path, color: Color) -> Result<(), Self::Error>;

    /// Stroke `path`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the path cannot be stroked.
    fn stroke(&mut self, path: &Path, style: &StrokeStyle) -> Result<(), Self::Error>;

    /// Draw `text` centered on `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns the backend's error if the text cannot be drawn.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<(), Self::Error>;
}
