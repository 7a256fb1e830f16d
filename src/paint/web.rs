//! Browser canvas backend.
//!
//! This is the only place that touches [`CanvasRenderingContext2d`]. Fallible
//! `Canvas2D` calls propagate as `Result<(), JsValue>`.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::{Color, Painter, Path, PathOp, StrokeStyle, TextStyle};

fn trace_path(ctx: &CanvasRenderingContext2d, path: &Path) -> Result<(), JsValue> {
    ctx.begin_path();
    for op in path.ops() {
        match *op {
            PathOp::MoveTo(x, y) => ctx.move_to(x, y),
            PathOp::LineTo(x, y) => ctx.line_to(x, y),
            PathOp::QuadTo { cx, cy, x, y } => ctx.quadratic_curve_to(cx, cy, x, y),
            PathOp::Circle { cx, cy, r } => {
                ctx.move_to(cx + r, cy);
                ctx.arc(cx, cy, r, 0.0, 2.0 * PI)?;
            }
            PathOp::Rect { x, y, w, h } => ctx.rect(x, y, w, h),
            PathOp::Close => ctx.close_path(),
        }
    }
    Ok(())
}

fn line_dash(dash: &[f64]) -> js_sys::Array {
    let array = js_sys::Array::new();
    for d in dash {
        array.push(&JsValue::from_f64(*d));
    }
    array
}

impl Painter for CanvasRenderingContext2d {
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::translate(self, dx, dy)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::rotate(self, radians)
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.set_global_alpha(alpha);
    }

    fn fill(&mut self, path: &Path, color: Color) -> Result<(), JsValue> {
        trace_path(self, path)?;
        self.set_fill_style_str(&color.to_css());
        CanvasRenderingContext2d::fill(self);
        Ok(())
    }

    fn stroke(&mut self, path: &Path, style: &StrokeStyle) -> Result<(), JsValue> {
        trace_path(self, path)?;
        self.set_stroke_style_str(&style.color.to_css());
        self.set_line_width(style.width);
        self.set_line_dash(&line_dash(&style.dash))?;
        CanvasRenderingContext2d::stroke(self);
        self.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<(), JsValue> {
        self.set_fill_style_str(&style.color.to_css());
        self.set_font(&format!("bold {:.0}px sans-serif", style.size));
        self.set_text_align("center");
        self.set_text_baseline("middle");
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}
