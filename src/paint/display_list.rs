use std::convert::Infallible;

use super::{Color, Painter, Path, StrokeStyle, TextStyle};

/// One recorded [`Painter`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear { width: f64, height: f64 },
    Save,
    Restore,
    Translate { dx: f64, dy: f64 },
    Rotate { radians: f64 },
    SetAlpha(f64),
    Fill { path: Path, color: Color },
    Stroke { path: Path, style: StrokeStyle },
    Text { text: String, x: f64, y: f64, style: TextStyle },
}

/// Painter that records calls instead of producing pixels.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Fill calls, in order.
    pub fn fills(&self) -> impl Iterator<Item = (&Path, Color)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill { path, color } => Some((path, *color)),
            _ => None,
        })
    }

    /// Stroke calls, in order.
    pub fn strokes(&self) -> impl Iterator<Item = (&Path, &StrokeStyle)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Stroke { path, style } => Some((path, style)),
            _ => None,
        })
    }

    /// Text calls, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Painter for DisplayList {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Clear { width, height });
        Ok(())
    }

    fn save(&mut self) {
        self.commands.push(DrawCommand::Save);
    }

    fn restore(&mut self) {
        self.commands.push(DrawCommand::Restore);
    }

    fn translate(&mut self, dx: f64, dy: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Translate { dx, dy });
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Rotate { radians });
        Ok(())
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.commands.push(DrawCommand::SetAlpha(alpha));
    }

    fn fill(&mut self, path: &Path, color: Color) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Fill { path: path.clone(), color });
        Ok(())
    }

    fn stroke(&mut self, path: &Path, style: &StrokeStyle) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Stroke { path: path.clone(), style: style.clone() });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<(), Infallible> {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y, style: style.clone() });
        Ok(())
    }
}
