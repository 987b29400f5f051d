//! Drawing target abstraction.
//!
//! Colors, line widths and fonts are passed with each call instead of being
//! held as context state, so a surface only has to remember its pixels.

use crate::palette::Color;
use crate::types::{Point, Rect};

/// Font family plus pixel size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    pub family: String,
    pub size_px: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, size_px: u32) -> Self {
        Self { family: family.into(), size_px }
    }

    /// `max(round(max(w, h) / 40), min_px)`
    pub fn for_surface(family: &str, width: u32, height: u32, min_px: u32) -> Self {
        let size = (width.max(height) as f32 / 40.0).round() as u32;
        Self::new(family, size.max(min_px))
    }
}

/// A mutable 2D drawing target.
///
/// Text is laid out with a top baseline: `draw_text` places the top of the
/// line box at `origin.y`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Outline centered on the rectangle edges.
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32);
    fn measure_text(&self, text: &str, font: &FontSpec) -> f32;
    fn draw_text(&mut self, origin: Point, text: &str, font: &FontSpec, color: Color);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, line_width: f32 },
    Text { origin: Point, text: String, font: FontSpec, color: Color },
}

/// Records draw calls as a display list instead of rasterizing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    /// Advance per character, as a fraction of the font size.
    char_advance: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, char_advance: 0.5, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, line_width });
    }

    fn measure_text(&self, text: &str, font: &FontSpec) -> f32 {
        text.chars().count() as f32 * font.size_px as f32 * self.char_advance
    }

    fn draw_text(&mut self, origin: Point, text: &str, font: &FontSpec, color: Color) {
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            font: font.clone(),
            color,
        });
    }
}
