use std::path::Path;

use image::{ImageResult, Rgba, RgbaImage};

use crate::font;
use crate::palette::Color;
use crate::surface::{FontSpec, Surface};
use crate::ttf::FontRenderer;
use crate::types::{Point, Rect};

/// `Surface` backed by an RGBA pixel buffer.
///
/// Rect edges snap to the nearest pixel boundary, so a pixel is covered when
/// its center lies inside the rectangle. Drawing outside the buffer is clipped.
pub struct RasterSurface {
    image: RgbaImage,
    background: Option<RgbaImage>,
    font: Option<FontRenderer>,
}

impl RasterSurface {
    /// Transparent surface of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: RgbaImage::new(width, height), background: None, font: None }
    }

    /// Surface that clears back to `background` instead of transparent black.
    pub fn with_background(background: RgbaImage) -> Self {
        Self { image: background.clone(), background: Some(background), font: None }
    }

    /// Without a TrueType font, text falls back to the built-in bitmap font.
    pub fn with_font(mut self, font: FontRenderer) -> Self {
        self.font = Some(font);
        self
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn save(&self, path: &Path) -> ImageResult<()> {
        self.image.save(path)
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let dst = self.image.get_pixel_mut(x as u32, y as u32);
        let mix = |src: u8, dst: u8| (src as f32 * alpha + dst as f32 * (1.0 - alpha)).round() as u8;
        let out_a = alpha + (dst[3] as f32 / 255.0) * (1.0 - alpha);
        *dst = Rgba([
            mix(color.r, dst[0]),
            mix(color.g, dst[1]),
            mix(color.b, dst[2]),
            (out_a * 255.0).round() as u8,
        ]);
    }

    fn fill_span(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Color) {
        let (w, h) = (self.image.width() as i64, self.image.height() as i64);
        for y in y0.max(0)..y1.min(h) {
            for x in x0.max(0)..x1.min(w) {
                self.blend(x, y, color, 1.0);
            }
        }
    }
}

/// Pixel bounds (x0, y0, x1, y1), half-open, for a rect that may have negative extent.
fn pixel_bounds(rect: &Rect) -> (i64, i64, i64, i64) {
    let (l, r) = if rect.width < 0.0 { (rect.right(), rect.x) } else { (rect.x, rect.right()) };
    let (t, b) = if rect.height < 0.0 { (rect.bottom(), rect.y) } else { (rect.y, rect.bottom()) };
    (l.round() as i64, t.round() as i64, r.round() as i64, b.round() as i64)
}

impl Surface for RasterSurface {
    fn width(&self) -> u32 {
        self.image.width()
    }

    fn height(&self) -> u32 {
        self.image.height()
    }

    fn clear(&mut self) {
        match &self.background {
            Some(bg) => self.image.clone_from(bg),
            None => self.image.pixels_mut().for_each(|p| *p = Rgba([0, 0, 0, 0])),
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0, x1, y1) = pixel_bounds(&rect);
        self.fill_span(x0, y0, x1, y1, color);
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f32) {
        let half = line_width / 2.0;
        let (l, t, r, b) = pixel_bounds(&rect);
        let outer = (
            (l as f32 - half).round() as i64,
            (t as f32 - half).round() as i64,
            (r as f32 + half).round() as i64,
            (b as f32 + half).round() as i64,
        );
        let inner = (
            (l as f32 + half).round() as i64,
            (t as f32 + half).round() as i64,
            (r as f32 - half).round() as i64,
            (b as f32 - half).round() as i64,
        );

        // Bands are disjoint so translucent strokes blend once per pixel
        self.fill_span(outer.0, outer.1, outer.2, inner.1, color);
        self.fill_span(outer.0, inner.3.max(inner.1), outer.2, outer.3, color);
        let (mid0, mid1) = (inner.1, inner.3.max(inner.1));
        self.fill_span(outer.0, mid0, inner.0, mid1, color);
        self.fill_span(inner.2.max(inner.0), mid0, outer.2, mid1, color);
    }

    fn measure_text(&self, text: &str, spec: &FontSpec) -> f32 {
        match &self.font {
            Some(fr) => fr.measure_width(text, spec.size_px as f32),
            None => font::measure_text_width(text, font::scale_for_size(spec.size_px)) as f32,
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, spec: &FontSpec, color: Color) {
        if let Some(fr) = self.font.take() {
            fr.rasterize(origin.x, origin.y, text, spec.size_px as f32, |x, y, v| {
                self.blend(x as i64, y as i64, color, v);
            });
            self.font = Some(fr);
        } else {
            let scale = font::scale_for_size(spec.size_px);
            // Vertically center the glyphs in the line box
            let pad = (spec.size_px as i64 - (5 * scale) as i64).max(0) / 2;
            let (ox, oy) = (origin.x.round() as i64, origin.y.round() as i64 + pad);
            font::for_each_pixel(text, scale, |x, y| {
                self.blend(ox + x as i64, oy + y as i64, color, 1.0);
            });
        }
    }
}
