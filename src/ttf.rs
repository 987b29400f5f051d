use rusttype::{point, Font, Scale};
use std::fs;
use std::path::Path;

pub struct FontRenderer {
    font: Font<'static>,
}

impl FontRenderer {
    pub fn try_load(family: &str) -> Option<Self> {
        // Family is like "Arial"; filenames follow "Arial.ttf"
        let paths = [
            format!("/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/{}.ttf", family),
            format!("/System/Library/Fonts/Supplemental/{}.ttf", family),
            format!("/usr/share/fonts/truetype/{}.ttf", family),
            format!("/usr/share/fonts/truetype/msttcorefonts/{}.ttf", family),
            format!("C:\\Windows\\Fonts\\{}.ttf", family),
            format!("{}.ttf", family),
        ];

        for p in paths.iter() {
            if Path::new(p).exists() {
                if let Ok(data) = fs::read(p) {
                    if let Some(renderer) = Self::from_bytes(data) {
                        log::info!("Loaded font from {}", p);
                        return Some(renderer);
                    }
                }
            }
        }

        log::warn!("Could not find font family '{}'. Falling back to bitmap.", family);
        None
    }

    pub fn from_bytes(data: Vec<u8>) -> Option<Self> {
        Font::try_from_vec(data).map(|font| Self { font })
    }

    /// Calls `plot(x, y, coverage)` for each covered pixel. `y` is the top of the line.
    pub fn rasterize(&self, x: f32, y: f32, text: &str, size_px: f32, mut plot: impl FnMut(i32, i32, f32)) {
        let scale = Scale::uniform(size_px);
        let v_metrics = self.font.v_metrics(scale);
        let start_point = point(x, y + v_metrics.ascent);

        for glyph in self.font.layout(text, scale, start_point) {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, v| {
                    if v > 0.0 {
                        plot(bb.min.x + gx as i32, bb.min.y + gy as i32, v);
                    }
                });
            }
        }
    }

    pub fn measure_width(&self, text: &str, size_px: f32) -> f32 {
        let scale = Scale::uniform(size_px);
        self.font
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|g| g.position().x + g.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Needs a system font; returns early when none of the search paths has one
    fn system_font() -> Option<FontRenderer> {
        ["Arial", "DejaVuSans", "dejavu/DejaVuSans", "liberation/LiberationSans-Regular"]
            .iter()
            .find_map(|family| FontRenderer::try_load(family))
    }

    #[test]
    fn measured_width_covers_drawn_glyphs() {
        let Some(fr) = system_font() else {
            return;
        };
        let text = "pupil - 87.5%";
        let size = 16.0;
        let width = fr.measure_width(text, size);
        assert!(width > 0.0);

        let (mut min_x, mut max_x, mut min_y) = (i32::MAX, i32::MIN, i32::MAX);
        fr.rasterize(10.0, 20.0, text, size, |x, y, v| {
            assert!(v > 0.0);
            min_x = min_x.min(x);
            max_x = max_x.max(x);
            min_y = min_y.min(y);
        });
        assert!(min_x >= 10 - 2, "glyphs start left of the origin: {}", min_x);
        assert!((max_x as f32) <= 10.0 + width + 2.0, "glyphs overrun measured width {}: {}", width, max_x);
        // Top baseline: nothing is drawn above the line
        assert!(min_y >= 20 - 2, "glyphs drawn above the top baseline: {}", min_y);
    }

    #[test]
    fn empty_text_measures_zero() {
        let Some(fr) = system_font() else {
            return;
        };
        assert_eq!(fr.measure_width("", 16.0), 0.0);
        let mut lit = 0;
        fr.rasterize(0.0, 0.0, "", 16.0, |_, _, _| lit += 1);
        assert_eq!(lit, 0);
    }
}
