//! Frame renderer: draws detection boxes with labels and derives the gaze direction.

use std::path::Path;

use crate::config::AppConfig;
use crate::error::{ConfigError, DetectionError};
use crate::frame::unpack_detections;
use crate::gaze::{Gaze, GazeCandidate, GazeCandidates, GazeDirection, GazeRoles};
use crate::labels::LabelMap;
use crate::palette::{parse_hex, to_translucent, Color, Palette};
use crate::surface::{FontSpec, Surface};
use crate::types::{Detection, NormalizationRatio, Point, Rect, RenderedBox};

/// Outline and badge color when a palette entry does not parse.
const FALLBACK_SOLID: Color = Color::opaque(0, 0, 0);

/// `score * 100` to one decimal, ties rounded up.
fn format_percent(score: f32) -> String {
    let tenths = (score as f64 * 1000.0 + 0.5).floor();
    format!("{:.1}", tenths / 10.0)
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub font_family: String,
    pub font_min_px: u32,
    pub fill_alpha: f32,
    pub min_line_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_min_px: 14,
            fill_alpha: 0.2,
            min_line_width: 2.5,
        }
    }
}

/// Everything one `render_frame` call produced.
#[derive(Debug, Clone, Default)]
pub struct FrameReport {
    /// Boxes above the threshold, in scan order.
    pub boxes: Vec<RenderedBox>,
    pub gaze: Option<Gaze>,
}

/// Holds only immutable lookup tables; every call is a function of its inputs
/// plus the surface it draws on.
#[derive(Debug, Clone)]
pub struct FrameRenderer {
    labels: LabelMap,
    palette: Palette,
    roles: GazeRoles,
    options: RenderOptions,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new(LabelMap::default(), Palette::default(), GazeRoles::default())
    }
}

impl FrameRenderer {
    pub fn new(labels: LabelMap, palette: Palette, roles: GazeRoles) -> Self {
        Self { labels, palette, roles, options: RenderOptions::default() }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn from_config(config: &AppConfig, base: &Path) -> Result<Self, ConfigError> {
        let options = RenderOptions {
            font_family: config.render.font_family.clone(),
            font_min_px: config.render.font_min_px,
            fill_alpha: config.render.fill_alpha,
            min_line_width: config.render.min_line_width,
        };
        Ok(Self::new(config.label_map(base)?, config.palette(), config.gaze.clone()).with_options(options))
    }

    pub fn labels(&self) -> &LabelMap {
        &self.labels
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// `max(min(w, h) / 200, min_line_width)`
    pub fn line_width(&self, width: u32, height: u32) -> f32 {
        (width.min(height) as f32 / 200.0).max(self.options.min_line_width)
    }

    pub fn font_for(&self, width: u32, height: u32) -> FontSpec {
        FontSpec::for_surface(&self.options.font_family, width, height, self.options.font_min_px)
    }

    /// Draws one frame and returns the gaze direction, if both an eye and a
    /// pupil cleared the threshold.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        class_threshold: f32,
        detections: &[Detection],
        ratio: NormalizationRatio,
    ) -> Option<GazeDirection> {
        self.render_frame(surface, class_threshold, detections, ratio)
            .gaze
            .map(|g| g.direction)
    }

    /// Same as [`render_frame`](Self::render_frame) for packed arrays. Malformed
    /// input is rejected before the surface is touched.
    pub fn render_packed<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        class_threshold: f32,
        boxes: &[f32],
        scores: &[f32],
        classes: &[i64],
        ratio: NormalizationRatio,
    ) -> Result<FrameReport, DetectionError> {
        let detections = unpack_detections(boxes, scores, classes)?;
        Ok(self.render_frame(surface, class_threshold, &detections, ratio))
    }

    pub fn render_frame<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        class_threshold: f32,
        detections: &[Detection],
        ratio: NormalizationRatio,
    ) -> FrameReport {
        surface.clear();

        let (width, height) = (surface.width(), surface.height());
        let font = self.font_for(width, height);
        let line_width = self.line_width(width, height);
        let scale_x = width as f32 * ratio.x;
        let scale_y = height as f32 * ratio.y;

        let mut report = FrameReport::default();
        let mut groups = GazeCandidates::new();

        for det in detections.iter().filter(|d| d.score > class_threshold) {
            let name = self.labels.name(det.class);
            let color = self.palette.color_for(det.class);

            let [x1, y1, x2, y2] = det.bbox;
            let rect = Rect::from_corners(x1 * scale_x, y1 * scale_y, x2 * scale_x, y2 * scale_y);
            let label = format!("{} - {}%", name, format_percent(det.score));

            self.draw_box(surface, &rect, color, &label, &font, line_width);

            if let Some(role) = self.roles.role_of(&name) {
                groups.push(role, GazeCandidate::from_rect(&rect, det.score));
            }

            report.boxes.push(RenderedBox {
                rect,
                class: det.class,
                score: det.score,
                color: color.to_string(),
                label,
            });
        }

        report.gaze = groups.resolve();
        if let Some(gaze) = &report.gaze {
            log::debug!(
                "gaze {}: eye center {:.1}, pupil center {:.1}",
                gaze.direction,
                gaze.eye.center.x,
                gaze.pupil.center.x
            );
        }
        report
    }

    // Fill, outline, label background, label text. The order is the layering.
    fn draw_box<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        rect: &Rect,
        hex: &str,
        label: &str,
        font: &FontSpec,
        line_width: f32,
    ) {
        if let Some(fill) = to_translucent(hex, self.options.fill_alpha) {
            surface.fill_rect(*rect, fill);
        }

        let solid = parse_hex(hex).unwrap_or(FALLBACK_SOLID);
        surface.stroke_rect(*rect, solid, line_width);

        let text_width = surface.measure_text(label, font);
        let text_height = font.size_px as f32;
        let y_text = rect.y - (text_height + line_width);
        let origin = Point::new(rect.x - 1.0, y_text.max(0.0));

        let badge = Rect::new(origin.x, origin.y, text_width + line_width, text_height + line_width);
        surface.fill_rect(badge, solid);
        surface.draw_text(origin, label, font, Color::WHITE);
    }
}
