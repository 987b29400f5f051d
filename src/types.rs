use serde::{Deserialize, Serialize};

/// A 2D point in surface pixel space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Builds a rect from (left, top, right, bottom). The corners are not reordered.
    pub fn from_corners(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// One raw inference result.
///
/// `bbox` is (left, top, right, bottom) in the model's coordinate space; the
/// renderer maps it onto the surface with a [`NormalizationRatio`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: [f32; 4],
    pub score: f32,
    pub class: i64,
}

impl Detection {
    pub fn new(bbox: [f32; 4], score: f32, class: i64) -> Self {
        Self { bbox, score, class }
    }
}

/// Per-frame (scaleX, scaleY) mapping detection coordinates into surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct NormalizationRatio {
    pub x: f32,
    pub y: f32,
}

impl NormalizationRatio {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for NormalizationRatio {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

impl From<[f32; 2]> for NormalizationRatio {
    fn from(value: [f32; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<NormalizationRatio> for [f32; 2] {
    fn from(value: NormalizationRatio) -> Self {
        [value.x, value.y]
    }
}

/// A detection after scaling into surface pixel space, with its resolved
/// display color and label text.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedBox {
    pub rect: Rect,
    pub class: i64,
    pub score: f32,
    pub color: String,
    pub label: String,
}
