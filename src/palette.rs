//! Class index to display color lookup.

use std::fmt;

/// Ultralytics detection palette.
pub const ULTRALYTICS_PALETTE: [&str; 20] = [
    "#FF3838", "#FF9D97", "#FF701F", "#FFB21D", "#CFD231", "#48F90A", "#92CC17", "#3DDB86",
    "#1A9334", "#00D4BB", "#2C99A8", "#00C2FF", "#344593", "#6473FF", "#0018EC", "#8438FF",
    "#520085", "#CB38FF", "#FF95C8", "#FF37C7",
];

/// RGB color with a fractional alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::opaque(255, 255, 255);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Fixed, non-empty color table. Any class index resolves via `index mod len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    /// Returns `None` for an empty table.
    pub fn new(colors: Vec<String>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn color_for(&self, class_index: i64) -> &str {
        let idx = class_index.rem_euclid(self.colors.len() as i64) as usize;
        &self.colors[idx]
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: ULTRALYTICS_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Parses `#RRGGBB` (the `#` is optional, digits are case-insensitive) into an opaque color.
pub fn parse_hex(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some(Color::opaque(channel(0)?, channel(2)?, channel(4)?))
}

/// Converts a hex color into an RGBA color with the given alpha.
/// Malformed input yields `None`, which callers treat as "no fill".
pub fn to_translucent(hex: &str, alpha: f32) -> Option<Color> {
    parse_hex(hex).map(|c| c.with_alpha(alpha))
}
