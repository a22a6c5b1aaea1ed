//! RGBA color values used by style layers and themes

use serde::{Deserialize, Serialize};

/// A linear RGBA color with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    /// 128/255 gray
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from 0-255 channel values
    pub fn from_rgb8(r: f32, g: f32, b: f32) -> Self {
        Self::rgb(r / 255.0, g / 255.0, b / 255.0)
    }

    /// Create a color from 0-255 channel values, including alpha
    pub fn from_rgba8(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self::rgba(r / 255.0, g / 255.0, b / 255.0, a / 255.0)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    ///
    /// Anything that is not six hex digits yields white.
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Self::WHITE;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) => Self::from_rgb8(r as f32, g as f32, b as f32),
            _ => Self::WHITE,
        }
    }

    /// Opaque color from an `[r, g, b]` array as edited by color pickers
    pub fn from_rgb_array(rgb: [f32; 3]) -> Self {
        Self::rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Drop alpha and return `[r, g, b]`
    pub fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    /// Lighten the color by mixing with white
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            r: self.r + (1.0 - self.r) * amount,
            g: self.g + (1.0 - self.g) * amount,
            b: self.b + (1.0 - self.b) * amount,
            a: self.a,
        }
    }

    /// Darken the color by scaling towards black
    pub fn darken(self, amount: f32) -> Self {
        Self {
            r: self.r * (1.0 - amount),
            g: self.g * (1.0 - amount),
            b: self.b * (1.0 - amount),
            a: self.a,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}
