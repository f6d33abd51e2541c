//! sRGB color models: floating point ([`Srgb`]) and 8-bit ([`Rgb`]).

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ParseColorError;
use crate::math::{
    linear_channel_to_srgb, linear_rgb_to_oklab, oklab_to_linear_rgb, oklab_to_oklch,
    oklch_to_oklab, srgb_channel_to_linear, LinearRgb, Oklch,
};
use crate::parse::parse_hex;

/// Gamma-encoded sRGB with floating point channels, nominally `0.0..=1.0`.
///
/// Values converted from OKLCH are left unclamped so that further math keeps
/// full precision; call [`Srgb::clamped`] or [`Srgb::quantize`] for display.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Srgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn to_linear(self) -> LinearRgb {
        LinearRgb::new(
            srgb_channel_to_linear(self.r),
            srgb_channel_to_linear(self.g),
            srgb_channel_to_linear(self.b),
        )
    }

    pub fn from_linear(linear: LinearRgb) -> Self {
        Self::new(
            linear_channel_to_srgb(linear.r),
            linear_channel_to_srgb(linear.g),
            linear_channel_to_srgb(linear.b),
        )
    }

    pub fn to_oklch(self) -> Oklch {
        oklab_to_oklch(linear_rgb_to_oklab(self.to_linear()))
    }

    /// Convert from OKLCH without gamut mapping.
    pub fn from_oklch(lch: Oklch) -> Self {
        Self::from_linear(oklab_to_linear_rgb(oklch_to_oklab(lch)))
    }

    /// Clamp every channel into `0.0..=1.0`.
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    /// Round to 8-bit channels, clamping out-of-gamut values.
    pub fn quantize(self) -> Rgb {
        Rgb::new(
            quantize_channel(self.r),
            quantize_channel(self.g),
            quantize_channel(self.b),
        )
    }
}

fn quantize_channel(c: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

impl From<Rgb> for Srgb {
    fn from(rgb: Rgb) -> Self {
        Self::new(
            f64::from(rgb.r) / 255.0,
            f64::from(rgb.g) / 255.0,
            f64::from(rgb.b) / 255.0,
        )
    }
}

/// 8-bit sRGB, the model behind both `#rrggbb` and `rgb(r, g, b)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a packed `0xRRGGBB` value.
    pub const fn from_u32(rgb: u32) -> Self {
        Self::new(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Parse `#rrggbb` (the `#` is optional, digits are case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error unless the input holds exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        parse_hex(hex)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_oklch(self) -> Oklch {
        Srgb::from(self).to_oklch()
    }

    /// Nearest 8-bit color to an OKLCH value, clamped into gamut.
    pub fn from_oklch(lch: Oklch) -> Self {
        Srgb::from_oklch(lch).quantize()
    }

    /// Largest per-channel difference, used for tolerance checks.
    pub fn max_channel_delta(self, other: Self) -> u8 {
        self.r
            .abs_diff(other.r)
            .max(self.g.abs_diff(other.g))
            .max(self.b.abs_diff(other.b))
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(value: (u8, u8, u8)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}
