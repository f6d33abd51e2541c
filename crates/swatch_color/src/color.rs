//! A parsed color that remembers which family it was written in.

use crate::convert::ColorFormat;
use crate::hsl::Hsl;
use crate::math::Oklch;
use crate::oklch::OklchStyle;
use crate::rgb::{Rgb, Srgb};

/// A color as parsed from one of the textual formats.
///
/// HEX, RGB and HSL are all views of gamma-encoded sRGB and convert between
/// each other directly. Crossing between sRGB and OKLCH goes through the
/// OKLab pipeline in [`crate::math`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Srgb(Srgb),
    Oklch(Oklch),
}

impl Color {
    /// Fallback for malformed input in a recognized format.
    pub const BLACK: Self = Self::Srgb(Srgb::BLACK);

    pub fn to_oklch(self) -> Oklch {
        match self {
            Self::Srgb(rgb) => rgb.to_oklch(),
            Self::Oklch(lch) => lch,
        }
    }

    /// sRGB without clamping; out-of-gamut OKLCH gives channels outside `[0, 1]`.
    pub fn to_srgb(self) -> Srgb {
        match self {
            Self::Srgb(rgb) => rgb,
            Self::Oklch(lch) => lch.to_srgb(),
        }
    }

    pub fn to_rgb(self) -> Rgb {
        self.to_srgb().quantize()
    }

    pub fn to_hsl(self) -> Hsl {
        Hsl::from_srgb(self.to_srgb().clamped())
    }

    /// Serialize into `target`. `style` only affects OKLCH output.
    pub fn format(self, target: ColorFormat, style: OklchStyle) -> String {
        match target {
            ColorFormat::Hex => self.to_rgb().to_hex(),
            ColorFormat::Rgb => self.to_rgb().to_string(),
            ColorFormat::Hsl => self.to_hsl().to_string(),
            ColorFormat::Oklch => self.to_oklch().to_css(style),
        }
    }
}

impl From<Srgb> for Color {
    fn from(rgb: Srgb) -> Self {
        Self::Srgb(rgb)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Srgb(rgb.into())
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Srgb(hsl.to_srgb())
    }
}

impl From<Oklch> for Color {
    fn from(lch: Oklch) -> Self {
        Self::Oklch(lch)
    }
}
