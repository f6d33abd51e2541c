//! Color space math
//!
//! The numeric pipeline behind every conversion:
//!
//! ```text
//! sRGB (gamma) <-> linear RGB <-> OKLab <-> OKLCH
//! ```
//!
//! Nothing in this module clamps. An out-of-gamut OKLCH color produces linear
//! RGB outside `[0, 1]`, and NaN or infinite input propagates to the output.
//! Clamping for display belongs to whoever quantizes the result.
//!
//! The OKLab matrices are the canonical ones published with the color space
//! and must stay as written: stored theme data was produced with them.

/// Linear-light RGB, nominally in `[0, 1]` per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// A color in the OKLab space (cartesian).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oklab {
    /// Perceptual lightness, `0.0..=1.0` for in-gamut colors
    pub l: f64,
    /// Green (negative) to red (positive) axis
    pub a: f64,
    /// Blue (negative) to yellow (positive) axis
    pub b: f64,
}

impl Oklab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// A color in the OKLCH space (polar form of OKLab).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Oklch {
    /// Perceptual lightness, `0.0..=1.0` for in-gamut colors
    pub l: f64,
    /// Chroma, `>= 0.0`, typically below `0.4`
    pub c: f64,
    /// Hue angle in degrees, `0.0..360.0`
    pub h: f64,
}

impl Oklch {
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

/// Decode one gamma-encoded sRGB channel to linear light.
pub fn srgb_channel_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode one linear-light channel with the sRGB transfer curve.
pub fn linear_channel_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

pub fn linear_rgb_to_oklab(rgb: LinearRgb) -> Oklab {
    let LinearRgb { r, g, b } = rgb;

    // Linear RGB to LMS cone response
    let l = 0.4122214708 * r + 0.5363325363 * g + 0.0514459929 * b;
    let m = 0.2119034982 * r + 0.6806995451 * g + 0.1073969566 * b;
    let s = 0.0883024619 * r + 0.2817188376 * g + 0.6299787005 * b;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    Oklab {
        l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
        a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
        b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
    }
}

pub fn oklab_to_linear_rgb(lab: Oklab) -> LinearRgb {
    let Oklab { l, a, b } = lab;

    let l_ = l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = l - 0.0894841775 * a - 1.2914855480 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    LinearRgb {
        r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
        g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
        b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
    }
}

/// Cartesian to polar. Hue is normalized to `[0, 360)`.
pub fn oklab_to_oklch(lab: Oklab) -> Oklch {
    let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
    let h = lab.b.atan2(lab.a).to_degrees().rem_euclid(360.0);
    Oklch { l: lab.l, c, h }
}

pub fn oklch_to_oklab(lch: Oklch) -> Oklab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Oklab {
        l: lch.l,
        a: lch.c * cos,
        b: lch.c * sin,
    }
}
