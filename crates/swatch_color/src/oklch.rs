//! OKLCH serialization.

use std::fmt::{Display, Formatter};

use crate::math::Oklch;
use crate::rgb::{Rgb, Srgb};

/// Chroma below this prints as `0.000`; hue is meaningless there and is
/// written as `0` instead of whatever float noise `atan2` produced.
const ACHROMATIC_CHROMA: f64 = 0.0005;

/// How an OKLCH value is written out.
///
/// Both shapes exist in stored theme data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum OklchStyle {
    /// `oklch(62.3% 0.188 260)`
    #[default]
    Function,
    /// `62.3 0.188 260`, lightness in percent without the sign
    Bare,
}

impl Oklch {
    /// Serialize with one decimal of percent lightness, three decimals of
    /// chroma and integer hue.
    pub fn to_css(&self, style: OklchStyle) -> String {
        let (l, c, h) = self.display_components();
        match style {
            OklchStyle::Function => format!("oklch({l:.1}% {c:.3} {h:.0})"),
            OklchStyle::Bare => format!("{l:.1} {c:.3} {h:.0}"),
        }
    }

    fn display_components(&self) -> (f64, f64, f64) {
        let l = self.l * 100.0 + 0.0;
        let c = self.c + 0.0;
        let h = if c < ACHROMATIC_CHROMA || self.h.is_nan() {
            0.0
        } else {
            self.h.round().rem_euclid(360.0) + 0.0
        };
        (l, c, h)
    }

    pub fn to_srgb(self) -> Srgb {
        Srgb::from_oklch(self)
    }

    pub fn to_rgb(self) -> Rgb {
        Rgb::from_oklch(self)
    }
}

impl Display for Oklch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_css(OklchStyle::Function))
    }
}
