//! Tolerant string-to-string conversion.
//!
//! Theme data arrives from an external registry and may be partially
//! corrupt, so nothing here fails:
//!
//! - unrecognized strings (font stacks, lengths, keywords) pass through
//!   unchanged
//! - recognized but malformed colors become black

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::color::Color;
use crate::oklch::OklchStyle;
use crate::parse::{detect_format, parse_color};

/// The four textual color formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#rrggbb`
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h s% l%)`
    Hsl,
    /// `oklch(L% C H)` or bare `L C H`
    Oklch,
}

impl ColorFormat {
    /// Stable lowercase id.
    pub fn id(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Oklch => "oklch",
        }
    }

    pub fn all() -> &'static [ColorFormat] {
        const FORMATS: [ColorFormat; 4] = [
            ColorFormat::Hex,
            ColorFormat::Rgb,
            ColorFormat::Hsl,
            ColorFormat::Oklch,
        ];
        &FORMATS
    }
}

impl Display for ColorFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ColorFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|format| format.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown color format `{s}` (expected hex, rgb, hsl or oklch)"))
    }
}

/// Convert `input` to `target`, writing OKLCH as `oklch(L% C H)`.
pub fn convert(input: &str, target: ColorFormat) -> String {
    convert_with(input, target, OklchStyle::Function)
}

/// Convert `input` to `target` with an explicit OKLCH output style.
pub fn convert_with(input: &str, target: ColorFormat, style: OklchStyle) -> String {
    if detect_format(input).is_none() {
        tracing::trace!(input, "not a color, passing through");
        return input.to_string();
    }

    let color = parse_color(input).unwrap_or_else(|err| {
        tracing::debug!(input, %err, "malformed color, falling back to black");
        Color::BLACK
    });
    color.format(target, style)
}
