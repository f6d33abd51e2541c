//! Format detection and strict parsing.

use crate::color::Color;
use crate::convert::ColorFormat;
use crate::error::ParseColorError;
use crate::hsl::Hsl;
use crate::math::Oklch;
use crate::rgb::{Rgb, Srgb};

/// Chroma that CSS maps to `100%` in `oklch()`.
const OKLCH_CHROMA_PERCENT_REF: f64 = 0.4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Unit {
    Number,
    Percent,
    Degrees,
}

#[derive(Clone, Copy, Debug)]
struct Component {
    value: f64,
    unit: Unit,
}

fn parse_component(token: &str) -> Option<Component> {
    let (number, unit) = if let Some(n) = token.strip_suffix('%') {
        (n, Unit::Percent)
    } else if let Some(n) = token.strip_suffix("deg") {
        (n, Unit::Degrees)
    } else {
        (token, Unit::Number)
    };
    // `f64::from_str` accepts "NaN" and "inf"; neither is a color component
    let value = number.parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(Component { value, unit })
}

/// Classify a color string by its prefix.
///
/// Bare whitespace-separated triples like `62 0.19 259` are OKLCH, except
/// the legacy shadcn form `217 91% 60%` (saturation and lightness carry `%`),
/// which is HSL. Returns `None` when nothing matches; callers should treat
/// such strings as opaque.
pub fn detect_format(input: &str) -> Option<ColorFormat> {
    let s = input.trim();
    if s.starts_with('#') {
        return Some(ColorFormat::Hex);
    }

    let lower = s.to_ascii_lowercase();
    if lower.starts_with("rgb(") || lower.starts_with("rgba(") {
        Some(ColorFormat::Rgb)
    } else if lower.starts_with("hsl(") || lower.starts_with("hsla(") {
        Some(ColorFormat::Hsl)
    } else if lower.starts_with("oklch(") {
        Some(ColorFormat::Oklch)
    } else {
        detect_bare_triple(s)
    }
}

fn detect_bare_triple(s: &str) -> Option<ColorFormat> {
    let parts: Vec<&str> = s.split_whitespace().collect();
    if parts.len() != 3 || parts.iter().any(|p| parse_component(p).is_none()) {
        return None;
    }
    if parts[1].ends_with('%') && parts[2].ends_with('%') {
        Some(ColorFormat::Hsl)
    } else {
        Some(ColorFormat::Oklch)
    }
}

/// Parse any supported color string.
///
/// # Errors
///
/// Returns [`ParseColorError::UnknownFormat`] when [`detect_format`] finds no
/// match, and a more specific error when the format is recognized but the
/// body is malformed.
pub fn parse_color(input: &str) -> Result<Color, ParseColorError> {
    let s = input.trim();
    let format =
        detect_format(s).ok_or_else(|| ParseColorError::UnknownFormat(s.to_string()))?;

    match format {
        ColorFormat::Hex => parse_hex(s).map(Color::from),
        ColorFormat::Rgb => parse_rgb(components(s)?).map(Color::from),
        ColorFormat::Hsl => parse_hsl(components(s)?).map(Color::from),
        ColorFormat::Oklch => parse_oklch(components(s)?).map(Color::from),
    }
}

pub(crate) fn parse_hex(input: &str) -> Result<Rgb, ParseColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if let Some(pos) = digits.bytes().position(|b| !b.is_ascii_hexdigit()) {
        return Err(ParseColorError::InvalidHexDigit(pos));
    }
    if digits.len() != 6 {
        return Err(ParseColorError::InvalidHexLength(digits.len()));
    }

    // All six bytes are ASCII hex digits, so slicing and radix parsing succeed
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap_or_default();
    Ok(Rgb::new(byte(0), byte(2), byte(4)))
}

/// Split `fn(a b c)`, `fn(a, b, c)`, `fn(a b c / alpha)` or a bare `a b c`
/// into its three color components. A fourth comma-separated alpha is
/// accepted and ignored.
fn components(s: &str) -> Result<[&str; 3], ParseColorError> {
    let body = match s.find('(') {
        Some(open) => s[open + 1..]
            .strip_suffix(')')
            .ok_or(ParseColorError::Unterminated)?,
        None => s,
    };
    let color_part = match body.split_once('/') {
        Some((color, _alpha)) => color,
        None => body,
    };

    let args: Vec<&str> = color_part
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect();

    if !(3..=4).contains(&args.len()) {
        return Err(ParseColorError::ComponentCount {
            expected: 3,
            found: args.len(),
        });
    }
    Ok([args[0], args[1], args[2]])
}

fn component(token: &str, allowed: &[Unit]) -> Result<Component, ParseColorError> {
    parse_component(token)
        .filter(|c| allowed.contains(&c.unit))
        .ok_or_else(|| ParseColorError::InvalidComponent(token.to_string()))
}

fn parse_rgb([r, g, b]: [&str; 3]) -> Result<Srgb, ParseColorError> {
    let channel = |token: &str| -> Result<f64, ParseColorError> {
        let c = component(token, &[Unit::Number, Unit::Percent])?;
        let unit_value = match c.unit {
            Unit::Percent => c.value / 100.0,
            _ => c.value / 255.0,
        };
        Ok(unit_value.clamp(0.0, 1.0))
    };
    Ok(Srgb::new(channel(r)?, channel(g)?, channel(b)?))
}

fn parse_hsl([h, s, l]: [&str; 3]) -> Result<Hsl, ParseColorError> {
    let hue = component(h, &[Unit::Number, Unit::Degrees])?;
    let sat = component(s, &[Unit::Number, Unit::Percent])?;
    let light = component(l, &[Unit::Number, Unit::Percent])?;
    Ok(Hsl::new(
        hue.value.rem_euclid(360.0),
        sat.value.clamp(0.0, 100.0),
        light.value.clamp(0.0, 100.0),
    ))
}

/// Lightness may be a percentage (`62.3%`), a fraction (`0.623`) or a bare
/// percentage number (`62.3`); anything above `1` is read as percent.
fn parse_oklch([l, c, h]: [&str; 3]) -> Result<Oklch, ParseColorError> {
    let light = component(l, &[Unit::Number, Unit::Percent])?;
    let chroma = component(c, &[Unit::Number, Unit::Percent])?;
    let hue = component(h, &[Unit::Number, Unit::Degrees])?;

    let l = match light.unit {
        Unit::Percent => light.value / 100.0,
        _ if light.value > 1.0 => light.value / 100.0,
        _ => light.value,
    };
    let c = match chroma.unit {
        Unit::Percent => chroma.value / 100.0 * OKLCH_CHROMA_PERCENT_REF,
        _ => chroma.value,
    };
    Ok(Oklch::new(l, c, hue.value.rem_euclid(360.0)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_prefixed_formats() {
        assert_eq!(detect_format("#3b82f6"), Some(ColorFormat::Hex));
        assert_eq!(detect_format("rgb(59,130,246)"), Some(ColorFormat::Rgb));
        assert_eq!(detect_format("RGBA(59, 130, 246, 0.5)"), Some(ColorFormat::Rgb));
        assert_eq!(detect_format("hsl(217 91% 60%)"), Some(ColorFormat::Hsl));
        assert_eq!(detect_format("oklch(62.3% 0.19 259.8)"), Some(ColorFormat::Oklch));
        assert_eq!(detect_format("  #fff  "), Some(ColorFormat::Hex));
    }

    #[test]
    fn detects_bare_triples() {
        assert_eq!(detect_format("62 0.19 259"), Some(ColorFormat::Oklch));
        assert_eq!(detect_format("0.62 0.19 259deg"), Some(ColorFormat::Oklch));
        assert_eq!(detect_format("217 91% 60%"), Some(ColorFormat::Hsl));
    }

    #[test]
    fn unknown_formats() {
        assert_eq!(detect_format(""), None);
        assert_eq!(detect_format("red"), None);
        assert_eq!(detect_format("Inter, sans-serif"), None);
        assert_eq!(detect_format("0.5rem"), None);
        assert_eq!(detect_format("1 2"), None);
        assert_eq!(detect_format("NaN 0 0"), None);
    }

    #[test]
    fn hex_errors() {
        assert_eq!(parse_hex("#fff"), Err(ParseColorError::InvalidHexLength(3)));
        assert_eq!(parse_hex("#12345g"), Err(ParseColorError::InvalidHexDigit(5)));
        assert_eq!(parse_hex("#abcdef"), Ok(Rgb::new(0xAB, 0xCD, 0xEF)));
        assert_eq!(parse_hex("ABCDEF"), Ok(Rgb::new(0xAB, 0xCD, 0xEF)));
    }

    #[test]
    fn rgb_accepts_commas_spaces_and_alpha() {
        let expected = Color::from(Rgb::new(59, 130, 246));
        assert_eq!(parse_color("rgb(59,130,246)"), Ok(expected));
        assert_eq!(parse_color("rgb(59 130 246)"), Ok(expected));
        assert_eq!(parse_color("rgb(59 130 246 / 0.5)"), Ok(expected));
        assert_eq!(parse_color("rgba(59, 130, 246, 0.5)"), Ok(expected));
    }

    #[test]
    fn rgb_percent_channels() {
        let color = parse_color("rgb(100% 0% 50%)").unwrap();
        assert_eq!(color.to_rgb(), Rgb::new(255, 0, 128));
    }

    #[test]
    fn malformed_bodies() {
        assert_eq!(parse_color("rgb(1, 2, 3"), Err(ParseColorError::Unterminated));
        assert_eq!(
            parse_color("rgb(1, 2)"),
            Err(ParseColorError::ComponentCount { expected: 3, found: 2 })
        );
        assert_eq!(
            parse_color("hsl(10% 50% 50%)"),
            Err(ParseColorError::InvalidComponent("10%".to_string()))
        );
        assert!(matches!(
            parse_color("banana"),
            Err(ParseColorError::UnknownFormat(_))
        ));
    }

    #[test]
    fn oklch_lightness_conventions() {
        let percent = parse_color("oklch(62.3% 0.19 259.8)").unwrap().to_oklch();
        let fraction = parse_color("oklch(0.623 0.19 259.8)").unwrap().to_oklch();
        let bare = parse_color("62.3 0.19 259.8").unwrap().to_oklch();
        for lch in [percent, fraction, bare] {
            assert!((lch.l - 0.623).abs() < 1e-9);
            assert!((lch.c - 0.19).abs() < 1e-9);
            assert!((lch.h - 259.8).abs() < 1e-9);
        }
    }

    #[test]
    fn oklch_chroma_percent() {
        let lch = parse_color("oklch(50% 50% 120)").unwrap().to_oklch();
        assert!((lch.c - 0.2).abs() < 1e-9);
    }

    #[test]
    fn legacy_bare_hsl() {
        let color = parse_color("0 100% 50%").unwrap();
        assert_eq!(color.to_rgb(), Rgb::new(255, 0, 0));
    }
}
