use pretty_assertions::assert_eq;
use swatch_color::{
    convert, convert_with, detect_format, parse_color, ColorFormat, OklchStyle, Rgb,
};

fn hex_rgb(hex: &str) -> Rgb {
    Rgb::from_hex(hex).unwrap()
}

#[test]
fn detect_format_classifies_each_category() {
    assert_eq!(detect_format("#3b82f6"), Some(ColorFormat::Hex));
    assert_eq!(detect_format("rgb(59,130,246)"), Some(ColorFormat::Rgb));
    assert_eq!(detect_format("hsl(217 91% 60%)"), Some(ColorFormat::Hsl));
    assert_eq!(detect_format("oklch(62.3% 0.19 259.8)"), Some(ColorFormat::Oklch));
    assert_eq!(detect_format("62 0.19 259"), Some(ColorFormat::Oklch));
    assert_eq!(detect_format("not a color"), None);
}

#[test]
fn every_8_bit_color_survives_the_oklch_value_round_trip() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let rgb = Rgb::new(r, g, b);
                let back = Rgb::from_oklch(rgb.to_oklch());
                assert!(
                    rgb.max_channel_delta(back) <= 1,
                    "{} -> {}",
                    rgb.to_hex(),
                    back.to_hex()
                );
            }
        }
    }
}

#[test]
fn theme_palette_hex_survives_the_oklch_string_round_trip() {
    let palette = [
        "#ffffff", "#0a0a0a", "#171717", "#fafafa", "#f5f5f5", "#737373", "#ef4444", "#e5e5e5",
        "#7f1d1d", "#262626", "#a3a3a3", "#d4d4d4", "#020817", "#0f172a", "#f8fafc", "#f1f5f9",
        "#64748b", "#e2e8f0", "#1e293b", "#94a3b8", "#cbd5e1", "#09090b", "#18181b", "#f4f4f5",
        "#71717a", "#e4e4e7", "#27272a", "#a1a1aa", "#d4d4d8", "#f2ab27", "#3b82f6", "#000000",
        "#808080",
    ];

    for hex in palette {
        let oklch = convert(hex, ColorFormat::Oklch);
        let back = convert(&oklch, ColorFormat::Hex);
        let delta = hex_rgb(hex).max_channel_delta(hex_rgb(&back));
        assert!(delta <= 1, "{hex} -> {oklch} -> {back}");
    }
}

#[test]
fn bare_and_function_oklch_parse_to_the_same_color() {
    let function = convert("#64748b", ColorFormat::Oklch);
    let bare = convert_with("#64748b", ColorFormat::Oklch, OklchStyle::Bare);
    assert_eq!(function, "oklch(55.4% 0.041 257)");
    assert_eq!(bare, "55.4 0.041 257");
    assert_eq!(
        convert(&function, ColorFormat::Hex),
        convert(&bare, ColorFormat::Hex)
    );
}

#[test]
fn documented_primary_lands_near_reference_oklch() {
    let oklch = convert("#F2AB27", ColorFormat::Oklch);
    let lch = parse_color(&oklch).unwrap().to_oklch();

    // Reference OKLCH for #f2ab27: L 0.790, C 0.156, H 76.7
    assert!((lch.l - 0.790).abs() <= 0.02, "{oklch}");
    assert!((lch.c - 0.156).abs() <= 0.02, "{oklch}");
    assert!((lch.h - 76.7).abs() <= 3.0, "{oklch}");
}

#[test]
fn conversions_between_srgb_formats_are_exact() {
    assert_eq!(convert("rgb(59, 130, 246)", ColorFormat::Hex), "#3b82f6");
    assert_eq!(convert("#3b82f6", ColorFormat::Hsl), "hsl(217 91% 60%)");
    assert_eq!(convert("217 91% 60%", ColorFormat::Rgb), "rgb(60, 131, 246)");
}

#[test]
fn malformed_and_opaque_inputs_never_fail() {
    assert_eq!(convert("#abc", ColorFormat::Hex), "#000000");
    assert_eq!(convert("oklch(1 2)", ColorFormat::Hex), "#000000");
    assert_eq!(convert("ui-monospace", ColorFormat::Hex), "ui-monospace");
}
