use pretty_assertions::assert_eq;
use std::fs;
use swatch_cli::commands::{self, ThemeSource};
use swatch_cli::{CatalogKind, SwatchConfig};
use swatch_color::ColorFormat;
use swatch_theme::{ThemePreset, ThemeRecord};

#[test]
fn detect_prints_format_id() {
    assert_eq!(commands::detect("#3b82f6"), "hex");
    assert_eq!(commands::detect("217 91% 60%"), "hsl");
    assert_eq!(commands::detect("0.62 0.19 260"), "oklch");
    assert_eq!(commands::detect("Inter"), "unknown");
}

#[test]
fn convert_respects_bare_flag() {
    assert_eq!(
        commands::convert("#3b82f6", ColorFormat::Oklch, false),
        "oklch(62.3% 0.188 260)"
    );
    assert_eq!(
        commands::convert("#3b82f6", ColorFormat::Oklch, true),
        "62.3 0.188 260"
    );
    assert_eq!(commands::convert("#3b82f6", ColorFormat::Hsl, true), "hsl(217 91% 60%)");
}

#[test]
fn theme_from_preset_is_a_record() {
    let json = commands::theme(ThemeSource::Preset(ThemePreset::Slate), false, false).unwrap();
    let record = ThemeRecord::from_json(&json).unwrap();
    assert_eq!(record.name, "slate");
    assert_eq!(record.light_mode_config.len(), 44);
    assert_eq!(record, ThemePreset::Slate.record());
}

#[test]
fn theme_from_record_file() {
    let dir = std::env::temp_dir().join(format!("swatch-cli-theme-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("record.json");
    fs::write(
        &path,
        r##"{ "name": "mine", "lightModeConfig": { "primary": "#3b82f6" } }"##,
    )
    .unwrap();

    let css = commands::theme(ThemeSource::Record(&path), true, false).unwrap();
    assert!(css.contains("  --primary: oklch(62.3% 0.188 260);\n"));
    assert!(css.contains(".dark {\n"));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn theme_from_missing_file_fails() {
    let path = std::env::temp_dir().join("swatch-cli-does-not-exist.json");
    let err = commands::theme(ThemeSource::Record(&path), false, false).unwrap_err();
    assert!(err.to_string().starts_with("Failed to read"));
}

#[test]
fn cascade_table_with_overrides() {
    let config = SwatchConfig::from_toml_str(
        r#"
        [[breakpoints]]
        id = "desktop"

        [[breakpoints]]
        id = "tablet"
        max_width = 1023

        [[breakpoints]]
        id = "mobile"
        max_width = 767

        [[radius_overrides]]
        breakpoint = "tablet"
        token = "radius-md"
        value = 3.0
        "#,
    )
    .unwrap();

    let cascade = config.cascade(CatalogKind::Radius).unwrap();
    assert_eq!(*cascade.effective_value("desktop", "radius-md"), 6.0);
    assert_eq!(*cascade.effective_value("tablet", "radius-md"), 3.0);
    assert_eq!(*cascade.effective_value("mobile", "radius-md"), 3.0);
    assert!(!cascade.is_linked("tablet", "radius-md"));

    let css = commands::cascade(&config, CatalogKind::Radius, true).unwrap();
    assert!(css.contains("@media (max-width: 1023px) {\n  :root {\n    --radius-md: 3px;\n  }\n}\n"));

    let json = commands::cascade(&config, CatalogKind::Radius, false).unwrap();
    let table: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(table["mobile"]["radius-md"], 3.0);
    assert_eq!(table["mobile"]["radius-lg"], 8.0);
}

#[test]
fn cascade_override_on_unknown_token_fails() {
    let config = SwatchConfig::from_toml_str(
        r#"
        [[spacing_overrides]]
        breakpoint = "mobile"
        token = "spacing-huge"
        value = 1.0
        "#,
    )
    .unwrap();

    let err = config.cascade(CatalogKind::Spacing).unwrap_err();
    assert!(format!("{err:#}").contains("unknown token `spacing-huge`"));
}

#[test]
fn default_config_when_no_path() {
    let config = commands::load_config(None).unwrap();
    assert_eq!(config, SwatchConfig::default());
}
