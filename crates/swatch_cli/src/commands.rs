//! Subcommand implementations

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use swatch_color::{convert_with, detect_format, ColorFormat, OklchStyle};
use swatch_theme::{ColorScheme, ThemePreset, ThemeRecord, ThemeTokenSetBuilder};

use crate::config::{CatalogKind, SwatchConfig};

/// Detected format id, or `unknown`.
pub fn detect(color: &str) -> String {
    detect_format(color)
        .map_or("unknown", ColorFormat::id)
        .to_string()
}

pub fn convert(color: &str, to: ColorFormat, bare: bool) -> String {
    let style = if bare {
        OklchStyle::Bare
    } else {
        OklchStyle::Function
    };
    convert_with(color, to, style)
}

/// Where a theme comes from.
#[derive(Debug, Clone, Copy)]
pub enum ThemeSource<'a> {
    Preset(ThemePreset),
    Record(&'a Path),
}

/// Build a theme and render it as a record (JSON) or CSS variables.
pub fn theme(source: ThemeSource<'_>, css: bool, bare: bool) -> Result<String> {
    let builder = ThemeTokenSetBuilder::new().oklch_style(if bare {
        OklchStyle::Bare
    } else {
        OklchStyle::Function
    });

    let (name, bundle) = match source {
        ThemeSource::Preset(preset) => {
            let bundle = builder.build(
                &preset.source(ColorScheme::Light),
                &preset.source(ColorScheme::Dark),
            );
            (preset.id().to_string(), bundle)
        }
        ThemeSource::Record(path) => {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let record = ThemeRecord::from_json(&content)
                .with_context(|| format!("Failed to parse {}", path.display()))?;
            let bundle = record.rebuild(&builder);
            (record.name, bundle)
        }
    };

    if css {
        return Ok(bundle.to_css());
    }
    ThemeRecord::from_bundle(name, &bundle)
        .to_json()
        .context("Failed to serialize theme record")
}

/// Effective-value table as JSON, or the cascade as CSS.
pub fn cascade(config: &SwatchConfig, kind: CatalogKind, css: bool) -> Result<String> {
    let cascade = config.cascade(kind)?;
    if css {
        return Ok(cascade.to_css("px"));
    }
    serde_json::to_string_pretty(&cascade.effective_table())
        .context("Failed to serialize effective values")
}

/// Config at `path`, or the built-in defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<SwatchConfig> {
    match path {
        Some(path) => SwatchConfig::load_from(path),
        None => Ok(SwatchConfig::default()),
    }
}
