//! Built-in theme presets modelled on shadcn base color registry entries.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::builder::{SourceConfig, ThemeTokenSetBuilder};
use crate::error::ThemeError;
use crate::record::ThemeRecord;
use crate::set::{ColorScheme, ThemeBundle};

/// Built-in theme preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemePreset {
    /// shadcn neutral preset.
    Neutral,
    /// shadcn slate preset.
    Slate,
    /// shadcn zinc preset.
    Zinc,
    /// Neutral surfaces with an amber brand color.
    Amber,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Slate => "slate",
            Self::Zinc => "zinc",
            Self::Amber => "amber",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Neutral => "Neutral",
            Self::Slate => "Slate",
            Self::Zinc => "Zinc",
            Self::Amber => "Amber",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 4] = [
            ThemePreset::Neutral,
            ThemePreset::Slate,
            ThemePreset::Zinc,
            ThemePreset::Amber,
        ];
        &PRESETS
    }

    /// The raw registry entry for one mode, as hex strings.
    pub fn source(self, scheme: ColorScheme) -> SourceConfig {
        let palette = match (self, scheme) {
            (Self::Neutral, ColorScheme::Light) => NEUTRAL_LIGHT,
            (Self::Neutral, ColorScheme::Dark) => NEUTRAL_DARK,
            (Self::Slate, ColorScheme::Light) => SLATE_LIGHT,
            (Self::Slate, ColorScheme::Dark) => SLATE_DARK,
            (Self::Zinc, ColorScheme::Light) => ZINC_LIGHT,
            (Self::Zinc, ColorScheme::Dark) => ZINC_DARK,
            (Self::Amber, ColorScheme::Light) => AMBER_LIGHT,
            (Self::Amber, ColorScheme::Dark) => AMBER_DARK,
        };

        let mut config = palette.to_config();
        // Opaque tokens live in light mode only; dark mode shares them
        if scheme == ColorScheme::Light {
            config.insert("radius".into(), "0.625rem".into());
            config.insert(
                "font-sans".into(),
                "Geist, ui-sans-serif, system-ui, sans-serif".into(),
            );
        }
        config
    }

    /// Build a light/dark theme bundle for this preset.
    pub fn bundle(self) -> ThemeBundle {
        ThemeTokenSetBuilder::new().build(
            &self.source(ColorScheme::Light),
            &self.source(ColorScheme::Dark),
        )
    }

    /// The preset as a persisted record, with fully resolved values.
    pub fn record(self) -> ThemeRecord {
        ThemeRecord::from_bundle(self.id(), &self.bundle())
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownPreset(s.to_string()))
    }
}

/// Convenience free function for ergonomic imports.
pub fn preset_bundle(preset: ThemePreset) -> ThemeBundle {
    preset.bundle()
}

/// The handful of colors a registry entry actually defines. Everything else
/// is left to the builder's fallbacks.
#[derive(Clone, Copy)]
struct BasePalette {
    background: &'static str,
    foreground: &'static str,
    card: &'static str,
    primary: &'static str,
    primary_foreground: &'static str,
    secondary: &'static str,
    muted: &'static str,
    muted_foreground: &'static str,
    accent: &'static str,
    destructive: &'static str,
    border: &'static str,
    ring: &'static str,
}

impl BasePalette {
    fn to_config(self) -> SourceConfig {
        [
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("secondary", self.secondary),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("accent", self.accent),
            ("destructive", self.destructive),
            ("border", self.border),
            ("ring", self.ring),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
    }
}

const NEUTRAL_LIGHT: BasePalette = BasePalette {
    background: "#ffffff",
    foreground: "#0a0a0a",
    card: "#ffffff",
    primary: "#171717",
    primary_foreground: "#fafafa",
    secondary: "#f5f5f5",
    muted: "#f5f5f5",
    muted_foreground: "#737373",
    accent: "#f5f5f5",
    destructive: "#ef4444",
    border: "#e5e5e5",
    ring: "#0a0a0a",
};

const NEUTRAL_DARK: BasePalette = BasePalette {
    background: "#0a0a0a",
    foreground: "#fafafa",
    card: "#0a0a0a",
    primary: "#fafafa",
    primary_foreground: "#171717",
    secondary: "#262626",
    muted: "#262626",
    muted_foreground: "#a3a3a3",
    accent: "#262626",
    destructive: "#7f1d1d",
    border: "#262626",
    ring: "#d4d4d4",
};

const SLATE_LIGHT: BasePalette = BasePalette {
    background: "#ffffff",
    foreground: "#020817",
    card: "#ffffff",
    primary: "#0f172a",
    primary_foreground: "#f8fafc",
    secondary: "#f1f5f9",
    muted: "#f1f5f9",
    muted_foreground: "#64748b",
    accent: "#f1f5f9",
    destructive: "#ef4444",
    border: "#e2e8f0",
    ring: "#020817",
};

const SLATE_DARK: BasePalette = BasePalette {
    background: "#020817",
    foreground: "#f8fafc",
    card: "#020817",
    primary: "#f8fafc",
    primary_foreground: "#0f172a",
    secondary: "#1e293b",
    muted: "#1e293b",
    muted_foreground: "#94a3b8",
    accent: "#1e293b",
    destructive: "#7f1d1d",
    border: "#1e293b",
    ring: "#cbd5e1",
};

const ZINC_LIGHT: BasePalette = BasePalette {
    background: "#ffffff",
    foreground: "#09090b",
    card: "#ffffff",
    primary: "#18181b",
    primary_foreground: "#fafafa",
    secondary: "#f4f4f5",
    muted: "#f4f4f5",
    muted_foreground: "#71717a",
    accent: "#f4f4f5",
    destructive: "#ef4444",
    border: "#e4e4e7",
    ring: "#09090b",
};

const ZINC_DARK: BasePalette = BasePalette {
    background: "#09090b",
    foreground: "#fafafa",
    card: "#09090b",
    primary: "#fafafa",
    primary_foreground: "#18181b",
    secondary: "#27272a",
    muted: "#27272a",
    muted_foreground: "#a1a1aa",
    accent: "#27272a",
    destructive: "#7f1d1d",
    border: "#27272a",
    ring: "#d4d4d8",
};

const AMBER_LIGHT: BasePalette = BasePalette {
    primary: "#f2ab27",
    primary_foreground: "#0a0a0a",
    ring: "#f2ab27",
    ..NEUTRAL_LIGHT
};

const AMBER_DARK: BasePalette = BasePalette {
    primary: "#f59e0b",
    primary_foreground: "#0a0a0a",
    ring: "#f59e0b",
    ..NEUTRAL_DARK
};
