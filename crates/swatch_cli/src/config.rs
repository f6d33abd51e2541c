//! Swatch configuration file handling

use anyhow::{Context, Result};
use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::Path;
use swatch_cascade::{Breakpoint, BreakpointHierarchy, TokenCascade, TokenCatalog};

/// Top-level configuration (swatch.toml)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SwatchConfig {
    /// Widest to narrowest; the first entry is the root
    #[serde(default = "default_breakpoints")]
    pub breakpoints: Vec<Breakpoint>,
    /// Radius defaults, merged over the built-in radius catalog
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub radius: IndexMap<String, f32>,
    /// Spacing defaults, merged over the built-in spacing catalog
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub spacing: IndexMap<String, f32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub radius_overrides: Vec<TokenOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub spacing_overrides: Vec<TokenOverride>,
}

fn default_breakpoints() -> Vec<Breakpoint> {
    BreakpointHierarchy::default().into()
}

/// An independent value at one breakpoint, applied as unlink then set.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TokenOverride {
    pub breakpoint: String,
    pub token: String,
    pub value: f32,
}

/// Which editor catalog to work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CatalogKind {
    #[default]
    Radius,
    Spacing,
}

impl Display for CatalogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Radius => "radius",
            Self::Spacing => "spacing",
        })
    }
}

impl Default for SwatchConfig {
    fn default() -> Self {
        Self {
            breakpoints: default_breakpoints(),
            radius: IndexMap::new(),
            spacing: IndexMap::new(),
            radius_overrides: Vec::new(),
            spacing_overrides: Vec::new(),
        }
    }
}

impl SwatchConfig {
    /// Load configuration from a file, or from `swatch.toml` inside a
    /// directory
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("swatch.toml")
        } else {
            path.to_path_buf()
        };

        if !config_path.exists() {
            anyhow::bail!("No swatch.toml found at {}", config_path.display());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SwatchConfig = toml::from_str(content)?;
        config.hierarchy()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// The validated breakpoint hierarchy
    pub fn hierarchy(&self) -> Result<BreakpointHierarchy> {
        if let Some(root) = self.breakpoints.first() {
            if root.max_width.is_some() {
                anyhow::bail!(
                    "root breakpoint `{}` must not have a max_width",
                    root.id
                );
            }
        }
        BreakpointHierarchy::new(self.breakpoints.clone()).context("Invalid [[breakpoints]]")
    }

    /// Built-in catalog with this config's defaults merged in
    pub fn catalog(&self, kind: CatalogKind) -> TokenCatalog<f32> {
        let (mut catalog, defaults) = match kind {
            CatalogKind::Radius => (TokenCatalog::radius(), &self.radius),
            CatalogKind::Spacing => (TokenCatalog::spacing(), &self.spacing),
        };
        for (name, value) in defaults {
            catalog.insert(name.clone(), *value);
        }
        catalog
    }

    /// A cascade in the state this config describes
    pub fn cascade(&self, kind: CatalogKind) -> Result<TokenCascade<f32>> {
        let mut cascade = TokenCascade::new(self.hierarchy()?, self.catalog(kind));
        let overrides = match kind {
            CatalogKind::Radius => &self.radius_overrides,
            CatalogKind::Spacing => &self.spacing_overrides,
        };

        for entry in overrides {
            let context = || {
                format!(
                    "Invalid {kind}_overrides entry for `{}` at `{}`",
                    entry.token, entry.breakpoint
                )
            };
            if cascade
                .try_stored(&entry.breakpoint, &entry.token)
                .with_context(context)?
                .is_linked
            {
                cascade
                    .try_toggle_link(&entry.breakpoint, &entry.token)
                    .with_context(context)?;
            }
            cascade
                .try_set_value(&entry.breakpoint, &entry.token, entry.value)
                .with_context(context)?;
        }

        tracing::debug!(
            %kind,
            breakpoints = cascade.hierarchy().len(),
            overrides = overrides.len(),
            "built cascade from config"
        );
        Ok(cascade)
    }
}
