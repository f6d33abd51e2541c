//! Swatch theme tokens
//!
//! Turns loosely-typed theme registry entries (string maps of token name to
//! color or length) into complete, format-homogeneous token sets for light
//! and dark mode.
//!
//! # Overview
//!
//! - [`ThemeToken`]: the closed catalog of semantic token names.
//! - [`ThemeTokenSetBuilder`]: resolves every token through its fallback
//!   chain and normalizes colors to OKLCH.
//! - [`ThemeBundle`]: the light/dark pair, renderable as CSS variables.
//! - [`ThemeRecord`]: the persisted `lightModeConfig`/`darkModeConfig` shape.
//! - [`ThemePreset`]: built-in registry entries.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::{ColorScheme, SourceConfig, ThemeToken, ThemeTokenSetBuilder};
//!
//! let mut light = SourceConfig::new();
//! light.insert("primary".to_string(), "#3b82f6".to_string());
//!
//! let bundle = ThemeTokenSetBuilder::new().build(&light, &SourceConfig::new());
//! let theme = bundle.for_scheme(ColorScheme::Light);
//!
//! assert_eq!(theme.get(ThemeToken::Primary), "oklch(62.3% 0.188 260)");
//! // sidebar-primary falls back to primary
//! assert_eq!(theme.get(ThemeToken::SidebarPrimary), "oklch(62.3% 0.188 260)");
//! ```

mod builder;
mod css;
mod error;
pub mod presets;
mod record;
mod set;
mod token;

pub use builder::{Fallback, SourceConfig, ThemeTokenSetBuilder, TokenSource};
pub use error::ThemeError;
pub use presets::{preset_bundle, ThemePreset};
pub use record::ThemeRecord;
pub use set::{ColorScheme, ThemeBundle, ThemeTokenSet};
pub use token::{ThemeToken, TokenKind};
