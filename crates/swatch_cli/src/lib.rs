//! Swatch command-line surface.
//!
//! Each subcommand is a function returning the text to print, so the binary
//! stays a thin argument-parsing shell.

pub mod commands;
pub mod config;

pub use config::{CatalogKind, SwatchConfig, TokenOverride};
