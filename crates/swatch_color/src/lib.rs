//! Swatch color conversion
//!
//! Bidirectional conversion between the four textual color representations
//! used by swatch themes: `#rrggbb`, `rgb(r, g, b)`, `hsl(h s% l%)` and
//! `oklch(L% C H)` (plus the bare `L C H` triple found in stored data).
//!
//! # Overview
//!
//! - [`math`]: the numeric pipeline (sRGB transfer curve, linear RGB ↔ OKLab,
//!   OKLab ↔ OKLCH). Pure functions, no clamping.
//! - [`Rgb`], [`Srgb`], [`Hsl`], [`Oklch`]: typed color models.
//! - [`detect_format`] / [`parse_color`]: strict parsing.
//! - [`convert`] / [`convert_with`]: tolerant string-to-string conversion that
//!   never fails. Malformed input in a recognized format becomes black,
//!   unrecognized input is passed through unchanged.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_color::{convert, detect_format, ColorFormat};
//!
//! assert_eq!(detect_format("#3b82f6"), Some(ColorFormat::Hex));
//! assert_eq!(convert("#3b82f6", ColorFormat::Oklch), "oklch(62.3% 0.188 260)");
//! assert_eq!(convert("oklch(62.3% 0.188 260)", ColorFormat::Hex), "#3c82f6");
//! ```

mod color;
mod convert;
mod error;
mod hsl;
pub mod math;
mod oklch;
mod parse;
mod rgb;

pub use color::Color;
pub use convert::{convert, convert_with, ColorFormat};
pub use error::ParseColorError;
pub use hsl::Hsl;
pub use math::{LinearRgb, Oklab, Oklch};
pub use oklch::OklchStyle;
pub use parse::{detect_format, parse_color};
pub use rgb::{Rgb, Srgb};
