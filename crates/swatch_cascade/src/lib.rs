//! Swatch responsive token cascade
//!
//! Responsive token editors (radius, spacing) store one value per
//! breakpoint and token. Breakpoints are ordered widest to narrowest; each
//! non-root breakpoint is either *linked* (inherits from its parent) or
//! *independent* (uses its own stored value).
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_cascade::{BreakpointHierarchy, TokenCascade, TokenCatalog};
//!
//! let mut radii = TokenCascade::new(BreakpointHierarchy::default(), TokenCatalog::radius());
//!
//! radii.set_value("tv", "radius-md", 10.0);
//! assert_eq!(*radii.effective_value("mobile", "radius-md"), 10.0);
//!
//! // Detach tablet: it keeps showing 10 until edited
//! radii.toggle_link("tablet", "radius-md");
//! radii.set_value("tablet", "radius-md", 4.0);
//! assert_eq!(*radii.effective_value("mobile", "radius-md"), 4.0);
//! assert_eq!(*radii.effective_value("desktop", "radius-md"), 10.0);
//! ```
//!
//! # Resolution
//!
//! Effective values are resolved lazily on every read by walking toward the
//! root until an independent breakpoint (or the root) is found. Writes touch
//! exactly one stored value; nothing is propagated eagerly.

mod breakpoint;
mod cascade;
mod catalog;
mod css;
mod error;

pub use breakpoint::{Breakpoint, BreakpointHierarchy, TailwindBreakpoints};
pub use cascade::{EffectiveTable, TokenCascade, TokenValue};
pub use catalog::TokenCatalog;
pub use error::CascadeError;
