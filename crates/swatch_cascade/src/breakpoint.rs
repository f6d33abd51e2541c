//! Breakpoint hierarchy (widest to narrowest).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::CascadeError;

/// Tailwind-compatible breakpoint widths in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TailwindBreakpoints {
    /// Small breakpoint (`sm`) - 640px
    pub sm: u32,
    /// Medium breakpoint (`md`) - 768px
    pub md: u32,
    /// Large breakpoint (`lg`) - 1024px
    pub lg: u32,
    /// Extra large breakpoint (`xl`) - 1280px
    pub xl: u32,
    /// 2x large breakpoint (`2xl`) - 1536px
    pub xxl: u32,
}

impl TailwindBreakpoints {
    pub const DEFAULT: Self = Self {
        sm: 640,
        md: 768,
        lg: 1024,
        xl: 1280,
        xxl: 1536,
    };
}

impl Default for TailwindBreakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One breakpoint of the hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub id: String,
    /// Upper bound (inclusive) of the viewport range in CSS pixels.
    ///
    /// `None` on the root, which covers everything wider than its first
    /// child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
}

impl Breakpoint {
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            max_width: None,
        }
    }

    pub fn max_width(id: impl Into<String>, max_width: u32) -> Self {
        Self {
            id: id.into(),
            max_width: Some(max_width),
        }
    }
}

/// Breakpoints ordered from widest (the root) to narrowest.
///
/// The order is strict and linear: every breakpoint but the root has
/// exactly one parent, the one immediately before it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Breakpoint>", into = "Vec<Breakpoint>")]
pub struct BreakpointHierarchy {
    breakpoints: Vec<Breakpoint>,
    index: FxHashMap<String, usize>,
}

impl BreakpointHierarchy {
    /// Build a hierarchy, validating ids and widths.
    ///
    /// # Errors
    ///
    /// Fails on an empty list, a repeated id, a non-root breakpoint without
    /// `max_width`, or widths that do not strictly decrease.
    pub fn new(breakpoints: Vec<Breakpoint>) -> Result<Self, CascadeError> {
        if breakpoints.is_empty() {
            return Err(CascadeError::EmptyHierarchy);
        }

        let mut index = FxHashMap::default();
        let mut parent_width: Option<u32> = None;

        for (i, bp) in breakpoints.iter().enumerate() {
            if index.insert(bp.id.clone(), i).is_some() {
                return Err(CascadeError::DuplicateBreakpoint(bp.id.clone()));
            }
            if i == 0 {
                continue;
            }

            let width = bp
                .max_width
                .ok_or_else(|| CascadeError::MissingWidth(bp.id.clone()))?;
            if let Some(parent_width) = parent_width {
                if width >= parent_width {
                    return Err(CascadeError::WidthOrder {
                        id: bp.id.clone(),
                        width,
                        parent_width,
                    });
                }
            }
            parent_width = Some(width);
        }

        Ok(Self { breakpoints, index })
    }

    pub fn root(&self) -> &Breakpoint {
        &self.breakpoints[0]
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.breakpoints.get(index)
    }

    /// Parent (immediately wider) breakpoint; `None` for the root.
    pub fn parent_of(&self, id: &str) -> Option<&Breakpoint> {
        match self.index_of(id)? {
            0 => None,
            i => self.breakpoints.get(i - 1),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.breakpoints.iter().map(|bp| bp.id.as_str())
    }
}

/// `tv → desktop → tablet → mobile` on Tailwind widths.
impl Default for BreakpointHierarchy {
    fn default() -> Self {
        let bp = TailwindBreakpoints::DEFAULT;
        let breakpoints = vec![
            Breakpoint::root("tv"),
            Breakpoint::max_width("desktop", bp.xxl - 1),
            Breakpoint::max_width("tablet", bp.lg - 1),
            Breakpoint::max_width("mobile", bp.md - 1),
        ];
        let index = breakpoints
            .iter()
            .enumerate()
            .map(|(i, b)| (b.id.clone(), i))
            .collect();
        Self { breakpoints, index }
    }
}

impl TryFrom<Vec<Breakpoint>> for BreakpointHierarchy {
    type Error = CascadeError;

    fn try_from(breakpoints: Vec<Breakpoint>) -> Result<Self, Self::Error> {
        Self::new(breakpoints)
    }
}

impl From<BreakpointHierarchy> for Vec<Breakpoint> {
    fn from(hierarchy: BreakpointHierarchy) -> Self {
        hierarchy.breakpoints
    }
}
