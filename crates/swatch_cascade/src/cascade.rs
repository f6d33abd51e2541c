//! Token cascade state and resolution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::breakpoint::BreakpointHierarchy;
use crate::catalog::TokenCatalog;
use crate::error::CascadeError;

/// Stored value for one (breakpoint, token) pair.
///
/// While `is_linked` is set the value is kept but never read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValue<T> {
    pub value: T,
    pub is_linked: bool,
}

/// Breakpoint id → token name → effective value, in hierarchy and catalog
/// order.
pub type EffectiveTable<T> = IndexMap<String, IndexMap<String, T>>;

/// Per-breakpoint token values with inheritance toward the root.
///
/// Mutation takes `&mut self`; share across threads behind a `Mutex`.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenCascade<T> {
    hierarchy: BreakpointHierarchy,
    catalog: TokenCatalog<T>,
    /// `values[breakpoint][token]`, indices follow hierarchy and catalog order
    values: Vec<Vec<TokenValue<T>>>,
}

impl<T: Clone> TokenCascade<T> {
    /// Every token starts at its catalog default; every non-root breakpoint
    /// starts linked.
    pub fn new(hierarchy: BreakpointHierarchy, catalog: TokenCatalog<T>) -> Self {
        let values = initial_values(&hierarchy, &catalog);
        Self {
            hierarchy,
            catalog,
            values,
        }
    }

    pub fn hierarchy(&self) -> &BreakpointHierarchy {
        &self.hierarchy
    }

    pub fn catalog(&self) -> &TokenCatalog<T> {
        &self.catalog
    }

    /// Restore catalog defaults and the all-linked state.
    pub fn reset(&mut self) {
        self.values = initial_values(&self.hierarchy, &self.catalog);
    }

    fn indices(&self, breakpoint: &str, token: &str) -> Result<(usize, usize), CascadeError> {
        let bp = self
            .hierarchy
            .index_of(breakpoint)
            .ok_or_else(|| CascadeError::UnknownBreakpoint(breakpoint.to_string()))?;
        let tok = self
            .catalog
            .index_of(token)
            .ok_or_else(|| CascadeError::UnknownToken(token.to_string()))?;
        Ok((bp, tok))
    }

    /// Walk toward the root until an unlinked entry (or the root) is found.
    /// Terminates in at most `hierarchy.len()` steps.
    fn resolve(&self, bp: usize, tok: usize) -> &TokenValue<T> {
        let mut i = bp;
        while i > 0 && self.values[i][tok].is_linked {
            i -= 1;
        }
        &self.values[i][tok]
    }

    /// # Errors
    ///
    /// Fails on an unknown breakpoint or token.
    pub fn try_effective_value(
        &self,
        breakpoint: &str,
        token: &str,
    ) -> Result<&T, CascadeError> {
        let (bp, tok) = self.indices(breakpoint, token)?;
        Ok(&self.resolve(bp, tok).value)
    }

    /// Value a breakpoint actually uses for `token`.
    ///
    /// # Panics
    ///
    /// Panics on an unknown breakpoint or token; both come from a fixed
    /// catalog, so an unknown key is a caller bug.
    pub fn effective_value(&self, breakpoint: &str, token: &str) -> &T {
        self.try_effective_value(breakpoint, token)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Errors
    ///
    /// Fails on an unknown breakpoint or token.
    pub fn try_stored(
        &self,
        breakpoint: &str,
        token: &str,
    ) -> Result<&TokenValue<T>, CascadeError> {
        let (bp, tok) = self.indices(breakpoint, token)?;
        Ok(&self.values[bp][tok])
    }

    /// The raw stored entry, regardless of linking.
    ///
    /// # Panics
    ///
    /// Panics on an unknown breakpoint or token.
    pub fn stored(&self, breakpoint: &str, token: &str) -> &TokenValue<T> {
        self.try_stored(breakpoint, token)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    ///
    /// Panics on an unknown breakpoint or token.
    pub fn is_linked(&self, breakpoint: &str, token: &str) -> bool {
        self.stored(breakpoint, token).is_linked
    }

    /// # Errors
    ///
    /// Fails on an unknown breakpoint or token.
    pub fn try_set_value(
        &mut self,
        breakpoint: &str,
        token: &str,
        value: T,
    ) -> Result<(), CascadeError> {
        let (bp, tok) = self.indices(breakpoint, token)?;
        self.values[bp][tok].value = value;
        Ok(())
    }

    /// Overwrite the stored value at exactly this breakpoint.
    ///
    /// Link flags and other breakpoints are untouched. On a linked
    /// breakpoint the value is stored but not read until it is unlinked.
    ///
    /// # Panics
    ///
    /// Panics on an unknown breakpoint or token.
    pub fn set_value(&mut self, breakpoint: &str, token: &str, value: T) {
        self.try_set_value(breakpoint, token, value)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Errors
    ///
    /// Fails on an unknown breakpoint or token.
    pub fn try_toggle_link(
        &mut self,
        breakpoint: &str,
        token: &str,
    ) -> Result<bool, CascadeError> {
        let (bp, tok) = self.indices(breakpoint, token)?;

        if bp == 0 {
            tracing::debug!(breakpoint, token, "ignoring link toggle on root breakpoint");
            return Ok(false);
        }

        if self.values[bp][tok].is_linked {
            // Snapshot the inherited value so the effective value does not jump
            let inherited = self.resolve(bp, tok).value.clone();
            let entry = &mut self.values[bp][tok];
            entry.value = inherited;
            entry.is_linked = false;
        } else {
            // The independent value is kept (stale) for a later unlink
            self.values[bp][tok].is_linked = true;
        }

        Ok(self.values[bp][tok].is_linked)
    }

    /// Flip linked/independent and return the new `is_linked`.
    ///
    /// Unlinking first copies the current effective value into the stored
    /// value. Linking leaves the stored value as is. On the root this is a
    /// no-op returning `false`.
    ///
    /// # Panics
    ///
    /// Panics on an unknown breakpoint or token.
    pub fn toggle_link(&mut self, breakpoint: &str, token: &str) -> bool {
        self.try_toggle_link(breakpoint, token)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Effective value of every token at every breakpoint.
    pub fn effective_table(&self) -> EffectiveTable<T> {
        self.hierarchy
            .iter()
            .enumerate()
            .map(|(bp, breakpoint)| {
                let row = self
                    .catalog
                    .names()
                    .enumerate()
                    .map(|(tok, name)| (name.to_string(), self.resolve(bp, tok).value.clone()))
                    .collect();
                (breakpoint.id.clone(), row)
            })
            .collect()
    }

    /// Entries that belong in a breakpoint's CSS block: every token on the
    /// root, only unlinked tokens elsewhere.
    pub(crate) fn overrides_at(&self, bp: usize) -> impl Iterator<Item = (&str, &T)> {
        self.catalog
            .names()
            .zip(&self.values[bp])
            .filter(move |(_, entry)| bp == 0 || !entry.is_linked)
            .map(|(name, entry)| (name, &entry.value))
    }
}

fn initial_values<T: Clone>(
    hierarchy: &BreakpointHierarchy,
    catalog: &TokenCatalog<T>,
) -> Vec<Vec<TokenValue<T>>> {
    (0..hierarchy.len())
        .map(|bp| {
            catalog
                .iter()
                .map(|(_, default)| TokenValue {
                    value: default.clone(),
                    is_linked: bp != 0,
                })
                .collect()
        })
        .collect()
}
