//! Token catalogs: the fixed set of token names an editor manages, with
//! their default values.

use indexmap::IndexMap;

/// Ordered token name → default value.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenCatalog<T> {
    entries: IndexMap<String, T>,
}

impl<T> TokenCatalog<T> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Add (or replace) a token, keeping its original position on replace.
    pub fn with(mut self, name: impl Into<String>, default: T) -> Self {
        self.entries.insert(name.into(), default);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, default: T) {
        self.entries.insert(name.into(), default);
    }

    pub fn default_value(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name)
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get_index(index).map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl<T> Default for TokenCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for TokenCatalog<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl TokenCatalog<f32> {
    /// Border radius scale in pixels.
    pub fn radius() -> Self {
        Self::from_iter([
            ("radius-xs", 2.0),
            ("radius-sm", 4.0),
            ("radius-md", 6.0),
            ("radius-lg", 8.0),
            ("radius-xl", 12.0),
            ("radius-2xl", 16.0),
            ("radius-3xl", 24.0),
            ("radius-4xl", 32.0),
        ])
    }

    /// Spacing scale in pixels.
    pub fn spacing() -> Self {
        Self::from_iter([
            ("spacing-xs", 4.0),
            ("spacing-sm", 8.0),
            ("spacing-md", 16.0),
            ("spacing-lg", 24.0),
            ("spacing-xl", 32.0),
            ("spacing-2xl", 48.0),
            ("spacing-3xl", 64.0),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_catalog_is_ordered() {
        let catalog = TokenCatalog::radius();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(
            names,
            vec![
                "radius-xs",
                "radius-sm",
                "radius-md",
                "radius-lg",
                "radius-xl",
                "radius-2xl",
                "radius-3xl",
                "radius-4xl"
            ]
        );
        assert_eq!(catalog.default_value("radius-md"), Some(&6.0));
    }

    #[test]
    fn replacing_keeps_position() {
        let catalog = TokenCatalog::radius().with("radius-xs", 1.0);
        assert_eq!(catalog.index_of("radius-xs"), Some(0));
        assert_eq!(catalog.default_value("radius-xs"), Some(&1.0));
        assert_eq!(catalog.len(), 8);
    }

    #[test]
    fn generic_over_value_type() {
        let catalog: TokenCatalog<&str> = [("gap", "1rem")].into_iter().collect();
        assert_eq!(catalog.name_at(0), Some("gap"));
        assert_eq!(catalog.name_at(1), None);
    }
}
