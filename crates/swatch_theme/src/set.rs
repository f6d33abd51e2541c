//! Resolved token sets.

use serde::{Deserialize, Serialize};

use crate::builder::SourceConfig;
use crate::token::ThemeToken;

#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// One fully resolved mode: a value for every [`ThemeToken`].
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeTokenSet {
    scheme: ColorScheme,
    values: Vec<String>,
}

impl ThemeTokenSet {
    /// `values` must be in [`ThemeToken::ALL`] order.
    pub(crate) fn from_values(scheme: ColorScheme, values: Vec<String>) -> Self {
        debug_assert_eq!(values.len(), ThemeToken::ALL.len());
        Self { scheme, values }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    pub fn get(&self, token: ThemeToken) -> &str {
        &self.values[token.index()]
    }

    /// Look up by key, e.g. `"card-foreground"`.
    pub fn get_key(&self, key: &str) -> Option<&str> {
        ThemeToken::from_key(key).map(|token| self.get(token))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ThemeToken, &str)> {
        ThemeToken::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Flatten back into a source config, e.g. for storage.
    pub fn to_config(&self) -> SourceConfig {
        self.iter()
            .map(|(token, value)| (token.key().to_string(), value.to_string()))
            .collect()
    }
}

/// Light and dark token sets for one theme.
#[derive(Clone, Debug, PartialEq)]
pub struct ThemeBundle {
    pub light: ThemeTokenSet,
    pub dark: ThemeTokenSet,
}

impl ThemeBundle {
    pub fn new(light: ThemeTokenSet, dark: ThemeTokenSet) -> Self {
        Self { light, dark }
    }

    pub fn for_scheme(&self, scheme: ColorScheme) -> &ThemeTokenSet {
        match scheme {
            ColorScheme::Light => &self.light,
            ColorScheme::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ThemeTokenSetBuilder;

    fn defaults() -> ThemeBundle {
        ThemeTokenSetBuilder::new().build(&SourceConfig::new(), &SourceConfig::new())
    }

    #[test]
    fn to_config_keeps_catalog_order() {
        let config = defaults().light.to_config();
        let keys: Vec<&str> = config.keys().map(String::as_str).collect();
        let expected: Vec<&str> = ThemeToken::ALL.iter().map(|t| t.key()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn get_key() {
        let bundle = defaults();
        assert_eq!(bundle.dark.get_key("radius"), Some("0.625rem"));
        assert_eq!(bundle.dark.get_key("nope"), None);
        assert_eq!(bundle.dark.scheme(), ColorScheme::Dark);
    }

    #[test]
    fn rebuilding_from_own_config_is_stable() {
        let bundle = defaults();
        let rebuilt = ThemeTokenSetBuilder::new()
            .build(&bundle.light.to_config(), &bundle.dark.to_config());
        assert_eq!(rebuilt, bundle);
    }
}
