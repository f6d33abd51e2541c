//! Persisted theme records.
//!
//! The stored shape is the registry's:
//!
//! ```json
//! { "name": "slate", "lightModeConfig": { ... }, "darkModeConfig": { ... } }
//! ```

use serde::{Deserialize, Serialize};

use crate::builder::{SourceConfig, ThemeTokenSetBuilder};
use crate::error::Result;
use crate::set::ThemeBundle;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeRecord {
    pub name: String,
    #[serde(default)]
    pub light_mode_config: SourceConfig,
    #[serde(default)]
    pub dark_mode_config: SourceConfig,
}

impl ThemeRecord {
    pub fn from_bundle(name: impl Into<String>, bundle: &ThemeBundle) -> Self {
        Self {
            name: name.into(),
            light_mode_config: bundle.light.to_config(),
            dark_mode_config: bundle.dark.to_config(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Run the stored configs back through the builder. Partial or older
    /// records come back complete and OKLCH-normalized.
    pub fn rebuild(&self, builder: &ThemeTokenSetBuilder) -> ThemeBundle {
        tracing::debug!(name = %self.name, "rebuilding theme record");
        builder.build(&self.light_mode_config, &self.dark_mode_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ThemeError, ThemeToken};

    #[test]
    fn json_uses_camel_case_keys() {
        let mut record = ThemeRecord {
            name: "custom".into(),
            ..Default::default()
        };
        record
            .light_mode_config
            .insert("primary".into(), "#3b82f6".into());

        let json = record.to_json().unwrap();
        assert!(json.contains("\"lightModeConfig\""));
        assert!(json.contains("\"darkModeConfig\""));
        assert_eq!(ThemeRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn missing_modes_default_to_empty() {
        let record = ThemeRecord::from_json(r#"{ "name": "bare" }"#).unwrap();
        assert!(record.light_mode_config.is_empty());

        let bundle = record.rebuild(&ThemeTokenSetBuilder::new());
        assert_eq!(bundle.dark.get(ThemeToken::Radius), "0.625rem");
    }

    #[test]
    fn rebuild_normalizes_legacy_values() {
        let record = ThemeRecord::from_json(
            r#"{
                "name": "legacy",
                "lightModeConfig": { "primary": "217 91% 60%", "card": "rgb(255, 255, 255)" },
                "darkModeConfig": { "primary": "hsl(217 91% 60%)" }
            }"#,
        )
        .unwrap();

        let bundle = record.rebuild(&ThemeTokenSetBuilder::new());
        assert_eq!(bundle.light.get(ThemeToken::Card), "oklch(100.0% 0.000 0)");
        assert!(bundle.light.get(ThemeToken::Primary).starts_with("oklch("));
        assert_eq!(
            bundle.light.get(ThemeToken::Primary),
            bundle.dark.get(ThemeToken::Primary)
        );
    }

    #[test]
    fn invalid_json_is_an_error() {
        let err = ThemeRecord::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ThemeError::Json(_)));
    }
}
