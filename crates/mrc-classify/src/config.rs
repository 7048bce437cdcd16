//! TOML classifier configuration.
//!
//! ```toml
//! timezone = "America/Chicago"
//!
//! [[rules]]
//! pattern = "*localizer*"
//! classification = "Intent: Localizer"
//!
//! [classifications]
//! "/^t1_.*_post$/" = "Intent: Structural, Measurement: T1, Features: Post-Contrast"
//! ```
//!
//! `[[rules]]` entries are evaluated first, in file order, followed by
//! `[classifications]` entries in key order.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use mrc_model::OverrideRule;
use serde::Deserialize;
use tracing::warn;

use crate::error::{ClassifyError, Result};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassifierConfig {
    /// Instrument timezone (IANA name) used for header timestamps.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub rules: Vec<OverrideRule>,
    #[serde(default)]
    pub classifications: BTreeMap<String, toml::Value>,
}

impl ClassifierConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| ClassifyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ClassifyError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// All override rules in evaluation order.
    ///
    /// Non-string `[classifications]` values are skipped with a warning.
    pub fn override_rules(&self) -> Vec<OverrideRule> {
        let mut rules = self.rules.clone();
        for (pattern, value) in &self.classifications {
            match value.as_str() {
                Some(classification) => rules.push(OverrideRule::new(pattern, classification)),
                None => warn!(
                    pattern = %pattern,
                    "override classification must be a string; rule skipped"
                ),
            }
        }
        rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_rule_forms_in_order() {
        let config: ClassifierConfig = toml::from_str(
            r#"
timezone = "UTC"

[[rules]]
pattern = "*scout*"
classification = "Intent: Localizer"

[[rules]]
pattern = "/^ep2d/"
classification = "Intent: Functional"

[classifications]
"b*" = "Custom: B"
"a*" = "Custom: A"
"n*" = 3
"#,
        )
        .unwrap();

        assert_eq!(config.timezone.as_deref(), Some("UTC"));
        let patterns: Vec<String> = config
            .override_rules()
            .into_iter()
            .map(|rule| rule.pattern)
            .collect();
        assert_eq!(patterns, vec!["*scout*", "/^ep2d/", "a*", "b*"]);
    }

    #[test]
    fn empty_config_is_valid() {
        let config: ClassifierConfig = toml::from_str("").unwrap();
        assert!(config.override_rules().is_empty());
        assert!(config.timezone.is_none());
    }
}
