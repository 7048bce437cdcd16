//! Entry point combining override rules with the built-in cascade.

use mrc_model::{Classification, OverrideRule};

use crate::config::ClassifierConfig;
use crate::custom::CustomRules;
use crate::resolver::infer_classification;

/// Label classifier with optional deployment overrides.
///
/// Holds only immutable compiled rules, so one instance can be shared
/// across threads and used for any number of labels.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    overrides: CustomRules,
}

impl Classifier {
    /// Classifier using only the built-in rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(rules: &[OverrideRule]) -> Self {
        Self {
            overrides: CustomRules::compile(rules),
        }
    }

    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::with_overrides(&config.override_rules())
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Classifies one label.
    ///
    /// An absent or empty label yields an empty classification without
    /// consulting any rule. A matching override replaces the built-in
    /// classification entirely.
    pub fn classify<'a>(&self, label: impl Into<Option<&'a str>>) -> Classification {
        let Some(label) = label.into().filter(|label| !label.is_empty()) else {
            return Classification::new();
        };
        self.overrides
            .resolve(label)
            .unwrap_or_else(|| infer_classification(label))
    }
}
