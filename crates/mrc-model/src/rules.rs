use serde::{Deserialize, Serialize};

/// A deployment-supplied rule that pre-empts the built-in classifier.
///
/// `pattern` is either a slash-delimited regex (`/^t1_/`) or a
/// case-insensitive glob (`*localizer*`). `classification` uses the
/// `Key: value, value, Key: value` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideRule {
    pub pattern: String,
    pub classification: String,
}

impl OverrideRule {
    pub fn new(pattern: impl Into<String>, classification: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            classification: classification.into(),
        }
    }

    /// Returns the regex body when the pattern is slash-delimited.
    pub fn regex_body(&self) -> Option<&str> {
        let pattern = self.pattern.as_str();
        if pattern.len() >= 2 && pattern.starts_with('/') && pattern.ends_with('/') {
            Some(&pattern[1..pattern.len() - 1])
        } else {
            None
        }
    }
}
