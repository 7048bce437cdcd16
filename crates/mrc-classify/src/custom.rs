//! Deployment-supplied override rules.
//!
//! An override rule maps a label pattern to a classification string. The
//! first matching rule wins and the built-in cascade is skipped for that
//! label. Broken rules are logged once when compiled and never match.

use mrc_model::{Classification, ClassificationKey, Feature, Intent, Measurement, OverrideRule};
use mrc_rules::build_regex;
use regex::Regex;
use tracing::{debug, warn};

use crate::glob::glob_to_regex;

/// Parses `Key: value, value, Key: value` into a classification.
///
/// A segment without a key inherits the most recent key, or goes under
/// `Custom` when no key has been seen yet. Unknown key names also map to
/// `Custom`. Neither case is an error. Intent, Measurement and Features
/// tags outside the built-in vocabulary are kept as written and warned
/// about.
pub fn parse_classification(value: &str) -> Classification {
    let mut classification = Classification::new();
    let mut current: Option<ClassificationKey> = None;

    for part in value.split(',') {
        let (key, tag) = match part.split_once(':') {
            Some((name, tag)) => {
                let key = name.parse::<ClassificationKey>().unwrap_or_else(|_| {
                    warn!(key = name.trim(), "unknown classification key; using Custom");
                    ClassificationKey::Custom
                });
                current = Some(key);
                (key, tag)
            }
            None => match current {
                Some(key) => (key, part),
                None => {
                    if !part.trim().is_empty() {
                        warn!(
                            value = part.trim(),
                            "classification value has no key; using Custom"
                        );
                    }
                    (ClassificationKey::Custom, part)
                }
            },
        };
        let tag = tag.trim();
        if !tag.is_empty() && !is_known_tag(key, tag) {
            warn!(key = %key, tag, "tag is not in the built-in vocabulary; kept as given");
        }
        classification.push(key, tag);
    }

    classification
}

/// Whether `tag` belongs to the vocabulary of `key`. Keys without a fixed
/// vocabulary accept anything.
fn is_known_tag(key: ClassificationKey, tag: &str) -> bool {
    match key {
        ClassificationKey::Intent => tag.parse::<Intent>().is_ok(),
        ClassificationKey::Measurement => tag.parse::<Measurement>().is_ok(),
        ClassificationKey::Features => tag.parse::<Feature>().is_ok(),
        _ => true,
    }
}

#[derive(Debug, Clone)]
enum RuleMatcher {
    Regex(Regex),
    Glob(Regex),
    Disabled,
}

#[derive(Debug, Clone)]
struct CompiledRule {
    pattern: String,
    matcher: RuleMatcher,
    classification: Classification,
}

impl CompiledRule {
    fn compile(rule: &OverrideRule) -> Self {
        let matcher = match rule.regex_body() {
            Some(body) => match build_regex(body, true) {
                Ok(regex) => RuleMatcher::Regex(regex),
                Err(err) => {
                    warn!(pattern = %rule.pattern, error = %err, "invalid override regex; rule disabled");
                    RuleMatcher::Disabled
                }
            },
            None => match build_regex(&glob_to_regex(&rule.pattern.to_lowercase()), true) {
                Ok(regex) => RuleMatcher::Glob(regex),
                Err(err) => {
                    warn!(pattern = %rule.pattern, error = %err, "invalid override glob; rule disabled");
                    RuleMatcher::Disabled
                }
            },
        };
        Self {
            pattern: rule.pattern.clone(),
            matcher,
            classification: parse_classification(&rule.classification),
        }
    }

    fn is_match(&self, label: &str, lowered: &str) -> bool {
        match &self.matcher {
            RuleMatcher::Regex(regex) => regex.is_match(label),
            RuleMatcher::Glob(regex) => regex.is_match(lowered),
            RuleMatcher::Disabled => false,
        }
    }
}

/// Compiled override rules, evaluated in order.
#[derive(Debug, Clone, Default)]
pub struct CustomRules {
    rules: Vec<CompiledRule>,
}

impl CustomRules {
    pub fn compile<'a>(rules: impl IntoIterator<Item = &'a OverrideRule>) -> Self {
        Self {
            rules: rules.into_iter().map(CompiledRule::compile).collect(),
        }
    }

    /// Classification of the first rule matching `label`, if any.
    pub fn resolve(&self, label: &str) -> Option<Classification> {
        if self.rules.is_empty() {
            return None;
        }
        let lowered = label.to_lowercase();
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.is_match(label, &lowered))?;
        debug!(pattern = %rule.pattern, "override rule matched");
        Some(rule.classification.clone())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Number of rules that failed to compile.
    pub fn disabled_count(&self) -> usize {
        self.rules
            .iter()
            .filter(|rule| matches!(rule.matcher, RuleMatcher::Disabled))
            .count()
    }
}

/// One-shot form of [`CustomRules::resolve`].
pub fn resolve_custom(label: &str, rules: &[OverrideRule]) -> Option<Classification> {
    CustomRules::compile(rules).resolve(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(classification: &Classification, key: ClassificationKey) -> Vec<String> {
        classification
            .get(key)
            .map(<[String]>::to_vec)
            .unwrap_or_default()
    }

    #[test]
    fn parse_keyed_segments() {
        let c = parse_classification("Intent: Structural, Measurement: T1, Features: 3D");
        assert_eq!(tags(&c, ClassificationKey::Intent), vec!["Structural"]);
        assert_eq!(tags(&c, ClassificationKey::Measurement), vec!["T1"]);
        assert_eq!(tags(&c, ClassificationKey::Features), vec!["3D"]);
    }

    #[test]
    fn keyless_segment_inherits_previous_key() {
        let c = parse_classification("Features: Multi-Band, Multi-Echo, Intent: Functional");
        assert_eq!(
            tags(&c, ClassificationKey::Features),
            vec!["Multi-Band", "Multi-Echo"]
        );
        assert_eq!(tags(&c, ClassificationKey::Intent), vec!["Functional"]);
    }

    #[test]
    fn keyless_first_segment_goes_to_custom() {
        let c = parse_classification("Special, Intent: Shim");
        assert_eq!(tags(&c, ClassificationKey::Custom), vec!["Special"]);
        assert_eq!(tags(&c, ClassificationKey::Intent), vec!["Shim"]);
    }

    #[test]
    fn unknown_key_goes_to_custom() {
        let c = parse_classification("Modality: MR, Site-A");
        assert_eq!(tags(&c, ClassificationKey::Custom), vec!["MR", "Site-A"]);
    }

    #[test]
    fn empty_segments_are_skipped() {
        let c = parse_classification("Intent: , ,Intent: Shim,");
        assert_eq!(tags(&c, ClassificationKey::Intent), vec!["Shim"]);
        assert_eq!(c.len(), 1);
        assert!(parse_classification("").is_empty());
    }

    #[test]
    fn vocabulary_check_per_key() {
        assert!(is_known_tag(ClassificationKey::Intent, "Structural"));
        assert!(is_known_tag(ClassificationKey::Measurement, "t2*"));
        assert!(is_known_tag(ClassificationKey::Features, "Multi-Echo"));
        assert!(!is_known_tag(ClassificationKey::Intent, "Custom-Loc"));
        assert!(!is_known_tag(ClassificationKey::Features, "T1"));
        assert!(is_known_tag(ClassificationKey::Custom, "anything"));
        assert!(is_known_tag(ClassificationKey::Contrast, "Gd"));
    }

    #[test]
    fn out_of_vocabulary_tags_are_kept() {
        let c = parse_classification("Intent: Custom-Loc, Measurement: T1");
        assert_eq!(tags(&c, ClassificationKey::Intent), vec!["Custom-Loc"]);
        assert_eq!(tags(&c, ClassificationKey::Measurement), vec!["T1"]);
    }

    #[test]
    fn glob_is_case_insensitive() {
        let rules = [OverrideRule::new("*LOCALIZER*", "Intent: Custom-Loc")];
        let c = resolve_custom("3-plane Localizer", &rules).unwrap();
        assert_eq!(tags(&c, ClassificationKey::Intent), vec!["Custom-Loc"]);
    }

    #[test]
    fn regex_rule_searches_unanchored() {
        let rules = [OverrideRule::new("/t1.*post/", "Features: Post-Contrast")];
        assert!(resolve_custom("AX T1 SE POST GAD", &rules).is_some());
        assert!(resolve_custom("AX T1 SE PRE", &rules).is_none());
    }

    #[test]
    fn first_matching_rule_wins() {
        let rules = [
            OverrideRule::new("*bold*", "Custom: first"),
            OverrideRule::new("/bold/", "Custom: second"),
        ];
        let c = resolve_custom("rest_bold", &rules).unwrap();
        assert_eq!(tags(&c, ClassificationKey::Custom), vec!["first"]);
    }

    #[test]
    fn malformed_regex_is_skipped() {
        let rules = [
            OverrideRule::new("/(unclosed/", "Custom: broken"),
            OverrideRule::new("*unclosed*", "Custom: fallback"),
        ];
        let compiled = CustomRules::compile(&rules);
        assert_eq!(compiled.disabled_count(), 1);
        let c = compiled.resolve("(unclosed").unwrap();
        assert_eq!(tags(&c, ClassificationKey::Custom), vec!["fallback"]);
    }

    #[test]
    fn no_rules_means_no_override() {
        assert!(resolve_custom("anything", &[]).is_none());
        assert!(CustomRules::default().resolve("anything").is_none());
    }
}
