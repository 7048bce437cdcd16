//! Regex construction and label search primitives shared by all rules.
//!
//! The `regex` crate has no look-around, so "label mentions both A and B"
//! rules are expressed as [`LabelPattern::All`] instead of
//! `(?=.*A)(?=.*B)`. Matching stays linear in the label length.

use regex::{Regex, RegexBuilder};

use crate::error::{Result, RuleError};

/// Compiled-size ceiling for a single pattern.
const PATTERN_SIZE_LIMIT: usize = 1 << 20;

/// Declarative form of a label pattern, used by the static rule tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternSpec {
    /// Case-insensitive search.
    Any(&'static str),
    /// Case-sensitive search.
    Exact(&'static str),
    /// Every case-insensitive regex must match somewhere in the label.
    All(&'static [&'static str]),
}

impl PatternSpec {
    pub fn compile(self) -> Result<LabelPattern> {
        match self {
            PatternSpec::Any(pattern) => LabelPattern::regex(pattern),
            PatternSpec::Exact(pattern) => LabelPattern::case_sensitive(pattern),
            PatternSpec::All(patterns) => LabelPattern::all(patterns),
        }
    }
}

/// A compiled predicate over a label.
#[derive(Debug, Clone)]
pub enum LabelPattern {
    One(Regex),
    All(Vec<Regex>),
}

impl LabelPattern {
    /// Case-insensitive single regex.
    pub fn regex(pattern: &str) -> Result<Self> {
        build_regex(pattern, true).map(LabelPattern::One)
    }

    pub fn case_sensitive(pattern: &str) -> Result<Self> {
        build_regex(pattern, false).map(LabelPattern::One)
    }

    /// Conjunction of case-insensitive regexes.
    pub fn all<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        patterns
            .iter()
            .map(|pattern| build_regex(pattern.as_ref(), true))
            .collect::<Result<Vec<_>>>()
            .map(LabelPattern::All)
    }

    pub fn is_match(&self, label: &str) -> bool {
        let label = match_text(label);
        match self {
            LabelPattern::One(regex) => regex.is_match(label),
            LabelPattern::All(regexes) => {
                !regexes.is_empty() && regexes.iter().all(|regex| regex.is_match(label))
            }
        }
    }
}

/// The part of a label the rule tables see.
///
/// One trailing newline is dropped so that `$` anchors also match a
/// newline-terminated label.
pub fn match_text(label: &str) -> &str {
    label.strip_suffix('\n').unwrap_or(label)
}

/// Returns true if any pattern matches anywhere in `label`.
///
/// An empty label never matches.
pub fn search_any(patterns: &[LabelPattern], label: &str) -> bool {
    !label.is_empty() && patterns.iter().any(|pattern| pattern.is_match(label))
}

/// Builds a regex with the crate-wide size limit.
pub fn build_regex(pattern: &str, case_insensitive: bool) -> Result<Regex> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .size_limit(PATTERN_SIZE_LIMIT)
        .build()
        .map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Compiles a static rule table. Panics on a malformed built-in pattern.
pub(crate) fn compile_table(specs: &[PatternSpec]) -> Vec<LabelPattern> {
    specs
        .iter()
        .map(|spec| {
            spec.compile()
                .unwrap_or_else(|err| panic!("built-in label pattern is invalid: {err}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_text_drops_one_trailing_newline() {
        assert_eq!(match_text("PD\n"), "PD");
        assert_eq!(match_text("PD\n\n"), "PD\n");
        assert_eq!(match_text("\nPD"), "\nPD");
        assert!(!search_any(&[LabelPattern::case_sensitive("^PD$").unwrap()], "\n"));
    }

    #[test]
    fn search_is_unanchored_and_case_insensitive() {
        let patterns = vec![LabelPattern::regex("mprage").unwrap()];
        assert!(search_any(&patterns, "T1 MPRAGE sag"));
        assert!(!search_any(&patterns, "T1 SPGR"));
    }

    #[test]
    fn empty_label_matches_nothing() {
        let patterns = vec![LabelPattern::regex(".*").unwrap()];
        assert!(!search_any(&patterns, ""));
    }

    #[test]
    fn conjunction_needs_every_part() {
        let pattern = LabelPattern::all(&["field", "map"]).unwrap();
        assert!(pattern.is_match("MAP of the FIELD"));
        assert!(!pattern.is_match("field only"));
    }

    #[test]
    fn case_sensitive_pattern() {
        let pattern = LabelPattern::case_sensitive("^PD$").unwrap();
        assert!(pattern.is_match("PD"));
        assert!(!pattern.is_match("pd"));
    }

    #[test]
    fn malformed_pattern_is_an_error() {
        let err = LabelPattern::regex("(unclosed").unwrap_err();
        assert!(err.to_string().contains("(unclosed"));
    }
}
