//! Tag dictionaries for the secondary tagging pass.
//!
//! Each vocabulary tag gets a regex that accepts the tag as a whole word
//! or delimited by underscores (`DTI_64dir`, `t1 mprage`, `_bold`).
//! `T2` and `T2*` are kept disjoint.

use std::sync::LazyLock;

use mrc_model::{Feature, Intent, Measurement};
use regex::Regex;

use crate::error::Result;
use crate::matcher::{build_regex, match_text};

/// A vocabulary whose members can be looked up in a label.
pub trait Tag: Copy + 'static {
    fn tag_str(self) -> &'static str;
}

impl Tag for Feature {
    fn tag_str(self) -> &'static str {
        self.as_str()
    }
}

impl Tag for Measurement {
    fn tag_str(self) -> &'static str {
        self.as_str()
    }
}

impl Tag for Intent {
    fn tag_str(self) -> &'static str {
        self.as_str()
    }
}

/// Builds the case-insensitive matcher for a literal tag.
pub fn tag_regex(tag: &str) -> Result<Regex> {
    let pattern = match tag {
        "T2" => r"\bT2(?:[^\w*]|$)|_T2_|^T2_|_T2$".to_string(),
        "T2*" => r"\bT2\*|_T2\*_|^T2\*_|_T2\*$|t2star".to_string(),
        _ => {
            let escaped = regex::escape(tag);
            format!(r"\b{escaped}\b|_{escaped}_|^{escaped}_|_{escaped}$")
        }
    };
    build_regex(&pattern, true)
}

#[derive(Debug, Clone)]
struct TagEntry<T> {
    tag: T,
    regex: Regex,
}

impl<T: Tag> TagEntry<T> {
    fn is_match(&self, label: &str) -> bool {
        self.regex.is_match(match_text(label))
    }
}

/// Ordered (tag, regex) pairs for one vocabulary.
#[derive(Debug, Clone)]
pub struct TagDictionary<T> {
    entries: Vec<TagEntry<T>>,
}

impl<T: Tag> TagDictionary<T> {
    pub fn new(tags: impl IntoIterator<Item = T>) -> Result<Self> {
        let entries = tags
            .into_iter()
            .map(|tag| {
                tag_regex(tag.tag_str()).map(|regex| TagEntry { tag, regex })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// Tags found in `label`, in dictionary order.
    pub fn matches<'a>(&'a self, label: &'a str) -> impl Iterator<Item = T> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.is_match(label))
            .map(|entry| entry.tag)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static FEATURE_TAGS: LazyLock<TagDictionary<Feature>> = LazyLock::new(|| {
    TagDictionary::new(Feature::ALL).expect("feature tag patterns are valid")
});

static MEASUREMENT_TAGS: LazyLock<TagDictionary<Measurement>> = LazyLock::new(|| {
    TagDictionary::new(Measurement::ALL).expect("measurement tag patterns are valid")
});

static INTENT_TAGS: LazyLock<TagDictionary<Intent>> = LazyLock::new(|| {
    TagDictionary::new(Intent::ALL).expect("intent tag patterns are valid")
});

pub fn feature_tags() -> &'static TagDictionary<Feature> {
    &FEATURE_TAGS
}

pub fn measurement_tags() -> &'static TagDictionary<Measurement> {
    &MEASUREMENT_TAGS
}

pub fn intent_tags() -> &'static TagDictionary<Intent> {
    &INTENT_TAGS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(tag: &str, label: &str) -> bool {
        tag_regex(tag).unwrap().is_match(label)
    }

    #[test]
    fn word_and_underscore_delimiters() {
        assert!(matches("BOLD", "resting BOLD run"));
        assert!(matches("BOLD", "rest_bold_run"));
        assert!(matches("BOLD", "bold_run"));
        assert!(matches("BOLD", "rest_bold"));
        assert!(!matches("BOLD", "boldness"));
    }

    #[test]
    fn t2_excludes_star() {
        assert!(matches("T2", "AX T2 FLAIR"));
        assert!(matches("T2", "T2"));
        assert!(matches("T2", "ax_t2_tse"));
        assert!(!matches("T2", "T2* GRE"));
        assert!(!matches("T2", "localizer_T2star_bold"));
        assert!(!matches("T2", "ax_t2*_gre"));
    }

    #[test]
    fn t2_star_accepts_alias() {
        assert!(matches("T2*", "T2* GRE"));
        assert!(matches("T2*", "localizer_T2star_bold"));
        assert!(matches("T2*", "ax_t2*_gre"));
        assert!(!matches("T2*", "AX T2 FLAIR"));
    }

    #[test]
    fn dictionaries_report_in_order() {
        let found: Vec<_> = measurement_tags().matches("T1 T2 B0").collect();
        assert_eq!(found, vec![Measurement::B0, Measurement::T1, Measurement::T2]);
        assert_eq!(feature_tags().len(), Feature::ALL.len());
        assert_eq!(intent_tags().len(), Intent::ALL.len());
    }

    #[test]
    fn hyphenated_and_numeric_tags() {
        assert!(matches("Multi-Band", "fMRI multi-band x8"));
        assert!(matches("3D", "3D_T1"));
        assert!(!matches("3D", "T1_3DFSE"));
    }
}
