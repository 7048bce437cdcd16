//! Subject fields: sex, age and patient name.
//!
//! Patient names are PHI. Nothing in this module logs them.

use mrc_model::Subject;

use crate::age::parse_patient_age;
use crate::header::{Header, field_str};

pub fn sex_string(code: &str) -> Option<&'static str> {
    match code.trim() {
        "M" => Some("male"),
        "F" => Some("female"),
        _ => None,
    }
}

/// A `Family^Given^Middle^Prefix^Suffix` person name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonName {
    pub family: Option<String>,
    pub given: Option<String>,
}

impl PersonName {
    pub fn parse(value: &str) -> Self {
        let mut components = value.split('^').map(|part| {
            let part = part.trim();
            (!part.is_empty()).then(|| part.to_string())
        });
        let family = components.next().flatten();
        let given = components.next().flatten();
        Self { family, given }
    }

    /// First and last name for the subject record.
    ///
    /// When only one component is present and it holds exactly two
    /// space-separated words, the words are taken as first and last name.
    pub fn first_last(&self) -> (Option<String>, Option<String>) {
        match (&self.given, &self.family) {
            (Some(given), Some(family)) => (Some(given.clone()), Some(family.clone())),
            (Some(single), None) | (None, Some(single)) => match split_two_words(single) {
                Some((first, last)) => (Some(first), Some(last)),
                None if self.given.is_some() => (Some(single.clone()), None),
                None => (None, Some(single.clone())),
            },
            (None, None) => (None, None),
        }
    }
}

fn split_two_words(value: &str) -> Option<(String, String)> {
    let words: Vec<&str> = value.split(' ').collect();
    match words.as_slice() {
        [first, last] => Some(((*first).to_string(), (*last).to_string())),
        _ => None,
    }
}

pub fn subject_from_header(header: &Header) -> Subject {
    let mut subject = Subject {
        sex: field_str(header, "PatientSex")
            .and_then(|code| sex_string(&code))
            .map(str::to_string),
        age: field_str(header, "PatientAge").and_then(|age| parse_patient_age(&age)),
        ..Subject::default()
    };
    if let Some(name) = field_str(header, "PatientName") {
        let (first, last) = PersonName::parse(&name).first_last();
        subject.firstname = first;
        subject.lastname = last;
    }
    subject
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(value: &str) -> (Option<String>, Option<String>) {
        PersonName::parse(value).first_last()
    }

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn sex_codes() {
        assert_eq!(sex_string("M"), Some("male"));
        assert_eq!(sex_string("F"), Some("female"));
        assert_eq!(sex_string("O"), None);
        assert_eq!(sex_string(""), None);
    }

    #[test]
    fn family_and_given() {
        assert_eq!(names("Doe^Jane"), (some("Jane"), some("Doe")));
        assert_eq!(names("Doe^Jane^Q^^"), (some("Jane"), some("Doe")));
    }

    #[test]
    fn single_component_with_two_words_is_split() {
        assert_eq!(names("Jane Doe"), (some("Jane"), some("Doe")));
        assert_eq!(names("^Jane Doe"), (some("Jane"), some("Doe")));
    }

    #[test]
    fn single_component_otherwise_kept() {
        assert_eq!(names("Doe"), (None, some("Doe")));
        assert_eq!(names("^Jane"), (some("Jane"), None));
        assert_eq!(names("Mary Jane Doe"), (None, some("Mary Jane Doe")));
        assert_eq!(names(""), (None, None));
    }
}
