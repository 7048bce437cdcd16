//! The classification produced for a single label.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::tags::{Feature, Intent, Measurement};

/// Top-level keys of a classification.
///
/// Variant order is the serialization order of a [`Classification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassificationKey {
    Intent,
    Measurement,
    Features,
    Custom,
    Contrast,
}

impl ClassificationKey {
    pub const ALL: [ClassificationKey; 5] = [
        ClassificationKey::Intent,
        ClassificationKey::Measurement,
        ClassificationKey::Features,
        ClassificationKey::Custom,
        ClassificationKey::Contrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassificationKey::Intent => "Intent",
            ClassificationKey::Measurement => "Measurement",
            ClassificationKey::Features => "Features",
            ClassificationKey::Custom => "Custom",
            ClassificationKey::Contrast => "Contrast",
        }
    }
}

impl fmt::Display for ClassificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassificationKey {
    type Err = ModelError;

    /// Parse a key name (case-insensitive). `Feature` is accepted for `Features`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        match normalized.as_str() {
            "INTENT" => Ok(ClassificationKey::Intent),
            "MEASUREMENT" => Ok(ClassificationKey::Measurement),
            "FEATURES" | "FEATURE" => Ok(ClassificationKey::Features),
            "CUSTOM" => Ok(ClassificationKey::Custom),
            "CONTRAST" => Ok(ClassificationKey::Contrast),
            _ => Err(ModelError::UnknownKey(s.to_string())),
        }
    }
}

/// Mapping from classification key to an ordered list of unique tags.
///
/// A key is present only while it holds at least one tag. Tags keep
/// insertion order and are never duplicated within a key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<ClassificationKey, Vec<String>>",
    into = "BTreeMap<ClassificationKey, Vec<String>>"
)]
pub struct Classification {
    entries: BTreeMap<ClassificationKey, Vec<String>>,
}

impl Classification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `tag` under `key` unless it is empty or already present.
    ///
    /// Returns true when the tag was added.
    pub fn push(&mut self, key: ClassificationKey, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if tag.is_empty() {
            return false;
        }
        let values = self.entries.entry(key).or_default();
        if values.contains(&tag) {
            return false;
        }
        values.push(tag);
        true
    }

    /// Appends every tag in order, skipping duplicates.
    pub fn extend<I, S>(&mut self, key: ClassificationKey, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.push(key, tag);
        }
    }

    pub fn push_intent(&mut self, intent: Intent) -> bool {
        self.push(ClassificationKey::Intent, intent.as_str())
    }

    pub fn push_measurement(&mut self, measurement: Measurement) -> bool {
        self.push(ClassificationKey::Measurement, measurement.as_str())
    }

    pub fn push_feature(&mut self, feature: Feature) -> bool {
        self.push(ClassificationKey::Features, feature.as_str())
    }

    /// Replaces all tags under `key`. An empty list removes the key.
    pub fn set<I, S>(&mut self, key: ClassificationKey, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.remove(&key);
        self.extend(key, tags);
        self.prune(key);
    }

    pub fn get(&self, key: ClassificationKey) -> Option<&[String]> {
        self.entries.get(&key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: ClassificationKey, tag: &str) -> bool {
        self.get(key)
            .is_some_and(|tags| tags.iter().any(|t| t == tag))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClassificationKey, &[String])> + '_ {
        self.entries.iter().map(|(key, tags)| (*key, tags.as_slice()))
    }

    fn prune(&mut self, key: ClassificationKey) {
        if self.entries.get(&key).is_some_and(Vec::is_empty) {
            self.entries.remove(&key);
        }
    }
}

impl From<BTreeMap<ClassificationKey, Vec<String>>> for Classification {
    fn from(map: BTreeMap<ClassificationKey, Vec<String>>) -> Self {
        let mut classification = Classification::new();
        for (key, tags) in map {
            classification.extend(key, tags);
            classification.prune(key);
        }
        classification
    }
}

impl From<Classification> for BTreeMap<ClassificationKey, Vec<String>> {
    fn from(classification: Classification) -> Self {
        classification.entries
    }
}

impl fmt::Display for Classification {
    /// Compact `Key: a, b; Key: c` rendering for tables and logs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, tags) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{key}: {}", tags.join(", "))?;
        }
        Ok(())
    }
}
