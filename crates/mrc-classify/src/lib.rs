//! Classification of MR series description labels.
//!
//! A label first goes through deployment override rules ([`custom`]); if
//! none match, the built-in priority cascade and tag dictionaries
//! ([`resolver`]) produce the classification.
//!
//! # Example
//!
//! ```
//! use mrc_classify::Classifier;
//! use mrc_model::ClassificationKey;
//!
//! let classifier = Classifier::new();
//! let classification = classifier.classify("T1 MPRAGE");
//! assert_eq!(
//!     classification.get(ClassificationKey::Measurement),
//!     Some(&["T1".to_string()][..])
//! );
//! ```

pub mod classifier;
pub mod config;
pub mod custom;
pub mod error;
mod glob;
pub mod resolver;

pub use classifier::Classifier;
pub use config::ClassifierConfig;
pub use custom::{CustomRules, parse_classification, resolve_custom};
pub use error::{ClassifyError, Result};
pub use glob::glob_to_regex;
pub use resolver::{
    Assignment, CASCADE, CascadeStep, apply_secondary_tags, infer_classification, primary_step,
};
