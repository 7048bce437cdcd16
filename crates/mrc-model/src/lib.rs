//! Data model for MR acquisition label classification.
//!
//! - [`Classification`]: key to ordered, unique tag lists
//! - [`Intent`], [`Measurement`], [`Feature`]: tag vocabularies
//! - [`OverrideRule`]: deployment-supplied classification override
//! - [`MetadataDocument`]: per-acquisition output document

pub mod classification;
pub mod document;
pub mod error;
pub mod rules;
pub mod tags;

pub use classification::{Classification, ClassificationKey};
pub use document::{Acquisition, MetadataDocument, Session, Subject};
pub use error::{ModelError, Result};
pub use rules::OverrideRule;
pub use tags::{Feature, Intent, Measurement};
