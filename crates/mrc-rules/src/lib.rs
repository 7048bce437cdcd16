//! Label pattern tables for MR acquisition classification.
//!
//! - [`matcher`]: regex construction and `search_any`
//! - [`tags`]: Feature / Measurement / Intent tag dictionaries
//! - [`categories`]: per-category label predicates
//!
//! All tables are immutable statics compiled on first use and can be
//! shared freely across threads.

pub mod categories;
pub mod error;
pub mod matcher;
pub mod tags;

pub use categories::{
    Category, is_anatomy, is_anatomy_inplane, is_anatomy_t1, is_anatomy_t2, is_calibration,
    is_coil_survey, is_diffusion, is_diffusion_derived, is_fieldmap, is_functional,
    is_functional_derived, is_localizer, is_perfusion, is_phase_map, is_proton_density,
    is_screenshot, is_shim, is_spectroscopy, is_susceptibility,
};
pub use error::{Result, RuleError};
pub use matcher::{LabelPattern, PatternSpec, build_regex, match_text, search_any};
pub use tags::{Tag, TagDictionary, feature_tags, intent_tags, measurement_tags, tag_regex};
