//! Built-in classification: priority cascade plus secondary tagging.
//!
//! The cascade is a table of (category, assignment) steps evaluated in
//! order; the first category whose predicate matches assigns the primary
//! classification. Specific signals (in-plane anatomy, fieldmaps, derived
//! diffusion maps) come before catch-alls such as plain T1/T2.
//!
//! The T2 step precedes the T1 step. This order is a pinned business rule:
//! changing it reclassifies existing data.

use mrc_model::{Classification, ClassificationKey, Feature, Intent, Measurement};
use mrc_rules::{Category, feature_tags, intent_tags, measurement_tags};
use tracing::{debug, info};

/// Tags assigned when a cascade step fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub intent: &'static [Intent],
    pub measurement: &'static [Measurement],
    pub features: &'static [Feature],
    pub custom: &'static [&'static str],
}

impl Assignment {
    const NONE: Assignment = Assignment {
        intent: &[],
        measurement: &[],
        features: &[],
        custom: &[],
    };

    pub fn apply(&self, classification: &mut Classification) {
        for intent in self.intent {
            classification.push_intent(*intent);
        }
        for measurement in self.measurement {
            classification.push_measurement(*measurement);
        }
        for feature in self.features {
            classification.push_feature(*feature);
        }
        classification.extend(ClassificationKey::Custom, self.custom.iter().copied());
    }

    pub fn to_classification(&self) -> Classification {
        let mut classification = Classification::new();
        self.apply(&mut classification);
        classification
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeStep {
    pub category: Category,
    pub assignment: Assignment,
}

const fn step(category: Category, assignment: Assignment) -> CascadeStep {
    CascadeStep {
        category,
        assignment,
    }
}

/// Primary classification steps, highest priority first.
pub const CASCADE: [CascadeStep; 19] = [
    step(
        Category::AnatomyInplane,
        Assignment {
            intent: &[Intent::Structural],
            measurement: &[Measurement::T1],
            features: &[Feature::InPlane],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Fieldmap,
        Assignment {
            intent: &[Intent::Fieldmap],
            measurement: &[Measurement::B0],
            ..Assignment::NONE
        },
    ),
    step(
        Category::DiffusionDerived,
        Assignment {
            intent: &[Intent::Structural],
            measurement: &[Measurement::Diffusion],
            features: &[Feature::Derived],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Diffusion,
        Assignment {
            intent: &[Intent::Structural],
            measurement: &[Measurement::Diffusion],
            ..Assignment::NONE
        },
    ),
    step(
        Category::FunctionalDerived,
        Assignment {
            intent: &[Intent::Functional],
            features: &[Feature::Derived],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Functional,
        Assignment {
            intent: &[Intent::Functional],
            measurement: &[Measurement::T2Star],
            ..Assignment::NONE
        },
    ),
    step(
        Category::AnatomyT2,
        Assignment {
            intent: &[Intent::Structural],
            measurement: &[Measurement::T2],
            ..Assignment::NONE
        },
    ),
    step(
        Category::AnatomyT1,
        Assignment {
            intent: &[Intent::Structural],
            measurement: &[Measurement::T1],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Anatomy,
        Assignment {
            intent: &[Intent::Structural],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Localizer,
        Assignment {
            intent: &[Intent::Localizer],
            measurement: &[Measurement::T2],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Shim,
        Assignment {
            intent: &[Intent::Shim],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Calibration,
        Assignment {
            intent: &[Intent::Calibration],
            ..Assignment::NONE
        },
    ),
    step(
        Category::CoilSurvey,
        Assignment {
            intent: &[Intent::Calibration],
            measurement: &[Measurement::B1],
            ..Assignment::NONE
        },
    ),
    step(
        Category::ProtonDensity,
        Assignment {
            intent: &[Intent::Structural],
            measurement: &[Measurement::PD],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Perfusion,
        Assignment {
            measurement: &[Measurement::Perfusion],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Susceptibility,
        Assignment {
            measurement: &[Measurement::Susceptibility],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Spectroscopy,
        Assignment {
            intent: &[Intent::Spectroscopy],
            ..Assignment::NONE
        },
    ),
    step(
        Category::PhaseMap,
        Assignment {
            custom: &["Phase Map"],
            ..Assignment::NONE
        },
    ),
    step(
        Category::Screenshot,
        Assignment {
            intent: &[Intent::Screenshot],
            ..Assignment::NONE
        },
    ),
];

/// First cascade step whose category matches `label`.
pub fn primary_step(label: &str) -> Option<&'static CascadeStep> {
    CASCADE.iter().find(|step| step.category.matches(label))
}

/// Appends every dictionary tag found in `label`, skipping duplicates.
///
/// Dictionaries are scanned Feature, Measurement, Intent.
pub fn apply_secondary_tags(label: &str, classification: &mut Classification) {
    for feature in feature_tags().matches(label) {
        classification.push_feature(feature);
    }
    for measurement in measurement_tags().matches(label) {
        classification.push_measurement(measurement);
    }
    for intent in intent_tags().matches(label) {
        classification.push_intent(intent);
    }
}

/// Classifies a label with the built-in rules.
///
/// An absent or empty label yields an empty classification. A label that
/// falls through the whole cascade is reported with an info event and
/// still receives any secondary tags it carries.
pub fn infer_classification<'a>(label: impl Into<Option<&'a str>>) -> Classification {
    let Some(label) = label.into().filter(|label| !label.is_empty()) else {
        return Classification::new();
    };

    let mut classification = Classification::new();
    match primary_step(label) {
        Some(step) => {
            debug!(category = %step.category, "primary category matched");
            step.assignment.apply(&mut classification);
        }
        None => {
            info!("{} ---->>>> unknown", label.trim_matches('\n'));
        }
    }
    apply_secondary_tags(label, &mut classification);
    classification
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Info-level output produced while `f` runs.
    fn info_output(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_target(false)
            .with_level(false)
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    fn tags(classification: &Classification, key: ClassificationKey) -> Vec<&str> {
        classification
            .get(key)
            .map(|tags| tags.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[test]
    fn cascade_covers_every_category_once_in_priority_order() {
        let order: Vec<Category> = CASCADE.iter().map(|step| step.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn t2_is_checked_before_t1() {
        let t2 = CASCADE
            .iter()
            .position(|s| s.category == Category::AnatomyT2)
            .unwrap();
        let t1 = CASCADE
            .iter()
            .position(|s| s.category == Category::AnatomyT1)
            .unwrap();
        assert!(t2 < t1);
        let c = infer_classification("T1_T2_combo");
        assert_eq!(tags(&c, ClassificationKey::Measurement)[0], "T2");
    }

    #[test]
    fn empty_and_absent_labels() {
        assert!(infer_classification(None).is_empty());
        assert!(infer_classification("").is_empty());
        assert!(infer_classification("hkjl").is_empty());
    }

    #[test]
    fn phase_map_goes_to_custom() {
        let c = infer_classification("Phase Map");
        assert_eq!(tags(&c, ClassificationKey::Custom), vec!["Phase Map"]);
    }

    #[test]
    fn secondary_pass_runs_without_primary_match() {
        let c = infer_classification("xyz Multi-Echo");
        assert_eq!(tags(&c, ClassificationKey::Features), vec!["Multi-Echo"]);
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn trailing_newline_does_not_change_classification() {
        for label in ["SE-AP", "DTI_ADC", "Phase", "asset", "PD", "REST", "sag_T1"] {
            let plain = infer_classification(label);
            assert!(!plain.is_empty(), "{label:?}");
            assert_eq!(infer_classification(format!("{label}\n").as_str()), plain, "{label:?}");
        }
        let c = infer_classification("DTI_ADC\n");
        assert_eq!(tags(&c, ClassificationKey::Features), vec!["Derived"]);
    }

    #[test]
    fn unmatched_label_logs_unknown() {
        let output = info_output(|| {
            infer_classification("hkjl");
        });
        assert_eq!(output.trim(), "hkjl ---->>>> unknown");

        let output = info_output(|| {
            infer_classification("hkjl\n");
        });
        assert_eq!(output.trim(), "hkjl ---->>>> unknown");
    }

    #[test]
    fn empty_and_matched_labels_log_nothing() {
        let output = info_output(|| {
            infer_classification("");
            infer_classification(None);
            infer_classification("T1 MPRAGE");
        });
        assert_eq!(output, "");
    }
}
