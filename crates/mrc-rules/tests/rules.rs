use mrc_model::{Feature, Measurement};
use mrc_rules::{
    Category, LabelPattern, PatternSpec, build_regex, feature_tags, measurement_tags, search_any,
    tag_regex,
};
use proptest::prelude::*;

#[test]
fn tag_matches_on_word_and_underscore_boundaries() {
    let t1 = tag_regex("T1").unwrap();
    assert!(t1.is_match("T1 MPRAGE"));
    assert!(t1.is_match("sag_t1_mprage"));
    assert!(t1.is_match("t1_sag"));
    assert!(t1.is_match("sag_T1"));
    assert!(!t1.is_match("T1w"));
}

#[test]
fn measurement_dictionary_keeps_t2_and_t2star_apart() {
    let found: Vec<Measurement> = measurement_tags().matches("ep2d T2* bold").collect();
    assert!(found.contains(&Measurement::T2Star));
    assert!(!found.contains(&Measurement::T2));

    let found: Vec<Measurement> = measurement_tags().matches("AX T2 FLAIR").collect();
    assert_eq!(found, vec![Measurement::T2]);
}

#[test]
fn feature_dictionary_reports_in_vocabulary_order() {
    let found: Vec<Feature> = feature_tags()
        .matches("Phase 3D Multi-Echo")
        .collect();
    assert_eq!(
        found,
        vec![Feature::MultiEcho, Feature::ThreeD, Feature::Phase]
    );
}

#[test]
fn conjunction_requires_every_part() {
    let pattern = PatternSpec::All(&["rest", "state"]).compile().unwrap();
    assert!(pattern.is_match("State of REST"));
    assert!(!pattern.is_match("rest"));
}

#[test]
fn invalid_pattern_is_an_error() {
    assert!(build_regex("(open", true).is_err());
    assert!(LabelPattern::regex("[z-a]").is_err());
}

proptest! {
    #[test]
    fn no_category_matches_an_empty_label(index in 0usize..Category::ALL.len()) {
        prop_assert!(!Category::ALL[index].matches(""));
    }

    #[test]
    fn t2_star_alone_never_tags_t2(prefix in "[a-z ]{0,10}", suffix in "[a-z ]{0,10}") {
        let label = format!("{prefix}T2*{suffix}");
        let found: Vec<Measurement> = measurement_tags().matches(&label).collect();
        prop_assert!(!found.contains(&Measurement::T2));
    }

    #[test]
    fn search_any_over_no_patterns_is_false(label in "\\PC{0,24}") {
        prop_assert!(!search_any(&[], &label));
    }
}
