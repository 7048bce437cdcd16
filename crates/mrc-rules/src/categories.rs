//! Acquisition categories and their label predicates.
//!
//! Each category owns a disjunctive list of patterns encoding scanner and
//! site naming conventions (GE BRAVO/SPGR, Siemens MPRAGE/ep2d, Philips
//! survey scans, task paradigm names). Order inside a list does not
//! matter. Order between categories is decided by the resolver.

use std::fmt;
use std::sync::LazyLock;

use crate::matcher::PatternSpec::{All, Any, Exact};
use crate::matcher::{LabelPattern, PatternSpec, compile_table, search_any};

/// Acquisition archetypes recognized from a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    AnatomyInplane,
    Fieldmap,
    DiffusionDerived,
    Diffusion,
    FunctionalDerived,
    Functional,
    AnatomyT2,
    AnatomyT1,
    Anatomy,
    Localizer,
    Shim,
    Calibration,
    CoilSurvey,
    ProtonDensity,
    Perfusion,
    Susceptibility,
    Spectroscopy,
    PhaseMap,
    Screenshot,
}

impl Category {
    pub const ALL: [Category; 19] = [
        Category::AnatomyInplane,
        Category::Fieldmap,
        Category::DiffusionDerived,
        Category::Diffusion,
        Category::FunctionalDerived,
        Category::Functional,
        Category::AnatomyT2,
        Category::AnatomyT1,
        Category::Anatomy,
        Category::Localizer,
        Category::Shim,
        Category::Calibration,
        Category::CoilSurvey,
        Category::ProtonDensity,
        Category::Perfusion,
        Category::Susceptibility,
        Category::Spectroscopy,
        Category::PhaseMap,
        Category::Screenshot,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AnatomyInplane => "anatomy_inplane",
            Category::Fieldmap => "fieldmap",
            Category::DiffusionDerived => "diffusion_derived",
            Category::Diffusion => "diffusion",
            Category::FunctionalDerived => "functional_derived",
            Category::Functional => "functional",
            Category::AnatomyT2 => "anatomy_t2",
            Category::AnatomyT1 => "anatomy_t1",
            Category::Anatomy => "anatomy",
            Category::Localizer => "localizer",
            Category::Shim => "shim",
            Category::Calibration => "calibration",
            Category::CoilSurvey => "coil_survey",
            Category::ProtonDensity => "proton_density",
            Category::Perfusion => "perfusion",
            Category::Susceptibility => "susceptibility",
            Category::Spectroscopy => "spectroscopy",
            Category::PhaseMap => "phase_map",
            Category::Screenshot => "screenshot",
        }
    }

    /// The pattern table for this category.
    pub fn specs(&self) -> &'static [PatternSpec] {
        match self {
            Category::AnatomyInplane => ANATOMY_INPLANE,
            Category::Fieldmap => FIELDMAP,
            Category::DiffusionDerived => DIFFUSION_DERIVED,
            Category::Diffusion => DIFFUSION,
            Category::FunctionalDerived => FUNCTIONAL_DERIVED,
            Category::Functional => FUNCTIONAL,
            Category::AnatomyT2 => ANATOMY_T2,
            Category::AnatomyT1 => ANATOMY_T1,
            Category::Anatomy => ANATOMY,
            Category::Localizer => LOCALIZER,
            Category::Shim => SHIM,
            Category::Calibration => CALIBRATION,
            Category::CoilSurvey => COIL_SURVEY,
            Category::ProtonDensity => PROTON_DENSITY,
            Category::Perfusion => PERFUSION,
            Category::Susceptibility => SUSCEPTIBILITY,
            Category::Spectroscopy => SPECTROSCOPY,
            Category::PhaseMap => PHASE_MAP,
            Category::Screenshot => SCREENSHOT,
        }
    }

    pub fn patterns(&self) -> &'static [LabelPattern] {
        &COMPILED[*self as usize]
    }

    pub fn matches(&self, label: &str) -> bool {
        search_any(self.patterns(), label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static COMPILED: LazyLock<Vec<Vec<LabelPattern>>> = LazyLock::new(|| {
    Category::ALL
        .iter()
        .map(|category| compile_table(category.specs()))
        .collect()
});

const ANATOMY_INPLANE: &[PatternSpec] = &[Any("inplane")];

const FIELDMAP: &[PatternSpec] = &[
    All(&["field", "map"]),
    All(&["bias", "ch"]),
    Any("field"),
    Any("fmap"),
    Any("topup"),
    Any("DISTORTION"),
    Any("se[-_][aprl]{2}$"),
];

const DIFFUSION_DERIVED: &[PatternSpec] = &[
    Any("_ADC$"),
    Any("_TRACEW$"),
    Any("_ColFA$"),
    Any("_FA$"),
    Any("_EXP$"),
];

const DIFFUSION: &[PatternSpec] = &[
    Any("dti"),
    Any("dwi"),
    Any("diff_"),
    Any("diffusion"),
    All(&["diff", "dir"]),
    Any("hardi"),
];

const FUNCTIONAL_DERIVED: &[PatternSpec] = &[
    Any("mocoseries"),
    Any("GLM$"),
    Any("t-map"),
    Any("design"),
    Any("StartFMRI"),
];

const FUNCTIONAL: &[PatternSpec] = &[
    Any("functional"),
    Any("fmri"),
    Any("func"),
    Any("bold"),
    Any("resting"),
    All(&["rest", "state"]),
    // Site-specific task paradigms
    All(&["ret", "bars"]),
    All(&["ret", "wedges"]),
    All(&["ret", "rings"]),
    All(&["ret", "check"]),
    Any("go-no-go"),
    Any("words"),
    Any("checkers"),
    Any("retinotopy"),
    Any("faces"),
    Any("rings"),
    Any("wedges"),
    Any("emoreg"),
    Any("conscious"),
    Exact("^REST$"),
    Any("ep2d"),
    Any("task"),
    Any("rest"),
    Any("fBIRN"),
    Any("^Curiosity"),
    Any("^DD_"),
    Any("^Poke"),
    Any("^Effort"),
    Any("emotion|conflict"),
];

const ANATOMY_T2: &[PatternSpec] = &[Any("t2")];

const ANATOMY_T1: &[PatternSpec] = &[
    Any("t1"),
    Any("t1w"),
    Any("3d anat"),
    All(&["3d", "bravo"]),
    Any("spgr"),
    Any("tfl"),
    Any("mprage"),
    All(&["mm", "iso"]),
    All(&["mp", "rage"]),
];

const ANATOMY: &[PatternSpec] = &[All(&["IR", "EPI"]), Any("flair")];

const LOCALIZER: &[PatternSpec] = &[
    Any("localizer"),
    Any("localiser"),
    Any("survey"),
    Any(r"loc\."),
    Any(r"\bscout\b"),
    All(&["plane", "loc"]),
    All(&["plane", "survey"]),
    Any("3-plane"),
    Any("^loc*"),
    Any("Scout"),
    Any("AdjGre"),
];

const SHIM: &[PatternSpec] = &[
    All(&["HO", "shim"]),
    Any(r"\bHOS\b"),
    Any("_HOS_"),
    Any("shim"),
];

const CALIBRATION: &[PatternSpec] = &[
    All(&["asset", "cal"]),
    Any("^asset$"),
    Any("calibration"),
];

const COIL_SURVEY: &[PatternSpec] = &[All(&["coil", "survey"])];

const PROTON_DENSITY: &[PatternSpec] = &[
    Exact("^PD$"),
    All(&["proton", "density"]),
    Exact("pd_"),
    Exact("_pd"),
];

const PERFUSION: &[PatternSpec] = &[
    Any("asl"),
    All(&["blood", "flow"]),
    All(&["art", "spin"]),
    Any("tof"),
    Any("perfusion"),
    Any("angio"),
];

const SUSCEPTIBILITY: &[PatternSpec] = &[
    Any(r"\bswi"),
    Any("_swi"),
    Any("susceptib"),
    Any(r"\bqsm"),
];

const SPECTROSCOPY: &[PatternSpec] = &[
    Any("mip"),
    Any("mrs"),
    Any("svs"),
    Any("gaba"),
    Any("csi"),
    Any("nfl"),
    Any("mega"),
    Any("press"),
    Any("spect"),
];

const PHASE_MAP: &[PatternSpec] = &[All(&["phase", "map"]), Any("^phase$")];

const SCREENSHOT: &[PatternSpec] = &[
    All(&["screen", "save"]),
    Any("screenshot"),
    Any("screensave"),
];

pub fn is_anatomy_inplane(label: &str) -> bool {
    Category::AnatomyInplane.matches(label)
}

pub fn is_fieldmap(label: &str) -> bool {
    Category::Fieldmap.matches(label)
}

pub fn is_diffusion_derived(label: &str) -> bool {
    Category::DiffusionDerived.matches(label)
}

pub fn is_diffusion(label: &str) -> bool {
    Category::Diffusion.matches(label)
}

pub fn is_functional_derived(label: &str) -> bool {
    Category::FunctionalDerived.matches(label)
}

pub fn is_functional(label: &str) -> bool {
    Category::Functional.matches(label)
}

pub fn is_anatomy_t2(label: &str) -> bool {
    Category::AnatomyT2.matches(label)
}

pub fn is_anatomy_t1(label: &str) -> bool {
    Category::AnatomyT1.matches(label)
}

pub fn is_anatomy(label: &str) -> bool {
    Category::Anatomy.matches(label)
}

pub fn is_localizer(label: &str) -> bool {
    Category::Localizer.matches(label)
}

pub fn is_shim(label: &str) -> bool {
    Category::Shim.matches(label)
}

pub fn is_calibration(label: &str) -> bool {
    Category::Calibration.matches(label)
}

pub fn is_coil_survey(label: &str) -> bool {
    Category::CoilSurvey.matches(label)
}

pub fn is_proton_density(label: &str) -> bool {
    Category::ProtonDensity.matches(label)
}

pub fn is_perfusion(label: &str) -> bool {
    Category::Perfusion.matches(label)
}

pub fn is_susceptibility(label: &str) -> bool {
    Category::Susceptibility.matches(label)
}

pub fn is_spectroscopy(label: &str) -> bool {
    Category::Spectroscopy.matches(label)
}

pub fn is_phase_map(label: &str) -> bool {
    Category::PhaseMap.matches(label)
}

pub fn is_screenshot(label: &str) -> bool {
    Category::Screenshot.matches(label)
}
