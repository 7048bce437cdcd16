//! Tag vocabularies used in classifications.
//!
//! Each vocabulary is a closed set of canonical tag strings. The `ALL`
//! arrays fix the order in which the secondary tagging pass reports matches,
//! so appending to them is safe but reordering changes output order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// High-level purpose of an acquisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Structural,
    Functional,
    Localizer,
    Shim,
    Calibration,
    Fieldmap,
    Spectroscopy,
    Screenshot,
    #[serde(rename = "Non-Image")]
    NonImage,
}

impl Intent {
    pub const ALL: [Intent; 9] = [
        Intent::Structural,
        Intent::Functional,
        Intent::Localizer,
        Intent::Shim,
        Intent::Calibration,
        Intent::Fieldmap,
        Intent::Spectroscopy,
        Intent::Screenshot,
        Intent::NonImage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Structural => "Structural",
            Intent::Functional => "Functional",
            Intent::Localizer => "Localizer",
            Intent::Shim => "Shim",
            Intent::Calibration => "Calibration",
            Intent::Fieldmap => "Fieldmap",
            Intent::Spectroscopy => "Spectroscopy",
            Intent::Screenshot => "Screenshot",
            Intent::NonImage => "Non-Image",
        }
    }
}

/// Physical contrast or modality being measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measurement {
    B0,
    B1,
    T1,
    T2,
    #[serde(rename = "T2*")]
    T2Star,
    PD,
    MT,
    #[serde(rename = "BOLD")]
    Bold,
    Perfusion,
    Diffusion,
    Susceptibility,
    Fingerprinting,
    #[serde(rename = "MRA")]
    Mra,
}

impl Measurement {
    pub const ALL: [Measurement; 13] = [
        Measurement::B0,
        Measurement::B1,
        Measurement::T1,
        Measurement::T2,
        Measurement::T2Star,
        Measurement::PD,
        Measurement::MT,
        Measurement::Bold,
        Measurement::Perfusion,
        Measurement::Diffusion,
        Measurement::Susceptibility,
        Measurement::Fingerprinting,
        Measurement::Mra,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Measurement::B0 => "B0",
            Measurement::B1 => "B1",
            Measurement::T1 => "T1",
            Measurement::T2 => "T2",
            Measurement::T2Star => "T2*",
            Measurement::PD => "PD",
            Measurement::MT => "MT",
            Measurement::Bold => "BOLD",
            Measurement::Perfusion => "Perfusion",
            Measurement::Diffusion => "Diffusion",
            Measurement::Susceptibility => "Susceptibility",
            Measurement::Fingerprinting => "Fingerprinting",
            Measurement::Mra => "MRA",
        }
    }
}

/// Secondary descriptive tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    Quantitative,
    #[serde(rename = "Multi-Shell")]
    MultiShell,
    #[serde(rename = "Multi-Echo")]
    MultiEcho,
    #[serde(rename = "Multi-Flip")]
    MultiFlip,
    #[serde(rename = "Multi-Band")]
    MultiBand,
    #[serde(rename = "Steady-State")]
    SteadyState,
    #[serde(rename = "3D")]
    ThreeD,
    #[serde(rename = "Compressed-Sensing")]
    CompressedSensing,
    Eigenvector,
    Derived,
    Magnitude,
    Phase,
    Real,
    Imaginary,
    #[serde(rename = "In-Plane")]
    InPlane,
    #[serde(rename = "Spin-Echo")]
    SpinEcho,
    #[serde(rename = "Gradient-Echo")]
    GradientEcho,
    #[serde(rename = "EPI")]
    Epi,
    #[serde(rename = "AAscout")]
    AaScout,
    Physio,
    #[serde(rename = "Fat-Suppressed")]
    FatSuppressed,
    #[serde(rename = "Pre-Contrast")]
    PreContrast,
    #[serde(rename = "Post-Contrast")]
    PostContrast,
}

impl Feature {
    pub const ALL: [Feature; 23] = [
        Feature::Quantitative,
        Feature::MultiShell,
        Feature::MultiEcho,
        Feature::MultiFlip,
        Feature::MultiBand,
        Feature::SteadyState,
        Feature::ThreeD,
        Feature::CompressedSensing,
        Feature::Eigenvector,
        Feature::Derived,
        Feature::Magnitude,
        Feature::Phase,
        Feature::Real,
        Feature::Imaginary,
        Feature::InPlane,
        Feature::SpinEcho,
        Feature::GradientEcho,
        Feature::Epi,
        Feature::AaScout,
        Feature::Physio,
        Feature::FatSuppressed,
        Feature::PreContrast,
        Feature::PostContrast,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Quantitative => "Quantitative",
            Feature::MultiShell => "Multi-Shell",
            Feature::MultiEcho => "Multi-Echo",
            Feature::MultiFlip => "Multi-Flip",
            Feature::MultiBand => "Multi-Band",
            Feature::SteadyState => "Steady-State",
            Feature::ThreeD => "3D",
            Feature::CompressedSensing => "Compressed-Sensing",
            Feature::Eigenvector => "Eigenvector",
            Feature::Derived => "Derived",
            Feature::Magnitude => "Magnitude",
            Feature::Phase => "Phase",
            Feature::Real => "Real",
            Feature::Imaginary => "Imaginary",
            Feature::InPlane => "In-Plane",
            Feature::SpinEcho => "Spin-Echo",
            Feature::GradientEcho => "Gradient-Echo",
            Feature::Epi => "EPI",
            Feature::AaScout => "AAscout",
            Feature::Physio => "Physio",
            Feature::FatSuppressed => "Fat-Suppressed",
            Feature::PreContrast => "Pre-Contrast",
            Feature::PostContrast => "Post-Contrast",
        }
    }
}

macro_rules! impl_vocabulary {
    ($ty:ident, $name:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            /// Case-insensitive lookup of the canonical tag string.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|tag| tag.as_str().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| ModelError::UnknownTag {
                        vocabulary: $name,
                        value: s.to_string(),
                    })
            }
        }
    };
}

impl_vocabulary!(Intent, "intent");
impl_vocabulary!(Measurement, "measurement");
impl_vocabulary!(Feature, "feature");
