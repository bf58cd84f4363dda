//! Typed snapshot of an engine object.
//!
//! The engine hands back an opaque handle whose accessor surface depends on
//! what kind of object it is: stars carry a magnitude and parallax distance,
//! constellations carry neither, satellites have no designations, and so on.
//! The browser bindings read each accessor defensively into an
//! [`ObjectSnapshot`] where every field is optional.

use serde::{Deserialize, Serialize};

use crate::naming;

#[cfg(test)]
#[path = "object_test.rs"]
mod object_test;

/// Closed set of object kinds, derived from the engine's type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Star,
    Planet,
    Moon,
    Sun,
    MinorPlanet,
    Comet,
    Satellite,
    DeepSky,
    Constellation,
    /// A type code this crate does not model; shown verbatim.
    Other(String),
    /// The object exposes no type code at all.
    Unknown,
}

impl ObjectKind {
    /// Map an engine type code (`"*"`, `"Pl"`, `"G"`, `"Con"`, …) to a kind.
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        let Some(code) = code.map(str::trim).filter(|c| !c.is_empty()) else {
            return Self::Unknown;
        };
        match code {
            "Pl" => Self::Planet,
            "Moo" => Self::Moon,
            "Sun" => Self::Sun,
            "MPl" | "Ast" => Self::MinorPlanet,
            "Com" => Self::Comet,
            "Asa" | "Sat" => Self::Satellite,
            "Con" => Self::Constellation,
            "G" | "GiG" | "GiP" | "BiC" | "Sy1" | "Sy2" | "SBG" | "AGN" | "QSO" | "Neb" | "GNe" | "RNe" | "HII"
            | "PN" | "SNR" | "ISM" | "Cld" | "OpC" | "GlC" | "Cl*" | "As*" => Self::DeepSky,
            c if c.contains('*') => Self::Star,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Value shown in the "Type" row.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Star => "Star",
            Self::Planet => "Planet",
            Self::Moon => "Moon",
            Self::Sun => "Sun",
            Self::MinorPlanet => "Minor planet",
            Self::Comet => "Comet",
            Self::Satellite => "Artificial satellite",
            Self::DeepSky => "Deep-sky object",
            Self::Constellation => "Constellation",
            Self::Other(code) => code,
            Self::Unknown => "Unknown",
        }
    }

    /// Whether a point-source magnitude is meaningful for this kind.
    #[must_use]
    pub fn has_magnitude(&self) -> bool {
        match self {
            Self::Constellation => false,
            Self::Star
            | Self::Planet
            | Self::Moon
            | Self::Sun
            | Self::MinorPlanet
            | Self::Comet
            | Self::Satellite
            | Self::DeepSky
            | Self::Other(_)
            | Self::Unknown => true,
        }
    }

    /// Whether the object has a single position on the sky.
    #[must_use]
    pub fn has_position(&self) -> bool {
        !matches!(self, Self::Constellation)
    }
}

/// Everything the info panel may read from a selected object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSnapshot {
    /// Catalog designations, primary first.
    pub designations: Vec<String>,
    pub english_name: Option<String>,
    pub i18n_name: Option<String>,
    /// Raw engine type code.
    pub type_code: Option<String>,
    /// Visual magnitude.
    pub vmag: Option<f64>,
    /// Cartesian position in the ICRF frame.
    pub radec: Option<[f64; 3]>,
    /// Distance in parsecs.
    pub distance: Option<f64>,
    pub constellation: Option<String>,
}

impl ObjectSnapshot {
    /// A snapshot carrying nothing but a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self { english_name: Some(name.into()), ..Self::default() }
    }

    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        ObjectKind::from_code(self.type_code.as_deref())
    }

    /// Name for headers and lookups.
    #[must_use]
    pub fn display_name(&self) -> String {
        naming::display_name(&self.designations, self.english_name.as_deref(), self.i18n_name.as_deref())
    }

    /// Up to two alternate designations, `NAME ` prefix removed.
    #[must_use]
    pub fn alternate_names(&self) -> Vec<String> {
        self.designations
            .iter()
            .skip(1)
            .take(2)
            .map(|d| naming::strip_name_prefix(d).to_owned())
            .filter(|d| !d.is_empty())
            .collect()
    }
}
