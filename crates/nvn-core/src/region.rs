//! # Region — Jurisdiction Closed Set
//!
//! Defines the `Region` enum with the nine jurisdiction codes the
//! compliance gate recognizes. This is the ONE definition used across the
//! workspace. Every `match` on `Region` must be exhaustive — adding a
//! region forces every consumer to handle it at compile time.
//!
//! The gate's selection list shows more options than the closed set
//! (display-only entries such as "Singapore" or "Brazil"); anything outside
//! the closed set maps to [`Region::Other`] via [`Region::from_label`].

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RegionParseError;

/// A jurisdiction recognized by the compliance gate.
///
/// The persisted compliance record stores the canonical upper-case code
/// (`"US"`, `"EU"`, ...). `Other` is the catch-all for visitors whose
/// jurisdiction is offered in the selection list for completeness but has
/// no dedicated disclosure text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    /// United States.
    Us,
    /// Canada.
    Ca,
    /// European Union member states.
    Eu,
    /// China.
    Cn,
    /// United Kingdom.
    Uk,
    /// India.
    In,
    /// Switzerland.
    Ch,
    /// Japan.
    Jp,
    /// Any jurisdiction outside the dedicated set.
    Other,
}

/// Total number of recognized regions. Used for compile-time assertions.
pub const REGION_COUNT: usize = 9;

impl Region {
    /// Returns all regions in canonical order, for building selection lists.
    pub fn all() -> &'static [Region] {
        &[
            Self::Us,
            Self::Ca,
            Self::Eu,
            Self::Cn,
            Self::Uk,
            Self::In,
            Self::Ch,
            Self::Jp,
            Self::Other,
        ]
    }

    /// The canonical upper-case code for this region.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Us => "US",
            Self::Ca => "CA",
            Self::Eu => "EU",
            Self::Cn => "CN",
            Self::Uk => "UK",
            Self::In => "IN",
            Self::Ch => "CH",
            Self::Jp => "JP",
            Self::Other => "OTHER",
        }
    }

    /// Map a display label from the selection list onto the closed set.
    ///
    /// Accepts canonical codes (any case) and the human-readable labels the
    /// gate presents. Labels with no dedicated variant — and anything
    /// unrecognized — map to [`Region::Other`]. This function is total: the
    /// selection list may grow display-only entries without touching the
    /// closed set.
    pub fn from_label(label: &str) -> Region {
        if let Ok(region) = label.parse() {
            return region;
        }
        match label.trim().to_ascii_lowercase().as_str() {
            "united states" | "united states of america" | "usa" => Self::Us,
            "canada" => Self::Ca,
            "european union" | "eurozone" | "europe" => Self::Eu,
            "china" | "mainland china" => Self::Cn,
            "united kingdom" | "great britain" | "gb" => Self::Uk,
            "india" => Self::In,
            "switzerland" => Self::Ch,
            "japan" => Self::Jp,
            _ => Self::Other,
        }
    }
}

impl FromStr for Region {
    type Err = RegionParseError;

    /// Parse a canonical region code, case-insensitively.
    ///
    /// Unlike [`Region::from_label`], unknown codes are an error here —
    /// this is the strict path used for persisted records and CLI input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "US" => Ok(Self::Us),
            "CA" => Ok(Self::Ca),
            "EU" => Ok(Self::Eu),
            "CN" => Ok(Self::Cn),
            "UK" => Ok(Self::Uk),
            "IN" => Ok(Self::In),
            "CH" => Ok(Self::Ch),
            "JP" => Ok(Self::Jp),
            "OTHER" => Ok(Self::Other),
            _ => Err(RegionParseError { code: s.to_string() }),
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
