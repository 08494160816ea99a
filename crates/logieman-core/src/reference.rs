//! # Reference Data
//!
//! Fixed enumerations shared by the select menus and the validator. Both
//! lists are ordered the way the selects present them.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Countries offered as load source and destination.
pub const COUNTRIES: &[&str] = &[
    "India",
    "Nepal",
    "Bhutan",
    "Bangladesh",
    "Sri Lanka",
    "Pakistan",
    "Myanmar",
    "United Arab Emirates",
    "Saudi Arabia",
    "Oman",
    "Qatar",
    "Kuwait",
    "Bahrain",
    "Singapore",
    "Malaysia",
    "Thailand",
    "Vietnam",
    "China",
    "United Kingdom",
    "United States",
];

/// Load-type labels, in select order. Each maps to one [`LoadTypeCode`].
pub const LOAD_TYPES: &[&str] = &[
    "Full Truckload (FTL)",
    "Less Than Truckload (LTL)",
    "Project Basis",
];

/// Whether `name` is one of [`COUNTRIES`]. Matching is exact.
pub fn is_known_country(name: &str) -> bool {
    COUNTRIES.contains(&name)
}

/// Whether `label` is one of [`LOAD_TYPES`]. Matching is exact.
pub fn is_known_load_type(label: &str) -> bool {
    LOAD_TYPES.contains(&label)
}

/// The wire code for a load type, as the temp-loads API expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoadTypeCode {
    /// Full Truckload.
    #[serde(rename = "FTL")]
    Ftl,
    /// Less Than Truckload.
    #[serde(rename = "LTL")]
    Ltl,
    /// Non-standard shipments quoted per project.
    #[serde(rename = "Project Basis")]
    ProjectBasis,
}

impl LoadTypeCode {
    /// All codes, in the same order as [`LOAD_TYPES`].
    pub const ALL: [LoadTypeCode; 3] = [Self::Ftl, Self::Ltl, Self::ProjectBasis];

    /// Map a select label to its code. Unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Full Truckload (FTL)" => Some(Self::Ftl),
            "Less Than Truckload (LTL)" => Some(Self::Ltl),
            "Project Basis" => Some(Self::ProjectBasis),
            _ => None,
        }
    }

    /// The select label for this code.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ftl => "Full Truckload (FTL)",
            Self::Ltl => "Less Than Truckload (LTL)",
            Self::ProjectBasis => "Project Basis",
        }
    }

    /// The wire code (`FTL`, `LTL`, `Project Basis`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ftl => "FTL",
            Self::Ltl => "LTL",
            Self::ProjectBasis => "Project Basis",
        }
    }
}

impl std::fmt::Display for LoadTypeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses either a wire code or a select label.
impl FromStr for LoadTypeCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FTL" => Ok(Self::Ftl),
            "LTL" => Ok(Self::Ltl),
            "Project Basis" => Ok(Self::ProjectBasis),
            other => Self::from_label(other)
                .ok_or_else(|| CoreError::UnknownLoadType(other.to_string())),
        }
    }
}
