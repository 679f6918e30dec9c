//! ISO construction classes and their associated data.

use serde::{Deserialize, Serialize};

/// The six ISO construction classes, ordered from most to least combustible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConstructionClass {
    Frame,
    JoistedMasonry,
    NonCombustible,
    MasonryNonCombustible,
    ModifiedFireResistive,
    FireResistive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBias {
    Old,
    New,
    Any,
}

impl AgeBias {
    /// Inclusive year-built window for buildings of this era.
    pub fn year_range(self) -> (i64, i64) {
        match self {
            AgeBias::Old => (1920, 1985),
            AgeBias::New => (1990, 2024),
            AgeBias::Any => (1950, 2020),
        }
    }
}

/// Label written in place of the class name when construction is withheld.
pub const UNKNOWN_CONSTRUCTION: &str = "Unknown";

impl ConstructionClass {
    pub const ALL: [ConstructionClass; 6] = [
        ConstructionClass::Frame,
        ConstructionClass::JoistedMasonry,
        ConstructionClass::NonCombustible,
        ConstructionClass::MasonryNonCombustible,
        ConstructionClass::ModifiedFireResistive,
        ConstructionClass::FireResistive,
    ];

    /// ISO class code, 1 through 6.
    pub fn code(self) -> u8 {
        match self {
            Self::Frame => 1,
            Self::JoistedMasonry => 2,
            Self::NonCombustible => 3,
            Self::MasonryNonCombustible => 4,
            Self::ModifiedFireResistive => 5,
            Self::FireResistive => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Frame => "Frame",
            Self::JoistedMasonry => "Joisted Masonry",
            Self::NonCombustible => "Non-Combustible",
            Self::MasonryNonCombustible => "Masonry Non-Combustible",
            Self::ModifiedFireResistive => "Modified Fire Resistive",
            Self::FireResistive => "Fire Resistive",
        }
    }

    /// Relative fire risk of the class, from "high" (frame) to "very-low".
    pub fn fire_risk(self) -> &'static str {
        match self {
            Self::Frame => "high",
            Self::JoistedMasonry => "medium-high",
            Self::NonCombustible => "medium",
            Self::MasonryNonCombustible => "medium-low",
            Self::ModifiedFireResistive => "low",
            Self::FireResistive => "very-low",
        }
    }

    pub fn age_bias(self) -> AgeBias {
        match self {
            Self::Frame | Self::JoistedMasonry => AgeBias::Old,
            Self::NonCombustible | Self::MasonryNonCombustible => AgeBias::Any,
            Self::ModifiedFireResistive | Self::FireResistive => AgeBias::New,
        }
    }

    /// Classes 5 and 6: sprinklers are far more likely to be present.
    pub fn is_fire_resistive(self) -> bool {
        matches!(self, Self::ModifiedFireResistive | Self::FireResistive)
    }
}
