//! Peril scoring: per-state hazard tables plus bounded jitter.
//!
//! Scores run 1 (benign) to 10 (severe). Grades follow the same direction:
//! A is the best grade and F the worst. Storm surge is the exception to
//! the 1-10 range: it is 0 wherever surge does not apply.

use serde::{Deserialize, Serialize};

use crate::{error::GenResult, rng::GenRng};

pub const MIN_SCORE: i64 = 1;
pub const MAX_SCORE: i64 = 10;

/// States exposed to Gulf or Atlantic storm surge.
pub const SURGE_STATES: &[&str] = &["FL", "TX", "LA", "NC", "SC", "GA", "AL", "MS"];

/// Hurricane score at or above which surge states draw a surge score.
pub const SURGE_HURRICANE_THRESHOLD: u8 = 5;

const HURRICANE_BASE: &[(&str, i64)] = &[
    ("FL", 8), ("LA", 9), ("TX", 6), ("NC", 7), ("SC", 7), ("GA", 5),
    ("AL", 6), ("MS", 7), ("VA", 4), ("NJ", 4), ("NY", 3),
];

const EARTHQUAKE_BASE: &[(&str, i64)] = &[
    ("CA", 8), ("WA", 6), ("OR", 5), ("AK", 7), ("NV", 4), ("UT", 3), ("MT", 2),
];

const TORNADO_BASE: &[(&str, i64)] = &[
    ("OK", 9), ("KS", 9), ("NE", 8), ("TX", 7), ("IA", 7), ("MO", 6),
    ("AR", 6), ("IL", 5), ("IN", 5), ("OH", 4), ("AL", 5), ("MS", 5),
];

const WILDFIRE_BASE: &[(&str, i64)] = &[
    ("CA", 8), ("CO", 7), ("AZ", 6), ("NM", 6), ("OR", 6), ("WA", 5),
    ("MT", 5), ("ID", 5), ("NV", 4), ("UT", 4), ("TX", 3),
];

const TERRORISM_BASE: &[(&str, i64)] = &[
    ("NY", 7), ("CA", 5), ("IL", 5), ("TX", 4), ("FL", 4), ("DC", 8),
];

const FLOOD_BASES: [i64; 5] = [2, 4, 6, 8, 10];
const FLOOD_WEIGHTS: [f64; 5] = [40.0, 25.0, 20.0, 10.0, 5.0];

const WILDFIRE_DESCRIPTIONS: [&str; 5] = ["None/Very Low", "Low", "Moderate", "High", "Very High"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Grade::A,
            3..=4 => Grade::B,
            5..=6 => Grade::C,
            7..=8 => Grade::D,
            _ => Grade::F,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FloodZone {
    X,
    X500,
    A,
    AE,
    VE,
}

impl FloodZone {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => FloodZone::X,
            3..=4 => FloodZone::X500,
            5..=6 => FloodZone::A,
            7..=8 => FloodZone::AE,
            _ => FloodZone::VE,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FloodZone::X => "Minimal",
            FloodZone::X500 => "Low",
            FloodZone::A => "Moderate",
            FloodZone::AE => "High",
            FloodZone::VE => "Very High",
        }
    }
}

/// Numeric scores and derived grades for one location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerilScores {
    pub hurricane: u8,
    pub earthquake: u8,
    pub flood_score: u8,
    pub wildfire: u8,
    pub tornado_hail: u8,
    pub surge_risk: u8,
    pub terrorism: u8,

    pub hurricane_grade: Grade,
    pub earthquake_grade: Grade,
    pub flood_grade: Grade,
    pub flood_zone: FloodZone,
    pub flood_desc: &'static str,
    pub wildfire_grade: Grade,
    pub wildfire_desc: &'static str,
    pub tornado_grade: Grade,
    pub hail_grade: Grade,
    pub wind_grade: Grade,
}

impl PerilScores {
    /// Score every peril for a location in `state`.
    ///
    /// Draw order: hurricane, earthquake, tornado, wildfire, flood, surge,
    /// terrorism.
    pub fn for_state(state: &str, rng: &mut GenRng) -> GenResult<Self> {
        let hurricane = jittered(base_for(HURRICANE_BASE, state, 1), rng);
        let earthquake = jittered(base_for(EARTHQUAKE_BASE, state, 1), rng);
        let tornado = jittered(base_for(TORNADO_BASE, state, 2), rng);
        let wildfire = jittered(base_for(WILDFIRE_BASE, state, 1), rng);

        let flood_base = FLOOD_BASES[rng.weighted_index(&FLOOD_WEIGHTS)?];
        let flood = jittered(flood_base, rng);
        let flood_zone = FloodZone::from_score(flood);

        let surge = if SURGE_STATES.contains(&state) && hurricane >= SURGE_HURRICANE_THRESHOLD {
            rng.range_i64(4, 9) as u8
        } else {
            0
        };

        let terrorism = jittered(base_for(TERRORISM_BASE, state, 2), rng);

        Ok(Self {
            hurricane,
            earthquake,
            flood_score: flood,
            wildfire,
            tornado_hail: tornado,
            surge_risk: surge,
            terrorism,
            hurricane_grade: Grade::from_score(hurricane),
            earthquake_grade: Grade::from_score(earthquake),
            flood_grade: Grade::from_score(flood),
            flood_zone,
            flood_desc: flood_zone.description(),
            wildfire_grade: Grade::from_score(wildfire),
            wildfire_desc: WILDFIRE_DESCRIPTIONS[usize::from(wildfire / 2).min(4)],
            tornado_grade: Grade::from_score(tornado),
            hail_grade: Grade::from_score(tornado.saturating_sub(1).max(1)),
            wind_grade: Grade::from_score(hurricane.max(tornado)),
        })
    }

    /// Composite of the four natural-catastrophe scores, in [0.1, 1.0].
    pub fn cat_risk_factor(&self) -> f64 {
        let sum = u32::from(self.hurricane)
            + u32::from(self.earthquake)
            + u32::from(self.flood_score)
            + u32::from(self.tornado_hail);
        f64::from(sum) / 40.0
    }
}

fn base_for(table: &[(&str, i64)], state: &str, default: i64) -> i64 {
    table
        .iter()
        .find(|(s, _)| *s == state)
        .map(|(_, base)| *base)
        .unwrap_or(default)
}

fn jittered(base: i64, rng: &mut GenRng) -> u8 {
    (base + rng.jitter()).clamp(MIN_SCORE, MAX_SCORE) as u8
}
