//! Run clock: the single notion of "now" for one generation run.
//!
//! Inspection dates and the export timestamp are both derived from it, so a
//! pinned as-of date makes the whole output reproducible.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunClock {
    pub as_of: NaiveDate,
    pub generated_at: DateTime<Utc>,
}

impl RunClock {
    /// Pinned clock: midnight UTC on `as_of`.
    pub fn pinned(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            generated_at: Utc.from_utc_datetime(&as_of.and_time(NaiveTime::default())),
        }
    }

    /// Wall clock.
    pub fn now() -> Self {
        let generated_at = Utc::now();
        Self {
            as_of: generated_at.date_naive(),
            generated_at,
        }
    }

    pub fn from_config(as_of: Option<NaiveDate>) -> Self {
        as_of.map(Self::pinned).unwrap_or_else(Self::now)
    }

    pub fn days_ago(&self, days: i64) -> NaiveDate {
        self.as_of - Duration::days(days)
    }
}
