//! Portfolio-level statistics. A pure reduction over accounts and locations.

use serde::{Serialize, Serializer};

use crate::{
    account::Account,
    location::{Location, QualityDefect},
    types::round_to,
};

/// States kept in `state_distribution`.
pub const STATE_DISTRIBUTION_LIMIT: usize = 15;

/// Frequency table that keeps its insertion order when serialized as a
/// JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distribution(pub Vec<(&'static str, usize)>);

impl Distribution {
    /// Count keys in first-seen order.
    pub fn count<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let mut entries: Vec<(&'static str, usize)> = Vec::new();
        for key in keys {
            match entries.iter_mut().find(|(k, _)| *k == key) {
                Some((_, n)) => *n += 1,
                None => entries.push((key, 1)),
            }
        }
        Self(entries)
    }

    /// Highest counts first; ties keep first-seen order.
    pub fn top(mut self, limit: usize) -> Self {
        self.0.sort_by(|a, b| b.1.cmp(&a.1));
        self.0.truncate(limit);
        self
    }

    pub fn get(&self, key: &str) -> Option<usize> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, n)| *n)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, usize)> {
        self.0.iter()
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(k, v)| (*k, *v)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioSummary {
    pub total_accounts: usize,
    pub total_locations: usize,
    pub total_tiv: f64,
    pub avg_tiv: f64,
    pub avg_locations_per_account: f64,
    pub total_claims: u64,
    pub total_incurred: u64,
    pub states_represented: usize,
    pub state_distribution: Distribution,
    pub account_type_distribution: Distribution,
    pub locations_with_data_issues: usize,
    pub locations_with_alerts: usize,
    pub data_quality_pct: f64,
    pub defect_counts: Distribution,
}

impl PortfolioSummary {
    pub fn compute(accounts: &[Account], locations: &[Location]) -> Self {
        let total_tiv: f64 = locations.iter().map(|l| l.exposure.total_tiv).sum();
        let total_claims: u64 = locations.iter().map(|l| u64::from(l.claims.total_claims)).sum();
        let total_incurred: u64 = locations.iter().map(|l| l.claims.total_incurred).sum();

        let states = Distribution::count(locations.iter().map(|l| l.address.state));
        let states_represented = states.len();
        let account_types = Distribution::count(accounts.iter().map(|a| a.account_type.as_str()));

        let locations_with_data_issues = locations
            .iter()
            .filter(|l| !l.quality.data_quality_issues.is_empty())
            .count();
        let locations_with_alerts =
            locations.iter().filter(|l| l.risk_control.has_recommendations).count();

        let defect_counts = Distribution(
            QualityDefect::ALL
                .iter()
                .map(|d| (d.as_str(), locations.iter().filter(|l| l.quality.has(*d)).count()))
                .collect(),
        );

        let n = locations.len();
        let (avg_tiv, data_quality_pct) = if n == 0 {
            (0.0, 0.0)
        } else {
            (
                total_tiv / n as f64,
                round_to(100.0 * (1.0 - locations_with_data_issues as f64 / n as f64), 1),
            )
        };
        let avg_locations_per_account = if accounts.is_empty() {
            0.0
        } else {
            n as f64 / accounts.len() as f64
        };

        Self {
            total_accounts: accounts.len(),
            total_locations: n,
            total_tiv,
            avg_tiv,
            avg_locations_per_account,
            total_claims,
            total_incurred,
            states_represented,
            state_distribution: states.top(STATE_DISTRIBUTION_LIMIT),
            account_type_distribution: account_types,
            locations_with_data_issues,
            locations_with_alerts,
            data_quality_pct,
            defect_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distribution_counts_in_first_seen_order() {
        let d = Distribution::count(["TX", "CA", "TX", "NY", "CA", "TX"]);
        assert_eq!(d.0, vec![("TX", 3), ("CA", 2), ("NY", 1)]);
    }

    #[test]
    fn top_is_stable_for_ties() {
        let d = Distribution::count(["OH", "FL", "GA", "FL", "OH", "WA"]).top(3);
        assert_eq!(d.0, vec![("OH", 2), ("FL", 2), ("GA", 1)]);
    }

    #[test]
    fn distribution_serializes_as_ordered_object() {
        let d = Distribution::count(["WA", "AZ", "AZ"]);
        assert_eq!(serde_json::to_string(&d).unwrap(), r#"{"WA":1,"AZ":2}"#);
    }

    #[test]
    fn empty_portfolio_reports_zeroes() {
        let s = PortfolioSummary::compute(&[], &[]);
        assert_eq!(s.total_locations, 0);
        assert_eq!(s.avg_tiv, 0.0);
        assert_eq!(s.avg_locations_per_account, 0.0);
        assert_eq!(s.data_quality_pct, 0.0);
        assert!(s.state_distribution.is_empty());
        assert_eq!(s.defect_counts.get("missing_sqft"), Some(0));
    }
}
