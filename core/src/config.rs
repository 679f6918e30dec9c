use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    error::{GenError, GenResult},
    templates::AccountType,
};

/// Probabilities of each injected data-quality defect, drawn independently
/// per location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataQualityRates {
    pub pct_missing_coordinates: f64,
    pub pct_missing_construction: f64,
    pub pct_missing_sqft: f64,
    pub pct_stale_inspection: f64,
    /// Accepted and range-checked but not consumed: no conflict defect is
    /// generated.
    pub pct_data_conflicts: f64,
}

impl Default for DataQualityRates {
    fn default() -> Self {
        Self {
            pct_missing_coordinates: 0.08,
            pct_missing_construction: 0.12,
            pct_missing_sqft: 0.15,
            pct_stale_inspection: 0.10,
            pct_data_conflicts: 0.05,
        }
    }
}

impl DataQualityRates {
    /// All rates zero: every location comes out clean.
    pub fn none() -> Self {
        Self {
            pct_missing_coordinates: 0.0,
            pct_missing_construction: 0.0,
            pct_missing_sqft: 0.0,
            pct_stale_inspection: 0.0,
            pct_data_conflicts: 0.0,
        }
    }

    fn validate(&self) -> GenResult<()> {
        let rates = [
            ("pct_missing_coordinates", self.pct_missing_coordinates),
            ("pct_missing_construction", self.pct_missing_construction),
            ("pct_missing_sqft", self.pct_missing_sqft),
            ("pct_stale_inspection", self.pct_stale_inspection),
            ("pct_data_conflicts", self.pct_data_conflicts),
        ];
        for (field, p) in rates {
            if !(0.0..=1.0).contains(&p) {
                return Err(GenError::invalid(field, format!("{p} is not a probability in [0, 1]")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    /// Full export: summary, accounts and locations.
    pub output_file: PathBuf,
    /// Dashboard export: cleaned locations only.
    pub locations_output_file: PathBuf,
    pub num_accounts: usize,
    /// Advisory only. Location counts come from each account's template.
    pub min_locations_per_account: usize,
    /// Advisory only. Location counts come from each account's template.
    pub max_locations_per_account: usize,
    #[serde(flatten)]
    pub quality: DataQualityRates,
    /// Use this archetype for every account instead of sampling.
    pub force_template: Option<AccountType>,
    /// Pin the run date. Without it the run uses today, and output is only
    /// reproducible within the same day.
    pub as_of: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            output_file: PathBuf::from("portfolio_full.json"),
            locations_output_file: PathBuf::from("portfolio.json"),
            num_accounts: 15,
            min_locations_per_account: 15,
            max_locations_per_account: 80,
            quality: DataQualityRates::default(),
            force_template: None,
            as_of: None,
        }
    }
}

impl GeneratorConfig {
    /// Load from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> GenResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small, date-pinned profile for use in tests.
    pub fn default_test() -> Self {
        Self {
            seed: 42,
            num_accounts: 3,
            as_of: NaiveDate::from_ymd_opt(2025, 1, 15),
            ..Self::default()
        }
    }

    /// Reject degenerate settings. Bounds are never swapped.
    pub fn validate(&self) -> GenResult<()> {
        if self.num_accounts == 0 {
            return Err(GenError::invalid("num_accounts", "must be at least 1"));
        }
        if self.min_locations_per_account > self.max_locations_per_account {
            return Err(GenError::invalid(
                "min_locations_per_account",
                format!(
                    "min {} exceeds max {}",
                    self.min_locations_per_account, self.max_locations_per_account
                ),
            ));
        }
        if self.output_file.as_os_str().is_empty() {
            return Err(GenError::invalid("output_file", "path is empty"));
        }
        if self.locations_output_file.as_os_str().is_empty() {
            return Err(GenError::invalid("locations_output_file", "path is empty"));
        }
        if self.output_file == self.locations_output_file {
            return Err(GenError::invalid(
                "locations_output_file",
                "must differ from output_file",
            ));
        }
        self.quality.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        GeneratorConfig::default().validate().unwrap();
        GeneratorConfig::default_test().validate().unwrap();
    }

    #[test]
    fn inverted_location_bounds_fail_fast() {
        let config = GeneratorConfig {
            min_locations_per_account: 90,
            max_locations_per_account: 10,
            ..GeneratorConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            GenError::InvalidConfig { field: "min_locations_per_account", .. }
        ));
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        let mut config = GeneratorConfig::default();
        config.quality.pct_missing_sqft = 1.5;
        assert!(matches!(
            config.validate().unwrap_err(),
            GenError::InvalidConfig { field: "pct_missing_sqft", .. }
        ));

        config.quality.pct_missing_sqft = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_accounts_is_rejected() {
        let config = GeneratorConfig { num_accounts: 0, ..GeneratorConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let json = r#"{
            "seed": 7,
            "num_accounts": 2,
            "pct_missing_sqft": 0.5,
            "force_template": "restaurant_franchise",
            "as_of": "2024-06-30"
        }"#;
        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.num_accounts, 2);
        assert_eq!(config.quality.pct_missing_sqft, 0.5);
        assert_eq!(config.quality.pct_missing_coordinates, 0.08);
        assert_eq!(config.force_template, Some(AccountType::RestaurantFranchise));
        assert_eq!(config.as_of, NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(config.output_file, PathBuf::from("portfolio_full.json"));
    }

    #[test]
    fn load_reports_missing_file_path() {
        let err = GeneratorConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
