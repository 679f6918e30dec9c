//! The generation engine.
//!
//! EXECUTION ORDER (fixed, never reordered):
//!   1. Template selection for every account
//!   2. Per account, in plan order:
//!        a. Account synthesis
//!        b. Site planning (clustered / satellite / scattered)
//!        c. Location synthesis
//!   3. Summary (pure, no draws)
//!   4. Export (pure, no draws)
//!
//! RULES:
//!   - One GenRng per run, threaded by `&mut` through every draw.
//!   - The run clock is fixed at construction. Nothing reads the wall
//!     clock afterwards.
//!   - Same seed, config and as-of date give byte-identical exports.

use std::path::PathBuf;

use log::{debug, info, warn};

use crate::{
    account::{select_templates, Account},
    clock::RunClock,
    config::GeneratorConfig,
    error::GenResult,
    export::{write_full_export, write_locations_export, FullExport},
    location::Location,
    location_synthesizer::LocationSynthesizer,
    rng::GenRng,
    summary::PortfolioSummary,
    templates::{AccountTemplate, AccountType},
};

/// Everything generated so far.
#[derive(Debug, Clone, Default)]
pub struct Portfolio {
    pub accounts: Vec<Account>,
    pub locations: Vec<Location>,
}

impl Portfolio {
    pub fn locations_for<'a>(&'a self, account_id: &'a str) -> impl Iterator<Item = &'a Location> {
        self.locations.iter().filter(move |l| l.identity.account_id == account_id)
    }
}

/// What one step produced. Used for progress output.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountReport {
    /// 1-based position in the plan.
    pub index: usize,
    pub of: usize,
    pub account_type: AccountType,
    pub account_id: String,
    pub account_name: String,
    pub locations: usize,
}

/// Where the two exports landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub full: PathBuf,
    pub locations: PathBuf,
    pub locations_written: usize,
}

pub struct PortfolioEngine {
    pub config: GeneratorConfig,
    pub clock: RunClock,
    rng: GenRng,
    plan: Vec<&'static AccountTemplate>,
    cursor: usize,
    portfolio: Portfolio,
}

impl PortfolioEngine {
    /// Validate `config`, fix the run clock and choose every account's
    /// template up front.
    pub fn new(config: GeneratorConfig) -> GenResult<Self> {
        config.validate()?;

        if config.quality.pct_data_conflicts > 0.0 {
            warn!(
                "pct_data_conflicts={} is accepted but no conflict defect is generated",
                config.quality.pct_data_conflicts
            );
        }
        if config.as_of.is_none() {
            warn!(
                "no as_of date pinned; generated_at and inspection dates follow the wall clock \
                 and reruns of seed {} will not be byte-identical",
                config.seed
            );
        }
        debug!(
            "location bounds {}..={} are advisory; counts come from templates",
            config.min_locations_per_account, config.max_locations_per_account
        );

        let clock = RunClock::from_config(config.as_of);
        let mut rng = GenRng::new(config.seed);
        let plan = select_templates(&mut rng, config.num_accounts, config.force_template);

        info!(
            "portfolio run seed={} accounts={} as_of={}",
            config.seed, config.num_accounts, clock.as_of
        );

        Ok(Self {
            config,
            clock,
            rng,
            plan,
            cursor: 0,
            portfolio: Portfolio::default(),
        })
    }

    /// True when the as-of date is pinned, so a rerun with the same seed
    /// writes byte-identical files.
    pub fn is_reproducible(&self) -> bool {
        self.config.as_of.is_some()
    }

    /// Engine on the small date-pinned test profile.
    pub fn build_test(seed: u64) -> GenResult<Self> {
        Self::new(GeneratorConfig { seed, ..GeneratorConfig::default_test() })
    }

    /// Generate the next account and its locations. `None` once every
    /// planned account exists.
    pub fn step(&mut self) -> GenResult<Option<AccountReport>> {
        let Some(&template) = self.plan.get(self.cursor) else {
            return Ok(None);
        };
        self.cursor += 1;

        let account = Account::synthesize(template, &mut self.rng);
        let locations = LocationSynthesizer::new(&self.config.quality, &self.clock)
            .synthesize(&account, &mut self.rng)?;

        let report = AccountReport {
            index: self.cursor,
            of: self.plan.len(),
            account_type: account.account_type,
            account_id: account.account_id.clone(),
            account_name: account.account_name.clone(),
            locations: locations.len(),
        };
        info!(
            "[{}/{}] {} {} ({}): {} locations",
            report.index,
            report.of,
            report.account_type,
            report.account_id,
            report.account_name,
            report.locations
        );

        self.portfolio.accounts.push(account);
        self.portfolio.locations.extend(locations);
        Ok(Some(report))
    }

    /// Step until done.
    pub fn run(&mut self) -> GenResult<Vec<AccountReport>> {
        let mut reports = Vec::with_capacity(self.remaining());
        while let Some(report) = self.step()? {
            reports.push(report);
        }
        Ok(reports)
    }

    pub fn remaining(&self) -> usize {
        self.plan.len() - self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.remaining() == 0
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn into_portfolio(self) -> Portfolio {
        self.portfolio
    }

    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::compute(&self.portfolio.accounts, &self.portfolio.locations)
    }

    pub fn full_export(&self) -> FullExport<'_> {
        FullExport {
            generated_at: self.clock.generated_at,
            summary: self.summary(),
            accounts: &self.portfolio.accounts,
            locations: &self.portfolio.locations,
        }
    }

    /// Write both exports to the configured paths.
    pub fn export(&self) -> GenResult<ExportPaths> {
        let full = self.config.output_file.clone();
        let locations = self.config.locations_output_file.clone();
        write_full_export(&full, &self.full_export())?;
        let locations_written = write_locations_export(&locations, &self.portfolio.locations)?;
        Ok(ExportPaths { full, locations, locations_written })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_walks_the_plan() {
        let mut engine = PortfolioEngine::build_test(42).unwrap();
        assert_eq!(engine.remaining(), 3);

        let first = engine.step().unwrap().unwrap();
        assert_eq!((first.index, first.of), (1, 3));
        assert_eq!(engine.portfolio().accounts.len(), 1);
        assert_eq!(engine.portfolio().locations.len(), first.locations);

        engine.run().unwrap();
        assert!(engine.is_complete());
        assert!(engine.step().unwrap().is_none());
        assert_eq!(engine.portfolio().accounts.len(), 3);
    }

    #[test]
    fn invalid_config_is_rejected_before_any_draw() {
        let config = GeneratorConfig { num_accounts: 0, ..GeneratorConfig::default_test() };
        assert!(PortfolioEngine::new(config).is_err());
    }

    #[test]
    fn locations_belong_to_generated_accounts() {
        let mut engine = PortfolioEngine::build_test(7).unwrap();
        engine.run().unwrap();
        let portfolio = engine.portfolio();
        let total: usize = portfolio
            .accounts
            .iter()
            .map(|a| {
                let n = portfolio.locations_for(&a.account_id).count();
                assert_eq!(n, a.num_locations);
                n
            })
            .sum();
        assert_eq!(total, portfolio.locations.len());
    }

    #[test]
    fn summary_matches_portfolio() {
        let mut engine = PortfolioEngine::build_test(3).unwrap();
        engine.run().unwrap();
        let s = engine.summary();
        assert_eq!(s.total_accounts, 3);
        assert_eq!(s.total_locations, engine.portfolio().locations.len());
        assert_eq!(engine.full_export().generated_at, engine.clock.generated_at);
    }

    #[test]
    fn wall_clock_runs_are_flagged_as_not_reproducible() {
        assert!(PortfolioEngine::build_test(1).unwrap().is_reproducible());

        let config = GeneratorConfig { as_of: None, ..GeneratorConfig::default_test() };
        let engine = PortfolioEngine::new(config).unwrap();
        assert!(!engine.is_reproducible());
        assert_eq!(engine.clock.as_of, engine.clock.generated_at.date_naive());
    }
}
