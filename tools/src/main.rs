//! portfolio-gen: headless runner for the synthetic property portfolio.
//!
//! Usage:
//!   portfolio-gen --seed 42 --accounts 15
//!   portfolio-gen --config portfolio_config.json --as-of 2025-01-15
//!   portfolio-gen --template healthcare_system --accounts 1 --out full.json --locations-out map.json

use anyhow::{Context, Result};
use chrono::NaiveDate;
use portfolio_core::{
    config::GeneratorConfig,
    engine::PortfolioEngine,
    summary::PortfolioSummary,
    templates::AccountType,
};
use std::env;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let mut config = match str_arg(&args, "--config") {
        Some(path) => GeneratorConfig::load(path)
            .with_context(|| format!("loading config from {path}"))?,
        None => GeneratorConfig::default(),
    };
    config.seed = parse_arg(&args, "--seed", config.seed);
    config.num_accounts = parse_arg(&args, "--accounts", config.num_accounts);
    if let Some(name) = str_arg(&args, "--template") {
        config.force_template = Some(name.parse::<AccountType>()?);
    }
    if let Some(date) = str_arg(&args, "--as-of") {
        let as_of = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("--as-of expects YYYY-MM-DD, got {date}"))?;
        config.as_of = Some(as_of);
    }
    if let Some(path) = str_arg(&args, "--out") {
        config.output_file = PathBuf::from(path);
    }
    if let Some(path) = str_arg(&args, "--locations-out") {
        config.locations_output_file = PathBuf::from(path);
    }

    log::debug!("effective config: {config:?}");

    println!("Commercial Property Portfolio Generator");
    println!("  seed:      {}", config.seed);
    println!("  accounts:  {}", config.num_accounts);
    if let Some(t) = config.force_template {
        println!("  template:  {t}");
    }
    println!();

    let mut engine = PortfolioEngine::new(config)?;
    println!("  as of:     {}", engine.clock.as_of);
    if !engine.is_reproducible() {
        println!("  note:      no --as-of given; dates follow today's clock and reruns will differ");
    }
    println!();
    println!("Generating {} accounts...", engine.remaining());

    while let Some(report) = engine.step()? {
        println!(
            "  [{}/{}] {} account: {} ({} locations)",
            report.index, report.of, report.account_type, report.account_name, report.locations
        );
    }

    print_summary(&engine.summary());

    let paths = engine.export()?;
    println!();
    println!("Exported to {}", paths.full.display());
    println!(
        "Exported {} locations to {}",
        paths.locations_written,
        paths.locations.display()
    );
    Ok(())
}

fn print_summary(summary: &PortfolioSummary) {
    println!();
    println!("=== PORTFOLIO SUMMARY ===");
    println!("  total accounts:        {}", summary.total_accounts);
    println!("  total locations:       {}", summary.total_locations);
    println!("  total TIV:             ${}", dollars(summary.total_tiv));
    println!("  avg TIV per location:  ${}", dollars(summary.avg_tiv));
    println!("  avg locations/account: {:.1}", summary.avg_locations_per_account);
    println!("  states represented:    {}", summary.states_represented);
    println!(
        "  data quality issues:   {} ({:.1}%)",
        summary.locations_with_data_issues,
        100.0 - summary.data_quality_pct
    );
    println!("  risk control alerts:   {}", summary.locations_with_alerts);

    println!();
    println!("=== ACCOUNT TYPES ===");
    for (account_type, count) in summary.account_type_distribution.iter() {
        println!("  {account_type}: {count}");
    }

    println!();
    println!("=== TOP STATES ===");
    for (state, count) in summary.state_distribution.iter().take(10) {
        println!("  {state}: {count}");
    }
}

/// `1234567.891` -> `1,234,567.89`
fn dollars(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2).find(|w| w[0] == flag).map(|w| w[1].as_str())
}
