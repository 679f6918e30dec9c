//! Structural invariants over whole generated portfolios.

use portfolio_core::{
    config::GeneratorConfig,
    engine::{Portfolio, PortfolioEngine},
    location::Location,
    peril::{FloodZone, Grade},
};

fn portfolio(seed: u64, accounts: usize) -> Portfolio {
    let config = GeneratorConfig {
        seed,
        num_accounts: accounts,
        ..GeneratorConfig::default_test()
    };
    let mut engine = PortfolioEngine::new(config).unwrap();
    engine.run().unwrap();
    engine.into_portfolio()
}

#[test]
fn tiv_components_sum_to_total() {
    let p = portfolio(42, 12);
    for loc in &p.locations {
        let e = &loc.exposure;
        assert!(e.building_value >= 0.0 && e.contents_value >= 0.0 && e.bii_value >= 0.0);
        let sum = e.building_value + e.contents_value + e.bii_value;
        assert!(
            (sum - e.total_tiv).abs() <= 0.01 + 1e-6,
            "{}: {} + {} + {} != {}",
            loc.id(),
            e.building_value,
            e.contents_value,
            e.bii_value,
            e.total_tiv
        );
    }
}

#[test]
fn peril_scores_and_grades_are_in_range() {
    let p = portfolio(7, 10);
    for loc in &p.locations {
        let s = &loc.perils;
        for score in [s.hurricane, s.earthquake, s.flood_score, s.wildfire, s.tornado_hail, s.terrorism] {
            assert!((1..=10).contains(&score));
        }
        assert!(s.surge_risk == 0 || (4..=9).contains(&s.surge_risk));
        assert_eq!(s.hurricane_grade, Grade::from_score(s.hurricane));
        assert_eq!(s.earthquake_grade, Grade::from_score(s.earthquake));
        assert_eq!(s.flood_grade, Grade::from_score(s.flood_score));
        assert_eq!(s.wildfire_grade, Grade::from_score(s.wildfire));
        assert_eq!(s.tornado_grade, Grade::from_score(s.tornado_hail));
        assert_eq!(s.flood_zone, FloodZone::from_score(s.flood_score));
        assert_eq!(s.flood_desc, s.flood_zone.description());
    }
}

fn by_account<'a>(p: &'a Portfolio, account_id: &'a str) -> Vec<&'a Location> {
    p.locations_for(account_id).collect()
}

#[test]
fn hierarchy_matches_account_layout() {
    let p = portfolio(5, 10);
    for account in &p.accounts {
        let locs = by_account(&p, &account.account_id);
        assert_eq!(locs.len(), account.num_locations);

        if account.template.is_clustered() && locs.len() > 1 {
            let mains: Vec<_> = locs.iter().filter(|l| l.identity.is_main_building).collect();
            assert_eq!(mains.len(), 1, "{} has {} main buildings", account.account_id, mains.len());
            let main_id = locs[0].id();
            assert!(locs[0].identity.is_main_building);
            for loc in &locs[1..] {
                assert_eq!(loc.identity.parent_location_id.as_deref(), Some(main_id));
            }
        } else if !account.template.is_clustered() {
            assert!(locs.iter().all(|l| l.identity.parent_location_id.is_none()));
            assert!(locs.iter().all(|l| !l.identity.is_main_building));
        }
    }
}

#[test]
fn location_ids_have_expected_shape() {
    let p = portfolio(9, 3);
    for loc in &p.locations {
        let id = loc.id();
        assert_eq!(id.len(), 20);
        assert!(id.starts_with("LUS"));
        assert!(id[3..].chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }
}

#[test]
fn summary_counts_agree_with_records() {
    let config = GeneratorConfig { num_accounts: 6, ..GeneratorConfig::default_test() };
    let mut engine = PortfolioEngine::new(config).unwrap();
    engine.run().unwrap();
    let s = engine.summary();
    let p = engine.portfolio();

    assert_eq!(s.total_locations, p.locations.len());
    let defective = p.locations.iter().filter(|l| !l.quality.data_quality_issues.is_empty()).count();
    assert_eq!(s.locations_with_data_issues, defective);
    assert!(s.state_distribution.len() <= 15);
    assert!(s.states_represented >= s.state_distribution.len());
    let type_total: usize = s.account_type_distribution.iter().map(|(_, n)| n).sum();
    assert_eq!(type_total, 6);
    let exact_pct = 100.0 * (1.0 - defective as f64 / p.locations.len() as f64);
    assert!((s.data_quality_pct - exact_pct).abs() <= 0.05 + 1e-9);
}
