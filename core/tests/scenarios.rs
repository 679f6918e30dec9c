//! End-to-end runs with a single forced archetype.

use portfolio_core::{
    config::GeneratorConfig,
    engine::{Portfolio, PortfolioEngine},
    geography::all_cities,
    location::Placement,
    templates::AccountType,
};

fn single_account(account_type: AccountType) -> Portfolio {
    let config = GeneratorConfig {
        seed: 42,
        num_accounts: 1,
        force_template: Some(account_type),
        ..GeneratorConfig::default_test()
    };
    let mut engine = PortfolioEngine::new(config).unwrap();
    engine.run().unwrap();
    engine.into_portfolio()
}

#[test]
fn restaurant_franchise_is_scattered() {
    let p = single_account(AccountType::RestaurantFranchise);
    assert_eq!(p.accounts.len(), 1);
    assert_eq!(p.accounts[0].account_type, AccountType::RestaurantFranchise);

    let n = p.locations.len();
    assert!((35..=80).contains(&n), "{n} locations");
    for loc in &p.locations {
        assert_eq!(loc.identity.placement, Placement::Scattered);
        assert!(loc.identity.parent_location_id.is_none());
        assert!(!loc.identity.is_main_building);
        let tiv = loc.exposure.total_tiv;
        assert!((400_000.0..=4_000_000.0).contains(&tiv), "TIV {tiv}");
    }
}

#[test]
fn healthcare_system_clusters_around_hq() {
    let p = single_account(AccountType::HealthcareSystem);
    let account = &p.accounts[0];
    let radius = account.template.cluster_radius_miles;
    assert_eq!(radius, 1.5);

    assert!(p.locations.iter().any(|l| l.identity.is_main_building));

    let hq = account.hq_point();
    let clustered: Vec<_> = p
        .locations
        .iter()
        .filter(|l| l.identity.placement == Placement::Clustered)
        .collect();
    assert!(!clustered.is_empty());
    for loc in clustered {
        let miles = hq.approx_miles_to(loc.coordinates.actual());
        // Allow for the 6-decimal coordinate rounding.
        assert!(miles <= radius + 0.01, "{} is {miles:.3} mi from HQ", loc.id());
    }
}

#[test]
fn satellites_sit_near_another_city_in_the_hq_state() {
    let p = single_account(AccountType::Municipal);
    let account = &p.accounts[0];
    let mut anchors: Vec<_> = all_cities()
        .filter(|c| c.state == account.hq_state && c.name != account.hq_city)
        .collect();
    if anchors.is_empty() {
        anchors = all_cities().collect();
    }

    for loc in p.locations.iter().filter(|l| l.identity.placement == Placement::Satellite) {
        let point = loc.coordinates.actual();
        assert!(
            anchors.iter().any(|c| c.point().approx_miles_to(point) <= 1.01),
            "{} is not near any satellite anchor",
            loc.id()
        );
    }
}
