//! Account synthesis: one insured organisation per template draw.

use serde::Serialize;

use crate::{
    geography::{City, Region, METRO_AREAS, SECONDARY_CITIES},
    name_generator::NameGenerator,
    reference_data::{BROKER_FIRMS, EXISTING_CARRIERS},
    rng::GenRng,
    templates::{AccountTemplate, AccountType, TEMPLATES},
    types::{cents, AccountId, GeoPoint},
};

pub const REVENUE_RANGE: (f64, f64) = (10_000_000.0, 500_000_000.0);
pub const EMPLOYEE_RANGE: (i64, i64) = (50, 5_000);
pub const YEARS_IN_BUSINESS_RANGE: (i64, i64) = (5, 125);

#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub account_id: AccountId,
    pub account_name: String,
    pub account_type: AccountType,
    pub hq_city: &'static str,
    pub hq_state: &'static str,
    pub hq_lat: f64,
    pub hq_lon: f64,
    pub region: Region,
    pub naics: &'static str,
    pub sic: &'static str,
    /// Drawn independently of location count.
    pub annual_revenue: f64,
    pub employees: u32,
    pub years_in_business: u32,
    pub broker_name: &'static str,
    pub broker_city: &'static str,
    pub broker_state: &'static str,
    pub existing_carriers: Vec<&'static str>,
    pub num_locations: usize,
    #[serde(skip)]
    pub template: &'static AccountTemplate,
}

impl Account {
    pub fn hq_point(&self) -> GeoPoint {
        GeoPoint::new(self.hq_lat, self.hq_lon)
    }

    /// Draw one account from `template`.
    ///
    /// Campus-style templates (positive cluster radius) headquarter in a
    /// secondary city; scattered templates headquarter in a major metro.
    pub fn synthesize(template: &'static AccountTemplate, rng: &mut GenRng) -> Self {
        let hq: &'static City = if template.is_clustered() {
            rng.pick(&SECONDARY_CITIES)
        } else {
            rng.pick(&METRO_AREAS)
        };

        let account_name = NameGenerator::business_name(rng, template.name_patterns, hq);
        let num_locations =
            rng.range_i64(template.location_range.0, template.location_range.1) as usize;
        let annual_revenue = cents(rng.uniform(REVENUE_RANGE.0, REVENUE_RANGE.1));
        let broker = rng.pick(BROKER_FIRMS);
        let account_id = format!("ACC-{}", rng.range_i64(100_000, 999_999));
        let employees = rng.range_i64(EMPLOYEE_RANGE.0, EMPLOYEE_RANGE.1) as u32;
        let years_in_business =
            rng.range_i64(YEARS_IN_BUSINESS_RANGE.0, YEARS_IN_BUSINESS_RANGE.1) as u32;

        let carrier_count = rng.range_i64(1, 3) as usize;
        let existing_carriers = rng
            .sample_indices(EXISTING_CARRIERS.len(), carrier_count)
            .into_iter()
            .map(|i| EXISTING_CARRIERS[i])
            .collect();

        Self {
            account_id,
            account_name,
            account_type: template.account_type,
            hq_city: hq.name,
            hq_state: hq.state,
            hq_lat: hq.lat,
            hq_lon: hq.lon,
            region: hq.region,
            naics: template.naics,
            sic: template.sic,
            annual_revenue,
            employees,
            years_in_business,
            broker_name: broker.name,
            broker_city: broker.city,
            broker_state: broker.state,
            existing_carriers,
            num_locations,
            template,
        }
    }
}

/// Choose the template for each of `n` accounts.
///
/// A forced template is used for every account. Otherwise the first
/// `min(n, 10)` accounts get distinct archetypes and the rest are drawn
/// with replacement.
pub fn select_templates(
    rng: &mut GenRng,
    n: usize,
    forced: Option<AccountType>,
) -> Vec<&'static AccountTemplate> {
    if let Some(account_type) = forced {
        return vec![account_type.template(); n];
    }

    let mut chosen: Vec<&'static AccountTemplate> = rng
        .sample_indices(TEMPLATES.len(), n)
        .into_iter()
        .map(|i| &TEMPLATES[i])
        .collect();
    while chosen.len() < n {
        chosen.push(rng.pick(&TEMPLATES));
    }
    chosen
}
