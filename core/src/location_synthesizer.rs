//! Per-location synthesis for one account.

use log::debug;

use crate::{
    account::Account,
    clock::RunClock,
    config::DataQualityRates,
    construction::{ConstructionClass, UNKNOWN_CONSTRUCTION},
    error::GenResult,
    geography::nearest_city,
    location::{
        Address, AvailableData, Building, ClaimsSummary, Coordinates, DataQuality, Exposure,
        Location, LocationIdentity, PolicyInfo, Protection, QualityDefect, RiskControl,
        SprinklerStatus,
    },
    name_generator::NameGenerator,
    peril::PerilScores,
    placement::{plan_sites, Site},
    reference_data::{
        BUSINESS_UNITS, COAST_DISTANCES, FIRE_PROTECTION_CLASSES, HYDRANT_DISTANCES,
        RISK_CONTROL_RECOMMENDATIONS, ROOF_SHAPES, ROOF_TYPES, SOURCE_SYSTEMS,
    },
    rng::GenRng,
    types::{cents, LocationId},
};

pub const MAIN_BUILDING_NAME: &str = "Main Campus / Administration";

/// TIV above which a building is treated as well protected.
pub const LARGE_TIV_THRESHOLD: f64 = 20_000_000.0;

pub const BUILDING_FRACTION: (f64, f64) = (0.50, 0.75);
pub const CONTENTS_FRACTION: (f64, f64) = (0.15, 0.35);

pub const RISK_CONTROL_PROBABILITY: f64 = 0.25;
pub const AERIAL_IMAGERY_PROBABILITY: f64 = 0.8;

pub const STALE_INSPECTION_DAYS: (i64, i64) = (1100, 2000);
pub const RECENT_INSPECTION_DAYS: (i64, i64) = (30, 365);

const SPRINKLER_OPTIONS: [SprinklerStatus; 3] =
    [SprinklerStatus::Yes, SprinklerStatus::No, SprinklerStatus::Partial];
const SPRINKLER_WEIGHTS_PROTECTED: [f64; 3] = [0.85, 0.05, 0.10];
const SPRINKLER_WEIGHTS_STANDARD: [f64; 3] = [0.55, 0.30, 0.15];

/// Inclusive stories and square-footage ranges for an occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeProfile {
    pub stories: (i64, i64),
    pub sq_footage: (i64, i64),
}

impl SizeProfile {
    pub fn for_occupancy(occupancy: &str) -> Self {
        let (stories, sq_footage) = if occupancy.contains("High Rise") {
            ((12, 55), (200_000, 1_500_000))
        } else if occupancy.contains("Mid Rise") {
            ((5, 11), (50_000, 300_000))
        } else if occupancy.contains("Warehouse") || occupancy.contains("Industrial") {
            ((1, 3), (50_000, 800_000))
        } else {
            ((1, 4), (5_000, 100_000))
        };
        Self { stories, sq_footage }
    }
}

/// Claims bands keyed on the composite catastrophe risk factor:
/// (claim count range, incurred range).
fn claims_band(risk_factor: f64) -> ((i64, i64), (i64, i64)) {
    if risk_factor > 0.6 {
        ((3, 15), (50_000, 500_000))
    } else if risk_factor > 0.3 {
        ((0, 8), (10_000, 200_000))
    } else {
        ((0, 3), (0, 50_000))
    }
}

/// Produces the locations for one account.
pub struct LocationSynthesizer<'a> {
    rates: &'a DataQualityRates,
    clock: &'a RunClock,
}

impl<'a> LocationSynthesizer<'a> {
    pub fn new(rates: &'a DataQualityRates, clock: &'a RunClock) -> Self {
        Self { rates, clock }
    }

    /// Exactly `account.num_locations` locations.
    ///
    /// For clustered accounts with more than one location the first is the
    /// main building and every other location points at it.
    pub fn synthesize(&self, account: &Account, rng: &mut GenRng) -> GenResult<Vec<Location>> {
        let sites = plan_sites(account, rng)?;
        let campus = account.template.is_clustered() && sites.len() > 1;

        let mut locations: Vec<Location> = Vec::with_capacity(sites.len());
        let mut main_id: Option<LocationId> = None;
        for (i, site) in sites.iter().enumerate() {
            let role = match (campus, i, &main_id) {
                (true, 0, _) => Role::Main,
                (true, _, Some(id)) => Role::Child(id.clone()),
                _ => Role::Standalone,
            };
            let location = self.location(account, site, role, rng)?;
            if campus && i == 0 {
                main_id = Some(location.identity.location_id.clone());
            }
            locations.push(location);
        }

        debug!(
            "{}: {} locations, {} defective",
            account.account_id,
            locations.len(),
            locations.iter().filter(|l| !l.quality.data_quality_issues.is_empty()).count()
        );
        Ok(locations)
    }

    fn location(
        &self,
        account: &Account,
        site: &Site,
        role: Role,
        rng: &mut GenRng,
    ) -> GenResult<Location> {
        let template = account.template;
        let city = nearest_city(site.point);

        let location_id = NameGenerator::location_id(rng);

        // Exposure
        let total_tiv = cents(rng.uniform(template.tiv_range.0, template.tiv_range.1));
        let building_pct = rng.uniform(BUILDING_FRACTION.0, BUILDING_FRACTION.1);
        let contents_pct =
            rng.uniform(CONTENTS_FRACTION.0, CONTENTS_FRACTION.1.min(1.0 - building_pct));
        let exposure = split_tiv(total_tiv, building_pct, contents_pct);

        // Building
        let construction: ConstructionClass = *rng.pick(template.construction_bias);
        let (year_lo, year_hi) = construction.age_bias().year_range();
        let year_built = rng.range_i64(year_lo, year_hi) as u16;
        let occupancy: &'static str = *rng.pick(template.occupancy_types);
        let size = SizeProfile::for_occupancy(occupancy);
        let stories = rng.range_i64(size.stories.0, size.stories.1) as u32;
        let sq_footage = rng.range_i64(size.sq_footage.0, size.sq_footage.1) as u32;

        let sprinkler_weights =
            if total_tiv > LARGE_TIV_THRESHOLD || construction.is_fire_resistive() {
                &SPRINKLER_WEIGHTS_PROTECTED
            } else {
                &SPRINKLER_WEIGHTS_STANDARD
            };
        let sprinkler_status = SPRINKLER_OPTIONS[rng.weighted_index(sprinkler_weights)?];
        let fire_protection_class = *rng.pick(FIRE_PROTECTION_CLASSES);

        let perils = PerilScores::for_state(city.state, rng)?;

        let claims = claims(perils.cat_risk_factor(), rng);
        let risk_control = risk_control(rng);

        // Defects, in fixed order.
        let mut issues = Vec::new();
        for (defect, p) in [
            (QualityDefect::MissingCoordinates, self.rates.pct_missing_coordinates),
            (QualityDefect::MissingConstruction, self.rates.pct_missing_construction),
            (QualityDefect::MissingSqft, self.rates.pct_missing_sqft),
            (QualityDefect::StaleInspection, self.rates.pct_stale_inspection),
        ] {
            if rng.chance(p) {
                issues.push(defect);
            }
        }
        let missing = |d: QualityDefect| issues.contains(&d);

        let inspection_days = if missing(QualityDefect::StaleInspection) {
            STALE_INSPECTION_DAYS
        } else {
            RECENT_INSPECTION_DAYS
        };
        let last_inspection_date =
            self.clock.days_ago(rng.range_i64(inspection_days.0, inspection_days.1));

        let building_name = if template.is_clustered() {
            NameGenerator::building_name(rng).to_string()
        } else {
            String::new()
        };

        let available_data = AvailableData {
            iso_reports: rng.range_i64(0, 5) as u32,
            risk_control_reports: u32::from(risk_control.has_recommendations),
            claims_count: claims.total_claims,
            inspection_count: rng.range_i64(0, 3) as u32,
            nearmap_available: rng.chance(AERIAL_IMAGERY_PROBABILITY),
        };

        let street = NameGenerator::street_address(rng);
        let zip = NameGenerator::zip_code(rng);
        let roof_type = *rng.pick(ROOF_TYPES);
        let roof_shape = *rng.pick(ROOF_SHAPES);
        let fire_hydrant_distance = *rng.pick(HYDRANT_DISTANCES);
        let coast_distance = *rng.pick(COAST_DISTANCES);
        let source_system = *rng.pick(SOURCE_SYSTEMS);
        let policy_number = format!("PRP-{}", rng.range_i64(1_000_000, 9_999_999));
        let business_unit = *rng.pick(BUSINESS_UNITS);

        let (parent_location_id, is_main_building, building_name) = match role {
            Role::Main => (None, true, MAIN_BUILDING_NAME.to_string()),
            Role::Child(parent) => (Some(parent), false, building_name),
            Role::Standalone => (None, false, building_name),
        };

        let construction_missing = missing(QualityDefect::MissingConstruction);
        let building = Building {
            construction_code: (!construction_missing).then(|| construction.code()),
            construction_type: if construction_missing {
                UNKNOWN_CONSTRUCTION
            } else {
                construction.name()
            },
            fire_risk: (!construction_missing).then(|| construction.fire_risk()),
            year_built,
            stories,
            sq_footage: (!missing(QualityDefect::MissingSqft)).then_some(sq_footage),
            occupancy_desc: occupancy,
            roof_type,
            roof_shape,
        };
        let coordinates =
            Coordinates::new(site.point, !missing(QualityDefect::MissingCoordinates));

        Location::builder()
            .identity(LocationIdentity {
                location_id,
                account_id: account.account_id.clone(),
                account_name: account.account_name.clone(),
                parent_location_id,
                building_name,
                is_main_building,
                placement: site.placement,
            })
            .address(Address {
                address: street,
                city: city.name,
                state: city.state,
                zip,
                county: format!("{} County", city.name),
                region: city.region,
            })
            .coordinates(coordinates)
            .building(building)
            .protection(Protection {
                sprinkler_status,
                fire_protection_class,
                fire_hydrant_distance,
                coast_distance,
            })
            .exposure(exposure)
            .perils(perils)
            .claims(claims)
            .risk_control(risk_control)
            .quality(DataQuality::new(issues, last_inspection_date, source_system))
            .available_data(available_data)
            .policy(PolicyInfo {
                named_insured: account.account_name.clone(),
                policy_number,
                business_unit,
                sic_code: account.sic,
                naics_code: account.naics,
            })
            .build()
    }
}

enum Role {
    Main,
    Child(LocationId),
    Standalone,
}

/// Split a total into building, contents and BII. BII is the remainder so
/// the three always sum back to the total.
pub fn split_tiv(total_tiv: f64, building_pct: f64, contents_pct: f64) -> Exposure {
    let building_value = cents(total_tiv * building_pct);
    let contents_value = cents(total_tiv * contents_pct);
    // `+ 0.0` turns a rounded -0.0 into 0.0.
    let bii_value = cents(total_tiv - building_value - contents_value).max(0.0) + 0.0;
    Exposure { building_value, contents_value, bii_value, total_tiv }
}

fn claims(risk_factor: f64, rng: &mut GenRng) -> ClaimsSummary {
    let (count_range, incurred_range) = claims_band(risk_factor);
    let total_claims = rng.range_i64(count_range.0, count_range.1);
    let total_incurred = rng.range_i64(incurred_range.0, incurred_range.1);
    let total_paid = cents(total_incurred as f64 * rng.uniform(0.6, 0.95));
    let property_claims = rng.range_i64(0, (total_claims - 2).max(0));
    let gl_claims = total_claims - rng.range_i64(0, total_claims);

    ClaimsSummary {
        total_claims: total_claims as u32,
        total_incurred: total_incurred as u64,
        total_paid,
        property_claims: property_claims as u32,
        gl_claims: gl_claims as u32,
    }
}

fn risk_control(rng: &mut GenRng) -> RiskControl {
    if !rng.chance(RISK_CONTROL_PROBABILITY) {
        return RiskControl::none();
    }
    let rec = rng.pick(RISK_CONTROL_RECOMMENDATIONS);
    RiskControl {
        has_recommendations: true,
        rc_category: Some(rec.category),
        rc_title: Some(rec.title),
        rc_text: Some(rec.text),
        rc_job_number: Some(format!("RC-{}", rng.range_i64(100_000, 999_999))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::{AccountType, TEMPLATES};
    use chrono::NaiveDate;

    fn clock() -> RunClock {
        RunClock::pinned(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
    }

    fn generate(account_type: AccountType, rates: &DataQualityRates, seed: u64) -> (Account, Vec<Location>) {
        let mut rng = GenRng::new(seed);
        let account = Account::synthesize(account_type.template(), &mut rng);
        let clock = clock();
        let locations = LocationSynthesizer::new(rates, &clock)
            .synthesize(&account, &mut rng)
            .unwrap();
        (account, locations)
    }

    #[test]
    fn size_profiles_follow_occupancy() {
        assert_eq!(SizeProfile::for_occupancy("Office - High Rise").stories, (12, 55));
        assert_eq!(SizeProfile::for_occupancy("Office - Mid Rise").stories, (5, 11));
        assert_eq!(SizeProfile::for_occupancy("Light Industrial").sq_footage, (50_000, 800_000));
        assert_eq!(SizeProfile::for_occupancy("Restaurant").stories, (1, 4));
    }

    #[test]
    fn tiv_split_sums_to_total() {
        let e = split_tiv(1_234_567.89, 0.75, 0.25);
        assert_eq!(e.bii_value, 0.0);
        assert!(!e.bii_value.is_sign_negative());
        assert!((e.building_value + e.contents_value + e.bii_value - e.total_tiv).abs() <= 0.01);

        let e = split_tiv(400_000.0, 0.5, 0.2);
        assert_eq!(e.building_value, 200_000.0);
        assert_eq!(e.contents_value, 80_000.0);
        assert_eq!(e.bii_value, 120_000.0);
    }

    #[test]
    fn produces_exactly_num_locations() {
        for account_type in [AccountType::Industrial, AccountType::RetailChain, AccountType::Municipal] {
            let (account, locations) = generate(account_type, &DataQualityRates::default(), 8);
            assert_eq!(locations.len(), account.num_locations);
            assert!(locations.iter().all(|l| l.identity.account_id == account.account_id));
        }
    }

    #[test]
    fn campus_accounts_have_one_main_building() {
        let (_, locations) = generate(AccountType::University, &DataQualityRates::default(), 4);
        let main = &locations[0];
        assert!(main.identity.is_main_building);
        assert_eq!(main.identity.building_name, MAIN_BUILDING_NAME);
        assert_eq!(main.identity.parent_location_id, None);
        for loc in &locations[1..] {
            assert!(!loc.identity.is_main_building);
            assert_eq!(loc.identity.parent_location_id.as_deref(), Some(main.id()));
        }
    }

    #[test]
    fn scattered_accounts_have_no_hierarchy() {
        let (_, locations) = generate(AccountType::HotelChain, &DataQualityRates::default(), 4);
        for loc in &locations {
            assert!(!loc.identity.is_main_building);
            assert!(loc.identity.parent_location_id.is_none());
            assert!(loc.identity.building_name.is_empty());
        }
    }

    #[test]
    fn clean_rates_produce_clean_records() {
        let (_, locations) = generate(AccountType::OfficeReit, &DataQualityRates::none(), 12);
        for loc in &locations {
            assert_eq!(loc.quality.data_quality_score, 100);
            assert!(loc.coordinates.lat.is_some());
            assert!(loc.building.construction_code.is_some());
            assert!(loc.building.sq_footage.is_some());
            let age = (clock().as_of - loc.quality.last_inspection_date).num_days();
            assert!((30..=365).contains(&age));
        }
    }

    #[test]
    fn certain_defects_null_their_fields() {
        let rates = DataQualityRates {
            pct_missing_coordinates: 1.0,
            pct_missing_construction: 1.0,
            pct_missing_sqft: 1.0,
            pct_stale_inspection: 1.0,
            pct_data_conflicts: 0.0,
        };
        let (_, locations) = generate(AccountType::SchoolDistrict, &rates, 12);
        for loc in &locations {
            assert_eq!(loc.quality.data_quality_issues, QualityDefect::ALL.to_vec());
            assert_eq!(loc.quality.data_quality_score, 40);
            assert_eq!((loc.coordinates.lat, loc.coordinates.lon), (None, None));
            assert!(loc.building.construction_code.is_none());
            assert_eq!(loc.building.construction_type, UNKNOWN_CONSTRUCTION);
            assert!(loc.building.fire_risk.is_none());
            assert!(loc.building.sq_footage.is_none());
            let age = (clock().as_of - loc.quality.last_inspection_date).num_days();
            assert!((1100..=2000).contains(&age));
        }
    }

    #[test]
    fn claims_follow_risk_bands() {
        assert_eq!(claims_band(0.6), ((0, 8), (10_000, 200_000)));
        assert_eq!(claims_band(0.3), ((0, 3), (0, 50_000)));

        let mut rng = GenRng::new(33);
        for (factor, counts, incurred) in [
            (0.2, 0..=3, 0..=50_000),
            (0.5, 0..=8, 10_000..=200_000),
            (0.8, 3..=15, 50_000..=500_000),
        ] {
            for _ in 0..500 {
                let c = claims(factor, &mut rng);
                assert!(counts.contains(&c.total_claims), "{factor}: {c:?}");
                assert!(incurred.contains(&c.total_incurred), "{factor}: {c:?}");

                let ceiling = c.total_incurred as f64;
                assert!(c.total_paid >= ceiling * 0.6 - 0.01, "{c:?}");
                assert!(c.total_paid <= ceiling * 0.95 + 0.01, "{c:?}");
                assert!(c.property_claims <= c.total_claims.saturating_sub(2), "{c:?}");
                assert!(c.gl_claims <= c.total_claims);
            }
        }
    }

    #[test]
    fn year_built_and_size_follow_construction_and_occupancy() {
        for (i, template) in TEMPLATES.iter().enumerate() {
            let (_, locations) =
                generate(template.account_type, &DataQualityRates::none(), 100 + i as u64);
            for loc in &locations {
                let b = &loc.building;
                let code = b.construction_code.unwrap();
                let class = *ConstructionClass::ALL.iter().find(|c| c.code() == code).unwrap();
                assert!(template.construction_bias.contains(&class), "{code} not in bias");
                assert_eq!(b.construction_type, class.name());
                assert_eq!(b.fire_risk, Some(class.fire_risk()));

                let (lo, hi) = class.age_bias().year_range();
                let year = i64::from(b.year_built);
                assert!((lo..=hi).contains(&year), "{} built {year}", class.name());

                assert!(template.occupancy_types.contains(&b.occupancy_desc));
                let size = SizeProfile::for_occupancy(b.occupancy_desc);
                let stories = i64::from(b.stories);
                let sqft = i64::from(b.sq_footage.unwrap());
                assert!((size.stories.0..=size.stories.1).contains(&stories), "{}", b.occupancy_desc);
                assert!((size.sq_footage.0..=size.sq_footage.1).contains(&sqft), "{}", b.occupancy_desc);
            }
        }
    }

    #[test]
    fn claims_and_linked_data_are_consistent() {
        let (_, locations) = generate(AccountType::Logistics, &DataQualityRates::default(), 21);
        for loc in &locations {
            let c = &loc.claims;
            assert!(c.gl_claims <= c.total_claims);
            assert!(c.total_paid <= c.total_incurred as f64);
            assert_eq!(loc.available_data.claims_count, c.total_claims);
            assert_eq!(
                loc.available_data.risk_control_reports,
                u32::from(loc.risk_control.has_recommendations)
            );
            assert_eq!(loc.risk_control.rc_title.is_some(), loc.risk_control.has_recommendations);
            assert!(loc.policy.policy_number.starts_with("PRP-"));
            assert_eq!(loc.address.county, format!("{} County", loc.address.city));
        }
    }

    #[test]
    fn large_or_fire_resistive_buildings_lean_sprinklered() {
        let (_, locations) = generate(AccountType::OfficeReit, &DataQualityRates::none(), 99);
        let protected: Vec<_> = locations
            .iter()
            .filter(|l| l.exposure.total_tiv > LARGE_TIV_THRESHOLD)
            .collect();
        if protected.len() >= 10 {
            let yes = protected
                .iter()
                .filter(|l| l.protection.sprinkler_status == SprinklerStatus::Yes)
                .count();
            assert!(yes * 2 > protected.len());
        }
    }
}
