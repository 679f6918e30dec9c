//! Location record: one insured building.
//!
//! Sections are flattened into a single JSON object on export so the
//! dashboard sees one flat record per building. Optional values are `None`
//! (JSON `null`), never absent keys.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    error::{GenError, GenResult},
    geography::Region,
    peril::PerilScores,
    types::{AccountId, GeoPoint, LocationId},
};

/// How a location's coordinates were placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Around the account HQ, within the template's cluster radius.
    Clustered,
    /// Near another city in the HQ state.
    Satellite,
    /// Near a city drawn from the national catalog.
    Scattered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SprinklerStatus {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
    Partial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityDefect {
    MissingCoordinates,
    MissingConstruction,
    MissingSqft,
    StaleInspection,
}

impl QualityDefect {
    pub const ALL: [QualityDefect; 4] = [
        QualityDefect::MissingCoordinates,
        QualityDefect::MissingConstruction,
        QualityDefect::MissingSqft,
        QualityDefect::StaleInspection,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingCoordinates => "missing_coordinates",
            Self::MissingConstruction => "missing_construction",
            Self::MissingSqft => "missing_sqft",
            Self::StaleInspection => "stale_inspection",
        }
    }
}

/// Points deducted from a perfect score of 100 per defect.
pub const DEFECT_PENALTY: u8 = 15;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationIdentity {
    pub location_id: LocationId,
    pub account_id: AccountId,
    pub account_name: String,
    pub parent_location_id: Option<LocationId>,
    pub building_name: String,
    pub is_main_building: bool,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Address {
    pub address: String,
    pub city: &'static str,
    pub state: &'static str,
    pub zip: String,
    pub county: String,
    pub region: Region,
}

/// Reported coordinates may be withheld; actual coordinates never are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub lat_actual: f64,
    pub lon_actual: f64,
}

impl Coordinates {
    pub fn new(actual: GeoPoint, reported: bool) -> Self {
        Self {
            lat: reported.then_some(actual.lat),
            lon: reported.then_some(actual.lon),
            lat_actual: actual.lat,
            lon_actual: actual.lon,
        }
    }

    pub fn actual(&self) -> GeoPoint {
        GeoPoint::new(self.lat_actual, self.lon_actual)
    }

    /// Reported pair, falling back to the actual pair when withheld.
    pub fn for_map(&self) -> GeoPoint {
        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => GeoPoint::new(lat, lon),
            _ => self.actual(),
        }
    }
}

/// Construction, occupancy and roof (the "COPE" building fields).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Building {
    pub construction_code: Option<u8>,
    /// Class name, or "Unknown" when the construction class is withheld.
    pub construction_type: &'static str,
    pub fire_risk: Option<&'static str>,
    pub year_built: u16,
    pub stories: u32,
    pub sq_footage: Option<u32>,
    pub occupancy_desc: &'static str,
    pub roof_type: &'static str,
    pub roof_shape: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Protection {
    pub sprinkler_status: SprinklerStatus,
    pub fire_protection_class: &'static str,
    pub fire_hydrant_distance: &'static str,
    pub coast_distance: &'static str,
}

/// Insured values. `total_tiv` is the sum of the three components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Exposure {
    pub building_value: f64,
    pub contents_value: f64,
    pub bii_value: f64,
    pub total_tiv: f64,
}

/// Loss history. Incurred is whole dollars; paid is rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ClaimsSummary {
    pub total_claims: u32,
    pub total_incurred: u64,
    pub total_paid: f64,
    pub property_claims: u32,
    pub gl_claims: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskControl {
    pub has_recommendations: bool,
    pub rc_category: Option<&'static str>,
    pub rc_title: Option<&'static str>,
    pub rc_text: Option<&'static str>,
    pub rc_job_number: Option<String>,
}

impl RiskControl {
    pub fn none() -> Self {
        Self {
            has_recommendations: false,
            rc_category: None,
            rc_title: None,
            rc_text: None,
            rc_job_number: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataQuality {
    pub data_quality_score: u8,
    pub data_quality_issues: Vec<QualityDefect>,
    pub last_inspection_date: NaiveDate,
    pub source_system: &'static str,
}

impl DataQuality {
    pub fn new(
        issues: Vec<QualityDefect>,
        last_inspection_date: NaiveDate,
        source_system: &'static str,
    ) -> Self {
        let penalty = (issues.len() as u8).saturating_mul(DEFECT_PENALTY);
        Self {
            data_quality_score: 100u8.saturating_sub(penalty),
            data_quality_issues: issues,
            last_inspection_date,
            source_system,
        }
    }

    pub fn has(&self, defect: QualityDefect) -> bool {
        self.data_quality_issues.contains(&defect)
    }
}

/// Counts of linked records a real MDM hub would join to this location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AvailableData {
    pub iso_reports: u32,
    pub risk_control_reports: u32,
    pub claims_count: u32,
    pub inspection_count: u32,
    pub nearmap_available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicyInfo {
    pub named_insured: String,
    pub policy_number: String,
    pub business_unit: &'static str,
    pub sic_code: &'static str,
    pub naics_code: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    #[serde(flatten)]
    pub identity: LocationIdentity,
    #[serde(flatten)]
    pub address: Address,
    #[serde(flatten)]
    pub coordinates: Coordinates,
    #[serde(flatten)]
    pub building: Building,
    #[serde(flatten)]
    pub protection: Protection,
    #[serde(flatten)]
    pub exposure: Exposure,
    #[serde(flatten)]
    pub perils: PerilScores,
    #[serde(flatten)]
    pub claims: ClaimsSummary,
    #[serde(flatten)]
    pub risk_control: RiskControl,
    #[serde(flatten)]
    pub quality: DataQuality,
    pub available_data: AvailableData,
    #[serde(flatten)]
    pub policy: PolicyInfo,
}

impl Location {
    pub fn id(&self) -> &str {
        &self.identity.location_id
    }

    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }
}

/// Assembles a Location section by section. `build` fails if any section
/// was never supplied.
#[derive(Debug, Default)]
pub struct LocationBuilder {
    identity: Option<LocationIdentity>,
    address: Option<Address>,
    coordinates: Option<Coordinates>,
    building: Option<Building>,
    protection: Option<Protection>,
    exposure: Option<Exposure>,
    perils: Option<PerilScores>,
    claims: Option<ClaimsSummary>,
    risk_control: Option<RiskControl>,
    quality: Option<DataQuality>,
    available_data: Option<AvailableData>,
    policy: Option<PolicyInfo>,
}

impl LocationBuilder {
    pub fn identity(mut self, identity: LocationIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    pub fn coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    pub fn building(mut self, building: Building) -> Self {
        self.building = Some(building);
        self
    }

    pub fn protection(mut self, protection: Protection) -> Self {
        self.protection = Some(protection);
        self
    }

    pub fn exposure(mut self, exposure: Exposure) -> Self {
        self.exposure = Some(exposure);
        self
    }

    pub fn perils(mut self, perils: PerilScores) -> Self {
        self.perils = Some(perils);
        self
    }

    pub fn claims(mut self, claims: ClaimsSummary) -> Self {
        self.claims = Some(claims);
        self
    }

    pub fn risk_control(mut self, risk_control: RiskControl) -> Self {
        self.risk_control = Some(risk_control);
        self
    }

    pub fn quality(mut self, quality: DataQuality) -> Self {
        self.quality = Some(quality);
        self
    }

    pub fn available_data(mut self, available_data: AvailableData) -> Self {
        self.available_data = Some(available_data);
        self
    }

    pub fn policy(mut self, policy: PolicyInfo) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> GenResult<Location> {
        fn require<T>(value: Option<T>, field: &'static str) -> GenResult<T> {
            value.ok_or(GenError::IncompleteRecord { field })
        }

        Ok(Location {
            identity: require(self.identity, "identity")?,
            address: require(self.address, "address")?,
            coordinates: require(self.coordinates, "coordinates")?,
            building: require(self.building, "building")?,
            protection: require(self.protection, "protection")?,
            exposure: require(self.exposure, "exposure")?,
            perils: require(self.perils, "perils")?,
            claims: require(self.claims, "claims")?,
            risk_control: require(self.risk_control, "risk_control")?,
            quality: require(self.quality, "quality")?,
            available_data: require(self.available_data, "available_data")?,
            policy: require(self.policy, "policy")?,
        })
    }
}
