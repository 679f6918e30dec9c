//! JSON exports: the full portfolio and the dashboard's location array.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    account::Account,
    error::{GenError, GenResult},
    location::{
        Address, AvailableData, Building, ClaimsSummary, DataQuality, Exposure, Location,
        LocationIdentity, PolicyInfo, Protection, RiskControl,
    },
    peril::PerilScores,
    summary::PortfolioSummary,
};

#[derive(Debug, Serialize)]
pub struct FullExport<'a> {
    pub generated_at: DateTime<Utc>,
    pub summary: PortfolioSummary,
    pub accounts: &'a [Account],
    pub locations: &'a [Location],
}

/// A location as the map consumes it: reported coordinates always present,
/// actual-coordinate shadow fields gone.
#[derive(Debug, Serialize)]
pub struct DashboardLocation<'a> {
    #[serde(flatten)]
    pub identity: &'a LocationIdentity,
    #[serde(flatten)]
    pub address: &'a Address,
    pub lat: f64,
    pub lon: f64,
    #[serde(flatten)]
    pub building: &'a Building,
    #[serde(flatten)]
    pub protection: &'a Protection,
    #[serde(flatten)]
    pub exposure: &'a Exposure,
    #[serde(flatten)]
    pub perils: &'a PerilScores,
    #[serde(flatten)]
    pub claims: &'a ClaimsSummary,
    #[serde(flatten)]
    pub risk_control: &'a RiskControl,
    #[serde(flatten)]
    pub quality: &'a DataQuality,
    pub available_data: &'a AvailableData,
    #[serde(flatten)]
    pub policy: &'a PolicyInfo,
}

impl<'a> From<&'a Location> for DashboardLocation<'a> {
    fn from(loc: &'a Location) -> Self {
        let point = loc.coordinates.for_map();
        Self {
            identity: &loc.identity,
            address: &loc.address,
            lat: point.lat,
            lon: point.lon,
            building: &loc.building,
            protection: &loc.protection,
            exposure: &loc.exposure,
            perils: &loc.perils,
            claims: &loc.claims,
            risk_control: &loc.risk_control,
            quality: &loc.quality,
            available_data: &loc.available_data,
            policy: &loc.policy,
        }
    }
}

pub fn dashboard_locations(locations: &[Location]) -> Vec<DashboardLocation<'_>> {
    locations.iter().map(DashboardLocation::from).collect()
}

pub fn write_full_export(path: &Path, export: &FullExport<'_>) -> GenResult<()> {
    write_json(path, export)
}

/// Returns the number of locations written.
pub fn write_locations_export(path: &Path, locations: &[Location]) -> GenResult<usize> {
    let cleaned = dashboard_locations(locations);
    write_json(path, &cleaned)?;
    Ok(cleaned.len())
}

/// Pretty-print `value` (two-space indent) to `path`, replacing any
/// existing file.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> GenResult<()> {
    let file = File::create(path).map_err(|e| GenError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
        if e.is_io() {
            GenError::io(path, e.into())
        } else {
            GenError::Serialization(e)
        }
    })?;
    writer.flush().map_err(|e| GenError::io(path, e))?;
    log::info!("wrote {}", path.display());
    Ok(())
}
