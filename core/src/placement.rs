//! Spatial layout of an account's locations.

use crate::{
    account::Account,
    error::GenResult,
    geography::{all_cities, cluster_points, City},
    location::Placement,
    rng::GenRng,
    types::{GeoPoint, Miles},
};

/// Radius around the chosen city for each satellite location.
pub const SATELLITE_RADIUS_MILES: Miles = 1.0;
/// Radius around the chosen city for each scattered location.
pub const SCATTER_RADIUS_MILES: Miles = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub point: GeoPoint,
    pub placement: Placement,
}

/// One site per location, in location order.
///
/// Clustered templates put `floor(n * (1 - satellite_pct))` sites around
/// HQ and the rest near other cities in the HQ state. Scattered templates
/// spread sites round-robin over distinct cities from the whole catalog.
pub fn plan_sites(account: &Account, rng: &mut GenRng) -> GenResult<Vec<Site>> {
    let n = account.num_locations;
    let template = account.template;

    if !template.is_clustered() {
        return scattered_sites(rng, n);
    }

    let clustered = ((n as f64) * (1.0 - template.satellite_pct)).floor() as usize;
    let clustered = clustered.min(n);

    let mut sites: Vec<Site> =
        cluster_points(rng, account.hq_point(), template.cluster_radius_miles, clustered)?
            .into_iter()
            .map(|point| Site { point, placement: Placement::Clustered })
            .collect();

    let in_state: Vec<&'static City> = all_cities()
        .filter(|c| c.state == account.hq_state && c.name != account.hq_city)
        .collect();
    let candidates: Vec<&'static City> =
        if in_state.is_empty() { all_cities().collect() } else { in_state };

    for _ in clustered..n {
        let city = *rng.pick(&candidates);
        for point in cluster_points(rng, city.point(), SATELLITE_RADIUS_MILES, 1)? {
            sites.push(Site { point, placement: Placement::Satellite });
        }
    }
    Ok(sites)
}

fn scattered_sites(rng: &mut GenRng, n: usize) -> GenResult<Vec<Site>> {
    let catalog: Vec<&'static City> = all_cities().collect();
    let chosen = rng.sample_indices(catalog.len(), n);
    if chosen.is_empty() {
        return Ok(Vec::new());
    }

    let mut sites = Vec::with_capacity(n);
    for i in 0..n {
        let city = catalog[chosen[i % chosen.len()]];
        for point in cluster_points(rng, city.point(), SCATTER_RADIUS_MILES, 1)? {
            sites.push(Site { point, placement: Placement::Scattered });
        }
    }
    Ok(sites)
}
