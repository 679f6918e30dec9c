//! City catalog and the flat-earth geometry used to place locations.
//!
//! Coordinates are approximate city centres. Distances are never geodesic:
//! placement uses the 69-miles-per-degree approximation and nearest-city
//! resolution ranks by Euclidean distance in degree space.

use serde::{Deserialize, Serialize};

use crate::{
    error::GenResult,
    rng::GenRng,
    types::{GeoPoint, Miles},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Northeast,
    Southeast,
    Midwest,
    West,
    Southwest,
    Central,
}

#[derive(Debug)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
    pub state: &'static str,
    pub region: Region,
}

impl City {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

const fn city(name: &'static str, lat: f64, lon: f64, state: &'static str, region: Region) -> City {
    City { name, lat, lon, state, region }
}

pub static METRO_AREAS: [City; 45] = [
    // Northeast
    city("New York", 40.7128, -74.0060, "NY", Region::Northeast),
    city("Manhattan", 40.7831, -73.9712, "NY", Region::Northeast),
    city("Brooklyn", 40.6782, -73.9442, "NY", Region::Northeast),
    city("Boston", 42.3601, -71.0589, "MA", Region::Northeast),
    city("Philadelphia", 39.9526, -75.1652, "PA", Region::Northeast),
    city("Hartford", 41.7658, -72.6734, "CT", Region::Northeast),
    city("Newark", 40.7357, -74.1724, "NJ", Region::Northeast),
    // Southeast
    city("Miami", 25.7617, -80.1918, "FL", Region::Southeast),
    city("Fort Lauderdale", 26.1224, -80.1373, "FL", Region::Southeast),
    city("Tampa", 27.9506, -82.4572, "FL", Region::Southeast),
    city("Orlando", 28.5383, -81.3792, "FL", Region::Southeast),
    city("Jacksonville", 30.3322, -81.6557, "FL", Region::Southeast),
    city("Atlanta", 33.7490, -84.3880, "GA", Region::Southeast),
    city("Charlotte", 35.2271, -80.8431, "NC", Region::Southeast),
    city("Raleigh", 35.7796, -78.6382, "NC", Region::Southeast),
    city("Nashville", 36.1627, -86.7816, "TN", Region::Southeast),
    // Midwest
    city("Chicago", 41.8781, -87.6298, "IL", Region::Midwest),
    city("Detroit", 42.3314, -83.0458, "MI", Region::Midwest),
    city("Minneapolis", 44.9778, -93.2650, "MN", Region::Midwest),
    city("Columbus", 39.9612, -82.9988, "OH", Region::Midwest),
    city("Cleveland", 41.4993, -81.6944, "OH", Region::Midwest),
    city("Indianapolis", 39.7684, -86.1581, "IN", Region::Midwest),
    city("Milwaukee", 43.0389, -87.9065, "WI", Region::Midwest),
    city("Kansas City", 39.0997, -94.5786, "MO", Region::Midwest),
    city("St. Louis", 38.6270, -90.1994, "MO", Region::Midwest),
    // Southwest/West
    city("Los Angeles", 34.0522, -118.2437, "CA", Region::West),
    city("San Francisco", 37.7749, -122.4194, "CA", Region::West),
    city("San Diego", 32.7157, -117.1611, "CA", Region::West),
    city("San Jose", 37.3382, -121.8863, "CA", Region::West),
    city("Sacramento", 38.5816, -121.4944, "CA", Region::West),
    city("Phoenix", 33.4484, -112.0740, "AZ", Region::West),
    city("Las Vegas", 36.1699, -115.1398, "NV", Region::West),
    city("Denver", 39.7392, -104.9903, "CO", Region::West),
    city("Seattle", 47.6062, -122.3321, "WA", Region::West),
    city("Portland", 45.5152, -122.6784, "OR", Region::West),
    // Texas
    city("Houston", 29.7604, -95.3698, "TX", Region::Southwest),
    city("Dallas", 32.7767, -96.7970, "TX", Region::Southwest),
    city("San Antonio", 29.4241, -98.4936, "TX", Region::Southwest),
    city("Austin", 30.2672, -97.7431, "TX", Region::Southwest),
    city("Fort Worth", 32.7555, -97.3308, "TX", Region::Southwest),
    // Tornado Alley
    city("Oklahoma City", 35.4676, -97.5164, "OK", Region::Central),
    city("Tulsa", 36.1540, -95.9928, "OK", Region::Central),
    city("Wichita", 37.6872, -97.3301, "KS", Region::Central),
    city("Omaha", 41.2565, -95.9345, "NE", Region::Central),
    city("Little Rock", 34.7465, -92.2896, "AR", Region::Central),
];

pub static SECONDARY_CITIES: [City; 34] = [
    city("Banner Elk", 36.1626, -81.8717, "NC", Region::Southeast),
    city("Asheville", 35.5951, -82.5515, "NC", Region::Southeast),
    city("Savannah", 32.0809, -81.0912, "GA", Region::Southeast),
    city("Charleston", 32.7765, -79.9311, "SC", Region::Southeast),
    city("Boulder", 40.0150, -105.2705, "CO", Region::West),
    city("Santa Fe", 35.6870, -105.9378, "NM", Region::West),
    city("Boise", 43.6150, -116.2023, "ID", Region::West),
    city("Salt Lake City", 40.7608, -111.8910, "UT", Region::West),
    city("Burlington", 44.4759, -73.2121, "VT", Region::Northeast),
    city("Portland ME", 43.6591, -70.2568, "ME", Region::Northeast),
    city("Providence", 41.8240, -71.4128, "RI", Region::Northeast),
    city("Albany", 42.6526, -73.7562, "NY", Region::Northeast),
    city("Syracuse", 43.0481, -76.1474, "NY", Region::Northeast),
    city("Buffalo", 42.8864, -78.8784, "NY", Region::Northeast),
    city("Rochester", 43.1566, -77.6088, "NY", Region::Northeast),
    city("Grand Rapids", 42.9634, -85.6681, "MI", Region::Midwest),
    city("Des Moines", 41.5868, -93.6250, "IA", Region::Midwest),
    city("Madison", 43.0731, -89.4012, "WI", Region::Midwest),
    city("Lexington", 38.0406, -84.5037, "KY", Region::Southeast),
    city("Louisville", 38.2527, -85.7585, "KY", Region::Southeast),
    city("Birmingham", 33.5207, -86.8025, "AL", Region::Southeast),
    city("Mobile", 30.6954, -88.0399, "AL", Region::Southeast),
    city("New Orleans", 29.9511, -90.0715, "LA", Region::Southeast),
    city("Baton Rouge", 30.4515, -91.1871, "LA", Region::Southeast),
    city("Memphis", 35.1495, -90.0490, "TN", Region::Southeast),
    city("Knoxville", 35.9606, -83.9207, "TN", Region::Southeast),
    city("Richmond", 37.5407, -77.4360, "VA", Region::Southeast),
    city("Norfolk", 36.8508, -76.2859, "VA", Region::Southeast),
    city("Tucson", 32.2226, -110.9747, "AZ", Region::West),
    city("Albuquerque", 35.0844, -106.6504, "NM", Region::West),
    city("Fresno", 36.7378, -119.7871, "CA", Region::West),
    city("Oakland", 37.8044, -122.2712, "CA", Region::West),
    city("Long Beach", 33.7701, -118.1937, "CA", Region::West),
    city("Irvine", 33.6846, -117.8265, "CA", Region::West),
];

/// Full catalog: major metros first, then secondary cities. Iteration order
/// is stable and breaks nearest-city ties.
pub fn all_cities() -> impl Iterator<Item = &'static City> + Clone {
    METRO_AREAS.iter().chain(SECONDARY_CITIES.iter())
}

/// Linear scan; the first city at the minimum distance wins.
pub fn nearest_city(point: GeoPoint) -> &'static City {
    let mut best = &METRO_AREAS[0];
    let mut best_dist = f64::INFINITY;
    for city in all_cities() {
        let dist = point.degree_distance(city.point());
        if dist < best_dist {
            best_dist = dist;
            best = city;
        }
    }
    best
}

/// Points scattered around `center`: bearing uniform in [0, 2π), distance
/// half-normal with sigma = radius / 2, clipped to the radius.
pub fn cluster_points(
    rng: &mut GenRng,
    center: GeoPoint,
    radius: Miles,
    count: usize,
) -> GenResult<Vec<GeoPoint>> {
    let mut points = Vec::with_capacity(count);
    for _ in 0..count {
        let bearing = rng.uniform(0.0, std::f64::consts::TAU);
        let distance = rng.half_normal(radius / 2.0)?.min(radius);
        points.push(center.offset(distance, bearing));
    }
    Ok(points)
}
