//! Shared primitive types used across the generator.

use serde::{Deserialize, Serialize};

/// `ACC-nnnnnn`.
pub type AccountId = String;

/// `LUS` followed by 17 uppercase hex digits.
pub type LocationId = String;

/// Distances on the ground, in statute miles.
pub type Miles = f64;

/// Miles per degree of latitude (and of longitude at the equator).
pub const MILES_PER_DEGREE: f64 = 69.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Offset by a ground distance along a bearing (radians, 0 = north).
    /// Flat-earth approximation: latitude degrees are a fixed 69 miles and
    /// longitude degrees shrink with `cos(self.lat)`.
    pub fn offset(self, distance: Miles, bearing: f64) -> Self {
        let lat_offset = distance * bearing.cos() / MILES_PER_DEGREE;
        let lon_offset =
            distance * bearing.sin() / MILES_PER_DEGREE / self.lat.to_radians().cos();
        Self {
            lat: round_to(self.lat + lat_offset, 6),
            lon: round_to(self.lon + lon_offset, 6),
        }
    }

    /// Inverse of `offset` measured from `self` as the origin.
    pub fn approx_miles_to(self, other: GeoPoint) -> Miles {
        let dy = (other.lat - self.lat) * MILES_PER_DEGREE;
        let dx = (other.lon - self.lon) * MILES_PER_DEGREE * self.lat.to_radians().cos();
        dy.hypot(dx)
    }

    /// Euclidean distance in degree space. Only good for ranking nearby points.
    pub fn degree_distance(self, other: GeoPoint) -> f64 {
        (self.lat - other.lat).hypot(self.lon - other.lon)
    }
}

/// Round half away from zero to `places` decimals.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Money rounding (2 decimals).
pub fn cents(value: f64) -> f64 {
    round_to(value, 2)
}
