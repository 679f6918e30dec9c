//! Deterministic name, address and identifier generation.
//!
//! All generation draws from the run's GenRng (same seed = same names).

use crate::{geography::City, rng::GenRng};

/// Deterministic generator for organisation names, street addresses,
/// building names and record identifiers.
pub struct NameGenerator;

impl NameGenerator {
    /// Fill one of `patterns` with the HQ city, its state and a name fragment.
    ///
    /// `{City}` is the city name with spaces removed, `{County}` the city
    /// name as written.
    pub fn business_name(rng: &mut GenRng, patterns: &[&str], hq: &City) -> String {
        let pattern = *rng.pick(patterns);
        let fragment = *rng.pick(Self::name_fragments());
        pattern
            .replace("{City}", &hq.name.replace(' ', ""))
            .replace("{State}", hq.state)
            .replace("{Name}", fragment)
            .replace("{County}", hq.name)
    }

    /// `<number> <prefix><street> <suffix>`, e.g. "4120 North Commerce Parkway".
    pub fn street_address(rng: &mut GenRng) -> String {
        let number = rng.range_i64(100, 15_000);
        let prefix = rng.pick(Self::street_prefixes());
        let street = rng.pick(Self::street_names());
        let suffix = rng.pick(Self::street_suffixes());
        format!("{number} {prefix}{street} {suffix}")
    }

    pub fn building_name(rng: &mut GenRng) -> &'static str {
        *rng.pick(Self::building_names())
    }

    /// `LUS` followed by 17 uppercase hex digits.
    pub fn location_id(rng: &mut GenRng) -> String {
        const HEX: &[u8; 16] = b"0123456789ABCDEF";
        let mut id = String::with_capacity(20);
        id.push_str("LUS");
        for _ in 0..17 {
            id.push(HEX[rng.next_u64_below(16) as usize] as char);
        }
        id
    }

    pub fn zip_code(rng: &mut GenRng) -> String {
        rng.range_i64(10_000, 99_999).to_string()
    }

    fn name_fragments() -> &'static [&'static str] {
        &[
            "Summit", "Pacific", "Atlantic", "National", "American", "United",
            "Premier", "Pinnacle", "Horizon", "Gateway", "Legacy", "Heritage",
            "Patriot", "Liberty", "Freedom", "Golden", "Silver", "Metro",
            "Continental", "Global", "Central", "Northern", "Southern", "Western", "Eastern",
        ]
    }

    fn street_prefixes() -> &'static [&'static str] {
        &["", "North ", "South ", "East ", "West "]
    }

    fn street_names() -> &'static [&'static str] {
        &[
            "Main", "Oak", "Maple", "Park", "Cedar", "Commerce", "Industrial",
            "Corporate", "Technology", "Gateway", "Enterprise", "Business",
            "Center", "Plaza", "Summit", "College", "University", "Hospital",
            "Medical", "Research", "Innovation", "Campus", "Memorial",
        ]
    }

    fn street_suffixes() -> &'static [&'static str] {
        &[
            "Street", "Avenue", "Boulevard", "Drive", "Road", "Way", "Parkway",
            "Lane", "Circle", "Court", "Place",
        ]
    }

    fn building_names() -> &'static [&'static str] {
        &[
            "Building A", "Building B", "Building C", "North Wing", "South Wing",
            "East Building", "West Building", "Main Hall", "Science Center",
            "Student Center", "Administration", "Library", "Gymnasium", "Auditorium",
            "Research Lab", "Maintenance", "Storage Facility", "Parking Garage",
            "Medical Center", "Emergency Services", "Outpatient Clinic",
        ]
    }
}
