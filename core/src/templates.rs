//! Account archetypes: one statistical profile per industry vertical.
//!
//! Templates are static and shared by every account of that type.
//! A cluster radius of zero means the vertical is scattered nationally.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    construction::ConstructionClass::{self, *},
    error::GenError,
    types::Miles,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    University,
    HealthcareSystem,
    RetailChain,
    Industrial,
    OfficeReit,
    HotelChain,
    SchoolDistrict,
    RestaurantFranchise,
    Logistics,
    Municipal,
}

impl AccountType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::University => "university",
            Self::HealthcareSystem => "healthcare_system",
            Self::RetailChain => "retail_chain",
            Self::Industrial => "industrial",
            Self::OfficeReit => "office_reit",
            Self::HotelChain => "hotel_chain",
            Self::SchoolDistrict => "school_district",
            Self::RestaurantFranchise => "restaurant_franchise",
            Self::Logistics => "logistics",
            Self::Municipal => "municipal",
        }
    }

    pub fn template(self) -> &'static AccountTemplate {
        TEMPLATES
            .iter()
            .find(|t| t.account_type == self)
            .unwrap_or(&TEMPLATES[0])
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = GenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TEMPLATES
            .iter()
            .map(|t| t.account_type)
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GenError::invalid("force_template", format!("unknown template '{s}'")))
    }
}

#[derive(Debug)]
pub struct AccountTemplate {
    pub account_type: AccountType,
    /// Patterns with `{City}`, `{State}`, `{Name}`, `{County}` placeholders.
    pub name_patterns: &'static [&'static str],
    /// Inclusive.
    pub location_range: (i64, i64),
    pub tiv_range: (f64, f64),
    pub cluster_radius_miles: Miles,
    pub satellite_pct: f64,
    pub naics: &'static str,
    pub sic: &'static str,
    pub occupancy_types: &'static [&'static str],
    pub construction_bias: &'static [ConstructionClass],
}

impl AccountTemplate {
    pub fn is_clustered(&self) -> bool {
        self.cluster_radius_miles > 0.0
    }
}

pub static TEMPLATES: [AccountTemplate; 10] = [
    AccountTemplate {
        account_type: AccountType::University,
        name_patterns: &[
            "{City} State University",
            "{City} College",
            "University of {State}",
            "{Name} Institute of Technology",
            "{Name} Community College",
        ],
        location_range: (35, 80),
        tiv_range: (500_000.0, 15_000_000.0),
        cluster_radius_miles: 0.8,
        satellite_pct: 0.15,
        naics: "611310",
        sic: "8221",
        occupancy_types: &[
            "Schools-Colleges, Univ.",
            "Schools-Dormitory",
            "Office - General",
            "Warehouse/Storage",
            "Athletic Facility",
            "Library/Museum",
        ],
        construction_bias: &[Frame, JoistedMasonry, MasonryNonCombustible],
    },
    AccountTemplate {
        account_type: AccountType::HealthcareSystem,
        name_patterns: &[
            "{City} Regional Medical Center",
            "{Name} Health System",
            "{City} Memorial Hospital",
            "St. {Name} Healthcare",
        ],
        location_range: (25, 55),
        tiv_range: (2_000_000.0, 85_000_000.0),
        cluster_radius_miles: 1.5,
        satellite_pct: 0.30,
        naics: "622110",
        sic: "8062",
        occupancy_types: &[
            "Hospital",
            "Medical Office",
            "Clinic",
            "Urgent Care",
            "Pharmacy",
            "Laboratory",
            "Office - General",
        ],
        construction_bias: &[MasonryNonCombustible, FireResistive, NonCombustible],
    },
    AccountTemplate {
        account_type: AccountType::RetailChain,
        name_patterns: &[
            "{Name} Retail Group",
            "{Name} Stores Inc.",
            "{Name} Shopping Centers",
            "{Name} Properties LLC",
        ],
        location_range: (40, 100),
        tiv_range: (800_000.0, 25_000_000.0),
        cluster_radius_miles: 0.0,
        satellite_pct: 1.0,
        naics: "452910",
        sic: "5311",
        occupancy_types: &[
            "Mercantile/Retail",
            "Shopping Center",
            "Strip Mall",
            "Warehouse/Distribution",
        ],
        construction_bias: &[MasonryNonCombustible, NonCombustible, JoistedMasonry],
    },
    AccountTemplate {
        account_type: AccountType::Industrial,
        name_patterns: &[
            "{Name} Manufacturing Corp.",
            "{Name} Industries LLC",
            "{City} Industrial Partners",
            "Precision {Name} Inc.",
        ],
        location_range: (20, 50),
        tiv_range: (3_000_000.0, 120_000_000.0),
        cluster_radius_miles: 2.0,
        satellite_pct: 0.40,
        naics: "332710",
        sic: "3599",
        occupancy_types: &[
            "Manufacturing/Industrial",
            "Warehouse/Distribution",
            "Office - General",
            "Research Facility",
        ],
        construction_bias: &[NonCombustible, MasonryNonCombustible, FireResistive],
    },
    AccountTemplate {
        account_type: AccountType::OfficeReit,
        name_patterns: &[
            "{Name} Office Trust",
            "{City} Property Group",
            "{Name} Real Estate Partners",
            "Premier {Name} Properties",
        ],
        location_range: (30, 70),
        tiv_range: (5_000_000.0, 200_000_000.0),
        cluster_radius_miles: 0.0,
        satellite_pct: 1.0,
        naics: "531120",
        sic: "6512",
        occupancy_types: &[
            "Office - High Rise",
            "Office - Mid Rise",
            "Office - Low Rise",
            "Mixed Use",
            "Parking Structure",
        ],
        construction_bias: &[FireResistive, ModifiedFireResistive, MasonryNonCombustible],
    },
    AccountTemplate {
        account_type: AccountType::HotelChain,
        name_patterns: &[
            "{Name} Hotels & Resorts",
            "{Name} Hospitality Group",
            "{Name} Inn Properties",
            "Coastal {Name} Hotels",
        ],
        location_range: (20, 45),
        tiv_range: (8_000_000.0, 95_000_000.0),
        cluster_radius_miles: 0.0,
        satellite_pct: 1.0,
        naics: "721110",
        sic: "7011",
        occupancy_types: &["Hotel/Motel", "Resort", "Convention Center", "Restaurant"],
        construction_bias: &[FireResistive, MasonryNonCombustible, NonCombustible],
    },
    AccountTemplate {
        account_type: AccountType::SchoolDistrict,
        name_patterns: &[
            "{City} Unified School District",
            "{County} Public Schools",
            "{City} Independent School District",
        ],
        location_range: (25, 60),
        tiv_range: (1_000_000.0, 35_000_000.0),
        cluster_radius_miles: 5.0,
        satellite_pct: 0.10,
        naics: "611110",
        sic: "8211",
        occupancy_types: &[
            "School - K-12",
            "School - Administration",
            "Athletic Facility",
            "Maintenance Facility",
            "Bus Depot",
        ],
        construction_bias: &[JoistedMasonry, MasonryNonCombustible, Frame],
    },
    AccountTemplate {
        account_type: AccountType::RestaurantFranchise,
        name_patterns: &[
            "{Name} Restaurant Group",
            "{Name} Dining Enterprises",
            "{Name} Food Services LLC",
        ],
        location_range: (35, 80),
        tiv_range: (400_000.0, 4_000_000.0),
        cluster_radius_miles: 0.0,
        satellite_pct: 1.0,
        naics: "722511",
        sic: "5812",
        occupancy_types: &["Restaurant", "Fast Food", "Bar/Tavern"],
        construction_bias: &[JoistedMasonry, Frame, MasonryNonCombustible],
    },
    AccountTemplate {
        account_type: AccountType::Logistics,
        name_patterns: &[
            "{Name} Logistics Inc.",
            "{Name} Distribution Centers",
            "{City} Supply Chain Partners",
            "Express {Name} Warehousing",
        ],
        location_range: (15, 40),
        tiv_range: (10_000_000.0, 150_000_000.0),
        cluster_radius_miles: 0.0,
        satellite_pct: 1.0,
        naics: "493110",
        sic: "4225",
        occupancy_types: &[
            "Warehouse/Distribution",
            "Cold Storage",
            "Office - General",
            "Truck Terminal",
        ],
        construction_bias: &[NonCombustible, MasonryNonCombustible],
    },
    AccountTemplate {
        account_type: AccountType::Municipal,
        name_patterns: &[
            "City of {City}",
            "{City} Municipal Authority",
            "{County} County Government",
        ],
        location_range: (30, 70),
        tiv_range: (500_000.0, 45_000_000.0),
        cluster_radius_miles: 3.0,
        satellite_pct: 0.20,
        naics: "921110",
        sic: "9111",
        occupancy_types: &[
            "Government Office",
            "Fire Station",
            "Police Station",
            "Library/Museum",
            "Community Center",
            "Maintenance Facility",
        ],
        construction_bias: &[MasonryNonCombustible, JoistedMasonry, FireResistive],
    },
];
