//! Static vocabularies drawn from when fabricating accounts and locations.

pub const ROOF_TYPES: &[&str] = &[
    "Metal",
    "Built-Up",
    "Single Ply Membrane",
    "Asphalt Shingle",
    "Wood Shake/Shingles",
    "Tile",
    "Slate",
    "EPDM",
];

pub const ROOF_SHAPES: &[&str] = &["Flat", "Gable", "Hip", "Mansard", "Shed", "IRR/CATHEDRAL"];

pub const FIRE_PROTECTION_CLASSES: &[&str] =
    &["P1", "P2", "P3", "P4", "P5", "PP1", "PP2", "PP3", "PP4"];

pub const HYDRANT_DISTANCES: &[&str] = &[
    "< 250 Feet",
    "> 250 feet AND <= 500 feet",
    "> 500 feet AND <= 1,000 feet",
    "> 1,000 feet",
    "Not yet covered in HydrantHub",
];

pub const COAST_DISTANCES: &[&str] =
    &["< 1 mile", "1-5 miles", "5-25 miles", "25-100 miles", "> 100 miles"];

pub const SOURCE_SYSTEMS: &[&str] = &["Submission", "Policy Admin", "ISO", "Manual Entry"];

pub const BUSINESS_UNITS: &[&str] = &["National Property", "Middle Market", "Select"];

#[derive(Debug)]
pub struct BrokerFirm {
    pub name: &'static str,
    pub city: &'static str,
    pub state: &'static str,
}

pub const BROKER_FIRMS: &[BrokerFirm] = &[
    BrokerFirm { name: "Marsh McLennan",             city: "New York",        state: "NY" },
    BrokerFirm { name: "Aon",                        city: "Chicago",         state: "IL" },
    BrokerFirm { name: "Willis Towers Watson",       city: "London",          state: "UK" },
    BrokerFirm { name: "Gallagher",                  city: "Rolling Meadows", state: "IL" },
    BrokerFirm { name: "Brown & Brown",              city: "Daytona Beach",   state: "FL" },
    BrokerFirm { name: "Hub International",          city: "Chicago",         state: "IL" },
    BrokerFirm { name: "USI Insurance Services",     city: "Valhalla",        state: "NY" },
    BrokerFirm { name: "Lockton Companies",          city: "Kansas City",     state: "MO" },
    BrokerFirm { name: "Alliant Insurance Services", city: "Newport Beach",   state: "CA" },
    BrokerFirm { name: "AssuredPartners",            city: "Lake Mary",       state: "FL" },
];

pub const EXISTING_CARRIERS: &[&str] = &[
    "Travelers",
    "Liberty Mutual",
    "Chubb",
    "Hartford",
    "CNA",
    "Zurich",
    "AIG",
    "FM Global",
    "Tokio Marine",
    "Allianz",
];

#[derive(Debug)]
pub struct RiskControlRecommendation {
    pub category: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

pub const RISK_CONTROL_RECOMMENDATIONS: &[RiskControlRecommendation] = &[
    RiskControlRecommendation {
        category: "Fire Protection",
        title: "Automatic Sprinkler System Maintenance",
        text: "The automatic sprinkler system should be inspected, tested, and maintained in \
               accordance with NFPA 25. This includes quarterly main drain tests, monthly valve \
               inspections, and annual internal inspections.",
    },
    RiskControlRecommendation {
        category: "Fire Protection",
        title: "Portable Fire Extinguisher Program",
        text: "Ensure portable fire extinguishers are properly located, inspected monthly, and \
               serviced annually. Train employees on proper extinguisher use and selection.",
    },
    RiskControlRecommendation {
        category: "Premises Safety",
        title: "Slip, Trip, and Fall Prevention",
        text: "Implement a comprehensive slip, trip, and fall prevention program including \
               regular inspection of walking surfaces, immediate cleanup of spills, and proper \
               lighting in all areas.",
    },
    RiskControlRecommendation {
        category: "Electrical Safety",
        title: "Electrical System Inspection",
        text: "Conduct a comprehensive inspection of the electrical system by a qualified \
               electrician. Address any code violations and upgrade outdated wiring.",
    },
    RiskControlRecommendation {
        category: "Emergency Preparedness",
        title: "Emergency Action Plan",
        text: "Develop and implement a comprehensive emergency action plan including procedures \
               for fire, severe weather, and medical emergencies. Conduct regular drills.",
    },
    RiskControlRecommendation {
        category: "Equipment Safety",
        title: "Equipment Maintenance Program",
        text: "Establish a preventive maintenance program for all building equipment including \
               HVAC systems, elevators, and electrical systems. Maintain documentation of all \
               inspections.",
    },
    RiskControlRecommendation {
        category: "Security",
        title: "Physical Security Assessment",
        text: "Conduct a comprehensive physical security assessment. Consider improvements to \
               access control, surveillance systems, lighting, and perimeter security.",
    },
    RiskControlRecommendation {
        category: "Roof Maintenance",
        title: "Roof Inspection and Maintenance",
        text: "Implement annual roof inspections with immediate repair of any identified \
               deficiencies. Document all inspections and maintain a roof maintenance log.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_are_non_empty() {
        assert!(!ROOF_TYPES.is_empty());
        assert!(!ROOF_SHAPES.is_empty());
        assert!(!FIRE_PROTECTION_CLASSES.is_empty());
        assert!(!HYDRANT_DISTANCES.is_empty());
        assert!(!COAST_DISTANCES.is_empty());
        assert!(!SOURCE_SYSTEMS.is_empty());
        assert!(!BUSINESS_UNITS.is_empty());
        assert_eq!(BROKER_FIRMS.len(), 10);
        assert!(EXISTING_CARRIERS.len() >= 3, "carrier draws take up to 3 without replacement");
        assert_eq!(RISK_CONTROL_RECOMMENDATIONS.len(), 8);
    }

    #[test]
    fn recommendation_text_has_no_line_break_artifacts() {
        for rec in RISK_CONTROL_RECOMMENDATIONS {
            assert!(!rec.text.contains("  "), "double space in '{}'", rec.title);
            assert!(!rec.text.contains('\n'));
        }
    }
}
