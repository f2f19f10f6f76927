//! Built-in Caribbean hazard catalog
//!
//! Hazard definitions carry the default name, frequency and impact. Country
//! tables reference hazards by id and set the level that applies there.

use super::types::{Frequency, Hazard, Impact, LocationHazardSet, RiskLevel};
use std::collections::BTreeMap;

/// Default attributes of a hazard
#[derive(Debug, Clone, Copy)]
pub struct HazardDefinition {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Level the frequency below is calibrated for
    pub risk_level: RiskLevel,
    /// Frequency at `risk_level`
    pub frequency: Frequency,
    /// Impact when the hazard strikes
    pub impact: Impact,
}

const fn def(
    id: &'static str,
    name: &'static str,
    risk_level: RiskLevel,
    frequency: Frequency,
    impact: Impact,
) -> HazardDefinition {
    HazardDefinition {
        id,
        name,
        risk_level,
        frequency,
        impact,
    }
}

/// All known hazard definitions
pub const HAZARD_DEFINITIONS: &[HazardDefinition] = &[
    def("hurricane", "Hurricane", RiskLevel::High, Frequency::Likely, Impact::Major),
    def("earthquake", "Earthquake", RiskLevel::Medium, Frequency::Possible, Impact::Major),
    def("flood", "Flooding", RiskLevel::High, Frequency::Likely, Impact::Moderate),
    def("urban_flooding", "Urban Flooding", RiskLevel::High, Frequency::Likely, Impact::Moderate),
    def("landslide", "Landslide", RiskLevel::Medium, Frequency::Possible, Impact::Moderate),
    def("drought", "Drought", RiskLevel::Medium, Frequency::Possible, Impact::Moderate),
    def("storm_surge", "Storm Surge", RiskLevel::High, Frequency::Possible, Impact::Major),
    def("coastal_flood", "Coastal Flooding", RiskLevel::High, Frequency::Likely, Impact::Moderate),
    def("tsunami", "Tsunami", RiskLevel::Low, Frequency::Rare, Impact::Catastrophic),
    def("coastal_erosion", "Coastal Erosion", RiskLevel::Medium, Frequency::Likely, Impact::Minor),
    def("power_outage", "Power Outage", RiskLevel::Medium, Frequency::Likely, Impact::Moderate),
    def(
        "infrastructure_failure",
        "Infrastructure Failure",
        RiskLevel::Medium,
        Frequency::Possible,
        Impact::Moderate,
    ),
    def("cyber_attack", "Cyber Attack", RiskLevel::Medium, Frequency::Possible, Impact::Moderate),
    def("crime", "Crime", RiskLevel::Medium, Frequency::Likely, Impact::Moderate),
    def("fire", "Fire", RiskLevel::Medium, Frequency::Unlikely, Impact::Major),
    def(
        "traffic_disruption",
        "Traffic Disruption",
        RiskLevel::Low,
        Frequency::Likely,
        Impact::Minor,
    ),
    def("water_shortage", "Water Shortage", RiskLevel::Medium, Frequency::Possible, Impact::Moderate),
    def("pandemic", "Pandemic", RiskLevel::Medium, Frequency::Unlikely, Impact::Major),
    def(
        "supply_chain_disruption",
        "Supply Chain Disruption",
        RiskLevel::Medium,
        Frequency::Possible,
        Impact::Moderate,
    ),
    def(
        "economic_downturn",
        "Economic Downturn",
        RiskLevel::Medium,
        Frequency::Possible,
        Impact::Moderate,
    ),
    def(
        "food_contamination",
        "Food Contamination",
        RiskLevel::Medium,
        Frequency::Unlikely,
        Impact::Major,
    ),
    def(
        "equipment_failure",
        "Equipment Failure",
        RiskLevel::Medium,
        Frequency::Possible,
        Impact::Moderate,
    ),
];

/// Look up a hazard definition by id
pub fn hazard_definition(id: &str) -> Option<&'static HazardDefinition> {
    HAZARD_DEFINITIONS.iter().find(|definition| definition.id == id)
}

/// Turn `some_hazard_id` into `Some Hazard Id`
pub fn display_name_for(id: &str) -> String {
    id.split(['_', '-', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a hazard at `risk_level` using the definition defaults.
///
/// Frequency moves one step per level above or below the definition's own
/// level; impact stays with the hazard. Unknown ids get a humanized name and
/// the neutral possible/moderate pair at medium.
pub fn hazard(id: &str, risk_level: RiskLevel) -> Hazard {
    match hazard_definition(id) {
        Some(definition) => Hazard {
            id: definition.id.to_string(),
            name: definition.name.to_string(),
            risk_level,
            frequency: definition
                .frequency
                .shifted(risk_level.steps_from(definition.risk_level)),
            impact: definition.impact,
        },
        None => Hazard {
            id: id.to_string(),
            name: display_name_for(id),
            risk_level,
            frequency: Frequency::Possible.shifted(risk_level.steps_from(RiskLevel::Medium)),
            impact: Impact::Moderate,
        },
    }
}

fn hazards(entries: &[(&str, RiskLevel)]) -> Vec<Hazard> {
    entries
        .iter()
        .map(|(id, level)| hazard(id, *level))
        .collect()
}

fn regions(entries: &[(&str, &[(&str, RiskLevel)])]) -> BTreeMap<String, Vec<Hazard>> {
    entries
        .iter()
        .map(|(name, list)| (name.to_string(), hazards(list)))
        .collect()
}

use RiskLevel::{High, Low, Medium, VeryHigh};

fn jamaica() -> LocationHazardSet {
    LocationHazardSet {
        country_code: "JM".to_string(),
        country_name: "Jamaica".to_string(),
        base: hazards(&[
            ("hurricane", High),
            ("earthquake", Medium),
            ("flood", High),
            ("drought", Medium),
            ("landslide", Medium),
        ]),
        sub_regions: regions(&[
            ("Kingston", &[("urban_flooding", High), ("crime", High)]),
            ("St. Andrew", &[("landslide", High), ("urban_flooding", Medium)]),
            ("St. Catherine", &[("flood", High), ("crime", Medium)]),
            ("St. James", &[("coastal_erosion", Medium), ("water_shortage", Medium)]),
            ("Portland", &[("landslide", VeryHigh), ("flood", High)]),
            ("St. Thomas", &[("flood", VeryHigh), ("earthquake", High)]),
            ("Clarendon", &[("drought", High)]),
            ("Manchester", &[("water_shortage", High)]),
        ]),
        coastal: hazards(&[
            ("storm_surge", High),
            ("coastal_flood", High),
            ("tsunami", Low),
            ("coastal_erosion", Medium),
        ]),
        urban: hazards(&[
            ("power_outage", Medium),
            ("crime", Medium),
            ("traffic_disruption", Low),
            ("fire", Medium),
            ("infrastructure_failure", Medium),
        ]),
    }
}

fn trinidad_and_tobago() -> LocationHazardSet {
    LocationHazardSet {
        country_code: "TT".to_string(),
        country_name: "Trinidad and Tobago".to_string(),
        base: hazards(&[
            ("flood", High),
            ("earthquake", High),
            ("hurricane", Medium),
            ("landslide", Medium),
            ("drought", Low),
        ]),
        sub_regions: regions(&[
            ("Port of Spain", &[("urban_flooding", High), ("crime", High)]),
            ("San Fernando", &[("flood", Medium), ("fire", Medium)]),
            ("Chaguanas", &[("flood", High)]),
            ("Arima", &[("flood", Medium), ("traffic_disruption", Medium)]),
            ("Tobago", &[("hurricane", High), ("water_shortage", Medium)]),
        ]),
        coastal: hazards(&[
            ("storm_surge", Medium),
            ("coastal_flood", High),
            ("coastal_erosion", Medium),
            ("tsunami", Low),
        ]),
        urban: hazards(&[
            ("power_outage", Medium),
            ("crime", High),
            ("traffic_disruption", Medium),
            ("fire", Medium),
        ]),
    }
}

fn barbados() -> LocationHazardSet {
    LocationHazardSet {
        country_code: "BB".to_string(),
        country_name: "Barbados".to_string(),
        base: hazards(&[
            ("hurricane", High),
            ("drought", Medium),
            ("water_shortage", High),
            ("flood", Medium),
        ]),
        sub_regions: regions(&[
            ("St. Michael", &[("urban_flooding", Medium), ("traffic_disruption", Medium)]),
            ("Christ Church", &[("coastal_erosion", Medium)]),
            ("St. Joseph", &[("landslide", Medium)]),
        ]),
        coastal: hazards(&[
            ("storm_surge", High),
            ("coastal_erosion", High),
            ("coastal_flood", Medium),
            ("tsunami", Low),
        ]),
        urban: hazards(&[
            ("power_outage", Low),
            ("crime", Medium),
            ("traffic_disruption", Medium),
        ]),
    }
}

fn bahamas() -> LocationHazardSet {
    LocationHazardSet {
        country_code: "BS".to_string(),
        country_name: "The Bahamas".to_string(),
        base: hazards(&[
            ("hurricane", VeryHigh),
            ("storm_surge", High),
            ("flood", High),
            ("drought", Low),
        ]),
        sub_regions: regions(&[
            ("New Providence", &[("urban_flooding", High), ("crime", High)]),
            ("Grand Bahama", &[("coastal_flood", VeryHigh)]),
            ("Abaco", &[("supply_chain_disruption", High)]),
            ("Exuma", &[("water_shortage", Medium), ("supply_chain_disruption", Medium)]),
        ]),
        coastal: hazards(&[
            ("storm_surge", VeryHigh),
            ("coastal_flood", High),
            ("coastal_erosion", High),
            ("tsunami", Low),
        ]),
        urban: hazards(&[
            ("power_outage", Medium),
            ("crime", Medium),
            ("traffic_disruption", Low),
        ]),
    }
}

fn dominican_republic() -> LocationHazardSet {
    LocationHazardSet {
        country_code: "DO".to_string(),
        country_name: "Dominican Republic".to_string(),
        base: hazards(&[
            ("hurricane", High),
            ("earthquake", High),
            ("flood", High),
            ("landslide", Medium),
            ("drought", Medium),
        ]),
        sub_regions: regions(&[
            (
                "Santo Domingo",
                &[("urban_flooding", High), ("power_outage", High), ("crime", Medium)],
            ),
            ("Santiago", &[("earthquake", High)]),
            ("Puerto Plata", &[("tsunami", Medium)]),
            ("La Altagracia", &[("coastal_erosion", High)]),
        ]),
        coastal: hazards(&[
            ("storm_surge", High),
            ("coastal_flood", High),
            ("tsunami", Medium),
        ]),
        urban: hazards(&[
            ("power_outage", High),
            ("infrastructure_failure", Medium),
            ("traffic_disruption", Medium),
            ("crime", Medium),
        ]),
    }
}

/// Every built-in country hazard set
pub fn caribbean_locations() -> Vec<LocationHazardSet> {
    vec![
        jamaica(),
        trinidad_and_tobago(),
        barbados(),
        bahamas(),
        dominican_republic(),
    ]
}
