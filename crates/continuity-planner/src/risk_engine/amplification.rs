//! Location-specific risk amplification rules
//!
//! Rules are evaluated in order and their bumps add up. Bumps only ever
//! move a hazard up its scale, so enabling a modifier never lowers a score.

use crate::catalog::LocationProfile;
use serde::Serialize;

/// Condition under which a rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AmplificationTrigger {
    /// Location is near the coast
    NearCoast,
    /// Location is in an urban area
    UrbanArea,
    /// Location is in the named country
    Country(&'static str),
}

impl AmplificationTrigger {
    fn applies_to(&self, location: &LocationProfile) -> bool {
        match self {
            AmplificationTrigger::NearCoast => location.near_coast,
            AmplificationTrigger::UrbanArea => location.urban_area,
            AmplificationTrigger::Country(code) => {
                location.country_code.trim().eq_ignore_ascii_case(code)
            }
        }
    }
}

/// One amplification rule
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AmplificationRule {
    /// When the rule applies
    pub trigger: AmplificationTrigger,
    /// Hazards it bumps
    pub hazard_ids: &'static [&'static str],
    /// Steps up the frequency/likelihood scale
    pub frequency_steps: u8,
    /// Steps up the impact/severity scale
    pub impact_steps: u8,
}

/// Built-in rules
pub const AMPLIFICATION_RULES: &[AmplificationRule] = &[
    AmplificationRule {
        trigger: AmplificationTrigger::NearCoast,
        hazard_ids: &["hurricane", "storm_surge", "coastal_flood", "tsunami"],
        frequency_steps: 1,
        impact_steps: 1,
    },
    AmplificationRule {
        trigger: AmplificationTrigger::UrbanArea,
        hazard_ids: &["power_outage", "infrastructure_failure", "cyber_attack", "crime"],
        frequency_steps: 1,
        impact_steps: 0,
    },
    AmplificationRule {
        trigger: AmplificationTrigger::UrbanArea,
        hazard_ids: &["fire", "traffic_disruption"],
        frequency_steps: 0,
        impact_steps: 1,
    },
    // Dominican Republic straddles active faults and the main hurricane track
    AmplificationRule {
        trigger: AmplificationTrigger::Country("DO"),
        hazard_ids: &["hurricane", "earthquake"],
        frequency_steps: 1,
        impact_steps: 0,
    },
];

/// Accumulated bump for one hazard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amplification {
    /// Total frequency steps
    pub frequency_steps: u8,
    /// Total impact steps
    pub impact_steps: u8,
}

impl Amplification {
    /// Whether any bump applies
    pub fn is_empty(&self) -> bool {
        self.frequency_steps == 0 && self.impact_steps == 0
    }
}

/// Sum the bumps `rules` give `hazard_id` at `location`
pub fn amplification_for(
    rules: &[AmplificationRule],
    hazard_id: &str,
    location: &LocationProfile,
) -> Amplification {
    rules
        .iter()
        .filter(|rule| rule.trigger.applies_to(location) && rule.hazard_ids.contains(&hazard_id))
        .fold(Amplification::default(), |acc, rule| Amplification {
            frequency_steps: acc.frequency_steps.saturating_add(rule.frequency_steps),
            impact_steps: acc.impact_steps.saturating_add(rule.impact_steps),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_serialize_for_listing() {
        let listed = serde_json::to_value(AMPLIFICATION_RULES).unwrap();
        assert_eq!(listed[0]["trigger"], "near_coast");
        assert_eq!(listed[0]["hazardIds"][0], "hurricane");
        assert_eq!(listed[3]["trigger"]["country"], "DO");
        assert_eq!(listed[3]["frequencySteps"], 1);
        assert_eq!(listed[3]["impactSteps"], 0);
    }

    #[test]
    fn test_no_modifiers_no_bump() {
        let location = LocationProfile::new("JM");
        assert!(amplification_for(AMPLIFICATION_RULES, "hurricane", &location).is_empty());
        assert!(amplification_for(AMPLIFICATION_RULES, "power_outage", &location).is_empty());
    }

    #[test]
    fn test_coastal_bumps_frequency_and_impact() {
        let location = LocationProfile::new("JM").near_coast(true);
        for id in ["hurricane", "storm_surge", "coastal_flood", "tsunami"] {
            let bump = amplification_for(AMPLIFICATION_RULES, id, &location);
            assert_eq!(bump.frequency_steps, 1, "{id}");
            assert_eq!(bump.impact_steps, 1, "{id}");
        }
        assert!(amplification_for(AMPLIFICATION_RULES, "crime", &location).is_empty());
    }

    #[test]
    fn test_urban_bumps() {
        let location = LocationProfile::new("BB").urban(true);
        let outage = amplification_for(AMPLIFICATION_RULES, "power_outage", &location);
        assert_eq!(outage, Amplification { frequency_steps: 1, impact_steps: 0 });
        let fire = amplification_for(AMPLIFICATION_RULES, "fire", &location);
        assert_eq!(fire, Amplification { frequency_steps: 0, impact_steps: 1 });
    }

    #[test]
    fn test_country_exception_stacks_with_coastal() {
        let location = LocationProfile::new("do").near_coast(true);
        let bump = amplification_for(AMPLIFICATION_RULES, "hurricane", &location);
        assert_eq!(bump, Amplification { frequency_steps: 2, impact_steps: 1 });
        let quake = amplification_for(AMPLIFICATION_RULES, "earthquake", &location);
        assert_eq!(quake, Amplification { frequency_steps: 1, impact_steps: 0 });
    }
}
