//! Strategy recommendation
//!
//! Base strategies are always present. Hazard keyword families and the
//! business category each append a fixed set of ids. Repeats across
//! contributions are kept unless the caller asks for deduplication.

use super::types::StrategyRecommendation;
use crate::catalog::IndustryCategory;

/// Strategy ids contributed by one source
#[derive(Debug, Clone, Copy)]
pub struct StrategyContribution {
    /// Before an event
    pub prevention: &'static [&'static str],
    /// During an event
    pub response: &'static [&'static str],
    /// After an event
    pub recovery: &'static [&'static str],
}

/// Always included
pub const BASE_STRATEGIES: StrategyContribution = StrategyContribution {
    prevention: &["insurance_coverage", "employee_training", "emergency_supplies"],
    response: &["emergency_response_team", "safety_procedures", "communication_plan"],
    recovery: &["damage_assessment", "business_resumption", "lessons_learned"],
};

/// Hazard keyword families, matched against lowercase hazard names
pub const HAZARD_FAMILY_STRATEGIES: &[(&str, &[&str], StrategyContribution)] = &[
    (
        "power",
        &["power", "electric", "outage", "blackout"],
        StrategyContribution {
            prevention: &["backup_power"],
            response: &["power_outage_procedures"],
            recovery: &["equipment_restart_checklist"],
        },
    ),
    (
        "storm_flood",
        &["hurricane", "storm", "flood", "surge", "cyclone"],
        StrategyContribution {
            prevention: &["building_reinforcement", "flood_barriers"],
            response: &["evacuation_plan"],
            recovery: &["alternative_location"],
        },
    ),
    (
        "cyber",
        &["cyber", "data", "hack", "ransomware"],
        StrategyContribution {
            prevention: &["data_backup", "cybersecurity_measures"],
            response: &["incident_response_plan"],
            recovery: &["data_recovery"],
        },
    ),
];

/// Business category contributions
pub const CATEGORY_STRATEGIES: &[(IndustryCategory, StrategyContribution)] = &[
    (
        IndustryCategory::Retail,
        StrategyContribution {
            prevention: &["inventory_protection"],
            response: &["customer_communication"],
            recovery: &["supplier_diversification"],
        },
    ),
    (
        IndustryCategory::Hospitality,
        StrategyContribution {
            prevention: &["guest_safety_training"],
            response: &["guest_evacuation", "communication_plan"],
            recovery: &["reputation_management"],
        },
    ),
    (
        IndustryCategory::Services,
        StrategyContribution {
            prevention: &["data_backup", "remote_work_capability"],
            response: &["client_communication"],
            recovery: &["remote_operations"],
        },
    ),
];

/// Recommend strategy ids for the hazard names and business category
pub fn recommend_strategies<'a, I>(
    hazard_names: I,
    category: IndustryCategory,
    dedupe: bool,
) -> StrategyRecommendation
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<String> = hazard_names.into_iter().map(|n| n.to_lowercase()).collect();

    let mut recommendation = StrategyRecommendation::default();
    let mut add = |contribution: &StrategyContribution| {
        recommendation.extend(
            contribution.prevention,
            contribution.response,
            contribution.recovery,
        );
    };

    add(&BASE_STRATEGIES);

    for (_, keywords, contribution) in HAZARD_FAMILY_STRATEGIES {
        let detected = names
            .iter()
            .any(|name| keywords.iter().any(|keyword| name.contains(keyword)));
        if detected {
            add(contribution);
        }
    }

    for (family, contribution) in CATEGORY_STRATEGIES {
        if *family == category {
            add(contribution);
        }
    }

    if dedupe {
        recommendation.deduped()
    } else {
        recommendation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_strategies_always_present() {
        let recommendation = recommend_strategies(Vec::<&str>::new(), IndustryCategory::Other, false);
        assert_eq!(recommendation.prevention, BASE_STRATEGIES.prevention);
        assert_eq!(recommendation.response, BASE_STRATEGIES.response);
        assert_eq!(recommendation.recovery, BASE_STRATEGIES.recovery);
    }

    #[test]
    fn test_hazard_families() {
        let recommendation = recommend_strategies(
            ["Power Outage", "Urban Flooding"],
            IndustryCategory::Other,
            false,
        );
        assert!(recommendation.prevention.contains(&"backup_power".to_string()));
        assert!(recommendation.prevention.contains(&"flood_barriers".to_string()));
        assert!(!recommendation.prevention.contains(&"cybersecurity_measures".to_string()));
    }

    #[test]
    fn test_family_contributes_once() {
        let recommendation =
            recommend_strategies(["Hurricane", "Storm Surge"], IndustryCategory::Other, false);
        let count = recommendation
            .response
            .iter()
            .filter(|id| *id == "evacuation_plan")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_duplicates_kept_by_default() {
        let recommendation =
            recommend_strategies(["Cyber Attack"], IndustryCategory::Services, false);
        let count = recommendation
            .prevention
            .iter()
            .filter(|id| *id == "data_backup")
            .count();
        assert_eq!(count, 2);

        let hospitality = recommend_strategies(["Fire"], IndustryCategory::Hospitality, false);
        let repeats = hospitality
            .response
            .iter()
            .filter(|id| *id == "communication_plan")
            .count();
        assert_eq!(repeats, 2);
    }

    #[test]
    fn test_dedupe_option() {
        let recommendation =
            recommend_strategies(["Cyber Attack"], IndustryCategory::Services, true);
        let count = recommendation
            .prevention
            .iter()
            .filter(|id| *id == "data_backup")
            .count();
        assert_eq!(count, 1);
    }
}
