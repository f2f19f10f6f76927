//! Ordered matching rules
//!
//! Hazard names are matched to templates by exact name, then containment in
//! either direction, then synonyms. Business descriptions are classified by
//! keyword families in a fixed order; the first family that matches wins.

use super::templates::ActionPlanTemplate;
use super::types::{BusinessOverview, BusinessType};

/// How a hazard name was matched to a template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchRule {
    /// Normalized names are equal
    Exact,
    /// One name contains the other
    Containment,
    /// Name is a listed alternative
    Synonym,
}

/// Template chosen for a hazard name
#[derive(Debug, Clone, Copy)]
pub struct TemplateMatch<'a> {
    /// Matched template
    pub template: &'a ActionPlanTemplate,
    /// Rule that produced the match
    pub rule: MatchRule,
}

/// Alternative names per template key
pub const HAZARD_SYNONYMS: &[(&str, &[&str])] = &[
    ("hurricane", &["tropical storm", "cyclone", "storm surge", "windstorm"]),
    ("power_outage", &["blackout", "electrical failure", "power failure", "load shedding"]),
    ("cyber_attack", &["data breach", "hacking", "ransomware", "malware"]),
    ("flood", &["flash flood", "coastal flood", "inundation"]),
    ("fire", &["blaze", "arson"]),
    ("earthquake", &["seismic", "tremor"]),
    ("pandemic", &["epidemic", "disease outbreak"]),
    ("supply_chain_disruption", &["shortage of supplies", "supplier failure", "shipping delay"]),
];

/// Lowercase, with every run of non-alphanumerics collapsed to one space
pub fn normalize_hazard_name(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn contains_either_way(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Find the template for a hazard display name
pub fn match_template<'a>(
    hazard_name: &str,
    templates: &'a [ActionPlanTemplate],
) -> Option<TemplateMatch<'a>> {
    let name = normalize_hazard_name(hazard_name);
    if name.is_empty() {
        return None;
    }

    let keyed: Vec<(String, &ActionPlanTemplate)> = templates
        .iter()
        .map(|template| (template.normalized_key(), template))
        .collect();

    if let Some((_, template)) = keyed.iter().find(|(key, _)| *key == name) {
        return Some(TemplateMatch {
            template,
            rule: MatchRule::Exact,
        });
    }

    if let Some((_, template)) = keyed
        .iter()
        .find(|(key, _)| contains_either_way(&name, key))
    {
        return Some(TemplateMatch {
            template,
            rule: MatchRule::Containment,
        });
    }

    for (key, synonyms) in HAZARD_SYNONYMS {
        if synonyms.iter().any(|synonym| contains_either_way(&name, synonym)) {
            if let Some(template) = templates.iter().find(|template| template.key == *key) {
                return Some(TemplateMatch {
                    template,
                    rule: MatchRule::Synonym,
                });
            }
        }
    }

    None
}

/// Keyword families in priority order
pub const BUSINESS_TYPE_RULES: &[(BusinessType, &[&str])] = &[
    (
        BusinessType::Tourism,
        &["hotel", "resort", "tour", "accommodation", "guest house", "villa"],
    ),
    (
        BusinessType::Retail,
        &["shop", "store", "sales", "merchandise", "boutique", "retail"],
    ),
    (
        BusinessType::FoodService,
        &["restaurant", "food", "catering", "kitchen", "dining", "cafe"],
    ),
    (
        BusinessType::Manufacturing,
        &["factory", "assembly", "industrial", "processing", "manufactur"],
    ),
    (
        BusinessType::Technology,
        &["software", "digital", "computer", "technology", "it services"],
    ),
];

/// Classify a business from its purpose and products/services text
pub fn infer_business_type(overview: &BusinessOverview) -> BusinessType {
    let text = format!(
        "{} {}",
        overview.business_purpose, overview.products_services
    )
    .to_lowercase();

    BUSINESS_TYPE_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(business_type, _)| *business_type)
        .unwrap_or(BusinessType::General)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy_matcher::templates::ACTION_PLAN_TEMPLATES;

    fn key_for(name: &str) -> Option<(&'static str, MatchRule)> {
        match_template(name, ACTION_PLAN_TEMPLATES).map(|m| (m.template.key, m.rule))
    }

    fn overview(purpose: &str, products: &str) -> BusinessOverview {
        BusinessOverview {
            business_purpose: purpose.to_string(),
            products_services: products.to_string(),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize_hazard_name("  Power-Outage!! "), "power outage");
        assert_eq!(normalize_hazard_name("Cyber_Attack (ransomware)"), "cyber attack ransomware");
        assert_eq!(normalize_hazard_name("***"), "");
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(key_for("Hurricane"), Some(("hurricane", MatchRule::Exact)));
        assert_eq!(key_for("Power Outage"), Some(("power_outage", MatchRule::Exact)));
    }

    #[test]
    fn test_containment_match() {
        assert_eq!(key_for("Urban Flooding"), Some(("flood", MatchRule::Containment)));
        assert_eq!(key_for("Coastal Flooding"), Some(("flood", MatchRule::Containment)));
        assert_eq!(key_for("Kitchen Fire"), Some(("fire", MatchRule::Containment)));
    }

    #[test]
    fn test_synonym_match() {
        assert_eq!(key_for("Tropical Storm"), Some(("hurricane", MatchRule::Synonym)));
        assert_eq!(key_for("Storm Surge"), Some(("hurricane", MatchRule::Synonym)));
        assert_eq!(key_for("Blackout"), Some(("power_outage", MatchRule::Synonym)));
        assert_eq!(key_for("Electrical Failure"), Some(("power_outage", MatchRule::Synonym)));
        assert_eq!(key_for("Data Breach"), Some(("cyber_attack", MatchRule::Synonym)));
        assert_eq!(key_for("Seismic Activity"), Some(("earthquake", MatchRule::Synonym)));
        assert_eq!(key_for("Blaze"), Some(("fire", MatchRule::Synonym)));
    }

    #[test]
    fn test_no_match() {
        assert!(key_for("Crime").is_none());
        assert!(key_for("Tsunami").is_none());
        assert!(key_for("").is_none());
    }

    #[test]
    fn test_business_type_rules() {
        assert_eq!(
            infer_business_type(&overview("Beachfront resort", "Rooms")),
            BusinessType::Tourism
        );
        assert_eq!(
            infer_business_type(&overview("Corner shop", "Groceries")),
            BusinessType::Retail
        );
        assert_eq!(
            infer_business_type(&overview("Family restaurant", "Local cuisine")),
            BusinessType::FoodService
        );
        assert_eq!(
            infer_business_type(&overview("Fruit processing plant", "Sauces")),
            BusinessType::Manufacturing
        );
        assert_eq!(
            infer_business_type(&overview("Software consultancy", "Websites")),
            BusinessType::Technology
        );
        assert_eq!(
            infer_business_type(&overview("Accounting practice", "Bookkeeping")),
            BusinessType::General
        );
    }

    #[test]
    fn test_business_type_order_matters() {
        // Both tourism and food keywords: tourism is checked first
        let mixed = overview("Hotel with restaurant", "Dining and rooms");
        assert_eq!(infer_business_type(&mixed), BusinessType::Tourism);

        // Both retail and food keywords: retail is checked first
        let deli = overview("Food store", "Groceries");
        assert_eq!(infer_business_type(&deli), BusinessType::Retail);
    }
}
