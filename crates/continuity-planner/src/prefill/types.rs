//! Pre-fill request, bundle and form-state types

use crate::catalog::{IndustryProfile, Locale, LocationProfile};
use crate::risk_engine::RiskAssessment;
use crate::strategy_matcher::{ActionPlan, StrategyRecommendation};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Caller-held answers: step id → field name → value
pub type FormState = BTreeMap<String, BTreeMap<String, Value>>;

/// Wizard steps that receive pre-filled values
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StepId {
    /// Purpose, products, people and customers
    BusinessOverview,
    /// Core, support and administrative functions
    EssentialFunctions,
    /// Ranked risk matrix
    RiskAssessment,
    /// Prevention, response and recovery strategies
    Strategies,
    /// Action plans and the implementation narrative
    ActionPlan,
}

impl StepId {
    /// Key used in form state
    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::BusinessOverview => "BUSINESS_OVERVIEW",
            StepId::EssentialFunctions => "ESSENTIAL_FUNCTIONS",
            StepId::RiskAssessment => "RISK_ASSESSMENT",
            StepId::Strategies => "STRATEGIES",
            StepId::ActionPlan => "ACTION_PLAN",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field names used by the wizard
pub mod fields {
    /// Overview: what the business does
    pub const BUSINESS_PURPOSE: &str = "Business Purpose";
    /// Overview: products and services
    pub const PRODUCTS_SERVICES: &str = "Products and Services";
    /// Overview: key staff
    pub const KEY_PERSONNEL: &str = "Key Personnel";
    /// Overview: opening hours
    pub const OPERATING_HOURS: &str = "Operating Hours";
    /// Overview: minimum resources to operate
    pub const RESOURCE_REQUIREMENTS: &str = "Minimum Resource Requirements";
    /// Overview: customers
    pub const CUSTOMER_BASE: &str = "Customer Base";

    /// Functions the business cannot stop
    pub const CORE_FUNCTIONS: &str = "Core Business Functions";
    /// Functions that keep the core running
    pub const SUPPORT_FUNCTIONS: &str = "Support Functions";
    /// Back-office functions
    pub const ADMINISTRATIVE_FUNCTIONS: &str = "Administrative Functions";

    /// Ranked risk list
    pub const RISK_MATRIX: &str = "Risk Assessment Matrix";

    /// Strategy ids before an event
    pub const PREVENTION_STRATEGIES: &str = "Prevention Strategies";
    /// Strategy ids during an event
    pub const RESPONSE_STRATEGIES: &str = "Response Strategies";
    /// Strategy ids after an event
    pub const RECOVERY_STRATEGIES: &str = "Recovery Strategies";
    /// Strategy summary text
    pub const STRATEGY_NARRATIVE: &str = "Business Continuity Strategies";

    /// Plans for high and extreme hazards
    pub const ACTION_PLANS: &str = "Action Plan by Risk Level";
    /// Phased rollout
    pub const IMPLEMENTATION_PRIORITIES: &str = "Implementation Priorities";
    /// Cost table
    pub const BUDGET_ESTIMATE: &str = "Budget Estimate";
    /// Who runs the plan
    pub const IMPLEMENTATION_TEAM: &str = "Implementation Team";
    /// Resources the plans call for
    pub const PLAN_RESOURCES: &str = "Resource Requirements";
    /// Task owners by role
    pub const RESPONSIBILITIES: &str = "Responsibility Assignments";
    /// Review cadence and next review date
    pub const REVIEW_SCHEDULE: &str = "Review and Update Schedule";
    /// Drills and tests
    pub const TESTING_SCHEDULE: &str = "Testing and Drill Schedule";
}

/// Default value for one wizard field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Free text
    Text(String),
    /// List of entries
    List(Vec<String>),
    /// Risk matrix
    Risks(Vec<RiskAssessment>),
    /// Action plans
    Plans(Vec<ActionPlan>),
}

impl FieldValue {
    /// Blank text or an empty list
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Risks(risks) => risks.is_empty(),
            FieldValue::Plans(plans) => plans.is_empty(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Pre-fill request from the wizard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreFillRequest {
    /// Industry profile id, e.g. `grocery_store`
    pub business_type_id: String,
    /// Country code, any case
    pub country_code: String,
    /// Parish, state or province
    #[serde(default)]
    pub parish: Option<String>,
    /// Business is near the coast
    #[serde(default)]
    pub near_coast: bool,
    /// Business is in an urban area
    #[serde(default)]
    pub urban_area: bool,
    /// Falls back to the configured default locale
    #[serde(default)]
    pub locale: Option<Locale>,
    /// Answers the user already has
    #[serde(default)]
    pub existing_field_values: FormState,
    /// Date the review schedule counts from; today when absent
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

impl PreFillRequest {
    /// Request for an industry in a country
    pub fn new(business_type_id: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            business_type_id: business_type_id.into(),
            country_code: country_code.into(),
            ..Self::default()
        }
    }

    /// Set the parish
    pub fn with_parish(mut self, parish: impl Into<String>) -> Self {
        self.parish = Some(parish.into());
        self
    }

    /// Mark the business as coastal
    pub fn near_coast(mut self, near_coast: bool) -> Self {
        self.near_coast = near_coast;
        self
    }

    /// Mark the business as urban
    pub fn urban(mut self, urban_area: bool) -> Self {
        self.urban_area = urban_area;
        self
    }

    /// Set the display language
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Answers to merge into
    pub fn with_existing(mut self, existing: FormState) -> Self {
        self.existing_field_values = existing;
        self
    }

    /// Fix the date the review schedule counts from
    pub fn as_of(mut self, date: NaiveDate) -> Self {
        self.as_of = Some(date);
        self
    }

    /// Location attributes of this request
    pub fn location(&self) -> LocationProfile {
        LocationProfile {
            country_code: self.country_code.trim().to_uppercase(),
            sub_region: self
                .parish
                .as_deref()
                .map(str::trim)
                .filter(|parish| !parish.is_empty())
                .map(str::to_string),
            near_coast: self.near_coast,
            urban_area: self.urban_area,
        }
    }
}

/// Everything the wizard needs to seed its steps
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreFillBundle {
    /// Bundle id
    pub id: Uuid,
    /// Resolved industry profile
    pub industry: IndustryProfile,
    /// Normalized location
    pub location: LocationProfile,
    /// Language the text is in
    pub locale: Locale,
    /// Ranked risk list
    pub hazards: Vec<RiskAssessment>,
    /// Step id → field name → default value
    pub pre_filled_fields: BTreeMap<String, BTreeMap<String, FieldValue>>,
    /// Step id → field name → example hints
    pub contextual_examples: BTreeMap<String, BTreeMap<String, Vec<String>>>,
    /// Recommended strategy ids
    pub recommended_strategies: StrategyRecommendation,
}

impl PreFillBundle {
    /// Default value for a step field
    pub fn field(&self, step: StepId, field: &str) -> Option<&FieldValue> {
        self.pre_filled_fields
            .get(step.as_str())
            .and_then(|values| values.get(field))
    }

    /// Example hints for a step field
    pub fn examples(&self, step: StepId, field: &str) -> &[String] {
        self.contextual_examples
            .get(step.as_str())
            .and_then(|values| values.get(field))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_id_serializes_as_key() {
        assert_eq!(
            serde_json::to_value(StepId::BusinessOverview).unwrap(),
            Value::String(StepId::BusinessOverview.as_str().to_string())
        );
        assert_eq!(StepId::ActionPlan.to_string(), "ACTION_PLAN");
    }

    #[test]
    fn test_field_value_is_empty() {
        assert!(FieldValue::Text("  ".to_string()).is_empty());
        assert!(FieldValue::List(Vec::new()).is_empty());
        assert!(!FieldValue::Text("shop".to_string()).is_empty());
    }

    #[test]
    fn test_field_value_untagged_serialization() {
        let text = serde_json::to_value(FieldValue::Text("shop".to_string())).unwrap();
        assert_eq!(text, Value::String("shop".to_string()));

        let list = serde_json::to_value(FieldValue::List(vec!["a".to_string()])).unwrap();
        assert_eq!(list, serde_json::json!(["a"]));
    }

    #[test]
    fn test_request_location_normalizes() {
        let request = PreFillRequest::new("grocery_store", " jm ")
            .with_parish("  ")
            .urban(true);
        let location = request.location();
        assert_eq!(location.country_code, "JM");
        assert!(location.sub_region.is_none());
        assert!(location.urban_area);
    }

    #[test]
    fn test_request_deserializes_from_wizard_json() {
        let request: PreFillRequest = serde_json::from_value(serde_json::json!({
            "businessTypeId": "restaurant",
            "countryCode": "BB",
            "parish": "St. Michael",
            "nearCoast": true,
            "locale": "es",
            "asOf": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(request.business_type_id, "restaurant");
        assert_eq!(request.locale, Some(Locale::Es));
        assert_eq!(request.as_of, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert!(request.existing_field_values.is_empty());
    }
}
