//! Pre-fill assembler
//!
//! Resolves the industry, scores the location, matches action plans and
//! lays the results out per wizard step. Stateless between requests.

use super::examples::{localized_examples, substituted, PlaceholderValues};
use super::localization::{keys, Localizer, StaticLocalizer};
use super::merge::merge_pre_fill_data;
use super::narratives;
use super::types::{fields, FieldValue, FormState, PreFillBundle, PreFillRequest, StepId};
use crate::catalog::{ExampleTexts, HazardRepository, IndustryProfile, IndustryRepository, Locale};
use crate::config::PlannerConfig;
use crate::error::ContinuityResult;
use crate::risk_engine::{PriorAssessment, RiskAssessment, RiskScoringEngine};
use crate::strategy_matcher::{
    infer_business_type, recommend_strategies, ActionPlan, ActionPlanMatcher, BusinessOverview,
    StrategyRecommendation,
};
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

const PRIOR_HAZARD_KEYS: &[&str] = &["hazardId", "hazard_id", "hazard", "hazardName", "name"];

type StepFields = BTreeMap<String, FieldValue>;

/// Builds pre-fill bundles
pub struct PreFillAssembler {
    hazards: Arc<dyn HazardRepository>,
    industries: Arc<dyn IndustryRepository>,
    engine: RiskScoringEngine,
    matcher: ActionPlanMatcher,
    localizer: Arc<dyn Localizer>,
    config: Arc<PlannerConfig>,
}

impl PreFillAssembler {
    /// Create assembler over the given catalogs with the built-in strings
    pub fn new(
        hazards: Arc<dyn HazardRepository>,
        industries: Arc<dyn IndustryRepository>,
        config: Arc<PlannerConfig>,
    ) -> Self {
        let engine = RiskScoringEngine::new(hazards.clone(), industries.clone(), config.clone());
        Self {
            hazards,
            industries,
            engine,
            matcher: ActionPlanMatcher::default(),
            localizer: Arc::new(StaticLocalizer),
            config,
        }
    }

    /// Replace the localization source
    pub fn with_localizer(mut self, localizer: Arc<dyn Localizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Build the bundle for a request; `None` when the industry is unknown
    pub async fn generate(&self, request: &PreFillRequest) -> ContinuityResult<Option<PreFillBundle>> {
        let Some(profile) = self
            .industries
            .get_industry_profile(&request.business_type_id)
            .await?
        else {
            debug!("Unknown industry {}, no pre-fill", request.business_type_id);
            return Ok(None);
        };

        let location = request.location();
        let locale = request.locale.unwrap_or(self.config.default_locale);
        let country_name = self
            .hazards
            .get_location_hazard_set(&location.country_code)
            .await?
            .map(|set| set.country_name);

        let priors = priors_from_form(&request.existing_field_values);
        let hazards = self
            .engine
            .assess_with_profile(Some(&profile), &location, &priors)
            .await?;

        let localizer = self.localizer.as_ref();
        let values =
            PlaceholderValues::resolve(&location, country_name.as_deref(), localizer, locale);
        let examples = localized_examples(&profile, locale, &values);

        // Base-language text so keyword inference does not depend on locale
        let base = substituted(&profile.examples, &values);
        let overview = BusinessOverview {
            business_purpose: first(&base.business_purpose),
            products_services: first(&base.products_services),
        };
        let business_type = infer_business_type(&overview);
        let plans = self.matcher.plans_for_assessments(&hazards, business_type);

        let strategies = recommend_strategies(
            hazards.iter().map(|h| h.hazard.as_str()),
            profile.category,
            self.config.dedupe_strategies,
        );
        let as_of = request.as_of.unwrap_or_else(|| Utc::now().date_naive());

        let mut pre_filled_fields = BTreeMap::new();
        pre_filled_fields.insert(
            StepId::BusinessOverview.as_str().to_string(),
            overview_fields(&examples, &profile),
        );
        pre_filled_fields.insert(
            StepId::EssentialFunctions.as_str().to_string(),
            function_fields(&profile, localizer, locale),
        );
        pre_filled_fields.insert(
            StepId::RiskAssessment.as_str().to_string(),
            BTreeMap::from([(
                fields::RISK_MATRIX.to_string(),
                FieldValue::Risks(hazards.clone()),
            )]),
        );
        pre_filled_fields.insert(
            StepId::Strategies.as_str().to_string(),
            strategy_fields(&strategies, &plans, localizer, locale),
        );
        pre_filled_fields.insert(
            StepId::ActionPlan.as_str().to_string(),
            self.action_plan_fields(plans.clone(), as_of, localizer, locale),
        );

        let bundle = PreFillBundle {
            id: Uuid::new_v4(),
            contextual_examples: contextual_examples(&examples, &profile, &hazards),
            industry: profile,
            location,
            locale,
            hazards,
            pre_filled_fields,
            recommended_strategies: strategies,
        };

        info!(
            "Generated pre-fill bundle {} for {} in {} ({} hazards, {} action plans, {})",
            bundle.id,
            bundle.industry.id,
            bundle.location.country_code,
            bundle.hazards.len(),
            plans.len(),
            business_type
        );

        Ok(Some(bundle))
    }

    /// Generate and merge into the request's existing answers.
    ///
    /// Unknown industries leave the answers unchanged.
    pub async fn generate_and_merge(&self, request: &PreFillRequest) -> ContinuityResult<FormState> {
        match self.generate(request).await? {
            Some(bundle) => merge_pre_fill_data(&request.existing_field_values, &bundle),
            None => Ok(request.existing_field_values.clone()),
        }
    }

    fn action_plan_fields(
        &self,
        plans: Vec<ActionPlan>,
        as_of: NaiveDate,
        localizer: &dyn Localizer,
        locale: Locale,
    ) -> StepFields {
        let interval = self.config.review_interval_months;
        let mut step = StepFields::new();
        let mut text = |field: &str, value: String| {
            step.insert(field.to_string(), FieldValue::Text(value));
        };

        text(
            fields::IMPLEMENTATION_PRIORITIES,
            narratives::implementation_priorities(&plans, localizer, locale),
        );
        text(fields::BUDGET_ESTIMATE, narratives::budget_estimate(localizer, locale));
        text(
            fields::IMPLEMENTATION_TEAM,
            narratives::implementation_team(&plans, localizer, locale),
        );
        text(fields::PLAN_RESOURCES, narratives::resource_list(&plans, localizer, locale));
        text(
            fields::RESPONSIBILITIES,
            narratives::responsibility_assignments(&plans, localizer, locale),
        );
        text(
            fields::REVIEW_SCHEDULE,
            narratives::review_schedule(as_of, interval, localizer, locale),
        );
        text(
            fields::TESTING_SCHEDULE,
            narratives::testing_schedule(&plans, localizer, locale),
        );

        step.insert(fields::ACTION_PLANS.to_string(), FieldValue::Plans(plans));
        step
    }
}

fn first(items: &[String]) -> String {
    items.first().cloned().unwrap_or_default()
}

fn overview_fields(examples: &ExampleTexts, profile: &IndustryProfile) -> StepFields {
    BTreeMap::from([
        (
            fields::BUSINESS_PURPOSE.to_string(),
            FieldValue::Text(first(&examples.business_purpose)),
        ),
        (
            fields::PRODUCTS_SERVICES.to_string(),
            FieldValue::Text(first(&examples.products_services)),
        ),
        (
            fields::KEY_PERSONNEL.to_string(),
            FieldValue::Text(first(&examples.personnel)),
        ),
        (
            fields::OPERATING_HOURS.to_string(),
            FieldValue::Text(profile.operating_hours.clone()),
        ),
        (
            fields::RESOURCE_REQUIREMENTS.to_string(),
            FieldValue::Text(first(&examples.resource_needs)),
        ),
        (
            fields::CUSTOMER_BASE.to_string(),
            FieldValue::Text(first(&examples.customer_base)),
        ),
    ])
}

fn function_fields(profile: &IndustryProfile, localizer: &dyn Localizer, locale: Locale) -> StepFields {
    let describe = |key: &str, names: &[String]| -> FieldValue {
        FieldValue::List(
            names
                .iter()
                .map(|name| localizer.format(locale, key, &[name.as_str()]))
                .collect(),
        )
    };
    let functions = &profile.essential_functions;

    BTreeMap::from([
        (
            fields::CORE_FUNCTIONS.to_string(),
            describe(keys::FUNCTION_CORE, &functions.core),
        ),
        (
            fields::SUPPORT_FUNCTIONS.to_string(),
            describe(keys::FUNCTION_SUPPORT, &functions.support),
        ),
        (
            fields::ADMINISTRATIVE_FUNCTIONS.to_string(),
            describe(keys::FUNCTION_ADMINISTRATIVE, &functions.administrative),
        ),
    ])
}

fn strategy_fields(
    strategies: &StrategyRecommendation,
    plans: &[ActionPlan],
    localizer: &dyn Localizer,
    locale: Locale,
) -> StepFields {
    BTreeMap::from([
        (
            fields::PREVENTION_STRATEGIES.to_string(),
            FieldValue::List(strategies.prevention.clone()),
        ),
        (
            fields::RESPONSE_STRATEGIES.to_string(),
            FieldValue::List(strategies.response.clone()),
        ),
        (
            fields::RECOVERY_STRATEGIES.to_string(),
            FieldValue::List(strategies.recovery.clone()),
        ),
        (
            fields::STRATEGY_NARRATIVE.to_string(),
            FieldValue::Text(narratives::strategy_narrative(plans, localizer, locale)),
        ),
    ])
}

fn contextual_examples(
    examples: &ExampleTexts,
    profile: &IndustryProfile,
    hazards: &[RiskAssessment],
) -> BTreeMap<String, BTreeMap<String, Vec<String>>> {
    let overview = BTreeMap::from([
        (fields::BUSINESS_PURPOSE.to_string(), examples.business_purpose.clone()),
        (fields::PRODUCTS_SERVICES.to_string(), examples.products_services.clone()),
        (fields::KEY_PERSONNEL.to_string(), examples.personnel.clone()),
        (fields::OPERATING_HOURS.to_string(), vec![profile.operating_hours.clone()]),
        (fields::RESOURCE_REQUIREMENTS.to_string(), examples.resource_needs.clone()),
        (fields::CUSTOMER_BASE.to_string(), examples.customer_base.clone()),
    ]);
    let functions = &profile.essential_functions;
    let essential = BTreeMap::from([
        (fields::CORE_FUNCTIONS.to_string(), functions.core.clone()),
        (fields::SUPPORT_FUNCTIONS.to_string(), functions.support.clone()),
        (
            fields::ADMINISTRATIVE_FUNCTIONS.to_string(),
            functions.administrative.clone(),
        ),
    ]);
    let risks = BTreeMap::from([(
        fields::RISK_MATRIX.to_string(),
        hazards.iter().map(|h| h.hazard.clone()).collect::<Vec<_>>(),
    )]);

    BTreeMap::from([
        (StepId::BusinessOverview.as_str().to_string(), overview),
        (StepId::EssentialFunctions.as_str().to_string(), essential),
        (StepId::RiskAssessment.as_str().to_string(), risks),
    ])
}

/// Likelihood/severity values already present in the caller's risk matrix
fn priors_from_form(existing: &FormState) -> Vec<PriorAssessment> {
    let Some(Value::Array(entries)) = existing
        .get(StepId::RiskAssessment.as_str())
        .and_then(|step| step.get(fields::RISK_MATRIX))
    else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let hazard = PRIOR_HAZARD_KEYS
                .iter()
                .filter_map(|key| entry.get(*key).and_then(Value::as_str))
                .find(|value| !value.trim().is_empty())?;
            let axis = |key: &str| entry.get(key).and_then(Value::as_str).map(str::to_string);
            let likelihood = axis("likelihood").and_then(|v| v.parse().ok());
            let severity = axis("severity").and_then(|v| v.parse().ok());
            if likelihood.is_none() && severity.is_none() {
                return None;
            }
            Some(PriorAssessment {
                hazard: hazard.trim().to_string(),
                likelihood,
                severity,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::risk_engine::{Likelihood, Severity};
    use serde_json::json;

    fn assembler() -> PreFillAssembler {
        let catalog = Arc::new(InMemoryCatalog::caribbean());
        PreFillAssembler::new(catalog.clone(), catalog, Arc::new(PlannerConfig::default()))
    }

    fn kingston_grocery() -> PreFillRequest {
        PreFillRequest::new("grocery_store", "JM")
            .with_parish("Kingston")
            .urban(true)
            .as_of(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[tokio::test]
    async fn test_unknown_industry_gives_no_bundle() {
        let request = PreFillRequest::new("space_agency", "JM");
        assert!(assembler().generate(&request).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_bundle_has_every_step() {
        let bundle = assembler()
            .generate(&kingston_grocery())
            .await
            .unwrap()
            .unwrap();
        for step in [
            StepId::BusinessOverview,
            StepId::EssentialFunctions,
            StepId::RiskAssessment,
            StepId::Strategies,
            StepId::ActionPlan,
        ] {
            assert!(bundle.pre_filled_fields.contains_key(step.as_str()), "{step}");
        }
        assert_eq!(bundle.locale, Locale::En);
        assert_eq!(bundle.industry.id, "grocery_store");
    }

    #[tokio::test]
    async fn test_placeholders_are_filled() {
        let bundle = assembler()
            .generate(&kingston_grocery())
            .await
            .unwrap()
            .unwrap();
        match bundle.field(StepId::BusinessOverview, fields::BUSINESS_PURPOSE) {
            Some(FieldValue::Text(text)) => {
                assert!(text.contains("Kingston"));
                assert!(!text.contains("[NEIGHBORHOOD]"));
            }
            other => panic!("unexpected purpose {other:?}"),
        }
        assert!(bundle
            .examples(StepId::BusinessOverview, fields::CUSTOMER_BASE)
            .iter()
            .any(|text| text.contains("Jamaica")));
    }

    #[tokio::test]
    async fn test_action_plans_cover_priority_hazards() {
        let bundle = assembler()
            .generate(&kingston_grocery())
            .await
            .unwrap()
            .unwrap();
        let priority = bundle
            .hazards
            .iter()
            .filter(|h| h.risk_level.is_priority())
            .count();
        match bundle.field(StepId::ActionPlan, fields::ACTION_PLANS) {
            Some(FieldValue::Plans(plans)) => {
                assert_eq!(plans.len(), priority);
                assert!(plans.iter().all(|p| p.business_type.as_str() == "retail"));
            }
            other => panic!("unexpected plans {other:?}"),
        }
        match bundle.field(StepId::ActionPlan, fields::REVIEW_SCHEDULE) {
            Some(FieldValue::Text(text)) => assert!(text.contains("Next full review: 2025-06-01")),
            other => panic!("unexpected schedule {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_spanish_functions_and_headers() {
        let request = kingston_grocery().with_locale(Locale::Es);
        let bundle = assembler().generate(&request).await.unwrap().unwrap();
        match bundle.field(StepId::EssentialFunctions, fields::CORE_FUNCTIONS) {
            Some(FieldValue::List(items)) => {
                assert!(items[0].ends_with("debe continuar o reanudarse en 24 horas"))
            }
            other => panic!("unexpected functions {other:?}"),
        }
        match bundle.field(StepId::ActionPlan, fields::BUDGET_ESTIMATE) {
            Some(FieldValue::Text(text)) => assert!(text.starts_with("**Presupuesto Estimado**")),
            other => panic!("unexpected budget {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_existing_risk_values_are_recalculated() {
        let existing: FormState = serde_json::from_value(json!({
            "RISK_ASSESSMENT": {
                "Risk Assessment Matrix": [
                    {"hazard": "Hurricane", "likelihood": "unlikely", "severity": "minor"}
                ]
            }
        }))
        .unwrap();
        let request = kingston_grocery().with_existing(existing);
        let bundle = assembler().generate(&request).await.unwrap().unwrap();
        let hurricane = bundle
            .hazards
            .iter()
            .find(|h| h.hazard_id == "hurricane")
            .unwrap();
        assert_eq!(hurricane.likelihood, Likelihood::Unlikely);
        assert_eq!(hurricane.severity, Severity::Minor);
        assert_eq!(hurricane.risk_score, 1);
        assert!(hurricane.user_adjusted);
    }

    #[test]
    fn test_priors_ignore_entries_without_values() {
        let existing: FormState = serde_json::from_value(json!({
            "RISK_ASSESSMENT": {
                "Risk Assessment Matrix": [
                    {"hazard": "Fire"},
                    {"hazardName": "Flooding", "severity": "major"},
                    {"likelihood": "likely"}
                ]
            }
        }))
        .unwrap();
        let priors = priors_from_form(&existing);
        assert_eq!(priors.len(), 1);
        assert_eq!(priors[0].hazard, "Flooding");
        assert_eq!(priors[0].severity, Some(Severity::Major));
        assert!(priors[0].likelihood.is_none());
    }
}
