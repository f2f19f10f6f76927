//! Action plan matcher
//!
//! Builds one action plan per priority hazard (risk level label containing
//! "high" or "extreme"). Hazards without a template get the generic plan.

use crate::error::{ContinuityError, ContinuityResult};
use crate::risk_engine::{is_priority_label, RiskAssessment};
use serde_json::Value;
use tracing::debug;

use super::modifiers::{modifier_for, BusinessModifier, BUSINESS_MODIFIERS};
use super::rules::{infer_business_type, match_template};
use super::templates::{
    generic_immediate_actions, generic_long_term, ActionPlanTemplate, ACTION_PLAN_TEMPLATES,
    GENERIC_RESOURCES,
};
use super::types::{ActionPlan, BusinessOverview, BusinessType, RiskSnapshot};

const HAZARD_KEYS: &[&str] = &["hazard", "hazardName", "hazard_name", "name"];
const RISK_LEVEL_KEYS: &[&str] = &["riskLevel", "risk_level", "level"];

/// Action plan matcher
#[derive(Debug, Clone, Copy)]
pub struct ActionPlanMatcher {
    templates: &'static [ActionPlanTemplate],
    modifiers: &'static [BusinessModifier],
}

impl Default for ActionPlanMatcher {
    fn default() -> Self {
        Self::new(ACTION_PLAN_TEMPLATES, BUSINESS_MODIFIERS)
    }
}

impl ActionPlanMatcher {
    /// Matcher over the given template and modifier tables
    pub fn new(
        templates: &'static [ActionPlanTemplate],
        modifiers: &'static [BusinessModifier],
    ) -> Self {
        Self {
            templates,
            modifiers,
        }
    }

    /// Plans for every priority hazard in `risks`, in input order
    pub fn generate_action_plans(
        &self,
        risks: &[RiskSnapshot],
        business_type: BusinessType,
    ) -> Vec<ActionPlan> {
        risks
            .iter()
            .filter(|risk| is_priority_label(&risk.risk_level))
            .map(|risk| self.build_plan(risk, business_type))
            .collect()
    }

    /// Plans for the priority hazards of an engine risk list
    pub fn plans_for_assessments(
        &self,
        risks: &[RiskAssessment],
        business_type: BusinessType,
    ) -> Vec<ActionPlan> {
        let snapshots: Vec<RiskSnapshot> = risks.iter().map(RiskSnapshot::from).collect();
        self.generate_action_plans(&snapshots, business_type)
    }

    /// Plans from a loosely-typed risk matrix.
    ///
    /// The business type is taken from `business_type` or inferred from
    /// `overview`. A matrix that is not a list yields no plans.
    pub fn plans_from_value(
        &self,
        risk_matrix: &Value,
        business_type: Option<BusinessType>,
        overview: &BusinessOverview,
    ) -> Vec<ActionPlan> {
        let business_type = business_type.unwrap_or_else(|| infer_business_type(overview));
        match parse_risk_matrix(risk_matrix) {
            Ok(snapshots) => self.generate_action_plans(&snapshots, business_type),
            Err(e) => {
                debug!("No action plans generated: {}", e);
                Vec::new()
            }
        }
    }

    fn build_plan(&self, risk: &RiskSnapshot, business_type: BusinessType) -> ActionPlan {
        let mut plan = match match_template(&risk.hazard, self.templates) {
            Some(found) => {
                debug!(
                    "Matched {} to template {} ({:?})",
                    risk.hazard, found.template.key, found.rule
                );
                from_template(found.template)
            }
            None => {
                debug!("No action plan template for {}, using generic plan", risk.hazard);
                generic_plan(&risk.hazard)
            }
        };

        if let Some(modifier) = modifier_for(self.modifiers, business_type) {
            plan.resources_needed
                .extend(modifier.extra_resources.iter().map(|r| r.to_string()));
            plan.immediate_actions
                .extend(modifier.extra_immediate.iter().map(|t| t.to_task()));
        }

        plan.hazard = risk.hazard.clone();
        plan.risk_level = risk.risk_level.clone();
        plan.business_type = business_type;
        plan
    }
}

fn from_template(template: &ActionPlanTemplate) -> ActionPlan {
    ActionPlan {
        hazard: String::new(),
        risk_level: String::new(),
        business_type: BusinessType::General,
        template_key: Some(template.key.to_string()),
        resources_needed: template.resources.iter().map(|r| r.to_string()).collect(),
        immediate_actions: template.immediate.iter().map(|t| t.to_task()).collect(),
        short_term_actions: template.short_term.iter().map(|t| t.to_task()).collect(),
        medium_term_actions: template.medium_term.iter().map(|t| t.to_task()).collect(),
        long_term_risk_reduction: template.long_term.iter().map(|m| m.to_string()).collect(),
    }
}

fn generic_plan(hazard: &str) -> ActionPlan {
    ActionPlan {
        hazard: hazard.to_string(),
        risk_level: String::new(),
        business_type: BusinessType::General,
        template_key: None,
        resources_needed: GENERIC_RESOURCES.iter().map(|r| r.to_string()).collect(),
        immediate_actions: generic_immediate_actions(hazard),
        short_term_actions: Vec::new(),
        medium_term_actions: Vec::new(),
        long_term_risk_reduction: generic_long_term(hazard),
    }
}

fn first_string<'a>(entry: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| entry.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
}

/// Read a risk matrix, accepting legacy field names.
///
/// Entries without a hazard name or risk level are skipped.
pub fn parse_risk_matrix(risk_matrix: &Value) -> ContinuityResult<Vec<RiskSnapshot>> {
    let entries = risk_matrix
        .as_array()
        .ok_or_else(|| ContinuityError::MalformedRiskInput {
            details: "risk matrix is not a list".to_string(),
        })?;

    Ok(entries
        .iter()
        .filter_map(|entry| {
            let hazard = first_string(entry, HAZARD_KEYS)?;
            let risk_level = first_string(entry, RISK_LEVEL_KEYS)?;
            Some(RiskSnapshot {
                hazard: hazard.to_string(),
                risk_level: risk_level.to_string(),
            })
        })
        .collect())
}
