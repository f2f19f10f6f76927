//! Action plan and strategy recommendation types

use crate::catalog::IndustryCategory;
use crate::error::{ContinuityError, ContinuityResult};
use crate::risk_engine::RiskAssessment;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Business type used to tailor action plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessType {
    /// Hotels, guest houses, tour operators
    Tourism,
    /// Shops and stores
    Retail,
    /// Restaurants, bakeries, caterers
    FoodService,
    /// Workshops and production
    Manufacturing,
    /// IT and digital services
    Technology,
    /// Anything else
    General,
}

impl BusinessType {
    /// Tag written into action plans
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessType::Tourism => "tourism",
            BusinessType::Retail => "retail",
            BusinessType::FoodService => "food_service",
            BusinessType::Manufacturing => "manufacturing",
            BusinessType::Technology => "technology",
            BusinessType::General => "general",
        }
    }

    /// Industry category used for strategy selection
    pub fn category(&self) -> IndustryCategory {
        match self {
            BusinessType::Tourism | BusinessType::FoodService => IndustryCategory::Hospitality,
            BusinessType::Retail => IndustryCategory::Retail,
            BusinessType::Technology => IndustryCategory::Services,
            BusinessType::Manufacturing => IndustryCategory::Industrial,
            BusinessType::General => IndustryCategory::Other,
        }
    }
}

impl FromStr for BusinessType {
    type Err = ContinuityError;

    fn from_str(s: &str) -> ContinuityResult<Self> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "tourism" => Ok(BusinessType::Tourism),
            "retail" => Ok(BusinessType::Retail),
            "food_service" => Ok(BusinessType::FoodService),
            "manufacturing" => Ok(BusinessType::Manufacturing),
            "technology" => Ok(BusinessType::Technology),
            "general" => Ok(BusinessType::General),
            other => Err(ContinuityError::ConfigurationError {
                message: format!("unknown business type '{other}'"),
            }),
        }
    }
}

impl fmt::Display for BusinessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    /// Do first
    Critical,
    /// Do soon
    High,
    /// Do when critical and high tasks are under way
    Medium,
    /// Do when time allows
    Low,
}

/// One task in an action plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionTask {
    /// What to do
    pub description: String,
    /// Role responsible for the task
    pub responsible: String,
    /// Duration estimate, e.g. `2 hours`
    pub duration: String,
    /// Task priority
    pub priority: TaskPriority,
}

/// Action plan for one priority hazard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    /// Hazard name as entered in the risk matrix
    pub hazard: String,
    /// Risk level label, e.g. `Extreme`
    pub risk_level: String,
    /// Business type the plan is tailored for
    pub business_type: BusinessType,
    /// Template the plan was built from; `None` for the generic plan
    #[serde(default)]
    pub template_key: Option<String>,
    /// Resources to have in place
    pub resources_needed: Vec<String>,
    /// 0–24 hours
    pub immediate_actions: Vec<ActionTask>,
    /// 1–7 days
    pub short_term_actions: Vec<ActionTask>,
    /// 1–4 weeks
    pub medium_term_actions: Vec<ActionTask>,
    /// Measures that reduce the risk over time
    pub long_term_risk_reduction: Vec<String>,
}

/// Hazard name and risk level as the matcher sees them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskSnapshot {
    /// Hazard name
    pub hazard: String,
    /// Risk level label
    pub risk_level: String,
}

impl From<&RiskAssessment> for RiskSnapshot {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            hazard: assessment.hazard.clone(),
            risk_level: assessment.risk_level.label().to_string(),
        }
    }
}

/// Free-text business description used to infer the business type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessOverview {
    /// What the business does
    #[serde(default)]
    pub business_purpose: String,
    /// Products and services offered
    #[serde(default)]
    pub products_services: String,
}

/// Strategy ids grouped by plan phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategyRecommendation {
    /// Before an event
    pub prevention: Vec<String>,
    /// During and right after an event
    pub response: Vec<String>,
    /// Getting back to normal
    pub recovery: Vec<String>,
}

impl StrategyRecommendation {
    /// Append ids to each bucket
    pub fn extend(&mut self, prevention: &[&str], response: &[&str], recovery: &[&str]) {
        self.prevention.extend(prevention.iter().map(|s| s.to_string()));
        self.response.extend(response.iter().map(|s| s.to_string()));
        self.recovery.extend(recovery.iter().map(|s| s.to_string()));
    }

    /// Drop repeated ids within each bucket, keeping first occurrences
    pub fn deduped(mut self) -> Self {
        for bucket in [&mut self.prevention, &mut self.response, &mut self.recovery] {
            let mut seen = HashSet::new();
            bucket.retain(|id| seen.insert(id.clone()));
        }
        self
    }

    /// Total ids across all buckets
    pub fn len(&self) -> usize {
        self.prevention.len() + self.response.len() + self.recovery.len()
    }

    /// Whether all buckets are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
