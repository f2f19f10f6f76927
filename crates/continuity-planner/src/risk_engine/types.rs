//! Risk engine request and result types

use super::scoring::{Likelihood, RiskRating, ScoringScheme, Severity};
use crate::catalog::LocationProfile;
use serde::{Deserialize, Serialize};

/// Which catalog contributed a hazard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskSource {
    /// Industry vulnerability
    BusinessType,
    /// Country, sub-region or location modifier
    Location,
    /// Both of the above
    Combined,
}

impl RiskSource {
    /// Source after a second contribution from `other`
    pub fn merged_with(self, other: RiskSource) -> RiskSource {
        if self == other {
            self
        } else {
            RiskSource::Combined
        }
    }
}

/// One scored hazard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Hazard id
    pub hazard_id: String,
    /// Hazard display name
    pub hazard: String,
    /// Current likelihood
    pub likelihood: Likelihood,
    /// Current severity
    pub severity: Severity,
    /// Score under the configured scheme
    pub risk_score: u32,
    /// Rating derived from the score
    pub risk_level: RiskRating,
    /// Where the hazard came from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<RiskSource>,
    /// Likelihood or severity came from the user rather than the catalog
    #[serde(default)]
    pub user_adjusted: bool,
}

impl RiskAssessment {
    /// Score a likelihood/severity pair under `scheme`
    pub fn new(
        hazard_id: impl Into<String>,
        hazard: impl Into<String>,
        likelihood: Likelihood,
        severity: Severity,
        scheme: ScoringScheme,
    ) -> Self {
        let risk_score = scheme.score(likelihood, severity);
        Self {
            hazard_id: hazard_id.into(),
            hazard: hazard.into(),
            likelihood,
            severity,
            risk_score,
            risk_level: scheme.rating(risk_score),
            source: None,
            user_adjusted: false,
        }
    }

    /// Replace the likelihood and rescore; severity is untouched
    pub fn with_likelihood(mut self, likelihood: Likelihood, scheme: ScoringScheme) -> Self {
        self.likelihood = likelihood;
        self.user_adjusted = true;
        self.recalculate(scheme);
        self
    }

    /// Replace the severity and rescore; likelihood is untouched
    pub fn with_severity(mut self, severity: Severity, scheme: ScoringScheme) -> Self {
        self.severity = severity;
        self.user_adjusted = true;
        self.recalculate(scheme);
        self
    }

    /// Recompute score and rating from the current likelihood and severity
    pub fn recalculate(&mut self, scheme: ScoringScheme) {
        self.risk_score = scheme.score(self.likelihood, self.severity);
        self.risk_level = scheme.rating(self.risk_score);
    }
}

/// Likelihood/severity a user already entered for a hazard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorAssessment {
    /// Hazard id or display name
    pub hazard: String,
    /// User-set likelihood
    #[serde(default)]
    pub likelihood: Option<Likelihood>,
    /// User-set severity
    #[serde(default)]
    pub severity: Option<Severity>,
}

impl PriorAssessment {
    /// Whether this entry refers to the given hazard
    pub fn matches(&self, hazard_id: &str, hazard_name: &str) -> bool {
        let key = self.hazard.trim();
        key.eq_ignore_ascii_case(hazard_id) || key.eq_ignore_ascii_case(hazard_name)
    }
}

impl From<&RiskAssessment> for PriorAssessment {
    fn from(assessment: &RiskAssessment) -> Self {
        Self {
            hazard: assessment.hazard_id.clone(),
            likelihood: Some(assessment.likelihood),
            severity: Some(assessment.severity),
        }
    }
}

/// Input to the risk scoring engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRequest {
    /// Industry profile id
    pub industry_id: String,
    /// Where the business operates
    pub location: LocationProfile,
    /// Values the user already entered
    #[serde(default)]
    pub prior_assessments: Vec<PriorAssessment>,
}

impl RiskRequest {
    /// Request without prior user values
    pub fn new(industry_id: impl Into<String>, location: LocationProfile) -> Self {
        Self {
            industry_id: industry_id.into(),
            location,
            prior_assessments: Vec::new(),
        }
    }

    /// Attach values the user already entered
    pub fn with_priors(mut self, priors: Vec<PriorAssessment>) -> Self {
        self.prior_assessments = priors;
        self
    }
}
