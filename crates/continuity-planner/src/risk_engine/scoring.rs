//! Likelihood/severity scales and score-to-rating schemes

use crate::catalog::{Frequency, Impact, RiskLevel};
use crate::error::{ContinuityError, ContinuityResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Likelihood on the four-point practical scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Likelihood {
    /// Could happen but not expected
    Unlikely,
    /// Might happen in a given year
    Possible,
    /// Expected most years
    Likely,
    /// Expected every year
    AlmostCertain,
}

impl Likelihood {
    const SCALE: [Likelihood; 4] = [
        Likelihood::Unlikely,
        Likelihood::Possible,
        Likelihood::Likely,
        Likelihood::AlmostCertain,
    ];

    /// Weight 1 (unlikely) to 4 (almost certain)
    pub fn weight(&self) -> u32 {
        *self as u32 + 1
    }

    /// Code used by the form layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::Unlikely => "unlikely",
            Likelihood::Possible => "possible",
            Likelihood::Likely => "likely",
            Likelihood::AlmostCertain => "almost_certain",
        }
    }

    /// Move up the scale by `steps`, capped at almost certain
    pub fn bumped(self, steps: u8) -> Self {
        let index = (self as usize + steps as usize).min(Self::SCALE.len() - 1);
        Self::SCALE[index]
    }

    /// Project a five-point frequency onto the four-point scale
    pub fn from_frequency(frequency: Frequency) -> Self {
        match frequency {
            Frequency::Rare | Frequency::Unlikely => Likelihood::Unlikely,
            Frequency::Possible => Likelihood::Possible,
            Frequency::Likely => Likelihood::Likely,
            Frequency::AlmostCertain => Likelihood::AlmostCertain,
        }
    }

    /// Rank on the five-point frequency scale
    pub fn five_point_rank(&self) -> u32 {
        self.weight() + 1
    }
}

impl FromStr for Likelihood {
    type Err = ContinuityError;

    /// `rare` collapses onto `unlikely`, the bottom of the practical scale.
    fn from_str(s: &str) -> ContinuityResult<Self> {
        match normalize_code(s).as_str() {
            "rare" | "unlikely" => Ok(Likelihood::Unlikely),
            "possible" => Ok(Likelihood::Possible),
            "likely" => Ok(Likelihood::Likely),
            "almost_certain" => Ok(Likelihood::AlmostCertain),
            _ => Err(ContinuityError::InvalidLikelihood {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Likelihood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity on the four-point practical scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Little disruption
    Minor,
    /// Some days lost
    Moderate,
    /// Serious damage or long closure
    Major,
    /// Threatens the business
    Catastrophic,
}

impl Severity {
    const SCALE: [Severity; 4] = [
        Severity::Minor,
        Severity::Moderate,
        Severity::Major,
        Severity::Catastrophic,
    ];

    /// Weight 1 (minor) to 4 (catastrophic)
    pub fn weight(&self) -> u32 {
        *self as u32 + 1
    }

    /// Code used by the form layer
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Major => "major",
            Severity::Catastrophic => "catastrophic",
        }
    }

    /// Move up the scale by `steps`, capped at catastrophic
    pub fn bumped(self, steps: u8) -> Self {
        let index = (self as usize + steps as usize).min(Self::SCALE.len() - 1);
        Self::SCALE[index]
    }

    /// Project a five-point impact onto the four-point scale
    pub fn from_impact(impact: Impact) -> Self {
        match impact {
            Impact::Minimal | Impact::Minor => Severity::Minor,
            Impact::Moderate => Severity::Moderate,
            Impact::Major => Severity::Major,
            Impact::Catastrophic => Severity::Catastrophic,
        }
    }

    /// Rank on the five-point impact scale
    pub fn five_point_rank(&self) -> u32 {
        self.weight() + 1
    }
}

impl FromStr for Severity {
    type Err = ContinuityError;

    /// `minimal` and `negligible` collapse onto `minor`.
    fn from_str(s: &str) -> ContinuityResult<Self> {
        match normalize_code(s).as_str() {
            "minimal" | "negligible" | "minor" => Ok(Severity::Minor),
            "moderate" => Ok(Severity::Moderate),
            "major" => Ok(Severity::Major),
            "catastrophic" => Ok(Severity::Catastrophic),
            _ => Err(ContinuityError::InvalidSeverity {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize_code(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Derived risk rating label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskRating {
    /// Monitor
    Low,
    /// Plan for it
    Medium,
    /// Act on it
    High,
    /// Act on it first
    Extreme,
}

impl RiskRating {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskRating::Low => "Low",
            RiskRating::Medium => "Medium",
            RiskRating::High => "High",
            RiskRating::Extreme => "Extreme",
        }
    }

    /// High and Extreme hazards get action plans
    pub fn is_priority(&self) -> bool {
        is_priority_label(self.label())
    }
}

impl fmt::Display for RiskRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a free-text risk level names a priority hazard
pub fn is_priority_label(label: &str) -> bool {
    let label = label.to_lowercase();
    label.contains("high") || label.contains("extreme")
}

/// Score-to-rating scheme
///
/// Two schemes exist for the four-point scales and a third scores the
/// five-point frequency × impact scales directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringScheme {
    /// 4×4 grid, Extreme ≥12, High ≥8, Medium ≥4
    #[default]
    Standard,
    /// 4×4 grid, Extreme ≥12, High ≥8, Medium ≥3, Low ≥1
    Matrix,
    /// 5×5 grid, Extreme ≥20, High ≥15, Medium ≥8
    Dynamic,
}

impl ScoringScheme {
    /// Score a four-point likelihood/severity pair under this scheme
    pub fn score(&self, likelihood: Likelihood, severity: Severity) -> u32 {
        match self {
            ScoringScheme::Standard | ScoringScheme::Matrix => {
                calculate_risk_score(likelihood, severity)
            }
            ScoringScheme::Dynamic => likelihood.five_point_rank() * severity.five_point_rank(),
        }
    }

    /// Rating for a score under this scheme
    pub fn rating(&self, score: u32) -> RiskRating {
        match self {
            ScoringScheme::Standard => get_risk_level(score),
            ScoringScheme::Matrix => match score {
                s if s >= 12 => RiskRating::Extreme,
                s if s >= 8 => RiskRating::High,
                s if s >= 3 => RiskRating::Medium,
                _ => RiskRating::Low,
            },
            ScoringScheme::Dynamic => match score {
                s if s >= 20 => RiskRating::Extreme,
                s if s >= 15 => RiskRating::High,
                s if s >= 8 => RiskRating::Medium,
                _ => RiskRating::Low,
            },
        }
    }
}

impl FromStr for ScoringScheme {
    type Err = ContinuityError;

    fn from_str(s: &str) -> ContinuityResult<Self> {
        match normalize_code(s).as_str() {
            "standard" => Ok(ScoringScheme::Standard),
            "matrix" => Ok(ScoringScheme::Matrix),
            "dynamic" => Ok(ScoringScheme::Dynamic),
            other => Err(ContinuityError::ConfigurationError {
                message: format!("unknown scoring scheme '{other}'"),
            }),
        }
    }
}

/// Likelihood weight × severity weight on the four-point scales
pub fn calculate_risk_score(likelihood: Likelihood, severity: Severity) -> u32 {
    likelihood.weight() * severity.weight()
}

/// Rating under the canonical thresholds: ≥12 Extreme, ≥8 High, ≥4 Medium
pub fn get_risk_level(score: u32) -> RiskRating {
    match score {
        s if s >= 12 => RiskRating::Extreme,
        s if s >= 8 => RiskRating::High,
        s if s >= 4 => RiskRating::Medium,
        _ => RiskRating::Low,
    }
}

/// Default likelihood/severity pair for a catalog risk level
pub fn default_pair(level: RiskLevel) -> (Likelihood, Severity) {
    match level {
        RiskLevel::VeryHigh => (Likelihood::AlmostCertain, Severity::Catastrophic),
        RiskLevel::High => (Likelihood::Likely, Severity::Major),
        RiskLevel::Medium => (Likelihood::Possible, Severity::Moderate),
        RiskLevel::Low => (Likelihood::Unlikely, Severity::Minor),
    }
}
