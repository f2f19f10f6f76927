//! Risk scoring engine
//!
//! Combines country, sub-region, location-modifier and industry hazards into
//! one deduplicated list, scores every hazard and ranks the result.

use crate::catalog::{
    hazard, Hazard, HazardRepository, IndustryProfile, IndustryRepository, LocationHazardSet,
    LocationProfile,
};
use crate::config::PlannerConfig;
use crate::error::ContinuityResult;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::amplification::{amplification_for, Amplification, AMPLIFICATION_RULES};
use super::scoring::{default_pair, Likelihood, ScoringScheme, Severity};
use super::types::{PriorAssessment, RiskAssessment, RiskRequest, RiskSource};

/// Hazard after deduplication, with the sources that contributed it
#[derive(Debug, Clone)]
struct MergedHazard {
    hazard: Hazard,
    source: RiskSource,
}

/// Risk scoring engine
pub struct RiskScoringEngine {
    hazards: Arc<dyn HazardRepository>,
    industries: Arc<dyn IndustryRepository>,
    config: Arc<PlannerConfig>,
}

impl RiskScoringEngine {
    /// Create engine over the given catalogs
    pub fn new(
        hazards: Arc<dyn HazardRepository>,
        industries: Arc<dyn IndustryRepository>,
        config: Arc<PlannerConfig>,
    ) -> Self {
        Self {
            hazards,
            industries,
            config,
        }
    }

    /// Ranked risk list for a request.
    ///
    /// Unknown countries and industries contribute nothing; when both are
    /// unknown the list is empty.
    pub async fn assess(&self, request: &RiskRequest) -> ContinuityResult<Vec<RiskAssessment>> {
        let profile = self
            .industries
            .get_industry_profile(&request.industry_id)
            .await?;
        if profile.is_none() {
            debug!(
                "Unknown industry {}, scoring location hazards only",
                request.industry_id
            );
        }

        self.assess_with_profile(
            profile.as_ref(),
            &request.location,
            &request.prior_assessments,
        )
        .await
    }

    /// Ranked risk list for an already-resolved industry profile
    pub async fn assess_with_profile(
        &self,
        profile: Option<&IndustryProfile>,
        location: &LocationProfile,
        priors: &[PriorAssessment],
    ) -> ContinuityResult<Vec<RiskAssessment>> {
        let location_set = self
            .hazards
            .get_location_hazard_set(&location.country_code)
            .await?;

        let location_hazards = match &location_set {
            Some(set) => location_hazards(set, location),
            None => {
                debug!(
                    "Unknown country {}, scoring industry hazards only",
                    location.country_code
                );
                Vec::new()
            }
        };

        let industry_hazards = profile.map(industry_hazards).unwrap_or_default();
        let merged = merge_hazards(location_hazards, industry_hazards);

        let mut assessments: Vec<RiskAssessment> = merged
            .into_iter()
            .map(|entry| self.score(entry, location, priors))
            .collect();

        // Stable: equal scores keep merge order
        assessments.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

        debug!(
            "Scored {} hazards for {} ({})",
            assessments.len(),
            location.country_code,
            profile.map(|p| p.id.as_str()).unwrap_or("unknown industry")
        );

        Ok(assessments)
    }

    fn score(
        &self,
        entry: MergedHazard,
        location: &LocationProfile,
        priors: &[PriorAssessment],
    ) -> RiskAssessment {
        let scheme = self.config.scoring_scheme;
        let hazard = entry.hazard;
        let bump = if self.config.location_amplification {
            amplification_for(AMPLIFICATION_RULES, &hazard.id, location)
        } else {
            Amplification::default()
        };
        if !bump.is_empty() {
            debug!(
                "Amplified {} by +{} frequency, +{} impact",
                hazard.id, bump.frequency_steps, bump.impact_steps
            );
        }
        let prior = priors
            .iter()
            .find(|prior| prior.matches(&hazard.id, &hazard.name));

        let (mut likelihood, mut severity, catalog_score) = match scheme {
            ScoringScheme::Standard | ScoringScheme::Matrix => {
                let (likelihood, severity) = default_pair(hazard.risk_level);
                (
                    likelihood.bumped(bump.frequency_steps),
                    severity.bumped(bump.impact_steps),
                    None,
                )
            }
            ScoringScheme::Dynamic => {
                let frequency = hazard.frequency.bumped(bump.frequency_steps);
                let impact = hazard.impact.bumped(bump.impact_steps);
                (
                    Likelihood::from_frequency(frequency),
                    Severity::from_impact(impact),
                    Some(frequency.rank() * impact.rank()),
                )
            }
        };

        let mut user_adjusted = false;
        if let Some(prior) = prior {
            if let Some(value) = prior.likelihood {
                likelihood = value;
                user_adjusted = true;
            }
            if let Some(value) = prior.severity {
                severity = value;
                user_adjusted = true;
            }
        }

        let mut assessment =
            RiskAssessment::new(hazard.id, hazard.name, likelihood, severity, scheme);
        if let (Some(score), false) = (catalog_score, user_adjusted) {
            assessment.risk_score = score;
            assessment.risk_level = scheme.rating(score);
        }
        assessment.source = Some(entry.source);
        assessment.user_adjusted = user_adjusted;
        assessment
    }
}

/// Base, sub-region, coastal and urban hazards in that order
fn location_hazards(set: &LocationHazardSet, location: &LocationProfile) -> Vec<Hazard> {
    let mut hazards = set.base.clone();

    if let Some(name) = location.sub_region.as_deref() {
        let name = name.trim();
        match set
            .sub_regions
            .iter()
            .find(|(region, _)| region.eq_ignore_ascii_case(name))
        {
            Some((_, extra)) => hazards.extend(extra.iter().cloned()),
            None => debug!("Unknown sub-region {} in {}", name, set.country_code),
        }
    }
    if location.near_coast {
        hazards.extend(set.coastal.iter().cloned());
    }
    if location.urban_area {
        hazards.extend(set.urban.iter().cloned());
    }

    hazards
}

/// Industry vulnerabilities as hazards at their default level
fn industry_hazards(profile: &IndustryProfile) -> Vec<Hazard> {
    profile
        .vulnerabilities
        .iter()
        .map(|vulnerability| hazard(&vulnerability.hazard_id, vulnerability.default_risk_level))
        .collect()
}

/// Deduplicate by id keeping first position; the higher level wins
fn merge_hazards(location: Vec<Hazard>, industry: Vec<Hazard>) -> Vec<MergedHazard> {
    let mut merged: Vec<MergedHazard> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    let tagged = location
        .into_iter()
        .map(|h| (h, RiskSource::Location))
        .chain(industry.into_iter().map(|h| (h, RiskSource::BusinessType)));

    for (hazard, source) in tagged {
        match index.get(&hazard.id) {
            Some(&position) => {
                let existing = &mut merged[position];
                existing.source = existing.source.merged_with(source);
                if hazard.risk_level > existing.hazard.risk_level {
                    existing.hazard = hazard;
                }
            }
            None => {
                index.insert(hazard.id.clone(), merged.len());
                merged.push(MergedHazard { hazard, source });
            }
        }
    }

    merged
}
