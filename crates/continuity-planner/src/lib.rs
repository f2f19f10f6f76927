//! Risk prioritization and pre-fill engine for small-business continuity plans
//!
//! This crate provides the core of a continuity-planning wizard for small
//! Caribbean businesses:
//! - Hazard and industry reference catalogs behind async repository traits
//! - Location-aware risk scoring with coastal, urban and country amplification
//! - Deduplicated, ranked risk lists that preserve user-entered values
//! - Hazard-specific action plans tailored by business type
//! - Strategy recommendations from hazard families and industry category
//! - Step-keyed default answers, localized example text and an additive merge

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod prefill;
pub mod risk_engine;
pub mod strategy_matcher;


// Core error types and results
pub use error::{ContinuityError, ContinuityResult};

// Configuration exports
pub use config::PlannerConfig;

// Catalog exports
pub use catalog::{
    Frequency, Hazard, HazardRepository, Impact, IndustryCategory, IndustryProfile,
    IndustryRepository, InMemoryCatalog, Locale, LocationHazardSet, LocationProfile, RiskLevel,
};

// Risk scoring exports
pub use risk_engine::{
    calculate_risk_score, get_risk_level, Likelihood, PriorAssessment, RiskAssessment,
    RiskRating, RiskRequest, RiskScoringEngine, RiskSource, ScoringScheme, Severity,
};

// Strategy and action plan exports
pub use strategy_matcher::{
    infer_business_type, recommend_strategies, ActionPlan, ActionPlanMatcher, ActionTask,
    BusinessOverview, BusinessType, RiskSnapshot, StrategyRecommendation, TaskPriority,
};

// Pre-fill exports
pub use prefill::{
    merge_pre_fill_data, FieldValue, FormState, Localizer, PreFillAssembler, PreFillBundle,
    PreFillRequest, StaticLocalizer, StepId,
};
