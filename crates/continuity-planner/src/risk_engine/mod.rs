//! Risk Scoring Module
//!
//! Turns a business type and a location into a ranked, deduplicated hazard
//! list with likelihood, severity, numeric score and rating.
//!
//! This module provides:
//! - Four-point likelihood/severity scales and alternative scoring schemes
//! - Coastal, urban and country-specific amplification rules
//! - The async scoring engine over injected catalog repositories

pub mod amplification;
pub mod engine;
pub mod scoring;
pub mod types;

pub use amplification::*;
pub use engine::*;
pub use scoring::*;
pub use types::*;
