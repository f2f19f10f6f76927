//! Strategy and Action Plan Module
//!
//! Turns prioritized risks into phased action plans and recommended
//! prevention, response and recovery strategies.
//!
//! This module provides:
//! - Hazard-specific action plan templates and the generic fallback plan
//! - Ordered matching rules for hazard names and business-type inference
//! - Business-type modifiers that extend plans with sector resources
//! - Strategy recommendation from hazard families and industry category

pub mod matcher;
pub mod modifiers;
pub mod rules;
pub mod strategies;
pub mod templates;
pub mod types;

pub use matcher::*;
pub use modifiers::*;
pub use rules::*;
pub use strategies::*;
pub use templates::*;
pub use types::*;
