//! Hazard and industry reference catalogs
//!
//! This module provides:
//! - Hazard definitions and per-country hazard sets (base, sub-region, coastal, urban)
//! - Industry profiles with vulnerabilities, essential functions and example text
//! - Async repository traits so the engine can run against any data store

pub mod hazards;
pub mod industries;
pub mod repository;
pub mod types;

pub use hazards::{caribbean_locations, hazard, hazard_definition, HazardDefinition};
pub use industries::caribbean_industries;
pub use repository::{HazardRepository, InMemoryCatalog, IndustryRepository};
pub use types::*;
