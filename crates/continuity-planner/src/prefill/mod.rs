//! Pre-Fill Module
//!
//! Produces the default answers and example hints the continuity-plan
//! wizard shows before the user has typed anything.
//!
//! This module provides:
//! - The async assembler that runs scoring, matching and layout per request
//! - Placeholder substitution for location-aware example text
//! - Localized terms and narrative headers with English fallback
//! - Markdown-like narratives for strategies, budgets, schedules and drills
//! - An additive merge that never overwrites the user's answers

pub mod assembler;
pub mod examples;
pub mod localization;
pub mod merge;
pub mod narratives;
pub mod types;

pub use assembler::PreFillAssembler;
pub use examples::{localized_examples, PlaceholderValues};
pub use localization::{Localizer, StaticLocalizer};
pub use merge::{is_empty_value, merge_pre_fill_data};
pub use types::*;
