//! Additive merge of pre-filled values into caller form state
//!
//! A field the caller already answered is never replaced. Empty means
//! null, blank text, an empty list or an empty object.

use super::types::{FormState, PreFillBundle};
use crate::error::ContinuityResult;
use serde_json::Value;
use tracing::debug;

/// Whether a form value counts as unanswered
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(text) => text.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Fill every empty or absent field in `existing` from the bundle
pub fn merge_pre_fill_data(
    existing: &FormState,
    bundle: &PreFillBundle,
) -> ContinuityResult<FormState> {
    let mut merged = existing.clone();
    let mut filled = 0usize;

    for (step, fields) in &bundle.pre_filled_fields {
        let target = merged.entry(step.clone()).or_default();
        for (field, value) in fields {
            if value.is_empty() {
                continue;
            }
            match target.get(field) {
                Some(current) if !is_empty_value(current) => {
                    debug!("Keeping user value for {}/{}", step, field);
                }
                _ => {
                    target.insert(field.clone(), serde_json::to_value(value)?);
                    filled += 1;
                }
            }
        }
    }

    debug!("Pre-filled {} empty fields", filled);
    Ok(merged)
}
