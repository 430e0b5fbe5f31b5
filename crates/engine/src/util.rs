//! Internal helpers for model validation and conversion.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so create, update and patch enforce the same invariants.

use crate::{Category, EngineError, ResultEngine};

/// Maximum description length, in characters.
pub(crate) const MAX_DESCRIPTION_CHARS: usize = 200;

/// Reject non-positive and non-finite amounts.
pub(crate) fn validate_amount(amount: f64) -> ResultEngine<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(EngineError::InvalidAmount(format!(
            "amount must be > 0, got {amount}"
        )));
    }
    Ok(amount)
}

/// Trim surrounding whitespace and enforce the length limit.
pub(crate) fn normalize_description(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    let len = trimmed.chars().count();
    if len > MAX_DESCRIPTION_CHARS {
        return Err(EngineError::InvalidDescription(format!(
            "description must be at most {MAX_DESCRIPTION_CHARS} characters, got {len}"
        )));
    }
    Ok(trimmed.to_string())
}

/// Parse a category name into the closed enumeration.
pub fn parse_category(value: &str) -> ResultEngine<Category> {
    value.parse::<Category>().map_err(|_| {
        EngineError::InvalidCategory(format!(
            "'{value}' is not one of {}",
            Category::ALL.map(Category::as_str).join(", ")
        ))
    })
}
