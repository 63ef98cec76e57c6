//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so handlers check
//! shape before anything reaches the repository layer.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: category, product
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: phone, OTP code, city
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Address fields and free-form notes
pub const MAX_ADDRESS_LEN: usize = 500;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} required")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        )));
    }
    Ok(())
}

/// Validate that an optional count, if present, is a positive integer.
pub fn validate_positive_int(value: Option<i64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && v < 1
    {
        return Err(AppError::validation(format!("{field} must be at least 1")));
    }
    Ok(())
}

/// Validate that an optional amount, if present, is positive and finite.
pub fn validate_positive_amount(value: Option<f64>, field: &str) -> Result<(), AppError> {
    if let Some(v) = value
        && (!v.is_finite() || v <= 0.0)
    {
        return Err(AppError::validation(format!(
            "{field} must be a positive amount"
        )));
    }
    Ok(())
}
