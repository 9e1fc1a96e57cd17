//! Field validation rules for raw form input.
//!
//! # Responsibility
//! - Check required/length rules on text fields and range rules on the
//!   headcount field.
//! - Report failures as typed errors with user-facing messages.
//!
//! # Invariants
//! - Required-ness is judged on trimmed input; length rules count the raw
//!   value as entered.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rules applied to one text field.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// Inclusive numeric range for the headcount field.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

/// Field-level validation failures, surfaced verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Required { field: &'static str },
    TooShort { field: &'static str, min: usize, actual: usize },
    TooLong { field: &'static str, max: usize, actual: usize },
    NotANumber { field: &'static str, raw: String },
    OutOfRange { field: &'static str, min: i64, max: i64, value: i64 },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Required { field } => write!(f, "{field} is required"),
            Self::TooShort { field, min, actual } => write!(
                f,
                "{field} must be at least {min} characters long (got {actual})"
            ),
            Self::TooLong { field, max, actual } => write!(
                f,
                "{field} must be at most {max} characters long (got {actual})"
            ),
            Self::NotANumber { field, raw } => {
                write!(f, "{field} must be a whole number, got `{raw}`")
            }
            Self::OutOfRange { field, min, max, value } => {
                write!(f, "{field} must be between {min} and {max}, got {value}")
            }
        }
    }
}

impl Error for ValidationError {}

/// Validates one text field against its rules.
pub fn validate_text(
    field: &'static str,
    value: &str,
    rules: TextRules,
) -> Result<(), ValidationError> {
    if rules.required && value.trim().is_empty() {
        return Err(ValidationError::Required { field });
    }

    let length = value.chars().count();
    if let Some(min) = rules.min_length {
        if length < min {
            return Err(ValidationError::TooShort {
                field,
                min,
                actual: length,
            });
        }
    }
    if let Some(max) = rules.max_length {
        if length > max {
            return Err(ValidationError::TooLong {
                field,
                max,
                actual: length,
            });
        }
    }

    Ok(())
}

/// Parses and range-checks the raw headcount field.
pub fn validate_people(
    field: &'static str,
    raw: &str,
    range: IntRange,
) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field });
    }

    let value: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field,
            raw: trimmed.to_string(),
        })?;

    if value < range.min || value > range.max {
        return Err(ValidationError::OutOfRange {
            field,
            min: range.min,
            max: range.max,
            value,
        });
    }

    // Checked conversion: a caller-supplied range may admit negatives.
    u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
        field,
        min: range.min,
        max: range.max,
        value,
    })
}
