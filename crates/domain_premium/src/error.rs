//! Premium domain errors
//!
//! Every rejection the domain can produce is a value of [`ValidationError`],
//! attached to the input [`Field`] it concerns. Nothing here is fatal: the
//! quoting engine performs no I/O and has no unrecoverable failure mode.

use core_kernel::format_currency;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Reasons a single input field can be rejected
///
/// Serialized with a `kind` tag (`"required"`, `"tooShort"`, `"invalidYear"`, ...)
/// plus any bounds carried by the variant.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ValidationError {
    /// Field is absent or blank where a value is mandatory
    #[error("This field is required")]
    Required,

    /// Name shorter than the minimum once trimmed
    #[error("Must be at least {min} characters")]
    TooShort { min: usize },

    /// Name longer than the maximum
    #[error("Must be at most {max} characters")]
    TooLong { max: usize },

    /// Age below the minimum
    #[error("Age must be at least {min}")]
    TooYoung { min: u32 },

    /// Age above the maximum
    #[error("Age must be at most {max}")]
    TooOld { max: u32 },

    /// Date of birth is not `MM/YYYY`
    #[error("Date must be in MM/YYYY format")]
    InvalidFormat,

    /// Birth year outside the rolling window ending at the current year
    #[error("Year must be between {min} and {max}")]
    InvalidYear { min: i32, max: i32 },

    /// Amount is negative
    #[error("Amount must be greater than zero")]
    TooLow,

    /// Amount above the maximum insurable sum
    #[error("Amount must not exceed {}", display_amount(.max))]
    TooHigh { max: Decimal },

    /// Occupation code not present in the registry
    #[error("Unknown occupation: {code}")]
    UnknownOccupation { code: String },
}

fn display_amount(amount: &Decimal) -> String {
    format_currency(*amount)
}

/// Input fields of a premium quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    AgeNextBirthday,
    DateOfBirth,
    Occupation,
    DeathSumInsured,
}

impl Field {
    /// Label shown next to the form control
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::AgeNextBirthday => "Age next birthday",
            Field::DateOfBirth => "Date of birth",
            Field::Occupation => "Occupation",
            Field::DeathSumInsured => "Death sum insured",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rejection attached to the field that caused it
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{field}: {error}")]
pub struct FieldError {
    pub field: Field,
    pub error: ValidationError,
}

impl FieldError {
    pub fn new(field: Field, error: ValidationError) -> Self {
        Self { field, error }
    }
}
