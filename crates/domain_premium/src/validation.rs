//! Input validation rules
//!
//! One pure function per quote field. Each either returns the normalized
//! value or exactly one [`ValidationError`]; none of them look at any other
//! field, so callers can run them individually as a form is filled in.
//!
//! # Rules
//!
//! - Name: required, 2 to 100 characters
//! - Age next birthday: required, 1 to 100 inclusive
//! - Date of birth: `MM/YYYY`, year within the 100 years ending this year
//! - Occupation: required (registry membership is checked by the calculator)
//! - Death sum insured: required, greater than zero, at most $10,000,000

use core_kernel::Money;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Field, FieldError, ValidationError};

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 100;
/// How far back from the current year a birth year may lie
pub const BIRTH_YEAR_WINDOW: i32 = 100;
pub const MAX_SUM_INSURED: Decimal = dec!(10000000);

/// Month and year of birth, parsed from `MM/YYYY`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct BirthMonth {
    pub year: i32,
    pub month: u32,
}

impl FromStr for BirthMonth {
    type Err = ValidationError;

    /// Accepts exactly `^(0[1-9]|1[0-2])/\d{4}$`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [m1, m2, b'/', year @ ..] = s.as_bytes() else {
            return Err(ValidationError::InvalidFormat);
        };

        if !m1.is_ascii_digit()
            || !m2.is_ascii_digit()
            || year.len() != 4
            || !year.iter().all(u8::is_ascii_digit)
        {
            return Err(ValidationError::InvalidFormat);
        }

        let month = u32::from((m1 - b'0') * 10 + (m2 - b'0'));
        if !(1..=12).contains(&month) {
            return Err(ValidationError::InvalidFormat);
        }

        let year = year
            .iter()
            .fold(0i32, |acc, digit| acc * 10 + i32::from(digit - b'0'));

        Ok(Self { year, month })
    }
}

impl fmt::Display for BirthMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

/// Validates the applicant's name
///
/// The minimum length counts trimmed characters, the maximum counts the raw
/// value, so surrounding spaces can push a name over the limit.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() < NAME_MIN_LENGTH {
        return Err(ValidationError::TooShort { min: NAME_MIN_LENGTH });
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(ValidationError::TooLong { max: NAME_MAX_LENGTH });
    }
    Ok(())
}

/// Validates age next birthday, returning it as an unsigned age
pub fn validate_age(age: Option<i64>) -> Result<u32, ValidationError> {
    let age = age.ok_or(ValidationError::Required)?;

    if age < i64::from(MIN_AGE) {
        return Err(ValidationError::TooYoung { min: MIN_AGE });
    }
    if age > i64::from(MAX_AGE) {
        return Err(ValidationError::TooOld { max: MAX_AGE });
    }

    u32::try_from(age).map_err(|_| ValidationError::TooOld { max: MAX_AGE })
}

/// Validates a `MM/YYYY` date of birth against the current year
///
/// # Arguments
///
/// * `value` - Raw field text
/// * `current_year` - Calendar year at calculation time
///
/// # Returns
///
/// The parsed birth month, or `Required`, `InvalidFormat` or
/// `InvalidYear { min, max }`
pub fn validate_date_of_birth(value: &str, current_year: i32) -> Result<BirthMonth, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }

    let birth: BirthMonth = value.parse()?;

    let min = current_year - BIRTH_YEAR_WINDOW;
    if birth.year < min || birth.year > current_year {
        return Err(ValidationError::InvalidYear { min, max: current_year });
    }

    Ok(birth)
}

/// Validates that an occupation code was supplied
pub fn validate_occupation_code(code: &str) -> Result<(), ValidationError> {
    if code.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    Ok(())
}

/// Validates the death sum insured
///
/// Zero counts as "not supplied", matching how an untouched numeric form
/// control reads.
pub fn validate_sum_insured(amount: Option<Decimal>) -> Result<Money, ValidationError> {
    let sum_insured = match amount.map(Money::usd) {
        Some(money) if !money.is_zero() => money,
        _ => return Err(ValidationError::Required),
    };

    if sum_insured.is_negative() {
        return Err(ValidationError::TooLow);
    }
    if sum_insured.amount() > MAX_SUM_INSURED {
        return Err(ValidationError::TooHigh { max: MAX_SUM_INSURED });
    }

    Ok(sum_insured)
}

/// Result of validating every field of a quote input
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    /// Creates an empty (passing) report
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for a field
    pub fn add(&mut self, field: Field, error: ValidationError) {
        self.errors.push(FieldError::new(field, error));
    }

    /// Records the outcome of a validator, passing the value through on success
    pub fn capture<T>(&mut self, field: Field, outcome: Result<T, ValidationError>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(field, error);
                None
            }
        }
    }

    /// Whether every field passed
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// All failures in field order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The failure recorded for a field, if any
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|failure| failure.field == field)
            .map(|failure| &failure.error)
    }

    /// Whether a field failed
    pub fn has_error(&self, field: Field) -> bool {
        self.error_for(field).is_some()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("valid");
        }
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}
