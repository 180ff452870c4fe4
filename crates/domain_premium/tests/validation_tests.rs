//! Field Validation Tests
//!
//! Boundary tests for each field validator, plus the serialized shape of
//! validation errors.
//!
//! # Test Organization
//!
//! - `name_tests` - Name presence and length
//! - `age_tests` - Age next birthday range
//! - `date_of_birth_tests` - `MM/YYYY` structure and year window
//! - `occupation_tests` - Occupation presence
//! - `sum_insured_tests` - Death sum insured range
//! - `error_shape_tests` - Messages and JSON form

use domain_premium::validation::{
    validate_age, validate_date_of_birth, validate_name, validate_occupation_code,
    validate_sum_insured, MAX_SUM_INSURED,
};
use domain_premium::{BirthMonth, Field, FieldError, ValidationError};
use proptest::prelude::*;
use rust_decimal_macros::dec;

// ============================================================================
// NAME TESTS
// ============================================================================

mod name_tests {
    use super::*;

    #[test]
    fn test_accepts_two_characters() {
        assert_eq!(validate_name("Al"), Ok(()));
    }

    #[test]
    fn test_one_character_is_too_short() {
        assert_eq!(validate_name("A"), Err(ValidationError::TooShort { min: 2 }));
    }

    /// Surrounding whitespace does not count toward the minimum
    #[test]
    fn test_padded_single_character_is_too_short() {
        assert_eq!(validate_name("  A  "), Err(ValidationError::TooShort { min: 2 }));
    }

    #[test]
    fn test_blank_is_required() {
        assert_eq!(validate_name(""), Err(ValidationError::Required));
        assert_eq!(validate_name("   "), Err(ValidationError::Required));
    }

    #[test]
    fn test_length_limit() {
        assert_eq!(validate_name(&"a".repeat(100)), Ok(()));
        assert_eq!(
            validate_name(&"a".repeat(101)),
            Err(ValidationError::TooLong { max: 100 })
        );
    }

    /// Padding counts toward the maximum but not the minimum
    #[test]
    fn test_padding_counts_toward_maximum() {
        let padded = format!("Al{}", " ".repeat(99));
        assert_eq!(validate_name(&padded), Err(ValidationError::TooLong { max: 100 }));
        assert_eq!(validate_name("  Al  "), Ok(()));
    }

    /// Length is counted in characters, not bytes
    #[test]
    fn test_length_counts_characters() {
        assert_eq!(validate_name(&"é".repeat(100)), Ok(()));
    }
}

// ============================================================================
// AGE TESTS
// ============================================================================

mod age_tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(validate_age(Some(1)), Ok(1));
        assert_eq!(validate_age(Some(100)), Ok(100));
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(validate_age(Some(0)), Err(ValidationError::TooYoung { min: 1 }));
        assert_eq!(validate_age(Some(-4)), Err(ValidationError::TooYoung { min: 1 }));
        assert_eq!(validate_age(Some(101)), Err(ValidationError::TooOld { max: 100 }));
        assert_eq!(validate_age(Some(i64::MAX)), Err(ValidationError::TooOld { max: 100 }));
    }

    #[test]
    fn test_missing_is_required() {
        assert_eq!(validate_age(None), Err(ValidationError::Required));
    }

    proptest! {
        #[test]
        fn test_in_range_ages_pass_through(age in 1i64..=100) {
            prop_assert_eq!(validate_age(Some(age)), Ok(age as u32));
        }
    }
}

// ============================================================================
// DATE OF BIRTH TESTS
// ============================================================================

mod date_of_birth_tests {
    use super::*;

    const YEAR: i32 = 2024;

    #[test]
    fn test_valid_date() {
        assert_eq!(
            validate_date_of_birth("06/1979", YEAR),
            Ok(BirthMonth { year: 1979, month: 6 })
        );
    }

    #[test]
    fn test_year_window_edges() {
        assert!(validate_date_of_birth("01/1924", YEAR).is_ok());
        assert!(validate_date_of_birth("12/2024", YEAR).is_ok());

        let outside = ValidationError::InvalidYear { min: 1924, max: 2024 };
        assert_eq!(validate_date_of_birth("12/1923", YEAR), Err(outside.clone()));
        assert_eq!(validate_date_of_birth("01/2025", YEAR), Err(outside));
    }

    /// Month 13 is a structural failure, never a separate month error
    #[test]
    fn test_bad_month_is_format_error() {
        assert_eq!(validate_date_of_birth("13/2000", YEAR), Err(ValidationError::InvalidFormat));
        assert_eq!(validate_date_of_birth("00/2000", YEAR), Err(ValidationError::InvalidFormat));
    }

    #[test]
    fn test_structural_failures() {
        for raw in ["1/2000", "01/00", "01-2000", "2000/01", "01/2000/", "ab/cdef", " 01/2000"] {
            assert_eq!(
                validate_date_of_birth(raw, YEAR),
                Err(ValidationError::InvalidFormat),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn test_blank_is_required() {
        assert_eq!(validate_date_of_birth("", YEAR), Err(ValidationError::Required));
        assert_eq!(validate_date_of_birth("  ", YEAR), Err(ValidationError::Required));
    }

    /// The window follows whatever year the caller supplies
    #[test]
    fn test_window_moves_with_current_year() {
        assert!(validate_date_of_birth("03/1925", 2025).is_ok());
        assert_eq!(
            validate_date_of_birth("03/1924", 2025),
            Err(ValidationError::InvalidYear { min: 1925, max: 2025 })
        );
    }

    proptest! {
        #[test]
        fn test_every_month_in_window_passes(month in 1u32..=12, offset in 0i32..=100) {
            let year = YEAR - offset;
            let raw = format!("{month:02}/{year}");
            prop_assert_eq!(validate_date_of_birth(&raw, YEAR), Ok(BirthMonth { year, month }));
        }
    }
}

// ============================================================================
// OCCUPATION TESTS
// ============================================================================

mod occupation_tests {
    use super::*;

    #[test]
    fn test_presence_only() {
        assert_eq!(validate_occupation_code("doctor"), Ok(()));
        assert_eq!(validate_occupation_code("astronaut"), Ok(()));
        assert_eq!(validate_occupation_code(""), Err(ValidationError::Required));
    }
}

// ============================================================================
// SUM INSURED TESTS
// ============================================================================

mod sum_insured_tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(validate_sum_insured(Some(dec!(1))).map(|m| m.amount()), Ok(dec!(1)));
        assert_eq!(
            validate_sum_insured(Some(dec!(10000000))).map(|m| m.amount()),
            Ok(dec!(10000000))
        );
        assert_eq!(
            validate_sum_insured(Some(dec!(10000000.01))),
            Err(ValidationError::TooHigh { max: MAX_SUM_INSURED })
        );
    }

    #[test]
    fn test_fractional_amount_is_kept() {
        assert_eq!(validate_sum_insured(Some(dec!(0.01))).map(|m| m.amount()), Ok(dec!(0.01)));
    }

    #[test]
    fn test_zero_or_missing_is_required() {
        assert_eq!(validate_sum_insured(None), Err(ValidationError::Required));
        assert_eq!(validate_sum_insured(Some(dec!(0))), Err(ValidationError::Required));
    }

    #[test]
    fn test_negative_is_too_low() {
        assert_eq!(validate_sum_insured(Some(dec!(-1))), Err(ValidationError::TooLow));
    }
}

// ============================================================================
// ERROR SHAPE TESTS
// ============================================================================

mod error_shape_tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required.to_string(), "This field is required");
        assert_eq!(
            ValidationError::InvalidYear { min: 1924, max: 2024 }.to_string(),
            "Year must be between 1924 and 2024"
        );
        assert_eq!(
            ValidationError::TooHigh { max: MAX_SUM_INSURED }.to_string(),
            "Amount must not exceed $10,000,000.00"
        );
    }

    #[test]
    fn test_json_is_tagged() {
        let json = serde_json::to_value(ValidationError::TooShort { min: 2 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "tooShort", "min": 2 }));

        let json = serde_json::to_value(ValidationError::InvalidFormat).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "invalidFormat" }));
    }

    #[test]
    fn test_field_error_display() {
        let failure = FieldError::new(Field::AgeNextBirthday, ValidationError::TooOld { max: 100 });
        assert_eq!(failure.to_string(), "Age next birthday: Age must be at most 100");
    }
}
