//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_premium::{Field, PremiumResult, ValidationError, ValidationReport};

use crate::fixtures::QuoteScenario;

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {}",
        money
    );
}

/// Asserts that an amount carries at most cent precision
pub fn assert_cent_precision(money: &Money) {
    assert!(
        money.amount() == money.round_to_currency().amount(),
        "Expected at most 2 decimal places, got {}",
        money.amount()
    );
}

/// Asserts that a quote matches a worked scenario exactly
pub fn assert_quote_matches(result: &PremiumResult, scenario: &QuoteScenario) {
    assert_eq!(result.occupation_rating, scenario.rating, "rating for {:?}", scenario.input);
    assert_eq!(result.occupation_factor, scenario.factor, "factor for {:?}", scenario.input);
    assert_eq!(
        result.monthly_premium, scenario.monthly,
        "monthly premium for {:?}",
        scenario.input
    );
    assert_eq!(
        result.annual_premium, scenario.annual,
        "annual premium for {:?}",
        scenario.input
    );
}

/// Asserts that a report carries a specific error for a field
pub fn assert_field_error(report: &ValidationReport, field: Field, expected: &ValidationError) {
    match report.error_for(field) {
        Some(actual) => assert_eq!(actual, expected, "Wrong error for {}", field),
        None => panic!("Expected {} to fail with {:?}, report was: {}", field, expected, report),
    }
}

/// Asserts that exactly the given fields failed
pub fn assert_failed_fields(report: &ValidationReport, fields: &[Field]) {
    let failed: Vec<Field> = report.errors().iter().map(|failure| failure.field).collect();
    assert_eq!(failed, fields, "Unexpected failing fields, report was: {}", report);
}
