//! Test Data Builders
//!
//! Provides a builder for premium inputs with sensible defaults, so tests
//! only spell out the field they are exercising.

use domain_premium::PremiumInput;
use rust_decimal::Decimal;

use crate::fixtures::InputFixtures;

/// Builder for constructing premium inputs
///
/// Starts from a valid doctor quote.
pub struct PremiumInputBuilder {
    input: PremiumInput,
}

impl Default for PremiumInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PremiumInputBuilder {
    /// Creates a new builder with valid default values
    pub fn new() -> Self {
        Self {
            input: InputFixtures::valid(),
        }
    }

    /// Creates a builder with every field empty
    pub fn empty() -> Self {
        Self {
            input: InputFixtures::empty(),
        }
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.input.name = name.into();
        self
    }

    /// Sets the age next birthday
    pub fn with_age(mut self, age: i64) -> Self {
        self.input.age_next_birthday = Some(age);
        self
    }

    /// Clears the age next birthday
    pub fn without_age(mut self) -> Self {
        self.input.age_next_birthday = None;
        self
    }

    /// Sets the raw date of birth text
    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.input.date_of_birth = dob.into();
        self
    }

    /// Sets the occupation code
    pub fn with_occupation(mut self, code: impl Into<String>) -> Self {
        self.input.occupation_code = code.into();
        self
    }

    /// Sets the death sum insured
    pub fn with_sum_insured(mut self, amount: Decimal) -> Self {
        self.input.death_sum_insured = Some(amount);
        self
    }

    /// Clears the death sum insured
    pub fn without_sum_insured(mut self) -> Self {
        self.input.death_sum_insured = None;
        self
    }

    /// Builds the input
    pub fn build(self) -> PremiumInput {
        self.input
    }
}
