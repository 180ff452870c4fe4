//! Premium Quote Domain
//!
//! This crate implements the quoting logic for a simple death-cover product.
//! It is infrastructure-agnostic: no I/O, no shared mutable state.
//!
//! # Components
//!
//! - **Occupation registry**: closed table of occupations and their rating factors
//! - **Validators**: one pure function per input field, each returning the
//!   normalized value or a single tagged [`ValidationError`]
//! - **Calculator**: validates a full [`PremiumInput`], resolves the rating
//!   factor and applies the pricing formula
//!
//! # Pricing formula
//!
//! ```text
//! monthly = (sum insured × factor × age next birthday) ÷ (1000 × 12)
//! annual  = monthly × 12
//! ```
//!
//! Both figures are rounded half away from zero to cents, each from the
//! unrounded intermediate.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_premium::{PremiumCalculator, PremiumInput};
//! use rust_decimal_macros::dec;
//!
//! let calculator = PremiumCalculator::default();
//! let input = PremiumInput::new("John Doe", 30, "01/1994", "doctor", dec!(100000));
//!
//! match calculator.quote(&input) {
//!     Ok(result) => println!("{} per month", result.monthly_premium),
//!     Err(report) => {
//!         for failure in report.errors() {
//!             println!("{}", failure);
//!         }
//!     }
//! }
//! ```

pub mod occupation;
pub mod validation;
pub mod premium;
pub mod calculator;
pub mod error;

pub use occupation::{
    Occupation, OccupationRating, RatingFactor,
    factor_for, lookup_by_code, occupations, rating_factors,
};
pub use validation::{BirthMonth, ValidationReport};
pub use premium::{PremiumInput, PremiumResult, PremiumBreakdown};
pub use calculator::PremiumCalculator;
pub use error::{Field, FieldError, ValidationError};
