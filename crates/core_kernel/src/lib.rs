//! Core Kernel - Foundational types for the premium quote engine
//!
//! This crate provides the building blocks shared by the domain and API layers:
//! - Money types with precise decimal arithmetic and half-up rounding
//! - Fixed-locale currency formatting (`$1,234.56`)
//! - Clock and timezone types used to resolve "the current year"

pub mod money;
pub mod temporal;
pub mod error;

pub use money::{Money, Currency, format_currency, round_half_up};
pub use temporal::{Clock, SystemClock, FixedClock, Timezone, TemporalError};
pub use error::CoreError;
