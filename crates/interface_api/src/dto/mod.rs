//! Data transfer objects

pub mod premium;
