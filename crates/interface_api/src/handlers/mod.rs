//! Request handlers

pub mod health;
pub mod occupations;
pub mod premium;
