//! Lotto Picker — number drawing context.
//!
//! Responsible for validating draw configurations, sampling distinct
//! numbers, and assembling the two groups of one ticket.

pub mod application;
pub mod domain;
