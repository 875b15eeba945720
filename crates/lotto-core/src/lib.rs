//! Lotto Core — shared domain abstractions.
//!
//! This crate defines the ports the drawer and the desktop shell depend on,
//! plus their production adapters. It contains no UI code.

pub mod clock;
pub mod command;
pub mod error;
pub mod rng;
