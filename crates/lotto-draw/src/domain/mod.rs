//! Domain model for the drawing context.

pub mod commands;
pub mod config;
pub mod draw;
pub mod ticket;
