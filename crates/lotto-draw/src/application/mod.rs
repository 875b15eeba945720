//! Application services for the drawing context.

pub mod command_handlers;
pub mod query_handlers;
