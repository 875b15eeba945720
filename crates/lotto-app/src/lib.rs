//! Lotto Picker desktop shell.
//!
//! Owns the window, the theme, and the wiring between the button and the
//! drawing context. Holds no drawing logic of its own.

pub mod app;
pub mod error;
pub mod theme;
