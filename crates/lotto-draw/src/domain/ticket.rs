//! The ticket produced by one "generate" action.

use chrono::{DateTime, Local};

use super::draw::Draw;

/// Main and bonus numbers drawn together, stamped with the time of the draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Numbers drawn for the main group.
    pub main_numbers: Draw,
    /// Numbers drawn for the bonus group.
    pub bonus_numbers: Draw,
    /// When the ticket was drawn.
    pub drawn_at: DateTime<Local>,
}
