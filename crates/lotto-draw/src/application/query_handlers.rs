//! Query handlers for the drawing context.
//!
//! Turns the latest ticket into read-only slot text for the display layer.

use crate::domain::config::{DrawConfig, LotteryConfig};
use crate::domain::draw::Draw;
use crate::domain::ticket::Ticket;

/// Time format shown next to the last draw.
const DRAWN_AT_FORMAT: &str = "%H:%M:%S";

/// Read-only view of one number group: one text per display slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupView {
    /// Slot texts, in ascending number order. Blank before the first draw.
    pub slots: Vec<String>,
}

impl GroupView {
    fn blank(config: &DrawConfig) -> Self {
        Self {
            slots: vec![String::new(); config.count() as usize],
        }
    }

    fn from_draw(draw: &Draw) -> Self {
        Self {
            slots: draw.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Read-only view of the ticket currently on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketView {
    /// Slots for the main numbers.
    pub main_numbers: GroupView,
    /// Slots for the bonus numbers.
    pub bonus_numbers: GroupView,
    /// Formatted time of the draw, if any.
    pub drawn_at: Option<String>,
}

/// Builds the view for `ticket`, or blank slots sized from `config` when
/// nothing has been drawn yet.
#[must_use]
pub fn ticket_view(config: &LotteryConfig, ticket: Option<&Ticket>) -> TicketView {
    match ticket {
        Some(ticket) => TicketView {
            main_numbers: GroupView::from_draw(&ticket.main_numbers),
            bonus_numbers: GroupView::from_draw(&ticket.bonus_numbers),
            drawn_at: Some(ticket.drawn_at.format(DRAWN_AT_FORMAT).to_string()),
        },
        None => TicketView {
            main_numbers: GroupView::blank(config.main_numbers()),
            bonus_numbers: GroupView::blank(config.bonus_numbers()),
            drawn_at: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, TimeZone};
    use lotto_test_support::{FixedClock, SequenceRandom};

    use super::*;
    use crate::application::command_handlers::handle_generate_ticket;
    use crate::domain::commands::GenerateTicket;

    #[test]
    fn test_view_before_first_draw_is_blank() {
        let config = LotteryConfig::euromillions().unwrap();

        let view = ticket_view(&config, None);

        assert_eq!(view.main_numbers.slots, vec![String::new(); 5]);
        assert_eq!(view.bonus_numbers.slots, vec![String::new(); 2]);
        assert_eq!(view.drawn_at, None);
    }

    #[test]
    fn test_view_slot_text_matches_drawn_numbers() {
        let config = LotteryConfig::euromillions().unwrap();
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 1, 15, 10, 4, 5).unwrap());
        let mut rng = SequenceRandom::new(vec![2, 16, 21, 40, 48, 3, 8]);
        let ticket = handle_generate_ticket(&GenerateTicket::new(), &config, &clock, &mut rng);

        let view = ticket_view(&config, Some(&ticket));

        assert_eq!(view.main_numbers.slots, ["3", "17", "22", "41", "49"]);
        assert_eq!(view.bonus_numbers.slots, ["4", "9"]);
        assert_eq!(view.drawn_at.as_deref(), Some("10:04:05"));
    }

    #[test]
    fn test_view_slots_follow_draw_order() {
        let config = LotteryConfig::euromillions().unwrap();
        let clock = FixedClock(Local.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap());
        let mut rng = SequenceRandom::new(vec![40, 2, 21, 16, 48, 8, 3]);
        let ticket = handle_generate_ticket(&GenerateTicket::new(), &config, &clock, &mut rng);

        let view = ticket_view(&config, Some(&ticket));

        for (slot, number) in view.main_numbers.slots.iter().zip(&ticket.main_numbers) {
            assert_eq!(*slot, number.to_string());
        }
        for (slot, number) in view.bonus_numbers.slots.iter().zip(&ticket.bonus_numbers) {
            assert_eq!(*slot, number.to_string());
        }
    }
}
