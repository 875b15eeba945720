//! Command handlers for the drawing context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: draw both groups, stamp the ticket, log it.

use lotto_core::clock::Clock;
use lotto_core::command::Command;
use lotto_core::rng::RandomSource;
use tracing::{info, instrument};

use crate::domain::commands::GenerateTicket;
use crate::domain::config::LotteryConfig;
use crate::domain::draw::draw;
use crate::domain::ticket::Ticket;

/// Handles the `GenerateTicket` command: draws the main numbers, then the
/// bonus numbers, from the same source, and stamps the result.
///
/// The two groups are drawn independently; the configs were validated when
/// `config` was built, so this cannot fail.
#[instrument(
    skip_all,
    fields(
        command_type = command.command_type(),
        correlation_id = %command.correlation_id(),
        lottery = config.name(),
    )
)]
pub fn handle_generate_ticket(
    command: &GenerateTicket,
    config: &LotteryConfig,
    clock: &dyn Clock,
    rng: &mut dyn RandomSource,
) -> Ticket {
    let main_numbers = draw(config.main_numbers(), rng);
    let bonus_numbers = draw(config.bonus_numbers(), rng);
    let drawn_at = clock.now();

    info!(
        main_numbers = %main_numbers,
        bonus_numbers = %bonus_numbers,
        "ticket generated"
    );

    Ticket {
        main_numbers,
        bonus_numbers,
        drawn_at,
    }
}
