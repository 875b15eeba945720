//! Commands for the drawing context.

use lotto_core::command::Command;
use uuid::Uuid;

/// Command to draw a fresh ticket (main and bonus numbers).
#[derive(Debug, Clone)]
pub struct GenerateTicket {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl GenerateTicket {
    /// Creates a command with a fresh correlation ID.
    #[must_use]
    pub fn new() -> Self {
        Self {
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl Default for GenerateTicket {
    fn default() -> Self {
        Self::new()
    }
}

impl Command for GenerateTicket {
    fn command_type(&self) -> &'static str {
        "draw.generate_ticket"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
