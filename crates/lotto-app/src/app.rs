//! Application state and eframe integration.

use eframe::egui::{self, Color32, RichText};
use lotto_core::clock::Clock;
use lotto_core::rng::RandomSource;
use lotto_draw::application::command_handlers::handle_generate_ticket;
use lotto_draw::application::query_handlers::{TicketView, ticket_view};
use lotto_draw::domain::commands::GenerateTicket;
use lotto_draw::domain::config::LotteryConfig;
use lotto_draw::domain::ticket::Ticket;
use tracing::debug;

use crate::theme::Theme;

/// Heading and window title.
pub const WINDOW_TITLE: &str = "EuroMillions Number Picker";

/// Fixed inner size of the window, in points.
pub const WINDOW_SIZE: [f32; 2] = [480.0, 480.0];

const MAIN_LABEL: &str = "Your Numbers";
const BONUS_LABEL: &str = "Lucky Stars";
const BUTTON_LABEL: &str = "Generate Numbers";

const TILE_SIZE: egui::Vec2 = egui::vec2(44.0, 36.0);
const TILE_SPACING: f32 = 10.0;
const BUTTON_HEIGHT: f32 = 48.0;

/// The picker window: a lottery config, its sources, and the last ticket.
pub struct LottoApp {
    config: LotteryConfig,
    theme: Theme,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    ticket: Option<Ticket>,
}

impl LottoApp {
    /// Create the application. Nothing is drawn until the first
    /// [`generate`](Self::generate).
    #[must_use]
    pub fn new(
        config: LotteryConfig,
        theme: Theme,
        clock: Box<dyn Clock>,
        rng: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            config,
            theme,
            clock,
            rng,
            ticket: None,
        }
    }

    /// Draws a new ticket and puts it on display.
    pub fn generate(&mut self) {
        let command = GenerateTicket::new();
        let ticket =
            handle_generate_ticket(&command, &self.config, self.clock.as_ref(), self.rng.as_mut());
        self.ticket = Some(ticket);
    }

    /// The ticket currently on display, if any.
    #[must_use]
    pub fn ticket(&self) -> Option<&Ticket> {
        self.ticket.as_ref()
    }

    /// Slot texts for the current state.
    #[must_use]
    pub fn view(&self) -> TicketView {
        ticket_view(&self.config, self.ticket.as_ref())
    }

    fn number_group(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        slots: &[String],
        fill: Color32,
        text_color: Color32,
    ) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(RichText::new(label).font(self.theme.label_font()));
            ui.add_space(5.0);

            #[allow(clippy::cast_precision_loss)]
            let row_width = slots.len() as f32 * (TILE_SIZE.x + TILE_SPACING) - TILE_SPACING;
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = TILE_SPACING;
                ui.add_space(((ui.available_width() - row_width) / 2.0).max(0.0));
                for text in slots {
                    self.tile(ui, text, fill, text_color);
                }
            });
        });
    }

    fn tile(&self, ui: &mut egui::Ui, text: &str, fill: Color32, text_color: Color32) {
        egui::Frame::new()
            .fill(fill)
            .stroke(egui::Stroke::new(2.0, self.theme.tile_border))
            .show(ui, |ui| {
                ui.add_sized(
                    TILE_SIZE,
                    egui::Label::new(
                        RichText::new(text)
                            .font(self.theme.number_font())
                            .color(text_color),
                    ),
                );
            });
    }
}

impl eframe::App for LottoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.view();

        let clicked = egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.label(RichText::new(WINDOW_TITLE).font(self.theme.title_font()));
                ui.add_space(10.0);
            });

            egui::Frame::new()
                .fill(self.theme.frame_bg)
                .stroke(egui::Stroke::new(2.0, self.theme.window_bg.gamma_multiply(0.6)))
                .inner_margin(egui::Margin::same(10))
                .outer_margin(egui::Margin::symmetric(20, 10))
                .show(ui, |ui| {
                    self.number_group(
                        ui,
                        MAIN_LABEL,
                        &view.main_numbers.slots,
                        self.theme.numbers_color,
                        self.theme.text_color,
                    );
                    self.number_group(
                        ui,
                        BONUS_LABEL,
                        &view.bonus_numbers.slots,
                        self.theme.stars_color,
                        self.theme.stars_text_color,
                    );
                    ui.add_space(10.0);
                });

            ui.add_space(20.0);
            let clicked = ui
                .horizontal(|ui| {
                    ui.add_space(20.0);
                    let button = egui::Button::new(
                        RichText::new(BUTTON_LABEL).font(self.theme.button_font()),
                    );
                    ui.add_sized([ui.available_width() - 20.0, BUTTON_HEIGHT], button)
                        .clicked()
                })
                .inner;

            if let Some(drawn_at) = &view.drawn_at {
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(format!("Last drawn at {drawn_at}")).small());
                });
            }

            clicked
        })
        .inner;

        if clicked {
            debug!("generate button clicked");
            self.generate();
        }
    }
}
