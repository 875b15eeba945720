//! Lotto Picker desktop entry point.

use eframe::egui;
use lotto_app::app::{LottoApp, WINDOW_SIZE, WINDOW_TITLE};
use lotto_app::error::AppError;
use lotto_app::theme::Theme;
use lotto_core::clock::SystemClock;
use lotto_core::rng::SystemRandom;
use lotto_draw::domain::config::LotteryConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Validate the preset before any window exists.
    let config = LotteryConfig::euromillions()?;
    tracing::info!(
        lottery = config.name(),
        main_numbers = %config.main_numbers(),
        bonus_numbers = %config.bonus_numbers(),
        "Starting Lotto Picker"
    );

    let theme = Theme::default();
    let app = LottoApp::new(
        config,
        theme.clone(),
        Box::new(SystemClock),
        Box::new(SystemRandom::new()),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        centered: true,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;

    tracing::info!("Window closed");
    Ok(())
}
