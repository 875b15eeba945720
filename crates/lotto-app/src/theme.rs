//! Static styling for the picker window.

use eframe::egui::{self, Color32, FontId};

/// Colors and font sizes used by the window. Built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Window background.
    pub window_bg: Color32,
    /// Background of the results panel.
    pub frame_bg: Color32,
    /// Default text color.
    pub text_color: Color32,
    /// Button fill at rest.
    pub button_bg: Color32,
    /// Button fill while hovered or pressed.
    pub button_active_bg: Color32,
    /// Tile fill for the main numbers.
    pub numbers_color: Color32,
    /// Tile fill for the bonus numbers.
    pub stars_color: Color32,
    /// Text color on bonus tiles.
    pub stars_text_color: Color32,
    /// Tile border color.
    pub tile_border: Color32,
    /// Heading size in points.
    pub title_size: f32,
    /// Group label size in points.
    pub label_size: f32,
    /// Tile number size in points.
    pub number_size: f32,
    /// Button label size in points.
    pub button_size: f32,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            window_bg: Color32::from_rgb(0x2e, 0x2e, 0x2e),
            frame_bg: Color32::from_rgb(0x3e, 0x3e, 0x3e),
            text_color: Color32::WHITE,
            button_bg: Color32::from_rgb(0x4a, 0x4a, 0x4a),
            button_active_bg: Color32::from_rgb(0x5a, 0x5a, 0x5a),
            numbers_color: Color32::from_rgb(0x00, 0x33, 0x66),
            stars_color: Color32::from_rgb(0xff, 0xd7, 0x00),
            stars_text_color: Color32::BLACK,
            tile_border: Color32::BLACK,
            title_size: 20.0,
            label_size: 14.0,
            number_size: 16.0,
            button_size: 12.0,
        }
    }
}

impl Theme {
    /// Installs the window-wide parts of the theme into the egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.visuals.panel_fill = self.window_bg;
            style.visuals.override_text_color = Some(self.text_color);
            style.visuals.widgets.inactive.weak_bg_fill = self.button_bg;
            style.visuals.widgets.hovered.weak_bg_fill = self.button_active_bg;
            style.visuals.widgets.active.weak_bg_fill = self.button_active_bg;
        });
    }

    /// Font for the window heading.
    #[must_use]
    pub fn title_font(&self) -> FontId {
        FontId::proportional(self.title_size)
    }

    /// Font for group labels.
    #[must_use]
    pub fn label_font(&self) -> FontId {
        FontId::proportional(self.label_size)
    }

    /// Font for numbers inside tiles.
    #[must_use]
    pub fn number_font(&self) -> FontId {
        FontId::monospace(self.number_size)
    }

    /// Font for the button label.
    #[must_use]
    pub fn button_font(&self) -> FontId {
        FontId::proportional(self.button_size)
    }
}
