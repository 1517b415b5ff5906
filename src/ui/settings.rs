//! Settings Panel Component for StatCode
//!
//! This module implements the modal settings form. The form edits a draft;
//! nothing changes until the user presses Save.

use crate::config::{Settings, Theme};
use crate::i18n::Strings;
use eframe::egui::{self, Color32, RichText};

/// Result of showing the settings panel.
#[derive(Debug, Clone, Default)]
pub struct SettingsPanelOutput {
    /// Settings the user saved, already sanitized.
    pub saved: Option<Settings>,
    /// Whether the panel should be closed without saving.
    pub close_requested: bool,
}

/// Draft values shown in the form.
#[derive(Debug, Clone)]
pub struct SettingsPanel {
    theme: Theme,
    font_size: String,
    autosave_interval: String,
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl SettingsPanel {
    /// Create a form prefilled with `settings`.
    pub fn new(settings: &Settings) -> Self {
        Self {
            theme: settings.theme,
            font_size: settings.font_size.to_string(),
            autosave_interval: settings.autosave_interval.to_string(),
        }
    }

    /// Reset the draft to `settings`. Called when the panel opens.
    pub fn load(&mut self, settings: &Settings) {
        *self = Self::new(settings);
    }

    /// The draft as settings. Unparseable numbers fall back to defaults.
    pub fn to_settings(&self) -> Settings {
        Settings {
            theme: self.theme,
            font_size: parse_number(&self.font_size),
            autosave_interval: parse_number(&self.autosave_interval),
        }
        .sanitized()
    }

    /// Show the settings panel as a modal window.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        strings: &Strings,
        is_dark: bool,
    ) -> SettingsPanelOutput {
        let mut output = SettingsPanelOutput::default();

        let screen_rect = ctx.screen_rect();
        let overlay_color = if is_dark {
            Color32::from_rgba_unmultiplied(0, 0, 0, 180)
        } else {
            Color32::from_rgba_unmultiplied(0, 0, 0, 120)
        };

        egui::Area::new(egui::Id::new("settings_overlay"))
            .order(egui::Order::Middle)
            .fixed_pos(screen_rect.min)
            .show(ctx, |ui| {
                let response = ui.allocate_response(screen_rect.size(), egui::Sense::click());
                ui.painter().rect_filled(screen_rect, 0.0, overlay_color);
                if response.clicked() {
                    output.close_requested = true;
                }
            });

        egui::Window::new(format!("⚙ {}", strings.settings_title))
            .id(egui::Id::new("settings_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .min_width(320.0)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    output.close_requested = true;
                }

                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([16.0, 10.0])
                    .show(ui, |ui| {
                        ui.label(RichText::new(strings.theme).strong());
                        egui::ComboBox::from_id_source("settings_theme")
                            .selected_text(self.theme.label())
                            .show_ui(ui, |ui| {
                                for theme in Theme::all() {
                                    ui.selectable_value(&mut self.theme, *theme, theme.label());
                                }
                            });
                        ui.end_row();

                        ui.label(RichText::new(strings.font_size).strong());
                        ui.add(egui::TextEdit::singleline(&mut self.font_size).desired_width(80.0));
                        ui.end_row();

                        ui.label(RichText::new(strings.autosave_interval).strong());
                        ui.add(
                            egui::TextEdit::singleline(&mut self.autosave_interval)
                                .desired_width(80.0),
                        );
                        ui.end_row();
                    });

                ui.separator();

                ui.horizontal(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button(strings.save_settings).clicked() {
                            output.saved = Some(self.to_settings());
                        }
                        if ui.button(strings.cancel).clicked() {
                            output.close_requested = true;
                        }
                    });
                });
            });

        output
    }
}

/// Parse a positive integer field; anything else reads as zero.
fn parse_number(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_panel_prefills_draft() {
        let settings = Settings {
            theme: Theme::Gradient,
            font_size: 20,
            autosave_interval: 15,
        };
        let panel = SettingsPanel::new(&settings);
        assert_eq!(panel.font_size, "20");
        assert_eq!(panel.to_settings(), settings);
    }

    #[test]
    fn test_invalid_numbers_fall_back_to_defaults() {
        let mut panel = SettingsPanel::default();
        panel.font_size = "big".to_string();
        panel.autosave_interval = "0".to_string();
        let settings = panel.to_settings();
        assert_eq!(settings.font_size, Settings::DEFAULT_FONT_SIZE);
        assert_eq!(settings.autosave_interval, Settings::DEFAULT_AUTOSAVE_INTERVAL);
    }

    #[test]
    fn test_out_of_range_numbers_are_clamped() {
        let mut panel = SettingsPanel::default();
        panel.font_size = " 2 ".to_string();
        panel.autosave_interval = "99999".to_string();
        let settings = panel.to_settings();
        assert_eq!(settings.font_size, Settings::MIN_FONT_SIZE);
        assert_eq!(settings.autosave_interval, Settings::MAX_AUTOSAVE_INTERVAL);
    }

    #[test]
    fn test_load_replaces_draft() {
        let mut panel = SettingsPanel::default();
        panel.font_size = "junk".to_string();
        panel.load(&Settings::default());
        assert_eq!(panel.to_settings(), Settings::default());
    }

    #[test]
    fn test_settings_panel_output_default() {
        let output = SettingsPanelOutput::default();
        assert!(output.saved.is_none());
        assert!(!output.close_requested);
    }
}
