//! egui Visuals for every theme
//!
//! Converts a `ThemeColors` palette into egui's `Visuals`, starting from
//! egui's own dark or light baseline.

use eframe::egui::{self, Color32, Rounding, Stroke, Visuals};

use super::ThemeColors;
use crate::config::Theme;

/// Corner radius for widgets.
const WIDGET_ROUNDING: f32 = 4.0;

/// Corner radius for windows and modals.
const WINDOW_ROUNDING: f32 = 8.0;

/// Create egui Visuals for `theme`.
pub fn create_visuals(theme: Theme) -> Visuals {
    let colors = ThemeColors::from_theme(theme);

    let mut visuals = if colors.dark {
        Visuals::dark()
    } else {
        Visuals::light()
    };

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Panel Background
    // ─────────────────────────────────────────────────────────────────────────
    visuals.panel_fill = colors.background;
    visuals.window_fill = colors.background;
    visuals.extreme_bg_color = colors.editor_background;
    visuals.faint_bg_color = colors.background_secondary;
    visuals.code_bg_color = colors.editor_background;

    // ─────────────────────────────────────────────────────────────────────────
    // Text & Selection
    // ─────────────────────────────────────────────────────────────────────────
    visuals.override_text_color = Some(colors.text);
    visuals.hyperlink_color = colors.accent;
    visuals.selection.bg_fill = colors.selection;
    visuals.selection.stroke = Stroke::new(1.0, colors.accent);

    // ─────────────────────────────────────────────────────────────────────────
    // Widget Styling
    // ─────────────────────────────────────────────────────────────────────────
    visuals.widgets.noninteractive.bg_fill = colors.background_secondary;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);

    visuals.widgets.inactive.bg_fill = colors.background_secondary;
    visuals.widgets.inactive.weak_bg_fill = colors.background_secondary;
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text_muted);

    visuals.widgets.hovered.bg_fill = colors.selection;
    visuals.widgets.hovered.weak_bg_fill = colors.selection;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, colors.text);

    visuals.widgets.active.bg_fill = colors.accent;
    visuals.widgets.active.weak_bg_fill = colors.selection;
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.accent);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, colors.text);

    visuals.widgets.open.bg_fill = colors.selection;
    visuals.widgets.open.bg_stroke = Stroke::new(1.0, colors.accent);

    for widget in [
        &mut visuals.widgets.noninteractive,
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.hovered,
        &mut visuals.widgets.active,
        &mut visuals.widgets.open,
    ] {
        widget.rounding = Rounding::same(WIDGET_ROUNDING);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Window & Popup Styling
    // ─────────────────────────────────────────────────────────────────────────
    visuals.window_rounding = Rounding::same(WINDOW_ROUNDING);
    visuals.window_stroke = Stroke::new(1.0, colors.border);
    visuals.window_shadow = egui::epaint::Shadow {
        offset: egui::vec2(0.0, 4.0),
        blur: 16.0,
        spread: 0.0,
        color: Color32::from_black_alpha(if colors.dark { 80 } else { 40 }),
    };
    visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);

    visuals.dark_mode = colors.dark;
    visuals
}
