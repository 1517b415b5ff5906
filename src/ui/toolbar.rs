//! Toolbar UI Component for StatCode
//!
//! The strip above the workspace: editor visibility, the layout-mode handle
//! (click toggles tab mode, drag detaches), the project name field and the
//! project, export, settings and language buttons.

use crate::i18n::Strings;
use crate::layout::{DetachGesture, GestureOutcome};
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, Response, RichText, Sense, Ui, Vec2};
use log::debug;

/// Height of the toolbar.
pub const TOOLBAR_HEIGHT: f32 = 36.0;

/// Size of icon buttons.
const ICON_BUTTON_SIZE: Vec2 = Vec2::new(30.0, 26.0);

/// Actions that can be triggered from the toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarAction {
    ToggleEditors,
    /// Plain click on the layout handle
    ToggleTabMode,
    /// Layout handle dragged past the threshold
    Detach,
    Save,
    OpenProjects,
    NewProject,
    Export,
    OpenSettings,
    ToggleLanguage,
    OpenPreviewInBrowser,
}

/// What the toolbar needs to know about the current state.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarContext<'a> {
    pub strings: &'a Strings,
    pub colors: &'a ThemeColors,
    pub editors_visible: bool,
    pub tab_mode: bool,
    pub detached: bool,
    pub language_code: &'a str,
}

/// Render the toolbar and return any triggered action.
pub fn show_toolbar(
    ui: &mut Ui,
    cx: ToolbarContext<'_>,
    project_name: &mut String,
    gesture: &mut DetachGesture,
) -> Option<ToolbarAction> {
    let mut action = None;
    let strings = cx.strings;

    ui.painter()
        .rect_filled(ui.available_rect_before_wrap(), 0.0, cx.colors.toolbar);

    ui.horizontal(|ui| {
        ui.set_height(TOOLBAR_HEIGHT);
        ui.spacing_mut().item_spacing.x = 4.0;

        // ═══════════════════════════════════════════════════════════════════
        // Layout Group
        // ═══════════════════════════════════════════════════════════════════
        let (icon, tooltip) = if cx.editors_visible {
            ("◧", strings.hide_editors)
        } else {
            ("▣", strings.show_editors)
        };
        if icon_button(ui, icon, tooltip, true, cx.colors).clicked() {
            action = Some(ToolbarAction::ToggleEditors);
        }

        let handle_tooltip = if cx.tab_mode {
            strings.horizontal_mode
        } else {
            strings.tab_mode
        };
        let handle = layout_handle(ui, cx.tab_mode, !cx.detached, cx.colors)
            .on_hover_text(handle_tooltip);
        if let Some(outcome) = handle_gesture(&handle, gesture) {
            action = Some(outcome);
        }

        vertical_separator(ui, cx.colors.border, TOOLBAR_HEIGHT - 10.0);

        // ═══════════════════════════════════════════════════════════════════
        // Project Group
        // ═══════════════════════════════════════════════════════════════════
        ui.add(
            egui::TextEdit::singleline(project_name)
                .hint_text(strings.project_name)
                .desired_width(180.0),
        );

        if icon_button(ui, "💾", strings.save, true, cx.colors).clicked() {
            action = Some(ToolbarAction::Save);
        }
        if icon_button(ui, "📂", strings.projects, true, cx.colors).clicked() {
            action = Some(ToolbarAction::OpenProjects);
        }
        if icon_button(ui, "📄", strings.new_project, true, cx.colors).clicked() {
            action = Some(ToolbarAction::NewProject);
        }
        if icon_button(ui, "📤", strings.export, true, cx.colors).clicked() {
            action = Some(ToolbarAction::Export);
        }

        vertical_separator(ui, cx.colors.border, TOOLBAR_HEIGHT - 10.0);

        if icon_button(ui, "🌐", strings.open_in_browser, true, cx.colors).clicked() {
            action = Some(ToolbarAction::OpenPreviewInBrowser);
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if icon_button(ui, "⚙", strings.settings, true, cx.colors).clicked() {
                action = Some(ToolbarAction::OpenSettings);
            }
            if ui
                .button(RichText::new(cx.language_code.to_uppercase()).strong())
                .on_hover_text(strings.language)
                .clicked()
            {
                action = Some(ToolbarAction::ToggleLanguage);
            }
        });
    });

    action
}

/// Feed the handle's pointer state into the detach gesture.
fn handle_gesture(handle: &Response, gesture: &mut DetachGesture) -> Option<ToolbarAction> {
    if handle.clicked() {
        gesture.cancel();
        return Some(ToolbarAction::ToggleTabMode);
    }
    if handle.drag_started() {
        let origin = handle
            .ctx
            .input(|i| i.pointer.press_origin())
            .or_else(|| handle.interact_pointer_pos());
        if let Some(pos) = origin {
            gesture.press(pos);
        }
    }
    if handle.dragged() {
        if let Some(pos) = handle.interact_pointer_pos() {
            if gesture.drag(pos) == GestureOutcome::Detach {
                debug!("Layout handle dragged past detach threshold");
                return Some(ToolbarAction::Detach);
            }
        }
    }
    if handle.drag_stopped() && gesture.release() == GestureOutcome::Click {
        return Some(ToolbarAction::ToggleTabMode);
    }
    None
}

/// The layout-mode handle: shows the current mode and senses drags.
fn layout_handle(ui: &mut Ui, tab_mode: bool, enabled: bool, colors: &ThemeColors) -> Response {
    let (rect, response) = ui.allocate_exact_size(ICON_BUTTON_SIZE, Sense::click_and_drag());

    let bg = if response.hovered() || response.dragged() {
        colors.selection
    } else {
        colors.background_secondary
    };
    ui.painter().rect_filled(rect, egui::Rounding::same(3.0), bg);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        if tab_mode { "▤" } else { "▥" },
        egui::FontId::proportional(16.0),
        if enabled { colors.text } else { colors.text_muted },
    );

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
    }
    response
}

/// Render an icon button with hover highlight.
fn icon_button(
    ui: &mut Ui,
    icon: &str,
    tooltip: &str,
    enabled: bool,
    colors: &ThemeColors,
) -> Response {
    let text_color = if enabled { colors.text } else { colors.text_muted };

    let btn = ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(icon).size(16.0).color(text_color))
            .frame(false)
            .min_size(ICON_BUTTON_SIZE),
    );

    if btn.hovered() && enabled {
        ui.painter().rect_stroke(
            btn.rect,
            egui::Rounding::same(3.0),
            egui::Stroke::new(1.0, colors.accent),
        );
    }

    btn.on_hover_text(tooltip)
}

/// Draw a vertical separator line.
fn vertical_separator(ui: &mut Ui, color: Color32, height: f32) {
    let (rect, _response) = ui.allocate_exact_size(Vec2::new(1.0, height), Sense::hover());
    ui.painter().line_segment(
        [rect.center_top(), rect.center_bottom()],
        egui::Stroke::new(1.0, color),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::i18n::UK;

    #[test]
    fn test_toolbar_idle_frame_has_no_action() {
        let ctx = egui::Context::default();
        let colors = ThemeColors::from_theme(Theme::Dark);
        let mut name = "demo".to_string();
        let mut gesture = DetachGesture::default();
        let mut action = Some(ToolbarAction::Save);

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
                let cx = ToolbarContext {
                    strings: &UK,
                    colors: &colors,
                    editors_visible: true,
                    tab_mode: false,
                    detached: false,
                    language_code: "uk",
                };
                action = show_toolbar(ui, cx, &mut name, &mut gesture);
            });
        });

        assert_eq!(action, None);
        assert_eq!(name, "demo");
        assert!(!gesture.is_active());
    }

    #[test]
    fn test_toolbar_action_equality() {
        assert_eq!(ToolbarAction::Detach, ToolbarAction::Detach);
        assert_ne!(ToolbarAction::Detach, ToolbarAction::ToggleTabMode);
    }
}
