//! Modal dialogs: confirmation and the projects list.

use crate::i18n::Strings;
use crate::project::Project;
use crate::theme::ThemeColors;
use eframe::egui::{self, Color32, Key, RichText};

/// Result of showing the confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmResult {
    /// Still open
    None,
    Cancelled,
    Confirmed,
}

/// Action picked in the projects dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectsAction {
    /// Still open
    None,
    Close,
    Load(String),
    /// Ask for confirmation, then delete.
    Delete(String),
}

fn modal_frame(ctx: &egui::Context, colors: &ThemeColors) -> egui::Frame {
    egui::Frame::window(&ctx.style())
        .fill(colors.background_secondary)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .rounding(8.0)
}

/// Yes/cancel dialog for `message`.
pub fn show_confirm_dialog(
    ctx: &egui::Context,
    message: &str,
    strings: &Strings,
    colors: &ThemeColors,
) -> ConfirmResult {
    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        return ConfirmResult::Cancelled;
    }

    let mut result = ConfirmResult::None;
    egui::Window::new("⚠")
        .id(egui::Id::new("confirm_dialog"))
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .order(egui::Order::Foreground)
        .frame(modal_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            ui.add_space(8.0);
            ui.label(message);
            ui.add_space(12.0);

            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let confirm =
                        egui::Button::new(RichText::new(strings.confirm).color(Color32::WHITE))
                            .fill(colors.accent);
                    if ui.add(confirm).clicked() || ui.input(|i| i.key_pressed(Key::Enter)) {
                        result = ConfirmResult::Confirmed;
                    }
                    ui.add_space(8.0);
                    if ui.button(strings.cancel).clicked() {
                        result = ConfirmResult::Cancelled;
                    }
                });
            });
            ui.add_space(4.0);
        });

    result
}

/// List of saved projects. Clicking a name loads it.
pub fn show_projects_dialog(
    ctx: &egui::Context,
    projects: &[Project],
    strings: &Strings,
    colors: &ThemeColors,
) -> ProjectsAction {
    if ctx.input(|i| i.key_pressed(Key::Escape)) {
        return ProjectsAction::Close;
    }

    let mut action = ProjectsAction::None;
    egui::Window::new(format!("📂 {}", strings.projects_title))
        .id(egui::Id::new("projects_dialog"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(modal_frame(ctx, colors))
        .show(ctx, |ui| {
            ui.set_min_width(360.0);

            if projects.is_empty() {
                ui.add_space(8.0);
                ui.label(RichText::new(strings.no_projects).color(colors.text_muted));
                ui.add_space(8.0);
            } else {
                egui::ScrollArea::vertical()
                    .max_height(320.0)
                    .show(ui, |ui| {
                        for project in projects {
                            ui.horizontal(|ui| {
                                if ui
                                    .add(egui::Button::new(&project.name).frame(false))
                                    .clicked()
                                {
                                    action = ProjectsAction::Load(project.name.clone());
                                }
                                ui.with_layout(
                                    egui::Layout::right_to_left(egui::Align::Center),
                                    |ui| {
                                        if ui
                                            .small_button("🗑")
                                            .on_hover_text(strings.confirm_delete)
                                            .clicked()
                                        {
                                            action = ProjectsAction::Delete(project.name.clone());
                                        }
                                    },
                                );
                            });
                        }
                    });
            }

            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(strings.close).clicked() {
                    action = ProjectsAction::Close;
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::i18n::EN;

    fn escape() -> egui::RawInput {
        egui::RawInput {
            events: vec![egui::Event::Key {
                key: Key::Escape,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::NONE,
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_confirm_stays_open_without_input() {
        let ctx = egui::Context::default();
        let colors = ThemeColors::from_theme(Theme::Dark);
        let mut result = ConfirmResult::Cancelled;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            result = show_confirm_dialog(ctx, "Sure?", &EN, &colors);
        });
        assert_eq!(result, ConfirmResult::None);
    }

    #[test]
    fn test_escape_cancels_confirm() {
        let ctx = egui::Context::default();
        let colors = ThemeColors::from_theme(Theme::Light);
        let mut result = ConfirmResult::None;
        let _ = ctx.run(escape(), |ctx| {
            result = show_confirm_dialog(ctx, "Sure?", &EN, &colors);
        });
        assert_eq!(result, ConfirmResult::Cancelled);
    }

    #[test]
    fn test_escape_closes_projects() {
        let ctx = egui::Context::default();
        let colors = ThemeColors::from_theme(Theme::Hacker);
        let projects = vec![Project {
            name: "demo".to_string(),
            ..Default::default()
        }];
        let mut action = ProjectsAction::None;
        let _ = ctx.run(escape(), |ctx| {
            action = show_projects_dialog(ctx, &projects, &EN, &colors);
        });
        assert_eq!(action, ProjectsAction::Close);
    }
}
