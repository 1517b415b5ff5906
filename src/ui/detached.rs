//! The detached editor window.
//!
//! Runs as an immediate viewport. Backends without multi-viewport support
//! draw it as a floating window inside the main one instead.

use std::time::Instant;

use crate::document::LanguageId;
use crate::i18n::Strings;
use crate::state::DetachedEditor;
use crate::theme::ThemeColors;
use crate::ui::{EditorPanel, EditorPanelOutput};
use eframe::egui::{self, RichText, Ui, ViewportBuilder, ViewportClass, ViewportId};

/// What the detached window asks of the primary window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachedRequest {
    /// Nothing; the window stays open.
    None,
    /// The return button was clicked.
    Return,
    /// The window was closed.
    Closed,
}

pub fn viewport_id() -> ViewportId {
    ViewportId::from_hash_of("statcode_detached_editor")
}

/// Show the detached window for one frame.
pub fn show_detached_window(
    ctx: &egui::Context,
    detached: &mut DetachedEditor,
    panel: &mut EditorPanel,
    strings: &Strings,
    now: Instant,
) -> DetachedRequest {
    let builder = ViewportBuilder::default()
        .with_title(strings.editor_window_title)
        .with_inner_size([800.0, 600.0])
        .with_min_inner_size([400.0, 300.0]);

    ctx.show_viewport_immediate(viewport_id(), builder, |ctx, class| {
        if ctx.input(|i| i.viewport().close_requested()) {
            return DetachedRequest::Closed;
        }

        let colors = ThemeColors::from_theme(detached.session.theme);

        if matches!(class, ViewportClass::Embedded) {
            let mut open = true;
            let mut request = DetachedRequest::None;
            egui::Window::new(strings.editor_window_title)
                .id(egui::Id::new("detached_editor_embedded"))
                .open(&mut open)
                .default_size([640.0, 480.0])
                .show(ctx, |ui| {
                    request = window_contents(ui, detached, panel, strings, &colors, now);
                });
            if !open {
                return DetachedRequest::Closed;
            }
            return request;
        }

        let mut request = DetachedRequest::None;
        egui::CentralPanel::default().show(ctx, |ui| {
            request = window_contents(ui, detached, panel, strings, &colors, now);
        });
        request
    })
}

fn window_contents(
    ui: &mut Ui,
    detached: &mut DetachedEditor,
    panel: &mut EditorPanel,
    strings: &Strings,
    colors: &ThemeColors,
    now: Instant,
) -> DetachedRequest {
    let mut request = DetachedRequest::None;

    ui.horizontal(|ui| {
        let mode_label = if detached.session.tab_mode {
            strings.horizontal_mode
        } else {
            strings.tab_mode
        };
        if ui.button(mode_label).clicked() {
            detached.toggle_tab_mode();
        }
        if ui
            .selectable_label(detached.preview_visible, strings.toggle_preview)
            .clicked()
        {
            detached.toggle_preview();
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(format!("⤶ {}", strings.return_editor)).clicked() {
                request = DetachedRequest::Return;
            }
        });
    });
    ui.separator();

    if detached.preview_visible {
        egui::TopBottomPanel::bottom(egui::Id::new("detached_markdown_preview"))
            .resizable(true)
            .default_height(160.0)
            .show_inside(ui, |ui| {
                ui.label(RichText::new(strings.preview).strong());
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.label(
                        RichText::new(&detached.preview_html)
                            .monospace()
                            .color(colors.text_muted),
                    );
                });
            });
    }

    let output = panel.show(ui, &mut detached.session, strings, colors);
    route_panel_output(ui.ctx(), detached, panel, output, strings, now);
    request
}

fn route_panel_output(
    ctx: &egui::Context,
    detached: &mut DetachedEditor,
    panel: &EditorPanel,
    output: EditorPanelOutput,
    strings: &Strings,
    now: Instant,
) {
    if let Some(lang) = output.edited {
        detached.on_edit(lang, now);
    }
    if let Some(lang) = output.soft_tab {
        let cursor = detached.insert_soft_tab(lang, now);
        panel.place_cursor(ctx, lang, cursor);
    }
    if let Some(tab) = output.selected_tab {
        detached.set_active_tab(tab);
    }
    if let Some(action) = output.snippet {
        detached.apply_snippet(action, strings.placeholder_text);
        let cursor = detached.session.docs.get(LanguageId::Markdown).selection.1;
        panel.place_cursor(ctx, LanguageId::Markdown, cursor);
    }
}
