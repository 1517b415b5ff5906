//! Main application module for StatCode
//!
//! This module implements the eframe App trait for the playground window,
//! routing toolbar, keyboard and editor events into `AppState` and drawing
//! the docked editors, the preview pane, the dialogs and the detached editor
//! window.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::document::LanguageId;
use crate::export::write_export;
use crate::files::dialogs::save_export_dialog;
use crate::markdown::HighlightCache;
use crate::preview::{FileSurface, MemorySurface, PreviewSurface};
use crate::state::{AppState, TOAST_DURATION};
use crate::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::theme::{ThemeColors, ThemeManager};
use crate::ui::{
    show_confirm_dialog, show_detached_window, show_preview_pane, show_projects_dialog,
    show_toolbar, ConfirmResult, DetachedRequest, EditorPanel, EditorPanelOutput, PreviewStyle,
    ProjectsAction, SettingsPanel, ToolbarAction, ToolbarContext,
};
use eframe::egui;
use log::{debug, info, warn};

/// Width of the strip between the editors and the preview.
const RESIZER_WIDTH: f32 = 6.0;

/// Keyboard shortcut actions that need to be deferred.
///
/// These actions are detected in the input handling closure and executed
/// afterwards to avoid borrow conflicts.
#[derive(Debug, Clone, Copy)]
enum KeyboardAction {
    /// Save current project (Ctrl+S)
    Save,
}

/// The main application struct that holds all state and implements eframe::App.
pub struct StatCodeApp {
    /// Central application state
    state: AppState,
    /// Theme manager for handling theme switching
    theme_manager: ThemeManager,
    /// Settings panel component
    settings_panel: SettingsPanel,
    /// Editors docked in the main window
    primary_panel: EditorPanel,
    /// Editors inside the detached window
    detached_panel: EditorPanel,
    /// Highlighting for the preview pane
    preview_cache: HighlightCache,
    /// Where the browser preview lives, when it is written to disk
    preview_path: Option<PathBuf>,
    /// Application start time for toast timing
    start_time: Instant,
}

impl StatCodeApp {
    /// Create a new app instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing StatCode");

        let (store, surface, preview_path): (Box<dyn KeyValueStore>, Box<dyn PreviewSurface>, _) =
            match FileStore::open_default() {
                Ok(store) => {
                    let surface = FileSurface::in_dir(store.dir());
                    let path = surface.path().to_path_buf();
                    info!("Data directory: {}", store.dir().display());
                    (Box::new(store), Box::new(surface), Some(path))
                }
                Err(e) => {
                    warn!("No data directory ({}), running without persistence", e);
                    (Box::new(MemoryStore::new()), Box::new(MemorySurface::new()), None)
                }
            };

        let state = AppState::new(store, surface, Instant::now());
        Self::with_state(state, preview_path, &cc.egui_ctx)
    }

    /// Build the app around an existing state.
    pub fn with_state(state: AppState, preview_path: Option<PathBuf>, ctx: &egui::Context) -> Self {
        let mut theme_manager = ThemeManager::new(state.settings.theme);
        theme_manager.apply(ctx);
        info!("Applied initial theme: {:?}", state.settings.theme);

        Self {
            settings_panel: SettingsPanel::new(&state.settings),
            state,
            theme_manager,
            primary_panel: EditorPanel::new("primary"),
            detached_panel: EditorPanel::new("detached"),
            preview_cache: HighlightCache::default(),
            preview_path,
            start_time: Instant::now(),
        }
    }

    /// Get elapsed time since app start in seconds.
    fn get_app_time(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    /// One frame of the main window.
    fn frame(&mut self, ctx: &egui::Context, now: Instant) {
        // Messages from the detached window, then any due timers
        self.state.poll_sync();
        self.state.tick(now);

        self.theme_manager.set_theme(self.state.settings.theme);
        self.theme_manager.apply_if_needed(ctx);

        let current_time = self.get_app_time();
        self.state.update_toast(current_time);

        self.handle_keyboard_shortcuts(ctx);
        self.render_ui(ctx, now);
        self.render_detached_window(ctx, now);
        self.render_dialogs(ctx, now);

        self.schedule_repaint(ctx, current_time);
    }

    /// Wake up for the next timer or toast expiry even without input.
    fn schedule_repaint(&self, ctx: &egui::Context, current_time: f64) {
        let now = Instant::now();
        ctx.request_repaint_after(self.state.next_deadline().saturating_duration_since(now));
        if let Some(expires_at) = self.state.ui.toast_expires_at {
            let remaining = (expires_at - current_time).max(0.0);
            ctx.request_repaint_after(Duration::from_secs_f64(remaining));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    fn render_ui(&mut self, ctx: &egui::Context, now: Instant) {
        let colors = self.theme_manager.colors();
        let strings = self.state.strings();

        // Toolbar
        let cx = ToolbarContext {
            strings,
            colors: &colors,
            editors_visible: self.state.ui.editors_visible,
            tab_mode: self.state.session.tab_mode,
            detached: self.state.is_detached(),
            language_code: self.state.ui.language.code(),
        };
        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                show_toolbar(ui, cx, &mut self.state.ui.project_name, &mut self.state.gesture)
            })
            .inner;
        if let Some(action) = toolbar_action {
            self.handle_toolbar_action(action);
        }

        // Status bar with toast messages
        let detached = self.state.is_detached();
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if detached {
                    ui.label(
                        egui::RichText::new(strings.editor_window_title)
                            .small()
                            .color(colors.text_muted),
                    );
                }
                if let Some(toast) = &self.state.ui.toast_message {
                    ui.with_layout(
                        egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                        |ui| {
                            ui.label(egui::RichText::new(toast).italics());
                        },
                    );
                }
            });
        });

        // Docked editors
        let docked = self.state.ui.editors_visible && !detached;
        let total_width = ctx.screen_rect().width();
        if docked {
            let width = (total_width * self.state.ui.split_fraction).max(1.0);
            let output = egui::SidePanel::left("editors_panel")
                .resizable(false)
                .exact_width(width)
                .show(ctx, |ui| {
                    self.primary_panel
                        .show(ui, &mut self.state.session, strings, &colors)
                })
                .inner;
            self.route_editor_output(ctx, output, now);
        }

        // Preview
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                if docked {
                    self.split_resizer(ui, &colors, total_width);
                }
                ui.vertical(|ui| {
                    let style = PreviewStyle {
                        theme: self.state.settings.theme,
                        font_size: self.state.settings.font_points(),
                        strings,
                        colors: &colors,
                    };
                    show_preview_pane(
                        ui,
                        &self.state.preview_document,
                        self.preview_path.as_deref(),
                        &mut self.preview_cache,
                        style,
                    );
                });
            });
        });
    }

    /// The draggable strip along the preview's left edge.
    fn split_resizer(&mut self, ui: &mut egui::Ui, colors: &ThemeColors, total_width: f32) {
        let size = egui::vec2(RESIZER_WIDTH, ui.available_height());
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::drag());

        let color = if response.hovered() || response.dragged() {
            colors.accent
        } else {
            colors.border
        };
        ui.painter().line_segment(
            [rect.center_top(), rect.center_bottom()],
            egui::Stroke::new(2.0, color),
        );
        if response.hovered() || response.dragged() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::ResizeHorizontal);
        }

        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                let x = pos.x - ui.ctx().screen_rect().left();
                self.state.resize_split(x, total_width);
            }
        }
    }

    fn route_editor_output(
        &mut self,
        ctx: &egui::Context,
        output: EditorPanelOutput,
        now: Instant,
    ) {
        if output.edited.is_some() {
            self.state.on_edit(now);
        }
        if let Some(lang) = output.soft_tab {
            let cursor = self.state.insert_soft_tab(lang, now);
            self.primary_panel.place_cursor(ctx, lang, cursor);
        }
        if let Some(tab) = output.selected_tab {
            self.state.set_active_tab(tab);
        }
        if let Some(action) = output.snippet {
            self.state.apply_snippet(action);
            let cursor = self.state.session.docs.get(LanguageId::Markdown).selection.1;
            self.primary_panel.place_cursor(ctx, LanguageId::Markdown, cursor);
        }
    }

    fn render_detached_window(&mut self, ctx: &egui::Context, now: Instant) {
        let strings = self.state.strings();
        let Some(detached) = self.state.detached.as_mut() else {
            return;
        };

        match show_detached_window(ctx, detached, &mut self.detached_panel, strings, now) {
            DetachedRequest::None => {}
            DetachedRequest::Return => {
                debug!("Detached window: return editor");
                self.state.return_editor();
            }
            DetachedRequest::Closed => {
                debug!("Detached window closed");
                self.state.detached_window_closed();
            }
        }
    }

    fn render_dialogs(&mut self, ctx: &egui::Context, now: Instant) {
        let colors = self.theme_manager.colors();
        let strings = self.state.strings();

        if self.state.ui.show_confirm_dialog {
            let message = &self.state.ui.confirm_dialog_message;
            match show_confirm_dialog(ctx, message, strings, &colors) {
                ConfirmResult::Confirmed => self.state.handle_confirmed_action(),
                ConfirmResult::Cancelled => self.state.cancel_pending_action(),
                ConfirmResult::None => {}
            }
        }

        if self.state.ui.show_projects {
            match show_projects_dialog(ctx, &self.state.projects, strings, &colors) {
                ProjectsAction::None => {}
                ProjectsAction::Close => self.state.ui.show_projects = false,
                ProjectsAction::Load(name) => {
                    self.state.load_project(&name);
                }
                ProjectsAction::Delete(name) => self.state.request_delete_project(&name),
            }
        }

        if self.state.ui.show_settings {
            let is_dark = self.state.settings.theme.is_dark();
            let output = self.settings_panel.show(ctx, strings, is_dark);
            if let Some(settings) = output.saved {
                self.state.apply_settings(settings, now);
            }
            if output.close_requested {
                self.state.ui.show_settings = false;
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Action Handlers
    // ─────────────────────────────────────────────────────────────────────────

    fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let action = ctx.input(|i| {
            // Ctrl+S: Save project
            if i.modifiers.ctrl && i.key_pressed(egui::Key::S) {
                debug!("Keyboard shortcut: Ctrl+S (Save)");
                return Some(KeyboardAction::Save);
            }
            None
        });

        if let Some(KeyboardAction::Save) = action {
            self.handle_save();
        }
    }

    fn handle_toolbar_action(&mut self, action: ToolbarAction) {
        debug!("Toolbar action: {:?}", action);
        match action {
            ToolbarAction::ToggleEditors => self.state.toggle_editors(),
            ToolbarAction::ToggleTabMode => self.state.toggle_tab_mode(),
            ToolbarAction::Detach => self.state.detach(),
            ToolbarAction::Save => self.handle_save(),
            ToolbarAction::OpenProjects => self.state.open_projects(),
            ToolbarAction::NewProject => self.state.request_new_project(),
            ToolbarAction::Export => self.handle_export(),
            ToolbarAction::OpenSettings => {
                self.settings_panel.load(&self.state.settings);
                self.state.ui.show_settings = true;
            }
            ToolbarAction::ToggleLanguage => self.state.toggle_language(),
            ToolbarAction::OpenPreviewInBrowser => self.handle_open_preview(),
        }
    }

    fn handle_save(&mut self) {
        let time = self.get_app_time();
        self.state.save_project(time);
    }

    /// Write the active document wherever the user picks.
    fn handle_export(&mut self) {
        let file = self.state.export_active();
        let strings = self.state.strings();
        let Some(path) = save_export_dialog(&file, strings.export) else {
            return;
        };

        let time = self.get_app_time();
        match write_export(&path, &file) {
            Ok(()) => {
                info!("Exported {} to: {}", file.file_name, path.display());
                let message = format!("{}: {}", strings.exported, path.display());
                self.state.show_toast(message, time, TOAST_DURATION);
            }
            Err(e) => {
                warn!("Failed to export {}: {}", file.file_name, e);
                self.state
                    .show_toast(format!("{}: {}", strings.export_failed, e), time, 3.0);
            }
        }
    }

    /// Open the browser preview, writing it first so it is current.
    fn handle_open_preview(&mut self) {
        self.state.refresh_preview();
        let Some(path) = self.preview_path.clone() else {
            warn!("Preview is not written to disk; nothing to open");
            return;
        };
        if let Err(e) = open::that(&path) {
            warn!("Failed to open preview {}: {}", path.display(), e);
            let time = self.get_app_time();
            self.state.show_toast(e.to_string(), time, 3.0);
        }
    }
}

impl eframe::App for StatCodeApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.frame(ctx, Instant::now());
    }

    /// Called when the application is about to close.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application exiting");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::list_projects;

    fn test_app(ctx: &egui::Context) -> StatCodeApp {
        let state = AppState::new(
            Box::new(MemoryStore::new()),
            Box::new(MemorySurface::new()),
            Instant::now(),
        );
        StatCodeApp::with_state(state, None, ctx)
    }

    fn run_frame(app: &mut StatCodeApp, ctx: &egui::Context, input: egui::RawInput) {
        let _ = ctx.run(input, |ctx| app.frame(ctx, Instant::now()));
    }

    #[test]
    fn test_idle_frames_keep_state() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);
        run_frame(&mut app, &ctx, egui::RawInput::default());
        run_frame(&mut app, &ctx, egui::RawInput::default());

        assert!(app.state.ui.editors_visible);
        assert!(!app.state.is_detached());
        assert!(app.state.ui.toast_message.is_none());
        assert!(!app.state.preview_document.is_empty());
    }

    #[test]
    fn test_ctrl_s_saves_project() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);
        app.state.ui.project_name = "demo".to_string();

        let input = egui::RawInput {
            modifiers: egui::Modifiers::CTRL,
            events: vec![egui::Event::Key {
                key: egui::Key::S,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: egui::Modifiers::CTRL,
            }],
            ..Default::default()
        };
        run_frame(&mut app, &ctx, input);

        let projects = list_projects(app.state.store.as_ref());
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "demo");
        assert!(app.state.ui.toast_message.is_some());
    }

    #[test]
    fn test_detached_window_renders_embedded() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);
        app.handle_toolbar_action(ToolbarAction::Detach);
        run_frame(&mut app, &ctx, egui::RawInput::default());

        assert!(app.state.is_detached());
        assert!(!app.state.ui.editors_visible);
    }

    #[test]
    fn test_open_settings_loads_form() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);
        app.handle_toolbar_action(ToolbarAction::OpenSettings);
        assert!(app.state.ui.show_settings);
        run_frame(&mut app, &ctx, egui::RawInput::default());
        assert!(app.state.ui.show_settings);
    }

    #[test]
    fn test_open_preview_without_file_is_noop() {
        let ctx = egui::Context::default();
        let mut app = test_app(&ctx);
        app.handle_toolbar_action(ToolbarAction::OpenPreviewInBrowser);
        assert!(app.state.ui.toast_message.is_none());
    }
}
