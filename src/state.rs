//! Application state management for StatCode
//!
//! This module defines `AppState`, the single owner of everything the
//! playground mutates at runtime: the editor session, the persisted settings,
//! the project store, the preview surface and the optional detached editor
//! window. The UI never touches these directly; it calls the named operations
//! below.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::{load_settings, save_settings, Settings};
use crate::document::{DocumentSet, LanguageId};
use crate::export::{export_active, ExportFile};
use crate::i18n::{Strings, UiLanguage};
use crate::layout::{split_fraction, DetachGesture};
use crate::markdown::{apply_snippet, render, SnippetAction};
use crate::preview::{refresh_preview, PreviewSurface};
use crate::project::{self, Project};
use crate::storage::KeyValueStore;
use crate::sync::{EditorSession, Role, SyncEndpoint, SyncMessage, Synchronizer};
use crate::timers::{Debouncer, IntervalTimer};

/// How long a toast stays on screen, in seconds.
pub const TOAST_DURATION: f64 = 2.5;

// ─────────────────────────────────────────────────────────────────────────────
// Pending Actions
// ─────────────────────────────────────────────────────────────────────────────

/// Actions waiting for the user to confirm them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    /// Discard the current documents and start from the placeholders.
    NewProject,
    /// Delete the named project from the store.
    DeleteProject(String),
}

// ─────────────────────────────────────────────────────────────────────────────
// UI State
// ─────────────────────────────────────────────────────────────────────────────

/// Transient layout and dialog state. Never persisted.
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the docked editor panel is shown.
    pub editors_visible: bool,
    /// Editor pane width as a fraction of the window.
    pub split_fraction: f32,
    pub language: UiLanguage,
    /// Contents of the project name field.
    pub project_name: String,
    pub show_projects: bool,
    pub show_settings: bool,
    pub show_confirm_dialog: bool,
    pub confirm_dialog_message: String,
    pub pending_action: Option<PendingAction>,
    pub toast_message: Option<String>,
    /// App time in seconds at which the toast disappears
    pub toast_expires_at: Option<f64>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            editors_visible: true,
            split_fraction: 0.5,
            language: UiLanguage::default(),
            project_name: String::new(),
            show_projects: false,
            show_settings: false,
            show_confirm_dialog: false,
            confirm_dialog_message: String::new(),
            pending_action: None,
            toast_message: None,
            toast_expires_at: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Detached Editor
// ─────────────────────────────────────────────────────────────────────────────

/// State of the detached editor window.
///
/// It owns its own session and talks to the primary window only through its
/// synchronizer, exactly as a separate window would.
#[derive(Debug)]
pub struct DetachedEditor {
    pub session: EditorSession,
    pub sync: Synchronizer,
    debounce: Debouncer,
    /// Whether the rendered Markdown fragment is shown below the editors.
    pub preview_visible: bool,
    /// Last rendered Markdown fragment.
    pub preview_html: String,
    markdown_edited: bool,
}

impl DetachedEditor {
    fn new(endpoint: SyncEndpoint) -> Self {
        Self {
            session: EditorSession::detached(),
            sync: Synchronizer::connected(Role::Detached, endpoint),
            debounce: Debouncer::default(),
            preview_visible: false,
            preview_html: String::new(),
            markdown_edited: false,
        }
    }

    /// Record an edit to `lang`. The update is sent once typing pauses.
    pub fn on_edit(&mut self, lang: LanguageId, now: Instant) {
        if lang == LanguageId::Markdown {
            self.markdown_edited = true;
        }
        self.debounce.touch(now);
    }

    pub fn insert_soft_tab(&mut self, lang: LanguageId, now: Instant) -> usize {
        let cursor = self.session.docs.insert_soft_tab(lang);
        self.on_edit(lang, now);
        cursor
    }

    /// Fire the debounce if due: send the documents, then re-render the local
    /// preview when a Markdown edit is pending and the preview is shown.
    pub fn tick(&mut self, now: Instant) {
        if !self.debounce.poll(now) {
            return;
        }
        self.sync.send_documents(&self.session);
        if self.preview_visible && std::mem::take(&mut self.markdown_edited) {
            self.refresh_preview();
        }
    }

    /// Drain messages from the primary window.
    pub fn poll_sync(&mut self) {
        let effect = self.sync.poll(&mut self.session, self.preview_visible);
        if effect.refresh_preview {
            self.refresh_preview();
        }
    }

    pub fn refresh_preview(&mut self) {
        self.preview_html = render(self.session.docs.text(LanguageId::Markdown));
    }

    pub fn toggle_preview(&mut self) {
        self.preview_visible = !self.preview_visible;
        if self.preview_visible && self.session.markdown_active() {
            self.refresh_preview();
        }
    }

    /// Flip the local layout mode and tell the primary window.
    pub fn toggle_tab_mode(&mut self) {
        self.session.tab_mode = !self.session.tab_mode;
        self.sync.send(SyncMessage::TabMode {
            value: self.session.tab_mode,
        });
    }

    pub fn set_active_tab(&mut self, tab: LanguageId) {
        if !self.session.tab_mode {
            return;
        }
        self.session.active_tab = Some(tab);
        self.sync.send(SyncMessage::SetActiveTab { tab });
        if self.preview_visible && tab == LanguageId::Markdown {
            self.refresh_preview();
        }
    }

    /// Insert a Markdown snippet and send the result right away.
    pub fn apply_snippet(&mut self, action: SnippetAction, placeholder: &str) {
        insert_snippet(&mut self.session, action, placeholder);
        self.debounce.cancel();
        self.sync.send_documents(&self.session);
        if self.preview_visible {
            self.refresh_preview();
        }
    }

    /// Send edits still waiting on the debounce.
    pub fn flush_pending(&mut self) {
        if self.debounce.next_deadline().is_some() {
            self.debounce.cancel();
            self.sync.send_documents(&self.session);
        }
    }

    /// Soonest moment a timer needs the frame loop.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.next_deadline()
    }
}

fn insert_snippet(session: &mut EditorSession, action: SnippetAction, placeholder: &str) {
    let doc = session.docs.get_mut(LanguageId::Markdown);
    let result = apply_snippet(&doc.text, doc.selection, action, placeholder);
    doc.text = result.text;
    doc.selection = (result.cursor, result.cursor);
}

// ─────────────────────────────────────────────────────────────────────────────
// App State
// ─────────────────────────────────────────────────────────────────────────────

/// Everything the primary window owns.
pub struct AppState {
    pub settings: Settings,
    pub store: Box<dyn KeyValueStore>,
    pub surface: Box<dyn PreviewSurface>,
    pub session: EditorSession,
    pub sync: Synchronizer,
    pub ui: UiState,
    /// Projects as last read from the store, for the projects dialog.
    pub projects: Vec<Project>,
    /// The composed document last sent to the preview surface.
    pub preview_document: String,
    pub detached: Option<DetachedEditor>,
    pub gesture: DetachGesture,
    debounce: Debouncer,
    autosave: IntervalTimer,
}

impl AppState {
    /// Load settings from `store` and render the starter documents.
    pub fn new(
        store: Box<dyn KeyValueStore>,
        surface: Box<dyn PreviewSurface>,
        now: Instant,
    ) -> Self {
        let settings = load_settings(store.as_ref());
        let autosave = IntervalTimer::new(autosave_period(&settings), now);
        info!(
            "Starting with theme {:?}, font size {}, autosave every {}s",
            settings.theme, settings.font_size, settings.autosave_interval
        );

        let mut state = Self {
            session: EditorSession::with_settings(&settings),
            settings,
            store,
            surface,
            sync: Synchronizer::new(Role::Primary),
            ui: UiState::default(),
            projects: Vec::new(),
            preview_document: String::new(),
            detached: None,
            gesture: DetachGesture::default(),
            debounce: Debouncer::default(),
            autosave,
        };
        state.refresh_preview();
        state
    }

    pub fn strings(&self) -> &'static Strings {
        self.ui.language.strings()
    }

    pub fn is_detached(&self) -> bool {
        self.detached.is_some()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing & Timers
    // ─────────────────────────────────────────────────────────────────────────

    /// Record an edit in the docked editors.
    pub fn on_edit(&mut self, now: Instant) {
        self.debounce.touch(now);
    }

    /// Run whatever timers are due.
    pub fn tick(&mut self, now: Instant) {
        if self.debounce.poll(now) {
            debug!("Edit debounce elapsed");
            self.refresh_and_sync();
        }
        if self.autosave.poll(now) {
            self.autosave();
        }
        if let Some(detached) = self.detached.as_mut() {
            detached.tick(now);
        }
    }

    /// Soonest moment a timer needs the frame loop.
    pub fn next_deadline(&self) -> Instant {
        [
            self.debounce.next_deadline(),
            self.detached.as_ref().and_then(DetachedEditor::next_deadline),
        ]
        .into_iter()
        .flatten()
        .fold(self.autosave.next_deadline(), Instant::min)
    }

    pub fn refresh_preview(&mut self) {
        self.preview_document = refresh_preview(&self.session.docs, &mut self.surface);
    }

    /// Send the whole session to the detached window, if there is one.
    pub fn sync_detached(&mut self) {
        self.sync.send_full_sync(&self.session);
    }

    fn refresh_and_sync(&mut self) {
        self.refresh_preview();
        self.sync_detached();
    }

    /// Insert a two-space soft tab into `lang` at its selection.
    pub fn insert_soft_tab(&mut self, lang: LanguageId, now: Instant) -> usize {
        let cursor = self.session.docs.insert_soft_tab(lang);
        self.on_edit(now);
        cursor
    }

    /// Insert a Markdown snippet into the docked Markdown editor.
    pub fn apply_snippet(&mut self, action: SnippetAction) {
        insert_snippet(
            &mut self.session,
            action,
            self.ui.language.strings().placeholder_text,
        );
        self.debounce.cancel();
        self.refresh_and_sync();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Show or hide the docked editors. Hiding them closes the detached window.
    pub fn toggle_editors(&mut self) {
        self.ui.editors_visible = !self.ui.editors_visible;
        if !self.ui.editors_visible && self.is_detached() {
            info!("Hiding editors closes the detached window");
            self.close_detached();
        }
    }

    /// Switch between stacked and tab layout. Ignored while detached.
    pub fn toggle_tab_mode(&mut self) {
        if self.is_detached() {
            return;
        }
        self.session.tab_mode = !self.session.tab_mode;
        if self.session.tab_mode && self.session.active_tab.is_none() {
            self.session.active_tab = Some(LanguageId::Html);
        }
        debug!("Tab mode: {}", self.session.tab_mode);
    }

    pub fn set_active_tab(&mut self, tab: LanguageId) {
        if !self.session.tab_mode || self.is_detached() {
            return;
        }
        self.session.active_tab = Some(tab);
    }

    /// Move the resizer to `x` within a window `total` wide.
    pub fn resize_split(&mut self, x: f32, total: f32) {
        if self.is_detached() {
            return;
        }
        self.ui.split_fraction = split_fraction(x, total);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Detached Window
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the editors into their own window and send it the full session.
    pub fn detach(&mut self) {
        if self.is_detached() {
            return;
        }
        let (primary, detached) = SyncEndpoint::pair();
        self.sync.attach(primary);
        self.detached = Some(DetachedEditor::new(detached));
        self.ui.editors_visible = false;
        self.sync_detached();
        info!("Editors detached");
    }

    /// Restore the docked editors after the detached window went away.
    pub fn redock(&mut self) {
        self.detached = None;
        self.sync.disconnect();
        self.ui.editors_visible = true;
        info!("Editors docked");
    }

    /// Close the detached window without restoring the docked editors.
    fn close_detached(&mut self) {
        self.detached = None;
        self.sync.disconnect();
    }

    /// The detached window's return button.
    pub fn return_editor(&mut self) {
        self.leave_detached(SyncMessage::ReturnEditor);
    }

    /// The detached window was closed by the window manager.
    pub fn detached_window_closed(&mut self) {
        self.leave_detached(SyncMessage::EditorWindowClosed);
    }

    fn leave_detached(&mut self, message: SyncMessage) {
        if let Some(mut detached) = self.detached.take() {
            detached.flush_pending();
            detached.sync.send(message);
        }
        // The primary observes the message on its next poll.
        self.poll_sync();
    }

    /// Drain messages in both directions.
    pub fn poll_sync(&mut self) {
        if let Some(detached) = self.detached.as_mut() {
            detached.poll_sync();
        }

        let effect = self.sync.poll(&mut self.session, false);
        if effect.refresh_preview {
            self.refresh_preview();
        }
        if effect.redock {
            self.redock();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Projects
    // ─────────────────────────────────────────────────────────────────────────

    /// Save under the current project name and announce it with a toast.
    pub fn save_project(&mut self, current_time: f64) -> Option<String> {
        let saved = self.save_current()?;
        self.ui.project_name = saved.clone();
        let message = format!("{}: {}", self.strings().saved, saved);
        self.show_toast(message, current_time, TOAST_DURATION);
        Some(saved)
    }

    /// Periodic save. Runs only for named projects and shows nothing.
    pub fn autosave(&mut self) {
        if self.ui.project_name.trim().is_empty() {
            return;
        }
        debug!("Autosaving '{}'", self.ui.project_name.trim());
        self.save_current();
    }

    /// Store the current documents. Leaves the name field as typed.
    fn save_current(&mut self) -> Option<String> {
        let snapshot = self.session.docs.snapshot();
        match project::save_project(&mut self.store, &self.ui.project_name, &snapshot) {
            Ok(name) => {
                self.refresh_projects();
                Some(name)
            }
            Err(e) => {
                warn!("Failed to save project: {}", e);
                None
            }
        }
    }

    pub fn refresh_projects(&mut self) {
        self.projects = project::list_projects(&self.store);
    }

    pub fn open_projects(&mut self) {
        self.refresh_projects();
        self.ui.show_projects = true;
    }

    /// Replace every document with the stored project.
    pub fn load_project(&mut self, name: &str) -> bool {
        let Some(snapshot) = project::load_project(&self.store, name) else {
            warn!("Project '{}' not found", name);
            return false;
        };
        self.session.docs.apply_snapshot(&snapshot);
        self.ui.project_name = name.to_string();
        self.ui.show_projects = false;
        self.debounce.cancel();
        self.refresh_and_sync();
        true
    }

    /// Reset to the starter documents with no project name.
    pub fn new_project(&mut self) {
        self.session.docs = DocumentSet::placeholder();
        self.ui.project_name.clear();
        self.debounce.cancel();
        self.refresh_and_sync();
        info!("Started a new project");
    }

    pub fn request_new_project(&mut self) {
        self.ask(PendingAction::NewProject, self.strings().confirm_new.to_string());
    }

    pub fn request_delete_project(&mut self, name: &str) {
        let message = format!("{} '{}'?", self.strings().confirm_delete, name);
        self.ask(PendingAction::DeleteProject(name.to_string()), message);
    }

    fn ask(&mut self, action: PendingAction, message: String) {
        self.ui.pending_action = Some(action);
        self.ui.confirm_dialog_message = message;
        self.ui.show_confirm_dialog = true;
    }

    /// Run the action the user just confirmed.
    pub fn handle_confirmed_action(&mut self) {
        if let Some(action) = self.ui.pending_action.take() {
            match action {
                PendingAction::NewProject => self.new_project(),
                PendingAction::DeleteProject(name) => {
                    project::delete_project_silent(&mut self.store, &name);
                    self.refresh_projects();
                }
            }
        }
        self.ui.show_confirm_dialog = false;
        self.ui.confirm_dialog_message.clear();
    }

    pub fn cancel_pending_action(&mut self) {
        self.ui.pending_action = None;
        self.ui.show_confirm_dialog = false;
        self.ui.confirm_dialog_message.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Settings Management
    // ─────────────────────────────────────────────────────────────────────────

    /// Adopt new settings: persist them, restyle both windows and restart the
    /// autosave schedule.
    pub fn apply_settings(&mut self, settings: Settings, now: Instant) {
        let settings = settings.sanitized();
        if let Err(e) = save_settings(&mut self.store, &settings) {
            warn!("Failed to save settings: {}", e);
        }

        self.session.theme = settings.theme;
        self.session.font_size = settings.font_size;
        self.autosave.reschedule(autosave_period(&settings), now);
        self.settings = settings;
        self.ui.show_settings = false;
        self.sync_detached();
        info!(
            "Settings applied: theme {:?}, font size {}, autosave {}s",
            self.settings.theme, self.settings.font_size, self.settings.autosave_interval
        );
    }

    pub fn toggle_language(&mut self) {
        self.ui.language = self.ui.language.toggled();
        debug!("UI language: {}", self.ui.language.code());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Export
    // ─────────────────────────────────────────────────────────────────────────

    /// The active document (HTML when no tab is active) ready to be written.
    pub fn export_active(&self) -> ExportFile {
        export_active(
            &self.session.docs,
            self.session.active_tab,
            &self.ui.project_name,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UI State Helpers
    // ─────────────────────────────────────────────────────────────────────────

    /// Show a toast until `current_time + duration`.
    pub fn show_toast(&mut self, message: impl Into<String>, current_time: f64, duration: f64) {
        self.ui.toast_message = Some(message.into());
        self.ui.toast_expires_at = Some(current_time + duration);
    }

    /// Clear the toast once it expired.
    pub fn update_toast(&mut self, current_time: f64) {
        if let Some(expires_at) = self.ui.toast_expires_at {
            if current_time >= expires_at {
                self.clear_toast();
            }
        }
    }

    pub fn clear_toast(&mut self) {
        self.ui.toast_message = None;
        self.ui.toast_expires_at = None;
    }
}

fn autosave_period(settings: &Settings) -> Duration {
    Duration::from_secs(u64::from(settings.autosave_interval))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
