//! UI components for StatCode
//!
//! This module contains the widgets and windows drawn by the app. Components
//! report what happened; `app.rs` routes it to `AppState`.

mod detached;
mod dialogs;
mod editor_panel;
mod preview_pane;
mod settings;
mod toolbar;

pub use detached::{show_detached_window, DetachedRequest};
pub use dialogs::{show_confirm_dialog, show_projects_dialog, ConfirmResult, ProjectsAction};
pub use editor_panel::{EditorPanel, EditorPanelOutput};
pub use preview_pane::{show_preview_pane, PreviewStyle};
pub use settings::SettingsPanel;
pub use toolbar::{show_toolbar, ToolbarAction, ToolbarContext};
