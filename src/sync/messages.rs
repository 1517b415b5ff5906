//! Messages exchanged between the primary and detached editor windows.

use crate::config::Theme;
use crate::document::{LanguageId, Snapshot};
use serde::{Deserialize, Serialize};

/// One cross-window message. Serialized with a `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SyncMessage {
    /// Full document snapshot; the receiver overwrites its documents.
    EditorUpdate { data: Snapshot },
    SetActiveTab { tab: LanguageId },
    TabMode { value: bool },
    ApplySettings {
        theme: Theme,
        #[serde(rename = "fontSize")]
        font_size: u32,
    },
    /// Detached window asks to be docked again.
    ReturnEditor,
    /// Detached window is closing.
    EditorWindowClosed,
}

impl SyncMessage {
    /// Tag value, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncMessage::EditorUpdate { .. } => "editorUpdate",
            SyncMessage::SetActiveTab { .. } => "setActiveTab",
            SyncMessage::TabMode { .. } => "tabMode",
            SyncMessage::ApplySettings { .. } => "applySettings",
            SyncMessage::ReturnEditor => "returnEditor",
            SyncMessage::EditorWindowClosed => "editorWindowClosed",
        }
    }
}
