//! Editor session state shared by both windows, and the synchronizer that
//! applies incoming messages to it.

use super::{SyncEndpoint, SyncMessage};
use crate::config::{Settings, Theme};
use crate::document::{DocumentSet, LanguageId};
use log::{debug, info};

// ─────────────────────────────────────────────────────────────────────────────
// Editor Session
// ─────────────────────────────────────────────────────────────────────────────

/// Everything one window needs to draw its editors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    pub docs: DocumentSet,
    /// One panel at a time (tabs) instead of all panels stacked.
    pub tab_mode: bool,
    pub active_tab: Option<LanguageId>,
    pub theme: Theme,
    pub font_size: u32,
}

impl Default for EditorSession {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            docs: DocumentSet::placeholder(),
            tab_mode: false,
            active_tab: None,
            theme: settings.theme,
            font_size: settings.font_size,
        }
    }
}

impl EditorSession {
    /// Session seeded with the user's theme and font size.
    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            theme: settings.theme,
            font_size: settings.font_size,
            ..Self::default()
        }
    }

    /// A blank session as first shown by a freshly opened detached window,
    /// before the primary's full sync arrives.
    pub fn detached() -> Self {
        Self {
            docs: DocumentSet::empty(),
            ..Self::default()
        }
    }

    /// Whether the Markdown toolbar applies: tab mode with Markdown active.
    pub fn markdown_active(&self) -> bool {
        self.tab_mode && self.active_tab == Some(LanguageId::Markdown)
    }

    /// Languages whose panels are visible, in display order.
    pub fn visible_languages(&self) -> Vec<LanguageId> {
        if self.tab_mode {
            self.active_tab.into_iter().collect()
        } else {
            LanguageId::ALL.to_vec()
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Synchronizer
// ─────────────────────────────────────────────────────────────────────────────

/// Which window a synchronizer runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Detached,
}

/// What the window must do after applying messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncEffect {
    /// The window's preview must be re-rendered.
    pub refresh_preview: bool,
    /// The detached window is gone; restore the docked editor panel.
    pub redock: bool,
}

impl SyncEffect {
    fn merge(&mut self, other: SyncEffect) {
        self.refresh_preview |= other.refresh_preview;
        self.redock |= other.redock;
    }
}

/// Applies messages to one window's session and sends its own changes to the
/// other window.
#[derive(Debug)]
pub struct Synchronizer {
    role: Role,
    endpoint: Option<SyncEndpoint>,
}

impl Synchronizer {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            endpoint: None,
        }
    }

    /// Synchronizer already linked to the other window.
    pub fn connected(role: Role, endpoint: SyncEndpoint) -> Self {
        Self {
            role,
            endpoint: Some(endpoint),
        }
    }

    pub fn attach(&mut self, endpoint: SyncEndpoint) {
        self.endpoint = Some(endpoint);
    }

    /// Drop the link. The peer observes the disconnect on its next send or
    /// drain.
    pub fn disconnect(&mut self) {
        self.endpoint = None;
    }

    /// Whether the other window is reachable.
    pub fn is_connected(&self) -> bool {
        self.endpoint.as_ref().is_some_and(SyncEndpoint::is_open)
    }

    /// Send a message if the other window is reachable.
    pub fn send(&mut self, message: SyncMessage) -> bool {
        match self.endpoint.as_mut() {
            Some(endpoint) if endpoint.is_open() => endpoint.send(message),
            _ => false,
        }
    }

    /// Send the current documents.
    pub fn send_documents(&mut self, session: &EditorSession) -> bool {
        self.send(SyncMessage::EditorUpdate {
            data: session.docs.snapshot(),
        })
    }

    /// Send documents, active tab (if any), tab mode and settings.
    pub fn send_full_sync(&mut self, session: &EditorSession) {
        if !self.is_connected() {
            return;
        }
        self.send_documents(session);
        if let Some(tab) = session.active_tab {
            self.send(SyncMessage::SetActiveTab { tab });
        }
        self.send(SyncMessage::TabMode {
            value: session.tab_mode,
        });
        self.send(SyncMessage::ApplySettings {
            theme: session.theme,
            font_size: session.font_size,
        });
    }

    /// Drain and apply every queued message.
    ///
    /// `preview_visible` is the detached window's local Markdown preview
    /// toggle; the primary ignores it.
    pub fn poll(&mut self, session: &mut EditorSession, preview_visible: bool) -> SyncEffect {
        let messages = match self.endpoint.as_mut() {
            Some(endpoint) => endpoint.drain(),
            None => return SyncEffect::default(),
        };

        let mut effect = SyncEffect::default();
        for message in messages {
            debug!("Sync received '{}' ({:?})", message.kind(), self.role);
            let entering_tab_mode = matches!(message, SyncMessage::TabMode { value: true });
            let tab_before = session.active_tab;
            effect.merge(self.apply(session, message, preview_visible));

            // The primary picks a default tab on entering tab mode; tell the
            // detached window so both show the same panel.
            if self.role == Role::Primary && entering_tab_mode && tab_before.is_none() {
                if let Some(tab) = session.active_tab {
                    self.send(SyncMessage::SetActiveTab { tab });
                }
            }
        }
        effect
    }

    /// Apply one message to `session`.
    pub fn apply(
        &self,
        session: &mut EditorSession,
        message: SyncMessage,
        preview_visible: bool,
    ) -> SyncEffect {
        let markdown_preview =
            |tab: Option<LanguageId>| preview_visible && tab == Some(LanguageId::Markdown);

        match (self.role, message) {
            (role, SyncMessage::EditorUpdate { data }) => {
                session.docs.apply_snapshot(&data);
                SyncEffect {
                    refresh_preview: match role {
                        Role::Primary => true,
                        Role::Detached => markdown_preview(session.active_tab),
                    },
                    redock: false,
                }
            }
            (role, SyncMessage::SetActiveTab { tab }) => {
                session.active_tab = Some(tab);
                SyncEffect {
                    refresh_preview: role == Role::Detached && markdown_preview(Some(tab)),
                    ..SyncEffect::default()
                }
            }
            (role, SyncMessage::TabMode { value }) => {
                session.tab_mode = value;
                if role == Role::Primary && value && session.active_tab.is_none() {
                    session.active_tab = Some(LanguageId::Html);
                }
                SyncEffect::default()
            }
            (_, SyncMessage::ApplySettings { theme, font_size }) => {
                session.theme = theme;
                session.font_size = font_size;
                SyncEffect::default()
            }
            (Role::Primary, SyncMessage::ReturnEditor) => {
                info!("Detached editor asked to return");
                SyncEffect {
                    redock: true,
                    ..SyncEffect::default()
                }
            }
            (Role::Primary, SyncMessage::EditorWindowClosed) => {
                info!("Detached editor window closed");
                SyncEffect {
                    redock: true,
                    ..SyncEffect::default()
                }
            }
            (Role::Detached, message) => {
                debug!("Detached window ignores '{}'", message.kind());
                SyncEffect::default()
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn linked() -> (Synchronizer, Synchronizer) {
        let (a, b) = SyncEndpoint::pair();
        (
            Synchronizer::connected(Role::Primary, a),
            Synchronizer::connected(Role::Detached, b),
        )
    }

    #[test]
    fn test_full_sync_mirrors_primary() {
        let (mut primary_sync, mut detached_sync) = linked();
        let mut primary = EditorSession::default();
        primary.tab_mode = true;
        primary.active_tab = Some(LanguageId::Css);
        primary.theme = Theme::Futuristic;
        primary.font_size = 20;

        let mut detached = EditorSession::detached();
        primary_sync.send_full_sync(&primary);
        detached_sync.poll(&mut detached, false);

        assert_eq!(detached, primary);
    }

    #[test]
    fn test_full_sync_without_active_tab_skips_tab_message() {
        let (mut primary_sync, mut detached_sync) = linked();
        let primary = EditorSession::default();
        let mut detached = EditorSession::detached();
        detached.active_tab = Some(LanguageId::Sql);

        primary_sync.send_full_sync(&primary);
        detached_sync.poll(&mut detached, false);
        assert_eq!(detached.active_tab, Some(LanguageId::Sql));
    }

    #[test]
    fn test_updates_mirror_in_both_directions_in_order() {
        let (mut primary_sync, mut detached_sync) = linked();
        let mut primary = EditorSession::default();
        let mut detached = EditorSession::detached();

        for text in ["a", "ab", "abc"] {
            detached.docs.set_text(LanguageId::Js, text);
            detached_sync.send_documents(&detached);
        }
        let effect = primary_sync.poll(&mut primary, false);
        assert_eq!(primary.docs, detached.docs);
        assert!(effect.refresh_preview);

        primary.docs.set_text(LanguageId::Php, "<?php ?>");
        primary_sync.send_documents(&primary);
        detached_sync.poll(&mut detached, false);
        assert_eq!(detached.docs.snapshot(), primary.docs.snapshot());
    }

    #[test]
    fn test_detached_preview_refresh_rules() {
        let detached_sync = Synchronizer::new(Role::Detached);
        let mut session = EditorSession::detached();
        let update = || SyncMessage::EditorUpdate {
            data: DocumentSet::placeholder().snapshot(),
        };

        let effect = detached_sync.apply(&mut session, update(), true);
        assert!(!effect.refresh_preview);

        session.active_tab = Some(LanguageId::Markdown);
        assert!(!detached_sync.apply(&mut session, update(), false).refresh_preview);
        assert!(detached_sync.apply(&mut session, update(), true).refresh_preview);

        let tab = SyncMessage::SetActiveTab {
            tab: LanguageId::Markdown,
        };
        assert!(detached_sync.apply(&mut session, tab, true).refresh_preview);
    }

    #[test]
    fn test_primary_tab_mode_defaults_to_html_and_announces_it() {
        let (mut primary_sync, mut detached_sync) = linked();
        let mut primary = EditorSession::default();
        let mut detached = EditorSession::detached();

        detached.tab_mode = true;
        detached_sync.send(SyncMessage::TabMode { value: true });
        primary_sync.poll(&mut primary, false);

        assert!(primary.tab_mode);
        assert_eq!(primary.active_tab, Some(LanguageId::Html));

        detached_sync.poll(&mut detached, false);
        assert_eq!(detached.active_tab, Some(LanguageId::Html));
    }

    #[test]
    fn test_detached_tab_mode_keeps_no_tab() {
        let sync = Synchronizer::new(Role::Detached);
        let mut session = EditorSession::detached();
        sync.apply(&mut session, SyncMessage::TabMode { value: true }, false);
        assert!(session.tab_mode);
        assert_eq!(session.active_tab, None);
    }

    #[test]
    fn test_return_and_close_redock_primary_only() {
        let primary = Synchronizer::new(Role::Primary);
        let detached = Synchronizer::new(Role::Detached);
        let mut session = EditorSession::default();

        for message in [SyncMessage::ReturnEditor, SyncMessage::EditorWindowClosed] {
            assert!(primary.apply(&mut session, message.clone(), false).redock);
            assert!(!detached.apply(&mut session, message, false).redock);
        }
    }

    #[test]
    fn test_apply_settings() {
        let sync = Synchronizer::new(Role::Detached);
        let mut session = EditorSession::detached();
        sync.apply(
            &mut session,
            SyncMessage::ApplySettings {
                theme: Theme::Light,
                font_size: 22,
            },
            false,
        );
        assert_eq!(session.theme, Theme::Light);
        assert_eq!(session.font_size, 22);
    }

    #[test]
    fn test_disconnected_sends_are_skipped() {
        let (mut primary_sync, detached_sync) = linked();
        drop(detached_sync);
        primary_sync.send_full_sync(&EditorSession::default());
        assert!(!primary_sync.is_connected());

        let mut lonely = Synchronizer::new(Role::Primary);
        assert!(!lonely.send(SyncMessage::ReturnEditor));
        assert_eq!(
            lonely.poll(&mut EditorSession::default(), false),
            SyncEffect::default()
        );
    }

    #[test]
    fn test_visible_languages() {
        let mut session = EditorSession::default();
        assert_eq!(session.visible_languages().len(), LanguageId::ALL.len());
        session.tab_mode = true;
        assert!(session.visible_languages().is_empty());
        session.active_tab = Some(LanguageId::Markdown);
        assert_eq!(session.visible_languages(), vec![LanguageId::Markdown]);
        assert!(session.markdown_active());
    }
}
