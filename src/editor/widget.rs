//! Code editor widget for StatCode
//!
//! This module wraps egui's TextEdit with syntect highlighting, keeps the
//! document's selection in sync with the widget cursor and turns the Tab key
//! into a soft-tab request instead of a focus change.

use crate::config::Theme;
use crate::document::{Document, LanguageId};
use crate::markdown::HighlightCache;
use eframe::egui::{self, text::CCursor, text::CCursorRange, Key, Modifiers, TextEdit, Ui};
use std::sync::Arc;

/// Result of showing the editor widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorOutput {
    /// The user typed into the editor this frame.
    pub changed: bool,
    /// Tab was pressed while the editor had focus. The key is consumed; the
    /// caller inserts the soft tab.
    pub tab_pressed: bool,
}

/// A highlighted editor bound to one document.
///
/// # Example
///
/// ```ignore
/// let output = CodeEditor::new(&mut doc, LanguageId::Css, &mut cache)
///     .theme(settings.theme)
///     .font_size(settings.font_points())
///     .id(egui::Id::new(("primary", LanguageId::Css)))
///     .show(ui);
/// ```
pub struct CodeEditor<'a> {
    doc: &'a mut Document,
    language: LanguageId,
    cache: &'a mut HighlightCache,
    theme: Theme,
    font_size: f32,
    id: Option<egui::Id>,
    desired_rows: usize,
}

impl<'a> CodeEditor<'a> {
    pub fn new(doc: &'a mut Document, language: LanguageId, cache: &'a mut HighlightCache) -> Self {
        Self {
            doc,
            language,
            cache,
            theme: Theme::default(),
            font_size: 14.0,
            id: None,
            desired_rows: 8,
        }
    }

    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Set the widget ID. Needed to place the cursor from outside.
    #[must_use]
    pub fn id(mut self, id: egui::Id) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn desired_rows(mut self, rows: usize) -> Self {
        self.desired_rows = rows;
        self
    }

    /// Show the editor and return the output.
    pub fn show(self, ui: &mut Ui) -> EditorOutput {
        let id = self
            .id
            .unwrap_or_else(|| ui.id().with(("editor", self.language)));

        // Consume Tab before the TextEdit sees it, otherwise it would insert
        // a tab character.
        let tab_pressed = ui.memory(|m| m.has_focus(id))
            && ui.input_mut(|i| i.consume_key(Modifiers::NONE, Key::Tab));

        let language = self.language;
        let theme = self.theme;
        let font_size = self.font_size;
        let cache = self.cache;
        let mut layouter = |ui: &Ui, text: &str, wrap_width: f32| -> Arc<egui::Galley> {
            let mut job = cache.layout(text, language, theme, font_size);
            job.wrap.max_width = wrap_width;
            ui.fonts(|f| f.layout_job(job))
        };

        let output = TextEdit::multiline(&mut self.doc.text)
            .id(id)
            .code_editor()
            .lock_focus(true)
            .desired_rows(self.desired_rows)
            .desired_width(f32::INFINITY)
            .layouter(&mut layouter)
            .show(ui);

        if let Some(range) = output.cursor_range {
            self.doc
                .set_selection(range.primary.ccursor.index, range.secondary.ccursor.index);
        }

        EditorOutput {
            changed: output.response.changed(),
            tab_pressed,
        }
    }
}

/// Collapse the cursor of the editor `id` to `char_idx` and focus it.
pub fn place_cursor(ctx: &egui::Context, id: egui::Id, char_idx: usize) {
    if let Some(mut state) = TextEdit::load_state(ctx, id) {
        state
            .cursor
            .set_char_range(Some(CCursorRange::one(CCursor::new(char_idx))));
        state.store(ctx, id);
    }
    ctx.memory_mut(|m| m.request_focus(id));
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(
        doc: &mut Document,
        cache: &mut HighlightCache,
        input: egui::RawInput,
    ) -> EditorOutput {
        let ctx = egui::Context::default();
        let mut result = EditorOutput::default();
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                result = CodeEditor::new(&mut *doc, LanguageId::Css, &mut *cache)
                    .id(egui::Id::new("test-editor"))
                    .show(ui);
            });
        });
        result
    }

    #[test]
    fn test_unfocused_editor_leaves_document_alone() {
        let mut doc = Document::new("h1 { color: red; }");
        let mut cache = HighlightCache::default();
        let output = run_frame(&mut doc, &mut cache, egui::RawInput::default());
        assert_eq!(output, EditorOutput::default());
        assert_eq!(doc.text, "h1 { color: red; }");
        assert_eq!(doc.selection, (0, 0));
    }

    #[test]
    fn test_tab_ignored_without_focus() {
        let mut doc = Document::new("p {}");
        let mut cache = HighlightCache::default();
        let input = egui::RawInput {
            events: vec![egui::Event::Key {
                key: Key::Tab,
                physical_key: None,
                pressed: true,
                repeat: false,
                modifiers: Modifiers::NONE,
            }],
            ..Default::default()
        };
        let output = run_frame(&mut doc, &mut cache, input);
        assert!(!output.tab_pressed);
        assert_eq!(doc.text, "p {}");
    }
}
