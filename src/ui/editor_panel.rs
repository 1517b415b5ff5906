//! Editor panel shared by the docked layout and the detached window.
//!
//! Draws the tab strip (tab mode only), the Markdown snippet toolbar (tab
//! mode with Markdown active) and one highlighted editor per visible
//! language. The panel reports what happened; callers route it to the
//! owning window's state.

use std::collections::BTreeMap;

use crate::document::LanguageId;
use crate::editor::{place_cursor, CodeEditor};
use crate::i18n::Strings;
use crate::markdown::{HighlightCache, SnippetAction};
use crate::sync::EditorSession;
use crate::theme::ThemeColors;
use eframe::egui::{self, RichText, ScrollArea, Ui};

/// Rows per editor in the stacked layout.
const STACKED_ROWS: usize = 6;

/// What happened in the panel this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorPanelOutput {
    /// A document was typed into.
    pub edited: Option<LanguageId>,
    /// Tab was pressed inside this document's editor.
    pub soft_tab: Option<LanguageId>,
    /// A tab was clicked in the tab strip.
    pub selected_tab: Option<LanguageId>,
    /// A Markdown toolbar button was clicked.
    pub snippet: Option<SnippetAction>,
}

/// Per-window editor panel. Holds one highlight cache per language.
pub struct EditorPanel {
    salt: &'static str,
    caches: BTreeMap<LanguageId, HighlightCache>,
}

impl EditorPanel {
    /// `salt` keeps widget IDs of the two windows apart.
    pub fn new(salt: &'static str) -> Self {
        Self {
            salt,
            caches: BTreeMap::new(),
        }
    }

    pub fn editor_id(&self, lang: LanguageId) -> egui::Id {
        egui::Id::new((self.salt, "editor", lang))
    }

    /// Move the cursor of `lang`'s editor to `char_idx`.
    pub fn place_cursor(&self, ctx: &egui::Context, lang: LanguageId, char_idx: usize) {
        place_cursor(ctx, self.editor_id(lang), char_idx);
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        session: &mut EditorSession,
        strings: &Strings,
        colors: &ThemeColors,
    ) -> EditorPanelOutput {
        let mut output = EditorPanelOutput::default();

        if session.tab_mode {
            output.selected_tab = tab_strip(ui, session.active_tab, colors);
        }
        if session.markdown_active() {
            output.snippet = snippet_toolbar(ui, strings);
        }

        let theme = session.theme;
        let font_size = session.font_size as f32;
        let stacked = !session.tab_mode;

        ScrollArea::vertical()
            .id_source((self.salt, "editors"))
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for lang in session.visible_languages() {
                    if stacked {
                        ui.label(RichText::new(lang.label()).strong().color(colors.text_muted));
                    }
                    let rows = if stacked {
                        STACKED_ROWS
                    } else {
                        let row_height =
                            ui.fonts(|f| f.row_height(&egui::FontId::monospace(font_size)));
                        ((ui.available_height() / row_height.max(1.0)) as usize).max(STACKED_ROWS)
                    };

                    let id = self.editor_id(lang);
                    let cache = self.caches.entry(lang).or_default();
                    let editor = CodeEditor::new(session.docs.get_mut(lang), lang, cache)
                        .theme(theme)
                        .font_size(font_size)
                        .id(id)
                        .desired_rows(rows)
                        .show(ui);

                    if editor.changed {
                        output.edited = Some(lang);
                    }
                    if editor.tab_pressed {
                        output.soft_tab = Some(lang);
                    }
                    if stacked {
                        ui.add_space(6.0);
                    }
                }
            });

        output
    }
}

/// One selectable label per language. Returns the clicked one.
fn tab_strip(ui: &mut Ui, active: Option<LanguageId>, colors: &ThemeColors) -> Option<LanguageId> {
    let mut clicked = None;
    ui.horizontal_wrapped(|ui| {
        for lang in LanguageId::ALL {
            let selected = active == Some(lang);
            let text = if selected {
                RichText::new(lang.label()).strong().color(colors.accent)
            } else {
                RichText::new(lang.label())
            };
            if ui.selectable_label(selected, text).clicked() {
                clicked = Some(lang);
            }
        }
    });
    ui.separator();
    clicked
}

fn snippet_toolbar(ui: &mut Ui, strings: &Strings) -> Option<SnippetAction> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        for action in SnippetAction::ALL {
            if ui
                .button(RichText::new(action.icon()).monospace())
                .on_hover_text(strings.snippet_tooltip(action))
                .clicked()
            {
                clicked = Some(action);
            }
        }
    });
    ui.separator();
    clicked
}
