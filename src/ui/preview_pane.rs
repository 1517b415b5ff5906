//! Preview pane: the composed document as it was last written to the
//! preview surface, shown as highlighted read-only source.

use std::path::Path;

use crate::config::Theme;
use crate::document::LanguageId;
use crate::i18n::Strings;
use crate::markdown::HighlightCache;
use crate::theme::ThemeColors;
use eframe::egui::{RichText, ScrollArea, TextEdit, Ui};

/// Styling inputs for [`show_preview_pane`].
#[derive(Debug, Clone, Copy)]
pub struct PreviewStyle<'a> {
    pub theme: Theme,
    pub font_size: f32,
    pub strings: &'a Strings,
    pub colors: &'a ThemeColors,
}

pub fn show_preview_pane(
    ui: &mut Ui,
    document: &str,
    preview_path: Option<&Path>,
    cache: &mut HighlightCache,
    style: PreviewStyle<'_>,
) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(style.strings.preview).strong());
        if let Some(path) = preview_path {
            ui.label(
                RichText::new(path.display().to_string())
                    .small()
                    .color(style.colors.text_muted),
            );
        }
    });
    ui.separator();

    let mut layouter = |ui: &Ui, text: &str, wrap_width: f32| {
        let mut job = cache.layout(text, LanguageId::Html, style.theme, style.font_size);
        job.wrap.max_width = wrap_width;
        ui.fonts(|f| f.layout_job(job))
    };

    ScrollArea::vertical()
        .id_source("preview_pane")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            // `&str` is a read-only text buffer.
            let mut source = document;
            ui.add(
                TextEdit::multiline(&mut source)
                    .code_editor()
                    .desired_width(f32::INFINITY)
                    .layouter(&mut layouter),
            );
        });
}
