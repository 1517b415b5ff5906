//! Syntax Highlighting Module
//!
//! This module integrates syntect to color the source editors. Highlighted
//! text is produced as an egui `LayoutJob` so it can be plugged straight into
//! a `TextEdit` layouter.
//!
//! # Features
//! - Loads and caches syntect SyntaxSet and ThemeSet once per process
//! - Maps each application theme to a bundled syntect theme
//! - Resolves editor languages to syntect syntaxes by extension
//! - Memoizes the last layout per editor so unchanged text is not re-highlighted

use crate::config::Theme as AppTheme;
use crate::document::LanguageId;
use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{Color32, FontId, Stroke};
use log::{debug, warn};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use syntect::easy::HighlightLines;
use syntect::highlighting::{FontStyle, Style, Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Fallback theme if the mapped theme is not bundled
pub const FALLBACK_THEME: &str = "base16-ocean.dark";

/// Syntect theme used for each application theme.
pub fn syntect_theme_name(theme: AppTheme) -> &'static str {
    match theme {
        AppTheme::Dark => "base16-ocean.dark",
        AppTheme::Light => "InspiredGitHub",
        AppTheme::Gradient => "base16-eighties.dark",
        AppTheme::Futuristic => "base16-mocha.dark",
        AppTheme::Hacker => "Solarized (dark)",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Syntax Highlighter
// ─────────────────────────────────────────────────────────────────────────────

/// Syntax highlighter that caches syntect sets for performance.
///
/// Loading the sets is expensive; use [`get_highlighter`] for the shared
/// instance.
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter {
    /// Create a new syntax highlighter with default syntax and theme sets.
    pub fn new() -> Self {
        debug!("Loading syntect syntax and theme sets");
        let syntax_set = SyntaxSet::load_defaults_newlines();
        let theme_set = ThemeSet::load_defaults();
        debug!(
            "Loaded {} syntaxes and {} themes",
            syntax_set.syntaxes().len(),
            theme_set.themes.len()
        );
        Self {
            syntax_set,
            theme_set,
        }
    }

    /// Get a theme by name, falling back to the default if not found.
    ///
    /// Returns `None` only if the bundled theme set is empty.
    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.theme_set
            .themes
            .get(name)
            .or_else(|| self.theme_set.themes.get(FALLBACK_THEME))
            .or_else(|| self.theme_set.themes.values().next())
    }

    /// Find the syntax definition for an editor language.
    fn find_syntax(&self, language: LanguageId) -> Option<&SyntaxReference> {
        self.syntax_set
            .find_syntax_by_extension(language.syntax_token())
            .or_else(|| self.syntax_set.find_syntax_by_name(language.label()))
    }

    /// Build a `LayoutJob` for `code`.
    ///
    /// The job's text always equals `code`; unknown languages or highlighting
    /// failures fall back to the theme's plain foreground color.
    pub fn layout_job(
        &self,
        code: &str,
        language: LanguageId,
        theme: AppTheme,
        font_size: f32,
    ) -> LayoutJob {
        let mut job = LayoutJob::default();
        let font_id = FontId::monospace(font_size);

        let Some(syntect_theme) = self.get_theme(syntect_theme_name(theme)) else {
            job.append(code, 0.0, plain_format(&font_id, Color32::GRAY));
            return job;
        };
        let default_color = syntect_theme
            .settings
            .foreground
            .map(syntect_to_egui_color)
            .unwrap_or(Color32::GRAY);

        let Some(syntax) = self.find_syntax(language) else {
            debug!("No syntax found for language: {}", language);
            job.append(code, 0.0, plain_format(&font_id, default_color));
            return job;
        };

        let mut highlighter = HighlightLines::new(syntax, syntect_theme);
        for line in LinesWithEndings::from(code) {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    for (style, text) in ranges {
                        job.append(text, 0.0, style_to_format(style, &font_id));
                    }
                }
                Err(e) => {
                    warn!("Failed to highlight line: {}", e);
                    job.append(line, 0.0, plain_format(&font_id, default_color));
                }
            }
        }
        job
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Helper Functions
// ─────────────────────────────────────────────────────────────────────────────

/// Convert syntect Color to egui Color32.
pub fn syntect_to_egui_color(color: syntect::highlighting::Color) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

fn plain_format(font_id: &FontId, color: Color32) -> TextFormat {
    TextFormat {
        font_id: font_id.clone(),
        color,
        ..Default::default()
    }
}

/// Convert a syntect Style to an egui TextFormat.
fn style_to_format(style: Style, font_id: &FontId) -> TextFormat {
    let color = syntect_to_egui_color(style.foreground);
    TextFormat {
        font_id: font_id.clone(),
        color,
        italics: style.font_style.contains(FontStyle::ITALIC),
        underline: if style.font_style.contains(FontStyle::UNDERLINE) {
            Stroke::new(1.0, color)
        } else {
            Stroke::NONE
        },
        ..Default::default()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Global Highlighter Instance
// ─────────────────────────────────────────────────────────────────────────────

static HIGHLIGHTER: OnceLock<SyntaxHighlighter> = OnceLock::new();

/// Get or create the global syntax highlighter.
pub fn get_highlighter() -> &'static SyntaxHighlighter {
    HIGHLIGHTER.get_or_init(SyntaxHighlighter::new)
}

// ─────────────────────────────────────────────────────────────────────────────
// Layout Cache
// ─────────────────────────────────────────────────────────────────────────────

/// Remembers the last layout produced for one editor.
#[derive(Default)]
pub struct HighlightCache {
    key: Option<u64>,
    job: LayoutJob,
}

impl HighlightCache {
    /// Return the highlighted layout for `code`, re-highlighting only when the
    /// text, language, theme or font size changed.
    pub fn layout(
        &mut self,
        code: &str,
        language: LanguageId,
        theme: AppTheme,
        font_size: f32,
    ) -> LayoutJob {
        let mut hasher = DefaultHasher::new();
        code.hash(&mut hasher);
        language.hash(&mut hasher);
        syntect_theme_name(theme).hash(&mut hasher);
        font_size.to_bits().hash(&mut hasher);
        let key = hasher.finish();

        if self.key != Some(key) {
            self.job = get_highlighter().layout_job(code, language, theme, font_size);
            self.key = Some(key);
        }
        self.job.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
