//! Editor documents
//!
//! One `Document` per supported language, held together in a `DocumentSet`.
//! A `Snapshot` is the language-to-text map exchanged with the project store
//! and the detached editor window.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ─────────────────────────────────────────────────────────────────────────────
// Language Identifier
// ─────────────────────────────────────────────────────────────────────────────

/// A supported editor language.
///
/// Variant order is the fixed display order of the editor panels and tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Html,
    Css,
    Js,
    Php,
    Python,
    Sql,
    Json,
    Markdown,
}

impl LanguageId {
    /// All languages in display order.
    pub const ALL: [LanguageId; 8] = [
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Js,
        LanguageId::Php,
        LanguageId::Python,
        LanguageId::Sql,
        LanguageId::Json,
        LanguageId::Markdown,
    ];

    /// The lowercase token used in storage and messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Js => "js",
            LanguageId::Php => "php",
            LanguageId::Python => "python",
            LanguageId::Sql => "sql",
            LanguageId::Json => "json",
            LanguageId::Markdown => "markdown",
        }
    }

    /// Label shown on panel headers and tabs.
    pub fn label(&self) -> &'static str {
        match self {
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Js => "JS",
            LanguageId::Php => "PHP",
            LanguageId::Python => "Python",
            LanguageId::Sql => "SQL",
            LanguageId::Json => "JSON",
            LanguageId::Markdown => "Markdown",
        }
    }

    /// File extension token understood by the syntax highlighter.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Js => "js",
            LanguageId::Php => "php",
            LanguageId::Python => "py",
            LanguageId::Sql => "sql",
            LanguageId::Json => "json",
            LanguageId::Markdown => "md",
        }
    }

    /// Starter content shown in a fresh playground.
    pub fn placeholder(&self) -> &'static str {
        match self {
            LanguageId::Html => "<h1>Hello, StatCode!</h1>",
            LanguageId::Css => "h1 { color: #39FF14; text-align: center; }",
            LanguageId::Js => "console.log(\"Hello from StatCode!\");",
            LanguageId::Php => "<?php echo \"Hello from PHP!\"; ?>",
            LanguageId::Python => "print(\"Hello from Python!\")",
            LanguageId::Sql => "SELECT * FROM users;",
            LanguageId::Json => "{\n  \"name\": \"StatCode\",\n  \"version\": \"1.0\"\n}",
            LanguageId::Markdown => "# Hello, Markdown!\nThis is a test.",
        }
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full or partial map of language to source text.
pub type Snapshot = BTreeMap<LanguageId, String>;

// ─────────────────────────────────────────────────────────────────────────────
// Document
// ─────────────────────────────────────────────────────────────────────────────

/// Source text for one language plus its selection as character offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub text: String,
    /// `(start, end)` in characters, `start <= end`.
    pub selection: (usize, usize),
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: (0, 0),
        }
    }

    /// Number of characters in the document.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Set the selection, ordering and clamping the offsets to the text.
    pub fn set_selection(&mut self, a: usize, b: usize) {
        let len = self.char_len();
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.selection = (start.min(len), end.min(len));
    }

    /// Replace the text, keeping the selection within bounds.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let (start, end) = self.selection;
        self.set_selection(start, end);
    }

    /// Replace the selected range with two spaces and collapse the cursor
    /// after them.
    pub fn insert_soft_tab(&mut self) -> usize {
        let (start, end) = self.selection;
        let cursor = replace_char_range(&mut self.text, start, end, "  ");
        self.selection = (cursor, cursor);
        cursor
    }
}

/// Byte offset of the `char_idx`-th character, or the text length past the end.
pub fn char_to_byte(text: &str, char_idx: usize) -> usize {
    text.char_indices()
        .nth(char_idx)
        .map(|(byte, _)| byte)
        .unwrap_or(text.len())
}

/// Replace the characters in `start..end` with `insert`, returning the
/// character offset just past the inserted text.
pub fn replace_char_range(text: &mut String, start: usize, end: usize, insert: &str) -> usize {
    let len = text.chars().count();
    let start = start.min(len);
    let end = end.clamp(start, len);
    let byte_start = char_to_byte(text, start);
    let byte_end = char_to_byte(text, end);
    text.replace_range(byte_start..byte_end, insert);
    start + insert.chars().count()
}

// ─────────────────────────────────────────────────────────────────────────────
// Document Set
// ─────────────────────────────────────────────────────────────────────────────

/// Exactly one document per language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSet {
    docs: BTreeMap<LanguageId, Document>,
}

impl Default for DocumentSet {
    fn default() -> Self {
        Self::placeholder()
    }
}

impl DocumentSet {
    /// A set where every document is empty.
    pub fn empty() -> Self {
        Self {
            docs: LanguageId::ALL
                .into_iter()
                .map(|lang| (lang, Document::default()))
                .collect(),
        }
    }

    /// The fixed starter content.
    pub fn placeholder() -> Self {
        Self {
            docs: LanguageId::ALL
                .into_iter()
                .map(|lang| (lang, Document::new(lang.placeholder())))
                .collect(),
        }
    }

    pub fn get(&self, lang: LanguageId) -> &Document {
        // Every language is inserted at construction and never removed.
        &self.docs[&lang]
    }

    pub fn get_mut(&mut self, lang: LanguageId) -> &mut Document {
        self.docs.entry(lang).or_default()
    }

    pub fn text(&self, lang: LanguageId) -> &str {
        &self.get(lang).text
    }

    pub fn set_text(&mut self, lang: LanguageId, text: impl Into<String>) {
        self.get_mut(lang).set_text(text);
    }

    /// Map of every language to its current text.
    pub fn snapshot(&self) -> Snapshot {
        self.docs
            .iter()
            .map(|(lang, doc)| (*lang, doc.text.clone()))
            .collect()
    }

    /// Overwrite the listed documents; languages absent from the map keep
    /// their text.
    pub fn apply_snapshot(&mut self, snapshot: &Snapshot) {
        for (lang, text) in snapshot {
            self.set_text(*lang, text.clone());
        }
    }

    /// Insert a soft tab into one document, see [`Document::insert_soft_tab`].
    pub fn insert_soft_tab(&mut self, lang: LanguageId) -> usize {
        self.get_mut(lang).insert_soft_tab()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
