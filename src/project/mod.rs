//! Project persistence for StatCode
//!
//! A project is a named snapshot of every editor document. Projects are kept
//! as a JSON array under the `projects` storage key, in insertion order, with
//! names unique within the list.

mod store;

pub use store::*;

use crate::document::{LanguageId, Snapshot};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Project Record
// ─────────────────────────────────────────────────────────────────────────────

/// A stored project.
///
/// Missing language fields deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub html: String,
    pub css: String,
    pub js: String,
    pub php: String,
    pub python: String,
    pub sql: String,
    pub json: String,
    pub markdown: String,
}

impl Project {
    /// Build a record from a snapshot. Languages absent from the snapshot are
    /// stored empty.
    pub fn from_snapshot(name: impl Into<String>, snapshot: &Snapshot) -> Self {
        let text = |lang: LanguageId| snapshot.get(&lang).cloned().unwrap_or_default();
        Self {
            name: name.into(),
            html: text(LanguageId::Html),
            css: text(LanguageId::Css),
            js: text(LanguageId::Js),
            php: text(LanguageId::Php),
            python: text(LanguageId::Python),
            sql: text(LanguageId::Sql),
            json: text(LanguageId::Json),
            markdown: text(LanguageId::Markdown),
        }
    }

    /// Text stored for one language.
    pub fn text(&self, lang: LanguageId) -> &str {
        match lang {
            LanguageId::Html => &self.html,
            LanguageId::Css => &self.css,
            LanguageId::Js => &self.js,
            LanguageId::Php => &self.php,
            LanguageId::Python => &self.python,
            LanguageId::Sql => &self.sql,
            LanguageId::Json => &self.json,
            LanguageId::Markdown => &self.markdown,
        }
    }

    /// Full snapshot of every language.
    pub fn snapshot(&self) -> Snapshot {
        LanguageId::ALL
            .into_iter()
            .map(|lang| (lang, self.text(lang).to_string()))
            .collect()
    }
}
