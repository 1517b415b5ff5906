//! Document Export Module for StatCode
//!
//! Exports the active editor's document to a file. Every language has a fixed
//! extension and MIME type; HTML exports a complete standalone page built
//! from the HTML, CSS and JS editors.
//!
//! # Architecture
//!
//! - `mod.rs` - Formats, export file assembly and writing
//! - `html.rs` - Standalone HTML page generation

pub mod html;

pub use html::generate_html_document;

use crate::document::{DocumentSet, LanguageId};
use crate::error::{Error, Result};
use log::info;
use std::fs;
use std::path::Path;

/// File stem used when the project has no name.
pub const DEFAULT_FILE_STEM: &str = "project";

// ─────────────────────────────────────────────────────────────────────────────
// Export Format
// ─────────────────────────────────────────────────────────────────────────────

/// File extension and MIME type for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportFormat {
    /// Extension including the leading dot
    pub extension: &'static str,
    pub mime: &'static str,
}

impl ExportFormat {
    pub fn for_language(lang: LanguageId) -> Self {
        let (extension, mime) = match lang {
            LanguageId::Html => (".html", "text/html"),
            LanguageId::Css => (".css", "text/css"),
            LanguageId::Js => (".js", "text/javascript"),
            LanguageId::Php => (".php", "application/x-httpd-php"),
            LanguageId::Python => (".py", "text/x-python"),
            LanguageId::Sql => (".sql", "text/sql"),
            LanguageId::Json => (".json", "application/json"),
            LanguageId::Markdown => (".md", "text/markdown"),
        };
        Self { extension, mime }
    }

    /// Extension without the leading dot, for file dialog filters.
    pub fn bare_extension(&self) -> &'static str {
        self.extension.trim_start_matches('.')
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Export File
// ─────────────────────────────────────────────────────────────────────────────

/// A file ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime: &'static str,
    pub content: String,
    pub format: ExportFormat,
}

/// Build the export for the active language (HTML when no tab is active).
pub fn export_active(
    docs: &DocumentSet,
    active: Option<LanguageId>,
    project_name: &str,
) -> ExportFile {
    let lang = active.unwrap_or(LanguageId::Html);
    let format = ExportFormat::for_language(lang);

    let content = match lang {
        LanguageId::Html => generate_html_document(docs, project_name),
        other => docs.text(other).to_string(),
    };

    let stem = if project_name.is_empty() {
        DEFAULT_FILE_STEM
    } else {
        project_name
    };

    ExportFile {
        file_name: format!("{}{}", stem, format.extension),
        mime: format.mime,
        content,
        format,
    }
}

/// Write an export to `path`.
pub fn write_export(path: &Path, file: &ExportFile) -> Result<()> {
    fs::write(path, file.content.as_bytes()).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "Exported {} ({}, {} bytes) to {}",
        file.file_name,
        file.mime,
        file.content.len(),
        path.display()
    );
    Ok(())
}
