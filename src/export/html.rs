//! Standalone HTML export
//!
//! Wraps the HTML, CSS and JS documents in a complete page. Unlike the live
//! preview, the script is embedded without a guard and Markdown is not
//! included.

use crate::document::{DocumentSet, LanguageId};

/// Title used when the project has no name.
pub const DEFAULT_TITLE: &str = "StatCode";

/// Generate a complete HTML document from the editor contents.
///
/// `title` is embedded as-is; an empty title becomes [`DEFAULT_TITLE`].
pub fn generate_html_document(docs: &DocumentSet, title: &str) -> String {
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"UTF-8\"><title>{title}</title>\
         <style>{css}</style></head><body>{body}<script>{js}</script></body></html>",
        title = title,
        css = docs.text(LanguageId::Css),
        body = docs.text(LanguageId::Html),
        js = docs.text(LanguageId::Js),
    )
}
