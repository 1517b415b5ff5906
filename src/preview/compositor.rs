//! Preview document composition
//!
//! Assembles the editor contents into one HTML document: raw HTML first, then
//! the stylesheet, the guarded script and the rendered Markdown.

use crate::document::{DocumentSet, LanguageId};
use crate::markdown::render;

/// Compose the preview document.
///
/// CSS and JS are embedded verbatim. Script errors are caught inside the
/// document and logged to the page console.
pub fn compose(docs: &DocumentSet) -> String {
    let html = docs.text(LanguageId::Html);
    let css = docs.text(LanguageId::Css);
    let js = docs.text(LanguageId::Js);
    let markdown = render(docs.text(LanguageId::Markdown));

    format!(
        "{html}<style>{css}</style><script>try {{ {js} }} catch (e) {{ console.error(e); }}</script><div>{markdown}</div>"
    )
}
