//! Markdown support
//!
//! - `renderer`: substitution-based Markdown to HTML conversion for the preview
//! - `formatting`: toolbar snippets inserted around the editor selection
//! - `syntax`: syntect highlighting for every source editor

pub mod formatting;
mod renderer;
pub mod syntax;

pub use formatting::{apply_snippet, SnippetAction};
pub use renderer::render;
pub use syntax::HighlightCache;
