//! Live preview for StatCode
//!
//! The compositor turns the editor documents into one HTML document and the
//! surface receives it. A failed write keeps the previous preview.

mod compositor;
mod surface;

pub use compositor::compose;
pub use surface::{FileSurface, MemorySurface, PreviewSurface};

use crate::document::DocumentSet;
use log::warn;

/// Compose the documents, write them to `surface` and return the composed
/// document. A write failure is logged and leaves the surface unchanged.
pub fn refresh_preview<S: PreviewSurface + ?Sized>(docs: &DocumentSet, surface: &mut S) -> String {
    let document = compose(docs);
    if let Err(e) = surface.write_document(&document) {
        warn!("Preview update failed: {}", e);
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::LanguageId;
    use crate::error::{Error, Result};

    struct FailingSurface;

    impl PreviewSurface for FailingSurface {
        fn write_document(&mut self, _html: &str) -> Result<()> {
            Err(Error::Application("surface unavailable".to_string()))
        }
    }

    #[test]
    fn test_refresh_writes_composed_document() {
        let docs = DocumentSet::placeholder();
        let mut surface = MemorySurface::new();
        let document = refresh_preview(&docs, &mut surface);
        assert_eq!(document, compose(&docs));
        assert_eq!(surface.document(), document);
        assert_eq!(surface.writes(), 1);
    }

    #[test]
    fn test_refresh_tracks_latest_edit() {
        let mut docs = DocumentSet::placeholder();
        let mut surface = MemorySurface::new();
        refresh_preview(&docs, &mut surface);

        docs.set_text(LanguageId::Html, "<p>changed</p>");
        refresh_preview(&docs, &mut surface);
        assert!(surface.document().starts_with("<p>changed</p>"));
    }

    #[test]
    fn test_refresh_swallows_failures() {
        let docs = DocumentSet::placeholder();
        assert_eq!(refresh_preview(&docs, &mut FailingSurface), compose(&docs));
    }
}
