//! Preview surfaces
//!
//! A surface receives the composed document wholesale; each write replaces
//! everything written before.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the on-disk preview document.
pub const PREVIEW_FILE_NAME: &str = "preview.html";

/// Sink for the composed preview document.
pub trait PreviewSurface {
    /// Replace the entire prior content with `html`.
    fn write_document(&mut self, html: &str) -> Result<()>;
}

// ─────────────────────────────────────────────────────────────────────────────
// File Surface
// ─────────────────────────────────────────────────────────────────────────────

/// Writes the preview to `preview.html` so it can be opened in a browser.
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    /// Surface writing `preview.html` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(PREVIEW_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreviewSurface for FileSurface {
    fn write_document(&mut self, html: &str) -> Result<()> {
        let to_error = |source| Error::FileWrite {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(to_error)?;
        }

        let temp = self.path.with_extension("html.tmp");
        fs::write(&temp, html).map_err(to_error)?;
        fs::rename(&temp, &self.path).map_err(to_error)?;

        debug!("Preview written to {} ({} bytes)", self.path.display(), html.len());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Memory Surface
// ─────────────────────────────────────────────────────────────────────────────

/// Keeps the last document in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    document: String,
    writes: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last document written.
    pub fn document(&self) -> &str {
        &self.document
    }

    /// How many writes have been made.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl PreviewSurface for MemorySurface {
    fn write_document(&mut self, html: &str) -> Result<()> {
        self.document = html.to_string();
        self.writes += 1;
        Ok(())
    }
}

impl<S: PreviewSurface + ?Sized> PreviewSurface for Box<S> {
    fn write_document(&mut self, html: &str) -> Result<()> {
        (**self).write_document(html)
    }
}
