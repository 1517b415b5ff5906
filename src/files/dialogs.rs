//! Native file dialog integration using the rfd crate

use crate::export::ExportFile;
use rfd::FileDialog;
use std::path::PathBuf;

/// Opens a native save dialog for an export.
///
/// The dialog is prefilled with the export's file name and filtered to its
/// extension. Returns `Some(PathBuf)` if a location was selected, `None` if
/// cancelled.
pub fn save_export_dialog(file: &ExportFile, title: &str) -> Option<PathBuf> {
    let extension = file.format.bare_extension();
    FileDialog::new()
        .set_title(title)
        .add_filter(extension.to_uppercase(), &[extension])
        .add_filter("All Files", &["*"])
        .set_file_name(&file.file_name)
        .save_file()
}
