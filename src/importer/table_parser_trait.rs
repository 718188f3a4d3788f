// ==========================================
// Nikora Promo Orders - Import Trait Interfaces
// ==========================================
// Seam between file formats and the rest of the pipeline:
// every parser yields the same DataTable shape
// ==========================================

use crate::domain::DataTable;
use crate::importer::error::ImportResult;
use std::path::Path;

/// File parser interface
///
/// Implementations read one file format and produce a uniform table with
/// trimmed headers and cells and fully blank rows skipped.
pub trait TableParser {
    /// Parse a file on disk into a table
    fn parse_table(&self, file_path: &Path) -> ImportResult<DataTable>;
}
