// ==========================================
// Nikora Promo Orders - Archive Builder
// ==========================================
// Packs the per-day workbooks into one zip, in memory
// Entry order is insertion order, Monday first
// ==========================================

use crate::exporter::error::ExportResult;
use std::io::{Cursor, Write};
use tracing::debug;
use zip::write::FileOptions;
use zip::CompressionMethod;
use zip::ZipWriter;

// ==========================================
// ArchiveBuilder - named byte blobs to zip bytes
// ==========================================
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    entries: usize,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            entries: 0,
        }
    }

    /// Append one file to the archive
    pub fn add_file(&mut self, file_name: &str, bytes: &[u8]) -> ExportResult<()> {
        let options: FileOptions<'_, ()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer.start_file(file_name, options)?;
        self.writer.write_all(bytes)?;
        self.entries += 1;
        Ok(())
    }

    /// Close the archive and return its bytes
    pub fn finish(self) -> ExportResult<Vec<u8>> {
        let cursor = self.writer.finish()?;
        let bytes = cursor.into_inner();
        debug!(entries = self.entries, bytes = bytes.len(), "archive closed");
        Ok(bytes)
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
