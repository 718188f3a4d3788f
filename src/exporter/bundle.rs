// ==========================================
// Nikora Promo Orders - Export Bundle
// ==========================================
// Turns a split outcome into named workbooks plus one archive
// File order is fixed: Monday..Friday, then Unassigned
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::DataTable;
use crate::engine::SplitOutcome;
use crate::exporter::archive::ArchiveBuilder;
use crate::exporter::error::ExportResult;
use crate::exporter::excel_writer::ExcelWriter;
use crate::exporter::naming::{ExportNamer, XLSX_MIME, ZIP_MIME};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

/// One export artifact, a workbook or the archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFile {
    /// File name in the configured locale
    pub file_name: String,
    /// MIME type for HTTP-style consumers
    pub mime_type: String,
    /// Raw bytes, kept out of the JSON view
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Everything one run exports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportBundle {
    /// Per-partition workbooks, Monday..Friday then Unassigned
    pub files: Vec<ExportFile>,
    /// Zip of every workbook above, same order
    pub archive: ExportFile,
}

// ==========================================
// ExportBundleBuilder - split outcome to bundle
// ==========================================
pub struct ExportBundleBuilder {
    namer: ExportNamer,
}

impl ExportBundleBuilder {
    pub fn new(namer: ExportNamer) -> Self {
        Self { namer }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(ExportNamer::new(
            &config.brand_label,
            &config.file_name_locale,
        ))
    }

    /// Serialize every partition and pack the archive
    ///
    /// Weekday workbooks are emitted even when empty so the recipient
    /// always sees five delivery days. The Unassigned workbook appears
    /// only when the split produced one.
    pub fn build(&self, split: &SplitOutcome, date: NaiveDate) -> ExportResult<ExportBundle> {
        let mut files = Vec::with_capacity(split.weekday_tables.len() + 1);

        for (weekday, table) in &split.weekday_tables {
            let file_name = self.namer.weekday_file_name(*weekday, date);
            files.push(self.workbook_file(file_name, table)?);
        }

        if let Some(unassigned) = &split.unassigned {
            let file_name = self.namer.unassigned_file_name(date);
            files.push(self.workbook_file(file_name, unassigned)?);
        }

        let mut archive_builder = ArchiveBuilder::new();
        for file in &files {
            archive_builder.add_file(&file.file_name, &file.bytes)?;
        }
        let archive = ExportFile {
            file_name: self.namer.archive_file_name(date),
            mime_type: ZIP_MIME.to_string(),
            bytes: archive_builder.finish()?,
        };

        info!(
            workbooks = files.len(),
            archive = %archive.file_name,
            "export bundle ready"
        );
        Ok(ExportBundle { files, archive })
    }

    fn workbook_file(&self, file_name: String, table: &DataTable) -> ExportResult<ExportFile> {
        Ok(ExportFile {
            file_name,
            mime_type: XLSX_MIME.to_string(),
            bytes: ExcelWriter.table_to_xlsx_bytes(table)?,
        })
    }
}
