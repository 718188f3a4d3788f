// ==========================================
// Nikora Promo Orders - Exporter Layer
// ==========================================
// Scope: partitions to bytes, bytes to named artifacts
// Everything stays in memory; the caller decides what
// hits disk or goes over the wire
// ==========================================

// Module declarations
pub mod archive;
pub mod bundle;
pub mod error;
pub mod excel_writer;
pub mod naming;

// Re-export exporter types
pub use archive::ArchiveBuilder;
pub use bundle::{ExportBundle, ExportBundleBuilder, ExportFile};
pub use error::{ExportError, ExportResult};
pub use excel_writer::{ExcelWriter, SHEET_NAME};
pub use naming::{ExportNamer, DATE_FMT, XLSX_MIME, ZIP_MIME};
