// ==========================================
// Nikora Promo Orders - Export Error Types
// ==========================================
// thiserror derive, one variant per failure mode
// ==========================================

use thiserror::Error;

/// Export layer error type
#[derive(Error, Debug)]
pub enum ExportError {
    // ===== workbook errors =====
    #[error("Excel write failed: {0}")]
    ExcelWriteError(String),

    #[error("Archive write failed: {0}")]
    ArchiveWriteError(String),

    // ===== generic errors =====
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// From<rust_xlsxwriter::XlsxError>
impl From<rust_xlsxwriter::XlsxError> for ExportError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ExportError::ExcelWriteError(err.to_string())
    }
}

// From<zip::result::ZipError>
impl From<zip::result::ZipError> for ExportError {
    fn from(err: zip::result::ZipError) -> Self {
        ExportError::ArchiveWriteError(err.to_string())
    }
}

// From<std::io::Error>
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::ArchiveWriteError(err.to_string())
    }
}

/// Result alias
pub type ExportResult<T> = Result<T, ExportError>;
