// ==========================================
// Nikora Promo Orders - API Error Types
// ==========================================
// Converts layer errors into caller-facing messages
// Column problems keep their structure so the caller can
// list every missing column at once
// ==========================================

use crate::engine::PipelineError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== input errors =====
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Import failed: {0}")]
    ImportError(String),

    // ===== processing errors =====
    #[error("Processing failed: {0}")]
    PipelineError(String),

    #[error("Export failed: {0}")]
    ExportError(String),

    // ===== generic errors =====
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// Conversions from layer errors
// ==========================================
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Other(e) => ApiError::Other(e),
            other => ApiError::ImportError(other.to_string()),
        }
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            // Kept structured so callers can show the full list
            PipelineError::MissingColumns(columns) => ApiError::MissingColumns(columns),
            PipelineError::Other(e) => ApiError::Other(e),
            other => ApiError::PipelineError(other.to_string()),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Other(e) => ApiError::Other(e),
            other => ApiError::ExportError(other.to_string()),
        }
    }
}

/// Result alias
pub type ApiResult<T> = Result<T, ApiError>;
