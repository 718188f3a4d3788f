// ==========================================
// Nikora Promo Orders - Engine Error Types
// ==========================================
// Processing halts on these; the caller fixes the
// input and re-runs, there is no partial output
// ==========================================

use thiserror::Error;

/// Engine layer error type
#[derive(Error, Debug)]
pub enum PipelineError {
    // ===== input validation =====
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ===== generic errors =====
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result alias
pub type PipelineResult<T> = Result<T, PipelineError>;
