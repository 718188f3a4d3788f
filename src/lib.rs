// ==========================================
// Nikora Promo Orders - Core Library
// ==========================================
// Scope: promo order processing pipeline
// Flow: barcode fix -> weekday lookup -> split -> export
// Positioning: backend library (UI stays outside)
// ==========================================

// Initialize the i18n system
rust_i18n::i18n!("locales", fallback = "ka");

// ==========================================
// Module declarations
// ==========================================

// Domain layer - tables and value types
pub mod domain;

// Configuration layer - column profiles and run options
pub mod config;

// Import layer - external files into tables
pub mod importer;

// Engine layer - business rules
pub mod engine;

// Export layer - spreadsheets and archives
pub mod exporter;

// Logging system
pub mod logging;

// Internationalization
pub mod i18n;

// API layer - facade for the presentation layer
pub mod api;

// ==========================================
// Re-export core types
// ==========================================

// Domain types
pub use domain::{DataTable, PartitionCount, RunSummary, Weekday};

// Configuration
pub use config::{ColumnProfile, LocalFileConfig, PipelineConfig};

// Importer
pub use importer::{
    ColumnResolver, CsvParser, ExcelParser, ImportError, ImportResult, LocalLoadOutcome,
    LocalTableSource, UniversalFileParser,
};

// Engine
pub use engine::{
    BarcodeMap, BarcodeRewriter, PipelineError, PipelineResult, PipelineRun, PromoPipeline,
    ScheduleIndex, ScheduleResolver, SplitOutcome, WeekdaySplitter,
};

// Exporter
pub use exporter::{
    ArchiveBuilder, ExcelWriter, ExportBundle, ExportBundleBuilder, ExportError, ExportFile,
    ExportNamer, ExportResult, XLSX_MIME, ZIP_MIME,
};

// API
pub use api::{
    ApiError, ApiResult, InputOverrides, LocalInputs, PartitionTable, PromoOrderApi,
    PromoRunResponse,
};

// ==========================================
// Constants
// ==========================================

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Product name
pub const APP_NAME: &str = "Nikora Promo Orders";

// ==========================================
// Compile-time sanity checks
// ==========================================
