// ==========================================
// Nikora Promo Orders - Engine Layer
// ==========================================
// Scope: pure transformations over in-memory tables
// No file or network access happens here; the importer
// loads, the exporter writes, the engine only computes
// ==========================================

// Module declarations
pub mod barcode_rewriter;
pub mod error;
pub mod pipeline;
pub mod schedule_resolver;
pub mod splitter;

// Re-export engine types
pub use barcode_rewriter::{BarcodeMap, BarcodeRewriter};
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{PipelineRun, PromoPipeline};
pub use schedule_resolver::{ScheduleIndex, ScheduleResolver, WEEKDAY_WORK_COL};
pub use splitter::{SplitOutcome, WeekdaySplitter, UNASSIGNED_LABEL};
