// ==========================================
// Nikora Promo Orders - Domain Layer
// ==========================================
// Scope: value types shared by every stage
// Tables are plain string grids, weekdays a closed enum
// ==========================================

// Module declarations
pub mod report;
pub mod table;
pub mod weekday;

// Re-export core types
pub use report::{PartitionCount, RunSummary};
pub use table::DataTable;
pub use weekday::Weekday;
