// ==========================================
// Nikora Promo Orders - Import Layer
// ==========================================
// Scope: external files into uniform tables
// Supported: Excel, CSV, uploaded byte buffers
// ==========================================

// Module declarations
pub mod column_resolver;
pub mod error;
pub mod file_parser;
pub mod local_source;
pub mod table_parser_trait;

// Re-export core types
pub use column_resolver::ColumnResolver;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use local_source::{LocalLoadOutcome, LocalTableSource};

// Re-export trait interfaces
pub use table_parser_trait::TableParser;
