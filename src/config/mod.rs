// ==========================================
// Nikora Promo Orders - Configuration Layer
// ==========================================
// Scope: column profiles and run options
// Incoming order files are non-changeable, so all
// adaptation knobs live on our side, in these structs
// ==========================================

pub mod column_profile;
pub mod pipeline_config;

// Re-export configuration types
pub use column_profile::ColumnProfile;
pub use pipeline_config::{LocalFileConfig, PipelineConfig};
