// ==========================================
// Nikora Promo Orders - Pipeline Configuration
// ==========================================
// Run options plus the local-file lookup plan.
// Search directories are explicit configuration, not
// implicit probing tied to program location.
// ==========================================

use crate::config::column_profile::ColumnProfile;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// Default local file names (also looked up inside ./config/)
pub const DEFAULT_SCHEDULE_FILE: &str = "shop_schedule.xlsx";
pub const DEFAULT_MAP_FILE: &str = "barcode_map.xlsx";
pub const CONFIG_SUBDIR: &str = "config";

/// Options for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Column names for the three input tables
    #[serde(default)]
    pub columns: ColumnProfile,

    /// Display columns removed from every export, if present
    #[serde(default = "default_export_drop_columns")]
    pub export_drop_columns: Vec<String>,

    /// Move the first column to the last position in exported files
    #[serde(default = "default_rotate")]
    pub rotate_first_to_last: bool,

    /// Retailer name prefixed to every export file name
    #[serde(default = "default_brand_label")]
    pub brand_label: String,

    /// Locale for weekday names in export file names
    #[serde(default = "default_file_name_locale")]
    pub file_name_locale: String,
}

fn default_export_drop_columns() -> Vec<String> {
    vec![
        "Дата документа".to_string(),
        "მაღაზიის მისამართი".to_string(),
    ]
}

fn default_rotate() -> bool {
    true
}

fn default_brand_label() -> String {
    "ნიკორა".to_string()
}

fn default_file_name_locale() -> String {
    "ka".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            columns: ColumnProfile::default(),
            export_drop_columns: default_export_drop_columns(),
            rotate_first_to_last: default_rotate(),
            brand_label: default_brand_label(),
            file_name_locale: default_file_name_locale(),
        }
    }
}

/// Lookup plan for the local schedule and barcode map files
///
/// Candidates are tried in order; for each candidate every search
/// directory is tried in order. The first existing path wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalFileConfig {
    /// Directories to probe, in priority order
    #[serde(default = "LocalFileConfig::default_search_dirs")]
    pub search_dirs: Vec<PathBuf>,

    /// Candidate relative paths for the shop schedule
    #[serde(default = "default_schedule_candidates")]
    pub schedule_candidates: Vec<PathBuf>,

    /// Candidate relative paths for the barcode map
    #[serde(default = "default_map_candidates")]
    pub map_candidates: Vec<PathBuf>,
}

fn default_schedule_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DEFAULT_SCHEDULE_FILE),
        PathBuf::from(CONFIG_SUBDIR).join(DEFAULT_SCHEDULE_FILE),
    ]
}

fn default_map_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from(DEFAULT_MAP_FILE),
        PathBuf::from(CONFIG_SUBDIR).join(DEFAULT_MAP_FILE),
    ]
}

impl LocalFileConfig {
    /// Lookup plan over an explicit set of directories
    pub fn with_search_dirs(search_dirs: Vec<PathBuf>) -> Self {
        Self {
            search_dirs,
            schedule_candidates: default_schedule_candidates(),
            map_candidates: default_map_candidates(),
        }
    }

    /// Conventional search directories: the executable's directory, then
    /// the current working directory
    pub fn default_search_dirs() -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        if let Ok(exe) = std::env::current_exe() {
            if let Some(parent) = exe.parent() {
                dirs.push(parent.to_path_buf());
            }
        }
        if let Ok(cwd) = std::env::current_dir() {
            dirs.push(cwd);
        }
        dirs
    }
}

impl Default for LocalFileConfig {
    fn default() -> Self {
        Self::with_search_dirs(Self::default_search_dirs())
    }
}
