// ==========================================
// Nikora Promo Orders - Local Default Files
// ==========================================
// The schedule and barcode map normally sit next to the
// application or in ./config/; a missing file is an empty
// table, never an error at this layer
// ==========================================

use crate::config::LocalFileConfig;
use crate::domain::DataTable;
use crate::importer::file_parser::UniversalFileParser;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Result of one local default-file lookup
#[derive(Debug, Clone)]
pub struct LocalLoadOutcome {
    /// Path that resolved, if any candidate existed
    ///
    /// The presentation layer shows this in its "loaded local file"
    /// status line.
    pub path: Option<PathBuf>,
    /// Loaded table; empty when nothing resolved or the file was unreadable
    pub table: DataTable,
}

impl LocalLoadOutcome {
    /// True when the lookup produced usable rows
    pub fn is_loaded(&self) -> bool {
        !self.table.is_empty()
    }

    fn missing() -> Self {
        Self {
            path: None,
            table: DataTable::default(),
        }
    }
}

// ==========================================
// LocalTableSource - candidate-list file lookup
// ==========================================
pub struct LocalTableSource {
    config: LocalFileConfig,
    parser: UniversalFileParser,
}

impl LocalTableSource {
    pub fn new(config: LocalFileConfig) -> Self {
        Self {
            config,
            parser: UniversalFileParser,
        }
    }

    /// First existing path for a candidate list
    ///
    /// Candidates are tried in order; for each candidate every search
    /// directory is tried in order.
    pub fn resolve(&self, candidates: &[PathBuf]) -> Option<PathBuf> {
        for candidate in candidates {
            for dir in &self.config.search_dirs {
                let path = dir.join(candidate);
                if path.exists() {
                    debug!(path = %path.display(), "local candidate resolved");
                    return Some(path);
                }
            }
        }
        None
    }

    /// Load the first existing candidate, else an empty table
    pub fn load(&self, candidates: &[PathBuf]) -> LocalLoadOutcome {
        match self.resolve(candidates) {
            Some(path) => {
                let table = self.parser.parse_lenient(&path);
                if table.is_empty() {
                    warn!(path = %path.display(), "local file resolved but yielded no rows");
                } else {
                    info!(path = %path.display(), rows = table.row_count(), "local file loaded");
                }
                LocalLoadOutcome {
                    path: Some(path),
                    table,
                }
            }
            None => {
                warn!(candidates = ?candidates, "no local candidate found");
                LocalLoadOutcome::missing()
            }
        }
    }

    /// Load the shop schedule from its configured candidates
    pub fn load_schedule(&self) -> LocalLoadOutcome {
        self.load(&self.config.schedule_candidates)
    }

    /// Load the barcode map from its configured candidates
    pub fn load_barcode_map(&self) -> LocalLoadOutcome {
        self.load(&self.config.map_candidates)
    }
}
