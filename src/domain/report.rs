// ==========================================
// Nikora Promo Orders - Run Summary
// ==========================================
// Counters the presentation layer shows after a run;
// the unassigned count backs the user-visible warning
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Row count of one output partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionCount {
    /// Partition name ("Monday".."Friday" or "Unassigned")
    pub name: String,
    /// Rows in the partition
    pub rows: usize,
}

/// Summary of one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Date stamped into the export file names
    pub run_date: NaiveDate,
    /// Rows in the submitted order table
    pub input_rows: usize,
    /// Rows after the schedule join (can exceed input_rows when a shop
    /// code appears more than once in the schedule)
    pub joined_rows: usize,
    /// Barcode cells replaced by the mapping
    pub rewritten_barcodes: usize,
    /// Rows without a resolvable delivery day
    pub unassigned_rows: usize,
    /// Per-partition row counts, Monday..Friday then Unassigned
    pub partitions: Vec<PartitionCount>,
}

impl RunSummary {
    /// JSON view for the presentation layer
    ///
    /// Partitions are kept as an ordered array so the display order stays
    /// Monday..Friday, Unassigned.
    pub fn as_json(&self) -> serde_json::Value {
        json!({
            "run_date": self.run_date.format("%Y-%m-%d").to_string(),
            "input_rows": self.input_rows,
            "joined_rows": self.joined_rows,
            "rewritten_barcodes": self.rewritten_barcodes,
            "unassigned_rows": self.unassigned_rows,
            "partitions": self.partitions,
        })
    }
}
