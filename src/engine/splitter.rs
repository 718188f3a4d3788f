// ==========================================
// Nikora Promo Orders - Weekday Splitter
// ==========================================
// Partitions the joined table into the five delivery days
// plus an Unassigned bucket, then strips working columns
// and applies the export column order
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::{DataTable, PartitionCount, Weekday};
use crate::engine::schedule_resolver::WEEKDAY_WORK_COL;

/// Partition name for rows without a resolvable delivery day
pub const UNASSIGNED_LABEL: &str = "Unassigned";

// ==========================================
// SplitOutcome - one table per partition
// ==========================================
/// Result of the weekday split
///
/// The five weekday tables are always present, Monday first, even when
/// empty. The Unassigned table exists only when it has rows.
#[derive(Debug, Clone)]
pub struct SplitOutcome {
    /// One export-ready table per delivery day, Monday..Friday
    pub weekday_tables: Vec<(Weekday, DataTable)>,
    /// Rows without a delivery day, absent when there are none
    pub unassigned: Option<DataTable>,
}

impl SplitOutcome {
    /// Rows across all partitions
    pub fn total_rows(&self) -> usize {
        let weekday_rows: usize = self
            .weekday_tables
            .iter()
            .map(|(_, table)| table.row_count())
            .sum();
        weekday_rows + self.unassigned_rows()
    }

    /// Rows in the Unassigned partition
    pub fn unassigned_rows(&self) -> usize {
        self.unassigned
            .as_ref()
            .map(|table| table.row_count())
            .unwrap_or(0)
    }

    /// Per-partition counts, Monday..Friday then Unassigned if present
    pub fn partition_counts(&self) -> Vec<PartitionCount> {
        let mut counts: Vec<PartitionCount> = self
            .weekday_tables
            .iter()
            .map(|(day, table)| PartitionCount {
                name: day.label().to_string(),
                rows: table.row_count(),
            })
            .collect();

        if let Some(unassigned) = &self.unassigned {
            counts.push(PartitionCount {
                name: UNASSIGNED_LABEL.to_string(),
                rows: unassigned.row_count(),
            });
        }

        counts
    }
}

// ==========================================
// WeekdaySplitter
// ==========================================
pub struct WeekdaySplitter;

impl WeekdaySplitter {
    /// Partition the joined table by resolved weekday
    ///
    /// Row order inside each partition follows the joined table (stable
    /// filter, no re-sort). Every partition then loses the working weekday
    /// column, the duplicated schedule shop column and the configured
    /// display columns, and finally has its first column rotated to the
    /// back when the config says so.
    pub fn split(&self, joined: &DataTable, config: &PipelineConfig) -> SplitOutcome {
        let weekday_idx = joined.column_index(WEEKDAY_WORK_COL);

        let mut drop: Vec<&str> = vec![WEEKDAY_WORK_COL, config.columns.schedule_shop.as_str()];
        for col in &config.export_drop_columns {
            drop.push(col.as_str());
        }

        let weekday_tables = Weekday::ALL
            .iter()
            .map(|&day| {
                let part = filter_by_label(joined, weekday_idx, day.label());
                (day, finalize(part, &drop, config.rotate_first_to_last))
            })
            .collect();

        let unassigned_part = filter_by_label(joined, weekday_idx, "");
        let unassigned = if unassigned_part.is_empty() {
            None
        } else {
            Some(finalize(unassigned_part, &drop, config.rotate_first_to_last))
        };

        SplitOutcome {
            weekday_tables,
            unassigned,
        }
    }
}

/// Rows whose resolved weekday equals the label (empty label selects the
/// unassigned rows)
fn filter_by_label(joined: &DataTable, weekday_idx: Option<usize>, label: &str) -> DataTable {
    let mut part = DataTable::new(joined.columns.clone());
    match weekday_idx {
        Some(idx) => {
            for row in &joined.rows {
                if row[idx] == label {
                    part.rows.push(row.clone());
                }
            }
        }
        None => {
            // No weekday column at all: every row is unassigned
            if label.is_empty() {
                part.rows = joined.rows.clone();
            }
        }
    }
    part
}

/// Apply the drop list, then the optional column rotation
fn finalize(part: DataTable, drop: &[&str], rotate: bool) -> DataTable {
    let trimmed = part.without_columns(drop);
    if rotate {
        trimmed.rotate_first_to_last()
    } else {
        trimmed
    }
}
