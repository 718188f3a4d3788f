// ==========================================
// Nikora Promo Orders - Tabular Data Model
// ==========================================
// One uniform shape for every input and output table:
// named columns plus string rows, no typed cells
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DataTable - ordered columns, string cells
// ==========================================
/// In-memory table
///
/// Every cell is a string: spreadsheet values are stringified on ingestion
/// and empty cells become the empty string. Each row always has exactly as
/// many cells as there are columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTable {
    /// Column headers, in file order
    pub columns: Vec<String>,
    /// Data rows, in file order
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given headers
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// True when the table holds no data rows
    ///
    /// A headers-only table counts as empty; the local loader returns such
    /// tables for absent files and downstream checks must treat them alike.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by exact header match
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// True when a column with exactly this header exists
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Append a row, padding or truncating it to the column count
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    /// Cell value at (row, column), if in bounds
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row).and_then(|r| r.get(col)).map(|s| s.as_str())
    }

    /// Copy of the table without the named columns
    ///
    /// Matching is case-insensitive and absent names are ignored, so a
    /// drop list can be applied to any partition regardless of which of
    /// the listed columns it actually carries.
    pub fn without_columns(&self, drop: &[&str]) -> DataTable {
        let drop_lower: Vec<String> = drop.iter().map(|d| d.to_lowercase()).collect();
        let keep: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !drop_lower.contains(&c.to_lowercase()))
            .map(|(i, _)| i)
            .collect();

        let columns = keep.iter().map(|&i| self.columns[i].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| keep.iter().map(|&i| row[i].clone()).collect())
            .collect();

        DataTable { columns, rows }
    }

    /// Copy of the table with the first column moved to the last position
    ///
    /// Tables with one column or none are returned unchanged.
    pub fn rotate_first_to_last(&self) -> DataTable {
        if self.column_count() <= 1 {
            return self.clone();
        }

        let mut columns = self.columns.clone();
        let first = columns.remove(0);
        columns.push(first);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut row = row.clone();
                let first = row.remove(0);
                row.push(first);
                row
            })
            .collect();

        DataTable { columns, rows }
    }
}
