// ==========================================
// Nikora Promo Orders - Barcode Rewriter
// ==========================================
// Legacy product barcodes are replaced by their current
// codes through an exact-match lookup. No rows are added
// or removed, only the barcode column changes.
// ==========================================

use crate::domain::DataTable;
use std::collections::HashMap;
use tracing::debug;

// ==========================================
// BarcodeMap - old code to new code lookup
// ==========================================
/// Old-to-new barcode lookup
///
/// Built once per run from the 2-column mapping table. Duplicate old
/// codes keep the last occurrence.
#[derive(Debug, Clone, Default)]
pub struct BarcodeMap {
    entries: HashMap<String, String>,
}

impl BarcodeMap {
    /// Build the lookup from a mapping table
    ///
    /// Cells are taken as ingested (already trimmed); no case folding is
    /// applied, barcode matching is exact. A table without the named
    /// columns yields an empty map.
    pub fn from_table(table: &DataTable, old_col: &str, new_col: &str) -> BarcodeMap {
        let (old_idx, new_idx) = match (table.column_index(old_col), table.column_index(new_col)) {
            (Some(old_idx), Some(new_idx)) => (old_idx, new_idx),
            _ => {
                debug!(old_col, new_col, "mapping columns absent, empty barcode map");
                return BarcodeMap::default();
            }
        };

        let mut entries = HashMap::new();
        for row in &table.rows {
            // Last occurrence wins
            entries.insert(row[old_idx].clone(), row[new_idx].clone());
        }

        BarcodeMap { entries }
    }

    /// Replacement for an old code, if mapped
    pub fn target(&self, old_code: &str) -> Option<&str> {
        self.entries.get(old_code).map(|s| s.as_str())
    }

    /// Number of mapping entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no mappings were loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// BarcodeRewriter - apply the lookup in place
// ==========================================
pub struct BarcodeRewriter;

impl BarcodeRewriter {
    /// Replace mapped barcode values in place
    ///
    /// Unmapped values stay unchanged. Returns the number of cells whose
    /// value actually changed, so re-running with the same map reports 0.
    pub fn rewrite(&self, table: &mut DataTable, barcode_col: &str, map: &BarcodeMap) -> usize {
        let idx = match table.column_index(barcode_col) {
            Some(idx) => idx,
            None => return 0,
        };

        let mut replaced = 0;
        for row in &mut table.rows {
            if let Some(new_code) = map.target(&row[idx]) {
                if row[idx] != new_code {
                    row[idx] = new_code.to_string();
                    replaced += 1;
                }
            }
        }

        replaced
    }
}
