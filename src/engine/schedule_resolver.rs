// ==========================================
// Nikora Promo Orders - Schedule Resolver
// ==========================================
// VLOOKUP step: every order row gets a delivery day from
// the shop schedule. Shop codes are trimmed and upper-cased
// on both sides before matching; the normalized value stays
// visible in the output.
// ==========================================

use crate::domain::{DataTable, Weekday};
use std::collections::HashMap;

/// Working column carrying the resolved weekday label through the join;
/// dropped from every partition before export
pub const WEEKDAY_WORK_COL: &str = "__Weekday__";

/// Normalize a shop code for matching: trim, then upper-case
pub fn normalize_shop_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// ==========================================
// ScheduleIndex - normalized schedule rows
// ==========================================
/// One normalized schedule row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    /// Shop code, trimmed and upper-cased
    pub shop_code: String,
    /// Canonical weekday label, empty when the raw value was unparseable
    pub weekday_label: String,
}

/// Schedule table after normalization
///
/// Row order and duplicate shop codes are preserved exactly; the join is
/// a plain left join, so a duplicated shop fans out into multiple output
/// rows.
#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    pub entries: Vec<ScheduleEntry>,
}

impl ScheduleIndex {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ==========================================
// ScheduleResolver - normalize and join
// ==========================================
pub struct ScheduleResolver;

impl ScheduleResolver {
    /// Normalize the schedule table into an index
    ///
    /// Shop codes are trimmed and upper-cased, weekday cells parsed to
    /// canonical labels. A table without the named columns yields an
    /// empty index (every order row then joins as unassigned).
    pub fn build_index(
        &self,
        schedule: &DataTable,
        shop_col: &str,
        weekday_col: &str,
    ) -> ScheduleIndex {
        let (shop_idx, day_idx) = match (
            schedule.column_index(shop_col),
            schedule.column_index(weekday_col),
        ) {
            (Some(shop_idx), Some(day_idx)) => (shop_idx, day_idx),
            _ => return ScheduleIndex::default(),
        };

        let entries = schedule
            .rows
            .iter()
            .map(|row| ScheduleEntry {
                shop_code: normalize_shop_code(&row[shop_idx]),
                weekday_label: Weekday::normalize_label(&row[day_idx]),
            })
            .collect();

        ScheduleIndex { entries }
    }

    /// Left-join the schedule onto the order table by shop code
    ///
    /// The order table's shop column visibly carries the normalized value
    /// afterwards. Two columns are appended: the schedule shop code (under
    /// `schedule_shop_col`) and the resolved weekday label (under
    /// [`WEEKDAY_WORK_COL`]). Order rows without a match get empty strings
    /// in both; rows matching several schedule entries are emitted once
    /// per entry, in schedule order.
    pub fn join(
        &self,
        order: &DataTable,
        order_shop_col: &str,
        index: &ScheduleIndex,
        schedule_shop_col: &str,
    ) -> DataTable {
        let mut columns = order.columns.clone();
        columns.push(schedule_shop_col.to_string());
        columns.push(WEEKDAY_WORK_COL.to_string());
        let mut joined = DataTable::new(columns);

        let shop_idx = order.column_index(order_shop_col);

        // Entry positions per shop code, schedule order preserved
        let mut by_shop: HashMap<&str, Vec<usize>> = HashMap::new();
        for (pos, entry) in index.entries.iter().enumerate() {
            by_shop.entry(entry.shop_code.as_str()).or_default().push(pos);
        }

        for row in &order.rows {
            let idx = match shop_idx {
                Some(idx) => idx,
                None => {
                    // No shop column: the row cannot match anything
                    let mut out = row.clone();
                    out.push(String::new());
                    out.push(String::new());
                    joined.push_row(out);
                    continue;
                }
            };

            let mut base = row.clone();
            let shop = normalize_shop_code(&row[idx]);
            base[idx] = shop.clone();

            match by_shop.get(shop.as_str()) {
                Some(positions) => {
                    for &pos in positions {
                        let entry = &index.entries[pos];
                        let mut out = base.clone();
                        out.push(entry.shop_code.clone());
                        out.push(entry.weekday_label.clone());
                        joined.push_row(out);
                    }
                }
                None => {
                    let mut out = base;
                    out.push(String::new());
                    out.push(String::new());
                    joined.push_row(out);
                }
            }
        }

        joined
    }
}
