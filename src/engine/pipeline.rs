// ==========================================
// Nikora Promo Orders - Pipeline Orchestrator
// ==========================================
// Scope: one full run over three in-memory tables
// Flow: column check -> barcode fix -> weekday lookup -> split
// No state survives the call; inputs are taken by value
// ==========================================

use crate::config::PipelineConfig;
use crate::domain::{DataTable, RunSummary};
use crate::engine::barcode_rewriter::{BarcodeMap, BarcodeRewriter};
use crate::engine::error::{PipelineError, PipelineResult};
use crate::engine::schedule_resolver::ScheduleResolver;
use crate::engine::splitter::{SplitOutcome, WeekdaySplitter};
use chrono::NaiveDate;
use tracing::{debug, info, instrument, warn};

/// Result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Export-ready partitions
    pub split: SplitOutcome,
    /// Counters for the presentation layer
    pub summary: RunSummary,
}

// ==========================================
// PromoPipeline - staged run over three tables
// ==========================================
pub struct PromoPipeline {
    config: PipelineConfig,
}

impl PromoPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Required-column check across all three tables
    ///
    /// Missing names are aggregated into one error, in check order: order
    /// barcode, order shop, schedule shop, schedule weekday, map new code,
    /// map old code. Nothing is mutated before this check passes.
    pub fn check_required_columns(
        &self,
        order: &DataTable,
        schedule: &DataTable,
        barcode_map: &DataTable,
    ) -> PipelineResult<()> {
        let cols = &self.config.columns;
        let mut missing = Vec::new();

        for col in [&cols.order_barcode, &cols.order_shop] {
            if !order.has_column(col) {
                missing.push(col.clone());
            }
        }
        for col in [&cols.schedule_shop, &cols.schedule_weekday] {
            if !schedule.has_column(col) {
                missing.push(col.clone());
            }
        }
        for col in [&cols.map_new_code, &cols.map_old_code] {
            if !barcode_map.has_column(col) {
                missing.push(col.clone());
            }
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::MissingColumns(missing))
        }
    }

    /// Run the full pipeline
    ///
    /// # Arguments
    /// - order: the submitted promo order table
    /// - schedule: shop to weekday schedule
    /// - barcode_map: old to new barcode mapping
    /// - run_date: date stamped into the run summary and file names
    ///
    /// # Returns
    /// - Ok(PipelineRun): partitions plus run summary
    /// - Err: missing required columns, nothing mutated
    #[instrument(skip(self, order, schedule, barcode_map))]
    pub fn run(
        &self,
        mut order: DataTable,
        schedule: DataTable,
        barcode_map: DataTable,
        run_date: NaiveDate,
    ) -> PipelineResult<PipelineRun> {
        let input_rows = order.row_count();
        info!(input_rows, "starting promo order run");

        // === Step 1: required columns ===
        debug!("step 1: required columns");
        self.check_required_columns(&order, &schedule, &barcode_map)?;

        let cols = &self.config.columns;

        // === Step 2: barcode fix (no deletions) ===
        debug!("step 2: barcode fix");
        let map = BarcodeMap::from_table(&barcode_map, &cols.map_old_code, &cols.map_new_code);
        let rewritten = BarcodeRewriter.rewrite(&mut order, &cols.order_barcode, &map);
        info!(mappings = map.len(), rewritten, "barcode fix complete");

        // === Step 3: weekday lookup ===
        debug!("step 3: weekday lookup");
        let resolver = ScheduleResolver;
        let index = resolver.build_index(&schedule, &cols.schedule_shop, &cols.schedule_weekday);
        let joined = resolver.join(&order, &cols.order_shop, &index, &cols.schedule_shop);
        let joined_rows = joined.row_count();
        if joined_rows != input_rows {
            // Duplicate shop codes in the schedule fan order rows out
            warn!(
                input_rows,
                joined_rows, "schedule join changed the row count"
            );
        }
        info!(joined_rows, "weekday lookup complete");

        // === Step 4: weekday split ===
        debug!("step 4: weekday split");
        let split = WeekdaySplitter.split(&joined, &self.config);
        let unassigned_rows = split.unassigned_rows();
        if unassigned_rows > 0 {
            warn!(
                rows = unassigned_rows,
                "rows have no weekday in schedule, kept in 'Unassigned'"
            );
        }

        // === Step 5: run summary ===
        let summary = RunSummary {
            run_date,
            input_rows,
            joined_rows,
            rewritten_barcodes: rewritten,
            unassigned_rows,
            partitions: split.partition_counts(),
        };
        info!(
            total_rows = split.total_rows(),
            unassigned = unassigned_rows,
            "promo order run complete"
        );

        Ok(PipelineRun { split, summary })
    }
}
