// ==========================================
// Nikora Promo Orders - Promo Order API
// ==========================================
// Facade the presentation layer calls; wires the importer,
// engine and exporter together for one synchronous run
// ==========================================

use crate::api::error::ApiResult;
use crate::config::{LocalFileConfig, PipelineConfig};
use crate::domain::{DataTable, RunSummary};
use crate::engine::{PromoPipeline, UNASSIGNED_LABEL};
use crate::exporter::{ExportBundleBuilder, ExportFile};
use crate::importer::{LocalLoadOutcome, LocalTableSource, UniversalFileParser};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Local reference tables, loaded from the configured candidates
#[derive(Debug, Clone)]
pub struct LocalInputs {
    /// Shop schedule lookup result
    pub schedule: LocalLoadOutcome,
    /// Barcode map lookup result
    pub barcode_map: LocalLoadOutcome,
}

/// Caller-supplied replacements for the local reference tables
///
/// An override always wins over the local file; a None falls back to the
/// local lookup, whose miss is an empty table by design.
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub schedule: Option<DataTable>,
    pub barcode_map: Option<DataTable>,
}

/// One export-shaped partition with its display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionTable {
    /// Partition name ("Monday".."Friday" or "Unassigned")
    pub name: String,
    /// Rows of the partition, already in export column order
    pub table: DataTable,
}

/// Promo run API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoRunResponse {
    /// Run counters for the status display
    pub summary: RunSummary,
    /// Partition tables, Monday..Friday then Unassigned when present
    pub partitions: Vec<PartitionTable>,
    /// Per-partition workbooks, same order as partitions
    pub files: Vec<ExportFile>,
    /// Zip of every workbook
    pub archive: ExportFile,
    /// Local schedule file used, absent when the caller supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_path: Option<String>,
    /// Local barcode map file used, absent when the caller supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub barcode_map_path: Option<String>,
}

// ==========================================
// PromoOrderApi - one facade per configuration
// ==========================================
pub struct PromoOrderApi {
    config: PipelineConfig,
    local: LocalTableSource,
    parser: UniversalFileParser,
}

impl PromoOrderApi {
    pub fn new(config: PipelineConfig, local_files: LocalFileConfig) -> Self {
        Self {
            config,
            local: LocalTableSource::new(local_files),
            parser: UniversalFileParser,
        }
    }

    /// Facade with default column names, export options and the
    /// conventional local search directories
    pub fn with_defaults() -> Self {
        Self::new(PipelineConfig::default(), LocalFileConfig::default())
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Look up both local reference tables without running anything
    ///
    /// Lets a host show "schedule loaded from ..." before the user submits
    /// an order file.
    pub fn load_local_inputs(&self) -> LocalInputs {
        LocalInputs {
            schedule: self.local.load_schedule(),
            barcode_map: self.local.load_barcode_map(),
        }
    }

    /// Process an order file read from disk
    ///
    /// # Arguments
    /// - path: order file (.xlsx/.xls/.csv)
    /// - overrides: caller-supplied schedule and barcode map tables
    ///
    /// # Returns
    /// - Ok(PromoRunResponse): partitions, files and summary
    /// - Err(ApiError): unreadable order file or missing columns
    pub fn process_order_file<P: AsRef<Path>>(
        &self,
        path: P,
        overrides: InputOverrides,
    ) -> ApiResult<PromoRunResponse> {
        let path = path.as_ref();
        info!(path = %path.display(), "processing order file");
        let order = self.parser.parse(path)?;
        self.process_with_overrides(order, overrides)
    }

    /// Process an order file received as named bytes (upload path)
    pub fn process_order_bytes(
        &self,
        file_name: &str,
        bytes: &[u8],
        overrides: InputOverrides,
    ) -> ApiResult<PromoRunResponse> {
        info!(file_name, size = bytes.len(), "processing uploaded order file");
        let order = self.parser.parse_named_bytes(file_name, bytes)?;
        self.process_with_overrides(order, overrides)
    }

    /// Process three fully prepared tables with an explicit run date
    ///
    /// The lowest-level entry point; the file-based variants end up here.
    pub fn process_tables(
        &self,
        order: DataTable,
        schedule: DataTable,
        barcode_map: DataTable,
        run_date: NaiveDate,
    ) -> ApiResult<PromoRunResponse> {
        let pipeline = PromoPipeline::new(self.config.clone());
        let run = pipeline.run(order, schedule, barcode_map, run_date)?;

        let bundle = ExportBundleBuilder::from_config(&self.config).build(&run.split, run_date)?;

        let mut partitions: Vec<PartitionTable> = run
            .split
            .weekday_tables
            .into_iter()
            .map(|(day, table)| PartitionTable {
                name: day.label().to_string(),
                table,
            })
            .collect();
        if let Some(unassigned) = run.split.unassigned {
            partitions.push(PartitionTable {
                name: UNASSIGNED_LABEL.to_string(),
                table: unassigned,
            });
        }

        Ok(PromoRunResponse {
            summary: run.summary,
            partitions,
            files: bundle.files,
            archive: bundle.archive,
            schedule_path: None,
            barcode_map_path: None,
        })
    }

    fn process_with_overrides(
        &self,
        order: DataTable,
        overrides: InputOverrides,
    ) -> ApiResult<PromoRunResponse> {
        let mut schedule_path = None;
        let schedule = match overrides.schedule {
            Some(table) => {
                debug!("using caller-supplied schedule");
                table
            }
            None => {
                // A miss is an empty table; the required-column check
                // then reports the schedule columns as missing
                let outcome = self.local.load_schedule();
                schedule_path = outcome.path.map(|p| p.display().to_string());
                outcome.table
            }
        };

        let mut barcode_map_path = None;
        let barcode_map = match overrides.barcode_map {
            Some(table) => {
                debug!("using caller-supplied barcode map");
                table
            }
            None => {
                let outcome = self.local.load_barcode_map();
                barcode_map_path = outcome.path.map(|p| p.display().to_string());
                outcome.table
            }
        };

        let run_date = Local::now().date_naive();
        let mut response = self.process_tables(order, schedule, barcode_map, run_date)?;
        response.schedule_path = schedule_path;
        response.barcode_map_path = barcode_map_path;
        Ok(response)
    }
}
