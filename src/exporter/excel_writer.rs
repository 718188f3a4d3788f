// ==========================================
// Nikora Promo Orders - Excel Writer
// ==========================================
// Serializes one DataTable into xlsx bytes
// Single sheet, header row, every cell written as text
// ==========================================

use crate::domain::DataTable;
use crate::exporter::error::ExportResult;
use rust_xlsxwriter::Workbook;
use tracing::debug;

/// Sheet name used for every exported partition
pub const SHEET_NAME: &str = "Orders";

// ==========================================
// ExcelWriter - DataTable to xlsx bytes
// ==========================================
pub struct ExcelWriter;

impl ExcelWriter {
    /// Serialize a table into an in-memory xlsx workbook
    ///
    /// Cells are written as strings so barcodes keep their leading zeros
    /// and long codes are not rounded into scientific notation.
    pub fn table_to_xlsx_bytes(&self, table: &DataTable) -> ExportResult<Vec<u8>> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        // Header row
        for (col, name) in table.columns.iter().enumerate() {
            worksheet.write_string(0, col as u16, name)?;
        }

        // Data rows
        for (row_idx, row) in table.rows.iter().enumerate() {
            let row_num = (row_idx + 1) as u32;
            for (col_idx, cell) in row.iter().enumerate() {
                if !cell.is_empty() {
                    worksheet.write_string(row_num, col_idx as u16, cell)?;
                }
            }
        }

        let bytes = workbook.save_to_buffer()?;
        debug!(
            rows = table.row_count(),
            columns = table.column_count(),
            bytes = bytes.len(),
            "serialized table to xlsx"
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::ExcelParser;

    fn sample_table() -> DataTable {
        let mut table = DataTable::new(vec!["Код EAN/UPC".to_string(), "Завод".to_string()]);
        table.push_row(vec!["04861234".to_string(), "T001".to_string()]);
        table.push_row(vec!["4862".to_string(), String::new()]);
        table
    }

    #[test]
    fn test_xlsx_bytes_round_trip() {
        let table = sample_table();
        let bytes = ExcelWriter.table_to_xlsx_bytes(&table).unwrap();
        assert!(!bytes.is_empty());

        let parsed = ExcelParser.parse_bytes(&bytes).unwrap();
        assert_eq!(parsed.columns, table.columns);
        assert_eq!(parsed.row_count(), 2);
        // Leading zero preserved because cells are text
        assert_eq!(parsed.cell(0, 0), Some("04861234"));
        assert_eq!(parsed.cell(1, 1), Some(""));
    }

    #[test]
    fn test_headers_only_table_round_trip() {
        let table = DataTable::new(vec!["a".to_string(), "b".to_string()]);
        let bytes = ExcelWriter.table_to_xlsx_bytes(&table).unwrap();

        let parsed = ExcelParser.parse_bytes(&bytes).unwrap();
        assert_eq!(parsed.columns, vec!["a".to_string(), "b".to_string()]);
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_georgian_headers_survive() {
        let mut table = DataTable::new(vec!["ძირითადი შტრიხკოდი".to_string()]);
        table.push_row(vec!["4861".to_string()]);
        let bytes = ExcelWriter.table_to_xlsx_bytes(&table).unwrap();

        let parsed = ExcelParser.parse_bytes(&bytes).unwrap();
        assert_eq!(parsed.columns[0], "ძირითადი შტრიხკოდი");
    }
}
