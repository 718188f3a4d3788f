// ==========================================
// Nikora Promo Orders - File Parsers
// ==========================================
// Supported: Excel (.xlsx/.xls) / CSV (.csv)
// Excel reads the first sheet only; other sheets are discarded
// ==========================================

use crate::domain::DataTable;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::table_parser_trait::TableParser;
use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::warn;

// ==========================================
// CSV parser
// ==========================================
pub struct CsvParser;

impl CsvParser {
    /// Parse CSV content from any reader
    ///
    /// First row is the header. Headers and cells are trimmed, fully blank
    /// rows are skipped, ragged rows are padded to the header width.
    pub fn parse_reader<R: Read>(&self, reader: R) -> ImportResult<DataTable> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut table = DataTable::new(headers);
        for result in csv_reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();

            // Skip fully blank rows
            if row.iter().all(|v| v.is_empty()) {
                continue;
            }

            table.push_row(row);
        }

        Ok(table)
    }
}

impl TableParser for CsvParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<DataTable> {
        // File must exist
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // Extension check
        if let Some(ext) = file_path.extension() {
            if !ext.eq_ignore_ascii_case("csv") {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        self.parse_reader(file)
    }
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    /// Parse the first sheet of an uploaded workbook (raw bytes)
    pub fn parse_bytes(&self, bytes: &[u8]) -> ImportResult<DataTable> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        read_first_sheet(&mut workbook)
    }
}

impl TableParser for ExcelParser {
    fn parse_table(&self, file_path: &Path) -> ImportResult<DataTable> {
        // File must exist
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        // Extension check
        let ext = file_path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;
        read_first_sheet(&mut workbook)
    }
}

/// Read the first sheet (by storage order) into a table
fn read_first_sheet<RS>(workbook: &mut Sheets<RS>) -> ImportResult<DataTable>
where
    RS: Read + Seek,
{
    let sheet_names = workbook.sheet_names();
    if sheet_names.is_empty() {
        return Err(ImportError::ExcelParseError(
            "workbook contains no sheets".to_string(),
        ));
    }

    let sheet_name = sheet_names[0].clone();
    let range = workbook.worksheet_range(&sheet_name)?;
    range_to_table(&range)
}

/// Convert a cell range into a table: first row as header, the rest as data
fn range_to_table(range: &Range<Data>) -> ImportResult<DataTable> {
    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| {
        ImportError::ExcelParseError("worksheet contains no rows".to_string())
    })?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    let mut table = DataTable::new(headers);
    for data_row in rows {
        let row: Vec<String> = data_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        // Skip fully blank rows
        if row.iter().all(|v| v.is_empty()) {
            continue;
        }

        table.push_row(row);
    }

    Ok(table)
}

// ==========================================
// Universal parser (dispatch by extension)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    /// Parse a file on disk, choosing the parser by extension
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<DataTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_table(path),
            "xlsx" | "xls" => ExcelParser.parse_table(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }

    /// Parse an uploaded file, choosing the parser by the declared name
    pub fn parse_named_bytes(&self, file_name: &str, bytes: &[u8]) -> ImportResult<DataTable> {
        let name = file_name.to_lowercase();
        if name.ends_with(".csv") {
            CsvParser.parse_reader(bytes)
        } else if name.ends_with(".xlsx") || name.ends_with(".xls") {
            ExcelParser.parse_bytes(bytes)
        } else {
            Err(ImportError::UnsupportedFormat(file_name.to_string()))
        }
    }

    /// Lenient variant of [`UniversalFileParser::parse`]
    ///
    /// Absent, unreadable or unsupported files come back as an empty table;
    /// the downstream required-column check then reports what is missing.
    pub fn parse_lenient<P: AsRef<Path>>(&self, file_path: P) -> DataTable {
        let path = file_path.as_ref();
        match self.parse(path) {
            Ok(table) => table,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "file unreadable, treating as empty table");
                DataTable::default()
            }
        }
    }

    /// Lenient variant of [`UniversalFileParser::parse_named_bytes`]
    pub fn parse_named_bytes_lenient(&self, file_name: &str, bytes: &[u8]) -> DataTable {
        match self.parse_named_bytes(file_name, bytes) {
            Ok(table) => table,
            Err(err) => {
                warn!(file_name, error = %err, "upload unreadable, treating as empty table");
                DataTable::default()
            }
        }
    }
}
