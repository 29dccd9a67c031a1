use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Reader};
use thiserror::Error;

/// Errors raised while validating an uploaded file
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Unsupported file format. Please upload CSV or Excel files.")]
    UnsupportedFormat(String),

    #[error("File exceeds the maximum upload size of {limit} bytes")]
    TooLarge { limit: usize },

    #[error("file is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("No columns to parse from file")]
    NoColumns,

    #[error("Expected {expected} fields in line {line}, saw {found}")]
    TooManyFields { line: usize, expected: usize, found: usize },

    #[error("{0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("workbook contains no worksheets")]
    NoWorksheet,
}

/// Upload formats accepted by the visualizer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Spreadsheet,
}

impl FileFormat {
    /// Detect the format from the filename extension (case-insensitive)
    pub fn from_filename(filename: &str) -> Result<Self, IntakeError> {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "csv" => Ok(FileFormat::Csv),
            "xls" | "xlsx" => Ok(FileFormat::Spreadsheet),
            _ => Err(IntakeError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Shape of a successfully parsed upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedTable {
    pub rows: usize,
    pub columns: usize,
}

/// Validates uploads by parsing them; the parsed content is discarded
#[derive(Debug, Clone, Copy)]
pub struct FileIntake {
    max_bytes: usize,
}

impl FileIntake {
    pub fn new(max_bytes: usize) -> Self {
        Self { max_bytes }
    }

    /// Reject a buffer that has grown past the upload limit
    pub fn check_size(&self, len: usize) -> Result<(), IntakeError> {
        if len > self.max_bytes {
            return Err(IntakeError::TooLarge { limit: self.max_bytes });
        }
        Ok(())
    }

    /// Parse `bytes` according to the extension of `filename`
    pub fn parse(&self, filename: &str, bytes: &[u8]) -> Result<ParsedTable, IntakeError> {
        let format = FileFormat::from_filename(filename)?;
        self.check_size(bytes.len())?;

        match format {
            FileFormat::Csv => parse_csv(bytes),
            FileFormat::Spreadsheet => parse_spreadsheet(bytes),
        }
    }
}

fn parse_csv(bytes: &[u8]) -> Result<ParsedTable, IntakeError> {
    let text = std::str::from_utf8(bytes)?;

    // Short rows are padded like missing values; only overlong rows are malformed
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = reader.headers()?.len();
    if columns == 0 {
        return Err(IntakeError::NoColumns);
    }

    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        if record.len() > columns {
            return Err(IntakeError::TooManyFields {
                line: rows + 2,
                expected: columns,
                found: record.len(),
            });
        }
        rows += 1;
    }

    Ok(ParsedTable { rows, columns })
}

fn parse_spreadsheet(bytes: &[u8]) -> Result<ParsedTable, IntakeError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(IntakeError::NoWorksheet)??;

    let (rows, columns) = range.get_size();
    Ok(ParsedTable { rows, columns })
}
