//! Tabular parsing of downloaded file contents.

use std::io::Cursor;

use calamine::{Reader, Xlsx};

use crate::error::{MoveItError, Result};

/// Format of a file fetched through the download endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadFormat {
    /// Comma-delimited text.
    Csv,
    /// Tab-delimited text.
    Txt,
    /// An xlsx workbook.
    Excel,
}

impl DownloadFormat {
    /// MIME type associated with the format.
    pub fn mime_type(&self) -> &'static str {
        match self {
            DownloadFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            DownloadFormat::Csv | DownloadFormat::Txt => "text/csv",
        }
    }
}

/// Selects a worksheet inside an xlsx workbook, by name or position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetSelector {
    Name(String),
    Index(usize),
}

/// A parsed tabular dataset: a header row plus data rows, all cells as text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Parse delimiter-separated text. The first record is the header row.
    pub(crate) fn from_delimited(bytes: &[u8], delimiter: u8) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .has_headers(true)
            .from_reader(bytes);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Table { columns, rows })
    }

    /// Parse an xlsx workbook, taking the first worksheet when `sheet` is
    /// `None`.
    pub(crate) fn from_xlsx(bytes: &[u8], sheet: Option<&SheetSelector>) -> Result<Self> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;

        let range = match sheet {
            Some(SheetSelector::Name(name)) => {
                if !workbook.sheet_names().iter().any(|s| s == name) {
                    return Err(MoveItError::SheetNotFound(name.clone()));
                }
                workbook.worksheet_range(name)?
            }
            Some(SheetSelector::Index(idx)) => workbook
                .worksheet_range_at(*idx)
                .ok_or_else(|| MoveItError::SheetNotFound(format!("index {}", idx)))??,
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| MoveItError::SheetNotFound("index 0".to_string()))??,
        };

        let mut row_iter = range.rows();
        let columns = row_iter
            .next()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .unwrap_or_default();
        let rows = row_iter
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();

        Ok(Table { columns, rows })
    }
}
