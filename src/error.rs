//! Error types for the moveit_api crate.

use thiserror::Error;

/// Errors that can occur when talking to a MOVEit Transfer server.
#[derive(Error, Debug)]
pub enum MoveItError {
    #[error("Authentication failed ({status}): {message}")]
    AuthFailed { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Upload rejected with status {0}")]
    UploadRejected(u16),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid file path: {0}")]
    InvalidFilePath(String),

    #[error("Paging did not advance: requested page {expected}, server returned page {got}")]
    NonMonotonicPaging { expected: u64, got: u64 },

    #[error("Listing exceeded {0} pages without converging")]
    PageLimitExceeded(u64),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet parse error: {0}")]
    Spreadsheet(#[from] calamine::XlsxError),

    #[error("Worksheet not found: {0}")]
    SheetNotFound(String),
}

/// Result type alias for MoveItError.
pub type Result<T> = std::result::Result<T, MoveItError>;
