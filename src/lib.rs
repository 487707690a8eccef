//! moveit_api - Client library for the MOVEit Transfer REST API.
//!
//! This library provides functionality to:
//! - Exchange credentials for a bearer token
//! - List remote files and folders, following pagination
//! - Download a file and parse it into a tabular dataset (CSV, tab-delimited, or xlsx)
//! - Upload a local file to a remote folder, with chunked transfer for large files
//!
//! # Example
//!
//! ```no_run
//! use moveit_api::{authenticate, Credentials, DownloadFormat, MoveItClient};
//!
//! #[tokio::main]
//! async fn main() -> moveit_api::Result<()> {
//!     let token = authenticate("example.com", &Credentials::password("user", "pass")).await?;
//!     let client = MoveItClient::new("example.com", token);
//!
//!     for file in client.list_files().await? {
//!         println!("{:?}\t{:?}", file.id, file.name);
//!     }
//!
//!     let table = client.download("123456", DownloadFormat::Csv, None).await?;
//!     println!("{} rows, columns {:?}", table.len(), table.columns);
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod table;

// Re-exports for convenience
pub use auth::{authenticate, authenticate_with_base, Credentials};
pub use client::MoveItClient;
pub use error::{MoveItError, Result};
pub use models::{Item, Page, Paging, Token};
pub use table::{DownloadFormat, SheetSelector, Table};
