//! MOVEit Transfer API client for file and folder operations.

use std::path::Path;

use reqwest::header;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, Response};
use tokio_util::io::ReaderStream;

use crate::error::{MoveItError, Result};
use crate::models::{ApiErrorResponse, Item, Page, Token};
use crate::table::{DownloadFormat, SheetSelector, Table};

/// Uploads at or above this size (40 MB) always use chunked transfer encoding.
const CHUNKED_THRESHOLD: u64 = 40_000_000;

/// Hard cap on listing pagination. A server still reporting more pages past
/// this point is not converging.
const MAX_PAGES: u64 = 10_000;

/// API base URL for an organization domain.
pub(crate) fn api_base(domain: &str) -> String {
    format!("https://moveit.{}/api/v1", domain)
}

/// Client for an authenticated MOVEit Transfer session.
///
/// Holds the bearer token obtained from [`crate::auth::authenticate`]; the
/// token's lifetime is the caller's concern, there is no refresh logic.
pub struct MoveItClient {
    base_url: String,
    token: Token,
    http: Client,
}

impl MoveItClient {
    /// Create a client for `https://moveit.{domain}/api/v1`.
    pub fn new(domain: &str, token: Token) -> Self {
        Self::with_base_url(api_base(domain), token)
    }

    /// Create a client against an explicit API base URL.
    pub fn with_base_url(base_url: impl Into<String>, token: Token) -> Self {
        Self {
            base_url: base_url.into(),
            token,
            http: Client::new(),
        }
    }

    /// The token this client authenticates with.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// List all files visible to the authenticated user, following
    /// pagination to the end.
    pub async fn list_files(&self) -> Result<Vec<Item>> {
        self.list_paginated("files").await
    }

    /// List all folders visible to the authenticated user, following
    /// pagination to the end.
    pub async fn list_folders(&self) -> Result<Vec<Item>> {
        self.list_paginated("folders").await
    }

    /// Fetch page 1 of `endpoint`, then follow `paging` until
    /// `page == totalPages`, concatenating items in fetch order.
    ///
    /// Each follow-up request asks for `page + 1` and requires the server to
    /// answer with exactly that page; anything else is
    /// [`MoveItError::NonMonotonicPaging`]. [`MoveItError::PageLimitExceeded`]
    /// bounds a server that never converges.
    async fn list_paginated(&self, endpoint: &str) -> Result<Vec<Item>> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let first = self.get_page(&url).await?;
        let mut items = first.items;
        let mut page = first.paging.page;
        let mut total_pages = first.paging.total_pages;

        while page != total_pages {
            if page >= MAX_PAGES {
                return Err(MoveItError::PageLimitExceeded(MAX_PAGES));
            }

            let next = page + 1;
            let envelope = self.get_page(&format!("{}?page={}", url, next)).await?;

            if envelope.paging.page != next {
                return Err(MoveItError::NonMonotonicPaging {
                    expected: next,
                    got: envelope.paging.page,
                });
            }

            items.extend(envelope.items);
            page = envelope.paging.page;
            total_pages = envelope.paging.total_pages;
        }

        Ok(items)
    }

    async fn get_page(&self, url: &str) -> Result<Page> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let page: Page = response.json().await?;
        Ok(page)
    }

    /// Download a file and parse it into a [`Table`].
    ///
    /// The body is buffered in memory and parsed according to `format`;
    /// `sheet` selects a worksheet for [`DownloadFormat::Excel`] (first
    /// worksheet when `None`) and is ignored for the text formats.
    pub async fn download(
        &self,
        file_id: &str,
        format: DownloadFormat,
        sheet: Option<SheetSelector>,
    ) -> Result<Table> {
        let response = self
            .http
            .get(format!("{}/files/{}/download", self.base_url, file_id))
            .bearer_auth(&self.token.access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let bytes = response.bytes().await?;

        match format {
            DownloadFormat::Csv => Table::from_delimited(&bytes, b','),
            DownloadFormat::Txt => Table::from_delimited(&bytes, b'\t'),
            DownloadFormat::Excel => Table::from_xlsx(&bytes, sheet.as_ref()),
        }
    }

    /// Upload a local file into a remote folder.
    ///
    /// The file goes out as a multipart form with its base filename and
    /// `content_type` (guessed from the extension when `None`). Files of
    /// 40 MB or more, or any upload with `chunked` set, are sent as a
    /// streamed body with chunked transfer encoding.
    ///
    /// # Errors
    /// Any status other than 200 or 201 fails with
    /// [`MoveItError::UploadRejected`] carrying the status code.
    pub async fn upload<P: AsRef<Path>>(
        &self,
        folder_id: &str,
        local_path: P,
        content_type: Option<&str>,
        chunked: bool,
    ) -> Result<()> {
        let local_path = local_path.as_ref();
        let filename = local_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| MoveItError::InvalidFilePath(local_path.display().to_string()))?
            .to_string();

        let size = std::fs::metadata(local_path)?.len();
        let mime = match content_type {
            Some(mime) => mime.to_string(),
            None => mime_guess::from_path(local_path)
                .first_or_octet_stream()
                .to_string(),
        };

        let part = if needs_chunked(size, chunked) {
            // Streamed body of unknown length goes out with
            // Transfer-Encoding: chunked.
            let file = tokio::fs::File::open(local_path).await?;
            Part::stream(Body::wrap_stream(ReaderStream::new(file)))
        } else {
            Part::bytes(std::fs::read(local_path)?)
        };
        let part = part.file_name(filename).mime_str(&mime)?;

        let response = self
            .http
            .post(format!("{}/folders/{}/files", self.base_url, folder_id))
            .bearer_auth(&self.token.access_token)
            .header(header::ACCEPT, "application/json")
            .multipart(Form::new().part("file", part))
            .send()
            .await?;

        match response.status().as_u16() {
            200 | 201 => Ok(()),
            status => Err(MoveItError::UploadRejected(status)),
        }
    }
}

/// Whether an upload must use chunked transfer encoding.
fn needs_chunked(size: u64, chunked: bool) -> bool {
    chunked || size >= CHUNKED_THRESHOLD
}

/// Decode a non-2xx response into an [`MoveItError::Api`], keeping the raw
/// body when it is not one of the known error shapes.
async fn api_error(response: Response) -> MoveItError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let parsed: ApiErrorResponse = serde_json::from_str(&body).unwrap_or_default();
    MoveItError::Api {
        status,
        message: parsed.description(&body),
    }
}
