//! Data models for MOVEit Transfer API responses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Bearer token returned by the `/token` endpoint.
///
/// `access_token` is required; deserialization fails if the server response
/// does not contain it. Any additional fields the server returns are kept in
/// `extra` so the token round-trips unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metadata for a remote file or folder.
///
/// MOVEit item attributes vary by endpoint and server version; everything
/// beyond the common fields is preserved in `extra`. `size` is accepted as a
/// JSON number or a numeric string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_size")]
    pub size: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Pagination counters from a listing response.
///
/// Some deployments return the counters as JSON numbers, others as numeric
/// strings; both are accepted.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(deserialize_with = "deserialize_page_count")]
    pub page: u64,
    #[serde(deserialize_with = "deserialize_page_count")]
    pub total_pages: u64,
}

/// One page of a listing response.
#[derive(Debug, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub items: Vec<Item>,
    pub paging: Paging,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

fn deserialize_page_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::String(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn deserialize_opt_size<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::String(s)) => {
            s.trim().parse().map(Some).map_err(serde::de::Error::custom)
        }
    }
}

/// Error body returned by the API.
///
/// MOVEit error payloads are not uniform: the token endpoint speaks OAuth2
/// (`error` / `error_description`), other endpoints return `detail` or
/// `message`. All shapes are accepted leniently.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ApiErrorResponse {
    /// Best-effort human-readable description, falling back to `raw` when the
    /// body carried none of the known fields.
    pub fn description(&self, raw: &str) -> String {
        self.detail
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| raw.to_string())
    }
}
