//! Credential exchange against the MOVEit token endpoint.

use reqwest::Client;
use serde::Serialize;

use crate::error::{MoveItError, Result};
use crate::models::{ApiErrorResponse, Token};

/// Credentials sent to `POST /api/v1/token`.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub grant_type: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// Password-grant credentials for a MOVEit user.
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            grant_type: "password".to_string(),
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Exchange credentials for a bearer token.
///
/// `domain` is the organization part of the server address: the request goes
/// to `https://moveit.{domain}/api/v1/token`.
///
/// # Errors
/// Returns [`MoveItError::AuthFailed`] with the HTTP status and the server's
/// error description on any non-2xx response.
pub async fn authenticate(domain: &str, credentials: &Credentials) -> Result<Token> {
    authenticate_with_base(&crate::client::api_base(domain), credentials).await
}

/// Like [`authenticate`], but against an explicit API base URL, for
/// deployments not reachable at the `moveit.{domain}` convention.
pub async fn authenticate_with_base(base_url: &str, credentials: &Credentials) -> Result<Token> {
    let response = Client::new()
        .post(format!("{}/token", base_url))
        .header("Content-Type", "application/json")
        .json(credentials)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let parsed: ApiErrorResponse = serde_json::from_str(&body).unwrap_or_default();
        return Err(MoveItError::AuthFailed {
            status: status.as_u16(),
            message: parsed.description(&body),
        });
    }

    let token: Token = response.json().await?;
    Ok(token)
}
