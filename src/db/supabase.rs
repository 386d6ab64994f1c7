//! PostgREST client for a Supabase-style database service.
//!
//! Thin HTTP wrapper for `GET /rest/v1/{table}`. Pure parsing in
//! `parse_rows` and `upstream_error_message` for testability. No request
//! timeout is set; the relay relies on the HTTP client defaults.

use reqwest::header::ACCEPT;

use super::{QueryError, Row, RowSource};

const REST_PATH: &str = "/rest/v1";

// =============================================================================
// CLIENT
// =============================================================================

pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    table: String,
}

impl SupabaseClient {
    /// Build a client for `table` on the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(base_url: &str, api_key: String, table: String) -> Result<Self, QueryError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| QueryError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_owned();
        Ok(Self { http, base_url, api_key, table })
    }

    fn rows_url(&self) -> String {
        format!("{}{}/{}", self.base_url, REST_PATH, self.table)
    }
}

#[async_trait::async_trait]
impl RowSource for SupabaseClient {
    async fn fetch_rows(&self, limit: usize) -> Result<Vec<Row>, QueryError> {
        let response = self
            .http
            .get(self.rows_url())
            .query(&[("select", "*".to_owned()), ("limit", limit.to_string())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| QueryError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| QueryError::Request(e.to_string()))?;

        if !status.is_success() {
            let status = status.as_u16();
            return Err(QueryError::Upstream { status, message: upstream_error_message(status, &text) });
        }

        let mut rows = parse_rows(&text)?;
        rows.truncate(limit);
        Ok(rows)
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Parse a success body into rows. An empty body or JSON `null` is an empty set.
pub(crate) fn parse_rows(text: &str) -> Result<Vec<Row>, QueryError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    let rows: Option<Vec<Row>> =
        serde_json::from_str(text).map_err(|e| QueryError::Decode(format!("invalid rows payload: {e}")))?;
    Ok(rows.unwrap_or_default())
}

/// Extract the error text from a failed upstream response.
///
/// Prefers the PostgREST `message` field, then the raw body, then a fallback
/// naming the status code.
pub(crate) fn upstream_error_message(status: u16, body: &str) -> String {
    if let Ok(ErrorBody { message: Some(message) }) = serde_json::from_str::<ErrorBody>(body) {
        if !message.is_empty() {
            return message;
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("upstream returned status {status}")
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
