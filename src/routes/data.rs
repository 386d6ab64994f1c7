//! Data relay route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::db::{QueryError, ROW_LIMIT, Row};
use crate::state::AppState;

/// Fixed human-readable summary returned with every upstream failure.
pub const QUERY_FAILED: &str = "Fout bij ophalen data";

#[derive(Debug, Serialize)]
pub struct QueryFailure {
    pub error: &'static str,
    pub message: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let body = QueryFailure { error: QUERY_FAILED, message: self.to_string() };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

/// `GET /data` — first [`ROW_LIMIT`] rows of the configured collection.
///
/// One upstream query per request, no retry. Query strings and bodies are
/// ignored.
pub async fn list_rows(State(state): State<AppState>) -> Result<Json<Vec<Row>>, QueryError> {
    let mut rows = state.rows.fetch_rows(ROW_LIMIT).await.map_err(|e| {
        tracing::error!(error = %e, upstream_status = ?e.upstream_status(), "database query failed");
        e
    })?;
    rows.truncate(ROW_LIMIT);
    tracing::debug!(count = rows.len(), "rows relayed");
    Ok(Json(rows))
}

#[cfg(test)]
#[path = "data_test.rs"]
mod tests;
