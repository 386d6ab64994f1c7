//! Liveness probe.

use axum::response::Json;
use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub const HEALTHY: HealthStatus = HealthStatus { status: "ok", service: "api-server" };

/// `GET /health` — fixed status payload. Never touches the database.
pub async fn health() -> Json<HealthStatus> {
    Json(HEALTHY)
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
