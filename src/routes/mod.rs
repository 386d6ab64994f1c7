//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay sits behind an authenticating gateway that owns the session
//! cookie. Every route is registered twice, bare and under `/api`, because the
//! gateway may or may not strip its prefix before forwarding. CORS grants a
//! single origin with credentials so the gateway cookie reaches us on every
//! browser request.

pub mod data;
pub mod health;

use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Inbound body cap. No current endpoint reads a body, so the limit is
/// enforced on the declared `Content-Length` before routing (413).
pub const BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// CORS policy: one origin, credentials allowed, fixed methods and headers.
///
/// Requests from any other origin still reach the handler but receive no
/// `Access-Control-Allow-Origin` grant, so browsers refuse the response.
fn cors(allowed_origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

/// Build the relay router.
pub fn app(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/health", get(health::health))
        .route("/data", get(data::list_rows))
        .route("/api/data", get(data::list_rows))
        .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES))
        .layer(cors(allowed_origin))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
