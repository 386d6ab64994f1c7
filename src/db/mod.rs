//! Database service access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The relay never owns storage. It reads one fixed slice of one collection
//! from a managed REST database service and hands the rows back untouched.
//! Handlers depend on the [`RowSource`] trait so the upstream can be swapped
//! for an in-process fake in tests.

pub mod supabase;

/// One row as returned by the database service. Field names and values are
/// passed through without interpretation.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Maximum number of rows a data request may return.
pub const ROW_LIMIT: usize = 10;

/// Errors produced while querying the database service.
///
/// The `Display` output of every variant is the underlying error text, which
/// the data endpoints surface verbatim.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The HTTP request to the database service failed before a response arrived.
    #[error("{0}")]
    Request(String),

    /// The database service answered with a non-success status.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The response body was not a JSON array of objects.
    #[error("{0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl QueryError {
    /// HTTP status reported by the database service, if it answered at all.
    #[must_use]
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// A source of rows for the data endpoints.
#[async_trait::async_trait]
pub trait RowSource: Send + Sync {
    /// Read up to `limit` rows from the configured collection.
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the upstream call fails for any reason.
    async fn fetch_rows(&self, limit: usize) -> Result<Vec<Row>, QueryError>;
}
