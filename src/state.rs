//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! relay keeps nothing between requests; the only field is the row source
//! each data request queries once.

use std::sync::Arc;

use crate::db::RowSource;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub rows: Arc<dyn RowSource>,
}

impl AppState {
    #[must_use]
    pub fn new(rows: Arc<dyn RowSource>) -> Self {
        Self { rows }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
