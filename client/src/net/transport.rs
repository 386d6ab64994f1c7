//! Transport seam for data requests.
//!
//! Session reconciliation only needs the status code, the redirect flag and
//! the body text of one credentialed GET. Keeping that behind a trait lets
//! the reconciler run against a scripted transport off the browser.

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;

/// The parts of a data-endpoint response the reconciler looks at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataResponse {
    pub status: u16,
    /// Set when the browser followed one or more redirects to produce this
    /// response.
    pub redirected: bool,
    pub body: String,
}

impl DataResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the gateway intercepted the request: a redirect was followed
    /// or the raw status is 302.
    pub fn is_intercepted(&self) -> bool {
        self.redirected || self.status == 302
    }
}

/// Fetch-level failures: the request never produced a readable response.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request could not be sent or no response arrived.
    #[error("{0}")]
    Network(String),

    /// A response arrived but its body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
}

/// Issues the credentialed GET against the data endpoint.
///
/// Implementations must attach cookies so the gateway can recognize the
/// session.
#[allow(async_fn_in_trait)]
pub trait DataTransport {
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no readable response was produced.
    async fn get_data(&self) -> Result<DataResponse, TransportError>;
}
