//! Relay endpoints and browser navigation.
//!
//! Browser build (csr): real HTTP calls via `gloo-net` and navigation via
//! `window.location`. Native builds compile the URL helpers only, which is
//! what the tests exercise.
//!
//! Login and logout are pure navigations. The gateway in front of the relay
//! intercepts them; this client has no credential exchange of its own.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

/// Base URL of the relay API as seen through the gateway.
pub const API_URL: &str = match option_env!("RELAY_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

/// Gateway-owned logout endpoint.
pub const LOGOUT_URL: &str = match option_env!("RELAY_LOGOUT_URL") {
    Some(url) => url,
    None => "http://localhost:8080/logout",
};

/// URL of the protected data endpoint.
pub fn data_url() -> String {
    format!("{}/data", API_URL.trim_end_matches('/'))
}

/// Send the browser to the data endpoint so the gateway can start its login
/// redirect.
pub fn navigate_to_login() {
    navigate(&data_url());
}

/// Send the browser to the gateway logout URL.
pub fn navigate_to_logout() {
    navigate(LOGOUT_URL);
}

fn navigate(url: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(url) {
                log::warn!("navigation to {url} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
    }
}

/// Browser transport: credentialed `fetch` of the data endpoint.
#[cfg(feature = "csr")]
pub struct BrowserTransport {
    url: String,
}

#[cfg(feature = "csr")]
impl BrowserTransport {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

#[cfg(feature = "csr")]
impl super::transport::DataTransport for BrowserTransport {
    async fn get_data(&self) -> Result<super::transport::DataResponse, super::transport::TransportError> {
        use super::transport::{DataResponse, TransportError};

        let resp = gloo_net::http::Request::get(&self.url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        let status = resp.status();
        let redirected = resp.redirected();
        let body = resp
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(DataResponse { status, redirected, body })
    }
}
