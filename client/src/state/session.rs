//! Session reconciliation: inferring login state from data responses.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gateway owns the session and the identity provider, so the client
//! cannot ask whether it is logged in. Every request to the protected data
//! endpoint doubles as that check: a 2xx means the session cookie was
//! accepted, a redirect means the gateway intercepted us, and anything else
//! is treated as logged out with the error shown to the user.
//!
//! DESIGN
//! ======
//! - [`check_session_via_data_fetch`] performs the request and classifies it.
//! - [`SessionState::apply`] is the only place the UI state changes.
//! - [`SessionState::view`] renders the state as plain data for the page.
//!
//! Concurrent checks are not serialized. Whichever outcome is applied last
//! wins.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;

use serde_json::Value;

use crate::net::transport::{DataResponse, DataTransport};

/// Shown in place of an empty result set.
pub const NO_DATA_MESSAGE: &str = "Geen data gevonden.";

/// Used when an error response carries no readable message.
pub const FETCH_FAILED_MESSAGE: &str = "Fout bij ophalen data";

/// Logged when the gateway redirects a data request.
pub const REDIRECT_NOTICE: &str = "Niet ingelogd, wordt doorgestuurd naar login";

/// Label shown for the signed-in user. The gateway does not expose identity
/// to the client.
pub const USER_LABEL: &str = "Gebruiker";

/// Which of the two views is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// Classified result of one data request.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// 2xx with a JSON body.
    Authenticated(Value),
    /// The gateway redirected the request.
    Intercepted,
    /// Non-2xx, non-redirect status.
    Rejected { status: u16, message: String },
    /// 2xx whose body is not JSON.
    Unreadable(String),
    /// No response at all.
    NetworkFailure(String),
}

impl fmt::Display for SessionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated(_) => f.write_str("authenticated"),
            Self::Intercepted => f.write_str(REDIRECT_NOTICE),
            Self::Rejected { status, message } => write!(f, "status {status}: {message}"),
            Self::Unreadable(detail) => write!(f, "unreadable response: {detail}"),
            Self::NetworkFailure(detail) => write!(f, "network failure: {detail}"),
        }
    }
}

/// Issue one credentialed GET of the data endpoint and classify the result.
///
/// This is the client's only way to learn whether the gateway session is
/// alive. It never fails: every transport error becomes an outcome.
pub async fn check_session_via_data_fetch<T: DataTransport>(transport: &T) -> SessionOutcome {
    match transport.get_data().await {
        Ok(response) => classify(&response),
        Err(e) => SessionOutcome::NetworkFailure(e.to_string()),
    }
}

/// Map a response to an outcome. Redirects win over the status code, since a
/// followed redirect usually lands on the identity provider's 200 login page.
pub fn classify(response: &DataResponse) -> SessionOutcome {
    if response.is_intercepted() {
        return SessionOutcome::Intercepted;
    }
    if !response.is_success() {
        return SessionOutcome::Rejected { status: response.status, message: error_message(&response.body) };
    }
    match serde_json::from_str::<Value>(&response.body) {
        Ok(value) => SessionOutcome::Authenticated(value),
        Err(e) => SessionOutcome::Unreadable(e.to_string()),
    }
}

/// Pull a human-readable message out of an error body.
///
/// Looks at `message`, then `error`, then falls back to a fixed text.
pub fn error_message(body: &str) -> String {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) else {
        return FETCH_FAILED_MESSAGE.to_owned();
    };
    ["message", "error"]
        .iter()
        .filter_map(|key| map.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map_or_else(|| FETCH_FAILED_MESSAGE.to_owned(), str::to_owned)
}

// =============================================================================
// STATE
// =============================================================================

/// What the data region holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DataPanel {
    #[default]
    Cleared,
    /// The result set was an empty array.
    NoRows,
    /// Pretty-printed JSON of the result set.
    Rows(String),
}

impl DataPanel {
    fn from_value(value: &Value) -> Self {
        if value.as_array().is_some_and(Vec::is_empty) {
            return Self::NoRows;
        }
        Self::Rows(serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()))
    }
}

/// Session controller state. Starts logged out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    ui: UiState,
    data: DataPanel,
    error: Option<String>,
}

impl SessionState {
    pub fn ui(&self) -> UiState {
        self.ui
    }

    /// Apply one reconciliation outcome and return the resulting UI state.
    pub fn apply(&mut self, outcome: SessionOutcome) -> UiState {
        match outcome {
            SessionOutcome::Authenticated(value) => {
                self.ui = UiState::LoggedIn;
                self.data = DataPanel::from_value(&value);
                self.error = None;
            }
            SessionOutcome::Intercepted => self.log_out(None),
            SessionOutcome::Rejected { message, .. } => self.log_out(Some(message)),
            SessionOutcome::Unreadable(detail) => self.log_out(Some(format!("{FETCH_FAILED_MESSAGE}: {detail}"))),
            SessionOutcome::NetworkFailure(detail) => self.log_out(Some(format!("Netwerkfout: {detail}"))),
        }
        self.ui
    }

    fn log_out(&mut self, error: Option<String>) {
        self.ui = UiState::LoggedOut;
        self.data = DataPanel::Cleared;
        self.error = error;
    }

    /// Render the state as plain view data.
    pub fn view(&self) -> SessionView {
        let logged_in = self.ui == UiState::LoggedIn;
        SessionView {
            login_visible: !logged_in,
            data_visible: logged_in,
            user_name: if logged_in { USER_LABEL } else { "" },
            data: self.data.clone(),
            error_text: self
                .error
                .as_ref()
                .map(|message| format!("Fout: {message}"))
                .unwrap_or_default(),
        }
    }
}

/// Everything the page needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionView {
    pub login_visible: bool,
    pub data_visible: bool,
    pub user_name: &'static str,
    pub data: DataPanel,
    /// Empty when there is nothing to report.
    pub error_text: String,
}

impl SessionView {
    /// Text content of the data region, as a user would read it.
    pub fn data_text(&self) -> &str {
        match &self.data {
            DataPanel::Cleared => "",
            DataPanel::NoRows => NO_DATA_MESSAGE,
            DataPanel::Rows(json) => json,
        }
    }
}
