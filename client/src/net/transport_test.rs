use super::*;

fn response(status: u16, redirected: bool) -> DataResponse {
    DataResponse { status, redirected, body: String::new() }
}

#[test]
fn success_covers_whole_2xx_range() {
    assert!(response(200, false).is_success());
    assert!(response(204, false).is_success());
    assert!(response(299, false).is_success());
    assert!(!response(199, false).is_success());
    assert!(!response(302, false).is_success());
    assert!(!response(500, false).is_success());
}

#[test]
fn status_302_is_intercepted() {
    assert!(response(302, false).is_intercepted());
}

#[test]
fn redirect_flag_is_intercepted_even_with_200() {
    assert!(response(200, true).is_intercepted());
}

#[test]
fn plain_responses_are_not_intercepted() {
    assert!(!response(200, false).is_intercepted());
    assert!(!response(301, false).is_intercepted());
    assert!(!response(401, false).is_intercepted());
}

#[test]
fn transport_error_display() {
    assert_eq!(TransportError::Network("Failed to fetch".into()).to_string(), "Failed to fetch");
    assert_eq!(
        TransportError::Body("stream closed".into()).to_string(),
        "response body unreadable: stream closed"
    );
}
