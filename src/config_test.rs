use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let cfg = RelayConfig::from_lookup(|_| None).unwrap();
    assert_eq!(cfg.supabase_url, DEFAULT_SUPABASE_URL);
    assert_eq!(cfg.supabase_key, DEFAULT_SUPABASE_KEY);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.cors_origin, HeaderValue::from_static(DEFAULT_CORS_ORIGIN));
    assert_eq!(cfg.table, "entities");
}

#[test]
fn overrides_are_applied() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[
        ("SUPABASE_URL", "https://abc.supabase.co/"),
        ("SUPABASE_KEY", "anon-123"),
        ("PORT", "8088"),
        ("CORS_ORIGIN", "https://app.example.test"),
        ("DATA_TABLE", "widgets"),
    ]))
    .unwrap();
    assert_eq!(cfg.supabase_url, "https://abc.supabase.co");
    assert_eq!(cfg.supabase_key, "anon-123");
    assert_eq!(cfg.port, 8088);
    assert_eq!(cfg.cors_origin, HeaderValue::from_static("https://app.example.test"));
    assert_eq!(cfg.table, "widgets");
}

#[test]
fn origin_trailing_slash_is_trimmed() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[("CORS_ORIGIN", "http://localhost:8081/")])).unwrap();
    assert_eq!(cfg.cors_origin, HeaderValue::from_static("http://localhost:8081"));
}

#[test]
fn port_with_whitespace_is_accepted() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[("PORT", " 4000 ")])).unwrap();
    assert_eq!(cfg.port, 4000);
}

#[test]
fn invalid_port_is_rejected() {
    let err = RelayConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { ref value } if value == "not-a-port"));
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = RelayConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort { .. }));
}

#[test]
fn empty_origin_is_rejected() {
    let err = RelayConfig::from_lookup(lookup_from(&[("CORS_ORIGIN", "   ")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
}

#[test]
fn origin_with_control_chars_is_rejected() {
    let err = RelayConfig::from_lookup(lookup_from(&[("CORS_ORIGIN", "http://bad\norigin")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidOrigin { .. }));
}

#[test]
fn blank_table_falls_back_to_default() {
    let cfg = RelayConfig::from_lookup(lookup_from(&[("DATA_TABLE", "  ")])).unwrap();
    assert_eq!(cfg.table, DEFAULT_DATA_TABLE);
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::InvalidPort { value: "x".into() };
    assert_eq!(err.to_string(), "invalid PORT: \"x\"");
}
