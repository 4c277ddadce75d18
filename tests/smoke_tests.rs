//! Basic construction and serialization checks that need no server.

use gancio_client::{Config, EventQuery, GancioClient, NewEvent};

/// Smoke test to verify client construction and base URL handling
#[test]
fn test_client_construction() {
    let client = GancioClient::new("https://gancio.example.org/");
    assert_eq!(client.base_url(), "https://gancio.example.org");
    assert!(client.access_token().is_none());
    assert!(client.refresh_token().is_none());
}

/// Smoke test for supplying a token at construction time
#[test]
fn test_access_token_constructor() {
    let client = GancioClient::new("https://gancio.example.org").with_access_token("fake-token");
    assert_eq!(client.access_token(), Some("fake-token"));
}

/// Smoke test to verify that a config can be built for the test harness
#[test]
fn test_config_shape() {
    let config = Config {
        url: "http://localhost:13120".to_string(),
        admin_email: None,
        admin_password: None,
    };

    assert_eq!(config.url, "http://localhost:13120");
    assert!(config.admin_credentials().is_err());
}

/// Smoke test for the default event listing query
#[test]
fn test_default_event_query_is_empty() {
    let query = EventQuery::default();
    assert!(query.tags.is_empty());
    assert!(query.start.is_none());
    assert!(query.query.is_none());
}

/// Smoke test for the creation payload shape
#[test]
fn test_new_event_payload_shape() {
    let event = NewEvent {
        title: "Test: Event".to_string(),
        start_datetime: 1767225600,
        place_name: "Test Place".to_string(),
        place_address: "123 Test Street".to_string(),
        ..Default::default()
    };
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["title"], "Test: Event");
    assert!(json.get("description").is_none());
}
