//! Test that unreadable bodies are treated as carrying no credential.

use crate::auth::AuthPolicy;
use crate::e2e_tests::helpers::*;

#[test]
fn test_invalid_json() {
    let server = TestServer::with_secret();

    assert_rejected(&server.post(Some(r#"{"apiKey":"abc123""#)));
    assert_rejected(&server.post(Some("apiKey=abc123")));
}

#[test]
fn test_non_object_json() {
    let server = TestServer::with_secret();

    assert_rejected(&server.post(Some(r#"["abc123"]"#)));
    assert_rejected(&server.post(Some(r#""abc123""#)));
    assert_rejected(&server.post(Some("null")));
}

#[test]
fn test_non_string_key() {
    let server = TestServer::with_secret();

    assert_rejected(&server.post(Some(r#"{"apiKey":123}"#)));
    assert_rejected(&server.post(Some(r#"{"apiKey":null}"#)));
    assert_rejected(&server.post(Some(r#"{"apiKey":["abc123"]}"#)));
}

#[test]
fn test_malformed_body_without_secret_is_accepted() {
    let server = TestServer::new(None, AuthPolicy::Strict);

    assert_fulfilled(&server.post(Some("not json at all")));
}
