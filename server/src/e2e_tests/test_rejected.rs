//! Test that requests without the configured API key are turned away.

use axum::{
    body::Body,
    http::{Method, Request},
};

use crate::e2e_tests::helpers::*;
use crate::handler::TRIGGER_PATH;

#[test]
fn test_wrong_key() {
    let server = TestServer::with_secret();

    let response = server.post_key("wrong");

    assert_rejected(&response);
}

#[test]
fn test_missing_key() {
    let server = TestServer::with_secret();

    let response = server.post(Some("{}"));

    assert_rejected(&response);
}

#[test]
fn test_missing_body() {
    let server = TestServer::with_secret();

    let response = server.post(None);

    assert_rejected(&response);
}

#[test]
fn test_empty_key() {
    let server = TestServer::with_secret();

    let response = server.post_key("");

    assert_rejected(&response);
}

#[test]
fn test_key_prefix_and_extension() {
    let server = TestServer::with_secret();

    assert_rejected(&server.post_key("abc12"));
    assert_rejected(&server.post_key("abc1234"));
    assert_rejected(&server.post_key("ABC123"));
}

#[test]
fn test_get_without_body() {
    let server = TestServer::with_secret();
    let request = Request::builder()
        .method(Method::GET)
        .uri(TRIGGER_PATH)
        .body(Body::empty())
        .unwrap();

    let response = server.send(request);

    assert_rejected(&response);
}

#[test]
fn test_rejection_is_plain_text() {
    let server = TestServer::with_secret();

    let response = server.post_key("wrong");

    assert!(
        response
            .content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("text/plain"))
    );
}

#[test]
fn test_failures_do_not_lock_out() {
    let server = TestServer::with_secret();

    for _ in 0..20 {
        assert_rejected(&server.post_key("wrong"));
    }

    assert_fulfilled(&server.post_key(SECRET));
}
