//! Test that authorized responses are identical across requests and
//! across independently built servers.

use axum::{
    body::Body,
    http::{Method, Request, header},
};

use crate::e2e_tests::helpers::*;
use crate::handler::TRIGGER_PATH;

#[test]
fn test_repeated_requests_are_byte_identical() {
    let server = TestServer::with_secret();

    let first = server.post_key(SECRET);
    let second = server.post_key(SECRET);

    assert_fulfilled(&first);
    assert_eq!(first, second);
}

#[test]
fn test_independent_servers_agree() {
    let first = TestServer::with_secret().post_key(SECRET);
    let second = TestServer::with_secret().post_key(SECRET);

    assert_eq!(first.body, second.body);
    assert_eq!(first.etag, second.etag);
}

#[test]
fn test_etag_present_on_success() {
    let server = TestServer::with_secret();

    let response = server.post_key(SECRET);

    assert!(
        response
            .etag
            .as_deref()
            .is_some_and(|etag| etag.starts_with('"') && etag.ends_with('"'))
    );
}

#[test]
fn test_rejections_do_not_affect_later_responses() {
    let server = TestServer::with_secret();

    let before = server.post_key(SECRET);
    assert_rejected(&server.post_key("wrong"));
    let after = server.post_key(SECRET);

    assert_eq!(before, after);
}

#[test]
fn test_concurrent_requests_agree() {
    let server = TestServer::with_secret();

    let responses: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let server = &server;
                scope.spawn(move || {
                    if i % 2 == 0 {
                        server.post_key(SECRET)
                    } else {
                        server.post_key("wrong")
                    }
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (i, response) in responses.iter().enumerate() {
        if i % 2 == 0 {
            assert_eq!(response, &responses[0]);
        } else {
            assert_rejected(response);
        }
    }
}

#[test]
fn test_if_none_match_still_returns_full_body() {
    let server = TestServer::with_secret();
    let first = server.post_key(SECRET);
    let etag = first.etag.clone().unwrap();

    let request = Request::builder()
        .method(Method::POST)
        .uri(TRIGGER_PATH)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::IF_NONE_MATCH, etag)
        .body(Body::from(r#"{"apiKey":"abc123"}"#))
        .unwrap();
    let second = server.send(request);

    assert_fulfilled(&second);
    assert_eq!(first, second);
}
