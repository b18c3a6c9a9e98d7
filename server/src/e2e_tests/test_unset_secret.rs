//! Test the strict policy when no secret is configured: every caller is
//! accepted, with or without a key.

use crate::auth::AuthPolicy;
use crate::e2e_tests::helpers::*;

#[test]
fn test_absent_key_accepted() {
    let server = TestServer::new(None, AuthPolicy::Strict);

    assert_fulfilled(&server.post(None));
    assert_fulfilled(&server.post(Some("{}")));
}

#[test]
fn test_any_key_accepted() {
    let server = TestServer::new(None, AuthPolicy::Strict);

    assert_fulfilled(&server.post_key("anything"));
    assert_fulfilled(&server.post_key(""));
}

#[test]
fn test_empty_secret_behaves_as_unset() {
    let server = TestServer::new(Some(""), AuthPolicy::Strict);

    assert_fulfilled(&server.post(None));
    assert_fulfilled(&server.post_key("wrong"));
}
