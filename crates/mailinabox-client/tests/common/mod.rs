#![allow(dead_code)]

use std::path::Path;

use mailinabox_client::MiabClient;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub const EMAIL: &str = "example@example.com";
pub const PASSWORD: &str = "secret";

/// Read a response body from `tests/fixtures`
pub fn fixture(name: &str) -> String {
    let file = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&file)
        .unwrap_or_else(|e| panic!("cannot read fixture {}: {e}", file.display()))
}

/// Start a mock box and a client pointing at it
pub async fn setup() -> (MiabClient, MockServer) {
    let server = MockServer::start().await;
    let client = MiabClient::new(server.uri(), EMAIL, PASSWORD).unwrap();
    (client, server)
}

/// Authenticated request matcher for `verb route`
pub fn authed(verb: &str, route: &str) -> MockBuilder {
    Mock::given(method(verb))
        .and(path(route))
        .and(basic_auth(EMAIL, PASSWORD))
}

/// Answer `verb route` once with the fixture body
pub async fn serve(server: &MockServer, verb: &str, route: &str, fixture_name: &str) {
    authed(verb, route)
        .respond_with(ResponseTemplate::new(200).set_body_string(fixture(fixture_name)))
        .expect(1)
        .mount(server)
        .await;
}
