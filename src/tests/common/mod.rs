// tests/common/mod.rs
use httpmock::Method::POST;
use httpmock::{Mock, MockServer};
use serde_json::json;

use crate::auth::credentials::Credentials;
use crate::config::settings::ClientConfig;
use crate::client::IopayClient;

pub const STANDARD_TOKEN: &str = "std-token";
pub const SENSITIVE_TOKEN: &str = "card-token";

/// Base url of the mocked API, shaped like the real one (`.../api/`).
pub fn api_base_url(server: &MockServer) -> String {
    format!("{}/api/", server.base_url())
}

pub fn test_credentials() -> Credentials {
    Credentials::new("s3cret", "dev@example.com", "seller-1")
}

/// Client pointed at the mock server with full credentials.
pub fn build_client(server: &MockServer) -> IopayClient {
    let config = ClientConfig {
        base_url: Some(api_base_url(server)),
        credentials: test_credentials(),
        ..Default::default()
    };
    IopayClient::new(&config).expect("client")
}

/// Standard auth endpoint returning `token`; `expires_in` is omitted when `None`.
pub async fn mock_standard_auth<'a>(server: &'a MockServer, token: &str, expires_in: Option<i64>) -> Mock<'a> {
    mock_auth(server, "/api/auth/login", token, expires_in).await
}

pub async fn mock_sensitive_auth<'a>(server: &'a MockServer, token: &str, expires_in: Option<i64>) -> Mock<'a> {
    mock_auth(server, "/api/v1/card/authentication", token, expires_in).await
}

async fn mock_auth<'a>(server: &'a MockServer, path: &str, token: &str, expires_in: Option<i64>) -> Mock<'a> {
    let body = match expires_in {
        Some(expires_in) => json!({"access_token": token, "token_type": "Bearer", "expires_in": expires_in}),
        None => json!({"access_token": token, "token_type": "Bearer"}),
    };
    server
        .mock_async(|when, then| {
            when.method(POST).path(path);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(body);
        })
        .await
}
