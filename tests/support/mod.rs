#![allow(dead_code)]

use std::sync::Arc;

use audiense_mcp::api::ApiClient;
use audiense_mcp::auth::TokenManager;
use audiense_mcp::config::{ApiConfig, AuthConfig};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

pub fn token_manager(auth_server: &MockServer) -> Arc<TokenManager> {
    Arc::new(TokenManager::new(
        AuthConfig::default().with_issuer_url(auth_server.uri()),
    ))
}

pub fn api_client(api_server: &MockServer, auth: Arc<TokenManager>) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(
        ApiConfig::default().with_base_url(api_server.uri()),
        auth,
    ))
}

pub fn device_code_mock() -> Mock {
    Mock::given(method("POST"))
        .and(path("/oauth/device/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_code": "device-123",
            "user_code": "ABCD-EFGH",
            "verification_uri": "https://auth.audiense.com/activate",
            "verification_uri_complete": "https://auth.audiense.com/activate?user_code=ABCD-EFGH",
            "expires_in": 900,
            "interval": 5
        })))
}

/// Matcher for a `/oauth/token` call with the given grant type; attach
/// further matchers before `respond_with`.
pub fn token_endpoint(grant_type: &str) -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_partial_json(json!({ "grant_type": grant_type })))
}

pub fn grant_response(access: &str, refresh: &str, expires_in: u64) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "access_token": access,
        "refresh_token": refresh,
        "expires_in": expires_in
    }))
}

pub fn grant_mock(grant_type: &str, access: &str, refresh: &str, expires_in: u64) -> Mock {
    token_endpoint(grant_type).respond_with(grant_response(access, refresh, expires_in))
}

/// Drive the manager into the cached state through a mocked device flow.
/// The mocks are scoped, so they are gone once this returns.
pub async fn authorize(
    auth_server: &MockServer,
    manager: &TokenManager,
    access: &str,
    refresh: &str,
    expires_in: u64,
) {
    let _device = device_code_mock().mount_as_scoped(auth_server).await;
    let _grant = grant_mock(
        "urn:ietf:params:oauth:grant-type:device_code",
        access,
        refresh,
        expires_in,
    )
    .mount_as_scoped(auth_server)
    .await;

    manager
        .start_device_flow()
        .await
        .expect("device flow should start");
    let token = manager
        .access_token()
        .await
        .expect("device code exchange should mint a token");
    assert_eq!(token, access);
}
