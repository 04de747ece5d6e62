mod support;

use audiense_mcp::auth::AuthError;
use serde_json::json;
use tokio::join;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{
    authorize, device_code_mock, grant_mock, grant_response, token_endpoint, token_manager,
};

#[tokio::test]
async fn empty_state_fails_without_network() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);

    let result = manager.access_token().await;

    assert!(matches!(result, Err(AuthError::NoTokenCache)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn valid_token_is_reused_without_network() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    authorize(&server, &manager, "access-1", "refresh-1", 3600).await;
    let requests_after_mint = server.received_requests().await.unwrap().len();

    let first = manager.access_token().await.unwrap();
    let second = manager.access_token().await.unwrap();

    assert_eq!(first, "access-1");
    assert_eq!(second, "access-1");
    assert_eq!(
        server.received_requests().await.unwrap().len(),
        requests_after_mint
    );
}

#[tokio::test]
async fn expired_token_triggers_exactly_one_refresh() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    // 30s lifetime is inside the 60s safety margin, so the pair is already
    // expired by the time it is cached.
    authorize(&server, &manager, "access-old", "refresh-old", 30).await;

    let _refresh = token_endpoint("refresh_token")
        .and(body_partial_json(json!({ "refresh_token": "refresh-old" })))
        .respond_with(grant_response("access-new", "refresh-new", 3600))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    let refreshed = manager.access_token().await.unwrap();
    let cached = manager.access_token().await.unwrap();

    assert_eq!(refreshed, "access-new");
    assert_eq!(cached, "access-new");
}

#[tokio::test]
async fn refresh_failure_discards_the_cache() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    authorize(&server, &manager, "access-old", "refresh-old", 30).await;

    {
        let _refresh = Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(500).set_body_string("issuer exploded"))
            .expect(1)
            .mount_as_scoped(&server)
            .await;

        let result = manager.access_token().await;
        assert!(matches!(result, Err(AuthError::NoTokenCache)));
    }

    // Cache is gone: the next call fails locally without touching the issuer.
    let requests_so_far = server.received_requests().await.unwrap().len();
    let result = manager.access_token().await;
    assert!(matches!(result, Err(AuthError::NoTokenCache)));
    assert_eq!(
        server.received_requests().await.unwrap().len(),
        requests_so_far
    );
}

#[tokio::test]
async fn start_device_flow_returns_the_session() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    let _device = device_code_mock().expect(1).mount_as_scoped(&server).await;

    let session = manager.start_device_flow().await.unwrap();

    assert_eq!(session.device_code, "device-123");
    assert_eq!(session.user_code, "ABCD-EFGH");
    assert_eq!(
        session.verification_uri_complete,
        "https://auth.audiense.com/activate?user_code=ABCD-EFGH"
    );
    assert_eq!(session.expires_in, 900);
    assert_eq!(session.interval, 5);
}

#[tokio::test]
async fn start_device_flow_surfaces_upstream_status_and_body() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    let _device = Mock::given(method("POST"))
        .and(path("/oauth/device/code"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount_as_scoped(&server)
        .await;

    let err = manager.start_device_flow().await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("503"), "{message}");
    assert!(message.contains("maintenance"), "{message}");
}

#[tokio::test]
async fn pending_approval_attempts_one_exchange_per_call() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    let _device = device_code_mock().mount_as_scoped(&server).await;
    manager.start_device_flow().await.unwrap();

    {
        let _grant = Mock::given(method("POST"))
            .and(path("/oauth/token"))
            .respond_with(ResponseTemplate::new(403).set_body_string("authorization_pending"))
            .expect(2)
            .mount_as_scoped(&server)
            .await;

        for _ in 0..2 {
            let err = manager.access_token().await.unwrap_err();
            let message = err.to_string();
            assert!(message.contains("403"), "{message}");
            assert!(message.contains("authorization_pending"), "{message}");
        }
    }

    // The pending code survived both failures; approval completes the flow.
    let _grant = token_endpoint("urn:ietf:params:oauth:grant-type:device_code")
        .and(body_partial_json(json!({ "device_code": "device-123" })))
        .respond_with(grant_response("access-1", "refresh-1", 3600))
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    assert_eq!(manager.access_token().await.unwrap(), "access-1");
}

#[tokio::test]
async fn concurrent_expired_callers_share_one_refresh() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    authorize(&server, &manager, "access-old", "refresh-old", 30).await;

    let _refresh = grant_mock("refresh_token", "access-new", "refresh-new", 3600)
        .expect(1)
        .mount_as_scoped(&server)
        .await;

    let (first, second) = join!(manager.access_token(), manager.access_token());

    assert_eq!(first.unwrap(), "access-new");
    assert_eq!(second.unwrap(), "access-new");
}

#[tokio::test]
async fn reinitiating_device_flow_replaces_cached_token() {
    let server = MockServer::start().await;
    let manager = token_manager(&server);
    authorize(&server, &manager, "access-1", "refresh-1", 3600).await;

    let _device = device_code_mock().mount_as_scoped(&server).await;
    manager.start_device_flow().await.unwrap();

    let _grant = grant_mock(
        "urn:ietf:params:oauth:grant-type:device_code",
        "access-2",
        "refresh-2",
        3600,
    )
    .expect(1)
    .mount_as_scoped(&server)
    .await;

    assert_eq!(manager.access_token().await.unwrap(), "access-2");
}
