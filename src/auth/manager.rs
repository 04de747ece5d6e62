use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use crate::config::AuthConfig;

use super::device_code::DeviceCodeSession;
use super::error::AuthError;
use super::token::TokenCache;

const DEVICE_CODE_GRANT: &str = "urn:ietf:params:oauth:grant-type:device_code";
const REFRESH_TOKEN_GRANT: &str = "refresh_token";

/// Authoritative auth state. Exactly one variant holds at a time; a cached
/// token and a pending device code never coexist.
#[derive(Debug)]
enum AuthState {
    Empty,
    AwaitingApproval(DeviceCodeSession),
    Cached(TokenCache),
}

/// Owns the token lifecycle: device-flow initiation, code/refresh exchanges,
/// and the cached pair. One long-lived instance is shared by reference with
/// every outbound caller; the mutex is held across the decide-then-exchange
/// critical section so concurrent callers cannot race a refresh.
pub struct TokenManager {
    http: reqwest::Client,
    config: AuthConfig,
    state: Mutex<AuthState>,
}

impl TokenManager {
    pub fn new(config: AuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            state: Mutex::new(AuthState::Empty),
        }
    }

    /// Request a device code from the identity provider and hold it pending
    /// browser approval. Replaces whatever state was current, including a
    /// cached token: initiating the flow is an explicit re-login.
    pub async fn start_device_flow(&self) -> Result<DeviceCodeSession, AuthError> {
        let response = self
            .http
            .post(format!("{}/oauth/device/code", self.config.issuer_url))
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("scope", "offline_access"),
                ("audience", self.config.audience.as_str()),
            ])
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, "device code request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Upstream {
                context: "Device code request",
                status: status.as_u16(),
                body,
            });
        }

        let session: DeviceCodeSession = response.json().await?;
        debug!(user_code = %session.user_code, "device authorization flow initiated");
        *self.state.lock().await = AuthState::AwaitingApproval(session.clone());
        Ok(session)
    }

    /// Return a currently-valid access token, minting or refreshing as the
    /// state requires.
    ///
    /// - `Empty`: fails with [`AuthError::NoTokenCache`]; the caller must
    ///   run [`Self::start_device_flow`] and complete browser approval first.
    /// - `AwaitingApproval`: one device-code exchange attempt per call; the
    ///   pending code is kept on failure so a later call can try again.
    /// - `Cached`, unexpired: returns the cached token with no network call.
    /// - `Cached`, expired: one refresh attempt; any failure clears the
    ///   cache and the call fails with the no-token-cache condition.
    pub async fn access_token(&self) -> Result<String, AuthError> {
        let mut state = self.state.lock().await;
        match &mut *state {
            AuthState::Empty => Err(AuthError::NoTokenCache),
            AuthState::AwaitingApproval(session) => {
                let device_code = session.device_code.clone();
                let cache = self.exchange_device_code(&device_code).await?;
                let access_token = cache.access_token.clone();
                *state = AuthState::Cached(cache);
                Ok(access_token)
            }
            AuthState::Cached(cache) => {
                if !cache.is_expired() {
                    return Ok(cache.access_token.clone());
                }
                let refresh_token = cache.refresh_token.clone();
                match self.refresh(&refresh_token).await {
                    Ok(cache) => {
                        let access_token = cache.access_token.clone();
                        *state = AuthState::Cached(cache);
                        Ok(access_token)
                    }
                    Err(err) => {
                        warn!(error = %err, "token refresh failed; discarding token cache");
                        *state = AuthState::Empty;
                        Err(AuthError::NoTokenCache)
                    }
                }
            }
        }
    }

    async fn exchange_device_code(&self, device_code: &str) -> Result<TokenCache, AuthError> {
        self.token_grant(
            "Device code exchange",
            &TokenGrantRequest {
                grant_type: DEVICE_CODE_GRANT,
                client_id: &self.config.client_id,
                device_code: Some(device_code),
                refresh_token: None,
            },
        )
        .await
    }

    async fn refresh(&self, refresh_token: &str) -> Result<TokenCache, AuthError> {
        self.token_grant(
            "Token refresh",
            &TokenGrantRequest {
                grant_type: REFRESH_TOKEN_GRANT,
                client_id: &self.config.client_id,
                device_code: None,
                refresh_token: Some(refresh_token),
            },
        )
        .await
    }

    async fn token_grant(
        &self,
        context: &'static str,
        request: &TokenGrantRequest<'_>,
    ) -> Result<TokenCache, AuthError> {
        let response = self
            .http
            .post(format!("{}/oauth/token", self.config.issuer_url))
            .json(request)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, grant_type = request.grant_type, "token request failed");
                err
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::Upstream {
                context,
                status: status.as_u16(),
                body,
            });
        }

        let grant: TokenGrantResponse = response.json().await?;
        Ok(TokenCache::from_grant(
            grant.access_token,
            grant.refresh_token,
            grant.expires_in,
        ))
    }
}

#[derive(Serialize)]
struct TokenGrantRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    refresh_token: Option<&'a str>,
}

#[derive(Deserialize)]
struct TokenGrantResponse {
    access_token: String,
    refresh_token: String,
    expires_in: u64,
}
