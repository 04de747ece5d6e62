//! Identity-provider and backend endpoints.

const DEFAULT_ISSUER_URL: &str = "https://auth.audiense.com";
const DEFAULT_CLIENT_ID: &str = "VnZfWVa4DxvYo8giPW2vdUelDPlqQAkC";
const DEFAULT_AUDIENCE: &str = "eXyVAChcg4ihvbYnM1ZW0SReEfIEVo5F";

const DEFAULT_API_URL: &str = "https://linkedinbackendhttp.socialbro.me";
const DEFAULT_USER_AGENT: &str = "Audiense MCP Server";

/// Auth0 tenant the device-authorization flow runs against.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub issuer_url: String,
    pub client_id: String,
    pub audience: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            issuer_url: DEFAULT_ISSUER_URL.to_string(),
            client_id: DEFAULT_CLIENT_ID.to_string(),
            audience: DEFAULT_AUDIENCE.to_string(),
        }
    }
}

impl AuthConfig {
    /// Load defaults, honoring `AUDIENSE_AUTH_URL` / `AUDIENSE_CLIENT_ID` /
    /// `AUDIENSE_AUDIENCE` overrides (and `.env` if present).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        if let Ok(url) = std::env::var("AUDIENSE_AUTH_URL") {
            config.issuer_url = url;
        }
        if let Ok(id) = std::env::var("AUDIENSE_CLIENT_ID") {
            config.client_id = id;
        }
        if let Ok(audience) = std::env::var("AUDIENSE_AUDIENCE") {
            config.audience = audience;
        }
        config
    }

    pub fn with_issuer_url(mut self, url: impl Into<String>) -> Self {
        self.issuer_url = url.into();
        self
    }
}

/// Backend analytics API origin and the client-identifier header.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ApiConfig {
    /// Load defaults, honoring an `AUDIENSE_API_URL` override.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();
        if let Ok(url) = std::env::var("AUDIENSE_API_URL") {
            config.base_url = url;
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_production() {
        let auth = AuthConfig::default();
        assert_eq!(auth.issuer_url, "https://auth.audiense.com");
        assert!(!auth.client_id.is_empty());
        assert!(!auth.audience.is_empty());

        let api = ApiConfig::default();
        assert_eq!(api.base_url, "https://linkedinbackendhttp.socialbro.me");
        assert_eq!(api.user_agent, "Audiense MCP Server");
    }

    #[test]
    fn builder_overrides_replace_urls() {
        let auth = AuthConfig::default().with_issuer_url("http://localhost:1");
        assert_eq!(auth.issuer_url, "http://localhost:1");

        let api = ApiConfig::default().with_base_url("http://localhost:2");
        assert_eq!(api.base_url, "http://localhost:2");
    }
}
