use chrono::{DateTime, Duration, Utc};

/// One minute shaved off the reported lifetime so a token is retired before
/// the issuer actually invalidates it.
const EXPIRY_SAFETY_MARGIN_SECS: i64 = 60;

/// Access/refresh token pair minted by the token endpoint.
///
/// Replaced wholesale on every exchange; never partially mutated.
#[derive(Debug, Clone)]
pub struct TokenCache {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenCache {
    /// Build a cache entry from a token-endpoint grant, stamping the expiry
    /// instant as `now + expires_in - 60s`.
    pub fn from_grant(access_token: String, refresh_token: String, expires_in: u64) -> Self {
        let expires_at = Utc::now() + Duration::seconds(expires_in as i64)
            - Duration::seconds(EXPIRY_SAFETY_MARGIN_SECS);
        Self {
            access_token,
            refresh_token,
            expires_at,
        }
    }

    /// Whether the current time has reached the precomputed expiry instant.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_is_lifetime_minus_safety_margin() {
        let before = Utc::now();
        let cache = TokenCache::from_grant("access".into(), "refresh".into(), 3600);
        let after = Utc::now();

        assert!(cache.expires_at >= before + Duration::seconds(3600 - 60));
        assert!(cache.expires_at <= after + Duration::seconds(3600 - 60));
        assert!(!cache.is_expired());
    }

    #[test]
    fn lifetime_within_safety_margin_is_already_expired() {
        let cache = TokenCache::from_grant("access".into(), "refresh".into(), 30);
        assert!(cache.is_expired());
    }

    #[test]
    fn zero_lifetime_is_expired() {
        let cache = TokenCache::from_grant("access".into(), "refresh".into(), 0);
        assert!(cache.is_expired());
    }
}
