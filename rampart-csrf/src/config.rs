/// CSRF manager configuration
#[derive(Debug, Clone)]
pub struct CsrfConfig {
    /// Scoped-mapping key holding the token value
    pub value_key: String,

    /// Scoped-mapping key holding the expiry epoch
    pub expiry_key: String,

    /// TTL in seconds used by [`issue`](crate::CsrfTokenManager::issue);
    /// 0 means tokens never expire
    pub default_ttl: i64,
}

impl CsrfConfig {
    /// Set the session key for the token value
    pub fn with_value_key(mut self, key: impl Into<String>) -> Self {
        self.value_key = key.into();
        self
    }

    /// Set the session key for the expiry epoch
    pub fn with_expiry_key(mut self, key: impl Into<String>) -> Self {
        self.expiry_key = key.into();
        self
    }

    /// Set the default TTL in seconds (0 = never expires)
    pub fn with_default_ttl(mut self, ttl_seconds: i64) -> Self {
        self.default_ttl = ttl_seconds;
        self
    }
}

impl Default for CsrfConfig {
    fn default() -> Self {
        Self {
            value_key: "csrf_token".to_string(),
            expiry_key: "csrf_token_expire".to_string(),
            default_ttl: 0,
        }
    }
}
