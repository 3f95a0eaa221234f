//! CSRF token lifecycle.

use crate::config::CsrfConfig;
use crate::error::CsrfResult;
use chrono::Utc;
use rampart_core::{RandomSource, constant_time_eq};
use rampart_session::SessionScope;
use serde_json::Value;
use std::sync::Arc;

/// Token length in raw bytes; hex-encodes to 40 characters.
const TOKEN_BYTES: usize = 20;

/// Manages one CSRF token per session.
///
/// The token lives under two scoped-mapping keys: the hex value and an
/// absolute expiry epoch (0 = never expires). An expired token is logically
/// absent and both keys are removed on the next read.
///
/// # Examples
///
/// ```rust
/// use rampart_csrf::CsrfTokenManager;
/// use rampart_core::OsRandom;
/// use rampart_session::MemorySession;
/// use std::sync::Arc;
///
/// let csrf = CsrfTokenManager::new(Arc::new(MemorySession::new()), Arc::new(OsRandom));
///
/// let token = csrf.get(3600).unwrap();
/// assert!(csrf.verify(&token).unwrap());
/// ```
pub struct CsrfTokenManager {
    session: Arc<dyn SessionScope>,
    random: Arc<dyn RandomSource>,
    config: CsrfConfig,
}

impl CsrfTokenManager {
    /// Create a manager with the default configuration.
    pub fn new(session: Arc<dyn SessionScope>, random: Arc<dyn RandomSource>) -> Self {
        Self::with_config(session, random, CsrfConfig::default())
    }

    /// Create a manager with a custom configuration.
    pub fn with_config(
        session: Arc<dyn SessionScope>,
        random: Arc<dyn RandomSource>,
        config: CsrfConfig,
    ) -> Self {
        Self {
            session,
            random,
            config,
        }
    }

    /// Return the stored token, or `None` if none was ever issued or the
    /// stored one has expired.
    ///
    /// Detecting expiry deletes both underlying keys.
    pub fn current(&self) -> Option<String> {
        let token = self
            .session
            .get(&self.config.value_key)
            .and_then(|v| v.as_str().map(str::to_owned));

        let expires_at = self
            .session
            .get(&self.config.expiry_key)
            .and_then(|v| v.as_i64());

        if let Some(expires_at) = expires_at {
            if expires_at > 0 && Utc::now().timestamp() >= expires_at {
                self.session.delete(&self.config.value_key);
                self.session.delete(&self.config.expiry_key);
                tracing::debug!(key = %self.config.value_key, "expired CSRF token removed");
                return None;
            }
        }

        token
    }

    /// Generate a fresh token, overwriting any existing one.
    ///
    /// `ttl_seconds > 0` sets an absolute expiry of now + TTL; 0 means the
    /// token never expires.
    pub fn generate(&self, ttl_seconds: i64) -> CsrfResult<String> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.random.fill(&mut bytes)?;
        let token = hex::encode(bytes);

        let expires_at = if ttl_seconds > 0 {
            Utc::now().timestamp() + ttl_seconds
        } else {
            0
        };

        self.session
            .set(&self.config.value_key, Value::from(token.clone()));
        self.session
            .set(&self.config.expiry_key, Value::from(expires_at));

        Ok(token)
    }

    /// Return the current token, generating one with `ttl_seconds` if absent.
    pub fn get(&self, ttl_seconds: i64) -> CsrfResult<String> {
        match self.current() {
            Some(token) => Ok(token),
            None => self.generate(ttl_seconds),
        }
    }

    /// [`get`](Self::get) with the configured default TTL.
    pub fn issue(&self) -> CsrfResult<String> {
        self.get(self.config.default_ttl)
    }

    /// Compare `candidate` against the session token in constant time.
    ///
    /// If no token exists yet, one is generated first, so a candidate the
    /// caller never saw deterministically fails. Issue a token via
    /// [`get`](Self::get) or [`generate`](Self::generate) before verifying.
    pub fn verify(&self, candidate: &str) -> CsrfResult<bool> {
        Ok(constant_time_eq(candidate, &self.get(0)?))
    }
}
