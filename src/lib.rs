// Rampart - request-layer anti-abuse primitives for session-backed web applications
//
// This library bundles the Rampart crates behind one facade: CSRF token
// lifecycle management and form-field obfuscation, both operating against an
// injected per-session scope.

// Re-export building blocks
pub use rampart_core;
pub use rampart_session;

// Re-export optional crates
#[cfg(feature = "csrf")]
pub use rampart_csrf;

#[cfg(feature = "forms")]
pub use rampart_forms;

use rampart_core::{OsRandom, RandomSource};
use rampart_session::SessionScope;
use std::sync::Arc;

/// Entry point wiring both managers to one session scope.
///
/// # Examples
///
/// ```rust
/// use rampart::Security;
/// use rampart_session::MemorySession;
/// use std::sync::Arc;
///
/// let security = Security::new(Arc::new(MemorySession::new()));
///
/// let token = security.csrf().get(3600).unwrap();
/// assert!(security.csrf().verify(&token).unwrap());
///
/// let form = security.forms().get("login", &["username", "password"]).unwrap();
/// assert_eq!(form.len(), 2);
/// ```
pub struct Security {
    session: Arc<dyn SessionScope>,
    random: Arc<dyn RandomSource>,
}

impl Security {
    /// Wire the managers to a session scope, drawing randomness from the OS.
    pub fn new(session: Arc<dyn SessionScope>) -> Self {
        Self {
            session,
            random: Arc::new(OsRandom),
        }
    }

    /// Substitute the random source.
    pub fn with_random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// CSRF token manager bound to this session.
    #[cfg(feature = "csrf")]
    pub fn csrf(&self) -> rampart_csrf::CsrfTokenManager {
        rampart_csrf::CsrfTokenManager::new(self.session.clone(), self.random.clone())
    }

    /// Form obfuscator bound to this session.
    #[cfg(feature = "forms")]
    pub fn forms(&self) -> rampart_forms::FormObfuscator {
        rampart_forms::FormObfuscator::new(self.session.clone(), self.random.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_session::MemorySession;

    #[test]
    #[cfg(all(feature = "csrf", feature = "forms"))]
    fn test_managers_share_the_session() {
        let session = Arc::new(MemorySession::new());
        let security = Security::new(session.clone());

        let token = security.csrf().get(0).unwrap();
        assert_eq!(security.csrf().current(), Some(token));

        let form = security.forms().get("login", &["username"]).unwrap();
        let again = security.forms().retrieve("login", false).unwrap().unwrap();
        assert_eq!(form.key_for("username"), again.key_for("username"));
    }
}
