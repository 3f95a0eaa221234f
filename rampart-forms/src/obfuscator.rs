//! Manager for stored obfuscated forms.

use crate::config::ObfuscatorConfig;
use crate::error::{FormsError, FormsResult};
use crate::form::ObfuscatedForm;
use crate::validate;
use rampart_core::RandomSource;
use rampart_session::SessionScope;
use serde_json::Value;
use std::sync::Arc;

/// Creates, retrieves and purges [`ObfuscatedForm`]s in a session bag.
///
/// One encoded blob is stored per form name. Key collisions during
/// construction are retried up to the configured cap; a blob that no longer
/// decodes is treated as storage corruption, logged, purged and reported as
/// absent rather than as an error.
///
/// # Examples
///
/// ```rust
/// use rampart_core::OsRandom;
/// use rampart_forms::FormObfuscator;
/// use rampart_session::MemorySession;
/// use std::sync::Arc;
///
/// let forms = FormObfuscator::new(Arc::new(MemorySession::new()), Arc::new(OsRandom));
///
/// let form = forms.get("login", &["username", "password"]).unwrap();
/// let again = forms.retrieve("login", false).unwrap().unwrap();
/// assert_eq!(again.key_for("username"), form.key_for("username"));
/// ```
pub struct FormObfuscator {
    session: Arc<dyn SessionScope>,
    random: Arc<dyn RandomSource>,
    config: ObfuscatorConfig,
}

impl FormObfuscator {
    /// Create an obfuscator with the default configuration.
    pub fn new(session: Arc<dyn SessionScope>, random: Arc<dyn RandomSource>) -> Self {
        Self::with_config(session, random, ObfuscatorConfig::default())
    }

    /// Create an obfuscator with a custom configuration.
    pub fn with_config(
        session: Arc<dyn SessionScope>,
        random: Arc<dyn RandomSource>,
        config: ObfuscatorConfig,
    ) -> Self {
        Self {
            session,
            random,
            config,
        }
    }

    /// Return the stored form under `name`, or create one for `fields`.
    ///
    /// A stored form built from a different field set is returned as-is;
    /// keeping the field set stable per name is the caller's contract.
    pub fn get(&self, name: &str, fields: &[&str]) -> FormsResult<ObfuscatedForm> {
        match self.retrieve(name, false)? {
            Some(form) => Ok(form),
            None => self.obfuscate(name, fields),
        }
    }

    /// Generate a form for `fields`, persist it under `name` (overwriting any
    /// prior entry) and return it.
    ///
    /// Key collisions are retried up to the configured cap, then surfaced as
    /// [`FormsError::RetriesExhausted`].
    pub fn obfuscate(&self, name: &str, fields: &[&str]) -> FormsResult<ObfuscatedForm> {
        let mut attempt = 1;
        let form = loop {
            match ObfuscatedForm::generate(name, fields, self.random.as_ref()) {
                Ok(form) => break form,
                Err(FormsError::KeyCollision) if attempt < self.config.max_attempts => {
                    tracing::debug!(form = name, attempt, "obfuscated key collision, retrying");
                    attempt += 1;
                }
                Err(FormsError::KeyCollision) => {
                    return Err(FormsError::RetriesExhausted(self.config.max_attempts));
                }
                Err(e) => return Err(e),
            }
        };

        let blob = form.encode()?;
        self.session
            .bag_set(&self.config.bag, form.name(), Value::from(blob));

        Ok(form)
    }

    /// Return the stored form under `name`, if any.
    ///
    /// An entry that no longer decodes is logged, purged and reported as
    /// absent; the corruption never propagates to the caller. With `purge`
    /// set, a successfully decoded entry is removed after being returned.
    pub fn retrieve(&self, name: &str, purge: bool) -> FormsResult<Option<ObfuscatedForm>> {
        if !validate::is_valid_form_name(name) {
            return Err(FormsError::InvalidFormName(name.to_string()));
        }

        let Some(value) = self.session.bag_get(&self.config.bag, name) else {
            return Ok(None);
        };

        let decoded = value
            .as_str()
            .ok_or(FormsError::CorruptPayload("entry is not a string"))
            .and_then(ObfuscatedForm::decode);

        match decoded {
            Ok(form) => {
                if purge {
                    self.session.bag_delete(&self.config.bag, name);
                }
                Ok(Some(form))
            }
            Err(e) => {
                tracing::warn!(form = name, error = %e, "discarding corrupt obfuscated form");
                self.session.bag_delete(&self.config.bag, name);
                Ok(None)
            }
        }
    }

    /// Delete the stored form under `name`.
    pub fn purge(&self, name: &str) {
        self.session.bag_delete(&self.config.bag, name);
    }

    /// Delete every stored form.
    pub fn flush(&self) {
        self.session.bag_clear(&self.config.bag);
    }
}
