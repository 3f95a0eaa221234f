//! Obfuscated form entity: key generation, storage encoding, input binding.

use crate::error::{FormsError, FormsResult};
use crate::validate;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rampart_core::RandomSource;
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use std::collections::{HashMap, HashSet};

/// Raw bytes per obfuscated key; hex-encodes to 12 characters.
const KEY_BYTES: usize = 6;

/// Obfuscated key length in hex characters.
const KEY_LEN: usize = KEY_BYTES * 2;

/// Fixed storage schema for one form.
#[derive(Serialize, Deserialize)]
struct StoredForm {
    name: String,
    hash: String,
    /// `(field, key)` pairs in construction order
    fields: Vec<(String, String)>,
}

/// A form whose field names are replaced with unpredictable per-render keys.
///
/// Holds the field↔key bijection, the SHA-1 content hash binding the two
/// together, and (after [`bind`](Self::bind)) the submitted raw input for the
/// current request. Construction is pure apart from the random draw; the
/// manager is responsible for persistence and collision retries.
///
/// # Examples
///
/// ```rust
/// use rampart_core::OsRandom;
/// use rampart_forms::ObfuscatedForm;
///
/// let form = ObfuscatedForm::generate("login", &["username", "password"], &OsRandom).unwrap();
/// let key = form.key_for("username").unwrap();
/// assert_eq!(key.len(), 12);
/// assert_eq!(form.field_for(key), Some("username"));
/// ```
#[derive(Debug, Clone)]
pub struct ObfuscatedForm {
    name: String,
    /// `(field, key)` pairs in construction order
    entries: Vec<(String, String)>,
    field_to_key: HashMap<String, String>,
    key_to_field: HashMap<String, String>,
    hash: String,
    /// Request-scoped submitted input, keyed by obfuscated key; never persisted
    input: Option<HashMap<String, String>>,
}

impl ObfuscatedForm {
    /// Generate a form with a fresh key for every field.
    ///
    /// Validation failures are reported before any randomness is drawn.
    /// A [`FormsError::KeyCollision`] is an expected-rare signal the caller
    /// retries; anything else is final.
    pub fn generate(
        name: &str,
        fields: &[&str],
        random: &dyn RandomSource,
    ) -> FormsResult<Self> {
        if !validate::is_valid_form_name(name) {
            return Err(FormsError::InvalidFormName(name.to_string()));
        }

        let mut seen = HashSet::new();
        for field in fields {
            if !validate::is_valid_field_name(field) {
                return Err(FormsError::InvalidFieldName {
                    form: name.to_string(),
                    field: field.to_string(),
                });
            }
            if !seen.insert(*field) {
                return Err(FormsError::DuplicateField {
                    form: name.to_string(),
                    field: field.to_string(),
                });
            }
        }

        // Twice the required material, halving the odds that a collision
        // forces a retry
        let mut raw = vec![0u8; fields.len() * KEY_BYTES * 2];
        random.fill(&mut raw)?;
        let hexed = hex::encode(&raw);

        let chunks: Vec<&str> = (0..fields.len() * 2)
            .map(|i| &hexed[i * KEY_LEN..(i + 1) * KEY_LEN])
            .collect();

        let distinct: HashSet<&str> = chunks.iter().copied().collect();
        if distinct.len() != chunks.len() {
            return Err(FormsError::KeyCollision);
        }

        let mut entries = Vec::with_capacity(fields.len());
        let mut field_to_key = HashMap::with_capacity(fields.len());
        let mut key_to_field = HashMap::with_capacity(fields.len());
        let mut hasher = Sha1::new();

        for (field, chunk) in fields.iter().zip(&chunks) {
            let mut key = (*chunk).to_string();
            if validate::is_all_digits(&key) {
                // All-numeric property names are mishandled by some
                // client-side scripting libraries
                key.replace_range(0..1, "a");
            }

            hasher.update(key.as_bytes());
            hasher.update(b"+");
            hasher.update(field.as_bytes());

            field_to_key.insert((*field).to_string(), key.clone());
            key_to_field.insert(key.clone(), (*field).to_string());
            entries.push(((*field).to_string(), key));
        }

        Ok(Self {
            name: name.to_string(),
            entries,
            field_to_key,
            key_to_field,
            hash: hex::encode(hasher.finalize()),
            input: None,
        })
    }

    /// Serialize `{name, hash, fields}` into an opaque storage blob.
    ///
    /// Bound input is request-scoped and never part of the blob.
    pub fn encode(&self) -> FormsResult<String> {
        let stored = StoredForm {
            name: self.name.clone(),
            hash: self.hash.clone(),
            fields: self.entries.clone(),
        };
        let json = serde_json::to_string(&stored)?;
        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Reconstruct a form from a storage blob.
    ///
    /// Rejects anything that does not decode to the expected shape or whose
    /// identifiers fail the same patterns enforced at construction, so a
    /// shared or tampered store cannot smuggle in a malformed form.
    pub fn decode(blob: &str) -> FormsResult<Self> {
        let bytes = URL_SAFE_NO_PAD
            .decode(blob)
            .map_err(|_| FormsError::CorruptPayload("not valid base64"))?;
        let json = String::from_utf8(bytes)
            .map_err(|_| FormsError::CorruptPayload("not valid UTF-8"))?;
        let stored: StoredForm = serde_json::from_str(&json)
            .map_err(|_| FormsError::CorruptPayload("unexpected payload shape"))?;

        if !validate::is_valid_form_name(&stored.name) {
            return Err(FormsError::CorruptPayload("form name fails validation"));
        }
        if !validate::is_valid_content_hash(&stored.hash) {
            return Err(FormsError::CorruptPayload("content hash fails validation"));
        }

        let mut entries = Vec::with_capacity(stored.fields.len());
        let mut field_to_key = HashMap::with_capacity(stored.fields.len());
        let mut key_to_field = HashMap::with_capacity(stored.fields.len());

        for (field, key) in stored.fields {
            if !validate::is_valid_field_name(&field) {
                return Err(FormsError::CorruptPayload("field name fails validation"));
            }
            if !validate::is_valid_key(&key) {
                return Err(FormsError::CorruptPayload("obfuscated key fails validation"));
            }
            if field_to_key.insert(field.clone(), key.clone()).is_some() {
                return Err(FormsError::CorruptPayload("duplicate field"));
            }
            if key_to_field.insert(key.clone(), field.clone()).is_some() {
                return Err(FormsError::CorruptPayload("duplicate obfuscated key"));
            }
            entries.push((field, key));
        }

        Ok(Self {
            name: stored.name,
            entries,
            field_to_key,
            key_to_field,
            hash: stored.hash,
            input: None,
        })
    }

    /// Bind the submitted raw input (keyed by obfuscated key) for this request.
    pub fn bind(&mut self, input: HashMap<String, String>) {
        self.input = Some(input);
    }

    /// Obfuscated key for an original field name.
    pub fn key_for(&self, field: &str) -> Option<&str> {
        self.field_to_key.get(field).map(String::as_str)
    }

    /// Original field name for an obfuscated key.
    pub fn field_for(&self, key: &str) -> Option<&str> {
        self.key_to_field.get(key).map(String::as_str)
    }

    /// Submitted value for an original field name.
    ///
    /// Errors if [`bind`](Self::bind) was never called on this instance;
    /// returns `None` for a field the form does not know or a key the
    /// submission did not carry.
    pub fn value_for(&self, field: &str) -> FormsResult<Option<&str>> {
        let input = self.input.as_ref().ok_or(FormsError::NoInputBound)?;
        Ok(self
            .field_to_key
            .get(field)
            .and_then(|key| input.get(key))
            .map(String::as_str))
    }

    /// Form name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// SHA-1 fingerprint over the ordered `key + "+" + field` concatenation.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(field, key)` pairs in construction order, for template rendering.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(f, k)| (f.as_str(), k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rampart_core::{OsRandom, RandomError};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays queued draws; errors once the script runs out.
    struct ScriptedRandom(Mutex<VecDeque<Vec<u8>>>);

    impl ScriptedRandom {
        fn new(draws: Vec<Vec<u8>>) -> Self {
            Self(Mutex::new(draws.into()))
        }
    }

    impl RandomSource for ScriptedRandom {
        fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
            let draw = self
                .0
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| RandomError::Unavailable("script exhausted".to_string()))?;
            assert_eq!(draw.len(), dest.len(), "scripted draw size mismatch");
            dest.copy_from_slice(&draw);
            Ok(())
        }
    }

    /// n distinct bytes counting up from 1; hex chunks never collide.
    fn counting_bytes(n: usize) -> Vec<u8> {
        (0..n).map(|i| (i + 1) as u8).collect()
    }

    #[test]
    fn test_generate_distinct_hex_keys() {
        let form =
            ObfuscatedForm::generate("signup", &["username", "email", "password"], &OsRandom)
                .unwrap();

        assert_eq!(form.len(), 3);
        let keys: Vec<&str> = form.entries().map(|(_, k)| k).collect();
        let distinct: HashSet<&str> = keys.iter().copied().collect();
        assert_eq!(distinct.len(), 3);
        for key in keys {
            assert_eq!(key.len(), 12);
            assert!(validate::is_valid_key(key));
        }
        assert_eq!(form.hash().len(), 40);
    }

    #[test]
    fn test_generate_validates_before_drawing() {
        let random = ScriptedRandom::new(vec![]);

        // An empty script would error on any draw; validation must come first
        assert!(matches!(
            ObfuscatedForm::generate("ab", &["username"], &random),
            Err(FormsError::InvalidFormName(_))
        ));
        assert!(matches!(
            ObfuscatedForm::generate("login", &["x"], &random),
            Err(FormsError::InvalidFieldName { .. })
        ));
        assert!(matches!(
            ObfuscatedForm::generate("login", &["username", "username"], &random),
            Err(FormsError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_collision_signal() {
        let random = ScriptedRandom::new(vec![vec![0u8; 12]]);
        assert!(matches!(
            ObfuscatedForm::generate("login", &["username"], &random),
            Err(FormsError::KeyCollision)
        ));
    }

    #[test]
    fn test_all_digit_key_gets_guarded() {
        // First chunk hex-encodes to "123456789012", second to "abcdef012345"
        let draw = vec![
            0x12, 0x34, 0x56, 0x78, 0x90, 0x12, // chunk used for the field
            0xab, 0xcd, 0xef, 0x01, 0x23, 0x45, // oversampled spare
        ];
        let random = ScriptedRandom::new(vec![draw]);
        let form = ObfuscatedForm::generate("login", &["username"], &random).unwrap();

        assert_eq!(form.key_for("username"), Some("a23456789012"));
        assert_eq!(form.field_for("a23456789012"), Some("username"));
    }

    #[test]
    fn test_random_failure_is_fatal() {
        let random = ScriptedRandom::new(vec![]);
        assert!(matches!(
            ObfuscatedForm::generate("login", &["username"], &random),
            Err(FormsError::RandomSource(_))
        ));
    }

    #[test]
    fn test_hash_binds_keys_to_fields_in_order() {
        let random = ScriptedRandom::new(vec![counting_bytes(24)]);
        let form = ObfuscatedForm::generate("login", &["username", "password"], &random).unwrap();

        let mut expected = Sha1::new();
        for (field, key) in form.entries() {
            expected.update(key.as_bytes());
            expected.update(b"+");
            expected.update(field.as_bytes());
        }
        assert_eq!(form.hash(), hex::encode(expected.finalize()));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let form =
            ObfuscatedForm::generate("user.profile-v2", &["first_name", "last_name"], &OsRandom)
                .unwrap();
        let decoded = ObfuscatedForm::decode(&form.encode().unwrap()).unwrap();

        assert_eq!(decoded.name(), form.name());
        assert_eq!(decoded.hash(), form.hash());
        assert_eq!(
            decoded.entries().collect::<Vec<_>>(),
            form.entries().collect::<Vec<_>>()
        );
        // The inverse map is rebuilt, not persisted
        for (field, key) in form.entries() {
            assert_eq!(decoded.field_for(key), Some(field));
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            ObfuscatedForm::decode("%%%"),
            Err(FormsError::CorruptPayload(_))
        ));
        assert!(matches!(
            ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode("not json")),
            Err(FormsError::CorruptPayload(_))
        ));
        // Well-formed JSON of the wrong shape
        assert!(matches!(
            ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode(r#"{"kind":"other"}"#)),
            Err(FormsError::CorruptPayload(_))
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_identifiers() {
        let hash = "a".repeat(40);

        let bad_name = format!(r#"{{"name":"x","hash":"{hash}","fields":[]}}"#);
        assert!(ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode(bad_name)).is_err());

        let bad_hash = r#"{"name":"login","hash":"xyz","fields":[]}"#;
        assert!(ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode(bad_hash)).is_err());

        let bad_field =
            format!(r#"{{"name":"login","hash":"{hash}","fields":[["e-mail","a23456789012"]]}}"#);
        assert!(ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode(bad_field)).is_err());

        let numeric_key =
            format!(r#"{{"name":"login","hash":"{hash}","fields":[["email","123456789012"]]}}"#);
        assert!(ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode(numeric_key)).is_err());

        let dup_key = format!(
            r#"{{"name":"login","hash":"{hash}","fields":[["email","a23456789012"],["name2","a23456789012"]]}}"#
        );
        assert!(ObfuscatedForm::decode(&URL_SAFE_NO_PAD.encode(dup_key)).is_err());
    }

    #[test]
    fn test_bind_and_value_lookup() {
        let mut form = ObfuscatedForm::generate("login", &["username", "password"], &OsRandom)
            .unwrap();

        assert!(matches!(
            form.value_for("username"),
            Err(FormsError::NoInputBound)
        ));

        let k1 = form.key_for("username").unwrap().to_string();
        let k2 = form.key_for("password").unwrap().to_string();
        form.bind(HashMap::from([
            (k1, "bob".to_string()),
            (k2, "secret".to_string()),
        ]));

        assert_eq!(form.value_for("username").unwrap(), Some("bob"));
        assert_eq!(form.value_for("password").unwrap(), Some("secret"));
        // Field never registered with this form
        assert_eq!(form.value_for("email").unwrap(), None);
    }

    #[test]
    fn test_bound_key_missing_from_submission() {
        let mut form = ObfuscatedForm::generate("login", &["username", "password"], &OsRandom)
            .unwrap();
        let k1 = form.key_for("username").unwrap().to_string();
        form.bind(HashMap::from([(k1, "bob".to_string())]));

        assert_eq!(form.value_for("username").unwrap(), Some("bob"));
        assert_eq!(form.value_for("password").unwrap(), None);
    }

    #[test]
    fn test_lookups_are_pure() {
        let form = ObfuscatedForm::generate("login", &["username"], &OsRandom).unwrap();
        assert_eq!(form.key_for("email"), None);
        assert_eq!(form.field_for("ffffffffffff"), None);
    }
}
