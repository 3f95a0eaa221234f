use rampart_core::RandomError;
use thiserror::Error;

/// Result type for form obfuscation operations.
pub type FormsResult<T> = Result<T, FormsError>;

/// Form obfuscation errors.
#[derive(Debug, Error)]
pub enum FormsError {
    /// Form name fails the identifier pattern
    #[error("Invalid form name {0:?}")]
    InvalidFormName(String),

    /// A field name fails the identifier pattern
    #[error("Form {form:?} contains an invalid field name {field:?}")]
    InvalidFieldName { form: String, field: String },

    /// The same field was supplied more than once
    #[error("Form {form:?} repeats field {field:?}")]
    DuplicateField { form: String, field: String },

    /// The CSPRNG was unavailable
    #[error("Failed to get random bytes from a cryptographically secure source: {0}")]
    RandomSource(#[from] RandomError),

    /// Two generated key chunks collided; expected-rare, retried by the manager
    #[error("Collision of obfuscated keys detected")]
    KeyCollision,

    /// Key collisions persisted past the retry cap
    #[error("Obfuscated key collisions persisted after {0} attempts")]
    RetriesExhausted(u32),

    /// A stored blob did not decode to a well-formed form
    #[error("Stored form is corrupt: {0}")]
    CorruptPayload(&'static str),

    /// Encoding the form for storage failed
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A value lookup was attempted before `bind`
    #[error("No input has been bound to this form")]
    NoInputBound,
}
