//! # Rampart Obfuscated Forms
//!
//! Form-field obfuscation for server-rendered pages: every field of a named
//! form is renamed to an unpredictable per-render identifier, frustrating
//! automated submission and making tampering detectable.
//!
//! ## Features
//!
//! - ✅ **Collision-free Keys** - 12-hex-character identifiers, pairwise
//!   distinct within a form, never a pure integer
//! - ✅ **Content Hash** - SHA-1 fingerprint binding fields to their keys
//! - ✅ **Session-backed** - one opaque blob per form name in a session bag
//! - ✅ **Bounded Retry** - rare key collisions retried a fixed number of times
//! - ✅ **Self-healing Storage** - corrupt blobs are logged, purged and
//!   reported as absent, never as errors
//!
//! ## Quick Start
//!
//! ```rust
//! use rampart_core::OsRandom;
//! use rampart_forms::FormObfuscator;
//! use rampart_session::MemorySession;
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let forms = FormObfuscator::new(Arc::new(MemorySession::new()), Arc::new(OsRandom));
//!
//! // Render: fetch (or create) the form and emit its obfuscated names
//! let form = forms.get("login", &["username", "password"]).unwrap();
//! let k1 = form.key_for("username").unwrap().to_string();
//!
//! // Submit: bind the raw input and read values by original field name
//! let mut form = forms.retrieve("login", false).unwrap().unwrap();
//! form.bind(HashMap::from([(k1, "bob".to_string())]));
//! assert_eq!(form.value_for("username").unwrap(), Some("bob"));
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod obfuscator;

mod validate;

pub use config::ObfuscatorConfig;
pub use error::{FormsError, FormsResult};
pub use form::ObfuscatedForm;
pub use obfuscator::FormObfuscator;
