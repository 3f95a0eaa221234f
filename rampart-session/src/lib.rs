//! Per-session scoped storage for Rampart.
//!
//! A session exposes one flat scoped mapping plus named sub-namespaces
//! ("bags") that group related entries, such as the obfuscated-form blobs.
//! Each mapping behaves as an independent string-keyed store of JSON values.
//!
//! The [`SessionScope`] trait is the seam: managers receive it as an injected
//! capability and never assume a concrete backend. [`MemorySession`] is the
//! in-process implementation used for request-scoped sessions and in tests.
//!
//! # Examples
//!
//! ```rust
//! use rampart_session::{MemorySession, SessionScope};
//! use serde_json::Value;
//!
//! let session = MemorySession::new();
//!
//! session.set("user_id", Value::from(123));
//! assert_eq!(session.get("user_id"), Some(Value::from(123)));
//!
//! // Bags are isolated from the scoped mapping and from each other
//! session.bag_set("flash", "notice", Value::from("saved"));
//! assert_eq!(session.get("notice"), None);
//! ```

pub mod memory;
pub mod traits;

pub use memory::MemorySession;
pub use traits::SessionScope;
