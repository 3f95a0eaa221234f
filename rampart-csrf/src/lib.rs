//! # Rampart CSRF Protection
//!
//! Session-backed Cross-Site Request Forgery tokens.
//!
//! ## Features
//!
//! - ✅ **One Token per Session** - stored under two scoped-mapping keys
//! - ✅ **Absolute Expiry** - epoch-based TTL, 0 = never expires
//! - ✅ **Self-cleaning** - expired tokens are deleted on the next read
//! - ✅ **Constant-time Verification** - no match-position timing leak
//! - ✅ **Injected Collaborators** - session scope and random source are
//!   capabilities, substitutable in tests
//!
//! ## Quick Start
//!
//! ```rust
//! use rampart_csrf::{CsrfConfig, CsrfTokenManager};
//! use rampart_core::OsRandom;
//! use rampart_session::MemorySession;
//! use std::sync::Arc;
//!
//! let session = Arc::new(MemorySession::new());
//! let csrf = CsrfTokenManager::new(session, Arc::new(OsRandom));
//!
//! // Embed the token in a rendered page
//! let token = csrf.get(3600).unwrap();
//!
//! // Later, verify the submitted value
//! assert!(csrf.verify(&token).unwrap());
//! assert!(!csrf.verify("forged").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod manager;

pub use config::CsrfConfig;
pub use error::{CsrfError, CsrfResult};
pub use manager::CsrfTokenManager;
