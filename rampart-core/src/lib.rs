//! # Rampart Core
//!
//! Shared building blocks for the Rampart security crates.
//!
//! ## Features
//!
//! - ✅ **Secure Randomness** - `RandomSource` capability over the OS CSPRNG
//! - ✅ **Hard Failure** - an unavailable CSPRNG is an error, never a fallback
//! - ✅ **Timing-safe Comparison** - constant-time equality for secret values
//! - ✅ **Substitutable** - inject a scripted source in tests
//!
//! ## Quick Start
//!
//! ```rust
//! use rampart_core::{OsRandom, RandomSource};
//!
//! let random = OsRandom;
//! let mut buf = [0u8; 20];
//! random.fill(&mut buf).unwrap();
//! ```

pub mod error;
pub mod random;
pub mod timing;

pub use error::RandomError;
pub use random::{OsRandom, RandomSource};
pub use timing::constant_time_eq;
