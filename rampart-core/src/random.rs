//! Secure random capability.
//!
//! Managers never reach for a generator directly; they are handed a
//! [`RandomSource`] at construction so tests can substitute a scripted
//! implementation.

use crate::error::RandomError;
use rand::RngCore;
use rand::rngs::OsRng;

/// A cryptographically secure byte generator.
///
/// Implementations must either fill the entire buffer from a secure source
/// or return an error. Downgrading to a weaker generator is not an option.
pub trait RandomSource: Send + Sync {
    /// Fill `dest` with random bytes.
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError>;
}

/// Production [`RandomSource`] backed by the operating system CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<(), RandomError> {
        OsRng
            .try_fill_bytes(dest)
            .map_err(|e| RandomError::Unavailable(e.to_string()))
    }
}
