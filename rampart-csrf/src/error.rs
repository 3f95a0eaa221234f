use rampart_core::RandomError;
use thiserror::Error;

/// Result type for CSRF operations.
pub type CsrfResult<T> = Result<T, CsrfError>;

/// CSRF-specific errors.
#[derive(Debug, Error)]
pub enum CsrfError {
    /// Token generation failed because the CSPRNG was unavailable
    #[error("Failed to generate a CSRF token: {0}")]
    RandomSource(#[from] RandomError),
}
