use thiserror::Error;

/// Errors raised by the secure random capability.
#[derive(Debug, Error)]
pub enum RandomError {
    /// The operating system CSPRNG could not satisfy the draw
    #[error("Secure random source unavailable: {0}")]
    Unavailable(String),
}
