//! Error types for the Chaum-Pedersen protocol.

/// Main error types for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A modulus was zero. All protocol moduli must be positive.
    #[error("Invalid modulus: must be positive")]
    InvalidModulus,

    /// Invalid group parameters were provided.
    #[error("Invalid group parameters: {0}")]
    InvalidParams(String),

    /// A scalar value is invalid or out of range.
    #[error("Invalid scalar: {0}")]
    InvalidScalar(String),
}
