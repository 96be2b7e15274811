//! Errors for jwkset

use thiserror::Error;

/// JWK Set Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Construction Errors
    // ============================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ============================================================================
    // Resolution Errors
    // ============================================================================
    #[error("No key found with kid '{kid}'")]
    KeyNotFound { kid: String },

    #[error("Multiple keys found with kid '{kid}' ({count} matches)")]
    MultipleKeysFound { kid: String, count: usize },

    #[error("Key ID (kid) required: JWKS contains {key_count} keys")]
    KeyIdRequired { key_count: usize },

    #[error("JWK set contains no keys")]
    EmptyKeySet,
}

/// Result type alias for jwkset operations
pub type Result<T> = std::result::Result<T, Error>;
