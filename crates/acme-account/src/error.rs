//! Error types for acme-account.
//!
//! All errors are strongly typed and propagated without panicking.
//! Private key material is never included in error messages.

use std::path::PathBuf;

/// Account storage error types covering all operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The expected file does not exist. Gates the key generation fallback.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No PEM block could be found in the input.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A PEM block was found but its label is not one this crate handles.
    #[error("{0:?} is unsupported")]
    UnsupportedType(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid certificate: {0}")]
    InvalidCertificate(String),

    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    /// The account file is not well-formed JSON.
    #[error("Invalid account file: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot determine configuration directory: set ACME_CONFIG or HOME")]
    ConfigDirUnresolved,

    #[error("Account has no signing key")]
    MissingKey,
}

impl AccountError {
    /// Whether this error means the file is simply absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, AccountError::NotFound(_))
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, AccountError>;
