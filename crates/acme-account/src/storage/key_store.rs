//! Signing key and certificate files.
//!
//! Keys are stored as a single PEM block. A missing key can be generated on
//! demand; the fresh key only counts as resolved once it is on disk.

use std::path::Path;

use rsa::RsaPrivateKey;
use x509_cert::Certificate;
use zeroize::{Zeroize, Zeroizing};

use super::read_file;
use super::secure_fs::{self, WriteMode};
use crate::crypto::{self, SigningKey};
use crate::error::{AccountError, Result};

/// Load a private key from a PEM file.
///
/// # Errors
///
/// Returns `AccountError::NotFound` if the file does not exist, any codec
/// error from [`crypto::decode_key`], or `AccountError::Io` for other read
/// failures.
pub fn load_key(path: &Path) -> Result<SigningKey> {
    let bytes = Zeroizing::new(read_file(path)?);
    crypto::decode_key(&bytes)
}

/// Write an RSA key to `path` in PEM format.
///
/// A new file is created with mode 0600; an existing file is truncated and
/// keeps its permissions.
pub fn write_key(path: &Path, key: &RsaPrivateKey) -> Result<()> {
    store_key(path, key, WriteMode::Replace)
}

/// Load the key at `path`, or generate and persist one if it is missing.
///
/// Generation only happens when the file does not exist and
/// `allow_generate` is set. Every other load failure is returned unchanged.
/// A generated key is written with create-new semantics, so a file that
/// appeared in the meantime is never clobbered.
///
/// # Errors
///
/// Returns `AccountError::NotFound` if the file is missing and generation
/// is not allowed, the load error for any other failure, or the write error
/// if the generated key cannot be persisted.
pub fn resolve_key(path: &Path, allow_generate: bool) -> Result<SigningKey> {
    match load_key(path) {
        Ok(key) => Ok(key),
        Err(AccountError::NotFound(_)) if allow_generate => {
            let key = crypto::generate_rsa_key()?;
            store_key(path, &key, WriteMode::CreateNew)?;
            log::info!("generated new account key at {}", path.display());
            Ok(SigningKey::Rsa(key))
        }
        Err(e) => Err(e),
    }
}

/// Load a single X.509 certificate from a PEM file.
///
/// # Errors
///
/// Returns `AccountError::NotFound` if the file does not exist, any codec
/// error from [`crypto::decode_certificate`], or `AccountError::Io`.
pub fn load_certificate(path: &Path) -> Result<Certificate> {
    let bytes = read_file(path)?;
    crypto::decode_certificate(&bytes)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn store_key(path: &Path, key: &RsaPrivateKey, mode: WriteMode) -> Result<()> {
    let mut encoded = crypto::encode_key(key)?;
    let written = secure_fs::write_private(path, &encoded, mode);
    encoded.zeroize();
    written.map_err(AccountError::from)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
