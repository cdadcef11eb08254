//! Account record persistence.
//!
//! The record lives in `<config>/account.json`; the signing key lives next to
//! it in `<config>/account.key` and is managed by the key store. Reading an
//! account attaches the key when one can be loaded.
//!
//! File format (JSON, field order stable across writes):
//! ```json
//! {
//!   "URI": "https://ca.example/acme/reg/42",
//!   "Contact": ["mailto:admin@example.com"],
//!   "CurrentTerms": "https://ca.example/terms/v2",
//!   "AgreedTerms": "https://ca.example/terms/v1",
//!   "ca": "https://ca.example/directory"
//! }
//! ```
//!
//! The capitalized keys match the files written by existing ACME clients;
//! lowercase spellings (`uri`, `contact`, `terms`, `agreement`) are accepted
//! on read.

use serde::{Deserialize, Serialize};

use super::{key_store, read_file, secure_fs};
use crate::config::ConfigDir;
use crate::crypto::SigningKey;
use crate::error::{AccountError, Result};

// ── Account record ────────────────────────────────────────────────────────────

/// Persisted metadata about an account at a certificate authority.
///
/// Missing fields deserialize to empty values and unknown fields are
/// ignored, so older or hand-edited files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRecord {
    /// Registration URI, empty until the account is registered.
    #[serde(rename = "URI", alias = "uri")]
    pub uri: String,
    /// Contact URIs such as `mailto:` links, in caller order.
    #[serde(rename = "Contact", alias = "contact")]
    pub contact: Vec<String>,
    /// Terms of service currently published by the CA.
    #[serde(rename = "CurrentTerms", alias = "terms")]
    pub current_terms: String,
    /// Terms of service the account agreed to, empty if none.
    #[serde(rename = "AgreedTerms", alias = "agreement")]
    pub agreed_terms: String,
    /// CA directory endpoint.
    pub ca: String,
}

/// An account record together with its signing key, if one was loaded.
#[derive(Debug, Clone)]
pub struct Account {
    pub record: AccountRecord,
    pub key: Option<SigningKey>,
}

impl Account {
    /// An account without a key.
    pub fn new(record: AccountRecord) -> Self {
        Self { record, key: None }
    }

    /// An account with `key` attached.
    pub fn with_key(record: AccountRecord, key: SigningKey) -> Self {
        Self {
            record,
            key: Some(key),
        }
    }

    pub fn has_key(&self) -> bool {
        self.key.is_some()
    }

    /// The signing key, or `AccountError::MissingKey`.
    pub fn require_key(&self) -> Result<&SigningKey> {
        self.key.as_ref().ok_or(AccountError::MissingKey)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the account record from `dir` and attach its key.
///
/// A key that cannot be loaded, whether absent or unreadable, leaves the
/// account without a key; the record alone is still useful for display.
///
/// # Errors
///
/// Returns `AccountError::NotFound` if `account.json` does not exist,
/// `AccountError::Io` for other read failures, or `AccountError::Parse` if
/// the file is not a well-formed account record.
pub fn read_account(dir: &ConfigDir) -> Result<Account> {
    let path = dir.account_path();
    let bytes = read_file(&path)?;
    let record: AccountRecord = serde_json::from_slice(&bytes)
        .map_err(|e| AccountError::Parse(format!("{}: {e}", path.display())))?;

    let key_path = dir.key_path();
    let key = match key_store::load_key(&key_path) {
        Ok(key) => Some(key),
        Err(AccountError::NotFound(_)) => {
            log::debug!("no account key at {}", key_path.display());
            None
        }
        Err(e) => {
            log::warn!("ignoring unusable account key {}: {e}", key_path.display());
            None
        }
    };

    Ok(Account { record, key })
}

/// Write `record` to `<dir>/account.json`, creating `dir` if needed.
///
/// The directory tree is created with mode 0700 and the file with mode
/// 0600; an existing file is replaced atomically. The signing key is never
/// written here.
///
/// # Errors
///
/// Returns `AccountError::SerializationError` if the record cannot be
/// serialized, or `AccountError::Io` for filesystem errors.
pub fn write_account(dir: &ConfigDir, record: &AccountRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| AccountError::SerializationError(e.to_string()))?;

    dir.ensure()?;
    secure_fs::write_private_atomic(&dir.account_path(), json.as_bytes())?;

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
