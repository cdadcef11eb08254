//! Configuration directory resolution.
//!
//! The directory is resolved once at startup and then passed explicitly to
//! every store operation. Resolution order:
//!
//! 1. an explicit override (`ConfigDir::new`, e.g. from a `-c` flag),
//! 2. the `ACME_CONFIG` environment variable,
//! 3. `~/.config/acme`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{AccountError, Result};
use crate::storage::secure_fs;

/// Environment variable overriding the default configuration directory.
pub const CONFIG_ENV_VAR: &str = "ACME_CONFIG";
/// Account record file name inside the configuration directory.
pub const ACCOUNT_FILE: &str = "account.json";
/// Account private key file name inside the configuration directory.
pub const ACCOUNT_KEY_FILE: &str = "account.key";

/// Directory holding the account record and its key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigDir {
    path: PathBuf,
}

impl ConfigDir {
    /// Use `path` as the configuration directory.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve from the process environment and the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns `AccountError::ConfigDirUnresolved` if `ACME_CONFIG` is unset
    /// and the home directory cannot be determined.
    pub fn resolve() -> Result<Self> {
        Self::from_sources(std::env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
    }

    /// Resolve from an environment value and a home directory.
    ///
    /// A non-empty environment value wins; otherwise the directory is
    /// `<home>/.config/acme`.
    pub fn from_sources(env_value: Option<OsString>, home: Option<PathBuf>) -> Result<Self> {
        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            return Ok(Self::new(value));
        }
        home.map(|h| Self::new(h.join(".config").join("acme")))
            .ok_or(AccountError::ConfigDirUnresolved)
    }

    /// The directory itself.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `<dir>/account.json`
    pub fn account_path(&self) -> PathBuf {
        self.path.join(ACCOUNT_FILE)
    }

    /// `<dir>/account.key`
    pub fn key_path(&self) -> PathBuf {
        self.path.join(ACCOUNT_KEY_FILE)
    }

    /// Create the directory (and parents) with mode 0700 if it is missing.
    pub fn ensure(&self) -> Result<()> {
        secure_fs::create_private_dir(&self.path)?;
        Ok(())
    }
}

/// Path to `filename` in the same directory as `existing`.
pub fn same_dir(existing: &Path, filename: &str) -> PathBuf {
    existing
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(filename)
}
