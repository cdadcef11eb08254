//! Storage layer for the account record, its signing key and certificates.
//!
//! # Directory layout
//!
//! By convention the default root is `~/.config/acme/` (or `$ACME_CONFIG`):
//!
//! ```text
//! ~/.config/acme/          (0700)
//! ├── account.json         (0600)  account record
//! └── account.key          (0600)  PEM private key
//! ```
//!
//! # Modules
//!
//! - [`account_file`] — `account.json` read/write, key attachment.
//! - [`key_store`] — key load, write and generate-if-missing; certificate load.
//! - [`secure_fs`] — owner-only directory and file creation.

pub mod account_file;
pub mod key_store;
pub mod secure_fs;

use std::io;
use std::path::Path;

use crate::error::{AccountError, Result};

pub use account_file::{read_account, write_account, Account, AccountRecord};
pub use key_store::{load_certificate, load_key, resolve_key, write_key};

/// Read a whole file, reporting a missing one as `AccountError::NotFound`.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => AccountError::NotFound(path.to_path_buf()),
        _ => AccountError::Io(e),
    })
}
