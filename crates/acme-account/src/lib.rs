//! acme-account — local identity material for an ACME client.
//!
//! Persists the account record (registration URI, contacts, terms
//! acceptance, CA endpoint) and its private signing key, decodes
//! certificates from PEM, and renders a human-readable account summary.
//! The protocol exchange with the certificate authority lives elsewhere;
//! this crate only prepares and stores what that layer needs.

pub mod config;
pub mod crypto;
pub mod error;
pub mod present;
pub mod storage;

// Re-export primary types
pub use config::ConfigDir;
pub use crypto::{KeyFamily, SigningKey};
pub use error::{AccountError, Result};
pub use present::{render_account, Acceptance, AccountSummary};
pub use storage::{
    load_certificate, load_key, read_account, resolve_key, write_account, write_key, Account,
    AccountRecord,
};
pub use x509_cert::Certificate;
