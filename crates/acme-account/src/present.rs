//! Human-readable account summary.
//!
//! ```text
//! URI:      https://ca.example/acme/reg/42
//! Key:      /home/user/.config/acme/account.key
//! Contact:  mailto:admin@example.com, mailto:ops@example.com
//! Terms:    https://ca.example/terms/v2
//! Accepted: https://ca.example/terms/v1
//! ```

use std::fmt;
use std::io::{self, Write};
use std::path::Path;

use crate::storage::AccountRecord;

/// Width of the label column, including the colon and padding.
const LABEL_WIDTH: usize = 10;

/// Whether the account agreed to the CA's current terms of service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// No terms were ever agreed to.
    No,
    /// The agreed terms are the current ones.
    Yes,
    /// The account agreed to an older version, carried verbatim.
    Outdated(String),
}

impl fmt::Display for Acceptance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Acceptance::No => f.write_str("no"),
            Acceptance::Yes => f.write_str("yes"),
            Acceptance::Outdated(agreed) => f.write_str(agreed),
        }
    }
}

impl AccountRecord {
    /// Compare the agreed terms against the current ones.
    pub fn acceptance(&self) -> Acceptance {
        if self.agreed_terms.is_empty() {
            Acceptance::No
        } else if self.agreed_terms == self.current_terms {
            Acceptance::Yes
        } else {
            Acceptance::Outdated(self.agreed_terms.clone())
        }
    }
}

/// Aligned report over an account record and the path of its key file.
///
/// The key path is shown as given; it is not derived from the record.
pub struct AccountSummary<'a> {
    record: &'a AccountRecord,
    key_path: &'a Path,
}

impl<'a> AccountSummary<'a> {
    pub fn new(record: &'a AccountRecord, key_path: &'a Path) -> Self {
        Self { record, key_path }
    }
}

impl fmt::Display for AccountSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: [(&str, String); 5] = [
            ("URI:", self.record.uri.clone()),
            ("Key:", self.key_path.display().to_string()),
            ("Contact:", self.record.contact.join(", ")),
            ("Terms:", self.record.current_terms.clone()),
            ("Accepted:", self.record.acceptance().to_string()),
        ];
        for (label, value) in rows {
            writeln!(f, "{label:<width$}{value}", width = LABEL_WIDTH)?;
        }
        Ok(())
    }
}

/// Write the account summary to `w`.
pub fn render_account<W: Write>(
    w: &mut W,
    record: &AccountRecord,
    key_path: &Path,
) -> io::Result<()> {
    write!(w, "{}", AccountSummary::new(record, key_path))
}
