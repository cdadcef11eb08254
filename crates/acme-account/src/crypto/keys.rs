//! Account signing keys.
//!
//! RSA keys can be generated, loaded and written back. EC keys (P-256 and
//! P-384) are accepted when loading an existing key file but are never
//! produced by this crate.

use std::fmt;

use rsa::traits::PublicKeyParts;
use rsa::RsaPrivateKey;

use super::pem::{EC_PRIVATE_KEY_LABEL, RSA_PRIVATE_KEY_LABEL};
use crate::error::{AccountError, Result};

/// Modulus size of generated account keys.
pub const RSA_KEY_BITS: usize = 2048;

/// Key family selected by the label of a PEM block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyFamily {
    /// `RSA PRIVATE KEY`, PKCS#1.
    Rsa,
    /// `EC PRIVATE KEY`, SEC1.
    Ec,
    /// Any other label, kept verbatim for error reporting.
    Unsupported(String),
}

impl KeyFamily {
    /// Classify a PEM label.
    pub fn from_label(label: &str) -> Self {
        match label {
            RSA_PRIVATE_KEY_LABEL => KeyFamily::Rsa,
            EC_PRIVATE_KEY_LABEL => KeyFamily::Ec,
            other => KeyFamily::Unsupported(other.to_string()),
        }
    }
}

impl fmt::Display for KeyFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFamily::Rsa => write!(f, "RSA"),
            KeyFamily::Ec => write!(f, "EC"),
            KeyFamily::Unsupported(label) => write!(f, "unsupported ({label})"),
        }
    }
}

/// A private key used to sign requests to the certificate authority.
///
/// Once created the key is never mutated. `Debug` output names the
/// algorithm only.
#[derive(Clone, PartialEq)]
pub enum SigningKey {
    Rsa(RsaPrivateKey),
    EcP256(p256::SecretKey),
    EcP384(p384::SecretKey),
}

impl SigningKey {
    /// The family this key belongs to.
    pub fn family(&self) -> KeyFamily {
        match self {
            SigningKey::Rsa(_) => KeyFamily::Rsa,
            SigningKey::EcP256(_) | SigningKey::EcP384(_) => KeyFamily::Ec,
        }
    }

    /// Human-readable algorithm name.
    pub fn algorithm(&self) -> &'static str {
        match self {
            SigningKey::Rsa(_) => "RSA",
            SigningKey::EcP256(_) => "ECDSA P-256",
            SigningKey::EcP384(_) => "ECDSA P-384",
        }
    }

    /// Key size in bits (RSA modulus or curve order).
    pub fn bits(&self) -> usize {
        match self {
            SigningKey::Rsa(key) => key.size() * 8,
            SigningKey::EcP256(_) => 256,
            SigningKey::EcP384(_) => 384,
        }
    }

    /// The RSA key, if this is one. Only RSA keys can be written back.
    pub fn as_rsa(&self) -> Option<&RsaPrivateKey> {
        match self {
            SigningKey::Rsa(key) => Some(key),
            _ => None,
        }
    }
}

impl From<RsaPrivateKey> for SigningKey {
    fn from(key: RsaPrivateKey) -> Self {
        SigningKey::Rsa(key)
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey({}, {} bits)", self.algorithm(), self.bits())
    }
}

/// Generate a fresh 2048-bit RSA key from the thread-local CSPRNG.
pub fn generate_rsa_key() -> Result<RsaPrivateKey> {
    RsaPrivateKey::new(&mut rand::thread_rng(), RSA_KEY_BITS)
        .map_err(|e| AccountError::KeyGeneration(e.to_string()))
}
