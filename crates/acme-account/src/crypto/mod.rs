//! Key and certificate material for acme-account.
//!
//! This module provides:
//! - The `SigningKey` type (RSA, ECDSA P-256, ECDSA P-384)
//! - 2048-bit RSA key generation
//! - PEM encoding/decoding of private keys and X.509 certificates

pub mod keys;
pub mod pem;

pub use self::keys::{generate_rsa_key, KeyFamily, SigningKey, RSA_KEY_BITS};
pub use self::pem::{decode_certificate, decode_key, encode_key};
