//! PEM codec for account keys and certificates.
//!
//! Only the first PEM block of an input is consumed; any text before it is
//! skipped. Keys are written as PKCS#1 `RSA PRIVATE KEY` blocks with LF line
//! endings.

use ::pem::{EncodeConfig, LineEnding, Pem};
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::RsaPrivateKey;
use x509_cert::der::Decode;
use x509_cert::Certificate;

use super::keys::{KeyFamily, SigningKey};
use crate::error::{AccountError, Result};

// ── PEM labels ────────────────────────────────────────────────────────────────

pub const RSA_PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
pub const EC_PRIVATE_KEY_LABEL: &str = "EC PRIVATE KEY";
pub const CERTIFICATE_LABEL: &str = "CERTIFICATE";

// ── Keys ──────────────────────────────────────────────────────────────────────

/// Decode a private key from the first PEM block in `input`.
///
/// # Errors
///
/// Returns `AccountError::InvalidFormat` if there is no PEM block,
/// `AccountError::UnsupportedType` if the block label is neither
/// `RSA PRIVATE KEY` nor `EC PRIVATE KEY`, or `AccountError::InvalidKey` if
/// the block body is not a valid key of the labelled family.
pub fn decode_key(input: &[u8]) -> Result<SigningKey> {
    let block = first_block(input)?;

    match KeyFamily::from_label(block.tag()) {
        KeyFamily::Rsa => RsaPrivateKey::from_pkcs1_der(block.contents())
            .map(SigningKey::Rsa)
            .map_err(|e| AccountError::InvalidKey(format!("RSA private key: {e}"))),
        KeyFamily::Ec => decode_ec_key(block.contents()),
        KeyFamily::Unsupported(label) => Err(AccountError::UnsupportedType(label)),
    }
}

/// Encode an RSA private key as a PKCS#1 PEM block.
pub fn encode_key(key: &RsaPrivateKey) -> Result<Vec<u8>> {
    let der = key
        .to_pkcs1_der()
        .map_err(|e| AccountError::InvalidKey(format!("RSA private key: {e}")))?;

    let block = Pem::new(RSA_PRIVATE_KEY_LABEL, der.as_bytes());
    let config = EncodeConfig::new().set_line_ending(LineEnding::LF);
    Ok(::pem::encode_config(&block, config).into_bytes())
}

/// SEC1 keys carry their curve; try the curves we know in turn.
fn decode_ec_key(der: &[u8]) -> Result<SigningKey> {
    if let Ok(key) = p256::SecretKey::from_sec1_der(der) {
        return Ok(SigningKey::EcP256(key));
    }
    p384::SecretKey::from_sec1_der(der)
        .map(SigningKey::EcP384)
        .map_err(|_| AccountError::InvalidKey("EC private key: not a P-256 or P-384 key".into()))
}

// ── Certificates ──────────────────────────────────────────────────────────────

/// Decode a single X.509 certificate from the first PEM block in `input`.
///
/// Chains are not supported: blocks after the first are ignored.
///
/// # Errors
///
/// Returns `AccountError::InvalidFormat` if there is no PEM block,
/// `AccountError::UnsupportedType` if the label is not `CERTIFICATE`, or
/// `AccountError::InvalidCertificate` if the DER body does not parse.
pub fn decode_certificate(input: &[u8]) -> Result<Certificate> {
    let block = first_block(input)?;

    if block.tag() != CERTIFICATE_LABEL {
        return Err(AccountError::UnsupportedType(block.tag().to_string()));
    }

    Certificate::from_der(block.contents())
        .map_err(|e| AccountError::InvalidCertificate(e.to_string()))
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn first_block(input: &[u8]) -> Result<Pem> {
    ::pem::parse(input).map_err(|e| AccountError::InvalidFormat(format!("no PEM block found: {e}")))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
