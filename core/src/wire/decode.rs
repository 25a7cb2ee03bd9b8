//! wire/decode.rs
//!
//! Deserialization helpers.
//!
//! Design notes:
//! - Decoding only checks *shape*; nothing here is trusted until a signature
//!   has been verified.
//! - Failures surface as `MalformedMessage`. The parser remaps them to
//!   `VerificationFailed` once it is past the signature check.

use prost::Message;

use crate::types::{Result, SecureMessageError};
use crate::wire::types::{EncScheme, GenericPublicKey, Header, HeaderAndBody, SecureMessage, SigScheme};

/// Decode the outer envelope.
#[inline]
pub fn decode_secure_message(buf: &[u8]) -> Result<SecureMessage> {
    Ok(SecureMessage::decode(buf)?)
}

/// Decode the signed `HeaderAndBody` container.
#[inline]
pub fn decode_header_and_body(buf: &[u8]) -> Result<HeaderAndBody> {
    Ok(HeaderAndBody::decode(buf)?)
}

/// Decode a header and check its structural invariants:
/// - the signature scheme is present and recognized;
/// - the encryption scheme, if present, is recognized.
pub fn decode_header(buf: &[u8]) -> Result<Header> {
    let header = Header::decode(buf)?;

    if header.declared_sig_scheme().is_none() {
        return Err(match header.signature_scheme {
            None => SecureMessageError::malformed("header is missing the signature scheme"),
            Some(raw) => SecureMessageError::malformed(format!("unknown signature scheme: {}", raw)),
        });
    }
    if header.declared_enc_scheme().is_none() {
        return Err(SecureMessageError::malformed(format!(
            "unknown encryption scheme: {}",
            header.encryption_scheme.unwrap_or_default()
        )));
    }

    Ok(header)
}

impl Header {
    /// Declared signature scheme, or `None` if absent or unrecognized.
    pub fn declared_sig_scheme(&self) -> Option<SigScheme> {
        self.signature_scheme.and_then(|raw| SigScheme::try_from(raw).ok())
    }

    /// Declared encryption scheme. An absent field means `EncScheme::None`;
    /// an unrecognized value yields `None`.
    pub fn declared_enc_scheme(&self) -> Option<EncScheme> {
        match self.encryption_scheme {
            None => Some(EncScheme::None),
            Some(raw) => EncScheme::try_from(raw).ok(),
        }
    }

    /// Declared associated data length; absent counts as zero.
    pub fn declared_associated_data_len(&self) -> u32 {
        self.associated_data_length.unwrap_or(0)
    }
}

impl SecureMessage {
    /// Parse an envelope from wire bytes.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        decode_secure_message(buf)
    }
}

impl GenericPublicKey {
    /// Parse a public key container from wire bytes. Only the container is
    /// decoded; use `public_key::parse_public_key` to validate the key itself.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        Ok(GenericPublicKey::decode(buf)?)
    }
}
