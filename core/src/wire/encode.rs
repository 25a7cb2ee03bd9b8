//! wire/encode.rs
//!
//! Serialization helpers.
//!
//! Design notes:
//! - The header is serialized once and those exact bytes are carried inside
//!   `HeaderAndBody`; the same bytes feed the plaintext tag and the signature.
//! - Encoding is infallible: all fields are owned byte vectors or scalars.

use prost::Message;

use crate::wire::types::{GenericPublicKey, Header, HeaderAndBody, SecureMessage};

/// Serialize a header to its canonical protobuf bytes.
#[inline]
pub fn encode_header(header: &Header) -> Vec<u8> {
    header.encode_to_vec()
}

/// Serialize already-encoded header bytes together with a body.
#[inline]
pub fn encode_header_and_body(header: &[u8], body: &[u8]) -> Vec<u8> {
    HeaderAndBody {
        header: header.to_vec(),
        body: body.to_vec(),
    }
    .encode_to_vec()
}

impl SecureMessage {
    /// Wire bytes of this envelope.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}

impl GenericPublicKey {
    /// Wire bytes of this public key.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.encode_to_vec()
    }
}
