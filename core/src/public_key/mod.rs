//! public_key/mod.rs
//! Encoding and strict validation of public keys carried as `GenericPublicKey`.
//!
//! Design notes:
//! - Integers travel as two's-complement big-endian byte strings.
//! - Every bound and validity check runs before a key object is constructed.
//! - Any rejected encoding is reported as `MalformedMessage("invalid key encoding")`
//!   with no detail about which check failed.

pub mod ec;
pub mod rsa2048;
pub mod dh;

use num_bigint::{BigInt, BigUint, Sign};

use crate::crypto::VerificationKey;
use crate::types::{Result, SecureMessageError};
use crate::wire::{GenericPublicKey, PublicKeyType};

pub use dh::{generate_dh_key_pair, DhKeyPair, DhPrivateKey, DhPublicKey};
pub use ec::{encode_padded_ec_public_key, generate_ec_p256_key_pair, is_ec_supported};
pub use rsa2048::generate_rsa2048_key_pair;

/// A public key that can be carried in a `GenericPublicKey`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicKey {
    EcP256(p256::PublicKey),
    Rsa2048(rsa::RsaPublicKey),
    Dh2048(DhPublicKey),
}

impl PublicKey {
    pub fn key_type(&self) -> PublicKeyType {
        match self {
            PublicKey::EcP256(_) => PublicKeyType::EcP256,
            PublicKey::Rsa2048(_) => PublicKeyType::Rsa2048,
            PublicKey::Dh2048(_) => PublicKeyType::Dh2048Modp,
        }
    }
}

impl From<p256::PublicKey> for PublicKey {
    fn from(k: p256::PublicKey) -> Self {
        PublicKey::EcP256(k)
    }
}

impl From<rsa::RsaPublicKey> for PublicKey {
    fn from(k: rsa::RsaPublicKey) -> Self {
        PublicKey::Rsa2048(k)
    }
}

impl From<DhPublicKey> for PublicKey {
    fn from(k: DhPublicKey) -> Self {
        PublicKey::Dh2048(k)
    }
}

impl TryFrom<&VerificationKey> for PublicKey {
    type Error = SecureMessageError;

    fn try_from(key: &VerificationKey) -> Result<Self> {
        match key {
            VerificationKey::EcP256(k) => Ok(PublicKey::EcP256(p256::PublicKey::from(k))),
            VerificationKey::Rsa2048(k) => Ok(PublicKey::Rsa2048(k.clone())),
            VerificationKey::Secret(_) => Err(SecureMessageError::unsupported(
                "secret keys have no public encoding",
            )),
        }
    }
}

impl TryFrom<PublicKey> for VerificationKey {
    type Error = SecureMessageError;

    fn try_from(key: PublicKey) -> Result<Self> {
        match key {
            PublicKey::EcP256(k) => Ok(VerificationKey::from(k)),
            PublicKey::Rsa2048(k) => Ok(VerificationKey::from(k)),
            PublicKey::Dh2048(_) => Err(SecureMessageError::unsupported(
                "DH keys cannot verify signatures",
            )),
        }
    }
}

/// Encode a public key for the wire.
pub fn encode_public_key(key: &PublicKey) -> Result<GenericPublicKey> {
    let mut out = GenericPublicKey {
        r#type: Some(key.key_type() as i32),
        ..Default::default()
    };
    match key {
        PublicKey::EcP256(k) => out.ec_p256_public_key = Some(ec::encode_ec_public_key(k)?),
        PublicKey::Rsa2048(k) => out.rsa2048_public_key = Some(rsa2048::encode_rsa_public_key(k)?),
        PublicKey::Dh2048(k) => out.dh2048_public_key = Some(dh::encode_dh_public_key(k)),
    }
    Ok(out)
}

/// Validate and decode an untrusted `GenericPublicKey`.
pub fn parse_public_key(wire: &GenericPublicKey) -> Result<PublicKey> {
    let key_type = wire
        .r#type
        .and_then(|t| PublicKeyType::try_from(t).ok())
        .ok_or_else(|| SecureMessageError::malformed("unknown public key type"))?;

    let missing = || SecureMessageError::malformed(format!("{key_type:?} key payload missing"));

    match key_type {
        PublicKeyType::EcP256 => {
            let payload = wire.ec_p256_public_key.as_ref().ok_or_else(missing)?;
            ec::parse_ec_public_key(payload).map(PublicKey::EcP256)
        }
        PublicKeyType::Rsa2048 => {
            let payload = wire.rsa2048_public_key.as_ref().ok_or_else(missing)?;
            rsa2048::parse_rsa_public_key(payload).map(PublicKey::Rsa2048)
        }
        PublicKeyType::Dh2048Modp => {
            let payload = wire.dh2048_public_key.as_ref().ok_or_else(missing)?;
            dh::parse_dh_public_key(payload).map(PublicKey::Dh2048)
        }
    }
}

// ---------------------------------------------------------------------------
// Integer helpers shared by the key kinds
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn invalid_encoding() -> SecureMessageError {
    SecureMessageError::malformed("invalid key encoding")
}

/// Minimal two's-complement encoding of a non-negative integer.
pub(crate) fn to_twos_complement(value: &BigUint) -> Vec<u8> {
    BigInt::from_biguint(Sign::Plus, value.clone()).to_signed_bytes_be()
}

/// Decode a non-negative two's-complement integer of 1..=`max_len` bytes.
pub(crate) fn decode_unsigned(bytes: &[u8], max_len: usize) -> Result<BigUint> {
    if bytes.is_empty() || bytes.len() > max_len {
        return Err(invalid_encoding());
    }
    BigInt::from_signed_bytes_be(bytes)
        .to_biguint()
        .ok_or_else(invalid_encoding)
}

/// Left-pad with zero bytes up to `len`. Longer input is returned unchanged.
pub(crate) fn left_pad(bytes: &[u8], len: usize) -> Vec<u8> {
    if bytes.len() >= len {
        return bytes.to_vec();
    }
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(bytes);
    out
}
