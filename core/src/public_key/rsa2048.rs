//! public_key/rsa2048.rs
//! RSA-2048 public keys on the wire.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use rand::{CryptoRng, RngCore};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::constants::key_bounds::{MAX_MODULUS_LEN, RSA_DEFAULT_EXPONENT, RSA_MODULUS_BITS};
use crate::public_key::{decode_unsigned, invalid_encoding, to_twos_complement};
use crate::types::{Result, SecureMessageError};
use crate::wire::SimpleRsaPublicKey;

/// Generate a fresh RSA-2048 key pair (e = 65537).
pub fn generate_rsa2048_key_pair<R: RngCore + CryptoRng>(rng: &mut R) -> Result<RsaPrivateKey> {
    RsaPrivateKey::new(rng, RSA_MODULUS_BITS as usize)
        .map_err(|e| SecureMessageError::invalid_key(format!("RSA key generation failed: {e}")))
}

/// Encode modulus and exponent. The exponent is omitted when it is the
/// protocol default.
pub fn encode_rsa_public_key(key: &RsaPublicKey) -> Result<SimpleRsaPublicKey> {
    let n = BigUint::from_bytes_be(&key.n().to_bytes_be());
    if n.bits() != RSA_MODULUS_BITS {
        return Err(SecureMessageError::invalid_key(format!(
            "RSA modulus must be {RSA_MODULUS_BITS} bits, got {}",
            n.bits()
        )));
    }
    let e = BigUint::from_bytes_be(&key.e().to_bytes_be())
        .to_i32()
        .ok_or_else(|| SecureMessageError::invalid_key("RSA exponent does not fit in int32"))?;

    Ok(SimpleRsaPublicKey {
        n: to_twos_complement(&n),
        e: (e != RSA_DEFAULT_EXPONENT).then_some(e),
    })
}

/// Validate and decode an untrusted RSA-2048 public key.
pub fn parse_rsa_public_key(encoded: &SimpleRsaPublicKey) -> Result<RsaPublicKey> {
    let n = decode_unsigned(&encoded.n, MAX_MODULUS_LEN)?;
    if n.is_zero() || n.bits() != RSA_MODULUS_BITS {
        return Err(invalid_encoding());
    }

    let e = encoded.e.unwrap_or(RSA_DEFAULT_EXPONENT);
    if e <= 0 {
        return Err(invalid_encoding());
    }

    RsaPublicKey::new(
        rsa::BigUint::from_bytes_be(&n.to_bytes_be()),
        rsa::BigUint::from(e as u32),
    )
    .map_err(|_| invalid_encoding())
}
