//! crypto/sign.rs
//! Signature creation and verification for every `SigType`.
//!
//! Design notes:
//! - Public-key schemes sign `SALT || data` so a key used by another protocol
//!   can never produce a valid SecureMessage signature by accident.
//! - The symmetric scheme MACs `data` directly under a purpose-bound subkey;
//!   the HKDF purpose string already provides the separation.
//! - ECDSA signatures are ASN.1 DER; RSA uses PKCS#1 v1.5 over SHA-256.

use hmac::{Hmac, Mac};
use p256::ecdsa::DerSignature;
use rand::{CryptoRng, RngCore};
use rsa::pkcs1v15::{Signature as RsaSignature, SigningKey as RsaSigningKey, VerifyingKey as RsaVerifyingKey};
use rsa::signature::{RandomizedSigner, SignatureEncoding, Verifier};
use rsa::traits::PublicKeyParts;
use sha2::Sha256;

use crate::constants::{key_bounds, SALT};
use crate::crypto::digest::constant_time_array_equals;
use crate::crypto::kdf::signature_subkey;
use crate::crypto::types::{SecretKey, SigType, SigningKey, VerificationKey};
use crate::public_key::ec::ensure_ec;
use crate::types::{Result, SecureMessageError};
use crate::utils::concat;

type HmacSha256 = Hmac<Sha256>;

/// Sign `data` under `sig_type`.
///
/// Errors:
/// - `InvalidKeyMaterial` if the key kind does not match the scheme
/// - `UnsupportedAlgorithm` if the scheme is unavailable on this platform
pub fn sign<R: RngCore + CryptoRng>(
    sig_type: SigType,
    signing_key: &SigningKey,
    rng: &mut R,
    data: &[u8],
) -> Result<Vec<u8>> {
    match (sig_type, signing_key) {
        (SigType::HmacSha256, SigningKey::Secret(master)) => hmac_sha256(master, sig_type, data),

        (SigType::EcdsaP256Sha256, SigningKey::EcP256(key)) => {
            ensure_ec()?;
            let signature: DerSignature = key
                .try_sign_with_rng(rng, &salted(data))
                .map_err(|_| SecureMessageError::invalid_key("ECDSA signing failed"))?;
            Ok(signature.to_vec())
        }

        (SigType::Rsa2048Sha256, SigningKey::Rsa2048(key)) => {
            if key.n().bits() as u64 != key_bounds::RSA_MODULUS_BITS {
                return Err(SecureMessageError::invalid_key(format!(
                    "RSA signing key must be {} bits, got {}",
                    key_bounds::RSA_MODULUS_BITS,
                    key.n().bits()
                )));
            }
            let signer = RsaSigningKey::<Sha256>::new(key.clone());
            let signature = signer
                .try_sign_with_rng(rng, &salted(data))
                .map_err(|_| SecureMessageError::invalid_key("RSA signing failed"))?;
            Ok(signature.to_vec())
        }

        (sig_type, key) => Err(SecureMessageError::invalid_key(format!(
            "{} key cannot be used for {}",
            key.kind(),
            sig_type
        ))),
    }
}

/// Check `signature` over `data` under `sig_type`.
///
/// A signature that cannot even be decoded is reported as `Ok(false)`; only
/// key/scheme mismatches are errors.
pub fn verify(
    verification_key: &VerificationKey,
    sig_type: SigType,
    signature: &[u8],
    data: &[u8],
) -> Result<bool> {
    match (sig_type, verification_key) {
        (SigType::HmacSha256, VerificationKey::Secret(master)) => {
            let expected = hmac_sha256(master, sig_type, data)?;
            Ok(constant_time_array_equals(Some(&expected), Some(signature)))
        }

        (SigType::EcdsaP256Sha256, VerificationKey::EcP256(key)) => {
            ensure_ec()?;
            let Ok(signature) = DerSignature::from_bytes(signature) else {
                return Ok(false);
            };
            Ok(key.verify(&salted(data), &signature).is_ok())
        }

        (SigType::Rsa2048Sha256, VerificationKey::Rsa2048(key)) => {
            let Ok(signature) = RsaSignature::try_from(signature) else {
                return Ok(false);
            };
            let verifier = RsaVerifyingKey::<Sha256>::new(key.clone());
            Ok(verifier.verify(&salted(data), &signature).is_ok())
        }

        (sig_type, key) => Err(SecureMessageError::invalid_key(format!(
            "{} key cannot be used for {}",
            key.kind(),
            sig_type
        ))),
    }
}

fn hmac_sha256(master: &SecretKey, sig_type: SigType, data: &[u8]) -> Result<Vec<u8>> {
    let subkey = signature_subkey(master, sig_type)?;
    let mut mac = HmacSha256::new_from_slice(&subkey)
        .map_err(|_| SecureMessageError::invalid_key("HMAC key rejected"))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

#[inline]
fn salted(data: &[u8]) -> Vec<u8> {
    concat(&SALT, Some(data))
}
