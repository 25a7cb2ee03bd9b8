//! crypto/kdf.rs
//! HKDF-based purpose-bound subkey derivation.
//!
//! Design:
//! - HKDF-Extract(salt = SHA-256("SecureMessage"), ikm = master key) -> PRK
//! - HKDF-Expand(PRK, info = UTF-8 purpose) -> one 32-byte block
//!
//! Only a single 256-bit block is ever needed, so the expand step is exactly
//! `HMAC(PRK, info || 0x01)`.

use hkdf::Hkdf;
use sha2::Sha256;

use crate::constants::{KEY_LEN_32, SALT};
use crate::crypto::types::{EncType, SecretKey, SigType};
use crate::types::{Result, SecureMessageError};

/// Derive a 32-byte AES-256/HMAC key bound to `purpose`.
///
/// Never use a master key directly; derive one subkey per purpose so the same
/// key material can safely serve signing and encryption.
pub fn derive_aes256_key_for(master_key: &SecretKey, purpose: &str) -> Result<[u8; KEY_LEN_32]> {
    let hk = Hkdf::<Sha256>::new(Some(&SALT), master_key.as_bytes());
    let mut key = [0u8; KEY_LEN_32];
    hk.expand(purpose.as_bytes(), &mut key)
        .map_err(|_| SecureMessageError::unsupported("HKDF-SHA256 expand failed"))?;
    Ok(key)
}

/// Subkey used to MAC messages for a symmetric `sig_type`.
#[inline]
pub(crate) fn signature_subkey(master_key: &SecretKey, sig_type: SigType) -> Result<[u8; KEY_LEN_32]> {
    derive_aes256_key_for(master_key, &sig_type.purpose())
}

/// Subkey used to encrypt bodies under `enc_type`.
#[inline]
pub(crate) fn encryption_subkey(master_key: &SecretKey, enc_type: EncType) -> Result<[u8; KEY_LEN_32]> {
    derive_aes256_key_for(master_key, &enc_type.purpose())
}
