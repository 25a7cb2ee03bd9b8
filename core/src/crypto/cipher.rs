//! crypto/cipher.rs
//! Body encryption for signcrypted messages.
//!
//! Design notes:
//! - AES-256-CBC with PKCS#7 padding under an HKDF subkey bound to `"ENC:<id>"`.
//! - `EncType::None` is never passed to a cipher and is rejected here.
//! - Decryption failures are reported without detail; the parser collapses
//!   them into `VerificationFailed` regardless.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::crypto::kdf::encryption_subkey;
use crate::crypto::types::{EncType, SecretKey};
use crate::types::{Result, SecureMessageError};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

/// Fresh random IV sized to the cipher's block.
pub fn generate_iv<R: RngCore + CryptoRng>(enc_type: EncType, rng: &mut R) -> Result<Vec<u8>> {
    match enc_type {
        EncType::None => Err(not_an_encryption_scheme()),
        EncType::Aes256Cbc => {
            let mut iv = vec![0u8; enc_type.iv_len()];
            rng.fill_bytes(&mut iv);
            Ok(iv)
        }
    }
}

/// Encrypt `plaintext` under a subkey derived from `key`.
pub fn encrypt(key: &SecretKey, enc_type: EncType, iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    match enc_type {
        EncType::None => Err(not_an_encryption_scheme()),
        EncType::Aes256Cbc => {
            check_iv(enc_type, iv)?;
            let mut subkey = encryption_subkey(key, enc_type)?;
            let cipher = Aes256CbcEnc::new_from_slices(&subkey, iv)
                .map_err(|_| SecureMessageError::invalid_key("AES-256-CBC rejected key or IV"));
            subkey.zeroize();
            Ok(cipher?.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
        }
    }
}

/// Decrypt `ciphertext` under a subkey derived from `key`.
///
/// Bad padding and bad block alignment both yield `VerificationFailed`.
pub fn decrypt(key: &SecretKey, enc_type: EncType, iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    match enc_type {
        EncType::None => Err(not_an_encryption_scheme()),
        EncType::Aes256Cbc => {
            check_iv(enc_type, iv)?;
            let mut subkey = encryption_subkey(key, enc_type)?;
            let cipher = Aes256CbcDec::new_from_slices(&subkey, iv)
                .map_err(|_| SecureMessageError::invalid_key("AES-256-CBC rejected key or IV"));
            subkey.zeroize();
            cipher?
                .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
                .map_err(|_| SecureMessageError::VerificationFailed)
        }
    }
}

#[inline]
fn check_iv(enc_type: EncType, iv: &[u8]) -> Result<()> {
    if iv.len() != enc_type.iv_len() {
        return Err(SecureMessageError::malformed(format!(
            "IV must be {} bytes, got {}",
            enc_type.iv_len(),
            iv.len()
        )));
    }
    Ok(())
}

#[inline]
fn not_an_encryption_scheme() -> SecureMessageError {
    SecureMessageError::unsupported(format!("{} is not an encryption scheme", EncType::None))
}
