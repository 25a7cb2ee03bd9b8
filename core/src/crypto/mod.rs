//! crypto/mod.rs
//! Primitive orchestration for SecureMessage ("CryptoOps").
//!
//! Everything in here selects algorithms and parameters; the primitives
//! themselves come from the RustCrypto crates.

pub mod types;
pub mod kdf;
pub mod digest;
pub mod sign;
pub mod cipher;

pub use types::*;
pub use kdf::derive_aes256_key_for;
pub use digest::*;
pub use sign::*;
pub use cipher::*;

/// Whether a signcrypted body must carry a plaintext tag.
///
/// A tag is needed whenever the signature alone does not bind the ciphertext
/// to the encryption key: for every public-key signature, and for symmetric
/// signatures whose key differs (bitwise) from the encryption key. When the
/// same symmetric key fills both roles, associated data goes into the outer
/// signature input instead.
pub fn tagged_plaintext_required(
    sig_type: SigType,
    signing_secret: Option<&SecretKey>,
    encryption_key: &SecretKey,
) -> bool {
    if sig_type.is_public_key_scheme() {
        return true;
    }
    match signing_secret {
        Some(s) => s.as_bytes() != encryption_key.as_bytes(),
        None => true,
    }
}
