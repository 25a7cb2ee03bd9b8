//! crypto/types.rs
//! Algorithm registries and key containers.

use std::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::constants::{purpose, AES_BLOCK_LEN, SECRET_KEY_LEN};
use crate::wire::{EncScheme, SigScheme};

/// Signature schemes supported by SecureMessage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SigType {
    HmacSha256,
    EcdsaP256Sha256,
    Rsa2048Sha256,
}

/// Static description of a signature scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SigTypeInfo {
    pub scheme: SigScheme,
    pub algorithm: &'static str,
    pub public_key: bool,
}

impl SigType {
    pub const ALL: [SigType; 3] = [SigType::HmacSha256, SigType::EcdsaP256Sha256, SigType::Rsa2048Sha256];

    pub const fn info(self) -> SigTypeInfo {
        match self {
            SigType::HmacSha256 => SigTypeInfo {
                scheme: SigScheme::HmacSha256,
                algorithm: "HmacSHA256",
                public_key: false,
            },
            SigType::EcdsaP256Sha256 => SigTypeInfo {
                scheme: SigScheme::EcdsaP256Sha256,
                algorithm: "SHA256withECDSA",
                public_key: true,
            },
            SigType::Rsa2048Sha256 => SigTypeInfo {
                scheme: SigScheme::Rsa2048Sha256,
                algorithm: "SHA256withRSA",
                public_key: true,
            },
        }
    }

    #[inline]
    pub const fn sig_scheme(self) -> SigScheme {
        self.info().scheme
    }

    #[inline]
    pub const fn algorithm_name(self) -> &'static str {
        self.info().algorithm
    }

    #[inline]
    pub const fn is_public_key_scheme(self) -> bool {
        self.info().public_key
    }

    pub fn from_sig_scheme(scheme: SigScheme) -> SigType {
        match scheme {
            SigScheme::HmacSha256 => SigType::HmacSha256,
            SigScheme::EcdsaP256Sha256 => SigType::EcdsaP256Sha256,
            SigScheme::Rsa2048Sha256 => SigType::Rsa2048Sha256,
        }
    }

    /// HKDF purpose string for symmetric signing subkeys, e.g. `"SIG:1"`.
    pub fn purpose(self) -> String {
        format!("{}{}", purpose::SIGNATURE, self.sig_scheme() as i32)
    }
}

impl fmt::Display for SigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}

/// Encryption schemes supported by SecureMessage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EncType {
    /// Cleartext. Never passed to the cipher.
    None,
    Aes256Cbc,
}

/// Static description of an encryption scheme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EncTypeInfo {
    pub scheme: EncScheme,
    pub algorithm: &'static str,
    /// IV length in bytes; zero when the scheme does not encrypt.
    pub iv_len: usize,
}

impl EncType {
    pub const ALL: [EncType; 2] = [EncType::None, EncType::Aes256Cbc];

    pub const fn info(self) -> EncTypeInfo {
        match self {
            EncType::None => EncTypeInfo {
                scheme: EncScheme::None,
                algorithm: "InvalidDoNotUseForEncryption",
                iv_len: 0,
            },
            EncType::Aes256Cbc => EncTypeInfo {
                scheme: EncScheme::Aes256Cbc,
                algorithm: "AES/CBC/PKCS5Padding",
                iv_len: AES_BLOCK_LEN,
            },
        }
    }

    #[inline]
    pub const fn enc_scheme(self) -> EncScheme {
        self.info().scheme
    }

    #[inline]
    pub const fn algorithm_name(self) -> &'static str {
        self.info().algorithm
    }

    #[inline]
    pub const fn iv_len(self) -> usize {
        self.info().iv_len
    }

    pub fn from_enc_scheme(scheme: EncScheme) -> EncType {
        match scheme {
            EncScheme::None => EncType::None,
            EncScheme::Aes256Cbc => EncType::Aes256Cbc,
        }
    }

    /// HKDF purpose string for encryption subkeys, e.g. `"ENC:2"`.
    pub fn purpose(self) -> String {
        format!("{}{}", purpose::ENCRYPTION, self.enc_scheme() as i32)
    }
}

impl fmt::Display for EncType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.algorithm_name())
    }
}

/// Symmetric master key. Never used directly: signing and encryption subkeys
/// are derived from it with HKDF.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Vec<u8>);

impl SecretKey {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        SecretKey(bytes.to_vec())
    }

    /// Fresh random 256-bit key.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = vec![0u8; SECRET_KEY_LEN];
        rng.fill_bytes(&mut bytes);
        SecretKey(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED; {}])", self.0.len())
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        SecretKey(bytes)
    }
}

/// Key used to produce a signature.
#[derive(Clone)]
pub enum SigningKey {
    /// HMAC master key.
    Secret(SecretKey),
    EcP256(p256::ecdsa::SigningKey),
    Rsa2048(rsa::RsaPrivateKey),
}

impl SigningKey {
    /// Symmetric key material, if this is a symmetric key.
    pub fn as_secret(&self) -> Option<&SecretKey> {
        match self {
            SigningKey::Secret(k) => Some(k),
            _ => None,
        }
    }

    /// Short kind label for errors and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SigningKey::Secret(_) => "secret",
            SigningKey::EcP256(_) => "EC P-256 private",
            SigningKey::Rsa2048(_) => "RSA private",
        }
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey({})", self.kind())
    }
}

impl From<SecretKey> for SigningKey {
    fn from(k: SecretKey) -> Self {
        SigningKey::Secret(k)
    }
}

impl From<p256::ecdsa::SigningKey> for SigningKey {
    fn from(k: p256::ecdsa::SigningKey) -> Self {
        SigningKey::EcP256(k)
    }
}

impl From<rsa::RsaPrivateKey> for SigningKey {
    fn from(k: rsa::RsaPrivateKey) -> Self {
        SigningKey::Rsa2048(k)
    }
}

/// Key used to check a signature.
#[derive(Clone)]
pub enum VerificationKey {
    /// HMAC master key.
    Secret(SecretKey),
    EcP256(p256::ecdsa::VerifyingKey),
    Rsa2048(rsa::RsaPublicKey),
}

impl VerificationKey {
    pub fn as_secret(&self) -> Option<&SecretKey> {
        match self {
            VerificationKey::Secret(k) => Some(k),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            VerificationKey::Secret(_) => "secret",
            VerificationKey::EcP256(_) => "EC P-256 public",
            VerificationKey::Rsa2048(_) => "RSA public",
        }
    }
}

impl fmt::Debug for VerificationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VerificationKey({})", self.kind())
    }
}

impl From<SecretKey> for VerificationKey {
    fn from(k: SecretKey) -> Self {
        VerificationKey::Secret(k)
    }
}

impl From<p256::ecdsa::VerifyingKey> for VerificationKey {
    fn from(k: p256::ecdsa::VerifyingKey) -> Self {
        VerificationKey::EcP256(k)
    }
}

impl From<p256::PublicKey> for VerificationKey {
    fn from(k: p256::PublicKey) -> Self {
        VerificationKey::EcP256(p256::ecdsa::VerifyingKey::from(k))
    }
}

impl From<rsa::RsaPublicKey> for VerificationKey {
    fn from(k: rsa::RsaPublicKey) -> Self {
        VerificationKey::Rsa2048(k)
    }
}

impl From<&SigningKey> for VerificationKey {
    /// Public half of a signing key; symmetric keys map to themselves.
    fn from(k: &SigningKey) -> Self {
        match k {
            SigningKey::Secret(s) => VerificationKey::Secret(s.clone()),
            SigningKey::EcP256(s) => VerificationKey::EcP256(s.verifying_key().clone()),
            SigningKey::Rsa2048(s) => VerificationKey::Rsa2048(s.to_public_key()),
        }
    }
}
