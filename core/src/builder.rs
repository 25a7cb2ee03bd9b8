//! builder.rs
//! Construction of signed and signcrypted messages.
//!
//! Design notes:
//! - The builder is per-message configuration consumed by a `build_*` call.
//! - The header is serialized exactly once; those bytes feed the tag, the
//!   `HeaderAndBody` container and (through it) the signature.
//! - Associated data is never sent. It is folded into the signature input, or
//!   into the plaintext tag when a tag is required.

use std::fmt;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::crypto::{self, EncType, SecretKey, SigType, SigningKey};
use crate::types::{Result, SecureMessageError};
use crate::utils::{concat, fmt_key_id};
use crate::wire::{encode_header, encode_header_and_body, Header, SecureMessage};

/// Configuration for the next message.
#[derive(Clone)]
pub struct SecureMessageBuilder<R = OsRng> {
    public_metadata: Option<Vec<u8>>,
    verification_key_id: Option<Vec<u8>>,
    decryption_key_id: Option<Vec<u8>>,
    associated_data: Option<Vec<u8>>,
    rng: R,
}

impl SecureMessageBuilder<OsRng> {
    pub fn new() -> Self {
        Self::with_rng(OsRng)
    }
}

impl Default for SecureMessageBuilder<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore + CryptoRng> SecureMessageBuilder<R> {
    /// Empty configuration drawing IVs and signature randomness from `rng`.
    pub fn with_rng(rng: R) -> Self {
        SecureMessageBuilder {
            public_metadata: None,
            verification_key_id: None,
            decryption_key_id: None,
            associated_data: None,
            rng,
        }
    }

    /// Drop all per-message settings. The randomness source is kept.
    pub fn reset(self) -> Self {
        Self::with_rng(self.rng)
    }

    /// Bytes sent unencrypted in the header and covered by the signature.
    pub fn with_public_metadata(mut self, metadata: impl Into<Vec<u8>>) -> Self {
        self.public_metadata = Some(metadata.into());
        self
    }

    /// Identifier of the key a recipient should verify with.
    ///
    /// Required for signcrypted messages under a public-key signature: it
    /// binds the verifier's identity into the encrypted tag.
    pub fn with_verification_key_id(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.verification_key_id = Some(id.into());
        self
    }

    /// Identifier of the key a recipient should decrypt with. Only valid for
    /// signcrypted messages.
    pub fn with_decryption_key_id(mut self, id: impl Into<Vec<u8>>) -> Self {
        self.decryption_key_id = Some(id.into());
        self
    }

    /// Data authenticated by the message but never transmitted; the recipient
    /// must supply identical bytes. Only its length goes into the header.
    pub fn with_associated_data(mut self, data: impl Into<Vec<u8>>) -> Self {
        self.associated_data = Some(data.into());
        self
    }

    /// Sign `body` without encrypting it.
    ///
    /// Errors:
    /// - `IllegalState` if a decryption key id was configured
    /// - `InvalidKeyMaterial` if `signing_key` does not fit `sig_type`
    pub fn build_signed_cleartext_message(
        mut self,
        signing_key: &SigningKey,
        sig_type: SigType,
        body: &[u8],
    ) -> Result<SecureMessage> {
        if self.decryption_key_id.is_some() {
            return Err(SecureMessageError::IllegalState(
                "cannot set a decryption key id on a cleartext message",
            ));
        }

        let header_bytes = encode_header(&self.header(sig_type, EncType::None, None));
        let header_and_body = encode_header_and_body(&header_bytes, body);
        let signed = concat(&header_and_body, self.associated_data.as_deref());
        let signature = crypto::sign(sig_type, signing_key, &mut self.rng, &signed)?;

        tracing::debug!(
            sig = %sig_type,
            body_len = body.len(),
            ad_len = self.associated_data_len(),
            vk_id = %fmt_key_id(self.verification_key_id.as_deref()),
            "built signed cleartext message"
        );

        Ok(SecureMessage {
            header_and_body,
            signature,
        })
    }

    /// Encrypt `body` under `encryption_key` and sign the result.
    ///
    /// Unless the same symmetric key does both jobs, a 20-byte digest of
    /// `header || associated_data` is prepended to the plaintext before
    /// encryption and the associated data is left out of the signature input.
    ///
    /// Errors:
    /// - `IllegalState` if `enc_type` is `EncType::None`, or if a public-key
    ///   `sig_type` is used without a verification key id
    /// - `InvalidKeyMaterial` if `signing_key` does not fit `sig_type`
    pub fn build_sign_crypted_message(
        mut self,
        signing_key: &SigningKey,
        sig_type: SigType,
        encryption_key: &SecretKey,
        enc_type: EncType,
        body: &[u8],
    ) -> Result<SecureMessage> {
        if enc_type == EncType::None {
            return Err(SecureMessageError::IllegalState(
                "cannot sign-crypt without an encryption scheme",
            ));
        }
        if sig_type.is_public_key_scheme() && self.verification_key_id.is_none() {
            return Err(SecureMessageError::IllegalState(
                "a verification key id is required with a public-key signature",
            ));
        }

        let iv = crypto::generate_iv(enc_type, &mut self.rng)?;
        let header_bytes = encode_header(&self.header(sig_type, enc_type, Some(iv.clone())));
        let associated_data = self.associated_data.as_deref();

        let tag_required =
            crypto::tagged_plaintext_required(sig_type, signing_key.as_secret(), encryption_key);

        let plaintext = if tag_required {
            let tag = crypto::digest(&concat(&header_bytes, associated_data));
            concat(&tag, Some(body))
        } else {
            body.to_vec()
        };
        let ciphertext = crypto::encrypt(encryption_key, enc_type, &iv, &plaintext)?;

        let header_and_body = encode_header_and_body(&header_bytes, &ciphertext);
        let signature = if tag_required {
            crypto::sign(sig_type, signing_key, &mut self.rng, &header_and_body)?
        } else {
            let signed = concat(&header_and_body, associated_data);
            crypto::sign(sig_type, signing_key, &mut self.rng, &signed)?
        };

        tracing::debug!(
            sig = %sig_type,
            enc = %enc_type,
            tagged = tag_required,
            body_len = body.len(),
            ciphertext_len = ciphertext.len(),
            ad_len = self.associated_data_len(),
            vk_id = %fmt_key_id(self.verification_key_id.as_deref()),
            dk_id = %fmt_key_id(self.decryption_key_id.as_deref()),
            "built signcrypted message"
        );

        Ok(SecureMessage {
            header_and_body,
            signature,
        })
    }

    fn header(&self, sig_type: SigType, enc_type: EncType, iv: Option<Vec<u8>>) -> Header {
        Header {
            signature_scheme: Some(sig_type.sig_scheme() as i32),
            encryption_scheme: Some(enc_type.enc_scheme() as i32),
            verification_key_id: self.verification_key_id.clone(),
            decryption_key_id: self.decryption_key_id.clone(),
            iv,
            public_metadata: self.public_metadata.clone(),
            associated_data_length: self.associated_data.as_ref().map(|ad| ad.len() as u32),
        }
    }

    fn associated_data_len(&self) -> usize {
        self.associated_data.as_ref().map_or(0, Vec::len)
    }
}

impl<R> fmt::Debug for SecureMessageBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureMessageBuilder")
            .field("public_metadata", &self.public_metadata.as_ref().map(Vec::len))
            .field("verification_key_id", &fmt_key_id(self.verification_key_id.as_deref()))
            .field("decryption_key_id", &fmt_key_id(self.decryption_key_id.as_deref()))
            .field("associated_data", &self.associated_data.as_ref().map(Vec::len))
            .finish_non_exhaustive()
    }
}
