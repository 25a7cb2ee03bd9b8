//! parser.rs
//! Verification (and decryption) of messages produced by `SecureMessageBuilder`.
//!
//! Design notes:
//! - Every function is pure; no state survives between calls.
//! - The signature is checked before any inner structure is trusted.
//! - Signature, header consistency, decryption and tag checks collapse into a
//!   single `VerificationFailed`; callers never learn which one rejected.
//! - Key/scheme mismatches are configuration errors and are reported as such.

use crate::constants::DIGEST_LEN;
use crate::crypto::{self, EncType, SecretKey, SigType, VerificationKey};
use crate::types::{Result, SecureMessageError};
use crate::utils::concat;
use crate::wire::{decode_header, decode_header_and_body, Header, HeaderAndBody, SecureMessage};

use prost::Message;

/// A verified header together with the recovered body.
#[derive(Clone, Debug, PartialEq)]
pub struct ParsedMessage {
    pub header: Header,
    pub body: Vec<u8>,
}

/// Extract the header without verifying anything.
///
/// Use only to choose which key to try; nothing in the result is
/// authenticated until a `parse_*` call succeeds.
pub fn get_unverified_header(message: &SecureMessage) -> Result<Header> {
    let header_and_body = decode_header_and_body(&message.header_and_body)?;
    decode_header(&header_and_body.header)
}

/// Verify a signed cleartext message.
///
/// `associated_data` must match what the sender configured (absent and empty
/// are equivalent).
pub fn parse_signed_cleartext_message(
    message: &SecureMessage,
    verification_key: &VerificationKey,
    sig_type: SigType,
    associated_data: Option<&[u8]>,
) -> Result<ParsedMessage> {
    let verified = verify_header_and_body(
        message,
        verification_key,
        sig_type,
        EncType::None,
        associated_data,
        false,
    )?;

    tracing::debug!(sig = %sig_type, body_len = verified.body.len(), "parsed signed cleartext message");

    Ok(ParsedMessage {
        header: verified.header,
        body: verified.body,
    })
}

/// Verify and decrypt a signcrypted message.
///
/// Errors:
/// - `IllegalState` if `enc_type` is `EncType::None`
/// - `InvalidKeyMaterial` if `verification_key` does not fit `sig_type`
/// - `VerificationFailed` for any signature, header, decryption or tag failure
pub fn parse_sign_crypted_message(
    message: &SecureMessage,
    verification_key: &VerificationKey,
    sig_type: SigType,
    decryption_key: &SecretKey,
    enc_type: EncType,
    associated_data: Option<&[u8]>,
) -> Result<ParsedMessage> {
    if enc_type == EncType::None {
        return Err(SecureMessageError::IllegalState(
            "cannot parse a signcrypted message without an encryption scheme",
        ));
    }

    let tag_required =
        crypto::tagged_plaintext_required(sig_type, verification_key.as_secret(), decryption_key);

    let verified = verify_header_and_body(
        message,
        verification_key,
        sig_type,
        enc_type,
        associated_data,
        tag_required,
    )?;

    let iv = verified.header.iv.as_deref().ok_or_else(rejected)?;
    let plaintext = crypto::decrypt(decryption_key, enc_type, iv, &verified.body).map_err(|_| rejected())?;

    let body = if tag_required {
        if plaintext.len() < DIGEST_LEN {
            return Err(rejected());
        }
        let (tag, body) = plaintext.split_at(DIGEST_LEN);
        let expected = crypto::digest(&concat(&verified.header_bytes, associated_data));
        if !crypto::constant_time_array_equals(Some(&expected), Some(tag)) {
            return Err(rejected());
        }
        body.to_vec()
    } else {
        plaintext
    };

    tracing::debug!(
        sig = %sig_type,
        enc = %enc_type,
        tagged = tag_required,
        body_len = body.len(),
        "parsed signcrypted message"
    );

    Ok(ParsedMessage {
        header: verified.header,
        body,
    })
}

struct VerifiedParts {
    header_bytes: Vec<u8>,
    header: Header,
    body: Vec<u8>,
}

/// Signature plus header self-consistency, ANDed into a single outcome.
fn verify_header_and_body(
    message: &SecureMessage,
    verification_key: &VerificationKey,
    sig_type: SigType,
    enc_type: EncType,
    associated_data: Option<&[u8]>,
    suppress_associated_data: bool,
) -> Result<VerifiedParts> {
    let signed = if suppress_associated_data {
        message.header_and_body.clone()
    } else {
        concat(&message.header_and_body, associated_data)
    };
    let mut verified = crypto::verify(verification_key, sig_type, &message.signature, &signed)?;

    // Past this point nothing is trusted; structural failures are rejections.
    let HeaderAndBody { header: header_bytes, body } =
        HeaderAndBody::decode(message.header_and_body.as_slice()).map_err(|_| rejected())?;
    let header = Header::decode(header_bytes.as_slice()).map_err(|_| rejected())?;

    let encrypted = enc_type != EncType::None;
    let ad_len = associated_data.map_or(0, <[u8]>::len);

    verified &= header.declared_sig_scheme() == Some(sig_type.sig_scheme());
    verified &= header.declared_enc_scheme() == Some(enc_type.enc_scheme());
    verified &= encrypted || header.decryption_key_id.is_none();
    verified &= !(encrypted && sig_type.is_public_key_scheme() && header.verification_key_id.is_none());
    verified &= header.declared_associated_data_len() as usize == ad_len;
    verified &= !encrypted || header.iv.is_some();

    if !verified {
        return Err(rejected());
    }

    Ok(VerifiedParts {
        header_bytes,
        header,
        body,
    })
}

/// The single outcome for every post-parse failure. Logged without detail.
fn rejected() -> SecureMessageError {
    tracing::debug!("secure message rejected");
    SecureMessageError::VerificationFailed
}
