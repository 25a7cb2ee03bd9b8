use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, SecureMessageError>;

/// Unified error for building, parsing and key handling.
///
/// The first four kinds are safe to report in detail: they describe
/// configuration or input *shape*. `VerificationFailed` is the single outcome
/// for every cryptographic or consistency check performed after parsing and
/// intentionally carries no detail, so callers cannot learn which check
/// rejected a message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SecureMessageError {
    /// Wrong key kind or size for the requested scheme.
    #[error("invalid key material: {0}")]
    InvalidKeyMaterial(String),

    /// Scheme, curve or cipher not available.
    #[error("unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Structurally invalid wire input.
    #[error("malformed message: {0}")]
    MalformedMessage(String),

    /// Signature, tag, header consistency or decryption check failed.
    #[error("message verification failed")]
    VerificationFailed,

    /// The builder or parser was asked for a combination that can never be valid
    /// (e.g. a decryption key id on a cleartext message).
    #[error("illegal state: {0}")]
    IllegalState(&'static str),
}

impl SecureMessageError {
    pub(crate) fn invalid_key(msg: impl Into<String>) -> Self {
        SecureMessageError::InvalidKeyMaterial(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        SecureMessageError::UnsupportedAlgorithm(msg.into())
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        SecureMessageError::MalformedMessage(msg.into())
    }

    /// True for the opaque verification outcome.
    pub fn is_verification_failure(&self) -> bool {
        matches!(self, SecureMessageError::VerificationFailed)
    }
}

impl From<prost::DecodeError> for SecureMessageError {
    fn from(e: prost::DecodeError) -> Self {
        SecureMessageError::MalformedMessage(e.to_string())
    }
}
