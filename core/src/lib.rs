//! securemessage
//!
//! Signed and signcrypted message envelopes with strict public key handling.
//! Pure Rust, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Primitives and key handling
pub mod crypto;
pub mod public_key;

// Wire format
pub mod wire;

// Message layer
pub mod builder;
pub mod parser;

pub use builder::SecureMessageBuilder;
pub use parser::{
    get_unverified_header, parse_sign_crypted_message, parse_signed_cleartext_message, ParsedMessage,
};
pub use types::{Result, SecureMessageError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::builder::SecureMessageBuilder;
    pub use crate::crypto::{EncType, SecretKey, SigType, SigningKey, VerificationKey};
    pub use crate::parser::{
        get_unverified_header, parse_sign_crypted_message, parse_signed_cleartext_message,
        ParsedMessage,
    };
    pub use crate::public_key::{encode_public_key, parse_public_key, PublicKey};
    pub use crate::types::{Result, SecureMessageError};
    pub use crate::wire::{GenericPublicKey, Header, SecureMessage};
}
