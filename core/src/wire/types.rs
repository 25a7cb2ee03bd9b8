//! wire/types.rs
//! Protobuf message types exchanged on the wire.
//!
//! Field numbers and enum values are fixed by the deployed protocol and must
//! never change. Required byte fields are always encoded, even when empty.
//! Header scalars are `optional` on the Rust side so presence can be checked
//! explicitly; the builder always populates the ones the protocol requires.

/// Signature scheme identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum SigScheme {
    HmacSha256 = 1,
    EcdsaP256Sha256 = 2,
    Rsa2048Sha256 = 3,
}

/// Encryption scheme identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum EncScheme {
    /// Cleartext; the body is not encrypted.
    None = 1,
    Aes256Cbc = 2,
}

/// Public key kinds carried by `GenericPublicKey`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum PublicKeyType {
    EcP256 = 1,
    Rsa2048 = 2,
    Dh2048Modp = 3,
}

/// Outer envelope: the only value that crosses the wire as a unit.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SecureMessage {
    /// Serialized `HeaderAndBody`.
    #[prost(bytes = "vec", required, tag = "1")]
    pub header_and_body: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", required, tag = "2")]
    pub signature: ::prost::alloc::vec::Vec<u8>,
}

/// Serialized header plus body. The header is kept as raw bytes so that the
/// exact signed encoding survives a decode/encode cycle.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HeaderAndBody {
    #[prost(bytes = "vec", required, tag = "1")]
    pub header: ::prost::alloc::vec::Vec<u8>,
    /// Plaintext for cleartext messages, ciphertext for signcrypted ones.
    #[prost(bytes = "vec", required, tag = "2")]
    pub body: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Header {
    #[prost(enumeration = "SigScheme", optional, tag = "1")]
    pub signature_scheme: ::core::option::Option<i32>,
    /// Absent is treated as `EncScheme::None`.
    #[prost(enumeration = "EncScheme", optional, tag = "2")]
    pub encryption_scheme: ::core::option::Option<i32>,
    /// Identifies the key needed to verify the signature; sent in the clear.
    #[prost(bytes = "vec", optional, tag = "3")]
    pub verification_key_id: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// Identifies the key needed to decrypt the body; sent in the clear.
    #[prost(bytes = "vec", optional, tag = "4")]
    pub decryption_key_id: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// Required iff the body is encrypted.
    #[prost(bytes = "vec", optional, tag = "5")]
    pub iv: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// Sent unencrypted; authenticated by the signature.
    #[prost(bytes = "vec", optional, tag = "6")]
    pub public_metadata: ::core::option::Option<::prost::alloc::vec::Vec<u8>>,
    /// Length of associated data that was signed but not sent. Absent means 0.
    #[prost(uint32, optional, tag = "7")]
    pub associated_data_length: ::core::option::Option<u32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EcP256PublicKey {
    /// Two's-complement big-endian, at most 33 bytes.
    #[prost(bytes = "vec", required, tag = "1")]
    pub x: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", required, tag = "2")]
    pub y: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SimpleRsaPublicKey {
    /// Modulus, two's-complement big-endian.
    #[prost(bytes = "vec", required, tag = "1")]
    pub n: ::prost::alloc::vec::Vec<u8>,
    #[prost(int32, optional, tag = "2", default = "65537")]
    pub e: ::core::option::Option<i32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DhPublicKey {
    /// Group element, two's-complement big-endian.
    #[prost(bytes = "vec", required, tag = "1")]
    pub y: ::prost::alloc::vec::Vec<u8>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GenericPublicKey {
    #[prost(enumeration = "PublicKeyType", optional, tag = "1")]
    pub r#type: ::core::option::Option<i32>,
    #[prost(message, optional, tag = "2")]
    pub ec_p256_public_key: ::core::option::Option<EcP256PublicKey>,
    #[prost(message, optional, tag = "3")]
    pub rsa2048_public_key: ::core::option::Option<SimpleRsaPublicKey>,
    #[prost(message, optional, tag = "4")]
    pub dh2048_public_key: ::core::option::Option<DhPublicKey>,
}
