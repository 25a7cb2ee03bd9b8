//! wire/mod.rs
//! Protobuf wire types for the SecureMessage envelope and public keys.
//!
//! Notes:
//! - Field numbers are fixed; bindings in other languages decode the same bytes.
//! - Nothing decoded here is authenticated. The parser verifies before trusting.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
