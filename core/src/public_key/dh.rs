//! public_key/dh.rs
//! Diffie-Hellman over the 2048-bit MODP group (RFC 3526, group 14).
//!
//! Design notes:
//! - Keys are plain value types; `y = g^x mod p` is computed here directly.
//! - Private exponents are 512 random bits with the top bit forced.
//! - Peer values outside `1 < y < p-1` are rejected to rule out the trivial
//!   subgroup.

use std::fmt;
use std::sync::OnceLock;

use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::{CryptoRng, RngCore};

use crate::constants::key_bounds::{DH_PRIVATE_EXPONENT_BITS, DH_SHARED_SECRET_LEN, MAX_MODULUS_LEN};
use crate::public_key::{decode_unsigned, invalid_encoding, left_pad, to_twos_complement};
use crate::types::{Result, SecureMessageError};
use crate::wire;

const MODP_2048_P: [u8; 256] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xc9, 0x0f, 0xda, 0xa2, 0x21, 0x68, 0xc2, 0x34,
    0xc4, 0xc6, 0x62, 0x8b, 0x80, 0xdc, 0x1c, 0xd1, 0x29, 0x02, 0x4e, 0x08, 0x8a, 0x67, 0xcc, 0x74,
    0x02, 0x0b, 0xbe, 0xa6, 0x3b, 0x13, 0x9b, 0x22, 0x51, 0x4a, 0x08, 0x79, 0x8e, 0x34, 0x04, 0xdd,
    0xef, 0x95, 0x19, 0xb3, 0xcd, 0x3a, 0x43, 0x1b, 0x30, 0x2b, 0x0a, 0x6d, 0xf2, 0x5f, 0x14, 0x37,
    0x4f, 0xe1, 0x35, 0x6d, 0x6d, 0x51, 0xc2, 0x45, 0xe4, 0x85, 0xb5, 0x76, 0x62, 0x5e, 0x7e, 0xc6,
    0xf4, 0x4c, 0x42, 0xe9, 0xa6, 0x37, 0xed, 0x6b, 0x0b, 0xff, 0x5c, 0xb6, 0xf4, 0x06, 0xb7, 0xed,
    0xee, 0x38, 0x6b, 0xfb, 0x5a, 0x89, 0x9f, 0xa5, 0xae, 0x9f, 0x24, 0x11, 0x7c, 0x4b, 0x1f, 0xe6,
    0x49, 0x28, 0x66, 0x51, 0xec, 0xe4, 0x5b, 0x3d, 0xc2, 0x00, 0x7c, 0xb8, 0xa1, 0x63, 0xbf, 0x05,
    0x98, 0xda, 0x48, 0x36, 0x1c, 0x55, 0xd3, 0x9a, 0x69, 0x16, 0x3f, 0xa8, 0xfd, 0x24, 0xcf, 0x5f,
    0x83, 0x65, 0x5d, 0x23, 0xdc, 0xa3, 0xad, 0x96, 0x1c, 0x62, 0xf3, 0x56, 0x20, 0x85, 0x52, 0xbb,
    0x9e, 0xd5, 0x29, 0x07, 0x70, 0x96, 0x96, 0x6d, 0x67, 0x0c, 0x35, 0x4e, 0x4a, 0xbc, 0x98, 0x04,
    0xf1, 0x74, 0x6c, 0x08, 0xca, 0x18, 0x21, 0x7c, 0x32, 0x90, 0x5e, 0x46, 0x2e, 0x36, 0xce, 0x3b,
    0xe3, 0x9e, 0x77, 0x2c, 0x18, 0x0e, 0x86, 0x03, 0x9b, 0x27, 0x83, 0xa2, 0xec, 0x07, 0xa2, 0x8f,
    0xb5, 0xc5, 0x5d, 0xf0, 0x6f, 0x4c, 0x52, 0xc9, 0xde, 0x2b, 0xcb, 0xf6, 0x95, 0x58, 0x17, 0x18,
    0x39, 0x95, 0x49, 0x7c, 0xea, 0x95, 0x6a, 0xe5, 0x15, 0xd2, 0x26, 0x18, 0x98, 0xfa, 0x05, 0x10,
    0x15, 0x72, 0x8e, 0x5a, 0x8a, 0xac, 0xaa, 0x68, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

const MODP_2048_G: u32 = 2;

/// Group parameters.
#[derive(Clone, Debug)]
pub struct DhGroup {
    pub p: BigUint,
    pub g: BigUint,
    /// Private exponent size in bits.
    pub exponent_bits: u64,
}

impl DhGroup {
    /// RFC 3526 group 14.
    pub fn modp_2048() -> &'static DhGroup {
        static GROUP: OnceLock<DhGroup> = OnceLock::new();
        GROUP.get_or_init(|| DhGroup {
            p: BigUint::from_bytes_be(&MODP_2048_P),
            g: BigUint::from(MODP_2048_G),
            exponent_bits: DH_PRIVATE_EXPONENT_BITS,
        })
    }

    /// `1 < y < p - 1`
    pub fn is_valid_public_value(&self, y: &BigUint) -> bool {
        let one = BigUint::one();
        let p_minus_one = &self.p - &one;
        y > &one && y < &p_minus_one
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct DhPrivateKey {
    x: BigUint,
}

impl DhPrivateKey {
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let group = DhGroup::modp_2048();
        let mut x = rng.gen_biguint(group.exponent_bits);
        x.set_bit(group.exponent_bits - 1, true);
        DhPrivateKey { x }
    }

    /// Shared secret `peer^x mod p`, left-padded to the modulus size.
    pub fn agree(&self, peer: &DhPublicKey) -> Result<Vec<u8>> {
        let group = DhGroup::modp_2048();
        if !group.is_valid_public_value(&peer.y) {
            return Err(SecureMessageError::invalid_key("DH peer value out of range"));
        }
        let secret = peer.y.modpow(&self.x, &group.p);
        Ok(left_pad(&secret.to_bytes_be(), DH_SHARED_SECRET_LEN))
    }
}

impl fmt::Debug for DhPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DhPrivateKey([REDACTED])")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhPublicKey {
    y: BigUint,
}

impl DhPublicKey {
    /// `g^x mod p`
    pub fn from_private(private: &DhPrivateKey) -> Self {
        let group = DhGroup::modp_2048();
        DhPublicKey {
            y: group.g.modpow(&private.x, &group.p),
        }
    }

    /// Wrap a group element after range-checking it.
    pub fn from_value(y: BigUint) -> Result<Self> {
        if !DhGroup::modp_2048().is_valid_public_value(&y) {
            return Err(invalid_encoding());
        }
        Ok(DhPublicKey { y })
    }

    pub fn value(&self) -> &BigUint {
        &self.y
    }
}

#[derive(Clone, Debug)]
pub struct DhKeyPair {
    pub private: DhPrivateKey,
    pub public: DhPublicKey,
}

/// Generate a fresh DH key pair in the 2048-bit MODP group.
pub fn generate_dh_key_pair<R: RngCore + CryptoRng>(rng: &mut R) -> DhKeyPair {
    let private = DhPrivateKey::generate(rng);
    let public = DhPublicKey::from_private(&private);
    DhKeyPair { private, public }
}

pub(crate) fn encode_dh_public_key(key: &DhPublicKey) -> wire::DhPublicKey {
    wire::DhPublicKey {
        y: to_twos_complement(&key.y),
    }
}

pub(crate) fn parse_dh_public_key(encoded: &wire::DhPublicKey) -> Result<DhPublicKey> {
    let y = decode_unsigned(&encoded.y, MAX_MODULUS_LEN)?;
    DhPublicKey::from_value(y)
}
