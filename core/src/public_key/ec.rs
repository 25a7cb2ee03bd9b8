//! public_key/ec.rs
//! NIST P-256 public keys on the wire.
//!
//! Untrusted coordinates are range- and curve-checked with plain big-integer
//! arithmetic *before* any key object is built.

use std::sync::OnceLock;

use num_bigint::BigUint;
use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, FieldBytes};
use rand::{CryptoRng, RngCore};

use crate::constants::key_bounds::MAX_EC_COORDINATE_LEN;
use crate::public_key::{decode_unsigned, invalid_encoding, left_pad, to_twos_complement};
use crate::types::{Result, SecureMessageError};
use crate::wire::EcP256PublicKey;

const COORDINATE_LEN: usize = 32;

const P256_P: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];
const P256_B: [u8; 32] = [
    0x5a, 0xc6, 0x35, 0xd8, 0xaa, 0x3a, 0x93, 0xe7, 0xb3, 0xeb, 0xbd, 0x55, 0x76, 0x98, 0x86, 0xbc,
    0x65, 0x1d, 0x06, 0xb0, 0xcc, 0x53, 0xb0, 0xf6, 0x3b, 0xce, 0x3c, 0x3e, 0x27, 0xd2, 0x60, 0x4b,
];
const P256_GX: [u8; 32] = [
    0x6b, 0x17, 0xd1, 0xf2, 0xe1, 0x2c, 0x42, 0x47, 0xf8, 0xbc, 0xe6, 0xe5, 0x63, 0xa4, 0x40, 0xf2,
    0x77, 0x03, 0x7d, 0x81, 0x2d, 0xeb, 0x33, 0xa0, 0xf4, 0xa1, 0x39, 0x45, 0xd8, 0x98, 0xc2, 0x96,
];
const P256_GY: [u8; 32] = [
    0x4f, 0xe3, 0x42, 0xe2, 0xfe, 0x1a, 0x7f, 0x9b, 0x8e, 0xe7, 0xeb, 0x4a, 0x7c, 0x0f, 0x9e, 0x16,
    0x2b, 0xce, 0x33, 0x57, 0x6b, 0x31, 0x5e, 0xce, 0xcb, 0xb6, 0x40, 0x68, 0x37, 0xbf, 0x51, 0xf5,
];

/// Short Weierstrass parameters `y^2 = x^3 + a*x + b (mod p)`.
struct CurveParams {
    p: BigUint,
    a: BigUint,
    b: BigUint,
}

fn p256_params() -> &'static CurveParams {
    static PARAMS: OnceLock<CurveParams> = OnceLock::new();
    PARAMS.get_or_init(|| {
        let p = BigUint::from_bytes_be(&P256_P);
        // a = -3 mod p
        let a = &p - BigUint::from(3u8);
        CurveParams {
            p,
            a,
            b: BigUint::from_bytes_be(&P256_B),
        }
    })
}

/// Whether elliptic-curve operations work on this platform. Evaluated once.
///
/// The probe builds the P-256 base point through the curve backend; when that
/// fails every EC path reports `UnsupportedAlgorithm` instead of touching the
/// backend again.
pub fn is_ec_supported() -> bool {
    static SUPPORTED: OnceLock<bool> = OnceLock::new();
    *SUPPORTED.get_or_init(|| {
        let supported = point_from_coordinates(&P256_GX, &P256_GY).is_some();
        if !supported {
            tracing::warn!("P-256 backend unavailable, elliptic curve operations disabled");
        }
        supported
    })
}

pub(crate) fn ensure_ec() -> Result<()> {
    if is_ec_supported() {
        Ok(())
    } else {
        Err(SecureMessageError::unsupported("elliptic curve operations are not available"))
    }
}

/// Generate a fresh P-256 signing key.
pub fn generate_ec_p256_key_pair<R: RngCore + CryptoRng>(rng: &mut R) -> Result<p256::ecdsa::SigningKey> {
    ensure_ec()?;
    Ok(p256::ecdsa::SigningKey::random(rng))
}

/// Minimal two's-complement encoding of both affine coordinates.
pub fn encode_ec_public_key(key: &p256::PublicKey) -> Result<EcP256PublicKey> {
    let (x, y) = affine_coordinates(key)?;
    Ok(EcP256PublicKey {
        x: to_twos_complement(&x),
        y: to_twos_complement(&y),
    })
}

/// Fixed-width encoding: each coordinate is exactly 33 bytes with a leading
/// zero sign byte. Accepted by `parse_ec_public_key`.
pub fn encode_padded_ec_public_key(key: &p256::PublicKey) -> Result<EcP256PublicKey> {
    let (x, y) = affine_coordinates(key)?;
    Ok(EcP256PublicKey {
        x: left_pad(&x.to_bytes_be(), MAX_EC_COORDINATE_LEN),
        y: left_pad(&y.to_bytes_be(), MAX_EC_COORDINATE_LEN),
    })
}

/// Validate and decode an untrusted P-256 public key.
pub fn parse_ec_public_key(encoded: &EcP256PublicKey) -> Result<p256::PublicKey> {
    ensure_ec()?;
    let x = decode_coordinate(&encoded.x)?;
    let y = decode_coordinate(&encoded.y)?;

    if !is_on_curve(&x, &y) {
        return Err(invalid_encoding());
    }

    let x = left_pad(&x.to_bytes_be(), COORDINATE_LEN);
    let y = left_pad(&y.to_bytes_be(), COORDINATE_LEN);
    point_from_coordinates(&x, &y).ok_or_else(invalid_encoding)
}

/// `0 <= x, y < p` and `y^2 == x^3 + a*x + b (mod p)`.
pub(crate) fn is_on_curve(x: &BigUint, y: &BigUint) -> bool {
    let curve = p256_params();
    if x >= &curve.p || y >= &curve.p {
        return false;
    }
    let lhs = (y * y) % &curve.p;
    let rhs = (x * x * x + &curve.a * x + &curve.b) % &curve.p;
    lhs == rhs
}

fn decode_coordinate(bytes: &[u8]) -> Result<BigUint> {
    // A 33rd byte may only be the zero sign byte.
    if bytes.len() == MAX_EC_COORDINATE_LEN && bytes[0] != 0 {
        return Err(invalid_encoding());
    }
    decode_unsigned(bytes, MAX_EC_COORDINATE_LEN)
}

fn affine_coordinates(key: &p256::PublicKey) -> Result<(BigUint, BigUint)> {
    ensure_ec()?;
    let point = key.to_encoded_point(false);
    match (point.x(), point.y()) {
        (Some(x), Some(y)) => Ok((BigUint::from_bytes_be(x), BigUint::from_bytes_be(y))),
        _ => Err(SecureMessageError::invalid_key("EC public key is the identity point")),
    }
}

fn point_from_coordinates(x: &[u8], y: &[u8]) -> Option<p256::PublicKey> {
    if x.len() != COORDINATE_LEN || y.len() != COORDINATE_LEN {
        return None;
    }
    let point = EncodedPoint::from_affine_coordinates(
        FieldBytes::from_slice(x),
        FieldBytes::from_slice(y),
        false,
    );
    Option::from(p256::PublicKey::from_encoded_point(&point))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_is_on_curve() {
        let gx = BigUint::from_bytes_be(&P256_GX);
        let gy = BigUint::from_bytes_be(&P256_GY);
        assert!(is_on_curve(&gx, &gy));
        assert!(!is_on_curve(&gx, &(gy + 1u8)));
    }

    #[test]
    fn coordinate_equal_to_p_is_rejected() {
        let p = BigUint::from_bytes_be(&P256_P);
        let gy = BigUint::from_bytes_be(&P256_GY);
        assert!(!is_on_curve(&p, &gy));
    }

    #[test]
    fn probe_reports_supported() {
        assert!(is_ec_supported());
    }
}
