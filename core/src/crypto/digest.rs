use sha2::{Digest as _, Sha256};
use subtle::ConstantTimeEq;

use crate::constants::DIGEST_LEN;

/// SHA-256 truncated to 20 bytes.
///
/// Used as the compact integrity tag binding a signcrypted plaintext to its
/// header and associated data; not a general-purpose hash.
#[inline]
pub fn digest(data: &[u8]) -> [u8; DIGEST_LEN] {
    let full = Sha256::digest(data);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&full[..DIGEST_LEN]);
    out
}

/// Full SHA-256.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compare two optional byte arrays without leaking the mismatch position.
///
/// - both absent: equal; exactly one absent: not equal
/// - lengths differ: not equal, returned immediately (length is not secret)
/// - otherwise every byte is examined before returning
#[inline]
pub fn constant_time_array_equals(a: Option<&[u8]>, b: Option<&[u8]>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            if a.len() != b.len() {
                return false;
            }
            a.ct_eq(b).into()
        }
        _ => false,
    }
}
