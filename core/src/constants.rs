/// Input to the domain-separation salt: `SALT = SHA-256("SecureMessage")`.
///
/// Prefixed to every public-key signature input and used as the HKDF salt for
/// all derived subkeys.
pub const SALT_INPUT: &[u8] = b"SecureMessage";

/// `SHA-256("SecureMessage")`, precomputed.
pub const SALT: [u8; 32] = [
    0xbf, 0x9d, 0x2a, 0x53, 0xc6, 0x36, 0x16, 0xd7, 0x5d, 0xb0, 0xa7, 0x16, 0x5b, 0x91, 0xc1, 0xef,
    0x73, 0xe5, 0x37, 0xf2, 0x42, 0x74, 0x05, 0xfa, 0x23, 0x61, 0x0a, 0x4b, 0xe6, 0x57, 0x64, 0x2e,
];

/// Length of the truncated SHA-256 digest used as the plaintext tag.
pub const DIGEST_LEN: usize = 20;

/// Length of every HKDF-derived subkey (AES-256 / HMAC-SHA256 key).
pub const KEY_LEN_32: usize = 32;

/// AES block size; also the CBC IV length.
pub const AES_BLOCK_LEN: usize = 16;

/// Length of generated symmetric master keys.
pub const SECRET_KEY_LEN: usize = 32;

/// Purpose prefixes fed to HKDF as `info`, followed by the wire scheme number.
pub mod purpose {
    pub const SIGNATURE: &str = "SIG:";
    pub const ENCRYPTION: &str = "ENC:";
}

/// Wire encoding bounds for untrusted `GenericPublicKey` input.
pub mod key_bounds {
    /// A P-256 coordinate: 32 bytes plus an optional sign byte.
    pub const MAX_EC_COORDINATE_LEN: usize = 33;
    /// A 2048-bit integer: 256 bytes plus an optional sign byte.
    pub const MAX_MODULUS_LEN: usize = 257;
    /// Required RSA modulus size.
    pub const RSA_MODULUS_BITS: u64 = 2048;
    /// Default RSA public exponent when the wire omits it.
    pub const RSA_DEFAULT_EXPONENT: i32 = 65537;
    /// Size of a DH private exponent in the 2048-bit MODP group.
    pub const DH_PRIVATE_EXPONENT_BITS: u64 = 512;
    /// Length of a DH shared secret (size of the group modulus).
    pub const DH_SHARED_SECRET_LEN: usize = 256;
}
