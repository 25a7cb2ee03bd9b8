#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use num_bigint::BigUint;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use securemessage::crypto::{SecretKey, SigningKey, VerificationKey};
    use securemessage::public_key::dh::DhGroup;
    use securemessage::public_key::{
        encode_padded_ec_public_key, encode_public_key, generate_dh_key_pair, generate_ec_p256_key_pair,
        generate_rsa2048_key_pair, parse_public_key, DhPublicKey, PublicKey,
    };
    use securemessage::wire::{
        DhPublicKey as WireDhPublicKey, GenericPublicKey, PublicKeyType, SimpleRsaPublicKey,
    };
    use securemessage::SecureMessageError;

    fn rsa_key() -> rsa::RsaPrivateKey {
        static KEY: OnceLock<rsa::RsaPrivateKey> = OnceLock::new();
        KEY.get_or_init(|| {
            let mut rng = StdRng::seed_from_u64(2048);
            generate_rsa2048_key_pair(&mut rng).unwrap()
        })
        .clone()
    }

    fn ec_public(seed: u64) -> p256::PublicKey {
        let mut rng = StdRng::seed_from_u64(seed);
        let sk = generate_ec_p256_key_pair(&mut rng).unwrap();
        p256::PublicKey::from(sk.verifying_key())
    }

    fn ec_wire(x: Vec<u8>, y: Vec<u8>) -> GenericPublicKey {
        GenericPublicKey {
            r#type: Some(PublicKeyType::EcP256 as i32),
            ec_p256_public_key: Some(securemessage::wire::EcP256PublicKey { x, y }),
            ..Default::default()
        }
    }

    fn rsa_wire(n: &BigUint, e: Option<i32>) -> GenericPublicKey {
        let mut n_bytes = n.to_bytes_be();
        if n_bytes[0] & 0x80 != 0 {
            n_bytes.insert(0, 0);
        }
        GenericPublicKey {
            r#type: Some(PublicKeyType::Rsa2048 as i32),
            rsa2048_public_key: Some(SimpleRsaPublicKey { n: n_bytes, e }),
            ..Default::default()
        }
    }

    fn dh_wire(y: Vec<u8>) -> GenericPublicKey {
        GenericPublicKey {
            r#type: Some(PublicKeyType::Dh2048Modp as i32),
            dh2048_public_key: Some(WireDhPublicKey { y }),
            ..Default::default()
        }
    }

    fn assert_invalid_encoding(result: Result<PublicKey, SecureMessageError>) {
        assert_eq!(
            result.unwrap_err(),
            SecureMessageError::MalformedMessage("invalid key encoding".into())
        );
    }

    // --- EC P-256 -------------------------------------------------------------

    #[test]
    fn test_ec_round_trip() {
        let key = ec_public(1);
        let wire = encode_public_key(&PublicKey::EcP256(key)).unwrap();
        assert_eq!(wire.r#type, Some(PublicKeyType::EcP256 as i32));

        let bytes = wire.to_bytes();
        let parsed = parse_public_key(&GenericPublicKey::from_bytes(&bytes).unwrap()).unwrap();
        assert_eq!(parsed, PublicKey::EcP256(key));
    }

    #[test]
    fn test_ec_coordinates_are_minimal() {
        let wire = encode_public_key(&PublicKey::EcP256(ec_public(2))).unwrap();
        let ec = wire.ec_p256_public_key.unwrap();
        for c in [&ec.x, &ec.y] {
            assert!(!c.is_empty() && c.len() <= 33);
            if c.len() > 1 {
                // No redundant sign byte.
                assert!(!(c[0] == 0 && c[1] & 0x80 == 0));
            }
        }
    }

    #[test]
    fn test_ec_padded_encoding_parses() {
        let key = ec_public(3);
        let padded = encode_padded_ec_public_key(&key).unwrap();
        assert_eq!(padded.x.len(), 33);
        assert_eq!(padded.y.len(), 33);
        assert_eq!(padded.x[0], 0);

        let parsed = parse_public_key(&ec_wire(padded.x, padded.y)).unwrap();
        assert_eq!(parsed, PublicKey::EcP256(key));
    }

    #[test]
    fn test_ec_off_curve_rejected() {
        let padded = encode_padded_ec_public_key(&ec_public(4)).unwrap();
        let mut y = padded.y.clone();
        y[32] ^= 0x01;
        assert_invalid_encoding(parse_public_key(&ec_wire(padded.x, y)));
    }

    #[test]
    fn test_ec_coordinate_length_bounds() {
        let padded = encode_padded_ec_public_key(&ec_public(5)).unwrap();

        let mut nonzero_lead = padded.x.clone();
        nonzero_lead[0] = 0x01;
        assert_invalid_encoding(parse_public_key(&ec_wire(nonzero_lead, padded.y.clone())));

        let mut too_long = vec![0u8];
        too_long.extend_from_slice(&padded.x);
        assert_invalid_encoding(parse_public_key(&ec_wire(too_long, padded.y.clone())));

        assert_invalid_encoding(parse_public_key(&ec_wire(Vec::new(), padded.y)));
    }

    #[test]
    fn test_ec_coordinate_at_field_prime_rejected() {
        let p = hex::decode("00ffffffff00000001000000000000000000000000ffffffffffffffffffffffff").unwrap();
        assert_invalid_encoding(parse_public_key(&ec_wire(p.clone(), vec![0x01])));
        assert_invalid_encoding(parse_public_key(&ec_wire(vec![0x01], p)));
    }

    // --- RSA-2048 -------------------------------------------------------------

    #[test]
    fn test_rsa_round_trip_omits_default_exponent() {
        let public = rsa_key().to_public_key();
        let wire = encode_public_key(&PublicKey::Rsa2048(public.clone())).unwrap();
        let rsa = wire.rsa2048_public_key.as_ref().unwrap();
        assert_eq!(rsa.e, None);
        assert_eq!(rsa.n.len(), 257);
        assert_eq!(rsa.n[0], 0);

        assert_eq!(parse_public_key(&wire).unwrap(), PublicKey::Rsa2048(public));
    }

    #[test]
    fn test_rsa_modulus_must_be_exactly_2048_bits() {
        let one = BigUint::from(1u8);
        let n_2047 = (&one << 2046u32) + 1u8;
        let n_2049 = (&one << 2048u32) + 1u8;

        assert_invalid_encoding(parse_public_key(&rsa_wire(&n_2047, None)));
        assert_invalid_encoding(parse_public_key(&rsa_wire(&n_2049, None)));
    }

    #[test]
    fn test_rsa_exponent_must_be_positive() {
        let n = (BigUint::from(1u8) << 2047u32) + 1u8;
        assert_invalid_encoding(parse_public_key(&rsa_wire(&n, Some(0))));
        assert_invalid_encoding(parse_public_key(&rsa_wire(&n, Some(-3))));
    }

    #[test]
    fn test_rsa_negative_modulus_rejected() {
        // 256 bytes with the top bit set decode as a negative integer.
        let mut wire = rsa_wire(&(BigUint::from(1u8) << 2047u32), None);
        wire.rsa2048_public_key.as_mut().unwrap().n.remove(0);
        assert_invalid_encoding(parse_public_key(&wire));
    }

    // --- DH-2048 --------------------------------------------------------------

    #[test]
    fn test_dh_agreement() {
        let mut rng = StdRng::seed_from_u64(9);
        let alice = generate_dh_key_pair(&mut rng);
        let bob = generate_dh_key_pair(&mut rng);

        let s1 = alice.private.agree(&bob.public).unwrap();
        let s2 = bob.private.agree(&alice.public).unwrap();
        assert_eq!(s1, s2);
        assert_eq!(s1.len(), 256);
        assert_eq!(DhPublicKey::from_private(&alice.private), alice.public);
    }

    #[test]
    fn test_dh_round_trip() {
        let mut rng = StdRng::seed_from_u64(10);
        let pair = generate_dh_key_pair(&mut rng);
        let wire = encode_public_key(&PublicKey::Dh2048(pair.public.clone())).unwrap();
        assert!(wire.dh2048_public_key.as_ref().unwrap().y.len() <= 257);
        assert_eq!(parse_public_key(&wire).unwrap(), PublicKey::Dh2048(pair.public));
    }

    #[test]
    fn test_dh_range_checks() {
        let p = &DhGroup::modp_2048().p;
        let p_minus_one = p - 1u8;

        assert_invalid_encoding(parse_public_key(&dh_wire(vec![0x00])));
        assert_invalid_encoding(parse_public_key(&dh_wire(vec![0x01])));
        let mut y = p_minus_one.to_bytes_be();
        y.insert(0, 0);
        assert_invalid_encoding(parse_public_key(&dh_wire(y)));
        assert_invalid_encoding(parse_public_key(&dh_wire(vec![0u8; 258])));
        assert_invalid_encoding(parse_public_key(&dh_wire(Vec::new())));

        assert!(parse_public_key(&dh_wire(vec![0x02])).is_ok());
    }

    // --- Generic dispatch ---------------------------------------------------

    #[test]
    fn test_missing_payload_and_unknown_type() {
        let missing = GenericPublicKey {
            r#type: Some(PublicKeyType::Rsa2048 as i32),
            ..Default::default()
        };
        assert!(matches!(
            parse_public_key(&missing),
            Err(SecureMessageError::MalformedMessage(_))
        ));

        let unknown = GenericPublicKey {
            r#type: Some(42),
            ..Default::default()
        };
        assert!(matches!(
            parse_public_key(&unknown),
            Err(SecureMessageError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_verification_key_conversions() {
        let secret = VerificationKey::from(SecretKey::from_bytes(&[1u8; 32]));
        assert!(matches!(
            PublicKey::try_from(&secret),
            Err(SecureMessageError::UnsupportedAlgorithm(_))
        ));

        let mut rng = StdRng::seed_from_u64(6);
        let ec = SigningKey::from(generate_ec_p256_key_pair(&mut rng).unwrap());
        let public = PublicKey::try_from(&VerificationKey::from(&ec)).unwrap();
        assert!(VerificationKey::try_from(public).is_ok());

        let dh = generate_dh_key_pair(&mut rng).public;
        assert!(matches!(
            VerificationKey::try_from(PublicKey::Dh2048(dh)),
            Err(SecureMessageError::UnsupportedAlgorithm(_))
        ));
    }
}
