#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use securemessage::crypto::{SecretKey, SigType, SigningKey};
    use securemessage::wire::{
        decode_header, encode_header, encode_header_and_body, EncScheme, Header, SecureMessage, SigScheme,
    };
    use securemessage::{get_unverified_header, SecureMessageBuilder, SecureMessageError};

    fn message_with_header(header: &Header) -> SecureMessage {
        SecureMessage {
            header_and_body: encode_header_and_body(&encode_header(header), b"body"),
            signature: vec![0u8; 32],
        }
    }

    #[test]
    fn test_minimal_header_bytes() {
        let header = Header {
            signature_scheme: Some(SigScheme::HmacSha256 as i32),
            encryption_scheme: Some(EncScheme::None as i32),
            ..Default::default()
        };
        assert_eq!(encode_header(&header), vec![0x08, 0x01, 0x10, 0x01]);
    }

    #[test]
    fn test_empty_body_is_still_encoded() {
        let hab = encode_header_and_body(&[0x08, 0x01], &[]);
        assert_eq!(hab, vec![0x0a, 0x02, 0x08, 0x01, 0x12, 0x00]);
    }

    #[test]
    fn test_absent_encryption_scheme_means_none() {
        let header = decode_header(&[0x08, 0x02]).unwrap();
        assert_eq!(header.declared_sig_scheme(), Some(SigScheme::EcdsaP256Sha256));
        assert_eq!(header.declared_enc_scheme(), Some(EncScheme::None));
        assert_eq!(header.declared_associated_data_len(), 0);
    }

    #[test]
    fn test_unverified_header_exposes_builder_fields() {
        let key = SigningKey::from(SecretKey::from_bytes(&[3u8; 32]));
        let msg = SecureMessageBuilder::with_rng(StdRng::seed_from_u64(1))
            .with_public_metadata(b"meta".to_vec())
            .with_verification_key_id(b"vk-1".to_vec())
            .with_associated_data(b"ad".to_vec())
            .build_signed_cleartext_message(&key, SigType::HmacSha256, b"hello")
            .unwrap();

        let header = get_unverified_header(&msg).unwrap();
        assert_eq!(header.declared_sig_scheme(), Some(SigScheme::HmacSha256));
        assert_eq!(header.declared_enc_scheme(), Some(EncScheme::None));
        assert_eq!(header.public_metadata.as_deref(), Some(&b"meta"[..]));
        assert_eq!(header.verification_key_id.as_deref(), Some(&b"vk-1"[..]));
        assert_eq!(header.decryption_key_id, None);
        assert_eq!(header.iv, None);
        assert_eq!(header.associated_data_length, Some(2));
    }

    #[test]
    fn test_unverified_header_requires_signature_scheme() {
        let msg = message_with_header(&Header::default());
        assert!(matches!(
            get_unverified_header(&msg),
            Err(SecureMessageError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_unverified_header_rejects_unknown_schemes() {
        let unknown_sig = Header {
            signature_scheme: Some(9),
            ..Default::default()
        };
        assert!(matches!(
            get_unverified_header(&message_with_header(&unknown_sig)),
            Err(SecureMessageError::MalformedMessage(_))
        ));

        let unknown_enc = Header {
            signature_scheme: Some(SigScheme::HmacSha256 as i32),
            encryption_scheme: Some(7),
            ..Default::default()
        };
        assert!(matches!(
            get_unverified_header(&message_with_header(&unknown_enc)),
            Err(SecureMessageError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_garbage_container_is_malformed() {
        let msg = SecureMessage {
            header_and_body: vec![0x0a, 0x05, 0x01],
            signature: Vec::new(),
        };
        assert!(matches!(
            get_unverified_header(&msg),
            Err(SecureMessageError::MalformedMessage(_))
        ));
        assert!(matches!(
            SecureMessage::from_bytes(&[0xff]),
            Err(SecureMessageError::MalformedMessage(_))
        ));
    }

    #[test]
    fn test_secure_message_bytes_round_trip() {
        let key = SigningKey::from(SecretKey::from_bytes(&[3u8; 32]));
        let msg = SecureMessageBuilder::with_rng(StdRng::seed_from_u64(2))
            .build_signed_cleartext_message(&key, SigType::HmacSha256, b"")
            .unwrap();
        let decoded = SecureMessage::from_bytes(&msg.to_bytes()).unwrap();
        assert_eq!(decoded, msg);
    }
}
