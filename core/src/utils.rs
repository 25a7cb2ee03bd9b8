/// Concatenate two byte slices, treating `None` as empty.
#[inline]
pub fn concat(a: &[u8], b: Option<&[u8]>) -> Vec<u8> {
    let b = b.unwrap_or_default();
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// Render opaque bytes for logs: printable ASCII as a byte string, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Render an optional key id for logs.
pub fn fmt_key_id(id: Option<&[u8]>) -> String {
    match id {
        Some(b) => fmt_bytes(b),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concat_handles_absent_suffix() {
        assert_eq!(concat(b"ab", None), b"ab".to_vec());
        assert_eq!(concat(b"ab", Some(b"cd")), b"abcd".to_vec());
        assert_eq!(concat(b"", Some(b"")), Vec::<u8>::new());
    }

    #[test]
    fn fmt_bytes_ascii_and_binary() {
        assert_eq!(fmt_bytes(b"key-1"), r#"b"key-1""#);
        assert_eq!(fmt_bytes(&[0x00, 0xff]), "0x00ff");
        assert_eq!(fmt_key_id(None), "-");
    }
}
