// rfc2217-rs/rfc2217/src/protocol/commands/signature.rs

/// Encode a SIGNATURE payload. An empty signature asks the peer for its own.
pub fn encode_signature(signature: &[u8], buf: &mut Vec<u8>) {
    buf.extend_from_slice(signature);
}

/// Decode a SIGNATURE payload. Any byte sequence is a valid signature.
pub fn decode_signature(payload: &[u8]) -> Vec<u8> {
    payload.to_vec()
}

/// Signature text for display. Bytes are ISO-8859-1 so every byte maps to
/// exactly one char.
pub fn signature_text(signature: &[u8]) -> String {
    signature.iter().map(|&b| b as char).collect()
}

/// Signature bytes for a text in ISO-8859-1. Chars outside it become `?`.
pub fn signature_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_roundtrip() {
        let bytes = signature_bytes("ser2net 4.3 \u{e9}");
        assert_eq!(bytes.last(), Some(&0xe9));
        assert_eq!(signature_text(&bytes), "ser2net 4.3 \u{e9}");
    }

    #[test]
    fn non_latin1_chars_become_question_marks() {
        assert_eq!(signature_bytes("a\u{263a}b"), b"a?b".to_vec());
        assert_eq!(signature_bytes("\u{1f600}"), b"?".to_vec());
    }

    #[test]
    fn encode_appends_raw_bytes() {
        let mut buf = vec![44, 100];
        encode_signature(b"jvser", &mut buf);
        assert_eq!(buf, vec![44, 100, b'j', b'v', b's', b'e', b'r']);
        assert_eq!(decode_signature(&buf[2..]), b"jvser".to_vec());
    }
}
