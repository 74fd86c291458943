use super::PhenopacketFormat;

/// The number of leading bytes that are inspected
const SNIFF_LENGTH: usize = 32;

/// Guesses the format from the first bytes of the input
///
/// - JSON if the first non-whitespace character is `{`
/// - YAML if the first bytes are printable text with a `key: value` separator
/// - protobuf otherwise
///
/// # Examples
///
/// ```
/// use phenopacket_tools::io::{sniff, PhenopacketFormat};
///
/// assert_eq!(sniff(b"  \n{\"id\": \"a\"}"), PhenopacketFormat::Json);
/// assert_eq!(sniff(b"id: a\nsubject:\n  id: b\n"), PhenopacketFormat::Yaml);
/// assert_eq!(sniff(&[0x0a, 0x01, 0x61, 0x12, 0x03]), PhenopacketFormat::Protobuf);
/// ```
pub fn sniff(bytes: &[u8]) -> PhenopacketFormat {
    let head = &bytes[..bytes.len().min(SNIFF_LENGTH)];

    if head
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|byte| *byte == b'{')
    {
        return PhenopacketFormat::Json;
    }

    if is_text(head) && head.contains(&b':') {
        PhenopacketFormat::Yaml
    } else {
        PhenopacketFormat::Protobuf
    }
}

/// `true` if the bytes are UTF-8 without control characters
///
/// A multi-byte character that is cut off at the end is accepted.
fn is_text(bytes: &[u8]) -> bool {
    let text = match std::str::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) if err.error_len().is_none() => {
            // valid up to a truncated trailing character
            match std::str::from_utf8(&bytes[..err.valid_up_to()]) {
                Ok(text) => text,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };
    !text.is_empty()
        && text
            .chars()
            .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t'))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_input_is_protobuf() {
        assert_eq!(sniff(b""), PhenopacketFormat::Protobuf);
    }

    #[test]
    fn yaml_with_document_marker() {
        assert_eq!(sniff(b"---\nid: arbitrary.id\n"), PhenopacketFormat::Yaml);
    }

    #[test]
    fn yaml_with_truncated_unicode() {
        let mut bytes = b"id: \"L\xc3\xa9onard\"\nsubject: ".to_vec();
        bytes.resize(31, b'x');
        bytes.extend_from_slice("é".as_bytes());
        assert_eq!(sniff(&bytes), PhenopacketFormat::Yaml);
    }

    #[test]
    fn protobuf_with_text_payload() {
        // field 1, length 4, "id.1", then field 2
        let bytes = [0x0a, 0x04, b'i', b'd', b'.', b'1', 0x12, 0x00];
        assert_eq!(sniff(&bytes), PhenopacketFormat::Protobuf);
    }
}
