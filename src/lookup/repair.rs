/// Undo a single-byte mis-decode of UTF-8 text.
///
/// Every char of `s` is taken as the byte with the same value and the bytes
/// are decoded again as UTF-8; malformed sequences turn into U+FFFD.
///
/// Chars above U+00FF (an HTML character reference resolved by the parser,
/// say) cannot come from such a mis-decode. They go in as their own UTF-8
/// bytes, which always start a fresh sequence, so they come back unchanged
/// while the single-byte runs around them are still repaired.
pub fn repair_encoding(s: &str) -> String {
    if s.is_ascii() {
        return s.to_string();
    }

    let mut bytes = Vec::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(c) {
            Ok(byte) => bytes.push(byte),
            Err(_) => {
                let mut buf = [0u8; 4];
                bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    let (decoded, _had_errors) = encoding_rs::UTF_8.decode_without_bom_handling(&bytes);
    decoded.into_owned()
}

/// The inverse view: raw bytes seen one char per byte (ISO-8859-1).
pub fn latin1_view(bytes: &[u8]) -> String {
    encoding_rs::mem::decode_latin1(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repairs_mis_decoded_han() {
        let garbled = latin1_view("操".as_bytes());
        assert_eq!(garbled.chars().count(), 3);
        assert_eq!(repair_encoding(&garbled), "操");
    }

    #[test]
    fn test_repairs_mixed_ascii_and_phonetics() {
        let garbled = latin1_view("英 [ˈtest]; 美 [test]".as_bytes());
        assert_eq!(repair_encoding(&garbled), "英 [ˈtest]; 美 [test]");
    }

    #[test]
    fn test_ascii_is_unchanged() {
        assert_eq!(repair_encoding("press enter"), "press enter");
        assert_eq!(repair_encoding(""), "");
    }

    #[test]
    fn test_text_above_latin1_is_passed_through() {
        assert_eq!(repair_encoding("测试"), "测试");
        assert_eq!(repair_encoding("👻 翻译出错啦"), "👻 翻译出错啦");
    }

    #[test]
    fn test_wide_chars_do_not_block_repair_of_their_neighbours() {
        let garbled = format!(
            "{}\u{8bd5}{}",
            latin1_view("n. 测试".as_bytes()),
            latin1_view("验".as_bytes())
        );
        assert_eq!(repair_encoding(&garbled), "n. 测试试验");
    }

    #[test]
    fn test_wide_char_after_truncated_sequence_survives() {
        let truncated = latin1_view(&"测".as_bytes()[..2]);
        assert_eq!(repair_encoding(&format!("{truncated}试")), "\u{fffd}试");
        // A lone Latin-1 char next to wide text is a malformed byte.
        assert_eq!(repair_encoding("café 测试"), "caf\u{fffd} 测试");
    }

    #[test]
    fn test_invalid_sequence_becomes_replacement_char() {
        // 0xE9 alone is a truncated three-byte lead.
        assert_eq!(repair_encoding("caf\u{e9}"), "caf\u{fffd}");
        let truncated = latin1_view(&"操".as_bytes()[..2]);
        assert_eq!(repair_encoding(&truncated), "\u{fffd}");
    }
}
