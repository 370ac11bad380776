// elements/wide.rs - Wide elements.
// UTF-16 code units and Unicode scalar values. Matching compares raw
// elements; decoding only happens on explicit materialization.

use crate::element::Element;

impl Element for u16 {
    fn kind() -> &'static str {
        "utf-16 code unit"
    }

    fn decode(elements: &[u16]) -> String {
        String::from_utf16_lossy(elements)
    }
}

impl Element for char {
    fn kind() -> &'static str {
        "char"
    }

    fn decode(elements: &[char]) -> String {
        elements.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf16_decode() {
        let units: Vec<u16> = "héllo".encode_utf16().collect();
        assert_eq!(u16::decode(&units), "héllo");
        // Lone surrogate
        assert_eq!(u16::decode(&[0xd800, 0x61]), "\u{fffd}a");
    }

    #[test]
    fn char_decode_and_find() {
        let chars: Vec<char> = "a:b:c".chars().collect();
        assert_eq!(char::decode(&chars[2..]), "b:c");
        assert_eq!(char::find(&chars, ':'), Some(1));
        assert_eq!(char::rfind(&chars, ':'), Some(3));
        assert_eq!(char::count_leading_any(&chars, &['a', ':']), 2);
    }
}
