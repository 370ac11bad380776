// elements/byte.rs - Byte elements.
// `u8` routes single-byte and small-set scans through memchr; larger sets
// use a 256-entry membership map. `i8` covers signed byte arrays.

use memchr::{memchr, memchr2, memchr3, memrchr, memrchr2, memrchr3};

use crate::element::Element;

pub const BYTE_MAP_SIZE: usize = 256;

/// Membership map for a set of bytes.
///
/// Built once per scan; lookups are a single indexed load.
#[derive(Clone)]
pub struct ByteSet {
    map: [bool; BYTE_MAP_SIZE],
}

impl ByteSet {
    /// Build a membership map from the bytes in `set`.
    pub fn new(set: &[u8]) -> Self {
        let mut map = [false; BYTE_MAP_SIZE];
        for &b in set {
            map[b as usize] = true;
        }
        ByteSet { map }
    }

    /// Returns `true` if `b` is a member.
    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.map[b as usize]
    }

    /// Offset of the first member byte in `text`.
    pub fn find(&self, text: &[u8]) -> Option<usize> {
        text.iter().position(|&b| self.map[b as usize])
    }

    /// Offset of the last member byte in `text`.
    pub fn rfind(&self, text: &[u8]) -> Option<usize> {
        text.iter().rposition(|&b| self.map[b as usize])
    }

    /// Number of leading member bytes in `text`.
    pub fn count_leading(&self, text: &[u8]) -> usize {
        text.iter().take_while(|&&b| self.map[b as usize]).count()
    }
}

impl std::fmt::Debug for ByteSet {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let members: Vec<u8> = (0..=u8::MAX).filter(|&b| self.contains(b)).collect();
        f.debug_tuple("ByteSet").field(&members).finish()
    }
}

impl Element for u8 {
    fn kind() -> &'static str {
        "byte"
    }

    #[inline]
    fn find(haystack: &[u8], value: u8) -> Option<usize> {
        memchr(value, haystack)
    }

    #[inline]
    fn rfind(haystack: &[u8], value: u8) -> Option<usize> {
        memrchr(value, haystack)
    }

    fn find_any(haystack: &[u8], set: &[u8]) -> Option<usize> {
        match *set {
            [] => None,
            [a] => memchr(a, haystack),
            [a, b] => memchr2(a, b, haystack),
            [a, b, c] => memchr3(a, b, c, haystack),
            _ => ByteSet::new(set).find(haystack),
        }
    }

    fn rfind_any(haystack: &[u8], set: &[u8]) -> Option<usize> {
        match *set {
            [] => None,
            [a] => memrchr(a, haystack),
            [a, b] => memrchr2(a, b, haystack),
            [a, b, c] => memrchr3(a, b, c, haystack),
            _ => ByteSet::new(set).rfind(haystack),
        }
    }

    fn count_leading_any(haystack: &[u8], set: &[u8]) -> usize {
        match *set {
            [] => 0,
            [a] => haystack.iter().take_while(|&&b| b == a).count(),
            _ => ByteSet::new(set).count_leading(haystack),
        }
    }

    fn decode(elements: &[u8]) -> String {
        String::from_utf8_lossy(elements).into_owned()
    }
}

impl Element for i8 {
    fn kind() -> &'static str {
        "signed byte"
    }

    fn decode(elements: &[i8]) -> String {
        let bytes: Vec<u8> = elements.iter().map(|&b| b as u8).collect();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}
