// element.rs - The array element trait.
//
// Every search and tokenizer operation is written once against `Element`.
// The scan hooks have plain linear defaults; element types with a faster
// primitive (bytes via memchr) override them.

use std::fmt;

/// An array element that can be searched and tokenized.
///
/// Only equality is needed for matching. The hooks below operate on an
/// already-validated window slice and return offsets relative to it.
pub trait Element: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Human-readable element kind (e.g. "byte", "char").
    fn kind() -> &'static str;

    /// Offset of the first element equal to `value`.
    #[inline]
    fn find(haystack: &[Self], value: Self) -> Option<usize> {
        haystack.iter().position(|&e| e == value)
    }

    /// Offset of the last element equal to `value`.
    #[inline]
    fn rfind(haystack: &[Self], value: Self) -> Option<usize> {
        haystack.iter().rposition(|&e| e == value)
    }

    /// Offset of the first element that is a member of `set`.
    #[inline]
    fn find_any(haystack: &[Self], set: &[Self]) -> Option<usize> {
        haystack.iter().position(|e| set.contains(e))
    }

    /// Offset of the last element that is a member of `set`.
    #[inline]
    fn rfind_any(haystack: &[Self], set: &[Self]) -> Option<usize> {
        haystack.iter().rposition(|e| set.contains(e))
    }

    /// Number of leading elements that are members of `set`.
    #[inline]
    fn count_leading_any(haystack: &[Self], set: &[Self]) -> usize {
        haystack.iter().take_while(|e| set.contains(e)).count()
    }

    /// Decode a run of elements into an owned `String`.
    ///
    /// Malformed sequences are replaced with U+FFFD.
    fn decode(elements: &[Self]) -> String;
}
