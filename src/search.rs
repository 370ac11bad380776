// search.rs - Bounded-window array search.
//
// Forward/backward scans for a single element, a contiguous subsequence,
// or any member of a set, plus "first index after" run skipping. Each
// operation has a whole-array form and an `_in` form taking an explicit
// `(index, length)` window. All positions returned are absolute indices
// into the array, never offsets into the window.

use std::ops::Range;

use crate::element::Element;
use crate::error::ScanError;
use crate::window::bounded;

// === Unchecked scans ===
// These operate on `start..end` that the caller has already validated and
// never fail. The tokenizer calls them directly so that a remaining window
// shorter than the delimiter reads as "no boundary" instead of an error.

/// Length of the common prefix of `a` and `b`.
#[inline]
fn matched_prefix<T: Element>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// Length of the common suffix of `a` and `b`.
#[inline]
fn matched_suffix<T: Element>(a: &[T], b: &[T]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

/// Forward subsequence search with skip-ahead.
///
/// After a partial match of `j` elements at `i`, scanning resumes at
/// `i + max(j, 1)`. This is not a complete substring search: an occurrence that
/// starts inside a partially matched prefix is skipped (pattern `aab` is not
/// found in `aaab`).
pub(crate) fn find_slice_within<T: Element>(
    array: &[T],
    pattern: &[T],
    start: usize,
    end: usize,
) -> Option<usize> {
    let plen = pattern.len();
    if plen == 0 || end.saturating_sub(start) < plen {
        return None;
    }
    let last = end - plen;
    let first = pattern[0];
    let mut i = start;
    while i <= last {
        // Jump to the next candidate for pattern[0].
        i += T::find(&array[i..=last], first)?;
        let j = matched_prefix(&array[i..i + plen], pattern);
        if j == plen {
            return Some(i);
        }
        i += j.max(1);
    }
    None
}

/// Backward subsequence search, the mirror of [`find_slice_within`].
///
/// The pattern's last element is anchored at the scan position; after a
/// partial match of `j` trailing elements the scan resumes at
/// `i - max(j, 1)`.
pub(crate) fn rfind_slice_within<T: Element>(
    array: &[T],
    pattern: &[T],
    start: usize,
    end: usize,
) -> Option<usize> {
    let plen = pattern.len();
    if plen == 0 || end.saturating_sub(start) < plen {
        return None;
    }
    let floor = start + plen - 1;
    let tail = pattern[plen - 1];
    let mut i = end - 1;
    loop {
        i = floor + T::rfind(&array[floor..=i], tail)?;
        let j = matched_suffix(&array[i + 1 - plen..=i], pattern);
        if j == plen {
            return Some(i + 1 - plen);
        }
        match i.checked_sub(j.max(1)) {
            Some(next) if next >= floor => i = next,
            _ => return None,
        }
    }
}

/// Index after the run of back-to-back whole occurrences of `pattern`
/// starting at `start`. A trailing partial occurrence is not consumed.
pub(crate) fn skip_slice_run_within<T: Element>(
    array: &[T],
    pattern: &[T],
    start: usize,
    end: usize,
) -> usize {
    let plen = pattern.len();
    if plen == 0 {
        return start;
    }
    let mut i = start;
    while end.saturating_sub(i) >= plen && array[i..i + plen] == *pattern {
        i += plen;
    }
    i
}

/// Index after the run of leading members of `set` starting at `start`.
#[inline]
pub(crate) fn skip_any_run_within<T: Element>(array: &[T], set: &[T], start: usize, end: usize) -> usize {
    start + T::count_leading_any(&array[start..end], set)
}

/// Index of the first member of `set` in `start..end`.
#[inline]
pub(crate) fn find_any_within<T: Element>(array: &[T], set: &[T], start: usize, end: usize) -> Option<usize> {
    T::find_any(&array[start..end], set).map(|off| start + off)
}

fn check_pattern<T>(
    array: &[T],
    pattern: &[T],
    index: usize,
    length: usize,
) -> Result<Range<usize>, ScanError> {
    if pattern.is_empty() {
        return Err(ScanError::EmptyPattern);
    }
    if length < pattern.len() {
        return Err(ScanError::PatternTooLong {
            pattern: pattern.len(),
            window: length,
        });
    }
    bounded(array, index, length)
}

// === Single element ===

/// Index of the first element equal to `value`.
///
/// ```
/// use arrayscan::search::index_of;
///
/// assert_eq!(index_of(b"a=b=c", b'='), Some(1));
/// assert_eq!(index_of(b"abc", b'='), None);
/// ```
pub fn index_of<T: Element>(array: &[T], value: T) -> Option<usize> {
    T::find(array, value)
}

/// Index of the first element equal to `value` within `(index, length)`.
pub fn index_of_in<T: Element>(
    array: &[T],
    value: T,
    index: usize,
    length: usize,
) -> Result<Option<usize>, ScanError> {
    let range = bounded(array, index, length)?;
    Ok(T::find(&array[range.clone()], value).map(|off| range.start + off))
}

/// Index of the last element equal to `value`.
pub fn last_index_of<T: Element>(array: &[T], value: T) -> Option<usize> {
    T::rfind(array, value)
}

/// Index of the last element equal to `value` within `(index, length)`.
pub fn last_index_of_in<T: Element>(
    array: &[T],
    value: T,
    index: usize,
    length: usize,
) -> Result<Option<usize>, ScanError> {
    let range = bounded(array, index, length)?;
    Ok(T::rfind(&array[range.clone()], value).map(|off| range.start + off))
}

// === Subsequence ===

/// Index of the first occurrence of `pattern`.
///
/// Uses the skip-ahead scan described on [`index_of_slice_in`].
pub fn index_of_slice<T: Element>(array: &[T], pattern: &[T]) -> Result<Option<usize>, ScanError> {
    index_of_slice_in(array, pattern, 0, array.len())
}

/// Index of the first occurrence of `pattern` within `(index, length)`.
///
/// After a partial match of `j` elements the scan resumes `j` positions
/// further on, so a match starting inside a partially matched prefix is
/// missed:
///
/// ```
/// use arrayscan::search::index_of_slice_in;
///
/// assert_eq!(index_of_slice_in(b"xx::yy", b"::", 0, 6), Ok(Some(2)));
/// assert_eq!(index_of_slice_in(b"aaab", b"aab", 0, 4), Ok(None));
/// ```
///
/// Fails with [`ScanError::EmptyPattern`] for an empty pattern and
/// [`ScanError::PatternTooLong`] if `length < pattern.len()`.
pub fn index_of_slice_in<T: Element>(
    array: &[T],
    pattern: &[T],
    index: usize,
    length: usize,
) -> Result<Option<usize>, ScanError> {
    let range = check_pattern(array, pattern, index, length)?;
    Ok(find_slice_within(array, pattern, range.start, range.end))
}

/// Index of the start of the last occurrence of `pattern`.
pub fn last_index_of_slice<T: Element>(array: &[T], pattern: &[T]) -> Result<Option<usize>, ScanError> {
    last_index_of_slice_in(array, pattern, 0, array.len())
}

/// Index of the start of the last occurrence of `pattern` within
/// `(index, length)`, scanning from the end of the window.
pub fn last_index_of_slice_in<T: Element>(
    array: &[T],
    pattern: &[T],
    index: usize,
    length: usize,
) -> Result<Option<usize>, ScanError> {
    let range = check_pattern(array, pattern, index, length)?;
    Ok(rfind_slice_within(array, pattern, range.start, range.end))
}

// === Any of a set ===

/// Index of the first element that is a member of `set`.
pub fn index_of_any<T: Element>(array: &[T], set: &[T]) -> Option<usize> {
    T::find_any(array, set)
}

/// Index of the first member of `set` within `(index, length)`.
pub fn index_of_any_in<T: Element>(
    array: &[T],
    set: &[T],
    index: usize,
    length: usize,
) -> Result<Option<usize>, ScanError> {
    let range = bounded(array, index, length)?;
    Ok(find_any_within(array, set, range.start, range.end))
}

/// Index of the last element that is a member of `set`.
pub fn last_index_of_any<T: Element>(array: &[T], set: &[T]) -> Option<usize> {
    T::rfind_any(array, set)
}

/// Index of the last member of `set` within `(index, length)`.
pub fn last_index_of_any_in<T: Element>(
    array: &[T],
    set: &[T],
    index: usize,
    length: usize,
) -> Result<Option<usize>, ScanError> {
    let range = bounded(array, index, length)?;
    Ok(T::rfind_any(&array[range.clone()], set).map(|off| range.start + off))
}

// === Run skipping ===

/// Index just past the leading run of `value`. Returns 0 if `array[0]`
/// is not `value`.
pub fn first_index_after<T: Element>(array: &[T], value: T) -> usize {
    array.iter().take_while(|&&e| e == value).count()
}

/// Index just past the run of `value` starting at `index`, bounded by the
/// window. Returns `index` unchanged if `array[index]` is not `value`.
pub fn first_index_after_in<T: Element>(
    array: &[T],
    value: T,
    index: usize,
    length: usize,
) -> Result<usize, ScanError> {
    let range = bounded(array, index, length)?;
    Ok(range.start + first_index_after(&array[range], value))
}

/// Index just past the leading run of repeated whole occurrences of
/// `pattern`.
pub fn first_index_after_slice<T: Element>(array: &[T], pattern: &[T]) -> Result<usize, ScanError> {
    first_index_after_slice_in(array, pattern, 0, array.len())
}

/// Index just past the run of repeated whole occurrences of `pattern`
/// starting at `index`.
///
/// ```
/// use arrayscan::search::first_index_after_slice_in;
///
/// assert_eq!(first_index_after_slice_in(b"::::x", b"::", 0, 5), Ok(4));
/// assert_eq!(first_index_after_slice_in(b":::x", b"::", 0, 4), Ok(2));
/// ```
pub fn first_index_after_slice_in<T: Element>(
    array: &[T],
    pattern: &[T],
    index: usize,
    length: usize,
) -> Result<usize, ScanError> {
    let range = check_pattern(array, pattern, index, length)?;
    Ok(skip_slice_run_within(array, pattern, range.start, range.end))
}

/// Index just past the leading run of members of `set`.
pub fn first_index_after_any<T: Element>(array: &[T], set: &[T]) -> usize {
    T::count_leading_any(array, set)
}

/// Index just past the run of members of `set` starting at `index`.
///
/// ```
/// use arrayscan::search::first_index_after_any_in;
///
/// assert_eq!(first_index_after_any_in(b"   abc", b" ", 0, 6), Ok(3));
/// ```
pub fn first_index_after_any_in<T: Element>(
    array: &[T],
    set: &[T],
    index: usize,
    length: usize,
) -> Result<usize, ScanError> {
    let range = bounded(array, index, length)?;
    Ok(skip_any_run_within(array, set, range.start, range.end))
}

// === Region comparison ===

/// Compare `length` elements of `source` starting at `source_index` with
/// `length` elements of `values` starting at `values_index`.
///
/// Both windows must lie inside their arrays.
pub fn region_eq<T: Element>(
    source: &[T],
    source_index: usize,
    values: &[T],
    values_index: usize,
    length: usize,
) -> Result<bool, ScanError> {
    let a = bounded(source, source_index, length)?;
    let b = bounded(values, values_index, length)?;
    Ok(source[a] == values[b])
}
