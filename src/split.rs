// split.rs - Field splitting on top of the tokenizer.
//
// One-shot helpers for the common "split this record into fields" loop.
// Results are kept inline for typical short records.

use smallvec::SmallVec;
use tracing::debug;

use crate::element::Element;
use crate::error::ScanError;
use crate::token::{Bounds, Token};
use crate::tokenizer::{DelimiterMatch, Tokenizer};

/// Fields of a record, inline up to 8.
pub type Fields<'a, T> = SmallVec<[Token<'a, T>; 8]>;

/// Field bounds of a record, inline up to 8.
pub type FieldBounds = SmallVec<[Bounds; 8]>;

/// Split `source` into delimiter-terminated fields.
///
/// Follows the tokenizer rules: delimiter runs never produce empty fields
/// and an unterminated trailing segment is not included.
///
/// ```
/// use arrayscan::split::fields;
/// use arrayscan::tokenizer::DelimiterMatch;
///
/// let f = fields(b"GET /index.html HTTP/1.1\r\n", b" \r\n", DelimiterMatch::Any).unwrap();
/// let parts: Vec<_> = f.iter().map(|t| t.as_slice()).collect();
/// assert_eq!(parts, [&b"GET"[..], &b"/index.html"[..], &b"HTTP/1.1"[..]]);
/// ```
pub fn fields<'a, T: Element>(
    source: &'a [T],
    delimiters: &'a [T],
    match_type: DelimiterMatch,
) -> Result<Fields<'a, T>, ScanError> {
    let mut tk = Tokenizer::new();
    tk.set_source_with(source, delimiters, match_type)?;
    let out: Fields<'a, T> = tk.tokens()?.collect();
    debug!(count = out.len(), spilled = out.spilled(), "split fields");
    Ok(out)
}

/// Like [`fields`], but returns bounds only.
pub fn field_bounds<T: Element>(
    source: &[T],
    delimiters: &[T],
    match_type: DelimiterMatch,
) -> Result<FieldBounds, ScanError> {
    let mut tk = Tokenizer::new();
    tk.set_source_with(source, delimiters, match_type)?;
    let mut out = FieldBounds::new();
    while let Some(b) = tk.advance_fast()? {
        out.push(b);
    }
    Ok(out)
}

/// Join tokens back together, placing `delimiter` after each one.
///
/// Since every field the tokenizer yields was terminated by a delimiter,
/// re-splitting the result on the same delimiter yields the same fields.
pub fn rejoin<T: Element>(tokens: &[Token<'_, T>], delimiter: &[T]) -> Vec<T> {
    let total = tokens.iter().map(|t| t.length() + delimiter.len()).sum();
    let mut out = Vec::with_capacity(total);
    for tok in tokens {
        out.extend_from_slice(tok.as_slice());
        out.extend_from_slice(delimiter);
    }
    out
}
