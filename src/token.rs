// token.rs - Token views produced by the tokenizer.
//
// A Token borrows its source array and records only bounds. Nothing is
// copied until `to_owned_string` or `to_owned_array` is called.

use std::fmt;
use std::ops::Range;

use crate::element::Element;
use crate::error::ScanError;
use crate::window::bounded;

// === Bounds ===

/// Start and length of a token, without a source reference.
///
/// Returned by [`Tokenizer::advance_fast`](crate::tokenizer::Tokenizer::advance_fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub index: usize,
    pub length: usize,
}

impl Bounds {
    pub const fn new(index: usize, length: usize) -> Self {
        Bounds { index, length }
    }

    /// One past the last element.
    pub const fn end(&self) -> usize {
        self.index + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.index..self.end()
    }
}

impl From<Bounds> for Range<usize> {
    fn from(b: Bounds) -> Self {
        b.range()
    }
}

// === Token ===

/// An immutable, zero-copy span of a source array.
///
/// # Examples
///
/// ```
/// use arrayscan::token::Token;
///
/// let line = b"key=value";
/// let tok = Token::new(4, 5, &line[..]).unwrap();
/// assert_eq!(tok.as_slice(), b"value");
/// assert_eq!(tok.to_owned_string(), "value");
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Token<'a, T: Element> {
    index: usize,
    length: usize,
    source: &'a [T],
}

/// Token over a byte array.
pub type ByteToken<'a> = Token<'a, u8>;
/// Token over a character array.
pub type CharToken<'a> = Token<'a, char>;

impl<'a, T: Element> Token<'a, T> {
    /// Create a token, checking that `(index, length)` lies inside `source`.
    pub fn new(index: usize, length: usize, source: &'a [T]) -> Result<Self, ScanError> {
        bounded(source, index, length)?;
        Ok(Token {
            index,
            length,
            source,
        })
    }

    /// Bounds already validated by the tokenizer.
    pub(crate) fn from_bounds(bounds: Bounds, source: &'a [T]) -> Self {
        debug_assert!(bounds.end() <= source.len());
        Token {
            index: bounds.index,
            length: bounds.length,
            source,
        }
    }

    /// Index of the first element of the token in the source.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of elements in the token.
    pub fn length(&self) -> usize {
        self.length
    }

    /// The whole source array the token refers into.
    pub fn source(&self) -> &'a [T] {
        self.source
    }

    /// One past the last element.
    pub fn end(&self) -> usize {
        self.index + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.index..self.end()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.index, self.length)
    }

    /// The token's elements, borrowed from the source.
    pub fn as_slice(&self) -> &'a [T] {
        &self.source[self.index..self.index + self.length]
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Decode the token into a new `String`.
    ///
    /// Bytes are decoded as UTF-8 and UTF-16 code units as UTF-16, both
    /// lossily.
    pub fn to_owned_string(&self) -> String {
        T::decode(self.as_slice())
    }

    /// Copy the token's elements into a new vector.
    pub fn to_owned_array(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T: Element> fmt::Debug for Token<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("index", &self.index)
            .field("length", &self.length)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Element> fmt::Display for Token<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_owned_string())
    }
}
