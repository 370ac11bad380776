// tokenizer.rs - Delimiter tokenizer over a bounded window.
//
// A single-owner cursor that carves a source window into spans separated by
// delimiters. Each advance skips the run of delimiters at the cursor and
// then searches for the next delimiter; the span between is the token.

use std::cell::Cell;
use std::marker::PhantomData;

use tracing::trace;

use crate::element::Element;
use crate::error::ScanError;
use crate::search::{find_any_within, find_slice_within, skip_any_run_within, skip_slice_run_within};
use crate::token::{Bounds, Token};
use crate::window::bounded;

/// How delimiters are matched against the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DelimiterMatch {
    /// Any single element of the delimiter set ends a token.
    #[default]
    Any,
    /// Only the complete delimiter sequence ends a token.
    Exact,
}

/// Cursor state of a tokenizer that has a source.
#[derive(Debug, Clone)]
struct Cursor<'a, T: Element> {
    source: &'a [T],
    delimiters: &'a [T],
    match_type: DelimiterMatch,
    index: usize,
    length: usize,
    end: usize,
    /// Start of the last token found.
    ts: Option<usize>,
    /// End of the last token found; the next scan starts here.
    te: Option<usize>,
    exhausted: bool,
}

impl<T: Element> Cursor<'_, T> {
    fn step(&mut self) -> Option<Bounds> {
        if self.exhausted {
            return None;
        }

        let from = self.te.unwrap_or(self.index);
        let (ts, te) = match self.match_type {
            DelimiterMatch::Any => {
                let ts = skip_any_run_within(self.source, self.delimiters, from, self.end);
                (ts, find_any_within(self.source, self.delimiters, ts, self.end))
            }
            DelimiterMatch::Exact => {
                let ts = skip_slice_run_within(self.source, self.delimiters, from, self.end);
                (ts, find_slice_within(self.source, self.delimiters, ts, self.end))
            }
        };
        self.ts = Some(ts);
        self.te = te;

        match te {
            Some(te) if ts < self.end && te < self.end => Some(Bounds::new(ts, te - ts)),
            _ => {
                self.exhausted = true;
                trace!(at = ts, end = self.end, "tokenizer exhausted");
                None
            }
        }
    }
}

/// Delimiter tokenizer over a byte or character array.
///
/// A tokenizer starts uninitialized; [`set_source`](Self::set_source) (or a
/// variant) makes it ready. Every advance then yields the next token until
/// none remain, after which the tokenizer stays exhausted until the source is
/// set again.
///
/// Runs of delimiters are skipped, so no empty token is ever produced. A
/// trailing segment that is not followed by a delimiter is not yielded.
///
/// A tokenizer is not `Sync`; share it across threads only behind a lock.
///
/// # Examples
///
/// ```
/// use arrayscan::tokenizer::{DelimiterMatch, Tokenizer};
///
/// let mut tk = Tokenizer::new();
/// tk.set_source_with(b"field1:field2::field3:", b":", DelimiterMatch::Exact).unwrap();
///
/// let mut fields = Vec::new();
/// while let Some(tok) = tk.advance().unwrap() {
///     fields.push(tok.to_owned_string());
/// }
/// assert_eq!(fields, ["field1", "field2", "field3"]);
/// ```
pub struct Tokenizer<'a, T: Element> {
    cursor: Option<Cursor<'a, T>>,
    _not_sync: PhantomData<Cell<()>>,
}

/// Tokenizer over a byte array.
pub type ByteTokenizer<'a> = Tokenizer<'a, u8>;
/// Tokenizer over a character array.
pub type CharTokenizer<'a> = Tokenizer<'a, char>;

impl<'a, T: Element> Tokenizer<'a, T> {
    /// Create an uninitialized tokenizer.
    pub fn new() -> Self {
        Tokenizer {
            cursor: None,
            _not_sync: PhantomData,
        }
    }

    /// Tokenize all of `source` on any element of `delimiters`.
    pub fn set_source(&mut self, source: &'a [T], delimiters: &'a [T]) -> Result<(), ScanError> {
        self.set_source_in(source, delimiters, DelimiterMatch::Any, 0, source.len())
    }

    /// Tokenize all of `source` using `match_type`.
    pub fn set_source_with(
        &mut self,
        source: &'a [T],
        delimiters: &'a [T],
        match_type: DelimiterMatch,
    ) -> Result<(), ScanError> {
        self.set_source_in(source, delimiters, match_type, 0, source.len())
    }

    /// Tokenize `source` from `index` to its end.
    pub fn set_source_from(
        &mut self,
        source: &'a [T],
        delimiters: &'a [T],
        match_type: DelimiterMatch,
        index: usize,
    ) -> Result<(), ScanError> {
        let length = source.len().saturating_sub(index);
        self.set_source_in(source, delimiters, match_type, index, length)
    }

    /// Tokenize the window `(index, length)` of `source`.
    ///
    /// Valid in any state; the cursor is re-initialized. On error the
    /// tokenizer is left untouched.
    pub fn set_source_in(
        &mut self,
        source: &'a [T],
        delimiters: &'a [T],
        match_type: DelimiterMatch,
        index: usize,
        length: usize,
    ) -> Result<(), ScanError> {
        let range = bounded(source, index, length)?;
        if match_type == DelimiterMatch::Exact {
            if delimiters.is_empty() {
                return Err(ScanError::EmptyPattern);
            }
            if source.len() < delimiters.len() {
                return Err(ScanError::SourceShorterThanDelimiters {
                    source_len: source.len(),
                    delimiters: delimiters.len(),
                });
            }
        }

        trace!(
            kind = T::kind(),
            ?match_type,
            index,
            length,
            delimiters = delimiters.len(),
            "tokenizer source set"
        );
        self.cursor = Some(Cursor {
            source,
            delimiters,
            match_type,
            index,
            length,
            end: range.end,
            ts: None,
            te: None,
            exhausted: false,
        });
        Ok(())
    }

    /// Return to the uninitialized state, dropping the source.
    pub fn reset(&mut self) {
        if self.cursor.take().is_some() {
            trace!("tokenizer reset");
        }
    }

    fn cursor(&self) -> Result<&Cursor<'a, T>, ScanError> {
        self.cursor.as_ref().ok_or(ScanError::NotInitialized)
    }

    /// Bounds of the next token, or `None` once the window is exhausted.
    ///
    /// This is the allocation-free form of [`advance`](Self::advance); both
    /// run the same scan.
    pub fn advance_fast(&mut self) -> Result<Option<Bounds>, ScanError> {
        let cursor = self.cursor.as_mut().ok_or(ScanError::NotInitialized)?;
        Ok(cursor.step())
    }

    /// The next token, or `None` once the window is exhausted.
    pub fn advance(&mut self) -> Result<Option<Token<'a, T>>, ScanError> {
        let cursor = self.cursor.as_mut().ok_or(ScanError::NotInitialized)?;
        Ok(cursor.step().map(|b| Token::from_bounds(b, cursor.source)))
    }

    /// Bounds of the part of the window no token has consumed yet, after
    /// skipping the delimiter run at the cursor. `None` if nothing is left.
    ///
    /// Once the tokenizer is exhausted this is the unterminated trailing
    /// segment that [`advance`](Self::advance) does not yield.
    pub fn remaining(&self) -> Result<Option<Bounds>, ScanError> {
        let c = self.cursor()?;
        let from = if c.exhausted {
            c.ts.unwrap_or(c.index)
        } else {
            c.te.unwrap_or(c.index)
        };
        let from = match c.match_type {
            DelimiterMatch::Any => skip_any_run_within(c.source, c.delimiters, from, c.end),
            DelimiterMatch::Exact => skip_slice_run_within(c.source, c.delimiters, from, c.end),
        };
        Ok((from < c.end).then(|| Bounds::new(from, c.end - from)))
    }

    /// Iterate over the remaining tokens.
    pub fn tokens(&mut self) -> Result<Tokens<'_, 'a, T>, ScanError> {
        self.cursor()?;
        Ok(Tokens { tokenizer: self })
    }

    /// Start of the configured window.
    pub fn index(&self) -> Result<usize, ScanError> {
        Ok(self.cursor()?.index)
    }

    /// Length of the configured window.
    pub fn length(&self) -> Result<usize, ScanError> {
        Ok(self.cursor()?.length)
    }

    pub fn source(&self) -> Result<&'a [T], ScanError> {
        Ok(self.cursor()?.source)
    }

    pub fn delimiters(&self) -> Result<&'a [T], ScanError> {
        Ok(self.cursor()?.delimiters)
    }

    pub fn match_type(&self) -> Result<DelimiterMatch, ScanError> {
        Ok(self.cursor()?.match_type)
    }

    /// Returns `true` once a source has been set.
    pub fn is_ready(&self) -> bool {
        self.cursor.is_some()
    }

    /// Returns `true` if no further token will be produced for the current
    /// source. An uninitialized tokenizer is not exhausted.
    pub fn is_exhausted(&self) -> bool {
        self.cursor.as_ref().is_some_and(|c| c.exhausted)
    }
}

impl<T: Element> Default for Tokenizer<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> std::fmt::Debug for Tokenizer<'_, T> {
    #[cfg_attr(coverage_nightly, coverage(off))]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.cursor {
            None => f.write_str("Tokenizer(uninitialized)"),
            Some(c) => f
                .debug_struct("Tokenizer")
                .field("match_type", &c.match_type)
                .field("index", &c.index)
                .field("length", &c.length)
                .field("token_start", &c.ts)
                .field("token_end", &c.te)
                .field("exhausted", &c.exhausted)
                .finish(),
        }
    }
}

// === Tokens ===

/// Iterator over the tokens of a [`Tokenizer`].
pub struct Tokens<'t, 'a, T: Element> {
    tokenizer: &'t mut Tokenizer<'a, T>,
}

impl<'a, T: Element> Iterator for Tokens<'_, 'a, T> {
    type Item = Token<'a, T>;

    fn next(&mut self) -> Option<Token<'a, T>> {
        let cursor = self.tokenizer.cursor.as_mut()?;
        cursor.step().map(|b| Token::from_bounds(b, cursor.source))
    }
}

impl<T: Element> std::iter::FusedIterator for Tokens<'_, '_, T> {}
