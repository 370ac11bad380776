// error.rs - Error types for arrayscan.
//
// Every failure is a caller precondition violation. Variants are grouped
// into the two kinds callers usually branch on: bad arguments and
// tokenizer misuse before a source is set.

use thiserror::Error;

/// The two broad classes of [`ScanError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A window, pattern or source argument was unusable.
    InvalidArgument,
    /// A tokenizer was used before `set_source`.
    InvalidState,
}

/// Error type for search and tokenizer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// `index + length` does not fit inside an array of `len` elements.
    #[error("index [{index}] + length [{length}] must be <= array length [{len}]")]
    OutOfBounds {
        index: usize,
        length: usize,
        len: usize,
    },
    /// A subsequence pattern (or `Exact` delimiter) was empty.
    #[error("pattern must contain at least one element")]
    EmptyPattern,
    /// The searched window cannot hold even one occurrence of the pattern.
    #[error("window length [{window}] must be >= pattern length [{pattern}]")]
    PatternTooLong { pattern: usize, window: usize },
    /// `Exact` tokenization over a source shorter than the delimiter.
    #[error(
        "delimiter match is Exact, but source length [{source_len}] was < delimiters length [{delimiters}]"
    )]
    SourceShorterThanDelimiters { source_len: usize, delimiters: usize },
    /// The tokenizer has no source.
    #[error("tokenizer has no source, set_source() must be called first")]
    NotInitialized,
}

impl ScanError {
    /// Returns the broad class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::OutOfBounds { .. }
            | ScanError::EmptyPattern
            | ScanError::PatternTooLong { .. }
            | ScanError::SourceShorterThanDelimiters { .. } => ErrorKind::InvalidArgument,
            ScanError::NotInitialized => ErrorKind::InvalidState,
        }
    }

    /// Shorthand for `kind() == ErrorKind::InvalidArgument`.
    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    /// Shorthand for `kind() == ErrorKind::InvalidState`.
    pub fn is_invalid_state(&self) -> bool {
        self.kind() == ErrorKind::InvalidState
    }
}
