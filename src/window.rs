// window.rs - Bounded (index, length) windows over an array.

use std::ops::Range;

use crate::error::ScanError;

/// An `(index, length)` window over an array.
///
/// A window is only meaningful relative to a specific array; [`Window::check`]
/// validates it against that array's length and yields the element range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Window {
    pub index: usize,
    pub length: usize,
}

impl Window {
    /// Window starting at `index` spanning `length` elements.
    pub const fn new(index: usize, length: usize) -> Self {
        Window { index, length }
    }

    /// Window covering an entire array of `len` elements.
    pub const fn full(len: usize) -> Self {
        Window { index: 0, length: len }
    }

    /// Window from `index` to the end of an array of `len` elements.
    ///
    /// An `index` past the end produces a window that fails [`Window::check`].
    pub const fn from_index(index: usize, len: usize) -> Self {
        Window {
            index,
            length: len.saturating_sub(index),
        }
    }

    /// One past the last element, or `None` on overflow.
    pub fn end(&self) -> Option<usize> {
        self.index.checked_add(self.length)
    }

    /// Validate against an array of `len` elements.
    pub fn check(&self, len: usize) -> Result<Range<usize>, ScanError> {
        match self.end() {
            Some(end) if end <= len => Ok(self.index..end),
            _ => Err(ScanError::OutOfBounds {
                index: self.index,
                length: self.length,
                len,
            }),
        }
    }
}

/// Validate `(index, length)` against `array`, returning the element range.
#[inline]
pub(crate) fn bounded<T>(array: &[T], index: usize, length: usize) -> Result<Range<usize>, ScanError> {
    Window::new(index, length).check(array.len())
}
