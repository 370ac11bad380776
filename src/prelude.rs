// prelude.rs - Convenient re-exports.
//
//! # Prelude
//!
//! ```
//! use arrayscan::prelude::*;
//!
//! let f = fields(b"x=1;y=2;", b";", DelimiterMatch::Any).unwrap();
//! assert_eq!(f.len(), 2);
//! assert_eq!(first_index_after_any(b"  x", b" "), 2);
//! ```

pub use crate::element::Element;
pub use crate::error::{ErrorKind, ScanError};
pub use crate::search::{
    first_index_after, first_index_after_any, first_index_after_any_in, first_index_after_in,
    first_index_after_slice, first_index_after_slice_in, index_of, index_of_any, index_of_any_in,
    index_of_in, index_of_slice, index_of_slice_in, last_index_of, last_index_of_any,
    last_index_of_any_in, last_index_of_in, last_index_of_slice, last_index_of_slice_in,
    region_eq,
};
pub use crate::split::{field_bounds, fields, rejoin};
pub use crate::token::{Bounds, ByteToken, CharToken, Token};
pub use crate::tokenizer::{ByteTokenizer, CharTokenizer, DelimiterMatch, Tokenizer, Tokens};
pub use crate::window::Window;
