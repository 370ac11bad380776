//! # arrayscan
//!
//! Bounded-window search and delimiter tokenization over byte and character
//! arrays, with SIMD-accelerated byte scans via
//! [`memchr`](https://crates.io/crates/memchr).
//!
//! Every operation works on a fixed array and an explicit `(index, length)`
//! window. Matching compares raw elements; nothing is decoded until a token is
//! explicitly materialized.
//!
//! ## Quick Start
//!
//! ```rust
//! use arrayscan::prelude::*;
//!
//! let line = b"GET /a/b HTTP/1.1\r\n";
//! assert_eq!(index_of(line, b' '), Some(3));
//! assert_eq!(index_of_slice(line, b"\r\n").unwrap(), Some(17));
//!
//! let mut tk = Tokenizer::new();
//! tk.set_source(line, b" \r\n").unwrap();
//! let first = tk.advance().unwrap().unwrap();
//! assert_eq!(first.as_slice(), b"GET");
//! assert_eq!(first.bounds(), Bounds::new(0, 3));
//! ```
//!
//! ## Hot loops
//!
//! [`Tokenizer::advance_fast`](tokenizer::Tokenizer::advance_fast) returns
//! plain [`Bounds`](token::Bounds) and runs the same scan as
//! [`Tokenizer::advance`](tokenizer::Tokenizer::advance):
//!
//! ```rust
//! use arrayscan::prelude::*;
//!
//! let record = b"a|bb|ccc|";
//! let mut tk = Tokenizer::new();
//! tk.set_source(record, b"|").unwrap();
//! let mut total = 0;
//! while let Some(b) = tk.advance_fast().unwrap() {
//!     total += b.length;
//! }
//! assert_eq!(total, 6);
//! ```
//!
//! ## Module Structure
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`element`] | Element trait the crate is generic over |
//! | [`elements`] | Byte (`u8`, `i8`) and wide (`u16`, `char`) elements |
//! | [`window`] | `(index, length)` validation |
//! | [`search`] | Forward/backward element, subsequence and set search |
//! | [`token`] | Zero-copy tokens and plain bounds |
//! | [`tokenizer`] | Delimiter tokenizer cursor |
//! | [`split`] | Field splitting helpers |
//! | [`error`] | Error type |

// Enable #[coverage(off)] attribute when running under cargo-llvm-cov on nightly.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod element;
pub mod elements;
pub mod error;
pub mod prelude;
pub mod search;
pub mod split;
pub mod token;
pub mod tokenizer;
pub mod window;
