// elements/mod.rs - Element implementations
// Narrow (byte) and wide (code unit / char) arrays.

pub mod byte;
pub mod wide;

pub use byte::ByteSet;
