//! A growable, dual-cursor byte buffer for building and parsing
//! binary-protocol data.
//!
//! [`CursorBuffer`] decouples write progress from read progress: a single
//! buffer can be filled sequentially while independently being consumed
//! sequentially, or patched and probed at arbitrary offsets. It handles
//! fixed-width integers and floats in both byte orders, length-delimited
//! and null-terminated strings and byte runs, positional insertion, and
//! byte removal with back-shift.
//!
//! # Examples
//!
//! ```rust
//! use cursorbuf::CursorBuffer;
//!
//! let mut buf = CursorBuffer::new();
//! buf.write_u16_be(0x0102);
//! buf.write_string_nt("abc")?;
//!
//! assert_eq!(buf.read_u16_be()?, 0x0102);
//! assert_eq!(buf.read_string_nt()?, "abc");
//! assert_eq!(buf.remaining(), 0);
//! # Ok::<(), cursorbuf::BufferError>(())
//! ```
#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod buffer;
mod encoding;
mod error;
mod options;

#[cfg(test)]
mod tests;

pub use buffer::CursorBuffer;
pub use encoding::TextEncoding;
pub use error::BufferError;
pub use options::{BufferOptions, DEFAULT_CAPACITY};
