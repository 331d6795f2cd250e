use alloc::vec::Vec;

use crate::encoding::TextEncoding;

/// Storage capacity, in bytes, for buffers constructed without an explicit
/// size or adopted region.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Construction record for [`CursorBuffer::from_options`].
///
/// Combines the three construction inputs (initial size, adopted byte
/// region, and default text codec) into one structure. Fields left `None`
/// fall back to their defaults.
///
/// # Examples
///
/// ```rust
/// use cursorbuf::{BufferOptions, CursorBuffer, TextEncoding};
///
/// let buf = CursorBuffer::from_options(BufferOptions {
///     size: Some(64),
///     encoding: Some(TextEncoding::Latin1),
///     ..Default::default()
/// })?;
/// assert_eq!(buf.capacity(), 64);
/// # Ok::<(), cursorbuf::BufferError>(())
/// ```
///
/// [`CursorBuffer::from_options`]: crate::CursorBuffer::from_options
#[derive(Debug, Clone, Default)]
pub struct BufferOptions {
    /// Initial storage capacity in bytes. Zero is rejected at
    /// construction. Takes precedence over [`data`] when both are given.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CAPACITY`] (when [`data`] is also absent).
    ///
    /// [`data`]: BufferOptions::data
    pub size: Option<usize>,

    /// Byte region to adopt as the initial contents: the region becomes
    /// the storage, and the logical length starts at its full size.
    /// Ignored when [`size`] is given.
    ///
    /// # Default
    ///
    /// `None`; the buffer starts empty.
    ///
    /// [`size`]: BufferOptions::size
    pub data: Option<Vec<u8>>,

    /// Default codec for string operations that do not name one per call.
    ///
    /// # Default
    ///
    /// [`TextEncoding::Utf8`].
    pub encoding: Option<TextEncoding>,
}
