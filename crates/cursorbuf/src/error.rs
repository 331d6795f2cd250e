use alloc::string::String;

use thiserror::Error;

use crate::encoding::TextEncoding;

/// Errors surfaced by [`CursorBuffer`](crate::CursorBuffer) operations and
/// constructors.
///
/// Every failure is synchronous and total: the operation that produced it
/// left the buffer unmutated. Variants fall into two classes, invalid
/// arguments (construction and codec failures) and bounds violations
/// (cursor movement and reads past the logical length).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// A buffer was constructed with a zero initial capacity.
    #[error("buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// A text-encoding identifier named no supported codec.
    #[error("unknown text encoding {0:?}")]
    UnknownEncoding(String),

    /// A character has no representation in the selected codec.
    #[error("cannot encode {0:?} as {1}")]
    Unencodable(char, TextEncoding),

    /// A payload could not be encoded or decoded with the selected codec.
    #[error("malformed {0} payload: {1}")]
    MalformedText(TextEncoding, &'static str),

    /// A typed or raw read asked for more bytes than remain unread.
    #[error("read of {requested} bytes overruns the {remaining} bytes remaining")]
    ReadOverrun {
        /// Bytes the read needed.
        requested: usize,
        /// Unread bytes available when the read was issued.
        remaining: usize,
    },

    /// A cursor movement targeted a position past the logical length.
    #[error("cursor target {target} is outside the readable range 0..={length}")]
    CursorOutOfRange {
        /// Position the movement asked for.
        target: usize,
        /// Logical length at the time of the movement.
        length: usize,
    },

    /// A rewind asked to move the read cursor before the start.
    #[error("rewind of {count} bytes would move the read cursor before the start")]
    RewindBeforeStart {
        /// Bytes the rewind asked to step back.
        count: usize,
    },

    /// A removal range fell outside the written region.
    #[error("removal of {count} bytes at {offset} is outside the written region of length {length}")]
    RemoveOutOfRange {
        /// Start of the removal range.
        offset: usize,
        /// Bytes the removal asked to excise.
        count: usize,
        /// Logical length at the time of the removal.
        length: usize,
    },
}
