//! String and raw byte-run reads and writes.
//!
//! String methods come in pairs: the bare name applies the buffer's
//! default codec, the `_with` variant names one per call. Sequential
//! writes, positional inserts, and null-terminated variants are each
//! their own method rather than optional arguments on one entry point.

use alloc::string::String;
use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::encoding::TextEncoding;
use crate::error::BufferError;

use super::CursorBuffer;

impl CursorBuffer {
    /// Reads a length-delimited string with the default codec.
    ///
    /// With `Some(length)`, consumes `min(length, remaining())` bytes;
    /// with `None`, consumes everything remaining.
    ///
    /// # Errors
    ///
    /// [`BufferError::MalformedText`] when the bytes do not decode; the
    /// read cursor is left unchanged.
    pub fn read_string(&mut self, length: Option<usize>) -> Result<String, BufferError> {
        self.read_string_with(length, self.encoding)
    }

    /// Reads a length-delimited string with an explicit codec.
    ///
    /// # Errors
    ///
    /// As [`read_string`](CursorBuffer::read_string).
    pub fn read_string_with(
        &mut self,
        length: Option<usize>,
        encoding: TextEncoding,
    ) -> Result<String, BufferError> {
        let count = length.map_or(self.remaining(), |length| length.min(self.remaining()));
        let text = encoding.decode(&self.storage[self.read_pos..self.read_pos + count])?;
        self.read_pos += count;
        Ok(text)
    }

    /// Reads a null-terminated string with the default codec.
    ///
    /// Scans forward from the read cursor for the first zero byte within
    /// the valid data; a missing terminator ends the run at the logical
    /// end instead. The cursor lands one past the terminator, clamped to
    /// the logical length when no terminator byte was present.
    ///
    /// # Errors
    ///
    /// [`BufferError::MalformedText`] when the run does not decode; the
    /// read cursor is left unchanged.
    pub fn read_string_nt(&mut self) -> Result<String, BufferError> {
        self.read_string_nt_with(self.encoding)
    }

    /// Reads a null-terminated string with an explicit codec.
    ///
    /// # Errors
    ///
    /// As [`read_string_nt`](CursorBuffer::read_string_nt).
    pub fn read_string_nt_with(&mut self, encoding: TextEncoding) -> Result<String, BufferError> {
        let terminator = self.scan_terminator();
        let text = encoding.decode(&self.storage[self.read_pos..terminator])?;
        self.read_pos = (terminator + 1).min(self.len);
        Ok(text)
    }

    /// Reads a raw byte run.
    ///
    /// With `Some(length)`, consumes `min(length, remaining())` bytes;
    /// with `None`, consumes everything remaining.
    pub fn read_bytes(&mut self, length: Option<usize>) -> Vec<u8> {
        let count = length.map_or(self.remaining(), |length| length.min(self.remaining()));
        let run = self.storage[self.read_pos..self.read_pos + count].to_vec();
        self.read_pos += count;
        run
    }

    /// Reads a null-terminated raw byte run.
    ///
    /// Terminator handling matches
    /// [`read_string_nt`](CursorBuffer::read_string_nt): a missing zero
    /// byte ends the run at the logical end, and the cursor lands one past
    /// the terminator, clamped to the logical length.
    pub fn read_bytes_nt(&mut self) -> Vec<u8> {
        let terminator = self.scan_terminator();
        let run = self.storage[self.read_pos..terminator].to_vec();
        self.read_pos = (terminator + 1).min(self.len);
        run
    }

    /// Position of the first zero byte in the unread data, or the logical
    /// end when there is none.
    fn scan_terminator(&self) -> usize {
        self.storage[self.read_pos..self.len]
            .find_byte(0)
            .map_or(self.len, |found| self.read_pos + found)
    }

    /// Writes `text` at the write cursor with the default codec and
    /// returns the encoded byte count.
    ///
    /// # Errors
    ///
    /// Codec errors per [`TextEncoding::encode`]; the buffer is left
    /// unchanged.
    pub fn write_string(&mut self, text: &str) -> Result<usize, BufferError> {
        self.write_string_with(text, self.encoding)
    }

    /// Writes `text` at the write cursor with an explicit codec.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn write_string_with(
        &mut self,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<usize, BufferError> {
        let encoded = encoding.encode(text)?;
        self.write_bytes(&encoded);
        Ok(encoded.len())
    }

    /// Inserts `text` at `offset` with the default codec, shifting later
    /// bytes forward, and returns the encoded byte count.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn insert_string(&mut self, text: &str, offset: usize) -> Result<usize, BufferError> {
        self.insert_string_with(text, offset, self.encoding)
    }

    /// Inserts `text` at `offset` with an explicit codec.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn insert_string_with(
        &mut self,
        text: &str,
        offset: usize,
        encoding: TextEncoding,
    ) -> Result<usize, BufferError> {
        let encoded = encoding.encode(text)?;
        self.insert_bytes(&encoded, offset);
        Ok(encoded.len())
    }

    /// Writes `text` followed by a single zero byte; returns the byte
    /// count including the terminator.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn write_string_nt(&mut self, text: &str) -> Result<usize, BufferError> {
        self.write_string_nt_with(text, self.encoding)
    }

    /// Writes `text` followed by a single zero byte, with an explicit
    /// codec.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn write_string_nt_with(
        &mut self,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<usize, BufferError> {
        let written = self.write_string_with(text, encoding)?;
        self.write_u8(0);
        Ok(written + 1)
    }

    /// Inserts `text` at `offset` followed by a zero byte immediately
    /// after it; returns the byte count including the terminator.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn insert_string_nt(&mut self, text: &str, offset: usize) -> Result<usize, BufferError> {
        self.insert_string_nt_with(text, offset, self.encoding)
    }

    /// Inserts `text` at `offset` followed by a zero byte, with an
    /// explicit codec.
    ///
    /// # Errors
    ///
    /// As [`write_string`](CursorBuffer::write_string).
    pub fn insert_string_nt_with(
        &mut self,
        text: &str,
        offset: usize,
        encoding: TextEncoding,
    ) -> Result<usize, BufferError> {
        let written = self.insert_string_with(text, offset, encoding)?;
        self.insert_u8(0, offset + written);
        Ok(written + 1)
    }

    /// Writes a raw byte run at the write cursor, growing the storage as
    /// needed.
    pub fn write_bytes(&mut self, data: &[u8]) {
        let at = self.ensure_writeable(data.len(), None);
        self.storage[at..at + data.len()].copy_from_slice(data);
        self.write_pos += data.len();
    }

    /// Inserts a raw byte run at `offset`, shifting every byte at or
    /// after it forward.
    ///
    /// The sequential write cursor advances by the run's length even
    /// though the bytes landed at `offset`.
    pub fn insert_bytes(&mut self, data: &[u8], offset: usize) {
        let at = self.ensure_writeable(data.len(), Some(offset));
        self.storage[at..at + data.len()].copy_from_slice(data);
        self.write_pos += data.len();
    }

    /// Writes a raw byte run followed by a single zero byte.
    pub fn write_bytes_nt(&mut self, data: &[u8]) {
        self.write_bytes(data);
        self.write_u8(0);
    }

    /// Inserts a raw byte run at `offset` followed by a zero byte
    /// immediately after it.
    pub fn insert_bytes_nt(&mut self, data: &[u8], offset: usize) {
        self.insert_bytes(data, offset);
        self.insert_u8(0, offset + data.len());
    }

    /// Overwrites `data` in place at `offset`, the patch counterpart of
    /// [`insert_bytes`](CursorBuffer::insert_bytes).
    ///
    /// Nothing shifts and the write cursor does not move. The logical
    /// length extends only when the patch runs past the current end, and
    /// the storage grows as needed to hold it.
    pub fn write_bytes_at(&mut self, data: &[u8], offset: usize) {
        let end = offset + data.len();
        self.ensure_capacity(end);
        self.storage[offset..end].copy_from_slice(data);
        if end > self.len {
            self.len = end;
        }
    }
}
