//! Typed numeric reads and writes.
//!
//! Every method here is a thin wrapper over the fixed-width primitives
//! ([`CursorBuffer::read_fixed`], [`CursorBuffer::write_fixed`], and
//! [`CursorBuffer::insert_fixed`]), parameterized by width and byte order
//! through the standard `{from,to}_{be,le}_bytes` conversions. The
//! wrappers are generated by macros so each (type, order) combination
//! states only its name, type, and conversion.

use crate::error::BufferError;

use super::CursorBuffer;

impl CursorBuffer {
    /// Decodes `N` bytes at the read cursor and advances it past them.
    fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        let remaining = self.remaining();
        if remaining < N {
            return Err(BufferError::ReadOverrun {
                requested: N,
                remaining,
            });
        }
        let mut raw = [0; N];
        raw.copy_from_slice(&self.storage[self.read_pos..self.read_pos + N]);
        self.read_pos += N;
        Ok(raw)
    }

    /// Reserves `N` bytes sequentially, stores `raw` there, and advances
    /// the write cursor.
    fn write_fixed<const N: usize>(&mut self, raw: [u8; N]) {
        let at = self.ensure_writeable(N, None);
        self.storage[at..at + N].copy_from_slice(&raw);
        self.write_pos += N;
    }

    /// Inserts `raw` at `offset`, shifting later bytes forward. The
    /// sequential write cursor still advances by `N`.
    fn insert_fixed<const N: usize>(&mut self, raw: [u8; N], offset: usize) {
        let at = self.ensure_writeable(N, Some(offset));
        self.storage[at..at + N].copy_from_slice(&raw);
        self.write_pos += N;
    }
}

macro_rules! read_method {
    ($name:ident, $ty:ty, $from:ident, $what:literal) => {
        #[doc = concat!("Reads ", $what, " at the read cursor and advances it.")]
        ///
        /// # Errors
        ///
        /// [`BufferError::ReadOverrun`] when fewer bytes remain than the
        /// value needs; the cursor is left unchanged.
        pub fn $name(&mut self) -> Result<$ty, BufferError> {
            Ok(<$ty>::$from(self.read_fixed()?))
        }
    };
}

macro_rules! write_methods {
    ($write:ident, $insert:ident, $ty:ty, $to:ident, $what:literal) => {
        #[doc = concat!("Writes ", $what, " at the write cursor, growing the storage as needed.")]
        pub fn $write(&mut self, value: $ty) {
            self.write_fixed(value.$to());
        }

        #[doc = concat!("Inserts ", $what, " at `offset`, shifting every byte at or after it forward.")]
        ///
        /// The sequential write cursor advances by the value's width even
        /// though the bytes landed at `offset`.
        pub fn $insert(&mut self, value: $ty, offset: usize) {
            self.insert_fixed(value.$to(), offset);
        }
    };
}

impl CursorBuffer {
    read_method!(read_u8, u8, from_be_bytes, "an unsigned 8-bit integer");
    read_method!(read_i8, i8, from_be_bytes, "a signed 8-bit integer");
    read_method!(read_u16_be, u16, from_be_bytes, "a big-endian unsigned 16-bit integer");
    read_method!(read_u16_le, u16, from_le_bytes, "a little-endian unsigned 16-bit integer");
    read_method!(read_i16_be, i16, from_be_bytes, "a big-endian signed 16-bit integer");
    read_method!(read_i16_le, i16, from_le_bytes, "a little-endian signed 16-bit integer");
    read_method!(read_u32_be, u32, from_be_bytes, "a big-endian unsigned 32-bit integer");
    read_method!(read_u32_le, u32, from_le_bytes, "a little-endian unsigned 32-bit integer");
    read_method!(read_i32_be, i32, from_be_bytes, "a big-endian signed 32-bit integer");
    read_method!(read_i32_le, i32, from_le_bytes, "a little-endian signed 32-bit integer");
    read_method!(read_f32_be, f32, from_be_bytes, "a big-endian 32-bit float");
    read_method!(read_f32_le, f32, from_le_bytes, "a little-endian 32-bit float");
    read_method!(read_f64_be, f64, from_be_bytes, "a big-endian 64-bit float");
    read_method!(read_f64_le, f64, from_le_bytes, "a little-endian 64-bit float");

    write_methods!(write_u8, insert_u8, u8, to_be_bytes, "an unsigned 8-bit integer");
    write_methods!(write_i8, insert_i8, i8, to_be_bytes, "a signed 8-bit integer");
    write_methods!(write_u16_be, insert_u16_be, u16, to_be_bytes, "a big-endian unsigned 16-bit integer");
    write_methods!(write_u16_le, insert_u16_le, u16, to_le_bytes, "a little-endian unsigned 16-bit integer");
    write_methods!(write_i16_be, insert_i16_be, i16, to_be_bytes, "a big-endian signed 16-bit integer");
    write_methods!(write_i16_le, insert_i16_le, i16, to_le_bytes, "a little-endian signed 16-bit integer");
    write_methods!(write_u32_be, insert_u32_be, u32, to_be_bytes, "a big-endian unsigned 32-bit integer");
    write_methods!(write_u32_le, insert_u32_le, u32, to_le_bytes, "a little-endian unsigned 32-bit integer");
    write_methods!(write_i32_be, insert_i32_be, i32, to_be_bytes, "a big-endian signed 32-bit integer");
    write_methods!(write_i32_le, insert_i32_le, i32, to_le_bytes, "a little-endian signed 32-bit integer");
    write_methods!(write_f32_be, insert_f32_be, f32, to_be_bytes, "a big-endian 32-bit float");
    write_methods!(write_f32_le, insert_f32_le, f32, to_le_bytes, "a little-endian 32-bit float");
    write_methods!(write_f64_be, insert_f64_be, f64, to_be_bytes, "a big-endian 64-bit float");
    write_methods!(write_f64_le, insert_f64_le, f64, to_le_bytes, "a little-endian 64-bit float");
}
