#![no_main]
use arbitrary::Arbitrary;
use cursorbuf::{CursorBuffer, TextEncoding};
use libfuzzer_sys::fuzz_target;

/// One mutation or traversal step against the buffer. Offsets and counts
/// are `u16` so the arbitrary-driven sequences stay in a range where
/// shifts and growth actually interact.
#[derive(Arbitrary, Debug)]
enum Op {
    WriteU8(u8),
    WriteU32Be(u32),
    WriteF64Le(f64),
    WriteBytes(Vec<u8>),
    WriteStringNt(String),
    InsertU16Le { value: u16, offset: u16 },
    InsertBytes { data: Vec<u8>, offset: u16 },
    OverwriteBytes { data: Vec<u8>, offset: u16 },
    Remove { offset: u16, count: u16 },
    Skip(u16),
    Rewind(u16),
    MoveTo(u16),
    ReadU8,
    ReadU32Le,
    ReadBytes(u16),
    ReadBytesNt,
    ReadString(u16),
    Clear,
}

fuzz_target!(|ops: Vec<Op>| {
    let mut buf = CursorBuffer::with_capacity(8).expect("capacity is non-zero");

    for op in ops {
        match op {
            Op::WriteU8(value) => buf.write_u8(value),
            Op::WriteU32Be(value) => buf.write_u32_be(value),
            Op::WriteF64Le(value) => buf.write_f64_le(value),
            Op::WriteBytes(data) => buf.write_bytes(&data),
            Op::WriteStringNt(text) => {
                buf.write_string_nt(&text).expect("UTF-8 encode is total");
            }
            Op::InsertU16Le { value, offset } => buf.insert_u16_le(value, offset.into()),
            Op::InsertBytes { data, offset } => buf.insert_bytes(&data, offset.into()),
            Op::OverwriteBytes { data, offset } => buf.write_bytes_at(&data, offset.into()),
            Op::Remove { offset, count } => {
                let _ = buf.remove(offset.into(), count.into());
            }
            Op::Skip(count) => {
                let _ = buf.skip(count.into());
            }
            Op::Rewind(count) => {
                let _ = buf.rewind(count.into());
            }
            Op::MoveTo(target) => {
                let _ = buf.move_to(target.into());
            }
            Op::ReadU8 => {
                let _ = buf.read_u8();
            }
            Op::ReadU32Le => {
                let _ = buf.read_u32_le();
            }
            Op::ReadBytes(count) => {
                let run = buf.read_bytes(Some(count.into()));
                assert!(run.len() <= usize::from(count));
            }
            Op::ReadBytesNt => {
                let _ = buf.read_bytes_nt();
            }
            Op::ReadString(count) => {
                // Arbitrary bytes rarely decode as UTF-8; byte-transparent
                // Latin-1 must always succeed.
                buf.read_string_with(Some(count.into()), TextEncoding::Latin1)
                    .expect("latin1 decode is total");
            }
            Op::Clear => buf.clear(),
        }

        // The core invariants hold after every single operation.
        assert!(buf.read_pos() <= buf.len());
        assert!(buf.len() <= buf.capacity());
        assert_eq!(buf.remaining(), buf.len() - buf.read_pos());
        assert_eq!(buf.as_bytes().len(), buf.len());
    }
});
