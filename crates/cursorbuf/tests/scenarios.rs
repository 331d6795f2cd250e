//! Black-box scenarios driving the public API the way a protocol
//! implementation would.

use cursorbuf::{BufferError, BufferOptions, CursorBuffer, TextEncoding};

#[test]
fn build_and_parse_a_framed_message() {
    // [u16 length][u8 kind][name NT][u32 checksum]
    let mut frame = CursorBuffer::with_capacity(8).unwrap();
    frame.write_u8(3);
    frame.write_string_nt("sensor-7").unwrap();
    frame.write_u32_be(0xDEAD_BEEF);
    let body_len = u16::try_from(frame.len()).unwrap();
    frame.insert_u16_be(body_len, 0);

    let wire = frame.into_bytes();
    let mut parsed = CursorBuffer::from_bytes(wire);
    assert_eq!(parsed.read_u16_be().unwrap(), 14);
    assert_eq!(parsed.read_u8().unwrap(), 3);
    assert_eq!(parsed.read_string_nt().unwrap(), "sensor-7");
    assert_eq!(parsed.read_u32_be().unwrap(), 0xDEAD_BEEF);
    assert_eq!(parsed.remaining(), 0);
}

#[test]
fn growth_scenario_capacity_four() {
    let mut buf = CursorBuffer::with_capacity(4).unwrap();
    buf.write_u8(200);
    assert_eq!(buf.len(), 1);
    buf.write_u32_be(1);
    assert!(buf.capacity() >= 5);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_bytes(), [200, 0, 0, 0, 1]);
}

#[test]
fn removal_scenarios_on_an_empty_buffer() {
    let mut buf = CursorBuffer::new();
    buf.remove(0, 0).unwrap();
    assert!(matches!(buf.remove(0, 1), Err(BufferError::RemoveOutOfRange { .. })));
}

#[test]
fn patching_a_reserved_header_in_place() {
    let mut packet = CursorBuffer::with_capacity(16).unwrap();
    packet.write_u32_be(0); // length placeholder
    packet.write_bytes(b"payload");
    let total = u32::try_from(packet.len()).unwrap();
    packet.write_bytes_at(&total.to_be_bytes(), 0);

    let mut parsed = CursorBuffer::from_bytes(packet.into_bytes());
    assert_eq!(parsed.read_u32_be().unwrap(), 11);
    assert_eq!(parsed.read_bytes(None), b"payload");
}

#[test]
fn interleaved_reading_and_writing() {
    let mut buf = CursorBuffer::with_capacity(4).unwrap();
    buf.write_u16_le(7);
    assert_eq!(buf.read_u16_le().unwrap(), 7);
    buf.write_string("tail").unwrap();
    assert_eq!(buf.read_string(None).unwrap(), "tail");
    assert_eq!(buf.remaining(), 0);
    buf.rewind(4).unwrap();
    assert_eq!(buf.read_string(None).unwrap(), "tail");
}

#[test]
fn codec_identifiers_resolve_at_the_boundary() {
    let encoding: TextEncoding = "UCS-2".parse().unwrap();
    let mut buf = CursorBuffer::from_options(BufferOptions {
        encoding: Some(encoding),
        ..Default::default()
    })
    .unwrap();
    buf.write_string("ab").unwrap();
    assert_eq!(buf.as_bytes(), [b'a', 0, b'b', 0]);
    assert!("koi8-r".parse::<TextEncoding>().is_err());
}

#[test]
fn clearing_recycles_the_allocation() {
    let mut buf = CursorBuffer::with_capacity(2).unwrap();
    buf.write_bytes(&[1; 64]);
    let grown = buf.capacity();
    buf.clear();
    assert_eq!(buf.capacity(), grown);
    buf.write_string_nt("reused").unwrap();
    assert_eq!(buf.read_string_nt().unwrap(), "reused");
}
