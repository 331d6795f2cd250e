use alloc::vec;

use crate::{BufferError, BufferOptions, CursorBuffer, DEFAULT_CAPACITY, TextEncoding};

#[test]
fn new_uses_defaults() {
    let buf = CursorBuffer::new();
    assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.encoding(), TextEncoding::Utf8);
    assert_eq!(buf.read_pos(), 0);
    assert_eq!(buf.write_pos(), 0);
}

#[test]
fn default_matches_new() {
    let buf = CursorBuffer::default();
    assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
    assert_eq!(buf.encoding(), TextEncoding::Utf8);
}

#[test]
fn explicit_capacity_is_exact() {
    let buf = CursorBuffer::with_capacity(16).unwrap();
    assert_eq!(buf.capacity(), 16);
    assert!(buf.is_empty());
}

#[test]
fn zero_capacity_is_rejected() {
    assert_eq!(CursorBuffer::with_capacity(0).unwrap_err(), BufferError::ZeroCapacity);
}

#[test]
fn explicit_encoding_keeps_default_capacity() {
    let buf = CursorBuffer::with_encoding(TextEncoding::Latin1);
    assert_eq!(buf.encoding(), TextEncoding::Latin1);
    assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn adoption_takes_the_region_wholesale() {
    let buf = CursorBuffer::from_bytes(vec![1, 2, 3]);
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.capacity(), 3);
    assert_eq!(buf.as_bytes(), [1, 2, 3]);
    assert_eq!(buf.read_pos(), 0);
    assert_eq!(buf.write_pos(), 0);
}

#[test]
fn adoption_with_encoding() {
    let buf = CursorBuffer::from_bytes_with(vec![b'h', b'i'], TextEncoding::Ascii);
    assert_eq!(buf.encoding(), TextEncoding::Ascii);
    assert_eq!(buf.to_text().unwrap(), "hi");
}

#[test]
fn options_size_wins_over_data() {
    let buf = CursorBuffer::from_options(BufferOptions {
        size: Some(8),
        data: Some(vec![1, 2, 3]),
        encoding: None,
    })
    .unwrap();
    assert_eq!(buf.capacity(), 8);
    assert!(buf.is_empty());
}

#[test]
fn options_data_alone_adopts() {
    let buf = CursorBuffer::from_options(BufferOptions {
        data: Some(vec![9, 8]),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(buf.as_bytes(), [9, 8]);
    assert_eq!(buf.capacity(), 2);
}

#[test]
fn options_empty_falls_back_to_defaults() {
    let buf = CursorBuffer::from_options(BufferOptions::default()).unwrap();
    assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
    assert_eq!(buf.encoding(), TextEncoding::Utf8);
}

#[test]
fn options_zero_size_is_rejected() {
    let err = CursorBuffer::from_options(BufferOptions {
        size: Some(0),
        data: Some(vec![1]),
        encoding: None,
    })
    .unwrap_err();
    assert_eq!(err, BufferError::ZeroCapacity);
}

#[test]
fn options_carry_the_encoding() {
    let buf = CursorBuffer::from_options(BufferOptions {
        encoding: Some(TextEncoding::Hex),
        ..Default::default()
    })
    .unwrap();
    assert_eq!(buf.encoding(), TextEncoding::Hex);
}
