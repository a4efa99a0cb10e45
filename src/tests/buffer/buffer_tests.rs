//! Tests for ByteBuffer growth, views and truncation.

use std::io::Write;

use crate::ByteBuffer;

#[test]
fn appends_read_back_in_order() {
    let mut buf = ByteBuffer::new();
    assert_eq!(buf.append_str("hello"), 5);
    assert_eq!(buf.append_bytes(b" wor"), 4);
    assert_eq!(buf.append_byte(b'l'), 1);
    buf.append_byte(b'd');

    assert_eq!(buf.as_bytes(), b"hello world");
    assert_eq!(buf.as_str().unwrap(), "hello world");
    assert_eq!(buf.len(), 11);
}

#[test]
fn arbitrary_bytes_round_trip() {
    let inputs: [&[u8]; 4] = [b"", b"\x00\xff\x10", b"plain ascii", &[0x80, 0x81, b'a']];

    for input in inputs {
        let mut buf = ByteBuffer::new();
        for &b in input {
            buf.append_byte(b);
        }
        assert_eq!(buf.as_bytes(), input);
    }
}

#[test]
fn growth_doubles_required_length() {
    let mut buf = ByteBuffer::new();
    assert_eq!(buf.capacity(), 0);

    buf.append_str("hello");
    assert!(buf.capacity() >= 10);

    // Fits in place: capacity must not change.
    let cap = buf.capacity();
    buf.append_str("bb");
    assert_eq!(buf.capacity(), cap);
    assert_eq!(buf.as_bytes(), b"hellobb");
}

#[test]
fn truncate_keeps_capacity_and_behaves_like_fresh() {
    let mut buf = ByteBuffer::with_capacity(4);
    buf.append_str("abcdefgh");
    let cap = buf.capacity();

    buf.truncate();
    assert!(buf.is_empty());
    assert_eq!(buf.capacity(), cap);

    buf.append_str("xyz");
    let mut fresh = ByteBuffer::new();
    fresh.append_str("xyz");
    assert_eq!(buf.as_bytes(), fresh.as_bytes());
}

#[test]
fn invalid_utf8_is_reported_not_hidden() {
    let mut buf = ByteBuffer::new();
    buf.append_bytes(&[b'a', 0xff]);

    assert!(buf.as_str().is_err());
    assert_eq!(buf.to_string_lossy(), "a\u{fffd}");
}

#[test]
fn implements_io_and_fmt_write() {
    let mut buf = ByteBuffer::new();
    buf.write_all(b"io ").unwrap();
    std::fmt::Write::write_fmt(&mut buf, format_args!("{}-{}", 1, 2)).unwrap();

    assert_eq!(buf.as_str().unwrap(), "io 1-2");
}
