//! Tests for delimiter skipping and token runs.

use crate::scan::{Tokenizer, is_alnum, is_digit};
use crate::{ByteBuffer, ByteScanner, PushbackReader, ScanError, ScanOptions};

fn reader(s: &'static str) -> PushbackReader<&'static [u8]> {
    PushbackReader::new(s.as_bytes())
}

#[test]
fn classifies_ascii_bytes() {
    assert!(is_digit(b'0') && is_digit(b'9'));
    assert!(!is_digit(b'a') && !is_digit(b'-') && !is_digit(b' '));
    assert!(is_alnum(b'z') && is_alnum(b'Q') && is_alnum(b'5'));
    assert!(!is_alnum(b'_') && !is_alnum(b'\n') && !is_alnum(0xc3));
}

#[test]
fn skip_delimiters_stops_before_first_token_byte() {
    let mut src = reader(" \n \nx");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    Tokenizer::new(&mut src, &mut buf, &opts)
        .skip_delimiters()
        .unwrap();
    assert_eq!(src.read_byte().unwrap(), b'x');
}

#[test]
fn skip_delimiters_at_end_is_not_an_error() {
    let mut src = reader("   ");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();
    let mut t = Tokenizer::new(&mut src, &mut buf, &opts);

    t.skip_delimiters().unwrap();
    assert!(matches!(
        t.ensure_not_at_end(),
        Err(ScanError::UnexpectedEndOfInput)
    ));
}

#[test]
fn tab_is_not_a_default_delimiter() {
    let mut src = reader("\t7");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    let err = Tokenizer::new(&mut src, &mut buf, &opts)
        .parse_integer()
        .unwrap_err();
    assert!(matches!(err, ScanError::MalformedInteger { .. }));
}

#[test]
fn extra_delimiters_are_configurable() {
    let mut src = reader("\t\r\n7");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default().add_delimiter(b'\t').add_delimiter(b'\r');

    let n = Tokenizer::new(&mut src, &mut buf, &opts)
        .parse_integer()
        .unwrap();
    assert_eq!(n, 7);
}

#[test]
fn digit_run_stops_at_first_non_digit_and_pushes_it_back() {
    let mut src = reader("123abc");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    let n = Tokenizer::new(&mut src, &mut buf, &opts)
        .parse_integer()
        .unwrap();
    assert_eq!(n, 123);
    assert_eq!(src.read_byte().unwrap(), b'a');
}

#[test]
fn char_run_ends_at_end_of_input_without_error() {
    let mut src = reader("  word42");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    let w = Tokenizer::new(&mut src, &mut buf, &opts)
        .parse_word()
        .unwrap();
    assert_eq!(w, "word42");
    assert!(src.read_byte().unwrap_err().is_end_of_input());
}

#[test]
fn negative_literal_truncates_at_sign() {
    let mut src = reader("-5");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    match Tokenizer::new(&mut src, &mut buf, &opts).parse_integer() {
        Err(ScanError::MalformedInteger { token }) => assert_eq!(token, ""),
        other => panic!("expected MalformedInteger, got: {other:?}"),
    }
    assert_eq!(src.read_byte().unwrap(), b'-');
}

#[test]
fn overflowing_digits_are_malformed() {
    let mut src = reader("99999999999999999999");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    match Tokenizer::new(&mut src, &mut buf, &opts).parse_integer() {
        Err(ScanError::MalformedInteger { token }) => assert_eq!(token.len(), 20),
        other => panic!("expected MalformedInteger, got: {other:?}"),
    }
}

#[test]
fn word_starting_with_punctuation_is_empty() {
    let mut src = reader(" !x");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();

    let w = Tokenizer::new(&mut src, &mut buf, &opts)
        .parse_word()
        .unwrap();
    assert_eq!(w, "");
    assert_eq!(src.read_byte().unwrap(), b'!');
}

#[test]
fn one_tokenizer_reads_consecutive_tokens() {
    let mut src = reader("12 34 ab cd");
    let mut buf = ByteBuffer::new();
    let opts = ScanOptions::default();
    let mut tokens = Tokenizer::new(&mut src, &mut buf, &opts);

    assert_eq!(tokens.parse_integer().unwrap(), 12);
    assert_eq!(tokens.parse_integer().unwrap(), 34);
    assert_eq!(tokens.parse_word().unwrap(), "ab");
    assert_eq!(tokens.parse_word().unwrap(), "cd");
    assert!(matches!(
        tokens.parse_word(),
        Err(ScanError::UnexpectedEndOfInput)
    ));
}

#[test]
fn token_reads_clear_a_prefilled_buffer() {
    let mut src = reader("7");
    let mut buf = ByteBuffer::new();
    buf.append_str("stale");
    let opts = ScanOptions::default();

    let token = Tokenizer::new(&mut src, &mut buf, &opts)
        .integer_token()
        .unwrap()
        .to_string();
    assert_eq!(token, "7");
}
