//! Tests for value formatting, record layout and the unsupported policies.

use crate::io::InMemorySink;
use crate::{
    FormatError, FormatOptions, Formatter, Record, UnsupportedPolicy, Value, format, format_to_vec,
    format_with, values,
};

fn render(values: &[Value]) -> String {
    String::from_utf8(format_to_vec(values).unwrap()).unwrap()
}

#[test]
fn zero_is_a_single_digit() {
    assert_eq!(render(&values![0]), "0");
}

#[test]
fn integers_render_in_decimal() {
    assert_eq!(render(&values![7]), "7");
    assert_eq!(render(&values![102222]), "102222");
    assert_eq!(render(&[Value::Integer(i64::MAX)]), "9223372036854775807");
}

#[test]
fn negative_integers_carry_a_sign() {
    assert_eq!(render(&values![-45]), "-45");
    assert_eq!(render(&[Value::Integer(i64::MIN)]), "-9223372036854775808");
}

#[test]
fn record_fields_in_declared_order() {
    let rec = Record::new().field("field1", 100).field("field2", "abc");
    assert_eq!(render(&values![rec]), "{ 100, abc }");
}

#[test]
fn nested_records_recurse() {
    let a = Record::named("A").field("b", "ABC").field("z", 100);
    let b = Record::named("B").field("a", a).field("b", "HELLO");

    assert_eq!(render(&values![b]), "{ { ABC, 100 }, HELLO }");
}

#[test]
fn empty_record_keeps_both_delimiters() {
    assert_eq!(render(&values![Record::new()]), "{  }");
}

#[test]
fn top_level_values_are_space_separated() {
    let rec = Record::new().field("x", 1);
    assert_eq!(
        render(&values!["Hello %s", "labib", 102222, rec]),
        "Hello %s labib 102222 { 1 }"
    );
}

#[test]
fn unsupported_field_truncates_only_its_record() {
    let inner = Record::new()
        .field("ok", 1)
        .field("bad", Value::Unsupported("f64"))
        .field("never", 2);
    let outer = Record::new().field("inner", inner).field("after", "tail");

    assert_eq!(
        render(&[Value::from(outer), Value::from(9)]),
        "{ { 1,  %!unknown% , tail } 9"
    );
}

#[test]
fn unsupported_top_level_value_stops_the_call() {
    let out = render(&[
        Value::from("a"),
        Value::Unsupported("bool"),
        Value::from("b"),
    ]);
    assert_eq!(out, "a  %!unknown% ");
}

#[test]
fn fail_policy_reports_and_writes_nothing() {
    let sink = InMemorySink::new("out");
    let options = FormatOptions::default().with_unsupported(UnsupportedPolicy::Fail);
    let rec = Record::new().field("x", 1).field("y", Value::Unsupported("map"));

    let err = format_with(&mut sink.writer(), &options, &values![1, rec]).unwrap_err();

    match err {
        FormatError::UnsupportedType { type_name } => assert_eq!(type_name, "map"),
        other => panic!("expected UnsupportedType, got: {other:?}"),
    }
    assert!(sink.contents().is_empty());
    assert_eq!(sink.write_count(), 0);
}

#[test]
fn output_reaches_the_sink_in_one_write() {
    let sink = InMemorySink::new("out");
    let rec = Record::new().field("a", 1).field("b", "two");

    let n = format(&mut sink.writer(), &values![1, "x", rec, 3, 4, 5]).unwrap();

    assert_eq!(sink.write_count(), 1);
    assert_eq!(n, sink.contents().len());
    assert_eq!(sink.contents_string(), "1 x { 1, two } 3 4 5");
}

#[test]
fn custom_separators_and_marker() {
    let options = FormatOptions::default()
        .with_separator("\t")
        .with_field_separator(";")
        .with_record_delimiters("(", ")")
        .with_unknown_marker("?");
    let rec = Record::new().field("a", 1).field("b", 2);

    let mut out = Vec::new();
    format_with(
        &mut out,
        &options,
        &[Value::from(rec), Value::from("x"), Value::Unsupported("f32")],
    )
    .unwrap();

    assert_eq!(out, b"(1;2)\tx\t?");
}

#[test]
fn formatter_session_accumulates_until_flushed() {
    let mut f = Formatter::new();
    f.format_integer(12);
    f.format_text(" and ");
    f.format_integer(0);

    let mut out = Vec::new();
    assert_eq!(f.flush_to(&mut out).unwrap(), 8);
    assert_eq!(out, b"12 and 0");
    assert!(f.buffer().is_empty());
}

#[test]
fn empty_argument_list_writes_nothing() {
    let sink = InMemorySink::new("out");
    assert_eq!(format(&mut sink.writer(), &[]).unwrap(), 0);
    assert_eq!(sink.write_count(), 0);
}
