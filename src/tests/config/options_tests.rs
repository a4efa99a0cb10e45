//! Tests for option defaults, builders and config loading.

use crate::{Config, ConfigError, FormatOptions, ScanOptions, UnsupportedPolicy};

#[test]
fn defaults_match_the_token_and_output_grammar() {
    let scan = ScanOptions::default();
    assert_eq!(scan.delimiters, vec![b' ', b'\n']);
    assert!(scan.is_delimiter(b' ') && !scan.is_delimiter(b'\t'));

    let fmt = FormatOptions::default();
    assert_eq!(fmt.separator, " ");
    assert_eq!(fmt.field_separator, ", ");
    assert_eq!((fmt.record_open.as_str(), fmt.record_close.as_str()), ("{ ", " }"));
    assert_eq!(fmt.unknown_marker, " %!unknown% ");
    assert_eq!(fmt.unsupported, UnsupportedPolicy::Marker);
}

#[test]
fn add_delimiter_is_idempotent() {
    let scan = ScanOptions::default().add_delimiter(b'\t').add_delimiter(b'\t');
    assert_eq!(scan.delimiters, vec![b' ', b'\n', b'\t']);

    let scan = ScanOptions::default().with_delimiters(*b",");
    assert_eq!(scan.delimiters, vec![b',']);
}

#[test]
fn unsupported_policy_from_str() {
    assert_eq!(UnsupportedPolicy::from_str("Marker"), Some(UnsupportedPolicy::Marker));
    assert_eq!(UnsupportedPolicy::from_str("fail"), Some(UnsupportedPolicy::Fail));
    assert_eq!(UnsupportedPolicy::from_str("error"), Some(UnsupportedPolicy::Fail));
    assert_eq!(UnsupportedPolicy::from_str("panic"), None);
}

#[test]
fn config_builders_replace_sections() {
    let cfg = Config::default()
        .with_scan(ScanOptions::default().add_delimiter(b'\r'))
        .with_format(FormatOptions::default().with_separator(","));

    assert!(cfg.scan.is_delimiter(b'\r'));
    assert_eq!(cfg.format.separator, ",");
    assert_eq!(cfg.format.field_separator, ", ");
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("textio.ini");
    std::fs::write(&path, "separator = ,").unwrap();

    let err = Config::from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownExtension(_)));
}

#[cfg(feature = "json")]
#[test]
fn json_config_fills_missing_fields_with_defaults() {
    let cfg = Config::from_json_str(r#"{ "format": { "separator": "|", "unsupported": "fail" } }"#)
        .unwrap();

    assert_eq!(cfg.scan, ScanOptions::default());
    assert_eq!(cfg.format.separator, "|");
    assert_eq!(cfg.format.record_open, "{ ");
    assert_eq!(cfg.format.unsupported, UnsupportedPolicy::Fail);
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("textio.yaml");
    std::fs::write(&path, "scan:\n  delimiters: [32, 10, 9]\n").unwrap();

    let cfg = Config::from_path(&path).unwrap();
    assert!(cfg.scan.is_delimiter(b'\t'));
    assert_eq!(cfg.format, FormatOptions::default());
}
