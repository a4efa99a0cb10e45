//! # textio
//!
//! A small text I/O toolkit: a token scanner that reads whitespace-separated
//! integers and words into typed destinations, and a formatter that writes
//! integers, text and nested records into a byte stream.
//!
//! ## Overview
//!
//! textio provides:
//! - **Pushback reading**: `PushbackReader` adds one byte of lookahead to any `Read`
//! - **Tokenizing**: Delimiter skipping, digit runs and alphanumeric runs
//! - **Typed scanning**: `scan` fills `Slot`s (integers, strings, run-time typed values)
//! - **Typed formatting**: `format` renders `Value`s, including `serde::Serialize` types
//! - **Pooling**: Scanner and formatter sessions are reused across calls
//! - **Configuration**: Delimiters, separators and the unsupported-value policy
//!
//! ## Quick Start
//!
//! ```rust
//! use textio::{PushbackReader, Record, scan, slots, format_to_vec, values};
//!
//! let mut input = PushbackReader::new(&b"  42 hello\n"[..]);
//! let mut n = 0i64;
//! let mut word = String::new();
//! let filled = scan(&mut input, &mut slots![&mut n, &mut word]).unwrap();
//! assert_eq!((filled, n, word.as_str()), (2, 42, "hello"));
//!
//! let rec = Record::new().field("field1", 100).field("field2", "abc");
//! assert_eq!(format_to_vec(&values![rec]).unwrap(), b"{ 100, abc }");
//! ```
//!
//! ## Token grammar
//!
//! Tokens are separated by one or more delimiters (space and newline by
//! default, see `ScanOptions`). An integer token is a maximal run of ASCII
//! digits, with no sign. A word token is a maximal run of ASCII
//! alphanumerics.
//!
//! ## Output grammar
//!
//! Integers are decimal, text is written verbatim, records are
//! `{ field, field }`, and top-level values are separated by one space. An
//! unsupported value is replaced by ` %!unknown% ` and ends the enclosing
//! record (or the whole call, at top level), unless
//! `UnsupportedPolicy::Fail` is configured.
//!
//! ## Concurrency
//!
//! Calls are synchronous and block on the underlying stream. Each call takes
//! its own session from a thread-safe pool; a single stream must not be
//! shared by concurrent calls.
//!
//! ## Features
//!
//! - `json` - Load `Config` from JSON
//! - `yaml` - Load `Config` from YAML
//! - `miette` - Pretty error reporting with miette

pub mod buffer;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod pool;
pub mod scan;

pub use buffer::ByteBuffer;
pub use config::{Config, ConfigError, FormatOptions, ScanOptions, UnsupportedPolicy};
pub use error::{FormatError, ScanError, SlotError};
pub use format::{
    Formatter, Record, Value, format, format_stdout, format_to_vec, format_with, formatter_pool,
    to_value,
};
pub use io::{ByteScanner, InMemorySink, InMemorySource, PushbackReader};
pub use pool::{Pool, PoolStats, Pooled, Reset};
pub use scan::{
    ScanInteger, Scanner, Slot, Tokenizer, scan, scan_reader, scan_stdin, scan_with,
    scanner_pool,
};

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::TextioDiagnostic;

/// Scan with the options from a loaded [`Config`].
pub fn scan_configured<S>(
    config: &Config,
    source: &mut S,
    slots: &mut [Slot<'_>],
) -> Result<usize, SlotError>
where
    S: ByteScanner + ?Sized,
{
    scan_with(source, &config.scan, slots)
}

/// Format with the options from a loaded [`Config`].
pub fn format_configured<W>(
    config: &Config,
    sink: &mut W,
    values: &[Value],
) -> Result<usize, FormatError>
where
    W: std::io::Write + ?Sized,
{
    format_with(sink, &config.format, values)
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
