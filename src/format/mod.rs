//! Typed value formatting into a byte stream.
//!
//! This module provides:
//! - `Value` / `Record`: The closed set of formattable values
//! - `to_value`: Conversion from any `serde::Serialize` type
//! - `Formatter`: The pooled session that renders values into its buffer
//! - `format` and friends: One-call entry points using the shared pool
//!
//! All output of one call is accumulated in the session buffer and handed to
//! the sink in a single write.

use std::io::Write;

mod ser;
mod value;

pub use ser::{RecordSerializer, ValueSerializer, to_value};
pub use value::{Record, Value};

use crate::buffer::ByteBuffer;
use crate::config::{FormatOptions, UnsupportedPolicy};
use crate::error::FormatError;
use crate::io::stdout;
use crate::pool::{Pool, Reset};

static FORMATTERS: Pool<Formatter> = Pool::new(Formatter::new);

/// The process-wide formatter pool used by [`format`] and friends.
pub fn formatter_pool() -> &'static Pool<Formatter> {
    &FORMATTERS
}

/// Whether the enclosing sequence keeps going after a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Reusable format session: the output buffer for one call.
#[derive(Debug, Default)]
pub struct Formatter {
    buf: ByteBuffer,
}

impl Formatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Output accumulated so far.
    pub fn buffer(&self) -> &ByteBuffer {
        &self.buf
    }

    /// Append the decimal digits of `v`.
    pub fn format_integer(&mut self, v: i64) {
        if v == 0 {
            self.buf.append_byte(b'0');
            return;
        }
        if v < 0 {
            self.buf.append_byte(b'-');
        }

        // u64::MAX has 20 digits.
        let mut scratch = [0u8; 20];
        let mut i = scratch.len();
        let mut n = v.unsigned_abs();
        while n > 0 {
            i -= 1;
            scratch[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }
        self.buf.append_bytes(&scratch[i..]);
    }

    /// Append text verbatim.
    pub fn format_text(&mut self, v: &str) {
        self.buf.append_str(v);
    }

    /// Append a record as `{ field, field }`.
    ///
    /// Under [`UnsupportedPolicy::Marker`], the first unsupported field is
    /// replaced by the marker and the record ends there, without the
    /// closing delimiter. Formatting continues after the record.
    pub fn format_record(
        &mut self,
        record: &Record,
        options: &FormatOptions,
    ) -> Result<(), FormatError> {
        self.buf.append_str(&options.record_open);
        let fields = record.fields();
        for (i, (_, value)) in fields.iter().enumerate() {
            if self.format_value(value, options)? == Flow::Stop {
                return Ok(());
            }
            if i + 1 < fields.len() {
                self.buf.append_str(&options.field_separator);
            }
        }
        self.buf.append_str(&options.record_close);
        Ok(())
    }

    /// Append top-level values separated by `options.separator`.
    ///
    /// Under [`UnsupportedPolicy::Marker`], an unsupported value is replaced
    /// by the marker and every later value is dropped.
    pub fn format_values(
        &mut self,
        values: &[Value],
        options: &FormatOptions,
    ) -> Result<(), FormatError> {
        for (i, value) in values.iter().enumerate() {
            if self.format_value(value, options)? == Flow::Stop {
                return Ok(());
            }
            if i + 1 < values.len() {
                self.buf.append_str(&options.separator);
            }
        }
        Ok(())
    }

    fn format_value(&mut self, value: &Value, options: &FormatOptions) -> Result<Flow, FormatError> {
        match value {
            Value::Integer(v) => self.format_integer(*v),
            Value::Text(v) => self.format_text(v),
            Value::Record(r) => self.format_record(r, options)?,
            Value::Unsupported(type_name) => {
                return match options.unsupported {
                    UnsupportedPolicy::Marker => {
                        self.buf.append_str(&options.unknown_marker);
                        Ok(Flow::Stop)
                    }
                    UnsupportedPolicy::Fail => Err(FormatError::UnsupportedType {
                        type_name: *type_name,
                    }),
                };
            }
        }
        Ok(Flow::Continue)
    }

    /// Hand the buffered output to `sink` and clear the buffer.
    pub fn flush_to<W: Write + ?Sized>(&mut self, sink: &mut W) -> Result<usize, FormatError> {
        let n = self.buf.len();
        if n > 0 {
            sink.write_all(self.buf.as_bytes())?;
        }
        sink.flush()?;
        self.buf.truncate();
        Ok(n)
    }
}

impl Reset for Formatter {
    fn reset(&mut self) {
        self.buf.truncate();
    }
}

/// Format `values` into `sink` with default options.
///
/// Returns the number of bytes written. Nothing reaches the sink if
/// formatting fails.
pub fn format<W: Write + ?Sized>(sink: &mut W, values: &[Value]) -> Result<usize, FormatError> {
    format_with(sink, &FormatOptions::default(), values)
}

/// Format `values` into `sink` with the given options.
pub fn format_with<W: Write + ?Sized>(
    sink: &mut W,
    options: &FormatOptions,
    values: &[Value],
) -> Result<usize, FormatError> {
    let mut formatter = FORMATTERS.acquire();
    formatter.format_values(values, options)?;
    formatter.flush_to(sink)
}

/// Format `values` to the process's standard output.
pub fn format_stdout(values: &[Value]) -> Result<usize, FormatError> {
    format(&mut stdout(), values)
}

/// Format `values` into a fresh byte vector.
pub fn format_to_vec(values: &[Value]) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::new();
    format(&mut out, values)?;
    Ok(out)
}
