//! Delimiter-skipping tokenizer over a [`ByteScanner`].

use crate::buffer::ByteBuffer;
use crate::config::ScanOptions;
use crate::error::ScanError;
use crate::io::ByteScanner;

/// ASCII `0`-`9`.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// ASCII `0`-`9`, `a`-`z`, `A`-`Z`.
#[inline]
pub fn is_alnum(b: u8) -> bool {
    b.is_ascii_alphanumeric()
}

/// Extracts one token at a time into a borrowed buffer.
///
/// The tokenizer keeps no state of its own between tokens; the source's
/// cursor and pushback byte carry everything forward. Each token read
/// clears the buffer first, so the returned token never includes earlier
/// ones. The lower-level run readers append to whatever the buffer holds.
pub struct Tokenizer<'a, S: ?Sized> {
    source: &'a mut S,
    buf: &'a mut ByteBuffer,
    options: &'a ScanOptions,
}

impl<'a, S: ByteScanner + ?Sized> Tokenizer<'a, S> {
    pub fn new(source: &'a mut S, buf: &'a mut ByteBuffer, options: &'a ScanOptions) -> Self {
        Self {
            source,
            buf,
            options,
        }
    }

    /// Consume delimiters up to the next token byte or end of input.
    pub fn skip_delimiters(&mut self) -> Result<(), ScanError> {
        loop {
            match self.source.read_byte() {
                Ok(b) if self.options.is_delimiter(b) => continue,
                Ok(_) => return self.source.unread_byte(),
                Err(ScanError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Fail with [`ScanError::UnexpectedEndOfInput`] if the source is
    /// exhausted; otherwise leave it untouched.
    pub fn ensure_not_at_end(&mut self) -> Result<(), ScanError> {
        match self.source.read_byte() {
            Ok(_) => self.source.unread_byte(),
            Err(ScanError::EndOfInput) => Err(ScanError::UnexpectedEndOfInput),
            Err(e) => Err(e),
        }
    }

    /// Append bytes to the buffer while `class` holds. The first byte
    /// outside the class is pushed back.
    fn read_run(&mut self, class: fn(u8) -> bool) -> Result<(), ScanError> {
        loop {
            match self.source.read_byte() {
                Ok(b) if class(b) => {
                    self.buf.append_byte(b);
                }
                Ok(_) => return self.source.unread_byte(),
                Err(ScanError::EndOfInput) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    pub fn read_digit_run(&mut self) -> Result<(), ScanError> {
        self.read_run(is_digit)
    }

    pub fn read_char_run(&mut self) -> Result<(), ScanError> {
        self.read_run(is_alnum)
    }

    /// Read the next digit token as an `i64`.
    ///
    /// A leading `-` is not a digit, so negative literals are rejected as
    /// malformed rather than parsed.
    pub fn parse_integer(&mut self) -> Result<i64, ScanError> {
        self.parse_integer_as::<i64>()
    }

    /// Read the next digit token into any primitive integer type.
    pub fn parse_integer_as<T: std::str::FromStr>(&mut self) -> Result<T, ScanError> {
        let token = self.integer_token()?;
        token.parse::<T>().map_err(|_| ScanError::MalformedInteger {
            token: token.to_string(),
        })
    }

    /// Read the next digit run and return it unparsed. The run is empty
    /// when the next token starts with a non-digit.
    pub fn integer_token(&mut self) -> Result<&str, ScanError> {
        self.buf.truncate();
        self.skip_delimiters()?;
        self.ensure_not_at_end()?;
        self.read_digit_run()?;
        // The buffer was cleared above and holds only ASCII digits, so the
        // UTF-8 check cannot fail.
        Ok(self.buf.as_str().unwrap_or_default())
    }

    /// Read the next alphanumeric token.
    pub fn parse_word(&mut self) -> Result<String, ScanError> {
        self.buf.truncate();
        self.skip_delimiters()?;
        self.ensure_not_at_end()?;
        self.read_char_run()?;
        Ok(self.buf.to_string_lossy())
    }
}
