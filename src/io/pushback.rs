//! Single-byte pushback over any byte stream.

use std::io::{self, Read};

use crate::error::ScanError;

/// Byte-at-a-time reading with one byte of pushback.
///
/// The tokenizer needs to look one byte past the end of a token without
/// losing it; `unread_byte` returns the last byte to the front of the
/// stream so the next `read_byte` replays it.
pub trait ByteScanner {
    /// Read the next byte, failing with [`ScanError::EndOfInput`] once the
    /// stream is exhausted.
    fn read_byte(&mut self) -> Result<u8, ScanError>;

    /// Push the most recently read byte back.
    ///
    /// Fails with [`ScanError::NoByteToUnread`] before the first successful
    /// read, or when a byte is already pending.
    fn unread_byte(&mut self) -> Result<(), ScanError>;
}

impl<S: ByteScanner + ?Sized> ByteScanner for &mut S {
    fn read_byte(&mut self) -> Result<u8, ScanError> {
        (**self).read_byte()
    }

    fn unread_byte(&mut self) -> Result<(), ScanError> {
        (**self).unread_byte()
    }
}

/// Adds [`ByteScanner`] to any [`Read`] implementation.
///
/// Reads go to the inner reader one byte at a time, so wrap slow readers in
/// a `BufReader` first.
#[derive(Debug)]
pub struct PushbackReader<R> {
    inner: R,
    last: u8,
    pending: bool,
    fresh: bool,
}

impl<R: Read> PushbackReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            last: 0,
            pending: false,
            fresh: true,
        }
    }

    /// Whether a pushed-back byte is waiting to be replayed.
    pub fn has_pending(&self) -> bool {
        self.pending
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the reader. A pending byte is lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> ByteScanner for PushbackReader<R> {
    fn read_byte(&mut self) -> Result<u8, ScanError> {
        if self.pending {
            self.pending = false;
            return Ok(self.last);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Err(ScanError::EndOfInput),
                Ok(_) => break,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ScanError::Io(e)),
            }
        }

        self.fresh = false;
        self.last = byte[0];
        Ok(byte[0])
    }

    fn unread_byte(&mut self) -> Result<(), ScanError> {
        if self.fresh || self.pending {
            return Err(ScanError::NoByteToUnread);
        }
        self.pending = true;
        Ok(())
    }
}
