//! Growable byte accumulation buffer.

use std::fmt;
use std::io;
use std::str::Utf8Error;

/// Append-only byte buffer reused across scan and format calls.
///
/// Capacity only grows when an append does not fit: the new capacity is
/// twice the required length. [`ByteBuffer::truncate`] drops the contents
/// but keeps the allocation, so a pooled buffer stops allocating once it
/// has seen its largest token.
///
/// # Views
///
/// [`ByteBuffer::as_bytes`] and [`ByteBuffer::as_str`] borrow the buffer's
/// storage directly; nothing is copied. The borrow checker ties those views
/// to `&self`, so the buffer cannot be appended to or truncated while a view
/// is alive. Callers who need the contents past the next mutation must copy
/// them out (for example with [`ByteBuffer::to_string_lossy`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    buf: Vec<u8>,
}

impl ByteBuffer {
    /// Create an empty buffer without allocating.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Append UTF-8 text.
    pub fn append_str(&mut self, s: &str) -> usize {
        self.append_bytes(s.as_bytes())
    }

    /// Append raw bytes, returning how many were written.
    pub fn append_bytes(&mut self, bytes: &[u8]) -> usize {
        self.grow_for(bytes.len());
        self.buf.extend_from_slice(bytes);
        bytes.len()
    }

    /// Append a single byte.
    pub fn append_byte(&mut self, b: u8) -> usize {
        self.grow_for(1);
        self.buf.push(b);
        1
    }

    /// Reset the logical length to zero. Capacity is retained.
    pub fn truncate(&mut self) {
        self.buf.clear();
    }

    /// Current contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Current contents as text, borrowed from the same storage.
    pub fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(&self.buf)
    }

    /// Copy the contents out as an owned string, replacing invalid UTF-8.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.buf).into_owned()
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    // Doubling growth: only reallocate when `n` more bytes do not fit.
    fn grow_for(&mut self, n: usize) {
        let required = self.buf.len() + n;
        if required > self.buf.capacity() {
            let target = required.saturating_mul(2);
            self.buf.reserve_exact(target - self.buf.len());
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl io::Write for ByteBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        Ok(self.append_bytes(data))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Write for ByteBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s);
        Ok(())
    }
}
