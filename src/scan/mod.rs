//! Token scanning into typed destinations.
//!
//! This module provides:
//! - `Tokenizer`: Delimiter skipping and digit/word extraction
//! - `Slot`: A typed, writable destination
//! - `Scanner`: The pooled session that dispatches tokens into slots
//! - `scan` and friends: One-call entry points using the shared pool

use std::io::Read;

mod slot;
mod tokenizer;

pub use slot::{ScanInteger, Slot};
pub use tokenizer::{Tokenizer, is_alnum, is_digit};

use crate::buffer::ByteBuffer;
use crate::config::ScanOptions;
use crate::error::{ScanError, SlotError};
use crate::io::{ByteScanner, PushbackReader, stdin_scanner};
use crate::pool::{Pool, Reset};

static SCANNERS: Pool<Scanner> = Pool::new(Scanner::new);

/// The process-wide scanner pool used by [`scan`] and friends.
pub fn scanner_pool() -> &'static Pool<Scanner> {
    &SCANNERS
}

/// Reusable scan session: a working buffer for the current token.
///
/// The source is borrowed per call, never stored, so a released scanner
/// cannot reach the stream its last caller used.
#[derive(Debug, Default)]
pub struct Scanner {
    buf: ByteBuffer,
}

impl Scanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bytes of the most recent token.
    pub fn buffer(&self) -> &ByteBuffer {
        &self.buf
    }

    /// Fill `slots` in order from `source`.
    ///
    /// Scanning is best-effort and stops on the first failure: slots before
    /// the failing one keep their new values, the failing slot and the rest
    /// are untouched. On success the number of filled slots is returned.
    pub fn scan<S>(
        &mut self,
        source: &mut S,
        options: &ScanOptions,
        slots: &mut [Slot<'_>],
    ) -> Result<usize, SlotError>
    where
        S: ByteScanner + ?Sized,
    {
        for (index, slot) in slots.iter_mut().enumerate() {
            let type_name = slot.type_name();
            let mut tokens = Tokenizer::new(&mut *source, &mut self.buf, options);
            scan_slot(&mut tokens, slot).map_err(|error| SlotError {
                index,
                type_name,
                error,
            })?;
        }
        Ok(slots.len())
    }
}

impl Reset for Scanner {
    fn reset(&mut self) {
        self.buf.truncate();
    }
}

fn scan_slot<S>(tokens: &mut Tokenizer<'_, S>, slot: &mut Slot<'_>) -> Result<(), ScanError>
where
    S: ByteScanner + ?Sized,
{
    match slot {
        Slot::Integer { target, .. } => target.assign_digits(tokens.integer_token()?),
        Slot::Text(target) => {
            **target = tokens.parse_word()?;
            Ok(())
        }
        Slot::Dynamic { type_name, target } => {
            if let Some(text) = target.downcast_mut::<String>() {
                *text = tokens.parse_word()?;
                return Ok(());
            }
            match slot::dynamic_integer(&mut **target) {
                Some(int) => int.assign_digits(tokens.integer_token()?),
                None => Err(ScanError::UnsupportedType {
                    type_name: *type_name,
                }),
            }
        }
        Slot::Unbound { type_name } => Err(ScanError::InvalidDestination {
            type_name: *type_name,
        }),
    }
}

/// Scan from a byte scanner using the shared pool and default options.
///
/// The scanner keeps its pushback byte, so a later call continues exactly
/// where this one stopped.
pub fn scan<S>(source: &mut S, slots: &mut [Slot<'_>]) -> Result<usize, SlotError>
where
    S: ByteScanner + ?Sized,
{
    scan_with(source, &ScanOptions::default(), slots)
}

/// Scan from a byte scanner using the shared pool and the given options.
pub fn scan_with<S>(
    source: &mut S,
    options: &ScanOptions,
    slots: &mut [Slot<'_>],
) -> Result<usize, SlotError>
where
    S: ByteScanner + ?Sized,
{
    SCANNERS.acquire().scan(source, options, slots)
}

/// Scan from a plain reader.
///
/// The reader is wrapped for this call only; the byte looked at past the
/// last token is consumed from `reader` and lost. Keep a
/// [`PushbackReader`] and call [`scan`] to read across calls.
pub fn scan_reader<R: Read>(reader: R, slots: &mut [Slot<'_>]) -> Result<usize, SlotError> {
    scan(&mut PushbackReader::new(reader), slots)
}

/// Scan from the process's standard input.
pub fn scan_stdin(slots: &mut [Slot<'_>]) -> Result<usize, SlotError> {
    scan(&mut *stdin_scanner(), slots)
}
