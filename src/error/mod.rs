//! Error types for scanning and formatting.
//!
//! This module provides:
//! - `ScanError`: Failures raised by the pushback reader and tokenizer
//! - `SlotError`: A `ScanError` with the destination it happened on
//! - `FormatError`: Failures raised while formatting or flushing values

use std::fmt;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The underlying stream has no more bytes.
    ///
    /// Token runs treat this as "the run ends here"; it only reaches a
    /// caller through [`crate::ByteScanner::read_byte`].
    #[error("end of input")]
    EndOfInput,

    /// A token was required but only delimiters (or nothing) remained.
    #[error("unexpected end of input: expected a token")]
    UnexpectedEndOfInput,

    /// The digit run did not parse as an integer of the destination type.
    #[error("malformed integer: {token:?}")]
    MalformedInteger { token: String },

    /// Pushback protocol violation: nothing was read yet, or a byte is
    /// already pending.
    #[error("no byte to unread")]
    NoByteToUnread,

    /// The destination type has no scan handler.
    #[error("unsupported destination type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// The destination is not a writable location.
    #[error("destination is not writable: {type_name}")]
    InvalidDestination { type_name: &'static str },

    /// The underlying reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, ScanError::EndOfInput)
    }
}

/// A scan failure on a specific destination.
///
/// `index` is the position of the failing destination, which is also the
/// number of destinations that were assigned before the scan stopped.
#[derive(Debug)]
pub struct SlotError {
    /// Position of the failing destination
    pub index: usize,
    /// Declared type of the failing destination
    pub type_name: &'static str,
    /// The underlying error
    pub error: ScanError,
}

impl SlotError {
    /// Number of destinations assigned before the failure.
    pub fn assigned(&self) -> usize {
        self.index
    }
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[slot {}: {}] {}", self.index, self.type_name, self.error)
    }
}

impl std::error::Error for SlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[derive(Debug, Error)]
pub enum FormatError {
    /// A value had no format handler and the policy is
    /// [`crate::UnsupportedPolicy::Fail`].
    #[error("unsupported value type: {type_name}")]
    UnsupportedType { type_name: &'static str },

    /// A `Serialize` implementation reported an error while being
    /// converted with [`crate::to_value`].
    #[error("serialize error: {0}")]
    Serialize(String),

    /// Writing the formatted bytes to the sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
