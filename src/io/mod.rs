//! Byte stream plumbing for the scanner and formatter.
//!
//! This module provides:
//! - `ByteScanner`: Trait for byte sources with one byte of pushback
//! - `PushbackReader`: `ByteScanner` over any `Read`
//! - Process-wide stdin/stdout bindings
//! - In-memory implementations for testing

mod memory;
mod pushback;
mod std_io;

pub use memory::{InMemorySink, InMemorySource, InMemoryWriteHandle};
pub use pushback::{ByteScanner, PushbackReader};
pub use std_io::{StdinScanner, stdin_scanner, stdout};
