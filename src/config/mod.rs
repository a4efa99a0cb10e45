//! Configuration types for the scanner and formatter.
//!
//! This module provides:
//! - `ScanOptions`: Delimiter set used by the tokenizer
//! - `FormatOptions`: Separators, markers and the unsupported-value policy
//! - `Config`: Both option sets, loadable from JSON/YAML files

mod file;
mod options;

pub use file::{Config, ConfigError};
pub use options::{FormatOptions, ScanOptions, UnsupportedPolicy};
