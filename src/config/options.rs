//! Scanner and formatter options.

use serde::{Deserialize, Serialize};

/// Policy for values that have no format handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnsupportedPolicy {
    /// Append the unknown marker and stop formatting the enclosing sequence
    #[default]
    Marker,
    /// Return `FormatError::UnsupportedType`
    Fail,
}

impl UnsupportedPolicy {
    /// Parse a policy from a string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "marker" => Some(UnsupportedPolicy::Marker),
            "fail" | "error" => Some(UnsupportedPolicy::Fail),
            _ => None,
        }
    }
}

/// Tokenizer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Bytes that separate tokens
    pub delimiters: Vec<u8>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            delimiters: vec![b' ', b'\n'],
        }
    }
}

impl ScanOptions {
    /// Replace the delimiter set.
    pub fn with_delimiters(mut self, delimiters: impl Into<Vec<u8>>) -> Self {
        self.delimiters = delimiters.into();
        self
    }

    /// Add a delimiter byte, e.g. `b'\t'` or `b'\r'`.
    pub fn add_delimiter(mut self, b: u8) -> Self {
        if !self.delimiters.contains(&b) {
            self.delimiters.push(b);
        }
        self
    }

    pub fn is_delimiter(&self, b: u8) -> bool {
        self.delimiters.contains(&b)
    }
}

/// Formatter options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Between top-level arguments
    pub separator: String,
    /// Between record fields
    pub field_separator: String,
    pub record_open: String,
    pub record_close: String,
    /// Appended in place of a value with no handler
    pub unknown_marker: String,
    pub unsupported: UnsupportedPolicy,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            separator: " ".into(),
            field_separator: ", ".into(),
            record_open: "{ ".into(),
            record_close: " }".into(),
            unknown_marker: " %!unknown% ".into(),
            unsupported: UnsupportedPolicy::Marker,
        }
    }
}

impl FormatOptions {
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }

    /// Set the record delimiters.
    pub fn with_record_delimiters(
        mut self,
        open: impl Into<String>,
        close: impl Into<String>,
    ) -> Self {
        self.record_open = open.into();
        self.record_close = close.into();
        self
    }

    pub fn with_unknown_marker(mut self, marker: impl Into<String>) -> Self {
        self.unknown_marker = marker.into();
        self
    }

    pub fn with_unsupported(mut self, policy: UnsupportedPolicy) -> Self {
        self.unsupported = policy;
        self
    }
}
