//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{FormatError, ScanError, SlotError};

/// A diagnostic wrapper for scan and format errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct TextioDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn scan_help(error: &ScanError) -> Option<String> {
    match error {
        ScanError::UnexpectedEndOfInput => {
            Some("The input ran out before every destination was filled".into())
        }
        ScanError::MalformedInteger { .. } => Some(
            "Integer tokens are unsigned runs of ASCII digits that fit the destination type".into(),
        ),
        ScanError::UnsupportedType { .. } | ScanError::InvalidDestination { .. } => {
            Some("Scan destinations must be mutable integers or strings".into())
        }
        ScanError::NoByteToUnread => Some("This is an internal pushback defect".into()),
        ScanError::EndOfInput | ScanError::Io(_) => None,
    }
}

impl From<SlotError> for TextioDiagnostic {
    fn from(e: SlotError) -> Self {
        TextioDiagnostic {
            message: format!("scan failed on slot {} ({})", e.index, e.type_name),
            help: scan_help(&e.error),
            source: Some(Box::new(e.error)),
            severity: Severity::Error,
        }
    }
}

impl From<FormatError> for TextioDiagnostic {
    fn from(e: FormatError) -> Self {
        let help = match &e {
            FormatError::UnsupportedType { .. } => {
                Some("Only integers, text and records can be formatted".into())
            }
            FormatError::Serialize(_) | FormatError::Io(_) => None,
        };
        TextioDiagnostic {
            message: "format failed".into(),
            source: Some(Box::new(e)),
            help,
            severity: Severity::Error,
        }
    }
}

impl From<SlotError> for miette::Report {
    fn from(e: SlotError) -> Self {
        miette::Report::new(TextioDiagnostic::from(e))
    }
}

impl From<FormatError> for miette::Report {
    fn from(e: FormatError) -> Self {
        miette::Report::new(TextioDiagnostic::from(e))
    }
}
