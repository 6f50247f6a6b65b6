//! Error adapter for converting ExportError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! Snapshot JSON errors carry the line and column reported by the JSON
//! decoder; they are rendered as a labeled snippet of the board file.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceOffset, SourceSpan};

use drawnix_export::{ConversionError, ExportError};
use drawnix_export_core::snapshot::SnapshotError;

/// Adapter for a snapshot loading error with its source text.
pub struct SnapshotAdapter<'a> {
    /// The wrapped error
    err: &'a SnapshotError,
    /// Board file content for displaying snippets
    src: &'a str,
}

impl<'a> SnapshotAdapter<'a> {
    /// Create a new snapshot adapter.
    pub fn new(err: &'a SnapshotError, src: &'a str) -> Self {
        Self { err, src }
    }

    fn span(&self) -> Option<SourceSpan> {
        let (line, column) = self.err.location()?;
        let offset = SourceOffset::from_location(self.src, line, column);
        let len = usize::from(offset.offset() < self.src.len());
        Some(SourceSpan::new(offset, len))
    }
}

impl fmt::Debug for SnapshotAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SnapshotAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.err, f)
    }
}

impl std::error::Error for SnapshotAdapter<'_> {}

impl MietteDiagnostic for SnapshotAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("drawnix_export::snapshot"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            SnapshotError::Json(_) => None,
            SnapshotError::Shape => Some(Box::new(
                "export a board as `.drawnix` or pass the `elements` array itself",
            )),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span()?;
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some("here".to_string()), span),
        )))
    }
}

/// Adapter for [`ExportError`] variants without source text.
pub struct ErrorAdapter<'a>(pub &'a ExportError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ExportError::Io(_) => "drawnix_export::io",
            ExportError::Snapshot { .. } => "drawnix_export::snapshot",
            ExportError::Config(_) => "drawnix_export::config",
            ExportError::Conversion(_) => "drawnix_export::conversion",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            ExportError::Conversion(ConversionError::DuplicateId { .. }) => {
                "element ids must be unique across the board, mind-map children included"
            }
            ExportError::Conversion(ConversionError::NotMindNode { .. }) => {
                "only mind-map trees can be exported as outlines"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a snapshot error with its source text or any other
/// error, providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A snapshot error with source location information.
    Snapshot(SnapshotAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Snapshot(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Snapshot(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Snapshot(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Snapshot(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Snapshot(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Snapshot(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an [`ExportError`] into a reportable error.
pub fn to_reportable(err: &ExportError) -> Reportable<'_> {
    match err {
        ExportError::Snapshot { err, src } => Reportable::Snapshot(SnapshotAdapter::new(err, src)),
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}
