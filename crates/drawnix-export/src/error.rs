//! Error types for drawnix export operations.
//!
//! - [`ConversionError`] describes a snapshot the exporters cannot convert.
//!   [`Converter::convert`](crate::Converter::convert) contains it and
//!   substitutes a literal failure document; the `try_*` methods return it.
//! - [`ExportError`] is the crate boundary error used by front ends that also
//!   read snapshots and configuration.

use std::io;

use thiserror::Error;

use drawnix_export_core::{element::ElementKind, snapshot::SnapshotError};

/// A snapshot that violates the assumptions of the exporters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("element id `{id}` appears more than once in the snapshot")]
    DuplicateId { id: String },

    #[error("element `{id}` was classified as a mind node but is a {kind}")]
    NotMindNode { id: String, kind: ElementKind },
}

/// The main error type for drawnix export operations.
///
/// # Diagnostic Variants
///
/// The `Snapshot` variant keeps the snapshot source so front ends can point
/// at the failing line and column.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Snapshot { err: SnapshotError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl ExportError {
    /// Create a new `Snapshot` error with the associated source text.
    pub fn new_snapshot_error(err: SnapshotError, src: impl Into<String>) -> Self {
        Self::Snapshot {
            err,
            src: src.into(),
        }
    }
}
