//! Export results.
//!
//! An [`Export`] always carries renderable text. Its [`ExportStatus`] tells
//! whether the text was generated from the board, is the empty-board sample,
//! or is the failure document standing in for a [`ConversionError`].

use std::fmt;

use chrono::NaiveDate;

use crate::{error::ConversionError, mermaid::Connectivity};

/// Prefix of every export file name.
pub const FILE_STEM_PREFIX: &str = "drawnix-export";

/// The text encodings a board can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Markdown,
    Mermaid,
}

impl ExportFormat {
    /// All formats, in the order front ends list them.
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Markdown, ExportFormat::Mermaid];

    /// Returns the file extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Mermaid => "mmd",
        }
    }

    /// Returns the download file name for an export made on `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chrono::NaiveDate;
    /// # use drawnix_export::ExportFormat;
    /// let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
    /// assert_eq!(ExportFormat::Mermaid.file_name(date), "drawnix-export-2025-03-09.mmd");
    /// ```
    pub fn file_name(self, date: NaiveDate) -> String {
        format!(
            "{FILE_STEM_PREFIX}-{}.{}",
            date.format("%Y-%m-%d"),
            self.extension()
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Mermaid => f.write_str("mermaid"),
        }
    }
}

/// Where the text of an [`Export`] came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    /// Generated from the board content.
    Converted,
    /// The board had nothing to convert; the text is the sample document.
    Sample,
    /// Conversion failed; the text is the failure document.
    Failed(ConversionError),
}

/// The outcome of converting a board to one format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    format: ExportFormat,
    text: String,
    status: ExportStatus,
    connectivity: Option<Connectivity>,
}

impl Export {
    pub(crate) fn new(
        format: ExportFormat,
        text: String,
        status: ExportStatus,
        connectivity: Option<Connectivity>,
    ) -> Self {
        Self {
            format,
            text,
            status,
            connectivity,
        }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    /// Returns the exported document.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn status(&self) -> &ExportStatus {
        &self.status
    }

    /// Returns how the edges of a free-form flowchart were obtained.
    ///
    /// Only set when the text contains a flowchart generated from shapes and
    /// connectors.
    pub fn connectivity(&self) -> Option<Connectivity> {
        self.connectivity
    }

    /// Returns `true` when the text was generated from the board.
    pub fn is_converted(&self) -> bool {
        matches!(self.status, ExportStatus::Converted)
    }

    /// Returns the failure reason, if conversion failed.
    pub fn failure(&self) -> Option<&ConversionError> {
        match &self.status {
            ExportStatus::Failed(err) => Some(err),
            _ => None,
        }
    }
}
