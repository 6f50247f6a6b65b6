//! Command-line argument definitions for the drawnix exporter.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input board, the export formats, where
//! the documents go, the configuration file and the logging verbosity.

use clap::{Parser, ValueEnum};

use drawnix_export::ExportFormat;

/// Command-line arguments for the drawnix exporter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the board snapshot (JSON)
    #[arg(help = "Path to the input board file")]
    pub input: String,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = FormatArg::All)]
    pub format: FormatArg,

    /// Directory the export files are written to
    #[arg(short, long = "output-dir", default_value = ".")]
    pub output_dir: String,

    /// Print the exports to stdout instead of writing files. With several
    /// formats, each document is introduced by a `==> name <==` line
    #[arg(long)]
    pub stdout: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fail instead of writing the failure document when conversion fails
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Formats selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Markdown,
    Mermaid,
    All,
}

impl FormatArg {
    /// Returns the export formats this selection stands for.
    pub fn formats(self) -> &'static [ExportFormat] {
        match self {
            Self::Markdown => &[ExportFormat::Markdown],
            Self::Mermaid => &[ExportFormat::Mermaid],
            Self::All => &ExportFormat::ALL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["drawnix-export", "board.json"]);

        assert_eq!(args.input, "board.json");
        assert_eq!(args.format, FormatArg::All);
        assert_eq!(args.output_dir, ".");
        assert!(!args.stdout);
        assert!(!args.strict);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_format_selection() {
        let args = Args::parse_from(["drawnix-export", "-f", "mermaid", "-o", "out", "b.json"]);

        assert_eq!(args.format.formats(), &[ExportFormat::Mermaid]);
        assert_eq!(args.output_dir, "out");
        assert_eq!(FormatArg::All.formats().len(), 2);
    }
}
