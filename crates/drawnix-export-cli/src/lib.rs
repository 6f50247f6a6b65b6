//! CLI logic for the drawnix exporter.
//!
//! This module contains the core CLI logic: loading the board, converting it
//! and writing the export documents.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, FormatArg};

use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use chrono::{NaiveDate, Utc};
use log::{info, warn};

use drawnix_export::{Converter, ExportError, ExportStatus, snapshot::Snapshot};

/// Run the drawnix exporter
///
/// Exports are named after the current UTC date.
///
/// # Errors
///
/// Returns `ExportError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Malformed board files
/// - Conversion failures when `--strict` is set
pub fn run(args: &Args) -> Result<(), ExportError> {
    run_on(args, Utc::now().date_naive())
}

/// Run the drawnix exporter, naming exports after `date`.
///
/// # Errors
///
/// See [`run`].
pub fn run_on(args: &Args, date: NaiveDate) -> Result<(), ExportError> {
    info!(
        input_path = args.input,
        format:? = args.format;
        "Exporting board"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;
    let snapshot = match Snapshot::from_json(&source) {
        Ok(snapshot) => snapshot,
        Err(err) => return Err(ExportError::new_snapshot_error(err, source)),
    };
    if snapshot.skipped() > 0 {
        warn!(skipped = snapshot.skipped(); "Some board elements cannot be exported");
    }

    let converter = Converter::new(app_config);
    let output_dir = Path::new(&args.output_dir);
    if !args.stdout {
        fs::create_dir_all(output_dir)?;
    }

    let formats = args.format.formats();
    for (index, &format) in formats.iter().enumerate() {
        let export = converter.convert(&snapshot, format);

        match export.status() {
            ExportStatus::Failed(err) if args.strict => {
                return Err(ExportError::Conversion(err.clone()));
            }
            ExportStatus::Failed(err) => {
                warn!(format:% = format, err:% = err; "Writing failure document");
            }
            ExportStatus::Sample => {
                info!(format:% = format; "Board is empty, writing sample document");
            }
            ExportStatus::Converted => {}
        }

        if args.stdout {
            let heading = (formats.len() > 1).then(|| format.file_name(date));
            write_document(
                &mut io::stdout().lock(),
                heading.as_deref(),
                index > 0,
                export.text(),
            )?;
        } else {
            let path = output_dir.join(format.file_name(date));
            fs::write(&path, export.text())?;
            info!(
                output_file = path.display().to_string(),
                connectivity:? = export.connectivity();
                "Export written"
            );
        }
    }

    Ok(())
}

/// Writes one export to `out`, terminated by a newline.
///
/// With several exports on one stream, each is introduced by a
/// `==> name <==` heading line, and every heading after the first is preceded
/// by a blank line.
fn write_document(
    out: &mut impl Write,
    heading: Option<&str>,
    follows_another: bool,
    text: &str,
) -> io::Result<()> {
    if let Some(heading) = heading {
        if follows_another {
            out.write_all(b"\n")?;
        }
        writeln!(out, "==> {heading} <==")?;
    }
    out.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        out.write_all(b"\n")?;
    }
    Ok(())
}
