//! CSV and JSON report files.
//!
//! Both files carry the full row set under the same column names. Write
//! failures are reported and swallowed: a missing report file must not fail
//! a run that already fetched and previewed its data.

use crate::domain::error::WriteError;
use crate::domain::report::{ReportRow, COLUMNS};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Paths of the two report files for one base filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl ReportPaths {
    /// `<base>.csv` and `<base>.json`. The base is used as given, dots included.
    pub fn for_base(base_filename: &str) -> Self {
        Self {
            csv: PathBuf::from(format!("{}.csv", base_filename)),
            json: PathBuf::from(format!("{}.json", base_filename)),
        }
    }
}

/// Result of a soft-failing write
#[derive(Debug)]
pub enum WriteOutcome {
    Written(ReportPaths),
    Failed(WriteError),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, WriteOutcome::Written(_))
    }
}

/// Write both report files, printing the outcome. Never returns an error.
pub fn write_reports(rows: &[ReportRow], base_filename: &str) -> WriteOutcome {
    let paths = ReportPaths::for_base(base_filename);

    let result = write_csv(rows, &paths.csv).and_then(|_| write_json(rows, &paths.json));
    match result {
        Ok(()) => {
            info!(
                "Wrote {} rows to {} and {}",
                rows.len(),
                paths.csv.display(),
                paths.json.display()
            );
            println!("Csv and json file Created");
            WriteOutcome::Written(paths)
        }
        Err(e) => {
            error!("Report write failed: {}", e);
            println!("{}", e);
            WriteOutcome::Failed(e)
        }
    }
}

pub fn write_csv(rows: &[ReportRow], path: &Path) -> Result<(), WriteError> {
    let csv_error = |source| WriteError::Csv {
        path: path.display().to_string(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(COLUMNS).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row.cells()).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| WriteError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn write_json(rows: &[ReportRow], path: &Path) -> Result<(), WriteError> {
    let io_error = |source| WriteError::Io {
        path: path.display().to_string(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut out = BufWriter::new(file);

    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    rows.serialize(&mut serializer).map_err(|source| WriteError::Json {
        path: path.display().to_string(),
        source,
    })?;

    out.write_all(b"\n").map_err(io_error)?;
    out.flush().map_err(io_error)
}
