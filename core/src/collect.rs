//! CT-Expo parameter extraction
//!
//! Walks a directory tree, reads every `.dcm` file and writes the acquisition
//! parameters needed for CT-Expo dose estimates to a CSV table. Unreadable
//! files are logged and skipped; the batch always continues.

use crate::error::{Result, ScoutmodError};
use crate::record::read_attribute_row;
use crate::types::AttributeRow;
use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the table written next to the input files by default
pub const DEFAULT_OUTPUT_FILE: &str = "dicom_parameters_for_ct_expo.csv";

/// Extension identifying DICOM files (case-insensitive)
pub const DICOM_EXTENSION: &str = "dcm";

/// Outcome of reading a directory of DICOM files
#[derive(Debug, Default)]
pub struct CollectionReport {
    /// One row per file that could be read
    pub rows: Vec<AttributeRow>,
    /// Files that could not be read, with the reason
    pub skipped: Vec<(PathBuf, String)>,
}

impl CollectionReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Checks whether a path carries the DICOM file extension
pub fn has_dicom_extension(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DICOM_EXTENSION))
}

/// Lists DICOM files in a directory, sorted by path
///
/// With `recursive`, subdirectories are walked as well.
pub fn collect_dicom_files(directory: &Path, recursive: bool) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit(directory, recursive, &mut files)?;
    files.sort();
    Ok(files)
}

fn visit(directory: &Path, recursive: bool, files: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        // Directory links are not followed
        if entry.file_type()?.is_dir() {
            if recursive {
                visit(&path, recursive, files)?;
            }
        } else if path.is_file() && has_dicom_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Reads every DICOM file below `directory` into attribute rows
///
/// Read failures are logged and recorded in [`CollectionReport::skipped`].
pub fn collect_attributes(directory: &Path) -> Result<CollectionReport> {
    let files = collect_dicom_files(directory, true)?;
    info!("Found {} DICOM files", files.len());

    let mut report = CollectionReport::default();
    for path in files {
        match read_attribute_row(&path) {
            Ok(row) => {
                debug!("Processed: {}", path.display());
                report.rows.push(row);
            }
            Err(e) => {
                warn!("Could not read {}: {}", path.display(), e);
                report.skipped.push((path, e.to_string()));
            }
        }
    }

    if !report.skipped.is_empty() {
        warn!(
            "Skipped {} of {} DICOM files",
            report.skipped.len(),
            report.skipped.len() + report.rows.len()
        );
    }
    Ok(report)
}

/// Writes rows as CSV with a header line
pub fn write_attribute_table(rows: &[AttributeRow], output: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(output)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Collects attributes below `directory` and writes them to `output`
///
/// Returns the collection report. When no file could be read nothing is
/// written and [`ScoutmodError::NoInput`] is returned.
pub fn extract_to_csv(directory: &Path, output: &Path) -> Result<CollectionReport> {
    let report = collect_attributes(directory)?;

    if report.is_empty() {
        return Err(ScoutmodError::NoInput(
            "No valid DICOM files were found. CSV file not created.".to_string(),
        ));
    }

    write_attribute_table(&report.rows, output)?;
    info!(
        "Extracted DICOM data has been saved to {}",
        output.display()
    );
    Ok(report)
}
