use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::{Header, Record};
use crate::reader::{csv_entries, read_mint_csv};

/// Row numbers are reported as file lines: the skipped header is row 1,
/// so the first data row is row 2.
const FIRST_DATA_ROW: usize = 2;

/// Every record must be exactly as wide as `header`. Fails on the first
/// row that isn't.
pub fn validate_records(path: &Path, header: &Header, records: &[Record]) -> Result<()> {
    for (i, record) in records.iter().enumerate() {
        if record.len() != header.len() {
            return Err(ConvertError::SchemaViolation {
                path: path.to_path_buf(),
                row: i + FIRST_DATA_ROW,
                expected: header.len(),
                found: record.len(),
            });
        }
    }
    Ok(())
}

/// Read and validate one Mint export, returning its row count.
pub fn validate_file(path: &Path) -> Result<usize> {
    debug!(file = %path.display(), "validating Mint CSV file");
    let records = read_mint_csv(path)?;
    validate_records(path, &Header::mint(), &records)?;
    Ok(records.len())
}

/// Validate every CSV file directly inside `dir`.
pub fn validate_dir(dir: &Path) -> Result<Vec<(PathBuf, usize)>> {
    debug!(dir = %dir.display(), "validating Mint CSV files in directory");
    csv_entries(dir)?
        .into_iter()
        .map(|path| validate_file(&path).map(|rows| (path, rows)))
        .collect()
}

/// Validate a file, or every CSV file in a directory.
pub fn validate_path(path: &Path) -> Result<Vec<(PathBuf, usize)>> {
    if !path.exists() {
        return Err(ConvertError::MissingFile(path.to_path_buf()));
    }
    if path.is_dir() {
        validate_dir(path)
    } else {
        Ok(vec![(path.to_path_buf(), validate_file(path)?)])
    }
}
