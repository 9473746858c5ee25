use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::Record;

pub const CSV_EXTENSION: &str = ".csv";

/// Read a Mint export. The first row is treated as the header and skipped
/// without looking at it; every other row is kept as-is, whatever its
/// width, so the validator can report short or long rows.
pub fn read_mint_csv(path: &Path) -> Result<Vec<Record>> {
    if !path.exists() {
        return Err(ConvertError::MissingFile(path.to_path_buf()));
    }
    debug!(file = %path.display(), "reading CSV file");

    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result.map_err(|e| ConvertError::MalformedInput {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        records.push(Record::new(row.iter().map(str::to_string).collect()));
    }
    debug!(file = %path.display(), rows = records.len(), "read CSV file");
    Ok(records)
}

/// The CSV files directly inside `dir`, sorted by name. Subdirectories and
/// files with other extensions are skipped; there is no recursion.
pub fn csv_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_csv = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(CSV_EXTENSION));
        if is_csv && path.is_file() {
            entries.push(path);
        } else {
            debug!(entry = %path.display(), "skipping non-CSV entry");
        }
    }
    entries.sort();
    Ok(entries)
}
