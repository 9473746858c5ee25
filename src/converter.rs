use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::models::Header;
use crate::reader::{csv_entries, read_mint_csv};
use crate::remap::CategoryMap;
use crate::transform::Plan;
use crate::validator::{validate_path, validate_records};
use crate::writer::write_csv;

/// Everything a run needs besides the paths. Shared read-only by every
/// file in a batch.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub plan: Plan,
    pub categories: Option<CategoryMap>,
    pub atomic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub remapped: usize,
}

/// Read, validate, transform and write a single file.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<FileResult> {
    debug!(input = %input.display(), output = %output.display(), "converting Mint CSV file");

    let mut records = read_mint_csv(input)?;
    let mut header = Header::mint();
    validate_records(input, &header, &records)?;

    options.plan.apply(&mut header, &mut records);
    let remapped = options
        .categories
        .as_ref()
        .map_or(0, |map| map.apply(&header, &mut records));

    write_csv(output, &header, options.plan.writes_header(), &records)?;

    Ok(FileResult {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: records.len(),
        remapped,
    })
}

/// Convert a file, or every CSV file in a directory into a mirrored output
/// directory. In atomic mode everything is validated before anything is
/// written.
pub fn convert_path(input: &Path, output: &Path, options: &ConvertOptions) -> Result<Vec<FileResult>> {
    if !input.exists() {
        return Err(ConvertError::MissingFile(input.to_path_buf()));
    }

    if options.atomic {
        validate_path(input)?;
        if output.exists() {
            validate_path(output)?;
        }
        debug!("atomic pre-validation passed");
    }

    if !input.is_dir() {
        return Ok(vec![convert_file(input, output, options)?]);
    }

    if !output.exists() {
        std::fs::create_dir_all(output)?;
        info!(dir = %output.display(), "created output directory");
    }
    debug!(input = %input.display(), output = %output.display(), "converting Mint CSV files in directory");

    let mut results = Vec::new();
    for path in csv_entries(input)? {
        let Some(name) = path.file_name() else {
            continue;
        };
        results.push(convert_file(&path, &output.join(name), options)?);
    }
    Ok(results)
}

/// Refuse to overwrite the input unless forced. Checked before any file is
/// read or written.
pub fn check_same_path(input: &Path, output: &Path, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    let same = input == output
        || matches!(
            (input.canonicalize(), output.canonicalize()),
            (Ok(a), Ok(b)) if a == b
        );
    if same {
        return Err(ConvertError::ConfigurationConflict(
            "Input and output files are the same. Use -f to force conversion".to_string(),
        ));
    }
    Ok(())
}
