use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{ConvertError, Result};
use crate::models::{Header, CATEGORY};
use crate::reader::{csv_entries, read_mint_csv};

pub fn run(input: &str) -> Result<()> {
    for category in collect_categories(Path::new(input))? {
        println!("{category}");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Data-layer
// ---------------------------------------------------------------------------

/// Distinct, non-empty Category values across a file or every CSV file in
/// a directory, sorted. Rows are not width-checked, so this also works on
/// exports that fail validation.
pub fn collect_categories(path: &Path) -> Result<BTreeSet<String>> {
    if !path.exists() {
        return Err(ConvertError::MissingFile(path.to_path_buf()));
    }
    let files = if path.is_dir() {
        csv_entries(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let header = Header::mint();
    let mut categories = BTreeSet::new();
    for file in files {
        for record in read_mint_csv(&file)? {
            if let Some(category) = record.get(&header, CATEGORY).filter(|c| !c.is_empty()) {
                categories.insert(category.to_string());
            }
        }
    }
    Ok(categories)
}
