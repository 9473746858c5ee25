use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::models::{Header, Record, CATEGORY};

/// Old category label -> new label, loaded from a two-column CSV.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryMap {
    entries: HashMap<String, String>,
}

impl CategoryMap {
    /// Load a remap file. There is no header row: every line is a mapping.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConvertError::MissingFile(path.to_path_buf()));
        }
        let file = std::fs::File::open(path)?;
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(std::io::BufReader::new(file));

        let mut entries = HashMap::new();
        for (i, result) in rdr.records().enumerate() {
            let row = result.map_err(|e| ConvertError::MalformedInput {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
            if row.len() < 2 {
                return Err(ConvertError::MalformedInput {
                    path: path.to_path_buf(),
                    reason: format!("row {} needs an old and a new category", i + 1),
                });
            }
            entries.insert(row[0].to_string(), row[1].to_string());
        }
        debug!(file = %path.display(), mappings = entries.len(), "loaded category remap");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries.get(category).map(String::as_str)
    }

    /// Replace every mapped Category value, returning how many changed.
    /// Categories missing from the table are left alone.
    pub fn apply(&self, header: &Header, records: &mut [Record]) -> usize {
        let Some(idx) = header.position(CATEGORY) else {
            return 0;
        };
        let mut remapped = 0;
        for record in records.iter_mut() {
            let Some(value) = record.value_at_mut(idx) else {
                continue;
            };
            if let Some(new) = self.get(value) {
                *value = new.to_string();
                remapped += 1;
            }
        }
        remapped
    }
}

impl FromIterator<(String, String)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
