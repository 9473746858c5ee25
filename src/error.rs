use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid CSV file: {path}: {reason}")]
    MalformedInput { path: PathBuf, reason: String },

    #[error(
        "Invalid Mint CSV file contents: {path}: row {row} has {found} columns, expected {expected}"
    )]
    SchemaViolation {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),

    #[error("{0}")]
    ConfigurationConflict(String),

    #[error("File or directory does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Settings error: {0}")]
    Settings(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
