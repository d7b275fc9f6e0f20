// File: crates/atlas-data/src/error.rs
// Summary: Named load errors for the dataset crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("required column missing from header: {0}")]
    ColumnMissing(&'static str),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is empty")]
    Empty,
}
