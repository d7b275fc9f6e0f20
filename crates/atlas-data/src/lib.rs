// File: crates/atlas-data/src/lib.rs
// Summary: Dataset entry point; exports records, header schema, and the CSV loader.

pub mod error;
pub mod loader;
pub mod record;
pub mod schema;

pub use error::DataError;
pub use loader::{load_path, load_reader, DefaultedCell, LoadReport};
pub use record::{Dataset, Indicator, Record};
