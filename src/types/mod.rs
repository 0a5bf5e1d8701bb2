//! Core data types: records and the crate-wide error/result pair.

pub mod error;
pub mod record;

pub use error::{CsvError, Result};
pub use record::Record;
