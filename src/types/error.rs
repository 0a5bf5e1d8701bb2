//! Error types for conversion runs.

use thiserror::Error;

/// Errors surfaced by a conversion run.
///
/// Every failure is fatal for the run that raised it: there is no retry or
/// partial-recovery path anywhere in the writer. The caller gets either the
/// full output text or one of these.
#[derive(Error, Debug)]
pub enum CsvError {
    /// Input collection has no elements, so no reference schema exists.
    #[error("cannot convert an empty collection: no record to take the schema from")]
    EmptyCollection,

    /// A record's type differs from the reference type and
    /// `ignore_mismatched` is disabled.
    #[error("record of type `{found}` does not match collection type `{expected}`")]
    MismatchedType { expected: String, found: String },

    /// A composite field names a type that was never registered.
    #[error("type `{0}` is not registered")]
    UnknownType(String),

    /// A record value does not have the shape its declared type requires.
    #[error("cannot read field `{field}` of `{type_name}`: {reason}")]
    FieldAccess {
        type_name: String,
        field: String,
        reason: String,
    },

    /// Sink write failure. File content after a partial failure is undefined.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CsvError>;
