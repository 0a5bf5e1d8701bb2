//! CSV conversion: settings, the writer facade, and the three traversals
//! (header, row, shape) that must stay in lock-step.
//!
//! A run is one synchronous pass on the caller's thread: the first record
//! establishes the reference type, the header is built once from its
//! registered definition, then every accepted record contributes exactly
//! one row of the same width. The only I/O is the optional single buffered
//! write at the end.

mod header;
mod row;
mod shape;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::schema::SchemaRegistry;
use crate::types::{CsvError, Record, Result};

/// Conversion settings, fixed for the duration of a run.
///
/// Mutate freely between runs (the writer exposes
/// [`CsvWriter::settings_mut`]); a run itself only reads them. Not
/// thread-safe by design: concurrent conversions need independent writer
/// instances.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterSettings {
    /// Enumerate all fields, private ones included. When false, only
    /// public fields participate.
    pub use_all_fields: bool,

    /// How many levels of composite fields are expanded into columns.
    /// Zero means only the record type's own leaf fields appear.
    pub max_depth: usize,

    /// Allow array fields. A disallowed array contributes nothing to the
    /// output, in header, rows, and null padding alike.
    pub allow_arrays: bool,

    /// Separator between array elements inside a single cell.
    pub array_delimiter: String,

    /// Separator between columns.
    pub column_delimiter: String,

    /// Skip records whose type differs from the reference type. When
    /// false, a mismatch fails the whole run.
    pub ignore_mismatched: bool,

    /// Separator between a composite field's name and its sub-field names
    /// in column headers.
    pub path_separator: String,
}

impl Default for WriterSettings {
    fn default() -> Self {
        Self {
            use_all_fields: true,
            max_depth: 0,
            allow_arrays: false,
            array_delimiter: "|".to_string(),
            column_delimiter: ",".to_string(),
            ignore_mismatched: true,
            path_separator: ".".to_string(),
        }
    }
}

/// Converts collections of records to CSV text.
///
/// Values inside records are emitted verbatim: there is no quoting or
/// escaping, so a value containing the column delimiter will corrupt
/// column alignment. That is a documented limitation of the format, not
/// something the writer detects.
///
/// # Example
///
/// ```rust
/// use flatcsv::{CsvWriter, FieldType, Record, SchemaRegistry, TypeDef};
/// use serde_json::json;
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(
///     TypeDef::new("Person")
///         .field("firstName", FieldType::Text)
///         .field("lastName", FieldType::Text)
///         .field("age", FieldType::Integer),
/// );
///
/// let writer = CsvWriter::new(registry);
/// let csv = writer.write_to_string(&[
///     Record::new("Person", json!({"firstName": "John", "lastName": "Doe", "age": 30})),
///     Record::new("Person", json!({"firstName": "Jane", "lastName": "Smith", "age": 25})),
/// ])?;
/// assert_eq!(csv, "firstName,lastName,age\nJohn,Doe,30\nJane,Smith,25\n");
/// # Ok::<(), flatcsv::CsvError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvWriter {
    registry: SchemaRegistry,
    settings: WriterSettings,
}

impl CsvWriter {
    /// Create a writer with default settings.
    pub fn new(registry: SchemaRegistry) -> Self {
        Self::with_settings(registry, WriterSettings::default())
    }

    /// Create a writer with explicit settings.
    pub fn with_settings(registry: SchemaRegistry, settings: WriterSettings) -> Self {
        Self { registry, settings }
    }

    /// Current settings.
    pub fn settings(&self) -> &WriterSettings {
        &self.settings
    }

    /// Mutable settings, for reconfiguring between runs.
    pub fn settings_mut(&mut self) -> &mut WriterSettings {
        &mut self.settings
    }

    /// The schema registry this writer resolves types against.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Mutable registry access, for registering further types.
    pub fn registry_mut(&mut self) -> &mut SchemaRegistry {
        &mut self.registry
    }

    /// The ordered column set a type produces under the current settings.
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::UnknownType`] when `type_name` (or a composite
    /// type the traversal descends into) is not registered.
    pub fn columns(&self, type_name: &str) -> Result<Vec<String>> {
        let def = self.registry.resolve(type_name)?;
        header::build_columns(&self.registry, def, &self.settings)
    }

    /// Convert a collection of records to CSV text.
    ///
    /// The first record's type is the reference schema for the whole run.
    /// Records of a different type are skipped when `ignore_mismatched` is
    /// set and fail the run otherwise; the check happens before any field
    /// of the record is read. Every line, header and rows alike, ends with
    /// exactly one line feed.
    ///
    /// # Errors
    ///
    /// - [`CsvError::EmptyCollection`] when `records` is empty;
    /// - [`CsvError::MismatchedType`] on a foreign record when
    ///   `ignore_mismatched` is false;
    /// - [`CsvError::UnknownType`] / [`CsvError::FieldAccess`] from the
    ///   traversals.
    pub fn write_to_string(&self, records: &[Record]) -> Result<String> {
        let first = records.first().ok_or(CsvError::EmptyCollection)?;
        let def = self.registry.resolve(&first.type_name)?;
        let columns = header::build_columns(&self.registry, def, &self.settings)?;

        tracing::debug!(
            type_name = %def.name,
            records = records.len(),
            columns = columns.len(),
            "converting records to csv"
        );

        let mut text = String::new();
        text.push_str(&columns.join(&self.settings.column_delimiter));
        text.push('\n');

        for record in records {
            if record.type_name != def.name {
                if self.settings.ignore_mismatched {
                    tracing::debug!(
                        expected = %def.name,
                        found = %record.type_name,
                        "skipping record of mismatched type"
                    );
                    continue;
                }
                return Err(CsvError::MismatchedType {
                    expected: def.name.clone(),
                    found: record.type_name.clone(),
                });
            }

            let cells = row::build_row(&self.registry, def, &record.values, &self.settings)?;
            text.push_str(&cells.join(&self.settings.column_delimiter));
            text.push('\n');
        }

        Ok(text)
    }

    /// Convert a collection of records and write the text to a file.
    ///
    /// The whole output is assembled in memory first and written as a
    /// single buffered write with overwrite semantics. The file handle is
    /// released on every exit path; file content after a failed write is
    /// undefined.
    ///
    /// # Errors
    ///
    /// Everything [`CsvWriter::write_to_string`] returns, plus
    /// [`CsvError::Io`] on create/write failure.
    pub fn write_to_file(&self, records: &[Record], path: impl AsRef<Path>) -> Result<()> {
        let text = self.write_to_string(records)?;
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(text.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
