//! # flatcsv - Schema-driven recursive CSV flattening
//!
//! Converts homogeneous collections of structured records into
//! delimiter-separated text, recursively flattening nested composite fields
//! into flat columns. Record types are described once in a
//! [`SchemaRegistry`] instead of being discovered by reflection, so the
//! header, row, and null-padding traversals are all driven by the same
//! declared shapes and provably stay in lock-step.
//!
//! ## Quick Start
//!
//! ```rust
//! use flatcsv::{CsvWriter, FieldType, Record, SchemaRegistry, TypeDef, WriterSettings};
//! use serde_json::json;
//!
//! let mut registry = SchemaRegistry::new();
//! registry.register(
//!     TypeDef::new("Person")
//!         .field("firstName", FieldType::Text)
//!         .field("lastName", FieldType::Text)
//!         .field("age", FieldType::Integer),
//! );
//! registry.register(
//!     TypeDef::new("Employee")
//!         .field("person", FieldType::Composite("Person".into()))
//!         .field("department", FieldType::Text),
//! );
//!
//! let writer = CsvWriter::with_settings(
//!     registry,
//!     WriterSettings { max_depth: 2, ..WriterSettings::default() },
//! );
//!
//! let csv = writer.write_to_string(&[Record::new(
//!     "Employee",
//!     json!({
//!         "person": {"firstName": "John", "lastName": "Doe", "age": 30},
//!         "department": "Engineering"
//!     }),
//! )])?;
//!
//! assert_eq!(
//!     csv,
//!     "person.firstName,person.lastName,person.age,department\nJohn,Doe,30,Engineering\n"
//! );
//! # Ok::<(), flatcsv::CsvError>(())
//! ```
//!
//! ## Null padding
//!
//! When a nested sub-object is entirely absent, its columns are still
//! present in every row: a shape-only walk of the *declared* type counts
//! how many leaf columns the subtree would have produced and pads that many
//! empty cells. Row width therefore always equals header width, for every
//! record that passes the type-match policy.
//!
//! ## Limitations
//!
//! Values are emitted verbatim with no quoting or escaping; a value
//! containing the column delimiter silently corrupts column alignment.
//! Conversion is synchronous and single-threaded: one run, one call stack,
//! one optional file write at the end.

pub mod schema;
pub mod types;
pub mod writer;

pub use schema::{FieldClass, FieldDef, FieldType, FieldVisibility, SchemaRegistry, TypeDef};
pub use types::{CsvError, Record, Result};
pub use writer::{CsvWriter, WriterSettings};
