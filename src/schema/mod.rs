//! Schema model: type definitions, field classification, and the registry
//! that resolves composite field types during traversal.

pub mod registry;
pub mod types;

pub use registry::SchemaRegistry;
pub use types::{FieldClass, FieldDef, FieldType, FieldVisibility, TypeDef};
