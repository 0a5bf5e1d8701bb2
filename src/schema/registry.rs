//! Schema registry.
//!
//! Maps type names to their definitions. Composite fields name other types
//! by string; the registry is where those names resolve during traversal.

use std::collections::HashMap;

use crate::schema::types::TypeDef;
use crate::types::{CsvError, Result};

/// Registered type definitions, keyed by type name.
///
/// Registration replaces reflective field discovery: a type is described
/// once, and every conversion run that mentions it (directly or through a
/// composite field) resolves it here. Registering a name twice overwrites
/// the earlier definition.
///
/// # Example
///
/// ```rust
/// use flatcsv::{FieldType, SchemaRegistry, TypeDef};
///
/// let mut registry = SchemaRegistry::new();
/// registry.register(
///     TypeDef::new("Person")
///         .field("firstName", FieldType::Text)
///         .field("age", FieldType::Integer),
/// );
/// assert!(registry.has("Person"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    types: HashMap<String, TypeDef>,
}

impl SchemaRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type definition under its own name.
    pub fn register(&mut self, def: TypeDef) {
        self.types.insert(def.name.clone(), def);
    }

    /// Register a type definition given as a JSON value.
    ///
    /// The value must deserialize into a [`TypeDef`], e.g.:
    ///
    /// ```rust
    /// # use flatcsv::SchemaRegistry;
    /// # use serde_json::json;
    /// let mut registry = SchemaRegistry::new();
    /// registry.register_value(json!({
    ///     "name": "Person",
    ///     "fields": [
    ///         {"name": "firstName", "type": "text"},
    ///         {"name": "age", "type": "integer"}
    ///     ]
    /// })).unwrap();
    /// assert!(registry.has("Person"));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::FieldAccess`] when the value is not a valid type
    /// definition.
    pub fn register_value(&mut self, value: serde_json::Value) -> Result<()> {
        let def: TypeDef = serde_json::from_value(value).map_err(|e| CsvError::FieldAccess {
            type_name: "<schema definition>".to_string(),
            field: String::new(),
            reason: e.to_string(),
        })?;
        self.register(def);
        Ok(())
    }

    /// Look up a type definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`CsvError::UnknownType`] when the name was never registered.
    pub fn resolve(&self, name: &str) -> Result<&TypeDef> {
        self.types
            .get(name)
            .ok_or_else(|| CsvError::UnknownType(name.to_string()))
    }

    /// Check whether a type name is registered.
    pub fn has(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }
}
