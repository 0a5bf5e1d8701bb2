//! Record data structure.
//!
//! A record is an opaque data object paired with the name of its registered
//! type. The writer never inspects the JSON payload to discover structure;
//! traversal is always driven by the registered `TypeDef`, and the payload
//! only supplies cell values.

use serde::{Deserialize, Serialize};

/// A single data record: a type tag plus a JSON object of field values.
///
/// The `type_name` is the record's runtime type for the purposes of the
/// writer's same-type policy: the first record of a collection establishes
/// the reference type, and every later record is compared against it by tag
/// before any of its fields are read.
///
/// Field values live in `values`, which must be a JSON object. A key that is
/// absent and a key that maps to JSON `null` are treated identically: the
/// field is null and is padded from its declared type's shape.
///
/// # Example
///
/// ```rust
/// use flatcsv::Record;
/// use serde_json::json;
///
/// let record = Record::new(
///     "Person",
///     json!({"firstName": "John", "lastName": "Doe", "age": 30}),
/// );
/// assert_eq!(record.type_name, "Person");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// Name of the registered type this record is an instance of
    pub type_name: String,

    /// Field values (JSON object)
    pub values: serde_json::Value,
}

impl Record {
    /// Create a record for a registered type.
    pub fn new(type_name: impl Into<String>, values: serde_json::Value) -> Self {
        Self {
            type_name: type_name.into(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_creation() {
        let record = Record::new("Person", json!({"firstName": "John"}));
        assert_eq!(record.type_name, "Person");
        assert_eq!(record.values["firstName"], json!("John"));
    }

    #[test]
    fn test_record_serialization() {
        let record = Record::new("Person", json!({"age": 30}));
        let text = serde_json::to_string(&record).unwrap();
        let parsed: Record = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, record);
    }
}
