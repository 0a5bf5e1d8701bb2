//! Row builder: value traversal in lock-step with the header.

use serde_json::{Map, Value};

use crate::schema::{FieldClass, FieldDef, SchemaRegistry, TypeDef};
use crate::types::{CsvError, Result};
use crate::writer::{shape, WriterSettings};

/// Build one row of cells for a record's values.
///
/// The traversal mirrors the header builder field for field; the only
/// difference is that it reads values instead of names. A null value (JSON
/// `null` or an absent key) is padded with as many empty cells as the shape
/// walker counts for the field's declared type, which is what keeps row
/// width constant without an instance to inspect.
///
/// # Errors
///
/// - [`CsvError::FieldAccess`] when the record payload, a composite field
///   value, or an array field value does not have the shape its declared
///   type requires;
/// - [`CsvError::UnknownType`] when a composite type the traversal descends
///   into is not registered.
pub(crate) fn build_row(
    registry: &SchemaRegistry,
    def: &TypeDef,
    values: &Value,
    settings: &WriterSettings,
) -> Result<Vec<String>> {
    let object = values.as_object().ok_or_else(|| CsvError::FieldAccess {
        type_name: def.name.clone(),
        field: "<record>".to_string(),
        reason: "record payload is not a JSON object".to_string(),
    })?;

    let mut cells = Vec::new();
    fill_cells(registry, def, object, settings, 0, &mut cells)?;
    Ok(cells)
}

fn fill_cells(
    registry: &SchemaRegistry,
    def: &TypeDef,
    values: &Map<String, Value>,
    settings: &WriterSettings,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<()> {
    for field in def.fields(settings.use_all_fields) {
        let value = values.get(&field.name).unwrap_or(&Value::Null);

        if value.is_null() {
            // Padding comes from the declared type: there is no instance
            // whose runtime type could be inspected.
            let pad = shape::leaf_count(registry, &field.ty, settings, depth + 1)?;
            out.extend(std::iter::repeat_with(String::new).take(pad));
            continue;
        }

        match field.ty.class() {
            FieldClass::Leaf => out.push(render_leaf(value)),
            FieldClass::Array => {
                if settings.allow_arrays {
                    let items = value
                        .as_array()
                        .ok_or_else(|| access_error(def, field, "array value is not a JSON array"))?;
                    let joined = items
                        .iter()
                        .map(render_leaf)
                        .collect::<Vec<_>>()
                        .join(&settings.array_delimiter);
                    out.push(joined);
                }
            }
            FieldClass::Composite(name) => {
                if depth < settings.max_depth {
                    let sub = registry.resolve(name)?;
                    let object = value.as_object().ok_or_else(|| {
                        access_error(def, field, "composite value is not a JSON object")
                    })?;
                    fill_cells(registry, sub, object, settings, depth + 1, out)?;
                }
            }
        }
    }
    Ok(())
}

/// Bare text form of a leaf value.
///
/// Strings contribute their content without JSON quoting; numbers and
/// booleans use their display form; null is the empty string. Anything else
/// falls back to compact JSON text, since the declared type, not the value,
/// governs the traversal.
fn render_leaf(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn access_error(def: &TypeDef, field: &FieldDef, reason: &str) -> CsvError {
    CsvError::FieldAccess {
        type_name: def.name.clone(),
        field: field.name.clone(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        let mut registry = SchemaRegistry::new();
        registry.register(
            TypeDef::new("Person")
                .field("firstName", FieldType::Text)
                .field("lastName", FieldType::Text)
                .field("age", FieldType::Integer),
        );
        registry.register(
            TypeDef::new("Employee")
                .field("person", FieldType::Composite("Person".to_string()))
                .field("department", FieldType::Text),
        );
        registry
    }

    fn settings(max_depth: usize) -> WriterSettings {
        WriterSettings {
            max_depth,
            ..WriterSettings::default()
        }
    }

    #[test]
    fn test_flat_row() {
        let registry = registry();
        let def = registry.resolve("Person").unwrap();
        let values = json!({"firstName": "John", "lastName": "Doe", "age": 30});

        let cells = build_row(&registry, def, &values, &settings(0)).unwrap();
        assert_eq!(cells, vec!["John", "Doe", "30"]);
    }

    #[test]
    fn test_nested_row() {
        let registry = registry();
        let def = registry.resolve("Employee").unwrap();
        let values = json!({
            "person": {"firstName": "John", "lastName": "Doe", "age": 30},
            "department": "Engineering"
        });

        let cells = build_row(&registry, def, &values, &settings(2)).unwrap();
        assert_eq!(cells, vec!["John", "Doe", "30", "Engineering"]);
    }

    #[test]
    fn test_null_composite_padding() {
        let registry = registry();
        let def = registry.resolve("Employee").unwrap();
        let values = json!({"person": null, "department": "department"});

        let cells = build_row(&registry, def, &values, &settings(2)).unwrap();
        assert_eq!(cells, vec!["", "", "", "department"]);
    }

    #[test]
    fn test_missing_key_is_null() {
        let registry = registry();
        let def = registry.resolve("Person").unwrap();
        let values = json!({"firstName": "John"});

        let cells = build_row(&registry, def, &values, &settings(0)).unwrap();
        assert_eq!(cells, vec!["John", "", ""]);
    }

    #[test]
    fn test_present_empty_string_stays() {
        let registry = registry();
        let def = registry.resolve("Person").unwrap();
        let values = json!({"firstName": "", "lastName": "Doe", "age": 30});

        let cells = build_row(&registry, def, &values, &settings(0)).unwrap();
        assert_eq!(cells[0], "");
        assert_eq!(cells.len(), 3);
    }

    #[test]
    fn test_array_joined_into_one_cell() {
        let mut registry = SchemaRegistry::new();
        registry.register(
            TypeDef::new("Company")
                .field("name", FieldType::Text)
                .field("departments", FieldType::Array(Box::new(FieldType::Text))),
        );
        let def = registry.resolve("Company").unwrap();
        let values = json!({
            "name": "TechCorp",
            "departments": ["Engineering", "Marketing", "Sales"]
        });
        let s = WriterSettings {
            allow_arrays: true,
            ..WriterSettings::default()
        };

        let cells = build_row(&registry, def, &values, &s).unwrap();
        assert_eq!(cells, vec!["TechCorp", "Engineering|Marketing|Sales"]);
    }

    #[test]
    fn test_empty_array_is_one_empty_cell() {
        let mut registry = SchemaRegistry::new();
        registry.register(
            TypeDef::new("Company")
                .field("departments", FieldType::Array(Box::new(FieldType::Text))),
        );
        let def = registry.resolve("Company").unwrap();
        let s = WriterSettings {
            allow_arrays: true,
            ..WriterSettings::default()
        };

        let cells = build_row(&registry, def, &json!({"departments": []}), &s).unwrap();
        assert_eq!(cells, vec![""]);
    }

    #[test]
    fn test_bool_and_float_rendering() {
        let mut registry = SchemaRegistry::new();
        registry.register(
            TypeDef::new("Reading")
                .field("ok", FieldType::Boolean)
                .field("value", FieldType::Float),
        );
        let def = registry.resolve("Reading").unwrap();
        let values = json!({"ok": true, "value": 2.5});

        let cells = build_row(&registry, def, &values, &settings(0)).unwrap();
        assert_eq!(cells, vec!["true", "2.5"]);
    }

    #[test]
    fn test_composite_value_must_be_object() {
        let registry = registry();
        let def = registry.resolve("Employee").unwrap();
        let values = json!({"person": 42, "department": "Engineering"});

        let err = build_row(&registry, def, &values, &settings(2)).unwrap_err();
        assert!(matches!(err, CsvError::FieldAccess { field, .. } if field == "person"));
    }

    #[test]
    fn test_record_payload_must_be_object() {
        let registry = registry();
        let def = registry.resolve("Person").unwrap();

        let err = build_row(&registry, def, &json!([1, 2, 3]), &settings(0)).unwrap_err();
        assert!(matches!(err, CsvError::FieldAccess { .. }));
    }

    #[test]
    fn test_composite_beyond_depth_contributes_nothing() {
        let registry = registry();
        let def = registry.resolve("Employee").unwrap();
        let values = json!({
            "person": {"firstName": "John", "lastName": "Doe", "age": 30},
            "department": "Engineering"
        });

        // max_depth 0: the header dropped `person`, so the row must too.
        let cells = build_row(&registry, def, &values, &settings(0)).unwrap();
        assert_eq!(cells, vec!["Engineering"]);
    }
}
