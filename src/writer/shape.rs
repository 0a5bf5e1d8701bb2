//! Shape walker: instance-free column counting.
//!
//! When a field value is null there is no instance to traverse, but the row
//! must still line up with the header. The shape walk answers one question
//! from the declared type alone: how many columns would a value of this
//! type have occupied, starting at this depth? The answer is exactly the
//! number of empty cells to pad.
//!
//! The walk uses the same classifier outcomes and the same depth-increment
//! convention as the header and row builders, so the three traversals can
//! never disagree on column counts.

use crate::schema::{FieldClass, FieldType, SchemaRegistry};
use crate::types::Result;
use crate::writer::WriterSettings;

/// Number of columns a value of `ty` occupies starting at `depth`.
///
/// Matches what the header builder emits for the same subtree:
/// - a leaf, or an array when arrays are allowed, is one column;
/// - an array when arrays are disallowed is zero columns;
/// - a composite past `max_depth` is zero columns (and its name is not
///   resolved, matching the header's refusal to descend);
/// - otherwise the composite's fields are summed, recursing one level
///   deeper into nested composites while `depth < max_depth`.
///
/// # Errors
///
/// Returns [`crate::types::CsvError::UnknownType`] when a composite type
/// the walk actually descends into is not registered.
pub(crate) fn leaf_count(
    registry: &SchemaRegistry,
    ty: &FieldType,
    settings: &WriterSettings,
    depth: usize,
) -> Result<usize> {
    let name = match ty.class() {
        FieldClass::Leaf => return Ok(1),
        FieldClass::Array => return Ok(if settings.allow_arrays { 1 } else { 0 }),
        FieldClass::Composite(name) => name,
    };
    if depth > settings.max_depth {
        return Ok(0);
    }

    let def = registry.resolve(name)?;
    let mut count = 0;
    for field in def.fields(settings.use_all_fields) {
        match field.ty.class() {
            FieldClass::Leaf => count += 1,
            FieldClass::Array => {
                if settings.allow_arrays {
                    count += 1;
                }
            }
            FieldClass::Composite(_) => {
                if depth < settings.max_depth {
                    count += leaf_count(registry, &field.ty, settings, depth + 1)?;
                }
            }
        }
    }
    Ok(count)
}
