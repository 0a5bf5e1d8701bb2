//! Header builder: depth-first column-name traversal.

use crate::schema::{FieldClass, SchemaRegistry, TypeDef};
use crate::types::Result;
use crate::writer::WriterSettings;

/// Build the ordered column set for a type.
///
/// Column order is the depth-first, declaration-order walk of the type's
/// fields: a leaf contributes its qualified name, an allowed array
/// contributes one column for the whole sequence, and a composite within
/// the depth bound contributes its own fields prefixed with
/// `name + path_separator`. Composites at or past `max_depth`, and arrays
/// when arrays are disallowed, are dropped silently.
///
/// The row builder reproduces this exact traversal over values, which is
/// what keeps every row the same width as the header.
pub(crate) fn build_columns(
    registry: &SchemaRegistry,
    def: &TypeDef,
    settings: &WriterSettings,
) -> Result<Vec<String>> {
    let mut columns = Vec::new();
    fill_columns(registry, def, settings, "", 0, &mut columns)?;
    Ok(columns)
}

fn fill_columns(
    registry: &SchemaRegistry,
    def: &TypeDef,
    settings: &WriterSettings,
    prefix: &str,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<()> {
    for field in def.fields(settings.use_all_fields) {
        let qualified = format!("{prefix}{}", field.name);
        match field.ty.class() {
            FieldClass::Leaf => out.push(qualified),
            FieldClass::Array => {
                // One column for the whole sequence, never one per element.
                if settings.allow_arrays {
                    out.push(qualified);
                }
            }
            FieldClass::Composite(name) => {
                if depth < settings.max_depth {
                    let sub = registry.resolve(name)?;
                    let sub_prefix = format!("{qualified}{}", settings.path_separator);
                    fill_columns(registry, sub, settings, &sub_prefix, depth + 1, out)?;
                }
            }
        }
    }
    Ok(())
}
