//! Type and field definitions.
//!
//! The writer never uses runtime reflection. Every record type is described
//! up front by a [`TypeDef`]: an ordered list of named fields, each carrying
//! a declared [`FieldType`]. The declared type is what drives column layout,
//! which is what makes null padding possible: a null sub-object has no
//! instance to inspect, but its declared type still says exactly how many
//! columns it would have filled.

use serde::{Deserialize, Serialize};

/// Declared type of a field.
///
/// The leaf kinds map to the value categories that occupy exactly one CSV
/// cell: numbers, booleans, single characters, text, and symbolic
/// enumeration values. `Array` holds its element type; `Composite` names
/// another registered type to be flattened recursively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// Whole number
    Integer,

    /// Floating-point number
    Float,

    /// Boolean
    Boolean,

    /// Single character
    Char,

    /// Text / string
    Text,

    /// Symbolic enumeration value, emitted as its text form
    Enum,

    /// Ordered sequence of elements, joined into a single cell
    ///
    /// Arrays are never expanded into one column per element. When arrays
    /// are allowed, the whole array occupies one cell; when disallowed, the
    /// field contributes nothing anywhere in the output.
    Array(Box<FieldType>),

    /// Reference to another registered type, flattened up to `max_depth`
    Composite(String),
}

/// Classification of a declared type, consumed identically by the header,
/// row, and shape traversals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldClass<'a> {
    /// Single-cell value
    Leaf,

    /// Sequence joined into a single cell (subject to `allow_arrays`)
    Array,

    /// Registered type to recurse into (subject to `max_depth`)
    Composite(&'a str),
}

impl FieldType {
    /// Classify this type as leaf, array, or composite.
    ///
    /// Pure function of the type tag. Arrays are deliberately not leaves:
    /// the allow/disallow decision is a separate explicit check made by
    /// each traversal, never folded into the leaf test.
    pub fn class(&self) -> FieldClass<'_> {
        match self {
            FieldType::Integer
            | FieldType::Float
            | FieldType::Boolean
            | FieldType::Char
            | FieldType::Text
            | FieldType::Enum => FieldClass::Leaf,
            FieldType::Array(_) => FieldClass::Array,
            FieldType::Composite(name) => FieldClass::Composite(name),
        }
    }

    /// True for the single-cell value kinds.
    pub fn is_leaf(&self) -> bool {
        matches!(self.class(), FieldClass::Leaf)
    }
}

/// Field visibility, mirroring public vs. non-public fields on the record
/// type.
///
/// The enumeration mode (`use_all_fields`) decides whether private fields
/// participate in a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldVisibility {
    #[default]
    Public,
    Private,
}

/// A single named field of a [`TypeDef`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    /// Field name as it appears in record payloads and column names
    pub name: String,

    /// Declared type
    #[serde(rename = "type")]
    pub ty: FieldType,

    /// Visibility (public unless stated otherwise)
    #[serde(default)]
    pub visibility: FieldVisibility,
}

/// Ordered field list for one record type.
///
/// Field order is declaration order: the order fields were added to the
/// builder (or appear in a JSON definition) is the order their columns
/// appear in the output. A type may have zero fields.
///
/// # Example
///
/// ```rust
/// use flatcsv::{FieldType, TypeDef};
///
/// let person = TypeDef::new("Person")
///     .field("firstName", FieldType::Text)
///     .field("lastName", FieldType::Text)
///     .field("age", FieldType::Integer);
/// assert_eq!(person.fields(true).count(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TypeDef {
    /// Type name, the key it is registered under
    pub name: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl TypeDef {
    /// Create an empty type definition.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Append a public field.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            visibility: FieldVisibility::Public,
        });
        self
    }

    /// Append a private field, visible only when `use_all_fields` is set.
    pub fn private_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(FieldDef {
            name: name.into(),
            ty,
            visibility: FieldVisibility::Private,
        });
        self
    }

    /// Enumerate fields in declaration order.
    ///
    /// With `use_all_fields` every field is returned, private ones
    /// included; otherwise only public fields participate. Types with no
    /// fields yield an empty iterator.
    pub fn fields(&self, use_all_fields: bool) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(move |f| use_all_fields || f.visibility == FieldVisibility::Public)
    }
}
