//! Single-pass Avro schema inference over one JSON document.
//!
//! Walk a decoded JSON object and derive an Avro `record` schema: scalars
//! map to primitives, nested objects to named records, arrays to named
//! array types classified from their elements. Generated type names are
//! de-duplicated per run through [`crate::names`].
//!
//! Design notes:
//! - Field order follows document order (`serde_json` with
//!   `preserve_order`), so output is stable for diffing.
//! - Unclassifiable fields degrade to warnings instead of failing the run;
//!   the only error path is the top-level decode.
//! - The registry is owned by one `infer` call and threaded down by
//!   mutable borrow, never shared across runs.

pub mod num;

use serde_json::{Map, Value};

use crate::avro::{AvroField, AvroType};
use crate::names::{self, NameRegistry};

#[derive(Debug, thiserror::Error)]
pub enum InferError {
    /// The payload is not a well-formed JSON object at the top level.
    #[error("decoding payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Non-fatal anomalies observed during one run, returned to the caller
/// alongside the schema rather than only logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A field whose value kind has no Avro mapping; the field is omitted
    /// from the schema.
    SkippedField { key: String, kind: &'static str },
    /// An array mixing classifiable element kinds; the last element scanned
    /// decides the item type.
    HeterogeneousArray { key: String },
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::SkippedField { key, kind } => {
                write!(f, "skipped field `{key}`: no Avro type for {kind} values")
            }
            Warning::HeterogeneousArray { key } => {
                write!(f, "array `{key}` mixes element kinds; the last one wins")
            }
        }
    }
}

/// Output of a successful run: the serialized schema plus any warnings.
#[derive(Debug)]
pub struct Inferred {
    pub schema: Vec<u8>,
    pub warnings: Vec<Warning>,
}

/// Infer an Avro record schema from a raw JSON payload.
///
/// `title` becomes the record name with spaces stripped; when `nullable`
/// is set every field type is wrapped in a `[T, "null"]` union.
pub fn infer(title: &str, payload: &[u8], nullable: bool) -> Result<Inferred, InferError> {
    let obj: Map<String, Value> = serde_json::from_slice(payload)?;

    let mut registry = NameRegistry::new();
    let mut warnings = Vec::new();
    let fields = infer_fields(&mut registry, &obj, nullable, &mut warnings);

    let record = AvroType::record(title.replace(' ', ""), fields);
    let schema = serde_json::to_vec(&record)?;
    Ok(Inferred { schema, warnings })
}

/// One field per classifiable key/value pair, in document order.
fn infer_fields(
    registry: &mut NameRegistry,
    obj: &Map<String, Value>,
    nullable: bool,
    warnings: &mut Vec<Warning>,
) -> Vec<AvroField> {
    let mut fields = Vec::with_capacity(obj.len());

    for (key, value) in obj {
        let field = match value {
            Value::String(_) => scalar(key, "string", nullable),
            Value::Bool(_) => scalar(key, "boolean", nullable),
            Value::Number(n) => scalar(key, num::classify(n), nullable),
            Value::Object(map) => {
                let name = names::allocate(registry, &format!("{key}_record"));
                let sub = infer_fields(registry, map, nullable, warnings);
                AvroField {
                    name: key.clone(),
                    ty: AvroType::record(name, sub).wrap(nullable),
                    default: None,
                }
            }
            Value::Array(elements) => {
                // Element records are named before the array itself, so a
                // `k_record` allocation precedes the matching `k_array`.
                let items = array_items(registry, key, elements, nullable, warnings);
                let name = names::allocate(registry, &format!("{key}_array"));
                AvroField {
                    name: key.clone(),
                    ty: AvroType::array(name, items).wrap(nullable),
                    default: Some(Value::Array(Vec::new())),
                }
            }
            Value::Null => {
                warnings.push(Warning::SkippedField { key: key.clone(), kind: "null" });
                continue;
            }
        };
        fields.push(field);
    }

    fields
}

fn scalar(key: &str, primitive: &'static str, nullable: bool) -> AvroField {
    AvroField {
        name: key.to_string(),
        ty: AvroType::Primitive(primitive).wrap(nullable),
        default: None,
    }
}

/// Scan array elements for an item type. Classification here is coarser
/// than for object fields: i64-range integers, strings, and objects only;
/// later classifiable elements override earlier ones. Unclassifiable
/// elements are ignored, and an empty or fully ignored array leaves the
/// item type absent.
fn array_items(
    registry: &mut NameRegistry,
    key: &str,
    elements: &[Value],
    nullable: bool,
    warnings: &mut Vec<Warning>,
) -> Option<AvroType> {
    let mut items: Option<(&'static str, AvroType)> = None;
    let mut warned = false;

    for element in elements {
        let (kind, ty) = match element {
            Value::Number(n) if n.as_i64().is_some() => ("int", AvroType::Primitive("int")),
            Value::String(_) => ("string", AvroType::Primitive("string")),
            Value::Object(map) => {
                let name = names::allocate(registry, &format!("{key}_record"));
                let sub = infer_fields(registry, map, nullable, warnings);
                ("record", AvroType::record(name, sub))
            }
            _ => continue,
        };

        if !warned && items.as_ref().is_some_and(|(prev, _)| *prev != kind) {
            warnings.push(Warning::HeterogeneousArray { key: key.to_string() });
            warned = true;
        }
        items = Some((kind, ty));
    }

    items.map(|(_, ty)| ty)
}
