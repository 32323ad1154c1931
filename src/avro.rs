//! Serde model of the Avro schema subset that inference emits.
//!
//! Struct fields are declared in the order the output must carry them:
//! `name` before `type` before `fields`/`items`, and `default` last on a
//! field. Unions serialize as plain JSON arrays via the untagged repr.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AvroType {
    /// One of the primitive type names (`"string"`, `"long"`, ...).
    Primitive(&'static str),
    Record {
        name: String,
        #[serde(rename = "type")]
        ty: &'static str,
        fields: Vec<AvroField>,
    },
    Array {
        name: String,
        #[serde(rename = "type")]
        ty: &'static str,
        /// Absent when the source array had no classifiable element.
        #[serde(skip_serializing_if = "Option::is_none")]
        items: Option<Box<AvroType>>,
    },
    Union(Vec<AvroType>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvroField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: AvroType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl AvroType {
    pub fn record(name: String, fields: Vec<AvroField>) -> Self {
        AvroType::Record { name, ty: "record", fields }
    }

    pub fn array(name: String, items: Option<AvroType>) -> Self {
        AvroType::Array { name, ty: "array", items: items.map(Box::new) }
    }

    /// Nullability rule: identity when `nullable` is false, otherwise the
    /// two-element union `[T, "null"]`.
    pub fn wrap(self, nullable: bool) -> Self {
        if nullable {
            AvroType::Union(vec![self, AvroType::Primitive("null")])
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn property_order_is_name_then_type() {
        let record = AvroType::record("point_record".into(), vec![AvroField {
            name: "x".into(),
            ty: AvroType::Primitive("long"),
            default: None,
        }]);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"name":"point_record","type":"record","fields":[{"name":"x","type":"long"}]}"#,
        );
    }

    #[test]
    fn union_serializes_with_null_last() {
        let ty = AvroType::Primitive("string").wrap(true);
        assert_eq!(serde_json::to_string(&ty).unwrap(), r#"["string","null"]"#);
    }

    #[test]
    fn wrap_is_identity_when_not_nullable() {
        let ty = AvroType::Primitive("boolean");
        assert_eq!(ty.clone().wrap(false), ty);
    }

    #[test]
    fn array_without_items_omits_the_key() {
        let ty = AvroType::array("tags_array".into(), None);
        assert_eq!(
            serde_json::to_string(&ty).unwrap(),
            r#"{"name":"tags_array","type":"array"}"#,
        );
    }
}
