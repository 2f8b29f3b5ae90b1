//! attribute values and their textual rendering
//!
//! the management endpoint hands back plain JSON, but attribute values are
//! modelled as their own tagged type so the formatter doesn't depend on the
//! wire library. structured values the tool doesn't model further (maps and
//! the like) are carried as opaque text in their compact form.

use std::fmt;

use serde_json::Value;

#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Null,
    Bool(bool),
    Num(serde_json::Number),
    Text(String),
    /// sequence values render as a deep bracketed listing
    Seq(Vec<AttrValue>),
    Opaque(String),
}

impl From<Value> for AttrValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => AttrValue::Null,
            Value::Bool(b) => AttrValue::Bool(b),
            Value::Number(n) => AttrValue::Num(n),
            Value::String(s) => AttrValue::Text(s),
            Value::Array(items) => {
                AttrValue::Seq(items.into_iter().map(AttrValue::from).collect())
            }
            obj @ Value::Object(_) => AttrValue::Opaque(obj.to_string()),
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Null => f.write_str("null"),
            AttrValue::Bool(b) => write!(f, "{b}"),
            AttrValue::Num(n) => write!(f, "{n}"),
            AttrValue::Text(s) => f.write_str(s),
            AttrValue::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            AttrValue::Opaque(s) => f.write_str(s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_formats_as_null_token() {
        assert_eq!(AttrValue::Null.to_string(), "null");
    }

    #[test]
    fn scalars_use_natural_representation() {
        assert_eq!(AttrValue::from(json!(42)).to_string(), "42");
        assert_eq!(AttrValue::from(json!(true)).to_string(), "true");
        assert_eq!(AttrValue::from(json!(1.5)).to_string(), "1.5");
        assert_eq!(AttrValue::from(json!("old gen")).to_string(), "old gen");
    }

    #[test]
    fn flat_sequence_formats_bracketed() {
        assert_eq!(AttrValue::from(json!([1, 2])).to_string(), "[1, 2]");
    }

    #[test]
    fn nested_sequence_formats_with_nested_brackets() {
        let v = AttrValue::from(json!([[1, 2], [3]]));
        assert_eq!(v.to_string(), "[[1, 2], [3]]");
    }

    #[test]
    fn sequence_with_nulls_and_strings() {
        let v = AttrValue::from(json!(["a", null, 3]));
        assert_eq!(v.to_string(), "[a, null, 3]");
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(AttrValue::from(json!([])).to_string(), "[]");
    }

    #[test]
    fn structured_value_stays_opaque_compact() {
        let v = AttrValue::from(json!({"used": 10, "max": 20}));
        assert_eq!(v.to_string(), r#"{"max":20,"used":10}"#);
    }
}
