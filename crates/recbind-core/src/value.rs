//! The untyped JSON value graph produced by parsing without a target type.

use std::collections::HashMap;

use bigdecimal::BigDecimal;

/// Generic JSON value. The three numeric variants mirror the reader's
/// literal disambiguation order: 32-bit first, then 64-bit, then
/// arbitrary-precision decimal. Objects enforce key uniqueness; their
/// iteration order is unspecified.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Decimal(BigDecimal),
    String(String),
    Array(Vec<JsonValue>),
    Object(HashMap<String, JsonValue>),
}

impl JsonValue {
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Int(_) => "integer",
            JsonValue::Long(_) => "long",
            JsonValue::Decimal(_) => "decimal",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        JsonValue::Bool(v)
    }
}

impl From<i32> for JsonValue {
    fn from(v: i32) -> Self {
        JsonValue::Int(v)
    }
}

impl From<i64> for JsonValue {
    fn from(v: i64) -> Self {
        JsonValue::Long(v)
    }
}

impl From<BigDecimal> for JsonValue {
    fn from(v: BigDecimal) -> Self {
        JsonValue::Decimal(v)
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        JsonValue::String(v.to_string())
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        JsonValue::String(v)
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(v: Vec<JsonValue>) -> Self {
        JsonValue::Array(v)
    }
}

impl From<HashMap<String, JsonValue>> for JsonValue {
    fn from(v: HashMap<String, JsonValue>) -> Self {
        JsonValue::Object(v)
    }
}
