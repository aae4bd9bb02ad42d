//! Record binding: converting record values to and from key-value maps.
//!
//! A *record* is a named, fixed-arity, ordered-field value type with a
//! canonical constructor taking all fields in declaration order. The
//! [`record!`](crate::record) macro generates the descriptor table the
//! original system discovered by reflection: the field-name list, an
//! accessor row producing [`JsonValue`]s, and the constructor taking
//! resolved values positionally.
//!
//! Binding resolves each field name against the data source through a fixed
//! fallback list (exact name, then snake_case lowered and uppered, then
//! kebab-case lowered and uppered), stopping at the first non-null hit. No
//! type coercion is performed beyond the integer widening the conversion
//! trait allows; the data source is responsible for type compatibility, and
//! a mismatch is a [`BindError::Binding`].

use std::collections::HashMap;

use bigdecimal::BigDecimal;

use crate::error::{BindError, Result};
use crate::name::NameTransform;
use crate::value::JsonValue;

/// A bindable record type. Implemented by the [`record!`](crate::record)
/// macro; the three methods together form the field-descriptor table.
pub trait Record: Sized {
    /// Field names in declaration order.
    fn field_names() -> &'static [&'static str];

    /// Field values in declaration order, converted to JSON values. A field
    /// that is itself a record converts to a nested object map.
    fn field_values(&self) -> Vec<JsonValue>;

    /// Canonical constructor: consumes resolved values positionally, in
    /// declaration order. Arity or type mismatches are binding errors.
    fn from_values(values: Vec<JsonValue>) -> Result<Self>;
}

/// Conversion between one record field and its JSON value form.
///
/// Record types get an implementation from the [`record!`](crate::record)
/// macro whose `from_value` recurses through [`from_map`] when the value is
/// an object map; this is where nested binding happens once reflection is
/// out of the picture.
pub trait Field: Sized {
    fn to_value(&self) -> JsonValue;
    fn from_value(value: JsonValue) -> Result<Self>;
}

/// Flatten a record into a key-value map. Nested records become nested maps
/// through their field conversion; everything else is stored as-is.
pub fn to_map<T: Record>(rec: &T) -> HashMap<String, JsonValue> {
    T::field_names()
        .iter()
        .map(|name| name.to_string())
        .zip(rec.field_values())
        .collect()
}

/// Bind a map to a record, resolving each field through the name-case
/// fallback list.
pub fn from_map<T: Record>(map: HashMap<String, JsonValue>) -> Result<T> {
    from_property_discover(|name| map.get(name).cloned())
}

/// Nullable variant: an absent map binds to an absent record, without error.
pub fn from_map_opt<T: Record>(map: Option<HashMap<String, JsonValue>>) -> Result<Option<T>> {
    map.map(from_map).transpose()
}

/// Bind a record from an arbitrary name→value lookup (a JSON object, a row,
/// an environment, anything that answers by name). Fields that resolve to
/// nothing are passed to the constructor as `Null`.
pub fn from_property_discover<T, F>(fetch: F) -> Result<T>
where
    T: Record,
    F: Fn(&str) -> Option<JsonValue>,
{
    let names = T::field_names();
    let mut values = Vec::with_capacity(names.len());
    for name in names {
        values.push(resolve_name_cases(&fetch, name).unwrap_or(JsonValue::Null));
    }
    T::from_values(values)
}

/// The fixed name-resolution precedence list: exact, snake-lower,
/// snake-upper, kebab-lower, kebab-upper. First non-null wins; a key bound
/// to JSON `null` counts as absent.
fn resolve_name_cases<F>(fetch: &F, name: &str) -> Option<JsonValue>
where
    F: Fn(&str) -> Option<JsonValue>,
{
    if let Some(value) = non_null(fetch(name)) {
        return Some(value);
    }

    let snake = NameTransform::Snake.transform(name);
    if let Some(value) = non_null(fetch(&snake.to_lowercase())) {
        return Some(value);
    }
    if let Some(value) = non_null(fetch(&snake.to_uppercase())) {
        return Some(value);
    }

    let kebab = NameTransform::Kebab.transform(name);
    if let Some(value) = non_null(fetch(&kebab.to_lowercase())) {
        return Some(value);
    }
    non_null(fetch(&kebab.to_uppercase()))
}

fn non_null(value: Option<JsonValue>) -> Option<JsonValue> {
    value.filter(|v| !v.is_null())
}

/// Convert one resolved value into a concrete field, labelling failures
/// with the field name. Used by the [`record!`](crate::record) expansion.
#[doc(hidden)]
pub fn bind_field<T: Field>(name: &str, value: Option<JsonValue>) -> Result<T> {
    T::from_value(value.unwrap_or(JsonValue::Null)).map_err(|e| match e {
        BindError::Binding(msg) => BindError::Binding(format!("field `{name}`: {msg}")),
        other => other,
    })
}

fn mismatch(expected: &str, got: &JsonValue) -> BindError {
    BindError::Binding(format!("expected {expected}, got {}", got.type_name()))
}

impl Field for i32 {
    fn to_value(&self) -> JsonValue {
        JsonValue::Int(*self)
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Int(n) => Ok(n),
            other => Err(mismatch("integer", &other)),
        }
    }
}

impl Field for i64 {
    fn to_value(&self) -> JsonValue {
        JsonValue::Long(*self)
    }

    // Widens from Int, the way positional construction in the original
    // widened Integer into a long parameter.
    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Int(n) => Ok(i64::from(n)),
            JsonValue::Long(n) => Ok(n),
            other => Err(mismatch("long", &other)),
        }
    }
}

impl Field for bool {
    fn to_value(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

impl Field for String {
    fn to_value(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl Field for BigDecimal {
    fn to_value(&self) -> JsonValue {
        JsonValue::Decimal(self.clone())
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Decimal(d) => Ok(d),
            other => Err(mismatch("decimal", &other)),
        }
    }
}

impl<T: Field> Field for Option<T> {
    fn to_value(&self) -> JsonValue {
        match self {
            Some(inner) => inner.to_value(),
            None => JsonValue::Null,
        }
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: Field> Field for Vec<T> {
    fn to_value(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(Field::to_value).collect())
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Array(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(mismatch("array", &other)),
        }
    }
}

impl<T: Field> Field for HashMap<String, T> {
    fn to_value(&self) -> JsonValue {
        JsonValue::Object(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }

    fn from_value(value: JsonValue) -> Result<Self> {
        match value {
            JsonValue::Object(map) => map
                .into_iter()
                .map(|(k, v)| T::from_value(v).map(|v| (k, v)))
                .collect(),
            other => Err(mismatch("object", &other)),
        }
    }
}

/// Declare a record type: a plain struct plus the generated descriptor
/// table ([`Record`]) and field conversion ([`Field`]) implementations.
///
/// ```
/// use recbind_core::record;
///
/// record! {
///     pub struct Sample {
///         id: i32,
///         name: String,
///     }
/// }
///
/// let map = recbind_core::to_map(&Sample { id: 1, name: "test".into() });
/// assert_eq!(map.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $ftype:ty ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field: $ftype, )+
        }

        impl $crate::records::Record for $name {
            fn field_names() -> &'static [&'static str] {
                &[ $( stringify!($field) ),+ ]
            }

            fn field_values(&self) -> ::std::vec::Vec<$crate::value::JsonValue> {
                ::std::vec![ $( $crate::records::Field::to_value(&self.$field) ),+ ]
            }

            fn from_values(
                values: ::std::vec::Vec<$crate::value::JsonValue>,
            ) -> $crate::error::Result<Self> {
                let expected = <Self as $crate::records::Record>::field_names().len();
                if values.len() != expected {
                    return ::std::result::Result::Err($crate::error::BindError::Binding(
                        ::std::format!(
                            "{} takes {} values, got {}",
                            stringify!($name),
                            expected,
                            values.len(),
                        ),
                    ));
                }
                let mut values = values.into_iter();
                ::std::result::Result::Ok(Self {
                    $( $field: $crate::records::bind_field(stringify!($field), values.next())?, )+
                })
            }
        }

        impl $crate::records::Field for $name {
            fn to_value(&self) -> $crate::value::JsonValue {
                $crate::value::JsonValue::Object($crate::records::to_map(self))
            }

            fn from_value(value: $crate::value::JsonValue) -> $crate::error::Result<Self> {
                match value {
                    $crate::value::JsonValue::Object(map) => $crate::records::from_map(map),
                    other => ::std::result::Result::Err($crate::error::BindError::Binding(
                        ::std::format!(
                            "expected object for {}, got {}",
                            stringify!($name),
                            other.type_name(),
                        ),
                    )),
                }
            }
        }
    };
}
