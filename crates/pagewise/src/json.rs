//! [`Pageable`] for schemaless JSON records.
//!
//! A JSON object exposes its top-level keys as fields. A key missing from an
//! object is not exposed by that record; the engine sorts such records as
//! null as long as some other record has the key, and rejects the sort field
//! when none does. Arrays and nested objects are not orderable and read as
//! null. Non-object records have no fields at all.

use serde_json::Value as Json;

use crate::record::Pageable;
use crate::value::{Number, Value};

impl Pageable for Json {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        self.as_object()?.get(name).map(json_value)
    }
}

fn json_value(value: &Json) -> Value<'_> {
    match value {
        Json::String(s) => Value::String(s),
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Number(Number::I64(i))
            } else if let Some(u) = n.as_u64() {
                Value::Number(Number::U64(u))
            } else {
                n.as_f64()
                    .map_or(Value::None, |f| Value::Number(Number::F64(f)))
            }
        }
        Json::Null | Json::Array(_) | Json::Object(_) => Value::None,
    }
}
