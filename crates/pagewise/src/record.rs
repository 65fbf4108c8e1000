//! Field access for records.
//!
//! The engine never inspects a record directly. It asks for a named field and
//! receives a [`Value`] it knows how to order.

use crate::value::Value;

/// Trait for records the engine can sort.
///
/// Return `None` for field names the record does not have. Sorting by a field
/// no record has is a caller error; records lacking a field that others have
/// sort as null. Return `Some(Value::None)` for a field that exists but is
/// null.
///
/// ```
/// use pagewise::{Number, Pageable, Value};
///
/// struct Post {
///     id: u64,
///     name: String,
///     published: Option<i64>,
/// }
///
/// impl Pageable for Post {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "id" => Some(Value::Number(Number::U64(self.id))),
///             "name" => Some(Value::String(&self.name)),
///             "published" => Some(self.published.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Pageable {
    /// Returns the value of a field for ordering, or `None` if the record has
    /// no such field.
    fn field(&self, name: &str) -> Option<Value<'_>>;

    /// Accessor function compatible with
    /// [`PageEngine::with_accessor`](crate::PageEngine::with_accessor).
    fn accessor<'a>(record: &'a Self, name: &str) -> Option<Value<'a>>
    where
        Self: Sized,
    {
        record.field(name)
    }
}

impl<T: Pageable + ?Sized> Pageable for &T {
    fn field(&self, name: &str) -> Option<Value<'_>> {
        (**self).field(name)
    }
}
