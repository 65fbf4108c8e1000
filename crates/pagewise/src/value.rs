//! Orderable field values exposed by records.
//!
//! The [`Value`] enum is what a record hands back when the engine asks for a
//! named field. It is borrowed from the record, so sorting never clones field
//! contents.

use std::cmp::Ordering;
use std::time::{SystemTime, UNIX_EPOCH};

/// Runtime value of a record field, borrowed from the record.
///
/// # Example
///
/// ```
/// use pagewise::{Number, Value};
///
/// struct Post {
///     name: String,
///     votes: u32,
/// }
///
/// fn accessor<'a>(post: &'a Post, field: &str) -> Option<Value<'a>> {
///     match field {
///         "name" => Some(Value::String(&post.name)),
///         "votes" => Some(Value::Number(Number::from(post.votes))),
///         _ => None,
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Numeric value.
    Number(Number),
    /// Timestamp value (milliseconds since Unix epoch).
    Timestamp(Timestamp),
    /// Boolean value.
    Bool(bool),
    /// Field present but null.
    None,
}

impl Value<'_> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Timestamp(_) => "timestamp",
            Value::Bool(_) => "bool",
            Value::None => "null",
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Timestamp> for Value<'_> {
    fn from(ts: Timestamp) -> Self {
        Value::Timestamp(ts)
    }
}

impl<T: Into<Value<'static>>> From<Option<T>> for Value<'_> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::None)
    }
}

/// Numeric value supporting all common numeric types.
///
/// Numbers keep their original representation so integer comparisons stay
/// exact. Mixed integer variants compare exactly, anything involving a float
/// compares as `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Total ordering across all numeric variants. NaN sorts after every
    /// other number and equal to itself.
    pub fn total_cmp(self, other: Number) -> Ordering {
        match (self, other) {
            (Number::I64(a), Number::I64(b)) => a.cmp(&b),
            (Number::U64(a), Number::U64(b)) => a.cmp(&b),
            (Number::I64(a), Number::U64(b)) => {
                if a < 0 {
                    Ordering::Less
                } else {
                    (a as u64).cmp(&b)
                }
            }
            (Number::U64(_), Number::I64(_)) => other.total_cmp(self).reverse(),
            _ => cmp_f64(self.to_f64(), other.to_f64()),
        }
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.total_cmp(*other))
    }
}

impl From<i8> for Number {
    fn from(n: i8) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i16> for Number {
    fn from(n: i16) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u8> for Number {
    fn from(n: u8) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u16> for Number {
    fn from(n: u16) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

macro_rules! number_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value<'_> {
                fn from(n: $t) -> Self {
                    Value::Number(Number::from(n))
                }
            }
        )*
    };
}

number_value_from!(i8, i16, i32, i64, u8, u16, u32, u64, usize, f32, f64);

/// Timestamp value represented as milliseconds since Unix epoch.
///
/// ```
/// use pagewise::Timestamp;
///
/// assert!(Timestamp(1000) < Timestamp(2000));
/// assert_eq!(Timestamp::from_secs(2).as_millis(), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
    /// Creates a new timestamp from milliseconds since Unix epoch.
    pub fn from_millis(millis: i64) -> Self {
        Timestamp(millis)
    }

    /// Creates a new timestamp from seconds since Unix epoch.
    pub fn from_secs(secs: i64) -> Self {
        Timestamp(secs.saturating_mul(1000))
    }

    /// Returns the timestamp as milliseconds since Unix epoch.
    pub fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<SystemTime> for Timestamp {
    fn from(time: SystemTime) -> Self {
        match time.duration_since(UNIX_EPOCH) {
            Ok(after) => Timestamp(i64::try_from(after.as_millis()).unwrap_or(i64::MAX)),
            Err(before) => Timestamp(
                i64::try_from(before.duration().as_millis())
                    .map(|ms| -ms)
                    .unwrap_or(i64::MIN),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn value_kinds() {
        assert_eq!(Value::String("a").kind(), "string");
        assert_eq!(Value::Number(Number::I64(1)).kind(), "number");
        assert_eq!(Value::Timestamp(Timestamp(0)).kind(), "timestamp");
        assert_eq!(Value::Bool(true).kind(), "bool");
        assert_eq!(Value::None.kind(), "null");
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::from("x"), Value::String("x"));
        assert_eq!(Value::from(7u32), Value::Number(Number::U64(7)));
        assert_eq!(Value::from(false), Value::Bool(false));
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(3i64)), Value::Number(Number::I64(3)));
    }

    #[test]
    fn number_same_type() {
        assert_eq!(Number::I64(5).total_cmp(Number::I64(10)), Ordering::Less);
        assert_eq!(Number::U64(10).total_cmp(Number::U64(5)), Ordering::Greater);
        assert_eq!(Number::F64(1.5).total_cmp(Number::F64(1.5)), Ordering::Equal);
    }

    #[test]
    fn number_mixed_integers_are_exact() {
        assert_eq!(Number::I64(-1).total_cmp(Number::U64(0)), Ordering::Less);
        assert_eq!(Number::U64(u64::MAX).total_cmp(Number::I64(i64::MAX)), Ordering::Greater);
        assert_eq!(Number::I64(5).total_cmp(Number::U64(5)), Ordering::Equal);
    }

    #[test]
    fn number_mixed_with_float() {
        assert_eq!(Number::I64(5).total_cmp(Number::F64(5.0)), Ordering::Equal);
        assert_eq!(Number::U64(10).total_cmp(Number::F64(5.5)), Ordering::Greater);
    }

    #[test]
    fn nan_sorts_last() {
        let nan = Number::F64(f64::NAN);
        assert_eq!(nan.total_cmp(Number::F64(1.0)), Ordering::Greater);
        assert_eq!(Number::I64(i64::MAX).total_cmp(nan), Ordering::Less);
        assert_eq!(nan.total_cmp(nan), Ordering::Equal);
    }

    #[test]
    fn timestamp_from_system_time() {
        let after = UNIX_EPOCH + Duration::from_millis(1500);
        assert_eq!(Timestamp::from(after), Timestamp(1500));

        let before = UNIX_EPOCH - Duration::from_secs(2);
        assert_eq!(Timestamp::from(before), Timestamp(-2000));
    }
}
