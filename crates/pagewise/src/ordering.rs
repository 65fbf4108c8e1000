//! Sort direction and field value comparison.

use std::cmp::Ordering;

use crate::value::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Ascending order (smallest first).
    #[default]
    Asc,
    /// Descending order (largest first).
    Desc,
}

impl Dir {
    /// Direction for a caller-supplied "descending" flag.
    pub fn from_descending(descending: bool) -> Self {
        if descending {
            Dir::Desc
        } else {
            Dir::Asc
        }
    }

    /// Returns `true` if this is descending order.
    pub fn is_desc(self) -> bool {
        matches!(self, Dir::Desc)
    }

    /// Applies this direction to an ordering.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Compares two field values in this direction.
    ///
    /// Null values sort last regardless of direction. Returns `None` when the
    /// values are of different kinds.
    pub fn compare<'a>(self, a: &Value<'a>, b: &Value<'a>) -> Option<Ordering> {
        match (a, b) {
            (Value::None, _) | (_, Value::None) => compare_values(a, b),
            _ => compare_values(a, b).map(|ordering| self.apply(ordering)),
        }
    }

    /// Returns the display name of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Compares two values of the same kind in ascending order.
///
/// Returns `None` if the kinds don't match. Null compares greater than any
/// non-null value.
pub fn compare_values<'a>(a: &Value<'a>, b: &Value<'a>) -> Option<Ordering> {
    match (a, b) {
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Number(a), Value::Number(b)) => Some(a.total_cmp(*b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

        (Value::None, Value::None) => Some(Ordering::Equal),
        (Value::None, _) => Some(Ordering::Greater),
        (_, Value::None) => Some(Ordering::Less),

        _ => None,
    }
}
