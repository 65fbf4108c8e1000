//! Caller-supplied paging and sorting parameters.

use crate::ordering::Dir;

/// Paging and sorting parameters for one request.
///
/// Every field is optional. `PageParams::default()` means "no sort, no page".
/// Paging is active as soon as `size` or `offset` is present, whatever its
/// value: `Some(0)` counts as supplied.
///
/// ```
/// use pagewise::PageParams;
///
/// let params = PageParams::new().sort_desc("id").size(10).offset(1);
/// assert!(params.is_paging());
/// assert_eq!(params.sort_field(), Some("id"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Field to sort by. `None` or empty means no sort.
    pub sort_field: Option<String>,
    /// Sort largest first. Ignored without a sort field.
    pub sort_descending: bool,
    /// Requested page size, possibly zero or negative.
    pub size: Option<i64>,
    /// Requested 1-based page number, possibly zero or negative.
    pub offset: Option<i64>,
}

impl PageParams {
    /// Creates empty parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sorts by `field` in the given direction.
    pub fn sort_by(mut self, field: impl Into<String>, dir: Dir) -> Self {
        self.sort_field = Some(field.into());
        self.sort_descending = dir.is_desc();
        self
    }

    /// Sorts by `field`, smallest first.
    pub fn sort_asc(self, field: impl Into<String>) -> Self {
        self.sort_by(field, Dir::Asc)
    }

    /// Sorts by `field`, largest first.
    pub fn sort_desc(self, field: impl Into<String>) -> Self {
        self.sort_by(field, Dir::Desc)
    }

    /// Sets the requested page size.
    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the requested page number.
    pub fn offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// The sort field, if one was given and is not empty.
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref().filter(|field| !field.is_empty())
    }

    /// Direction of the requested sort.
    pub fn dir(&self) -> Dir {
        Dir::from_descending(self.sort_descending)
    }

    /// Whether the caller asked for a page at all.
    pub fn is_paging(&self) -> bool {
        self.size.is_some() || self.offset.is_some()
    }

    /// Overlays `other` onto `self`: fields present in `other` win.
    pub fn merge(mut self, other: PageParams) -> Self {
        if other.sort_field.is_some() {
            self.sort_field = other.sort_field;
            self.sort_descending = other.sort_descending;
        } else if other.sort_descending {
            self.sort_descending = true;
        }
        self.size = other.size.or(self.size);
        self.offset = other.offset.or(self.offset);
        self
    }
}
