//! The paging and sorting engine.
//!
//! A [`PageEngine`] is built once per request. Construction sorts the whole
//! collection (when asked to) and resolves the page window; reading the page
//! afterwards is free and can be repeated.
//!
//! Paging input is normalized, never rejected:
//!
//! | Input | Effective value |
//! |-------|-----------------|
//! | `size` absent or `<= 0` | configured default page size |
//! | `size` above the maximum | configured maximum page size |
//! | `offset` absent or `<= 0` | page 1 |
//! | `offset` past the last page | empty page |

use std::cmp::Ordering;
use std::num::NonZeroUsize;
use std::ops::Range;

use crate::config::PageConfig;
use crate::error::{PageError, Result};
use crate::meta::{Page, PageDescriptor};
use crate::ordering::Dir;
use crate::params::PageParams;
use crate::record::Pageable;
use crate::value::Value;

/// One request's page over a collection of records.
///
/// # Example
///
/// ```
/// use pagewise::{PageConfig, PageEngine, PageParams, Pageable, Value};
///
/// struct Post {
///     id: i64,
/// }
///
/// impl Pageable for Post {
///     fn field(&self, name: &str) -> Option<Value<'_>> {
///         match name {
///             "id" => Some(Value::from(self.id)),
///             _ => None,
///         }
///     }
/// }
///
/// let posts: Vec<Post> = (0..40).map(|id| Post { id }).collect();
/// let params = PageParams::new().sort_desc("id").offset(2);
///
/// let engine = PageEngine::new(posts, &params, &PageConfig::default()).unwrap();
/// assert_eq!(engine.results().len(), 15);
/// assert_eq!(engine.results()[0].id, 14);
///
/// let meta = engine.page_meta().unwrap();
/// assert_eq!(meta.total_pages, 2);
/// ```
#[derive(Debug, Clone)]
pub struct PageEngine<T> {
    records: Vec<T>,
    window: Option<Window>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Window {
    size: NonZeroUsize,
    offset: Option<i64>,
    range: Range<usize>,
}

impl<T: Pageable> PageEngine<T> {
    /// Sorts and pages `records` using their [`Pageable`] fields.
    pub fn new(records: Vec<T>, params: &PageParams, config: &PageConfig) -> Result<Self> {
        Self::with_accessor(records, params, config, T::accessor)
    }
}

impl<T> PageEngine<T> {
    /// Sorts and pages `records`, reading sort fields through `accessor`.
    ///
    /// Fails when no record exposes the sort field or when the field holds
    /// values of different kinds; both are caller errors, not user input.
    /// Records that lack a field other records expose sort as null.
    pub fn with_accessor<F>(
        mut records: Vec<T>,
        params: &PageParams,
        config: &PageConfig,
        accessor: F,
    ) -> Result<Self>
    where
        for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
    {
        if let Some(field) = params.sort_field() {
            sort_records(&mut records, field, params.dir(), &accessor)?;
        }

        let window = params
            .is_paging()
            .then(|| resolve_window(records.len(), params, config));

        if let Some(window) = &window {
            log::debug!(
                "page window {:?} of {} records (size {}, offset {:?})",
                window.range,
                records.len(),
                window.size,
                window.offset
            );
        }

        Ok(Self { records, window })
    }

    /// Records of the requested page in final order, or the whole (sorted)
    /// collection when no paging was requested.
    pub fn results(&self) -> &[T] {
        match &self.window {
            Some(window) => &self.records[window.range.clone()],
            None => &self.records,
        }
    }

    /// Page metadata, or `None` when no paging was requested.
    pub fn page_meta(&self) -> Option<PageDescriptor> {
        let window = self.window.as_ref()?;
        let total_records = self.records.len();
        Some(PageDescriptor {
            size: window.size.get(),
            offset: window.offset,
            record_count: window.range.len(),
            total_records,
            total_pages: total_records.div_ceil(window.size.get()),
        })
    }

    /// Number of records in the collection before paging.
    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    /// Consumes the engine, returning the records of the page.
    pub fn into_results(self) -> Vec<T> {
        let mut records = self.records;
        if let Some(window) = self.window {
            records.truncate(window.range.end);
            records = records.split_off(window.range.start);
        }
        records
    }

    /// Consumes the engine, returning the page with its metadata.
    pub fn into_page(self) -> Page<T> {
        let meta = self.page_meta();
        Page {
            results: self.into_results(),
            meta,
        }
    }
}

fn sort_records<T, F>(records: &mut [T], field: &str, dir: Dir, accessor: &F) -> Result<()>
where
    for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
{
    check_sort_field(records, field, accessor)?;

    // sort_by is stable, so ties keep their input order in both directions.
    records.sort_by(|a, b| {
        let left = accessor(a, field).unwrap_or(Value::None);
        let right = accessor(b, field).unwrap_or(Value::None);
        dir.compare(&left, &right).unwrap_or(Ordering::Equal)
    });

    log::debug!("sorted {} records by '{}' {}", records.len(), field, dir);
    Ok(())
}

/// Some record must expose the field and all non-null values must share a kind.
fn check_sort_field<T, F>(records: &[T], field: &str, accessor: &F) -> Result<()>
where
    for<'a> F: Fn(&'a T, &str) -> Option<Value<'a>>,
{
    let mut exposed = false;
    let mut expected: Option<&'static str> = None;
    for record in records {
        let Some(value) = accessor(record, field) else {
            continue;
        };
        exposed = true;
        if value.is_none() {
            continue;
        }
        match expected {
            None => expected = Some(value.kind()),
            Some(kind) if kind != value.kind() => {
                return Err(PageError::MixedFieldTypes {
                    field: field.to_string(),
                    expected: kind,
                    found: value.kind(),
                })
            }
            Some(_) => {}
        }
    }

    if records.is_empty() || exposed {
        Ok(())
    } else {
        Err(PageError::UnknownSortField {
            field: field.to_string(),
        })
    }
}

fn resolve_window(len: usize, params: &PageParams, config: &PageConfig) -> Window {
    let size = params
        .size
        .filter(|&size| size > 0)
        .and_then(|size| NonZeroUsize::new(usize::try_from(size).unwrap_or(usize::MAX)))
        .map_or_else(|| config.effective_default(), |size| config.cap(size));

    let page = params.offset.filter(|&offset| offset > 0).unwrap_or(1);
    log::trace!(
        "normalized size {:?} -> {}, offset {:?} -> page {}",
        params.size,
        size,
        params.offset,
        page
    );

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|skipped| skipped.checked_mul(size.get()));
    let range = match start {
        Some(start) if start < len => start..len.min(start.saturating_add(size.get())),
        _ => len..len,
    };

    Window {
        size,
        offset: params.offset,
        range,
    }
}
