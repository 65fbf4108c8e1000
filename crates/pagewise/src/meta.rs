//! Page metadata and the serializable page envelope.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Describes a page relative to the whole collection.
///
/// Only produced when the caller asked for paging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    /// Effective page size: defaulted and capped, never the raw request.
    pub size: usize,
    /// Offset exactly as the caller supplied it, unclamped.
    pub offset: Option<i64>,
    /// Number of records on this page.
    pub record_count: usize,
    /// Number of records in the collection before paging.
    pub total_records: usize,
    /// `ceil(total_records / size)`.
    pub total_pages: usize,
}

/// Records of one page together with their metadata.
///
/// Serializes as `{"results": [...], "meta": {...}}`. When paging was not
/// requested `meta` is an empty object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// The records, in final order.
    pub results: Vec<T>,
    /// Page metadata, absent when paging was not requested.
    #[serde(serialize_with = "serialize_meta")]
    pub meta: Option<PageDescriptor>,
}

fn serialize_meta<S>(meta: &Option<PageDescriptor>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match meta {
        Some(descriptor) => descriptor.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}
