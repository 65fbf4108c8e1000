//! Pagewise - request-scoped paging and sorting for record collections.
//!
//! An API handler hands a [`PageEngine`] the records it already fetched and
//! filtered, plus the caller's optional paging parameters. The engine sorts
//! the whole collection, cuts out the requested page and describes that page
//! relative to the collection.
//!
//! - Sorting by any named field, ascending or descending, stable
//! - 1-based page numbers with a configurable default and maximum page size
//! - Lenient input: absent, zero, negative or overflowing sizes and offsets
//!   are normalized instead of rejected
//! - Page metadata ready to serialize next to the results
//!
//! # Quick Start
//!
//! ```rust
//! use pagewise::{PageConfig, PageEngine, PageParams};
//! use serde_json::json;
//!
//! let posts: Vec<_> = (0..20).map(|id| json!({"id": id, "name": format!("Post{id}")})).collect();
//!
//! let params = PageParams::from_query(
//!     "page%5Boffset%5D=1&page%5Bsize%5D=10&sort%5Bcriteria%5D=id&sort%5Breverse%5D=true",
//! )
//! .unwrap();
//!
//! let engine = PageEngine::new(posts, &params, &PageConfig::default()).unwrap();
//! assert_eq!(engine.results().len(), 10);
//! assert_eq!(engine.results()[0]["name"], "Post19");
//!
//! let meta = engine.page_meta().unwrap();
//! assert_eq!((meta.size, meta.total_records, meta.total_pages), (10, 20, 2));
//! ```
//!
//! # Paging Semantics
//!
//! Paging is active when the caller supplies `size` or `offset`, whatever the
//! value. Without either, [`PageEngine::results`] is the whole (sorted)
//! collection and [`PageEngine::page_meta`] is `None`.
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `size` | effective page size: defaulted and capped |
//! | `offset` | the caller's offset, unmodified |
//! | `record_count` | records on this page |
//! | `total_records` | records before paging |
//! | `total_pages` | `ceil(total_records / size)` |

mod config;
mod engine;
mod error;
mod json;
mod meta;
mod ordering;
mod params;
mod query;
mod record;
mod value;

pub use config::{
    EnvReader, MockEnv, PageConfig, RealEnv, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_ENV,
    MAX_PAGE_SIZE_ENV,
};
pub use engine::PageEngine;
pub use error::{ConfigError, PageError, Result};
pub use meta::{Page, PageDescriptor};
pub use ordering::{compare_values, Dir};
pub use params::PageParams;
pub use record::Pageable;
pub use value::{Number, Timestamp, Value};
