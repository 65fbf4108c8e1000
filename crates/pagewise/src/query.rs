//! Query string adapter for [`PageParams`].
//!
//! API clients send paging as bracketed keys:
//!
//! ```text
//! ?page[offset]=1&page[size]=10&sort[criteria]=id&sort[reverse]=true
//! ```
//!
//! Brackets may be percent-encoded (`page%5Boffset%5D`). Unrelated keys are
//! ignored so the same query string can carry filters for other layers.

use std::num::IntErrorKind;

use crate::error::{PageError, Result};
use crate::params::PageParams;

#[derive(Debug, Default)]
struct RawQuery {
    offset: Option<String>,
    size: Option<String>,
    criteria: Option<String>,
    reverse: Option<String>,
}

impl RawQuery {
    /// Repeated keys keep their last value.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut raw = RawQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page[offset]" => &mut raw.offset,
                "page[size]" => &mut raw.size,
                "sort[criteria]" => &mut raw.criteria,
                "sort[reverse]" => &mut raw.reverse,
                _ => continue,
            };
            *slot = Some(value);
        }
        raw
    }
}

impl PageParams {
    /// Parses paging parameters out of a URL query string.
    ///
    /// Empty values count as absent and a repeated key keeps its last value.
    /// Integers beyond the `i64` range saturate. `sort[reverse]` sorts
    /// descending only when it is exactly `true`.
    ///
    /// ```
    /// use pagewise::PageParams;
    ///
    /// let params = PageParams::from_query("page%5Boffset%5D=2&page%5Bsize%5D=10").unwrap();
    /// assert_eq!(params.offset, Some(2));
    /// assert_eq!(params.size, Some(10));
    /// ```
    pub fn from_query(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        let raw = RawQuery::from_pairs(pairs);

        let params = PageParams {
            sort_field: non_empty(raw.criteria),
            sort_descending: raw.reverse.as_deref() == Some("true"),
            size: parse_int("page[size]", raw.size)?,
            offset: parse_int("page[offset]", raw.offset)?,
        };
        log::trace!("parsed query params: {:?}", params);
        Ok(params)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_int(name: &'static str, value: Option<String>) -> Result<Option<i64>> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    match value.trim().parse::<i64>() {
        Ok(n) => Ok(Some(n)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(Some(i64::MAX)),
            IntErrorKind::NegOverflow => Ok(Some(i64::MIN)),
            _ => Err(PageError::InvalidParam { name, value }),
        },
    }
}
