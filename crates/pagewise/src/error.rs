//! Error types for the pagewise crate.

use thiserror::Error;

/// Errors raised while building a page.
///
/// Paging input is never rejected: sizes and offsets are normalized. These
/// variants cover caller misuse (an unsortable field) and malformed query
/// strings handed to [`PageParams::from_query`](crate::PageParams::from_query).
#[derive(Debug, Error)]
pub enum PageError {
    /// A record does not expose the requested sort field.
    #[error("records cannot be sorted by unknown field '{field}'")]
    UnknownSortField { field: String },

    /// The sort field holds values of different kinds across records.
    #[error("sort field '{field}' mixes {expected} and {found} values")]
    MixedFieldTypes {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A paging parameter in a query string is not an integer.
    #[error("invalid value '{value}' for parameter '{name}'")]
    InvalidParam { name: &'static str, value: String },

    /// The query string could not be decoded.
    #[error("invalid query string: {0}")]
    InvalidQuery(#[from] serde_urlencoded::de::Error),
}

/// Errors raised while loading a [`PageConfig`](crate::PageConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting is not a positive integer.
    #[error("invalid value '{value}' for {name}: expected a positive integer")]
    InvalidValue { name: String, value: String },

    /// YAML configuration could not be parsed.
    #[error("invalid page configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    pub(crate) fn invalid(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Result type for pagewise operations.
pub type Result<T> = std::result::Result<T, PageError>;
