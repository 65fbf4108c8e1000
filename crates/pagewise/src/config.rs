//! Page size configuration.
//!
//! The default and maximum page sizes are process-wide tunables, but the
//! engine never reads them from ambient state: a [`PageConfig`] is passed to
//! every [`PageEngine`](crate::PageEngine). Loaders are provided for the
//! environment and for YAML.

use std::collections::HashMap;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable holding the default page size.
pub const DEFAULT_PAGE_SIZE_ENV: &str = "PAGEWISE_DEFAULT_PAGE_SIZE";

/// Environment variable holding the maximum page size.
pub const MAX_PAGE_SIZE_ENV: &str = "PAGEWISE_MAX_PAGE_SIZE";

/// Page size used when the caller supplies none (or a non-positive one).
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(25) {
    Some(n) => n,
    None => unreachable!(),
};

/// Default and maximum page sizes applied by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Size of a page when the caller gives no usable size.
    pub default_page_size: NonZeroUsize,
    /// Upper bound on any page size, the default included.
    pub max_page_size: Option<NonZeroUsize>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: None,
        }
    }
}

impl PageConfig {
    /// Creates a configuration from explicit sizes.
    pub fn new(default_page_size: NonZeroUsize, max_page_size: Option<NonZeroUsize>) -> Self {
        Self {
            default_page_size,
            max_page_size,
        }
    }

    /// Returns a copy with the given maximum page size.
    pub fn with_max_page_size(mut self, max: NonZeroUsize) -> Self {
        self.max_page_size = Some(max);
        self
    }

    /// Returns a copy with the given default page size.
    pub fn with_default_page_size(mut self, default: NonZeroUsize) -> Self {
        self.default_page_size = default;
        self
    }

    /// Loads the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_reader(&RealEnv)
    }

    /// Loads the configuration through an [`EnvReader`].
    ///
    /// Unset or blank variables keep their defaults.
    pub fn from_env_reader(env: &impl EnvReader) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(size) = read_size(env, DEFAULT_PAGE_SIZE_ENV)? {
            config.default_page_size = size;
        }
        config.max_page_size = read_size(env, MAX_PAGE_SIZE_ENV)?;
        Ok(config)
    }

    /// Parses a YAML document such as `default_page_size: 50`.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Page size used when the caller supplies none, capped at the maximum.
    pub fn effective_default(&self) -> NonZeroUsize {
        self.cap(self.default_page_size)
    }

    /// Caps a page size at the configured maximum.
    pub fn cap(&self, size: NonZeroUsize) -> NonZeroUsize {
        match self.max_page_size {
            Some(max) if size > max => max,
            _ => size,
        }
    }
}

fn read_size(env: &impl EnvReader, name: &str) -> Result<Option<NonZeroUsize>, ConfigError> {
    let Some(raw) = env.var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<NonZeroUsize>()
        .map(Some)
        .map_err(|_| ConfigError::invalid(name, raw))
}

/// Abstraction over environment variables.
pub trait EnvReader {
    /// Get an environment variable value.
    fn var(&self, name: &str) -> Option<String>;
}

/// Real environment variable reader.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealEnv;

impl EnvReader for RealEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// In-memory environment for tests.
#[derive(Debug, Default, Clone)]
pub struct MockEnv {
    vars: HashMap<String, String>,
}

impl MockEnv {
    /// Create an empty mock environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the mock environment.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvReader for MockEnv {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}
