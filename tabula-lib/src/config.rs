//! Table configuration

use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::table::DEFAULT_PAGE_SIZE;

/// Text shown in the body when the current page has no rows.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No results found";

/// Configuration shared by tables in an application.
///
/// Every field has a default, so a config file only needs to name what it
/// changes.
///
/// # Example
///
/// ```
/// use tabula_lib::TableConfig;
///
/// let config = TableConfig::from_json_str(r#"{ "default_page_size": 25 }"#).unwrap();
/// assert_eq!(config.default_page_size, 25);
/// assert_eq!(config.empty_message, "No results found");
///
/// let config = TableConfig::default().with_export_prefix("accounts");
/// assert_eq!(config.export_prefix, "accounts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page when the caller gives none.
    ///
    /// Default: 10
    pub default_page_size: usize,

    /// Choices offered by the page-size selector.
    ///
    /// Default: 10, 20, 50, 100
    pub page_size_options: Vec<usize>,

    /// Placeholder text for an empty page.
    ///
    /// Default: "No results found"
    pub empty_message: String,

    /// Fields searched when a query names none.
    ///
    /// Default: none
    pub search_fields: Vec<String>,

    /// Prefix for generated export file names.
    ///
    /// Default: "export"
    pub export_prefix: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            page_size_options: vec![10, 20, 50, 100],
            empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
            search_fields: Vec::new(),
            export_prefix: "export".to_string(),
        }
    }
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&text)?;
        log::debug!("[config] loaded {}", path.display());
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_page_size == 0 {
            return Err(ConfigError::invalid("default_page_size", "must be > 0"));
        }
        if self.page_size_options.is_empty() {
            return Err(ConfigError::invalid("page_size_options", "must not be empty"));
        }
        if self.page_size_options.contains(&0) {
            return Err(ConfigError::invalid("page_size_options", "sizes must be > 0"));
        }
        Ok(())
    }

    /// Sets the default page size.
    pub fn with_default_page_size(mut self, size: usize) -> Self {
        self.default_page_size = size;
        self
    }

    /// Sets the page-size choices.
    pub fn with_page_size_options(mut self, options: Vec<usize>) -> Self {
        self.page_size_options = options;
        self
    }

    /// Sets the empty-page placeholder text.
    pub fn with_empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    /// Sets the fallback search fields.
    pub fn with_search_fields(mut self, fields: Vec<String>) -> Self {
        self.search_fields = fields;
        self
    }

    /// Sets the export file name prefix.
    pub fn with_export_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.export_prefix = prefix.into();
        self
    }
}
