//! Configuration for the comparison engine.
//!
//! `MatchConfig` centralizes the row-matching strategy and sheet selection
//! so callers hold one value instead of threading flags through the engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Selects the key column used to match rows between the two workbooks.
///
/// An `Index` selector addresses a column by zero-based position and applies
/// to both sheets as-is. A `Header` selector is resolved against each
/// sheet's own header row by exact, case-sensitive text match, so the key
/// column may sit at different positions in the two files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ColumnSelector {
    Index(usize),
    Header(String),
}

impl fmt::Display for ColumnSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnSelector::Index(index) => write!(f, "{}", index),
            ColumnSelector::Header(name) => f.write_str(name),
        }
    }
}

/// How rows are matched and which sheets are compared.
///
/// The default compares every sheet positionally (row N against row N).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// When set, rows on every compared sheet are matched by the value in
    /// this column instead of by position. Sheets where the selector does
    /// not resolve fall back to positional comparison with a warning.
    pub key_column: Option<ColumnSelector>,
    /// When set, only the named sheet is compared; it must exist in both
    /// workbooks.
    pub sheet_filter: Option<String>,
}

impl MatchConfig {
    /// Positional comparison of all sheets.
    pub fn positional() -> Self {
        Self::default()
    }

    /// Key-based comparison of all sheets.
    pub fn keyed(selector: ColumnSelector) -> Self {
        Self {
            key_column: Some(selector),
            sheet_filter: None,
        }
    }

    pub fn builder() -> MatchConfigBuilder {
        MatchConfigBuilder {
            inner: MatchConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ColumnSelector::Header(name)) = &self.key_column {
            if name.is_empty() {
                return Err(ConfigError::EmptyKeyHeader);
            }
        }
        if let Some(filter) = &self.sheet_filter {
            if filter.is_empty() {
                return Err(ConfigError::EmptySheetFilter);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("key_column header name must not be empty")]
    EmptyKeyHeader,
    #[error("sheet_filter must not be empty")]
    EmptySheetFilter,
}

#[derive(Debug, Clone, Default)]
pub struct MatchConfigBuilder {
    inner: MatchConfig,
}

impl MatchConfigBuilder {
    pub fn new() -> Self {
        MatchConfig::builder()
    }

    pub fn key_column(mut self, selector: ColumnSelector) -> Self {
        self.inner.key_column = Some(selector);
        self
    }

    pub fn sheet_filter(mut self, name: impl Into<String>) -> Self {
        self.inner.sheet_filter = Some(name.into());
        self
    }

    pub fn build(self) -> Result<MatchConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}
