//! Error types for dataset loading and configuration.
//!
//! Every failure that can happen before the dashboard starts serving is a
//! [`DashboardError`]. Interactive recomputation never fails: empty selections
//! degrade to empty aggregates instead of raising.

use std::fmt;
use std::path::PathBuf;

/// Result type for loader and configuration operations.
pub type DashboardResult<T> = Result<T, DashboardError>;

/// Where in the source table a value problem was found.
#[derive(Debug, Clone, Default)]
pub struct RowContext {
    /// Zero-based data row (header excluded)
    pub row: Option<usize>,
    /// Normalized column name
    pub column: Option<String>,
}

impl RowContext {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            row: None,
            column: Some(column.into()),
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = Some(row);
        self
    }
}

impl fmt::Display for RowContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref column) = self.column {
            parts.push(format!("column={}", column));
        }
        if let Some(row) = self.row {
            parts.push(format!("row={}", row));
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for everything that happens at startup.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Source file could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader or a column cast failed.
    #[error("CSV error: {0}")]
    Csv(#[from] polars::prelude::PolarsError),

    /// A column required by the record schema is absent.
    #[error("Schema mismatch: missing column '{0}'")]
    MissingColumn(String),

    /// A cell is null or cannot be interpreted as the expected type.
    #[error("Invalid value: {message} {context}")]
    InvalidValue {
        message: String,
        context: RowContext,
    },

    /// The customer identifier is not unique.
    #[error("Duplicate key: Customer_ID {0} appears more than once")]
    DuplicateKey(i64),

    /// Configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The geo reference table could not be fetched.
    #[error("Geo reference fetch failed for {url}: {message}")]
    GeoFetch { url: String, message: String },
}

impl DashboardError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>, context: RowContext) -> Self {
        Self::InvalidValue {
            message: message.into(),
            context,
        }
    }

    /// True for errors caused by the content of the source table.
    pub fn is_schema_error(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn(_) | Self::InvalidValue { .. } | Self::DuplicateKey(_)
        )
    }
}
