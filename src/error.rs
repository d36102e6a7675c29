//! # Errors
//!
//! Every fallible operation in the library returns [`DashboardError`]. Startup
//! errors (dataset, brand file, style installation) are fatal for the binary;
//! render errors are reported in the UI and logged.

use thiserror::Error;

/// Errors that can occur while loading data, translating the brand or drawing charts
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Reading a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The dataset could not be parsed as CSV (including non-integer counts)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required dataset column is not present in the header row
    #[error("dataset is missing required column `{0}`")]
    MissingColumn(String),

    /// A `date` cell could not be parsed as a calendar date
    #[error("line {line}: unparseable date `{value}`")]
    InvalidDate { line: u64, value: String },

    /// The brand file is not valid YAML or has the wrong shape
    #[error("invalid brand specification: {0}")]
    BrandParse(#[from] serde_yaml::Error),

    /// A palette role needed by the style translator is absent
    #[error("brand palette is missing required color `{0}`")]
    MissingPaletteKey(String),

    /// The temporary style sheet could not be created or written
    #[error("style sheet resource error: {0}")]
    Resource(std::io::Error),

    /// A style sheet line could not be understood
    #[error("style sheet line {line}: {message}")]
    StyleSheet { line: usize, message: String },

    /// A color string is neither hex nor a known color name
    #[error("invalid color `{0}`")]
    InvalidColor(String),

    /// A year/month selection is not a real month
    #[error("invalid month `{0}`")]
    InvalidMonth(String),

    /// The requested subscription type does not occur in the dataset
    #[error("unknown subscription type `{0}`")]
    UnknownSubscriptionType(String),

    /// Drawing the chart failed
    #[error("plotting error: {0}")]
    Plot(String),
}

/// Type alias for Results using DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
