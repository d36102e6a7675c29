//! # Common Types
//!
//! This module contains the types shared by the loader, the filtering logic,
//! the chart renderer and the UI: dataset records, filter parameters and the
//! summary values shown in the value boxes.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{DashboardError, Result};

/// Label of the type selector entry that disables type filtering.
pub const ALL_TYPES: &str = "All";

/// One reading of active subscriptions for a subscription type on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionRecord {
    /// The date of the reading
    pub date: NaiveDate,
    /// The subscription type (category label)
    pub subscription_type: String,
    /// Number of active subscriptions as of `date`
    pub active_subscriptions: u64,
}

/// A month selection. The day is always the first of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Build a month selection, rejecting months outside 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(DashboardError::InvalidMonth(format!("{year}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        // `new` and `of` only ever build valid months
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Replace the year, keeping the month.
    pub fn with_year(self, year: i32) -> Result<Self> {
        Self::new(year, self.month)
    }

    /// Replace the month, keeping the year.
    pub fn with_month(self, month: u32) -> Result<Self> {
        Self::new(self.year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = DashboardError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || DashboardError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

/// The subscription type selector value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum TypeSelection {
    /// Every type in the dataset
    #[default]
    All,
    /// A single subscription type
    Only(String),
}

impl TypeSelection {
    /// Map a selector label to a selection; `"All"` means no type filter.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_TYPES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_TYPES,
            Self::Only(name) => name,
        }
    }

    /// Whether a record of `subscription_type` passes this selection.
    pub fn matches(&self, subscription_type: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(name) => name == subscription_type,
        }
    }
}

impl fmt::Display for TypeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user can change through the side panel.
///
/// `start` may be after `end`; the filtered view is then simply empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterParams {
    pub subscription_type: TypeSelection,
    pub start: YearMonth,
    pub end: YearMonth,
}

impl FilterParams {
    pub fn start_date(&self) -> NaiveDate {
        self.start.first_day()
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end.first_day()
    }

    /// True when the start month lies after the end month.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Values shown in the three summary boxes.
///
/// Computed once over the full dataset; filters never change them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Summaries {
    /// Sum of active subscriptions at the latest date in the dataset
    pub current_subscriptions: u64,
    /// Type with the largest total across all dates
    pub most_popular_type: Option<String>,
    /// Number of distinct dates in the dataset
    pub months_tracked: usize,
    /// Earliest date in the dataset
    pub first_date: Option<NaiveDate>,
    /// Latest date in the dataset
    pub last_date: Option<NaiveDate>,
}
