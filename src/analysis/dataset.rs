use chrono::{Datelike, NaiveDate, NaiveDateTime};
use log::info;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::error::{DashboardError, Result};
use crate::types::SubscriptionRecord;

const REQUIRED_COLUMNS: [&str; 3] = ["date", "subscription_type", "active_subscriptions"];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

#[derive(Deserialize)]
struct RawRecord {
    date: String,
    subscription_type: String,
    active_subscriptions: u64,
}

/// The subscription dataset, loaded once and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<SubscriptionRecord>,
}

impl Dataset {
    /// Load a dataset from a CSV file with a header row.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;
        info!(
            "Loaded {} subscription records ({} types) from {}",
            dataset.len(),
            dataset.subscription_types().len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load a dataset from any CSV source. Columns are matched by name.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DashboardError::MissingColumn(column.to_string()));
            }
        }

        let mut records = Vec::new();
        for (idx, row) in rdr.deserialize::<RawRecord>().enumerate() {
            let row = row?;
            // header is line 1
            let line = idx as u64 + 2;
            let date = parse_date(&row.date).ok_or_else(|| DashboardError::InvalidDate {
                line,
                value: row.date.clone(),
            })?;
            records.push(SubscriptionRecord {
                date,
                subscription_type: row.subscription_type,
                active_subscriptions: row.active_subscriptions,
            });
        }

        Ok(Self { records })
    }

    pub fn from_records(records: Vec<SubscriptionRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SubscriptionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct subscription types in the order they first appear in the file.
    pub fn subscription_types(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter(|r| seen.insert(r.subscription_type.as_str()))
            .map(|r| r.subscription_type.clone())
            .collect()
    }

    /// Distinct years present, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.records.iter().map(|r| r.date.year()).collect();
        years.sort_unstable();
        years.dedup();
        years
    }

    /// Earliest and latest date, or `None` for an empty dataset.
    pub fn date_bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some((min, max))
    }
}

/// Parse a calendar date, discarding any time of day.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
                .map(|dt| dt.date())
        })
}
