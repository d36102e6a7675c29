use std::collections::{HashMap, HashSet};

use super::Dataset;
use crate::types::Summaries;

/// Compute the value-box summaries over the whole dataset.
///
/// When two types share the largest total, the one that appears first in the
/// file wins. That tie-break is incidental and should not be relied on.
pub fn compute_summaries(dataset: &Dataset) -> Summaries {
    let records = dataset.records();
    let Some((first_date, last_date)) = dataset.date_bounds() else {
        return Summaries::default();
    };

    let current_subscriptions = records
        .iter()
        .filter(|r| r.date == last_date)
        .fold(0u64, |acc, r| acc.saturating_add(r.active_subscriptions));

    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in records {
        let total = totals.entry(record.subscription_type.as_str()).or_insert(0);
        *total = total.saturating_add(record.active_subscriptions);
    }

    let mut most_popular_type: Option<(String, u64)> = None;
    for name in dataset.subscription_types() {
        let total = totals.get(name.as_str()).copied().unwrap_or(0);
        if most_popular_type.as_ref().map_or(true, |(_, best)| total > *best) {
            most_popular_type = Some((name, total));
        }
    }

    let months_tracked = records
        .iter()
        .map(|r| r.date)
        .collect::<HashSet<_>>()
        .len();

    Summaries {
        current_subscriptions,
        most_popular_type: most_popular_type.map(|(name, _)| name),
        months_tracked,
        first_date: Some(first_date),
        last_date: Some(last_date),
    }
}
