pub mod dataset;
pub mod filter;
pub mod summary;

#[cfg(test)]
mod tests;

pub use dataset::Dataset;
pub use filter::{filter_records, FilteredView, SeriesGroup};
pub use summary::compute_summaries;
