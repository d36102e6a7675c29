pub mod format;

pub use format::{format_thousands, month_label, month_options, tracked_span};
