use chrono::NaiveDate;

/// Format a count with comma thousands separators, e.g. `12,345`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `January 2020` style month label.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Caption under the months-tracked value box.
pub fn tracked_span(first: Option<NaiveDate>, last: Option<NaiveDate>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("From {} to {}", month_label(first), month_label(last)),
        _ => "No data loaded".to_string(),
    }
}

/// Two-digit month options for the month selectors.
pub fn month_options() -> Vec<String> {
    (1..=12).map(|m| format!("{m:02}")).collect()
}
