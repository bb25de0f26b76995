//! Display strings for summary tiles.

use crate::services::aggregate::round_to;

pub const NOT_AVAILABLE: &str = "N/A";

/// Whole number with comma thousands separators, e.g. `3,900`.
pub fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Rating with one decimal, or `N/A` for an empty selection.
pub fn format_rating(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}", round_to(v, 1)),
        None => NOT_AVAILABLE.to_string(),
    }
}
