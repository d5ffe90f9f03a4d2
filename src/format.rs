//! Display helpers for Indonesian Rupiah amounts, confidence scores, and
//! timestamps, used by the CLI demo renderer.

use chrono::{DateTime, Utc};

use crate::scan::domain::PriceRange;

/// Group digits Indonesian-style: `15000000` becomes `15.000.000`.
fn group_idr(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// "Rp 15.000.000"
pub fn format_idr(amount: u64) -> String {
    format!("Rp {}", group_idr(amount))
}

/// "Rp 8.000.000–9.500.000"
pub fn format_idr_range(range: &PriceRange) -> String {
    format!("Rp {}–{}", group_idr(range.min_idr), group_idr(range.max_idr))
}

/// "87%"
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", (confidence * 100.0).round() as i64)
}

/// "24 September 2025 10:00" (UTC)
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%-d %B %Y %H:%M").to_string()
}
