//! Formatting helpers consumed by the card view model.

use chrono::{DateTime, Utc};

use shoefront_core::MinorUnits;

use crate::variant::RecencyWindow;

/// Format an amount of cents as a dollar price.
///
/// Whole-dollar amounts drop the cents (`$165`); anything else prints two
/// decimals (`$125.50`). Thousands are comma separated.
pub fn format_price(amount: MinorUnits) -> String {
    let (dollars, cents) = amount.split();
    let dollars = group_thousands(dollars);
    if cents == 0 {
        format!("${dollars}")
    } else {
        format!("${dollars}.{cents:02}")
    }
}

fn group_thousands(value: u64) -> String {
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

/// `"1 Color"`, `"0 Colors"`, `"3 Colors"`.
pub fn pluralize(noun: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Whether `date` is less than `window` before `now`.
///
/// Exclusive at the boundary. Dates after `now` have negative elapsed time and
/// therefore always count as recent.
pub fn is_within_recency_window(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> bool {
    now.signed_duration_since(date) < window.as_duration()
}
