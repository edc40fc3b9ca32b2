//! Text formatting for display values.

use chrono::{DateTime, Utc};

use crate::api::{MetricCard, MetricUnit, SecondaryValue};

/// Integer with `,` thousands separators (`67000` -> `67,000`).
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// A value in its unit: `KES 67,000`, `168`, `78%`.
pub fn format_value(value: f64, unit: MetricUnit, currency_code: &str) -> String {
    let rounded = if value.is_finite() { value.round() as i64 } else { 0 };
    match unit {
        MetricUnit::Currency => format!("{} {}", currency_code, group_thousands(rounded)),
        MetricUnit::Count => group_thousands(rounded),
        MetricUnit::Percent => format!("{}%", rounded),
    }
}

/// `+8.2% from last month`, or `None` without a usable baseline.
pub fn change_text(card: &MetricCard) -> Option<String> {
    card.change_percent()
        .map(|percent| format!("{:+.1}% from last month", percent))
}

/// `Peak: 95%`
pub fn secondary_text(secondary: &SecondaryValue, currency_code: &str) -> String {
    format!(
        "{}: {}",
        secondary.label,
        format_value(secondary.value, secondary.unit, currency_code)
    )
}

/// Coarse age of an event: `just now`, `N min ago`, `N h ago`, `N d ago`.
pub fn relative_age(occurred_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - occurred_at).num_minutes();
    match minutes {
        m if m < 1 => "just now".to_string(),
        m if m < 60 => format!("{} min ago", m),
        m if m < 60 * 24 => format!("{} h ago", m / 60),
        m => format!("{} d ago", m / (60 * 24)),
    }
}
