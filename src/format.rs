//! Display formatting for flight cards.
//!
//! Stored values are rendered defensively: nothing here fails, every odd or
//! missing value has a fixed placeholder.

use crate::models::DateValue;

pub const TIME_PLACEHOLDER: &str = "--:--";
pub const DATE_PLACEHOLDER: &str = "Tarih belirtilmemiş";
pub const DURATION_PLACEHOLDER: &str = "Süre belirtilmemiş";
pub const TEXT_PLACEHOLDER: &str = "N/A";

const MONTHS_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim", "Kasım", "Aralık",
];

/// Time-of-day values are opaque: only a non-empty string is shown as-is.
#[must_use]
pub fn format_time(value: Option<&serde_json::Value>) -> String {
    match value {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s.clone(),
        _ => TIME_PLACEHOLDER.to_owned(),
    }
}

/// Turkish long date (`1 Mayıs 2024`), or the placeholder.
#[must_use]
pub fn format_date(value: Option<&DateValue>) -> String {
    let Some(day) = value.and_then(DateValue::calendar_day) else {
        return DATE_PLACEHOLDER.to_owned();
    };
    let month = MONTHS_TR[usize::from(u8::from(day.month())) - 1];
    format!("{} {month} {}", day.day(), day.year())
}

/// Price with tr-TR grouping and the lira sign, e.g. `₺12.500,75`.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("₺{}", format_number_tr(price))
}

/// The value itself, or `fallback` when absent or empty.
#[must_use]
pub fn text_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(fallback)
}

/// `.` between thousands, `,` before decimals, at most three fraction digits.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn format_number_tr(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let thousandths = (value.abs() * 1000.0).round() as u128;
    let whole = thousandths / 1000;
    let fraction = thousandths % 1000;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if value < 0.0 && thousandths > 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    if fraction > 0 {
        let fraction = format!("{fraction:03}");
        out.push(',');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

#[cfg(test)]
#[path = "format_test.rs"]
mod tests;
