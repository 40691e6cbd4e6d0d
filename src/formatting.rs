//! Display helpers shared by every view.
//!
//! All output follows `es-ES` conventions; the dashboard has a single fixed
//! locale.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::domain::types::non_blank;

/// Placeholder shown for missing values.
pub const NOT_AVAILABLE: &str = "N/A";

const MONTHS: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];

const SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

const HASH_DISPLAY_LEN: usize = 16;

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = value.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Formats an ISO timestamp as `15 ene 2024, 10:30`.
///
/// Offset timestamps keep their own wall-clock time. Values that cannot be
/// parsed are shown as received.
pub fn format_date(value: Option<&str>) -> String {
    let Some(raw) = non_blank(value) else {
        return NOT_AVAILABLE.to_string();
    };
    match parse_timestamp(raw.trim()) {
        Some(dt) => format!(
            "{} {} {}, {:02}:{:02}",
            dt.day(),
            MONTHS[dt.month0() as usize],
            dt.year(),
            dt.hour(),
            dt.minute()
        ),
        None => raw.to_string(),
    }
}

/// Formats a USD amount the way `es-ES` currency formatting does.
///
/// Zero and missing prices are `N/A`.
pub fn format_price(value: Option<f64>) -> String {
    let price = match value {
        Some(p) if p.is_finite() && p != 0.0 => p,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let cents = (price.abs() * 100.0).round() as u64;
    let units = (cents / 100).to_string();
    let sign = if price < 0.0 { "-" } else { "" };

    // es-ES only groups thousands from five integer digits up.
    let units = if units.len() >= 5 {
        group_thousands(&units)
    } else {
        units
    };

    format!("{sign}{units},{:02} US$", cents % 100)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Formats a byte count with the largest fitting unit up to GB.
pub fn format_file_size(bytes: Option<u64>) -> String {
    let bytes = match bytes {
        Some(b) if b > 0 => b,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let mut unit = 0;
    while unit + 1 < SIZE_UNITS.len() && bytes >= 1024u64.pow(unit as u32 + 1) {
        unit += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(unit as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{rounded} {}", SIZE_UNITS[unit])
}

/// Cuts `text` to `max` characters, appending `...` when something was cut.
pub fn truncate_text(text: Option<&str>, max: usize) -> String {
    let Some(text) = text else {
        return String::new();
    };
    if text.chars().count() > max {
        let head: String = text.chars().take(max).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Shortens a hash for table display.
pub fn truncate_hash(hash: Option<&str>) -> String {
    match hash {
        Some(h) if !h.is_empty() => truncate_text(Some(h), HASH_DISPLAY_LEN),
        _ => NOT_AVAILABLE.to_string(),
    }
}
