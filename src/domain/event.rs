use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::types::EventId;

/// Outcome recorded for a scraping event.
///
/// The backend only emits `success`, `error` and `warning` today, but the
/// column is free text, so anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum EventStatus {
    Success,
    Error,
    Warning,
    Other(String),
}

impl EventStatus {
    pub fn as_str(&self) -> &str {
        match self {
            EventStatus::Success => "success",
            EventStatus::Error => "error",
            EventStatus::Warning => "warning",
            EventStatus::Other(raw) => raw,
        }
    }

    /// Calendar color for the status.
    pub fn color(&self) -> &'static str {
        match self {
            EventStatus::Success => "#198754",
            EventStatus::Error => "#dc3545",
            EventStatus::Warning => "#ffc107",
            EventStatus::Other(_) => "#0d6efd",
        }
    }

    /// Bootstrap background class for the event modal header.
    pub fn header_class(&self) -> &'static str {
        match self {
            EventStatus::Success => "success",
            EventStatus::Error => "danger",
            _ => "primary",
        }
    }

    /// Bootstrap background class for the status badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            EventStatus::Success => "success",
            EventStatus::Error => "danger",
            _ => "warning",
        }
    }
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Other(String::new())
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "success" => EventStatus::Success,
            "error" => EventStatus::Error,
            "warning" => EventStatus::Warning,
            _ => EventStatus::Other(value),
        }
    }
}

impl From<Option<String>> for EventStatus {
    fn from(value: Option<String>) -> Self {
        value.map(EventStatus::from).unwrap_or_default()
    }
}

impl From<&str> for EventStatus {
    fn from(value: &str) -> Self {
        EventStatus::from(value.to_string())
    }
}

impl From<EventStatus> for String {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for EventStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A backend-recorded occurrence from the data-collection process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrapingEvent {
    pub id: EventId,
    #[serde(default)]
    pub event_type: String,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_description: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub affected_records: Option<i64>,
    /// Seconds.
    #[serde(default)]
    pub execution_time: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_status_to_calendar_colors() {
        assert_eq!(EventStatus::from("success").color(), "#198754");
        assert_eq!(EventStatus::from("error").color(), "#dc3545");
        assert_eq!(EventStatus::from("warning").color(), "#ffc107");
        assert_eq!(EventStatus::from("unknown-status").color(), "#0d6efd");
    }

    #[test]
    fn keeps_unknown_status_verbatim() {
        let event: ScrapingEvent = serde_json::from_value(serde_json::json!({
            "id": 9,
            "event_type": "scrape_products",
            "status": "running"
        }))
        .unwrap();

        assert_eq!(event.status, EventStatus::Other("running".into()));
        assert_eq!(event.status.to_string(), "running");
        assert_eq!(
            serde_json::to_value(&event.status).unwrap(),
            serde_json::json!("running")
        );
    }

    #[test]
    fn modal_classes_follow_status() {
        assert_eq!(EventStatus::Error.header_class(), "danger");
        assert_eq!(EventStatus::Warning.header_class(), "primary");
        assert_eq!(EventStatus::Warning.badge_class(), "warning");
        assert_eq!(EventStatus::Success.badge_class(), "success");
    }
}
