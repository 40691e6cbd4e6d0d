use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::event::{EventStatus, ScrapingEvent};
use crate::domain::types::non_blank;
use crate::formatting::format_date;

pub const NO_DESCRIPTION: &str = "Sin descripción";

/// Event in the shape the calendar widget consumes.
///
/// Only `title`, `start` and the colors drive the widget; everything else
/// rides along in `extendedProps` and is read back by the detail modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub start: Option<String>,
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub extended_props: Map<String, Value>,
}

impl CalendarEvent {
    pub fn new(
        id: String,
        title: String,
        start: Option<String>,
        status: &EventStatus,
        extended_props: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            title,
            start,
            background_color: status.color(),
            border_color: status.color(),
            extended_props,
        }
    }

    pub fn status(&self) -> EventStatus {
        match self.extended_props.get("status") {
            Some(Value::String(raw)) => EventStatus::from(raw.as_str()),
            _ => EventStatus::default(),
        }
    }
}

impl From<&ScrapingEvent> for CalendarEvent {
    fn from(event: &ScrapingEvent) -> Self {
        let mut props = Map::new();
        props.insert("description".into(), Value::from(event.event_description.clone()));
        props.insert("status".into(), Value::from(event.status.as_str()));
        props.insert("affected_records".into(), Value::from(event.affected_records));
        props.insert("execution_time".into(), Value::from(event.execution_time));
        props.insert("error_message".into(), Value::from(event.error_message.clone()));

        CalendarEvent::new(
            event.id.to_string(),
            event.event_type.clone(),
            event.event_date.clone(),
            &event.status,
            props,
        )
    }
}

/// Renders an extended property for the modal, or `None` when it is null,
/// false, zero or empty.
fn shown(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// Content of the event detail modal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetail {
    pub title: String,
    pub date: String,
    pub status: String,
    pub header_class: &'static str,
    pub badge_class: &'static str,
    pub description: Option<String>,
    pub affected_records: Option<String>,
    /// Seconds.
    pub execution_time: Option<String>,
    pub error_message: Option<String>,
}

impl From<&CalendarEvent> for EventDetail {
    fn from(event: &CalendarEvent) -> Self {
        let props = &event.extended_props;
        let status = event.status();
        Self {
            title: event.title.clone(),
            date: format_date(event.start.as_deref()),
            status: status.to_string(),
            header_class: status.header_class(),
            badge_class: status.badge_class(),
            description: shown(props.get("description")),
            affected_records: shown(props.get("affected_records")),
            execution_time: shown(props.get("execution_time")),
            error_message: shown(props.get("error_message")),
        }
    }
}

/// Entry of the recent events list on the dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentEvent {
    pub event_type: String,
    pub description: String,
    pub date: String,
    pub status: String,
}

impl From<&ScrapingEvent> for RecentEvent {
    fn from(event: &ScrapingEvent) -> Self {
        Self {
            event_type: event.event_type.clone(),
            description: non_blank(event.event_description.as_deref())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            date: format_date(event.event_date.as_deref()),
            status: event.status.to_string(),
        }
    }
}
