use chrono::Local;
use serde_json::{Map, Value};

use crate::domain::event::EventStatus;
use crate::dto::events::{CalendarEvent, EventDetail};
use crate::repository::{EventListQuery, EventReader};

use super::ServiceResult;

/// Events currently fed to the calendar widget.
#[derive(Debug, Default)]
pub struct Calendar {
    events: Vec<CalendarEvent>,
    local_events: usize,
}

impl Calendar {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self {
            events,
            local_events: 0,
        }
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }
}

/// State of the calendar section.
///
/// `None` until the section has been opened once.
#[derive(Debug, Default)]
pub struct CalendarView {
    calendar: Option<Calendar>,
}

impl CalendarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.calendar.is_some()
    }

    pub fn events(&self) -> &[CalendarEvent] {
        self.calendar.as_ref().map(Calendar::events).unwrap_or_default()
    }

    /// Drops the current calendar and builds a new one from every scraping
    /// event.
    ///
    /// When the fetch fails the calendar is still rebuilt, empty, and the
    /// error is returned so the caller can raise an alert.
    pub async fn init_calendar<R>(&mut self, repo: &R) -> ServiceResult<&[CalendarEvent]>
    where
        R: EventReader,
    {
        self.calendar = None;

        match repo.list_events(EventListQuery::default()).await {
            Ok(events) => {
                let events = events.iter().map(CalendarEvent::from).collect();
                Ok(self.calendar.insert(Calendar::new(events)).events())
            }
            Err(e) => {
                log::error!("Failed to load calendar events: {e}");
                self.calendar = Some(Calendar::default());
                Err(e.into())
            }
        }
    }

    /// Looks up a rendered event for the detail modal.
    pub fn event_detail(&self, id: &str) -> Option<EventDetail> {
        self.events()
            .iter()
            .find(|event| event.id == id)
            .map(EventDetail::from)
    }

    /// Appends a synthetic event dated now, without reloading.
    ///
    /// The payload's `type` becomes the title, its `status` picks the color
    /// and the whole payload is carried as extended properties. Does nothing
    /// before the calendar has been initialized.
    pub fn add_scraping_event(&mut self, data: Map<String, Value>) -> Option<CalendarEvent> {
        let calendar = self.calendar.as_mut()?;

        calendar.local_events += 1;
        let title = data
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let status = data
            .get("status")
            .and_then(Value::as_str)
            .map(EventStatus::from)
            .unwrap_or_default();
        let start = Local::now().naive_local().format("%Y-%m-%dT%H:%M:%S").to_string();

        let event = CalendarEvent::new(
            format!("local-{}", calendar.local_events),
            title,
            Some(start),
            &status,
            data,
        );
        calendar.events.push(event.clone());
        Some(event)
    }
}
