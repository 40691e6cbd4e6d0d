use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// JSON body posted to add a synthetic event to the calendar.
///
/// Only `type` is required; every other field is kept as an extended
/// property of the new event.
#[derive(Debug, Deserialize, Validate)]
pub struct AddScrapingEventForm {
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub event_type: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddScrapingEventPayload {
    pub data: Map<String, Value>,
}

#[derive(Debug, Error)]
pub enum AddScrapingEventFormError {
    #[error("Add scraping event form validation failed: {0}")]
    Validation(String),
}

impl From<ValidationErrors> for AddScrapingEventFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl TryFrom<AddScrapingEventForm> for AddScrapingEventPayload {
    type Error = AddScrapingEventFormError;

    fn try_from(value: AddScrapingEventForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let mut data = value.extra;
        data.insert("type".into(), Value::String(value.event_type));
        if let Some(status) = value.status {
            data.insert("status".into(), Value::String(status));
        }
        Ok(Self { data })
    }
}
