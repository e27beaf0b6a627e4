//! Event types consumed by the link builders.
//!
//! This module provides:
//! - [`Event`]: a captured calendar event (time range, location, free-form fields)
//! - [`RepeatRule`]: an optional weekly/daily recurrence
//! - [`Extractor`]: the capability that renders an event's name and description

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::date::CalendarDate;

/// A calendar-worthy occurrence captured from a page.
///
/// Only `from`, `to` and `location` are read directly by this crate. Everything
/// else is left to the [`Extractor`], which may look at the site-specific
/// fields kept in `extra` (`subject`, `room`, `teacher`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// When the event starts.
    pub from: CalendarDate,
    /// When the event ends.
    pub to: CalendarDate,
    /// Where the event takes place.
    pub location: String,
    /// Download link for the event page, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
    /// The event name, if the page has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The event description, if the page has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Any other scraped field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Event {
    /// Creates a new event with the required fields.
    pub fn new(from: CalendarDate, to: CalendarDate, location: impl Into<String>) -> Self {
        Self {
            from,
            to,
            location: location.into(),
            download: None,
            name: None,
            description: None,
            extra: Map::new(),
        }
    }

    /// Builder method to set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder method to set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder method to set the download link.
    pub fn with_download(mut self, download: impl Into<String>) -> Self {
        self.download = Some(download.into());
        self
    }

    /// Builder method to add a free-form field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the event as a JSON object, for template interpolation.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization errors.
    pub fn to_binding(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

/// A recurrence for the Google Calendar `RRULE` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepeatRule {
    /// RRULE frequency, e.g. `WEEKLY`.
    pub freq: String,
    /// Last day of the recurrence.
    pub until: CalendarDate,
}

impl RepeatRule {
    /// Creates a new repeat rule.
    pub fn new(freq: impl Into<String>, until: CalendarDate) -> Self {
        Self {
            freq: freq.into(),
            until,
        }
    }

    /// A weekly repeat until the given date.
    pub fn weekly(until: CalendarDate) -> Self {
        Self::new("WEEKLY", until)
    }
}

/// Renders the human-readable parts of an [`Event`].
///
/// One implementation exists per source site or format. The flags select the
/// rendering context:
/// - `for_url`: the text is placed in a deep-link query string
/// - `for_outlook`: the description goes into an Outlook plain-text body
///   instead of a Google HTML details field
pub trait Extractor {
    /// Returns the event name.
    fn name(&self, event: &Event, for_url: bool) -> String;

    /// Returns the event description.
    fn description(&self, event: &Event, for_url: bool, for_outlook: bool) -> String;
}

impl<T: Extractor + ?Sized> Extractor for &T {
    fn name(&self, event: &Event, for_url: bool) -> String {
        (**self).name(event, for_url)
    }

    fn description(&self, event: &Event, for_url: bool, for_outlook: bool) -> String {
        (**self).description(event, for_url, for_outlook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Event {
        Event::new(
            CalendarDate::from_ymd_hm(2021, 3, 5, 8, 0).unwrap(),
            CalendarDate::from_ymd_hm(2021, 3, 5, 10, 0).unwrap(),
            "B001",
        )
    }

    #[test]
    fn builder_sets_fields() {
        let event = sample()
            .with_name("Compilers")
            .with_description("Weekly lecture")
            .with_download("https://example.com/c.ics")
            .with_field("acronym", "COMP");

        assert_eq!(event.name.as_deref(), Some("Compilers"));
        assert_eq!(event.description.as_deref(), Some("Weekly lecture"));
        assert_eq!(event.download.as_deref(), Some("https://example.com/c.ics"));
        assert_eq!(event.extra.get("acronym"), Some(&json!("COMP")));
    }

    #[test]
    fn deserializes_site_specific_fields() {
        let event: Event = serde_json::from_value(json!({
            "from": "2021-03-05T08:00:00",
            "to": "2021-03-05T10:00:00",
            "location": "B001",
            "subject": { "name": "Compilers", "acronym": "COMP" },
        }))
        .unwrap();

        assert_eq!(event.location, "B001");
        assert_eq!(event.name, None);
        assert_eq!(event.extra["subject"]["acronym"], json!("COMP"));
    }

    #[test]
    fn binding_flattens_extra_fields() {
        let binding = sample()
            .with_name("Compilers")
            .with_field("type", "T")
            .to_binding()
            .unwrap();
        assert_eq!(binding["name"], json!("Compilers"));
        assert_eq!(binding["type"], json!("T"));
        assert_eq!(binding["location"], json!("B001"));
        assert!(binding.get("download").is_none());
    }

    #[test]
    fn location_is_required() {
        let result: Result<Event, _> = serde_json::from_value(json!({
            "from": "2021-03-05T08:00:00",
            "to": "2021-03-05T10:00:00",
        }));
        assert!(result.unwrap_err().to_string().contains("location"));
    }

    #[test]
    fn weekly_repeat() {
        let until = CalendarDate::from_ymd_hm(2021, 6, 1, 0, 0).unwrap();
        let rule = RepeatRule::weekly(until);
        assert_eq!(rule.freq, "WEEKLY");
        assert_eq!(rule.until, until);
    }
}
