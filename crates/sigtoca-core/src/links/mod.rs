//! "Add to calendar" deep links.
//!
//! This module builds the URLs that open a prefilled event editor on:
//! - **Google Calendar** (`calendar.google.com/calendar/r/eventedit`)
//! - **Outlook.com** (`outlook.live.com/owa/?path=/calendar/action/compose`)
//!
//! Field values are inserted exactly as the [`Extractor`] and the event return
//! them. No percent-encoding is added here: the extractor is asked for
//! URL-ready text, and both services accept the rest as-is.
//!
//! # Example
//!
//! ```
//! use sigtoca_core::date::CalendarDate;
//! use sigtoca_core::event::{Event, Extractor};
//! use sigtoca_core::links::build_google_calendar_url;
//!
//! struct Plain;
//!
//! impl Extractor for Plain {
//!     fn name(&self, event: &Event, _for_url: bool) -> String {
//!         event.name.clone().unwrap_or_default()
//!     }
//!     fn description(&self, _event: &Event, _for_url: bool, _for_outlook: bool) -> String {
//!         String::new()
//!     }
//! }
//!
//! let event = Event::new(
//!     CalendarDate::from_ymd_hm(2021, 3, 5, 8, 0).unwrap(),
//!     CalendarDate::from_ymd_hm(2021, 3, 5, 10, 0).unwrap(),
//!     "B001",
//! )
//! .with_name("Exam");
//!
//! let url = build_google_calendar_url(&Plain, &event, None);
//! assert!(url.contains("&dates=20210305T080000Z/20210305T100000Z"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DomError;
use crate::event::{Event, Extractor, RepeatRule};

/// Base of the Google Calendar event editor link.
pub const GOOGLE_CALENDAR_BASE: &str = "https://calendar.google.com/calendar/r/eventedit";

/// Base of the Outlook.com compose link, including the fixed action parameters.
pub const OUTLOOK_CALENDAR_BASE: &str =
    "https://outlook.live.com/owa/?path=/calendar/action/compose&rru=addevent";

/// Project page advertised in the Google `sprop=website:` parameter.
pub const PROJECT_WEBSITE: &str = "https://github.com/msramalho/SigToCa";

/// An external calendar service with a deep-link scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarService {
    Google,
    Outlook,
}

impl CalendarService {
    /// All supported services, in display order.
    pub const ALL: [CalendarService; 2] = [Self::Google, Self::Outlook];

    /// Returns the lowercase service name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Google => "google",
            Self::Outlook => "outlook",
        }
    }

    /// Returns a human-readable name for this service.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Google => "Google Calendar",
            Self::Outlook => "Outlook Calendar",
        }
    }

    /// Builds the deep link for this service.
    pub fn build_url<E: Extractor + ?Sized>(
        &self,
        extractor: &E,
        event: &Event,
        repeat: Option<&RepeatRule>,
    ) -> String {
        match self {
            Self::Google => build_google_calendar_url(extractor, event, repeat),
            Self::Outlook => build_outlook_calendar_url(extractor, event, repeat),
        }
    }
}

impl fmt::Display for CalendarService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarService {
    type Err = DomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Self::Google),
            "outlook" => Ok(Self::Outlook),
            other => Err(DomError::UnknownService(other.to_string())),
        }
    }
}

/// Builds a Google Calendar "create event" link.
///
/// The parameters are, in order: `text`, `location`, `details`, `dates`
/// (`<from>/<to>`), `sprop=name:`, `sprop=website:`, and, only when `repeat` is
/// given, `recur=RRULE:FREQ=<freq>;UNTIL=<until>`.
pub fn build_google_calendar_url<E: Extractor + ?Sized>(
    extractor: &E,
    event: &Event,
    repeat: Option<&RepeatRule>,
) -> String {
    let name = extractor.name(event, true);
    let details = extractor.description(event, true, false);

    let mut url = format!(
        "{base}?text={name}&location={location}&details={details}&dates={from}/{to}&sprop=name:{name}&sprop=website:{website}",
        base = GOOGLE_CALENDAR_BASE,
        location = event.location,
        from = event.from.to_calendar_service_format(),
        to = event.to.to_calendar_service_format(),
        website = PROJECT_WEBSITE,
    );

    if let Some(rule) = repeat {
        url.push_str(&recurrence_fragment(rule));
    }

    debug!(
        service = "google",
        recurring = repeat.is_some(),
        len = url.len(),
        "built calendar link"
    );
    url
}

/// Builds an Outlook.com "compose event" link.
///
/// The parameters are `startdt`, `enddt`, `subject`, `location` and `body`.
/// `repeat` is accepted for symmetry with [`build_google_calendar_url`] but
/// Outlook links carry no recurrence.
pub fn build_outlook_calendar_url<E: Extractor + ?Sized>(
    extractor: &E,
    event: &Event,
    repeat: Option<&RepeatRule>,
) -> String {
    let url = format!(
        "{base}&startdt={from}&enddt={to}&subject={subject}&location={location}&body={body}",
        base = OUTLOOK_CALENDAR_BASE,
        from = event.from.to_calendar_service_format(),
        to = event.to.to_calendar_service_format(),
        subject = extractor.name(event, true),
        location = event.location,
        body = extractor.description(event, true, true),
    );

    debug!(
        service = "outlook",
        ignored_repeat = repeat.is_some(),
        len = url.len(),
        "built calendar link"
    );
    url
}

/// Renders `&recur=RRULE:FREQ=<freq>;UNTIL=<until>`.
fn recurrence_fragment(rule: &RepeatRule) -> String {
    format!(
        "&recur=RRULE:FREQ={};UNTIL={}",
        rule.freq,
        rule.until.to_calendar_service_format()
    )
}


#[cfg(test)]
mod golden_tests;
