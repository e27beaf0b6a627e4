//! `sigtoca links`: print (and optionally open) the deep links for an event.

use sigtoca_core::{CalendarService, Event, Extractor, RepeatRule};
use tracing::info;

use crate::error::{CliError, CliResult};

/// Builds one `(service, url)` pair per service in `services`.
pub fn build_all<E: Extractor + ?Sized>(
    services: &[CalendarService],
    extractor: &E,
    event: &Event,
    repeat: Option<&RepeatRule>,
) -> Vec<(CalendarService, String)> {
    services
        .iter()
        .map(|service| (*service, service.build_url(extractor, event, repeat)))
        .collect()
}

/// Prints the links and opens the one for `open_service`, if any.
///
/// `open_service` may name a service that is not printed.
pub fn run<E: Extractor + ?Sized>(
    services: &[CalendarService],
    extractor: &E,
    event: &Event,
    repeat: Option<&RepeatRule>,
    open_service: Option<CalendarService>,
) -> CliResult<()> {
    for (service, url) in build_all(services, extractor, event, repeat) {
        println!("{}: {}", service.display_name(), url);
    }

    if let Some(service) = open_service {
        let url = service.build_url(extractor, event, repeat);
        info!(service = %service, url = %url, "opening calendar link");
        open::that(url).map_err(|e| CliError::Action(format!("failed to open URL: {}", e)))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TemplateSettings;
    use sigtoca_core::{CalendarDate, parse_compact_date};

    fn event() -> Event {
        Event::new(
            CalendarDate::from_ymd_hm(2021, 3, 5, 8, 0).unwrap(),
            CalendarDate::from_ymd_hm(2021, 3, 5, 10, 0).unwrap(),
            "B001",
        )
        .with_field("acronym", "COMP")
        .with_field("type", "TP")
    }

    #[test]
    fn builds_one_link_per_service() {
        let extractor = TemplateSettings::default().extractor();
        let links = build_all(&CalendarService::ALL, &extractor, &event(), None);

        assert_eq!(links.len(), 2);
        assert_eq!(links[0].0, CalendarService::Google);
        assert!(links[0].1.contains("text=COMP%20-%20TP"));
        assert_eq!(links[1].0, CalendarService::Outlook);
        assert!(links[1].1.contains("subject=COMP%20-%20TP"));
    }

    #[test]
    fn respects_service_selection() {
        let extractor = TemplateSettings::default().extractor();
        let links = build_all(&[CalendarService::Outlook], &extractor, &event(), None);
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].0, CalendarService::Outlook);
    }

    #[test]
    fn repeat_only_reaches_google() {
        let extractor = TemplateSettings::default().extractor();
        let repeat = RepeatRule::weekly(parse_compact_date("20210601").unwrap());
        let links = build_all(&CalendarService::ALL, &extractor, &event(), Some(&repeat));

        assert!(links[0].1.ends_with("&recur=RRULE:FREQ=WEEKLY;UNTIL=20210601T000000Z"));
        assert!(!links[1].1.contains("recur"));
    }
}
