//! `sigtoca one-click`: print the one-click element for an event.

use sigtoca_core::{
    AssetResolver, CalendarService, Event, Extractor, OneClickElement, RepeatRule,
    build_one_click_element,
};

use crate::config::OneClickSettings;
use crate::error::CliResult;

/// Builds the element for `service`.
///
/// Google descriptions keep their HTML, so only Google links take the
/// HTML-body path.
pub fn build<E: Extractor + ?Sized, R: AssetResolver + ?Sized>(
    settings: &OneClickSettings,
    resolver: &R,
    extractor: &E,
    event: &Event,
    service: CalendarService,
    repeat: Option<&RepeatRule>,
) -> OneClickElement {
    let url = service.build_url(extractor, event, repeat);
    build_one_click_element(
        &settings.link_class,
        &settings.icon_class,
        service,
        &url,
        service == CalendarService::Google,
        resolver,
    )
}

/// Prints the element as HTML, or its click target.
pub fn run<E: Extractor + ?Sized>(
    settings: &OneClickSettings,
    extractor: &E,
    event: &Event,
    service: CalendarService,
    repeat: Option<&RepeatRule>,
    html: bool,
) -> CliResult<()> {
    let resolver = settings.resolver()?;
    let element = build(settings, &resolver, extractor, event, service, repeat);
    if html {
        println!("{}", element.to_html());
    } else {
        println!("{}", element.target);
    }
    Ok(())
}
