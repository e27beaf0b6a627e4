//! Golden tests for the deep links and one-click fragments.
//!
//! These tests use insta inline snapshots: the calendar services parse these
//! URLs byte for byte, so any change here must be deliberate.

use serde_json::json;

use crate::date::{CalendarDate, parse_compact_date};
use crate::dom::{BaseUrlResolver, build_one_click_element};
use crate::event::{Event, RepeatRule};
use crate::extractor::TemplateExtractor;
use crate::links::{CalendarService, build_google_calendar_url, build_outlook_calendar_url};

/// A Friday morning lecture, 08:00 to 10:00.
fn lecture() -> Event {
    let day = parse_compact_date("20210305").unwrap();
    Event::new(
        day.set_hours_minutes("08:00 - 10:00", 0).unwrap(),
        day.set_hours_minutes("08:00 - 10:00", 1).unwrap(),
        "B001",
    )
    .with_field("acronym", "COMP")
    .with_field("type", "T")
    .with_field("room", json!({ "name": "B001" }))
    .with_field("teacher", json!({ "name": "Ana Silva" }))
}

fn extractor() -> TemplateExtractor {
    TemplateExtractor::for_dialect(
        "class",
        "${acronym} - ${type}",
        "Room: ${room.name}<br/>Teacher: ${teacher.name}",
    )
    .unwrap()
}

fn semester_end() -> CalendarDate {
    parse_compact_date("20210601").unwrap()
}

#[test]
fn golden_google_single() {
    let url = build_google_calendar_url(&extractor(), &lecture(), None);
    insta::assert_snapshot!(url, @"https://calendar.google.com/calendar/r/eventedit?text=COMP%20-%20T&location=B001&details=Room%3A%20B001%3Cbr%2F%3ETeacher%3A%20Ana%20Silva&dates=20210305T080000Z/20210305T100000Z&sprop=name:COMP%20-%20T&sprop=website:https://github.com/msramalho/SigToCa");
}

#[test]
fn golden_google_weekly() {
    let repeat = RepeatRule::weekly(semester_end());
    let url = build_google_calendar_url(&extractor(), &lecture(), Some(&repeat));
    insta::assert_snapshot!(url, @"https://calendar.google.com/calendar/r/eventedit?text=COMP%20-%20T&location=B001&details=Room%3A%20B001%3Cbr%2F%3ETeacher%3A%20Ana%20Silva&dates=20210305T080000Z/20210305T100000Z&sprop=name:COMP%20-%20T&sprop=website:https://github.com/msramalho/SigToCa&recur=RRULE:FREQ=WEEKLY;UNTIL=20210601T000000Z");
}

#[test]
fn golden_outlook() {
    let repeat = RepeatRule::weekly(semester_end());
    let url = build_outlook_calendar_url(&extractor(), &lecture(), Some(&repeat));
    insta::assert_snapshot!(url, @"https://outlook.live.com/owa/?path=/calendar/action/compose&rru=addevent&startdt=20210305T080000Z&enddt=20210305T100000Z&subject=COMP%20-%20T&location=B001&body=Room%3A%20B001%0ATeacher%3A%20Ana%20Silva");
}

#[test]
fn golden_one_click_outlook() {
    let resolver = BaseUrlResolver::new("chrome-extension://sigtoca/").unwrap();
    let url = CalendarService::Outlook.build_url(&extractor(), &lecture(), None);
    let element = build_one_click_element(
        "oneclick",
        "oneclick-icon",
        CalendarService::Outlook,
        &url,
        false,
        &resolver,
    );
    insta::assert_snapshot!(element.to_html(), @r##"<a class="oneclick" title="Add this single event to your Outlook Calendar in One click!" href="#" onclick="window.open(&#x27;https://outlook.live.com/owa/?path=/calendar/action/compose&amp;rru=addevent&amp;startdt=20210305T080000Z&amp;enddt=20210305T100000Z&amp;subject=COMP%20-%20T&amp;location=B001&amp;body=Room%3A%20B001%0ATeacher%3A%20Ana%20Silva&#x27;);"><img class="oneclick-icon" alt="outlook calendar icon" src="chrome-extension://sigtoca/icons/outlook.png"></a>"##);
}
