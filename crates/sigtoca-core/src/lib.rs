//! Core helpers: dates, calendar links, templates, one-click elements

pub mod date;
pub mod dom;
pub mod error;
pub mod event;
pub mod extractor;
pub mod helpers;
pub mod links;
pub mod template;
pub mod tracing;

pub use date::{
    CalendarDate, add_days, day_difference, parse_compact_date, parse_dmy_date,
    set_hours_minutes, to_calendar_service_format,
};
pub use dom::{
    AssetResolver, BaseUrlResolver, OneClickElement, build_one_click_element,
    build_one_click_element_for,
};
pub use error::{DateError, DomError, Error, Result, TemplateError};
pub use event::{Event, Extractor, RepeatRule};
pub use extractor::TemplateExtractor;
pub use helpers::{
    IsEmpty, build_anchor_html, pt_weekday, self_text, self_text_of_html, try_or_default,
    weekday_index,
};
pub use links::{CalendarService, build_google_calendar_url, build_outlook_calendar_url};
pub use template::{TemplateDialect, interpolate, rewrite_template};
pub use self::tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
