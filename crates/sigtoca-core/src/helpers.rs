//! Small helpers shared by the scrapers and renderers.

use std::collections::{BTreeMap, HashMap};

use chrono::Weekday;
use scraper::{ElementRef, Html};

use crate::date::CalendarDate;
use crate::template::UNDEFINED;

/// Portuguese weekday names, Sunday first.
const PT_WEEKDAYS: [&str; 7] = [
    "domingo", "segunda", "terça", "quarta", "quinta", "sexta", "sábado",
];

/// Values that can be "empty".
///
/// [`try_or_default`] treats an empty result the same as a failure. Scalars
/// are never empty.
pub trait IsEmpty {
    fn is_empty(&self) -> bool {
        false
    }
}

impl IsEmpty for CalendarDate {}

impl<T> IsEmpty for Option<T> {
    fn is_empty(&self) -> bool {
        self.is_none()
    }
}

macro_rules! never_empty {
    ($($ty:ty),*) => {
        $(impl IsEmpty for $ty {})*
    };
}

never_empty!(bool, i32, i64, u32, u64, usize);

impl IsEmpty for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl IsEmpty for &str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl<T> IsEmpty for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> IsEmpty for &[T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<K, V, S> IsEmpty for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<K, V> IsEmpty for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

/// Runs `f` and returns its value, or `default` if it fails or its value is empty.
///
/// Panics in `f` are not caught.
pub fn try_or_default<T, E, F>(f: F, default: T) -> T
where
    T: IsEmpty,
    F: FnOnce() -> Result<T, E>,
{
    match f() {
        Ok(value) if !value.is_empty() => value,
        _ => default,
    }
}

/// Builds `"<title> <a href=\"<href>\"><text></a><br/>"`.
///
/// Falls back to `"<title> <text><br/>"` when only `text` is usable, and to an
/// empty string when neither is. A value containing the literal `undefined`
/// counts as missing.
pub fn build_anchor_html(title: &str, href: Option<&str>, text: Option<&str>) -> String {
    let href = href.filter(|h| !h.contains(UNDEFINED));
    let text = text.filter(|t| !t.contains(UNDEFINED));

    match (href, text) {
        (Some(href), Some(text)) => format!("{title} <a href=\"{href}\">{text}</a><br/>"),
        (None, Some(text)) => format!("{title} {text}<br/>"),
        _ => String::new(),
    }
}

/// Returns the position of a Portuguese weekday name, Sunday being 0.
///
/// The name is trimmed and lowercased first; `None` means no match.
pub fn weekday_index(name: &str) -> Option<usize> {
    let name = name.trim().to_lowercase();
    PT_WEEKDAYS.iter().position(|day| *day == name)
}

/// Parses a Portuguese weekday name.
pub fn pt_weekday(name: &str) -> Option<Weekday> {
    const BY_INDEX: [Weekday; 7] = [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ];
    weekday_index(name).map(|i| BY_INDEX[i])
}

/// Returns the text owned directly by `element`, skipping nested elements.
pub fn self_text(element: &ElementRef<'_>) -> String {
    element
        .children()
        .filter_map(|child| child.value().as_text())
        .map(|text| &**text)
        .collect()
}

/// Parses an HTML fragment and returns the own text of its first element.
///
/// Returns an empty string if the fragment has no element.
pub fn self_text_of_html(fragment: &str) -> String {
    let html = Html::parse_fragment(fragment);
    html.root_element()
        .children()
        .find_map(ElementRef::wrap)
        .map(|element| self_text(&element))
        .unwrap_or_default()
}
