//! "One-click add" link elements.
//!
//! A one-click element is an anchor wrapping a service icon. Clicking it opens
//! a calendar deep link (see [`crate::links`]) in a new browsing context. The
//! element is returned detached: [`OneClickElement::to_html`] renders it, and
//! inserting it into a page is up to the caller.
//!
//! Two kinds of URL reach this module. Google links carry an HTML `details`
//! field and are passed with `is_html_body = true`: the URL is run through
//! `encodeURI`/`decodeURI` and every whitespace character becomes `%20`.
//! Other links only need their newlines turned into `%0A`.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::DomError;
use crate::links::CalendarService;

/// Characters `encodeURI` leaves alone besides ASCII letters and digits.
const URI_UNESCAPED: &str = ";,/?:@&=+$-_.!~*'()#";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s").expect("Invalid whitespace regex"));

/// Resolves a path inside the extension package to a loadable URL.
pub trait AssetResolver {
    fn resolve_asset_url(&self, path: &str) -> String;
}

impl<F> AssetResolver for F
where
    F: Fn(&str) -> String,
{
    fn resolve_asset_url(&self, path: &str) -> String {
        self(path)
    }
}

/// Resolves assets relative to a base URL such as `chrome-extension://<id>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrlResolver {
    base: Url,
}

impl BaseUrlResolver {
    /// Creates a resolver for the given base URL.
    pub fn new(base: &str) -> Result<Self, DomError> {
        let base = Url::parse(base).map_err(|e| DomError::InvalidAssetUrl {
            base: base.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { base })
    }

    /// Returns the base URL.
    pub fn base(&self) -> &Url {
        &self.base
    }
}

impl AssetResolver for BaseUrlResolver {
    fn resolve_asset_url(&self, path: &str) -> String {
        match self.base.join(path) {
            Ok(url) => url.into(),
            Err(_) => format!("{}{}", self.base, path),
        }
    }
}

/// The `<img>` child of a one-click element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconImage {
    /// CSS class of the icon.
    pub class: String,
    /// Alt text naming the service.
    pub alt: &'static str,
    /// Resolved icon URL.
    pub src: String,
}

/// A detached `<a>` element that opens a calendar link on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OneClickElement {
    /// CSS class of the anchor.
    pub class: String,
    /// Tooltip.
    pub title: &'static str,
    /// Always `#`, so the pointer cursor shows.
    pub href: &'static str,
    /// The service icon.
    pub icon: IconImage,
    /// Inline `onclick` script.
    pub onclick: String,
    /// URL the click opens in a new browsing context.
    pub target: String,
}

impl OneClickElement {
    /// Serializes the element, escaping every attribute value.
    pub fn to_html(&self) -> String {
        format!(
            r#"<a class="{}" title="{}" href="{}" onclick="{}"><img class="{}" alt="{}" src="{}"></a>"#,
            html_escape(&self.class),
            html_escape(self.title),
            html_escape(self.href),
            html_escape(&self.onclick),
            html_escape(&self.icon.class),
            html_escape(self.icon.alt),
            html_escape(&self.icon.src),
        )
    }
}

/// Returns the tooltip, icon alt text and icon path for a service.
fn service_assets(service: CalendarService) -> (&'static str, &'static str, &'static str) {
    match service {
        CalendarService::Google => (
            "Add this single event to your Google Calendar in One click!",
            "google calendar icon",
            "icons/gcalendar.png",
        ),
        CalendarService::Outlook => (
            "Add this single event to your Outlook Calendar in One click!",
            "outlook calendar icon",
            "icons/outlook.png",
        ),
    }
}

/// Builds a one-click element for `url`.
///
/// With `is_html_body` the URL goes through `encodeURI`/`decodeURI` and its
/// whitespace is replaced with `%20`; otherwise only newlines are replaced,
/// with `%0A`.
pub fn build_one_click_element<R: AssetResolver + ?Sized>(
    link_class: &str,
    icon_class: &str,
    service: CalendarService,
    url: &str,
    is_html_body: bool,
    resolver: &R,
) -> OneClickElement {
    let (title, alt, icon_path) = service_assets(service);

    let (onclick, target) = if is_html_body {
        let encoded = encode_uri(url);
        let decoded = urlencoding::decode(&encoded)
            .map(|d| d.into_owned())
            .unwrap_or_else(|_| url.to_string());
        (
            format!(r#"window.open(decodeURI('{encoded}').replace(/\s/g, "%20"));"#),
            WHITESPACE.replace_all(&decoded, "%20").into_owned(),
        )
    } else {
        let escaped = url.replace('\n', "%0A");
        (format!("window.open('{escaped}');"), escaped)
    };

    debug!(%service, is_html_body, "built one-click element");

    OneClickElement {
        class: link_class.to_string(),
        title,
        href: "#",
        icon: IconImage {
            class: icon_class.to_string(),
            alt,
            src: resolver.resolve_asset_url(icon_path),
        },
        onclick,
        target,
    }
}

/// Like [`build_one_click_element`], with the service given by name.
pub fn build_one_click_element_for<R: AssetResolver + ?Sized>(
    link_class: &str,
    icon_class: &str,
    service: &str,
    url: &str,
    is_html_body: bool,
    resolver: &R,
) -> Result<OneClickElement, DomError> {
    let service = service.parse::<CalendarService>()?;
    Ok(build_one_click_element(
        link_class,
        icon_class,
        service,
        url,
        is_html_body,
        resolver,
    ))
}

/// Percent-encodes `input` the way JavaScript's `encodeURI` does.
pub fn encode_uri(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut buf = [0u8; 4];
    for c in input.chars() {
        if c.is_ascii_alphanumeric() || URI_UNESCAPED.contains(c) {
            out.push(c);
        } else {
            out.push_str(&urlencoding::encode(c.encode_utf8(&mut buf)));
        }
    }
    out
}

/// Escapes text for HTML display.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
