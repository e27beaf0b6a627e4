//! Template-driven [`Extractor`].
//!
//! [`TemplateExtractor`] renders an event's name and description from the
//! user's title/description templates: the templates are rewritten once into
//! the `${event.*}` vocabulary, then interpolated against each event.

use serde_json::Value;
use tracing::{trace, warn};

use crate::error::TemplateError;
use crate::event::{Event, Extractor};
use crate::template::{TemplateDialect, interpolate};

/// Line break used in HTML descriptions.
const HTML_BREAK: &str = "<br/>";

/// Serializes `event` for interpolation.
///
/// On failure every placeholder renders as `undefined`, and a warning is logged.
fn binding(event: &Event) -> Value {
    event.to_binding().unwrap_or_else(|error| {
        warn!(%error, "event could not be serialized for templating");
        Value::Null
    })
}

/// An [`Extractor`] backed by title and description templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateExtractor {
    dialect: TemplateDialect,
    title: String,
    description: String,
}

impl TemplateExtractor {
    /// Creates an extractor from templates written in `dialect`.
    pub fn new(dialect: TemplateDialect, title: &str, description: &str) -> Self {
        Self {
            dialect,
            title: dialect.rewrite(title),
            description: dialect.rewrite(description),
        }
    }

    /// Creates an extractor from a dialect name.
    pub fn for_dialect(dialect: &str, title: &str, description: &str) -> Result<Self, TemplateError> {
        Ok(Self::new(dialect.parse()?, title, description))
    }

    /// Returns the template dialect.
    pub fn dialect(&self) -> TemplateDialect {
        self.dialect
    }

    /// Returns the rewritten title template.
    pub fn title_template(&self) -> &str {
        &self.title
    }

    /// Returns the rewritten description template.
    pub fn description_template(&self) -> &str {
        &self.description
    }
}

impl Extractor for TemplateExtractor {
    fn name(&self, event: &Event, for_url: bool) -> String {
        let name = interpolate(&self.title, &binding(event));
        trace!(%name, for_url, "rendered event name");
        if for_url {
            urlencoding::encode(&name).into_owned()
        } else {
            name
        }
    }

    fn description(&self, event: &Event, for_url: bool, for_outlook: bool) -> String {
        let mut description = interpolate(&self.description, &binding(event));
        // Outlook bodies are plain text.
        if for_outlook {
            description = description.replace(HTML_BREAK, "\n");
        }
        if for_url {
            urlencoding::encode(&description).into_owned()
        } else {
            description
        }
    }
}
