//! Title and description templates.
//!
//! Users write templates with short placeholders such as `${name}` or
//! `${subject.acronym}`. [`rewrite_template`] maps those onto the
//! `${event.<path>}` vocabulary, and [`interpolate`] evaluates the rewritten
//! template against an event.
//!
//! The rewrite is a fixed, ordered list of literal substitutions per dialect,
//! each replacing only the first occurrence of its placeholder. It is not a
//! template parser.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::error::TemplateError;

/// Placeholder for a missing value, as a JS template literal would print it.
pub const UNDEFINED: &str = "undefined";

/// Matches `${event.<dotted.path>}`.
static EVENT_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{event\.([A-Za-z0-9_]+(?:\.[A-Za-z0-9_]+)*)\}")
        .expect("Invalid placeholder regex")
});

const MOODLE_TOKENS: &[(&str, &str)] = &[
    ("${name}", "${event.name}"),
    ("${type}", "${event.type}"),
    ("${url}", "${event.url}"),
];

const EXAM_TOKENS: &[(&str, &str)] = &[
    ("${subject.name}", "${event.subject.name}"),
    ("${subject.acronym}", "${event.subject.acronym}"),
    ("${subject.url}", "${event.subject.url}"),
    ("${location}", "${event.location}"),
    ("${info}", "${event.info}"),
];

const CLASS_TOKENS: &[(&str, &str)] = &[
    ("${name}", "${event.name}"),
    ("${acronym}", "${event.acronym}"),
    ("${type}", "${event.type}"),
    ("${room.name}", "${event.room.name}"),
    ("${room.url}", "${event.room.url}"),
    ("${class.name}", "${event.class.name}"),
    ("${class.url}", "${event.class.url}"),
    ("${teacher.name}", "${event.teacher.name}"),
    ("${teacher.url}", "${event.teacher.url}"),
    ("${teacher.acronym}", "${event.teacher.acronym}"),
];

/// The placeholder vocabulary a template is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateDialect {
    /// Moodle calendar events.
    Moodle,
    /// Exam listings.
    Exam,
    /// Class timetables.
    Class,
}

impl TemplateDialect {
    /// Returns the dialect name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Moodle => "moodle",
            Self::Exam => "exam",
            Self::Class => "class",
        }
    }

    /// Returns the ordered `(placeholder, replacement)` pairs.
    pub fn tokens(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Moodle => MOODLE_TOKENS,
            Self::Exam => EXAM_TOKENS,
            Self::Class => CLASS_TOKENS,
        }
    }

    /// Rewrites the first occurrence of each placeholder, in order.
    pub fn rewrite(&self, template: &str) -> String {
        let rewritten = self
            .tokens()
            .iter()
            .fold(template.to_string(), |acc, &(from, to)| acc.replacen(from, to, 1));
        trace!(dialect = self.as_str(), %rewritten, "rewrote template");
        rewritten
    }
}

impl fmt::Display for TemplateDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateDialect {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "moodle" => Ok(Self::Moodle),
            "exam" => Ok(Self::Exam),
            "class" => Ok(Self::Class),
            other => Err(TemplateError::UnsupportedDialect(other.to_string())),
        }
    }
}

/// Rewrites a user template into the `${event.*}` vocabulary.
///
/// `dialect` must be `moodle`, `exam` or `class`.
pub fn rewrite_template(template: &str, dialect: &str) -> Result<String, TemplateError> {
    Ok(dialect.parse::<TemplateDialect>()?.rewrite(template))
}

/// Evaluates `${event.<path>}` placeholders against an event binding.
///
/// Strings are inserted raw, numbers and booleans through `Display`, objects
/// and arrays as JSON. Missing values and `null` become [`UNDEFINED`]. Any
/// other `${...}` text is left untouched.
pub fn interpolate(template: &str, event: &Value) -> String {
    EVENT_PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            lookup(event, &caps[1]).map_or_else(|| UNDEFINED.to_string(), render)
        })
        .into_owned()
}

fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.get(key))
        .filter(|v| !v.is_null())
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
