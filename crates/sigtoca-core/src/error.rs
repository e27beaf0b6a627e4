//! Error types for the core helpers.

use thiserror::Error;

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or shifting dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// The input is not an 8-digit `YYYYMMDD` date.
    #[error("invalid compact date (expected YYYYMMDD): {input:?}")]
    InvalidCompactDate { input: String },

    /// The input is not a `D-M-Y` date.
    #[error("invalid day-month-year date: {input:?}")]
    InvalidDmyDate { input: String },

    /// The input is not an `HH:MM - HH:MM` range, or the index is out of range.
    #[error("invalid time range {input:?} at index {index}")]
    InvalidTimeRange { input: String, index: usize },

    /// The arithmetic result falls outside the representable calendar.
    #[error("date out of range")]
    OutOfRange,
}

impl DateError {
    pub(crate) fn compact(input: impl Into<String>) -> Self {
        Self::InvalidCompactDate {
            input: input.into(),
        }
    }

    pub(crate) fn dmy(input: impl Into<String>) -> Self {
        Self::InvalidDmyDate {
            input: input.into(),
        }
    }

    pub(crate) fn time_range(input: impl Into<String>, index: usize) -> Self {
        Self::InvalidTimeRange {
            input: input.into(),
            index,
        }
    }
}

/// Errors raised by the template rewriter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// The dialect name is not one of `moodle`, `exam` or `class`.
    #[error("unsupported template dialect: {0:?}")]
    UnsupportedDialect(String),
}

/// Errors raised while building one-click elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The calendar service name is not `google` or `outlook`.
    #[error("unknown calendar service: {0:?}")]
    UnknownService(String),

    /// The asset base URL could not be parsed or joined.
    #[error("invalid asset URL {base:?}: {message}")]
    InvalidAssetUrl { base: String, message: String },
}

/// Top-level error for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Date parsing or arithmetic failure.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Template rewriting failure.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// One-click element failure.
    #[error(transparent)]
    Dom(#[from] DomError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_include_input() {
        let err = DateError::compact("2021035");
        assert_eq!(
            err.to_string(),
            "invalid compact date (expected YYYYMMDD): \"2021035\""
        );

        let err = DateError::time_range("08:00", 1);
        assert_eq!(err.to_string(), "invalid time range \"08:00\" at index 1");
    }

    #[test]
    fn wraps_into_crate_error() {
        let err: Error = TemplateError::UnsupportedDialect("bogus".into()).into();
        assert!(matches!(err, Error::Template(_)));
        assert_eq!(err.to_string(), "unsupported template dialect: \"bogus\"");
    }
}
