//! Subcommand implementations.

pub mod config;
pub mod links;
pub mod one_click;

use std::io::Read;
use std::path::Path;

use sigtoca_core::Event;
use tracing::debug;

use crate::error::CliResult;

/// Reads an event from a JSON file, or from stdin when `path` is `-`.
pub fn read_event(path: &Path) -> CliResult<Event> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    parse_event(&content)
}

/// Parses an event from its JSON form.
pub fn parse_event(content: &str) -> CliResult<Event> {
    let event: Event = serde_json::from_str(content)?;
    debug!(from = %event.from, to = %event.to, extra = event.extra.len(), "loaded event");
    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::io::Write;

    #[test]
    fn reads_event_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"from":"2021-03-05T08:00:00","to":"2021-03-05T10:00:00","location":"B001","acronym":"COMP"}}"#
        )
        .unwrap();

        let event = read_event(file.path()).unwrap();
        assert_eq!(event.location, "B001");
        assert_eq!(event.extra["acronym"], "COMP");
    }

    #[test]
    fn missing_dates_are_rejected() {
        let err = parse_event(r#"{"location":"B001"}"#).unwrap_err();
        assert!(matches!(err, CliError::Event(_)));
    }

    #[test]
    fn missing_location_is_rejected() {
        let err = parse_event(r#"{"from":"2021-03-05T08:00:00","to":"2021-03-05T10:00:00"}"#)
            .unwrap_err();
        assert!(matches!(err, CliError::Event(_)));
        assert!(err.to_string().contains("location"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_event(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
