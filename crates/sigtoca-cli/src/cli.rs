//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sigtoca_core::{CalendarDate, CalendarService, RepeatRule, parse_compact_date};

/// sigtoca - Export captured timetable events to your calendar
#[derive(Debug, Parser)]
#[command(name = "sigtoca")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "SIGTOCA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the Google and Outlook deep links for an event
    Links {
        /// Event JSON file (`-` for stdin)
        event: PathBuf,

        #[command(flatten)]
        repeat: RepeatArgs,

        /// Open the link for this service in the browser
        #[arg(long, value_parser = parse_service)]
        open: Option<CalendarService>,
    },

    /// Print the one-click element for an event
    OneClick {
        /// Event JSON file (`-` for stdin)
        event: PathBuf,

        /// Calendar service (google or outlook)
        #[arg(long, short, value_parser = parse_service)]
        service: CalendarService,

        #[command(flatten)]
        repeat: RepeatArgs,

        /// Print the rendered HTML instead of the click target
        #[arg(long)]
        html: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Recurrence flags shared by the link commands.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RepeatArgs {
    /// Recurrence frequency (e.g. WEEKLY)
    #[arg(long, requires = "repeat_until")]
    pub repeat_freq: Option<String>,

    /// Last day of the recurrence, as YYYYMMDD
    #[arg(long, value_parser = parse_until, requires = "repeat_freq")]
    pub repeat_until: Option<CalendarDate>,
}

impl RepeatArgs {
    /// Returns the recurrence rule when both flags are set.
    pub fn rule(&self) -> Option<RepeatRule> {
        match (&self.repeat_freq, self.repeat_until) {
            (Some(freq), Some(until)) => Some(RepeatRule::new(freq.to_uppercase(), until)),
            _ => None,
        }
    }
}

/// Configuration subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Dump current configuration
    Dump,
    /// Validate configuration
    Validate,
    /// Show configuration file path
    Path,
}

fn parse_service(s: &str) -> Result<CalendarService, String> {
    s.parse().map_err(|e: sigtoca_core::DomError| e.to_string())
}

fn parse_until(s: &str) -> Result<CalendarDate, String> {
    parse_compact_date(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_links_with_repeat() {
        let cli = Cli::try_parse_from([
            "sigtoca",
            "links",
            "event.json",
            "--repeat-freq",
            "weekly",
            "--repeat-until",
            "20210601",
        ])
        .unwrap();

        let Command::Links { event, repeat, open } = cli.command else {
            panic!("expected links command");
        };
        assert_eq!(event, PathBuf::from("event.json"));
        assert!(open.is_none());
        let rule = repeat.rule().unwrap();
        assert_eq!(rule.freq, "WEEKLY");
        assert_eq!(rule.until, parse_compact_date("20210601").unwrap());
    }

    #[test]
    fn repeat_flags_require_each_other() {
        let result = Cli::try_parse_from(["sigtoca", "links", "e.json", "--repeat-freq", "WEEKLY"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_malformed_until() {
        let result = Cli::try_parse_from([
            "sigtoca",
            "links",
            "e.json",
            "--repeat-freq",
            "WEEKLY",
            "--repeat-until",
            "2021-06-01",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_one_click() {
        let cli =
            Cli::try_parse_from(["sigtoca", "one-click", "-", "--service", "outlook", "--html"])
                .unwrap();
        let Command::OneClick {
            event,
            service,
            repeat,
            html,
        } = cli.command
        else {
            panic!("expected one-click command");
        };
        assert_eq!(event, PathBuf::from("-"));
        assert_eq!(service, CalendarService::Outlook);
        assert!(repeat.rule().is_none());
        assert!(html);
    }

    #[test]
    fn rejects_unknown_service() {
        let result = Cli::try_parse_from(["sigtoca", "one-click", "e.json", "--service", "yahoo"]);
        assert!(result.is_err());
    }

    #[test]
    fn parses_config_path() {
        let cli = Cli::try_parse_from(["sigtoca", "--debug", "config", "path"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(
            cli.command,
            Command::Config {
                action: ConfigAction::Path
            }
        ));
    }
}
