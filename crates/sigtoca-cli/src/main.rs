//! sigtoca CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use sigtoca_core::{TracingConfig, init_tracing};

use sigtoca_cli::cli::{Cli, Command, ConfigAction};
use sigtoca_cli::commands;
use sigtoca_cli::config::CliConfig;
use sigtoca_cli::error::CliResult;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let tracing = if cli.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    if let Err(e) = init_tracing(tracing) {
        eprintln!("warning: {}", e);
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path)?,
        None => CliConfig::load()?,
    };

    match cli.command {
        Command::Links {
            event,
            repeat,
            open,
        } => {
            let event = commands::read_event(&event)?;
            let extractor = config.templates.extractor();
            commands::links::run(
                &config.output.services,
                &extractor,
                &event,
                repeat.rule().as_ref(),
                open,
            )
        }
        Command::OneClick {
            event,
            service,
            repeat,
            html,
        } => {
            let event = commands::read_event(&event)?;
            let extractor = config.templates.extractor();
            commands::one_click::run(
                &config.one_click,
                &extractor,
                &event,
                service,
                repeat.rule().as_ref(),
                html,
            )
        }
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(cli.config.as_deref()),
        },
    }
}
