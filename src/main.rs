//! Stencil CLI - template relationship resolution for scaffolding catalogs
//!
//! Usage: stencil [OPTIONS] <COMMAND>
//!
//! Commands:
//!   list      Templates compatible with a context
//!   resolve   Resolved dependency/requirement/exclusion tree
//!   layout    Layout entries of compatible project templates
//!   licenses  Licenses of a template and its dependency closure
//!   check     Resolve everything and report catalog problems

mod commands;
mod ui;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use stencil::config::Config;
use stencil::presentation::factory::{create_engine, with_strict};
use stencil::presentation::{Cli, Commands};

use crate::ui::terminal::UiContext;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}

/// `STENCIL_LOG` wins over `-v`; logs always go to stderr.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env("STENCIL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("stencil={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let project_root = std::env::current_dir()?;
    let (config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(Some(&project_root))?,
    };
    for warning in warnings {
        tracing::warn!("{}", warning);
    }

    let mut config = with_strict(config, cli.strict);
    let context = cli.command.context();
    if let Some(catalog) = &context.catalog {
        config.catalog.path = Some(catalog.clone());
    }
    if let Some(language) = &context.language {
        config.catalog.language = Some(language.clone());
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = load_config(&cli)?;
    let ui = UiContext::new(cli.json, cli.color);
    let ctx = cli.command.context().to_context();
    let engine = create_engine(&config, &std::env::current_dir()?)?;
    tracing::debug!(command = cli.command.name(), context = %ctx, "running command");

    let clean = match &cli.command {
        Commands::List { kind, .. } => commands::list::cmd_list(&engine, &ctx, *kind, &ui).map(|_| true),
        Commands::Resolve { identity, .. } => {
            commands::resolve::cmd_resolve(&engine, &ctx, identity, &ui).map(|_| true)
        }
        Commands::Layout { .. } => commands::layout::cmd_layout(&engine, &ctx, &ui).map(|_| true),
        Commands::Licenses { identity, .. } => {
            commands::licenses::cmd_licenses(&engine, &ctx, identity, &ui).map(|_| true)
        }
        Commands::Check { kind, .. } => commands::check::cmd_check(&engine, &ctx, *kind, &ui),
    };

    // Flushes background diagnostic sinks before the exit code is reported
    drop(engine);

    Ok(if clean? {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
