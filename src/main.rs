//! shapesync CLI - contract drift checker
//!
//! Usage: shapesync [COMMAND]
//!
//! Commands:
//!   check     Report drift between frontend interfaces and backend models
//!   optional  List backend fields declared optional
//!   parse     Show extracted declarations
//!   init      Write a commented .shapesync.toml

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod logging;
mod ui;

use cli::{Cli, ColorWhen, Commands};
use commands::{GlobalArgs, EXIT_FATAL};
use shapesync::config::Config;
use ui::context::UiContext;
use ui::json::emit_event;
use ui::json::events::StartEvent;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let global = GlobalArgs {
        json: cli.json,
        verbose: cli.verbose,
        color: cli.color,
        config: cli.config.clone(),
    };

    let log_color = !matches!(cli.color, Some(ColorWhen::Never))
        && std::env::var_os("NO_COLOR").is_none();
    logging::init_logging(cli.verbose, log_color);

    let command = cli.command.unwrap_or(Commands::Check {
        backend: Vec::new(),
        frontend: Vec::new(),
        pairs: Vec::new(),
        backend_orphans: false,
    });
    let name = command_name(&command);

    if global.json {
        let _ = emit_event(&StartEvent::new(name));
    }

    let result = match command {
        Commands::Check {
            backend,
            frontend,
            pairs,
            backend_orphans,
        } => commands::cmd_check(&global, backend, frontend, pairs, backend_orphans),
        Commands::Optional { backend } => commands::cmd_optional(&global, backend),
        Commands::Parse { backend, frontend } => commands::cmd_parse(&global, backend, frontend),
        Commands::Init { force, interactive } => commands::cmd_init(&global, force, interactive),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            let ui = UiContext::new(global.json, global.verbose, global.color, &Config::default());
            ui::error::print_error(&err, &ui, name);
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Check { .. } => "check",
        Commands::Optional { .. } => "optional",
        Commands::Parse { .. } => "parse",
        Commands::Init { .. } => "init",
    }
}
