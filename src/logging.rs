//! Diagnostic logging on stderr.
//!
//! Stdout carries the report (or NDJSON with `--json`); tracing output always
//! goes to stderr. `RUST_LOG` takes precedence over `-v`.

use is_terminal::IsTerminal;

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter directive for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init_logging(verbose: u8, color: bool) {
    let directive = level_for(verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    let use_ansi = ansi_enabled(color, std::io::stderr().is_terminal());

    let subscriber = fmt::fmt()
        .with_env_filter(filter)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 3)
        .with_level(true)
        .without_time()
        .compact()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// ANSI escapes only when color is allowed and stderr is a terminal
fn ansi_enabled(color: bool, stderr_is_tty: bool) -> bool {
    color && stderr_is_tty
}
