//! Command handlers.
//!
//! Each handler returns the exit status of a finished run. Errors propagate
//! to `main`, which reports them and exits with status 2.

pub mod check;
pub mod init;
pub mod optional;
pub mod parse;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use shapesync::config::{Config, LoadedConfig};

use crate::cli::ColorWhen;
use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::WarningEvent;

pub use check::cmd_check;
pub use init::cmd_init;
pub use optional::cmd_optional;
pub use parse::cmd_parse;

/// Exit status when the check found drift
pub const EXIT_DRIFT: u8 = 1;
/// Exit status for fatal errors
pub const EXIT_FATAL: u8 = 2;

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    pub json: bool,
    pub verbose: u8,
    pub color: Option<ColorWhen>,
    pub config: Option<PathBuf>,
}

/// Resolved configuration and output settings for one run
pub struct Session {
    pub config: Config,
    pub config_path: Option<PathBuf>,
    /// Directory configured pair paths are relative to
    pub root: PathBuf,
    pub ui: UiContext,
}

pub fn load_session(global: &GlobalArgs, command: &str) -> Result<Session> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let LoadedConfig {
        config,
        warnings,
        path,
    } = Config::discover(global.config.as_deref(), &cwd)?;

    let ui = UiContext::new(global.json, global.verbose, global.color, &config);

    if !warnings.is_empty() {
        if ui.json {
            for warning in &warnings {
                let _ = emit_event(&WarningEvent::from_config(command, warning));
            }
        } else {
            eprint!(
                "{}",
                WarningBlock::config_warnings(&warnings).render(ui.color, ui.unicode)
            );
        }
    }

    let root = config_root(path.as_deref(), &cwd);
    Ok(Session {
        config,
        config_path: path,
        root,
        ui,
    })
}

/// Append `paths` to `into`, skipping ones already present
pub(crate) fn extend_unique(into: &mut Vec<PathBuf>, paths: impl IntoIterator<Item = PathBuf>) {
    for path in paths {
        if !into.contains(&path) {
            into.push(path);
        }
    }
}

/// Pair paths are relative to the config file's directory
fn config_root(config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(dir) if !dir.as_os_str().is_empty() => cwd.join(dir),
        _ => cwd.to_path_buf(),
    }
}
