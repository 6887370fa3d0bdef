//! Init command - write a commented `.shapesync.toml`
//!
//! Pairs come from the interactive prompt, or are imported from a legacy
//! `.ts-backend-check.yaml` when one sits next to the new file.

use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};
use serde::Serialize;

use shapesync::application::{render_config, write_config};
use shapesync::config::{Config, PairConfig, CONFIG_FILE, LEGACY_CONFIG_FILE};

use super::GlobalArgs;
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent};
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Serialize)]
struct InitData {
    path: String,
    pairs: usize,
}

pub fn cmd_init(global: &GlobalArgs, force: bool, interactive: bool) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let path = global
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let ui = UiContext::new(global.json, global.verbose, global.color, &Config::default());

    let pairs = if interactive && !ui.json && std::io::stdin().is_terminal() {
        prompt_pairs()?
    } else {
        legacy_pairs(&cwd)?
    };

    write_config(&path, &render_config(&pairs), force)?;

    if ui.json {
        let _ = emit_event(&DataEvent::new(
            "init",
            InitData {
                path: path.display().to_string(),
                pairs: pairs.len(),
            },
        ));
        let _ = emit_event(&CompleteEvent::new("init", true));
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} Wrote {}",
        Icon::Success.colored(ui.color, ui.unicode),
        ColoredText::plain(path.display().to_string())
            .bold()
            .render(ui.color)
    );
    if !pairs.is_empty() {
        println!("  {} pairs configured", pairs.len());
    }
    println!(
        "  {} {} run `shapesync check`",
        Icon::Arrow.colored(ui.color, ui.unicode),
        ColoredText::dim("Next:").render(ui.color)
    );

    Ok(ExitCode::SUCCESS)
}

fn legacy_pairs(cwd: &Path) -> Result<Vec<PairConfig>> {
    let legacy = cwd.join(LEGACY_CONFIG_FILE);
    if !legacy.is_file() {
        return Ok(Vec::new());
    }
    let loaded = Config::discover(Some(&legacy), cwd)?;
    tracing::info!(
        path = %legacy.display(),
        pairs = loaded.config.pairs.len(),
        "importing legacy pairs"
    );
    Ok(loaded.config.pairs)
}

fn prompt_pairs() -> Result<Vec<PairConfig>> {
    let mut pairs = Vec::new();
    loop {
        let name: String = Input::new()
            .with_prompt("Pair name")
            .default(format!("pair{}", pairs.len() + 1))
            .interact_text()?;
        let backend: String = Input::new()
            .with_prompt("Backend models file (e.g. backend/models.py)")
            .interact_text()?;
        let frontend: String = Input::new()
            .with_prompt("Frontend interfaces file (e.g. frontend/types.ts)")
            .interact_text()?;

        pairs.push(PairConfig {
            name,
            backend: vec![PathBuf::from(backend)],
            frontend: vec![PathBuf::from(frontend)],
        });

        if !Confirm::new()
            .with_prompt("Add another pair?")
            .default(false)
            .interact()?
        {
            return Ok(pairs);
        }
    }
}
