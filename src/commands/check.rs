//! Check command

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;

use shapesync::application::{CheckOptions, CheckUseCase, PairOutcome};

use super::{load_session, GlobalArgs, EXIT_DRIFT};
use crate::ui::ci::{discrepancy_annotation, is_github_actions};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DiscrepancyEvent, PairEvent};
use crate::ui::views::check::{render_check_header, render_check_summary, render_pair_report};

pub fn cmd_check(
    global: &GlobalArgs,
    backend: Vec<PathBuf>,
    frontend: Vec<PathBuf>,
    pairs: Vec<String>,
    backend_orphans: bool,
) -> Result<ExitCode> {
    let started = Instant::now();
    let session = load_session(global, "check")?;
    let ui = session.ui;

    let options = CheckOptions::new()
        .with_backend(backend)
        .with_frontend(frontend)
        .with_pairs(pairs)
        .with_backend_orphans(backend_orphans.then_some(true));
    let orphans = options
        .backend_orphans
        .unwrap_or(session.config.check.backend_orphans);
    let use_case = CheckUseCase::new(session.config, &session.root);

    if !ui.json {
        let planned = use_case.plan(&options)?;
        print!(
            "{}",
            render_check_header(
                session.config_path.as_deref(),
                planned.len(),
                orphans,
                ui.color,
                ui.unicode
            )
        );
    }

    let annotate = !ui.json && ui.caps.is_ci && is_github_actions();
    let result = use_case.execute_with_callback(&options, |outcome| {
        if ui.json {
            emit_pair_events(outcome);
        } else {
            print!(
                "{}",
                render_pair_report(outcome, ui.verbose, ui.color, ui.unicode)
            );
            if annotate {
                for d in outcome.report.discrepancies() {
                    println!("{}", discrepancy_annotation(&outcome.name, d));
                }
            }
        }
    })?;

    tracing::info!(
        pairs = result.pairs.len(),
        discrepancies = result.discrepancy_count(),
        "check finished"
    );

    if ui.json {
        let _ = emit_event(
            &CompleteEvent::new("check", result.is_success())
                .with_counts(result.types_checked(), result.discrepancy_count())
                .with_duration(started.elapsed().as_millis() as u64),
        );
    } else {
        print!("{}", render_check_summary(&result, ui.color, ui.unicode));
    }

    Ok(if result.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_DRIFT)
    })
}

fn emit_pair_events(outcome: &PairOutcome) {
    for d in outcome.report.discrepancies() {
        let _ = emit_event(&DiscrepancyEvent::new("check", &outcome.name, d));
    }
    let _ = emit_event(
        &PairEvent::new("check", &outcome.name)
            .with_counts(outcome.report.types_checked(), outcome.report.len()),
    );
}
