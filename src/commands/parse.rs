//! Parse command - show extracted and flattened declarations

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use shapesync::application::{parse_side, CheckOptions, CheckUseCase};
use shapesync::domain::value_objects::Side;
use shapesync::infrastructure::FileDeclarationSource;

use super::{extend_unique, load_session, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent};
use crate::ui::views::parse::render_parsed_side;

pub fn cmd_parse(
    global: &GlobalArgs,
    backend: Vec<PathBuf>,
    frontend: Vec<PathBuf>,
) -> Result<ExitCode> {
    let session = load_session(global, "parse")?;
    let ui = session.ui;

    let (backend, frontend) = if backend.is_empty() && frontend.is_empty() {
        let use_case = CheckUseCase::new(session.config.clone(), &session.root);
        let mut backend = Vec::new();
        let mut frontend = Vec::new();
        for pair in use_case.plan(&CheckOptions::new())? {
            extend_unique(&mut backend, pair.backend);
            extend_unique(&mut frontend, pair.frontend);
        }
        (backend, frontend)
    } else {
        (backend, frontend)
    };

    let source = FileDeclarationSource::new(session.config.extract_options())
        .with_backend(backend)
        .with_frontend(frontend);

    let mut first = true;
    for side in [Side::Frontend, Side::Backend] {
        if source.paths(side).is_empty() {
            continue;
        }
        let parsed = parse_side(&source, side)?;
        if ui.json {
            let _ = emit_event(&DataEvent::new("parse", &parsed));
        } else {
            if !first {
                println!();
            }
            print!("{}", render_parsed_side(&parsed, ui.color, ui.unicode));
        }
        first = false;
    }

    if ui.json {
        let _ = emit_event(&CompleteEvent::new("parse", true));
    }

    Ok(ExitCode::SUCCESS)
}
