//! Optional command - backend fields declared `blank=True` / `null=True`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use serde::Serialize;

use shapesync::application::{optional_fields, CheckOptions, CheckUseCase, OptionalField};
use shapesync::infrastructure::FileDeclarationSource;

use super::{extend_unique, load_session, GlobalArgs};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent};
use crate::ui::views::optional::render_optional_fields;

#[derive(Serialize)]
struct OptionalData<'a> {
    fields: &'a [OptionalField],
}

pub fn cmd_optional(global: &GlobalArgs, backend: Vec<PathBuf>) -> Result<ExitCode> {
    let session = load_session(global, "optional")?;
    let ui = session.ui;

    let backend = if backend.is_empty() {
        configured_backends(&CheckUseCase::new(session.config.clone(), &session.root))?
    } else {
        backend
    };

    let source = FileDeclarationSource::new(session.config.extract_options()).with_backend(backend);
    let fields = optional_fields(&source)?;

    if ui.json {
        let _ = emit_event(&DataEvent::new("optional", OptionalData { fields: &fields }));
        let _ = emit_event(&CompleteEvent::new("optional", true));
    } else {
        print!("{}", render_optional_fields(&fields, ui.color, ui.unicode));
    }

    Ok(ExitCode::SUCCESS)
}

/// Backend paths of every configured pair, first occurrence wins
fn configured_backends(use_case: &CheckUseCase) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pair in use_case.plan(&CheckOptions::new())? {
        extend_unique(&mut paths, pair.backend);
    }
    Ok(paths)
}
