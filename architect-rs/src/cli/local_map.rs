//! `local-map`: tier and connections of a single note.

use crate::analysis::scan;
use crate::cli::args::LocalMapArgs;
use crate::cli::output::Output;
use crate::error::{ExitCode, Result};
use crate::export::{fenced, render_mermaid};
use crate::metadata::{DocumentMetadata, NoteSnapshot};
use crate::settings::Settings;
use crate::types::OutgoingLink;
use crate::vault::Vault;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

/// Output for local-map.
#[derive(Debug, Serialize)]
pub struct LocalMapOutput {
    pub note: PathBuf,
    pub tier: String,
    /// False when the tier came from an unrecognized `type` value.
    pub canonical: bool,
    pub connections: Vec<OutgoingLink>,
    pub diagram: String,
    pub appended: bool,
}

/// Run the local-map command.
pub fn run(vault: &Vault, settings: &Settings, args: &LocalMapArgs, output: &Output) -> Result<ExitCode> {
    let Some(query) = args.note.as_deref() else {
        debug!("no note given, nothing to map");
        return Ok(ExitCode::Success);
    };

    let path = vault.resolve_note(query)?;
    let note = vault.load_note(&path)?;
    let snapshot = NoteSnapshot::from_note(&note);

    output.info(&format!("Scanning connections of {}...", snapshot.name()));
    let map = scan(&snapshot);
    output.info(&format!("Found {} connections.", map.outgoing.len()));

    let diagram = render_mermaid(&map, snapshot.name(), &settings.tier_labels);

    if args.append {
        vault.save_note(&note.append(&fenced(&diagram)))?;
        debug!(path = %path.display(), "diagram appended");
    }

    if args.diagram_only {
        output.print_raw(&diagram);
        return Ok(ExitCode::Success);
    }

    let result = LocalMapOutput {
        note: path,
        tier: map.tier.label(&settings.tier_labels).to_string(),
        canonical: map.tier.is_canonical(),
        connections: map.outgoing,
        diagram,
        appended: args.append,
    };
    output.print(&result)?;
    Ok(ExitCode::Success)
}
