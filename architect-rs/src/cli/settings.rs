//! `settings`: inspect and edit vault settings.

use crate::cli::args::SettingsCommands;
use crate::cli::output::Output;
use crate::error::{ExitCode, Result};
use crate::settings::{Settings, SettingsStore};
use serde::Serialize;

/// Output for settings commands.
#[derive(Debug, Serialize)]
pub struct SettingsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<&'a str>,
    pub settings: &'a Settings,
}

/// Run a settings subcommand. `set` persists right after the edit.
pub fn run<S: SettingsStore + ?Sized>(
    store: &S,
    command: &SettingsCommands,
    output: &Output,
) -> Result<ExitCode> {
    let mut settings = store.load()?;

    let updated = match command {
        SettingsCommands::Show => None,
        SettingsCommands::Set { key, value } => {
            settings.set(key, value)?;
            store.save(&settings)?;
            Some(key.as_str())
        }
    };

    output.print(&SettingsOutput {
        updated,
        settings: &settings,
    })?;
    Ok(ExitCode::Success)
}
