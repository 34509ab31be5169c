//! `dashboard`: vault-wide analytics report.

use crate::analysis::{aggregate, select_insight, AggregateCounts, Insight};
use crate::cli::args::DashboardArgs;
use crate::cli::output::Output;
use crate::error::{ExitCode, Result};
use crate::export::compose;
use crate::report::{report_path, write_report};
use crate::settings::Settings;
use crate::vault::Vault;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::path::PathBuf;

/// Output for dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardOutput {
    pub path: PathBuf,
    pub replaced: bool,
    pub counts: AggregateCounts,
    pub insight: Insight,
}

/// Run the dashboard command.
///
/// The dashboard file itself is left out of the scan so regenerating it
/// does not change the counts.
pub fn run(
    vault: &Vault,
    settings: &Settings,
    args: &DashboardArgs,
    updated: NaiveDateTime,
    output: &Output,
) -> Result<ExitCode> {
    let target = report_path(&settings.report_folder)?;

    output.info("Analyzing vault...");
    let snapshots = vault.snapshots(std::slice::from_ref(&target))?;
    let counts = aggregate(&snapshots, settings);
    let content = compose(&counts, &settings.tier_labels, updated);

    if args.dry_run {
        output.print_raw(&content);
        return Ok(ExitCode::Success);
    }

    let outcome = write_report(vault, &settings.report_folder, &content)?;
    output.info(&format!("Dashboard written to {}", outcome.path.display()));

    let insight = select_insight(&counts, &settings.tier_labels);
    output.print(&DashboardOutput {
        path: outcome.path,
        replaced: outcome.replaced,
        counts,
        insight,
    })?;
    Ok(ExitCode::Success)
}
