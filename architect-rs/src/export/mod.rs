//! Text artifacts generated from the analysis:
//! - Mermaid connection maps for a single note
//! - The vault-wide analytics dashboard

mod dashboard;
mod mermaid;

pub use dashboard::{compose, DASHBOARD_FILE_NAME, EMPTY_LISTING};
pub use mermaid::{fenced, render_mermaid};
