//! Persisting the dashboard.

use crate::error::Result;
use crate::export::DASHBOARD_FILE_NAME;
use crate::settings::normalize_folder;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Storage operations needed to write a report. Paths are vault-relative.
pub trait ReportStore {
    fn folder_exists(&self, folder: &Path) -> bool;
    fn create_folder(&self, folder: &Path) -> Result<()>;
    fn file_exists(&self, path: &Path) -> bool;
    fn create_file(&self, path: &Path, content: &str) -> Result<()>;
    /// Replace the whole content of an existing file.
    fn replace_file(&self, path: &Path, content: &str) -> Result<()>;
    /// Bring the file to the user's attention.
    fn focus(&self, path: &Path) -> Result<()>;
}

/// Where a write landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub path: PathBuf,
    /// True when an existing file was overwritten.
    pub replaced: bool,
}

/// Dashboard path inside the report folder, in the same form `Vault::list_notes`
/// yields. Folders reaching outside the vault are rejected.
pub fn report_path(folder: &str) -> Result<PathBuf> {
    let folder = normalize_folder(folder)?;
    if folder.is_empty() {
        Ok(PathBuf::from(DASHBOARD_FILE_NAME))
    } else {
        Ok(Path::new(&folder).join(DASHBOARD_FILE_NAME))
    }
}

/// Write the dashboard into `folder`: create the folder if missing, replace
/// or create the file, then focus it. Any storage error aborts the sequence.
pub fn write_report<S: ReportStore + ?Sized>(store: &S, folder: &str, content: &str) -> Result<WriteOutcome> {
    let path = report_path(folder)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !store.folder_exists(parent) {
            debug!(folder = %parent.display(), "creating report folder");
            store.create_folder(parent)?;
        }
    }

    let replaced = store.file_exists(&path);
    if replaced {
        store.replace_file(&path, content)?;
    } else {
        store.create_file(&path, content)?;
    }
    info!(path = %path.display(), replaced, "dashboard written");

    store.focus(&path)?;
    Ok(WriteOutcome { path, replaced })
}
