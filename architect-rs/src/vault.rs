//! Vault representation: note enumeration, loading and report storage.

use crate::error::{ArchitectError, Result};
use crate::metadata::NoteSnapshot;
use crate::note::Note;
use crate::report::ReportStore;
use glob::glob;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// An Obsidian-style vault on disk.
#[derive(Debug, Clone)]
pub struct Vault {
    /// Root path of the vault.
    pub root: PathBuf,
}

impl Vault {
    /// Open a vault rooted at an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(ArchitectError::VaultNotFound(root));
        }
        Ok(Self { root })
    }

    /// Full path of a vault-relative path.
    pub fn full_path(&self, relative_path: &Path) -> PathBuf {
        self.root.join(relative_path)
    }

    /// Add the .md extension if missing.
    pub fn normalize_note_path(&self, path: &str) -> PathBuf {
        let path = path.trim();
        if path.ends_with(".md") {
            PathBuf::from(path)
        } else {
            PathBuf::from(format!("{}.md", path))
        }
    }

    pub fn note_exists(&self, relative_path: &Path) -> bool {
        self.full_path(relative_path).is_file()
    }

    /// Load a note from the vault.
    pub fn load_note(&self, relative_path: &Path) -> Result<Note> {
        if !self.note_exists(relative_path) {
            return Err(ArchitectError::NoteNotFound(relative_path.to_path_buf()));
        }
        Note::load(&self.root, relative_path)
    }

    /// Save a note to the vault.
    pub fn save_note(&self, note: &Note) -> Result<()> {
        note.save(&self.root)
    }

    /// List all markdown notes, sorted by path. Hidden files and folders are skipped.
    pub fn list_notes(&self) -> Result<Vec<PathBuf>> {
        let pattern = self.root.join("**/*.md");
        let mut notes = Vec::new();

        for entry in glob(&pattern.to_string_lossy())? {
            match entry {
                Ok(path) => {
                    let Ok(relative) = path.strip_prefix(&self.root) else {
                        continue;
                    };
                    let hidden = relative
                        .components()
                        .any(|c| c.as_os_str().to_string_lossy().starts_with('.'));
                    if !hidden && path.is_file() {
                        notes.push(relative.to_path_buf());
                    }
                }
                Err(e) => warn!(error = %e, "glob error"),
            }
        }

        notes.sort();
        Ok(notes)
    }

    /// Snapshot every note's metadata, in path order, skipping `exclude`.
    ///
    /// Notes that cannot be read (for example, not valid UTF-8) are logged
    /// and left out.
    pub fn snapshots(&self, exclude: &[PathBuf]) -> Result<Vec<NoteSnapshot>> {
        let mut snapshots = Vec::new();
        for path in self.list_notes()? {
            if exclude.contains(&path) {
                continue;
            }
            match self.load_note(&path) {
                Ok(note) => snapshots.push(NoteSnapshot::from_note(&note)),
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable note"),
            }
        }
        Ok(snapshots)
    }

    /// Resolve a note name, path or alias to a vault-relative path.
    ///
    /// Tries the exact path first, then a case-insensitive match on the file
    /// name, then frontmatter `aliases`.
    pub fn resolve_note(&self, query: &str) -> Result<PathBuf> {
        let normalized = self.normalize_note_path(query);
        if self.note_exists(&normalized) {
            return Ok(normalized);
        }

        let query_lower = query.trim().trim_end_matches(".md").to_lowercase();
        let mut matches = Vec::new();

        for note_path in self.list_notes()? {
            let name = note_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("");
            if name.to_lowercase() == query_lower {
                matches.push(note_path);
                continue;
            }

            let Ok(note) = self.load_note(&note_path) else {
                continue;
            };
            if let Ok(Some(fm)) = note.frontmatter() {
                let has_alias = fm
                    .get("aliases")
                    .and_then(|a| a.as_sequence())
                    .is_some_and(|aliases| {
                        aliases
                            .iter()
                            .filter_map(|a| a.as_str())
                            .any(|a| a.to_lowercase() == query_lower)
                    });
                if has_alias {
                    matches.push(note_path);
                }
            }
        }

        match matches.len() {
            0 => Err(ArchitectError::NoteNotFound(PathBuf::from(query))),
            1 => Ok(matches.remove(0)),
            count => Err(ArchitectError::AmbiguousResolution {
                query: query.to_string(),
                count,
                matches,
            }),
        }
    }
}

impl ReportStore for Vault {
    fn folder_exists(&self, folder: &Path) -> bool {
        self.full_path(folder).is_dir()
    }

    fn create_folder(&self, folder: &Path) -> Result<()> {
        std::fs::create_dir_all(self.full_path(folder))?;
        Ok(())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.full_path(path).is_file()
    }

    fn create_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(self.full_path(path), content)?;
        Ok(())
    }

    fn replace_file(&self, path: &Path, content: &str) -> Result<()> {
        std::fs::write(self.full_path(path), content)?;
        Ok(())
    }

    fn focus(&self, path: &Path) -> Result<()> {
        info!(path = %self.full_path(path).display(), "report ready");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::DocumentMetadata;
    use crate::report::write_report;
    use tempfile::TempDir;

    fn setup_test_vault() -> (TempDir, Vault) {
        let dir = TempDir::new().unwrap();
        let vault = Vault::new(dir.path()).unwrap();
        (dir, vault)
    }

    fn add(vault: &Vault, path: &str, content: &str) {
        vault.save_note(&Note::new(path, content)).unwrap();
    }

    #[test]
    fn test_missing_vault() {
        let result = Vault::new("/definitely/not/a/vault");
        assert!(matches!(result, Err(ArchitectError::VaultNotFound(_))));
    }

    #[test]
    fn test_list_notes_sorted_and_skips_hidden() {
        let (_dir, vault) = setup_test_vault();
        add(&vault, "b.md", "B");
        add(&vault, "a.md", "A");
        add(&vault, "sub/c.md", "C");
        add(&vault, ".obsidian/hidden.md", "H");
        std::fs::write(vault.root.join("image.png"), b"png").unwrap();

        let notes = vault.list_notes().unwrap();
        assert_eq!(
            notes,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b.md"),
                PathBuf::from("sub/c.md")
            ]
        );
    }

    #[test]
    fn test_snapshots_exclude() {
        let (_dir, vault) = setup_test_vault();
        add(&vault, "a.md", "---\ntype: law\n---\n");
        add(&vault, "Architect/report.md", "---\ntags: [dashboard]\n---\n");

        let snaps = vault.snapshots(&[PathBuf::from("Architect/report.md")]).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].name(), "a");
    }

    #[test]
    fn test_snapshots_skip_unreadable_notes() {
        let (_dir, vault) = setup_test_vault();
        add(&vault, "a.md", "---\ntype: law\n---\n");
        std::fs::write(vault.root.join("b.md"), b"\xff\xfe not utf-8").unwrap();

        let snaps = vault.snapshots(&[]).unwrap();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].name(), "a");
        assert_eq!(vault.resolve_note("A").unwrap(), PathBuf::from("a.md"));

        let err = vault.load_note(Path::new("b.md")).unwrap_err();
        assert!(matches!(err, ArchitectError::NoteRead { .. }));
        assert!(err.to_string().contains("b.md"));
    }

    #[test]
    fn test_resolve_note() {
        let (_dir, vault) = setup_test_vault();
        add(&vault, "concepts/Entropy.md", "Body");
        add(&vault, "actual-name.md", "---\naliases:\n  - myalias\n---\nContent");

        assert_eq!(vault.resolve_note("concepts/Entropy").unwrap(), PathBuf::from("concepts/Entropy.md"));
        assert_eq!(vault.resolve_note("entropy").unwrap(), PathBuf::from("concepts/Entropy.md"));
        assert_eq!(vault.resolve_note("MyAlias").unwrap(), PathBuf::from("actual-name.md"));
        assert!(matches!(
            vault.resolve_note("missing"),
            Err(ArchitectError::NoteNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_ambiguous() {
        let (_dir, vault) = setup_test_vault();
        add(&vault, "a/Same.md", "");
        add(&vault, "b/Same.md", "");
        assert!(matches!(
            vault.resolve_note("same"),
            Err(ArchitectError::AmbiguousResolution { count: 2, .. })
        ));
    }

    #[test]
    fn test_write_report_overwrites_on_disk() {
        let (_dir, vault) = setup_test_vault();
        let first = write_report(&vault, "Reports/Deep", "first version with more text").unwrap();
        assert!(!first.replaced);

        let second = write_report(&vault, "Reports/Deep", "second").unwrap();
        assert!(second.replaced);
        let on_disk = std::fs::read_to_string(vault.full_path(&second.path)).unwrap();
        assert_eq!(on_disk, "second");
    }
}
