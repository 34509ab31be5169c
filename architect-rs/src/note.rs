//! Note representation.

use crate::error::{ArchitectError, Result};
use crate::parser::{self, parse_links, parse_tags, split_frontmatter};
use crate::types::{Link, Tag};
use serde_yaml::Value as YamlValue;
use std::path::{Path, PathBuf};

/// A markdown note loaded from the vault.
#[derive(Debug, Clone)]
pub struct Note {
    /// Path relative to vault root (e.g., "concepts/Entropy.md").
    pub path: PathBuf,

    /// Raw content of the note.
    pub content: String,
}

impl Note {
    /// Create a new note from path and content.
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    /// Load a note from disk.
    pub fn load(vault_root: &Path, relative_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(vault_root.join(relative_path)).map_err(|source| {
            ArchitectError::NoteRead {
                path: relative_path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::new(relative_path, content))
    }

    /// Save the note to disk, creating parent folders as needed.
    pub fn save(&self, vault_root: &Path) -> Result<()> {
        let full_path = vault_root.join(&self.path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&full_path, &self.content)?;
        Ok(())
    }

    /// The note name (filename without .md extension).
    pub fn name(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// Parse frontmatter as a YAML value.
    pub fn frontmatter(&self) -> Result<Option<YamlValue>> {
        parser::parse_frontmatter_with_path(&self.content, &self.path)
    }

    /// Content without frontmatter.
    pub fn body(&self) -> &str {
        split_frontmatter(&self.content).body
    }

    /// Outgoing wikilinks in source order (embeds excluded).
    pub fn links(&self) -> Vec<Link> {
        parse_links(self.body())
    }

    /// Inline tags in the body.
    pub fn tags(&self) -> Vec<Tag> {
        parse_tags(self.body())
    }

    /// Append content to the note, separated by a blank line.
    pub fn append(&self, content: &str) -> Self {
        let separator = if self.content.is_empty() || self.content.ends_with("\n\n") {
            ""
        } else if self.content.ends_with('\n') {
            "\n"
        } else {
            "\n\n"
        };
        Self::new(self.path.clone(), format!("{}{}{}", self.content, separator, content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        let note = Note::new("concepts/Entropy.md", "");
        assert_eq!(note.name(), "Entropy");
    }

    #[test]
    fn test_links_and_tags_ignore_frontmatter() {
        let note = Note::new(
            "a.md",
            "---\ntype: atom\nsource: \"[[Not A Link]]\"\n---\nSee [[B|bee]] #idea",
        );
        let links = note.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].target, "B");
        assert_eq!(note.tags()[0].name, "#idea");
    }

    #[test]
    fn test_append_adds_blank_line() {
        let note = Note::new("a.md", "Body");
        assert_eq!(note.append("More").content, "Body\n\nMore");

        let note = Note::new("a.md", "Body\n");
        assert_eq!(note.append("More").content, "Body\n\nMore");

        let note = Note::new("a.md", "");
        assert_eq!(note.append("More").content, "More");
    }
}
