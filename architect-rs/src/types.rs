//! Shared types for vault-architect.

use serde::{Deserialize, Serialize};

/// A wikilink or embed found in a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// The target note (without heading or block reference).
    pub target: String,

    /// Optional display alias (the part after |).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    /// Optional heading reference (the part after #, before ^).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,

    /// Optional block reference (the part after #^).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,

    /// Whether this is an embed (![[...]]) rather than a link.
    pub embed: bool,

    /// Line number where this link appears (1-indexed).
    pub line: usize,
}

/// A tag found in a note body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// The full tag including # (e.g., "#rust" or "#status/done").
    pub name: String,

    /// Line number where this tag appears (1-indexed).
    pub line: usize,
}

impl Tag {
    /// Returns the tag without the leading #.
    pub fn without_hash(&self) -> &str {
        self.name.strip_prefix('#').unwrap_or(&self.name)
    }
}

/// An outgoing link as seen by the analyzers: where it points and how it reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutgoingLink {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
}

impl OutgoingLink {
    pub fn new(target: impl Into<String>, display_text: Option<String>) -> Self {
        Self {
            target: target.into(),
            display_text,
        }
    }

    /// Display text, falling back to the target when absent or blank.
    pub fn label(&self) -> &str {
        match self.display_text.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => &self.target,
        }
    }
}

impl From<&Link> for OutgoingLink {
    fn from(link: &Link) -> Self {
        Self {
            target: link.target.clone(),
            display_text: link.alias.clone(),
        }
    }
}
