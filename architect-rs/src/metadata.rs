//! Read-only document metadata consumed by the analyzers.
//!
//! The analyzers only ever look at four things: the frontmatter `type` field,
//! the tag set, and each outgoing link's target and display text.
//! [`DocumentMetadata`] exposes exactly those, so the analysis code does not
//! care whether the data came from a parsed file or somewhere else.
//! [`NoteSnapshot`] is the implementation backed by a note on disk.

use crate::note::Note;
use crate::parser::frontmatter_tags;
use crate::types::OutgoingLink;
use serde::Serialize;
use serde_yaml::Value as YamlValue;
use std::path::PathBuf;
use tracing::warn;

/// Read-only view of one document's cached metadata.
pub trait DocumentMetadata {
    /// Display name of the document (file name without extension).
    fn name(&self) -> &str;

    /// Parsed frontmatter, or `None` when the document has none.
    fn frontmatter(&self) -> Option<&YamlValue>;

    /// Outgoing links in source order.
    fn links(&self) -> &[OutgoingLink];

    /// Tags without the leading `#`.
    fn tags(&self) -> &[String];

    /// The frontmatter `type` field as text.
    ///
    /// Numbers and booleans are read through their string form; lists,
    /// mappings and null count as absent.
    fn type_field(&self) -> Option<String> {
        match self.frontmatter()?.get("type")? {
            YamlValue::String(s) => Some(s.clone()),
            YamlValue::Number(n) => Some(n.to_string()),
            YamlValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Case-insensitive tag membership. A leading `#` on `tag` is ignored.
    fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.trim_start_matches('#');
        self.tags().iter().any(|t| t.eq_ignore_ascii_case(wanted))
    }

    /// True only when the frontmatter field is the boolean `true`.
    fn flag(&self, field: &str) -> bool {
        self.frontmatter()
            .and_then(|fm| fm.get(field))
            .and_then(YamlValue::as_bool)
            .unwrap_or(false)
    }
}

/// Metadata snapshot of a note on disk.
#[derive(Debug, Clone, Serialize)]
pub struct NoteSnapshot {
    pub path: PathBuf,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<YamlValue>,
    pub links: Vec<OutgoingLink>,
    pub tags: Vec<String>,
}

impl NoteSnapshot {
    /// Build a snapshot from a loaded note.
    ///
    /// Malformed frontmatter is logged and treated as absent.
    pub fn from_note(note: &Note) -> Self {
        let frontmatter = match note.frontmatter() {
            Ok(fm) => fm,
            Err(e) => {
                warn!(path = %note.path.display(), error = %e, "ignoring malformed frontmatter");
                None
            }
        };

        let mut tags: Vec<String> = Vec::new();
        let declared = frontmatter.as_ref().map(frontmatter_tags).unwrap_or_default();
        let inline = note.tags().into_iter().map(|t| t.without_hash().to_string());
        for tag in declared.into_iter().chain(inline) {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(&tag)) {
                tags.push(tag);
            }
        }

        Self {
            path: note.path.clone(),
            name: note.name().to_string(),
            frontmatter,
            links: note.links().iter().map(OutgoingLink::from).collect(),
            tags,
        }
    }
}

impl DocumentMetadata for NoteSnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn frontmatter(&self) -> Option<&YamlValue> {
        self.frontmatter.as_ref()
    }

    fn links(&self) -> &[OutgoingLink] {
        &self.links
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }
}
