//! YAML frontmatter parsing.

use crate::error::{ArchitectError, Result};
use serde_yaml::Value;
use std::path::Path;

/// Frontmatter extraction result.
#[derive(Debug, Clone)]
pub struct FrontmatterSplit<'a> {
    /// The raw YAML string (without delimiters).
    pub yaml: Option<&'a str>,
    /// The content after the frontmatter.
    pub body: &'a str,
}

/// Split content into frontmatter and body.
///
/// Frontmatter must open with `---` on the very first line and close with a
/// `---` line. Anything else is treated as a note without frontmatter.
pub fn split_frontmatter(content: &str) -> FrontmatterSplit<'_> {
    let no_frontmatter = FrontmatterSplit {
        yaml: None,
        body: content,
    };

    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return no_frontmatter;
    };
    let yaml_start = content.len() - rest.len();

    // An empty block closes immediately on the next line.
    if let Some(after) = rest.strip_prefix("---") {
        if after.is_empty() || after.starts_with('\n') || after.starts_with("\r\n") {
            return FrontmatterSplit {
                yaml: Some(""),
                body: strip_leading_newline(after),
            };
        }
    }

    let closing = rest
        .find("\n---\n")
        .or_else(|| rest.find("\n---\r\n"))
        .or_else(|| rest.ends_with("\n---").then(|| rest.len() - 4));

    match closing {
        Some(pos) => {
            let yaml = &content[yaml_start..yaml_start + pos];
            let after = &rest[pos + 4..];
            FrontmatterSplit {
                yaml: Some(yaml.trim_end_matches('\r')),
                body: strip_leading_newline(after),
            }
        }
        None => no_frontmatter,
    }
}

fn strip_leading_newline(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

/// Parse frontmatter into a YAML value, with the note path for error context.
///
/// An empty frontmatter block parses to an empty mapping.
pub fn parse_frontmatter_with_path(content: &str, path: &Path) -> Result<Option<Value>> {
    let Some(yaml) = split_frontmatter(content).yaml else {
        return Ok(None);
    };
    if yaml.trim().is_empty() {
        return Ok(Some(Value::Mapping(Default::default())));
    }
    serde_yaml::from_str(yaml)
        .map(Some)
        .map_err(|e| ArchitectError::InvalidFrontmatter {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_no_frontmatter() {
        let split = split_frontmatter("Just some content");
        assert!(split.yaml.is_none());
        assert_eq!(split.body, "Just some content");
    }

    #[test]
    fn test_split_with_frontmatter() {
        let split = split_frontmatter("---\ntype: atom\ntags: [a, b]\n---\n\nContent here");
        assert_eq!(split.yaml, Some("type: atom\ntags: [a, b]"));
        assert_eq!(split.body, "\nContent here");
    }

    #[test]
    fn test_split_frontmatter_at_eof() {
        let split = split_frontmatter("---\ntype: law\n---");
        assert_eq!(split.yaml, Some("type: law"));
        assert_eq!(split.body, "");
    }

    #[test]
    fn test_split_empty_block() {
        let split = split_frontmatter("---\n---\nBody");
        assert_eq!(split.yaml, Some(""));
        assert_eq!(split.body, "Body");
    }

    #[test]
    fn test_no_closing_delimiter() {
        let split = split_frontmatter("---\ntype: atom\n\nContent without closing");
        assert!(split.yaml.is_none());
    }

    #[test]
    fn test_triple_dash_in_body() {
        let split = split_frontmatter("---\ntype: atom\n---\n\n---\n\nMore");
        assert_eq!(split.yaml, Some("type: atom"));
        assert!(split.body.contains("---"));
    }

    #[test]
    fn test_parse_with_path() {
        let value = parse_frontmatter_with_path("---\ntype: Molecule\n---\n", Path::new("a.md"))
            .unwrap()
            .unwrap();
        assert_eq!(value["type"].as_str(), Some("Molecule"));
    }

    #[test]
    fn test_parse_empty_block_is_empty_mapping() {
        let value = parse_frontmatter_with_path("---\n---\n", Path::new("a.md"))
            .unwrap()
            .unwrap();
        assert!(value.as_mapping().is_some_and(|m| m.is_empty()));
    }

    #[test]
    fn test_invalid_frontmatter_names_path() {
        let err = parse_frontmatter_with_path("---\ninvalid: yaml: syntax:\n---\n", Path::new("bad.md"))
            .unwrap_err();
        assert!(err.to_string().contains("bad.md"));
    }
}
