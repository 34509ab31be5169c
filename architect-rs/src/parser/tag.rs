//! Tag parsing: inline `#tag` / `#tag/subtag` and the frontmatter `tags` field.

use crate::parser::code_block::{find_code_ranges, is_in_code};
use crate::types::Tag;
use regex::Regex;
use serde_yaml::Value;
use std::ops::Range;
use std::sync::LazyLock;

// No lookbehind in the regex crate: match the boundary char, validate the tail by hand.
// Tags start with a letter or underscore so "#123" is not a tag.
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\w&])#([a-zA-Z_][\w/-]*)").unwrap());

static WIKILINK_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[[^\]]*\]\]").unwrap());

/// Parse inline tags from markdown content.
pub fn parse_tags(content: &str) -> Vec<Tag> {
    let code_ranges = find_code_ranges(content);
    let link_ranges: Vec<Range<usize>> = WIKILINK_SPAN
        .find_iter(content)
        .map(|m| m.range())
        .collect();

    let mut tags = Vec::new();
    for cap in TAG.captures_iter(content) {
        let Some(name) = cap.get(1) else { continue };
        let start = name.start() - 1;

        if let Some(next) = content[name.end()..].chars().next() {
            if next.is_alphanumeric() || next == '_' || next == '/' {
                continue;
            }
        }
        if is_in_code(start, &code_ranges) || link_ranges.iter().any(|r| r.contains(&start)) {
            continue;
        }

        tags.push(Tag {
            name: format!("#{}", name.as_str()),
            line: content[..start].matches('\n').count() + 1,
        });
    }
    tags
}

/// Read tags declared in frontmatter under `tags` (or the singular `tag`).
///
/// Accepts a YAML list or a single string separated by commas and/or
/// whitespace. Leading `#` characters are stripped.
pub fn frontmatter_tags(frontmatter: &Value) -> Vec<String> {
    let field = frontmatter.get("tags").or_else(|| frontmatter.get("tag"));

    let raw: Vec<String> = match field {
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        Some(Value::String(s)) => s
            .split(|c: char| c == ',' || c.is_whitespace())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    raw.iter()
        .map(|t| t.trim().trim_start_matches('#').to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
