//! Wikilink and embed parsing.

use crate::parser::code_block::{find_code_ranges, is_in_code};
use crate::types::Link;
use regex::Regex;
use std::sync::LazyLock;

// (!)? embed marker, target, optional #^block, optional #heading, optional |alias
static WIKILINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[\[([^\]\|#]+)(?:#\^([a-zA-Z0-9_-]+))?(?:#([^\]\|]+))?(?:\|([^\]]+))?\]\]")
        .unwrap()
});

/// Parse all wikilinks and embeds from content, in source order.
pub fn parse_all_links(content: &str) -> Vec<Link> {
    let code_ranges = find_code_ranges(content);

    WIKILINK
        .captures_iter(content)
        .filter_map(|cap| {
            let whole = cap.get(0)?;
            if is_in_code(whole.start(), &code_ranges) {
                return None;
            }
            let target = cap.get(2)?.as_str().trim();
            if target.is_empty() {
                return None;
            }
            Some(Link {
                target: target.to_string(),
                alias: cap.get(5).map(|m| m.as_str().trim().to_string()),
                heading: cap.get(4).map(|m| m.as_str().to_string()),
                block_id: cap.get(3).map(|m| m.as_str().to_string()),
                embed: cap.get(1).is_some_and(|m| !m.as_str().is_empty()),
                line: content[..whole.start()].matches('\n').count() + 1,
            })
        })
        .collect()
}

/// Parse wikilinks only (embeds are excluded).
pub fn parse_links(content: &str) -> Vec<Link> {
    parse_all_links(content)
        .into_iter()
        .filter(|link| !link.embed)
        .collect()
}
