//! Parsers for Obsidian markdown syntax.

pub mod code_block;
pub mod frontmatter;
pub mod tag;
pub mod wikilink;

pub use code_block::{find_code_ranges, is_in_code};
pub use frontmatter::{parse_frontmatter_with_path, split_frontmatter};
pub use tag::{frontmatter_tags, parse_tags};
pub use wikilink::{parse_all_links, parse_links};
