//! Code span detection, so links and tags inside code are ignored.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

// Inline code: ``double`` (may contain single backticks) or `single`.
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"``(?:[^`]|`[^`])*``|`[^`\n]+`").unwrap());

/// Find the byte ranges covered by fenced code blocks and inline code.
///
/// Ranges are sorted by start offset and do not overlap. An unterminated
/// fence runs to the end of the content, which matches how Obsidian renders
/// it.
pub fn find_code_ranges(content: &str) -> Vec<Range<usize>> {
    let mut fenced = Vec::new();
    let mut open: Option<(usize, char, usize)> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let trimmed = line.trim_end();
        match open {
            None => {
                if let Some((fence_char, fence_len)) = fence_of(trimmed) {
                    open = Some((offset, fence_char, fence_len));
                }
            }
            Some((start, fence_char, fence_len)) => {
                let closes = trimmed.len() >= fence_len
                    && !trimmed.is_empty()
                    && trimmed.chars().all(|c| c == fence_char);
                if closes {
                    fenced.push(start..offset + trimmed.len());
                    open = None;
                }
            }
        }
        offset += line.len();
    }
    if let Some((start, _, _)) = open {
        fenced.push(start..content.len());
    }

    let mut ranges = fenced.clone();
    for m in INLINE_CODE.find_iter(content) {
        let inside_fence = fenced
            .iter()
            .any(|r| m.start() < r.end && m.end() > r.start);
        if !inside_fence {
            ranges.push(m.range());
        }
    }

    ranges.sort_by_key(|r| r.start);
    ranges
}

/// Check if a byte offset falls inside any code range.
pub fn is_in_code(offset: usize, ranges: &[Range<usize>]) -> bool {
    ranges.iter().any(|r| r.contains(&offset))
}

/// Returns the fence character and run length if the line opens a fence.
fn fence_of(line: &str) -> Option<(char, usize)> {
    let first = line.chars().next()?;
    if first != '`' && first != '~' {
        return None;
    }
    let run = line.chars().take_while(|&c| c == first).count();
    (run >= 3).then_some((first, run))
}
