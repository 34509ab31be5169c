//! Dashboard markdown composition.

use crate::analysis::{select_insight, AggregateCounts};
use crate::settings::TierLabels;
use chrono::NaiveDateTime;

/// File name of the generated dashboard.
pub const DASHBOARD_FILE_NAME: &str = "ARCHITECT_ANALYTICS_DASHBOARD.md";

/// Shown under a listing heading when it has no members.
pub const EMPTY_LISTING: &str = "_Nothing here yet._";

const CSS_CLASS: &str = "architect-dashboard";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Compose the dashboard document.
///
/// The result depends only on the arguments. Sections, in order: metadata
/// frontmatter, tier counters, velocity, level-3 listing, level-2 listing,
/// insight.
pub fn compose(counts: &AggregateCounts, labels: &TierLabels, updated: NaiveDateTime) -> String {
    let insight = select_insight(counts, labels);
    let mut out = String::new();

    out.push_str("---\n");
    out.push_str(&format!("cssclass: {}\n", CSS_CLASS));
    out.push_str("tags:\n  - architect\n  - dashboard\n");
    out.push_str(&format!("updated: {}\n", updated.format(TIMESTAMP_FORMAT)));
    out.push_str("---\n\n");

    out.push_str("# Architect Analytics Dashboard\n\n");

    out.push_str("> [!abstract] Knowledge Stack\n");
    for (label, count) in [
        (&labels.level1, counts.tier1_count),
        (&labels.level2, counts.tier2_count),
        (&labels.level3, counts.tier3_count),
    ] {
        out.push_str(&format!("> - **{}**: {}\n", label, count));
    }
    out.push('\n');

    out.push_str("## Velocity\n\n");
    out.push_str(&format!("> [!example] Breakthroughs\n> **{}** recorded\n\n", counts.breakthrough_count));

    push_listing(&mut out, &labels.level3, &counts.tier3_members);
    push_listing(&mut out, &labels.level2, &counts.tier2_members);

    out.push_str("## Insights\n\n");
    out.push_str(&format!("> [!{}] {}\n", insight.kind.callout(), insight.title));
    out.push_str(&format!("> {}\n", insight.message));
    if let Some(action) = &insight.action {
        out.push_str(&format!("> **Recommended action:** {}\n", action));
    }

    out
}

fn push_listing(out: &mut String, label: &str, members: &[String]) {
    out.push_str(&format!("## {} Notes\n\n", label));
    if members.is_empty() {
        out.push_str(EMPTY_LISTING);
        out.push('\n');
    } else {
        for name in members {
            out.push_str(&format!("- [[{}]]\n", name));
        }
    }
    out.push('\n');
}
