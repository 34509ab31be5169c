//! Mermaid flowchart rendering of a note's connection map.

use crate::analysis::{sanitize_identifier, ConnectionMap, Tier};
use crate::settings::TierLabels;

/// Identifier of the center node. Connection identifiers all start with
/// `Node`, so the two can never clash.
const CENTER_ID: &str = "Center";

/// Style for each canonical tier, from lightest to heaviest.
const TIER_STYLES: [(Tier, &str); 3] = [
    (Tier::Level1, "fill:#f5f5f5,stroke:#9e9e9e,stroke-width:1px"),
    (Tier::Level2, "fill:#e3f2fd,stroke:#1e88e5,stroke-width:2px"),
    (
        Tier::Level3,
        "fill:#fff3e0,stroke:#ef6c00,stroke-width:4px,font-weight:bold",
    ),
];

/// Render a connection map as a `graph TD` Mermaid diagram.
///
/// Output layout:
/// - three `classDef` lines, one per canonical tier;
/// - the center node, labelled with `center_label` and styled by its tier;
/// - one edge per outgoing link, in order.
///
/// Node labels are inserted verbatim. Identifiers are `Node<i>_<name>` with
/// the target reduced to ASCII alphanumerics, or plain `Node<i>` when nothing
/// is left, so they are unique within one diagram.
pub fn render_mermaid(map: &ConnectionMap, center_label: &str, labels: &TierLabels) -> String {
    let mut lines = vec!["graph TD".to_string()];

    let classes = canonical_classes(labels);
    for ((_, style), class) in TIER_STYLES.iter().zip(&classes) {
        lines.push(format!("    classDef {} {};", class, style));
    }

    let center_class = TIER_STYLES
        .iter()
        .position(|(tier, _)| *tier == map.tier)
        .and_then(|i| classes.get(i).cloned())
        .unwrap_or_else(|| map.tier.class_name(labels));
    lines.push(format!(
        "    {}[\"{}\"]:::{}",
        CENTER_ID, center_label, center_class
    ));

    for (index, link) in map.outgoing.iter().enumerate() {
        lines.push(format!(
            "    {} --> {}[\"{}\"]",
            CENTER_ID,
            node_id(index, &link.target),
            link.label()
        ));
    }

    let mut diagram = lines.join("\n");
    diagram.push('\n');
    diagram
}

/// Wrap a diagram in a fenced `mermaid` code block.
pub fn fenced(diagram: &str) -> String {
    format!("```mermaid\n{}```\n", diagram)
}

/// Class names for the canonical tiers, in `TIER_STYLES` order. A label whose
/// class is already taken falls back to `tier<n>`, then `tier<n>_<k>`.
fn canonical_classes(labels: &TierLabels) -> Vec<String> {
    let mut classes: Vec<String> = Vec::with_capacity(TIER_STYLES.len());
    for (n, (tier, _)) in TIER_STYLES.iter().enumerate() {
        let fallback = format!("tier{}", n + 1);
        let mut class = tier.class_name(labels);
        let mut attempt = 0;
        while classes.contains(&class) {
            attempt += 1;
            class = if attempt == 1 {
                fallback.clone()
            } else {
                format!("{}_{}", fallback, attempt)
            };
        }
        classes.push(class);
    }
    classes
}

fn node_id(index: usize, target: &str) -> String {
    let name = sanitize_identifier(target);
    if name.is_empty() {
        format!("Node{}", index)
    } else {
        format!("Node{}_{}", index, name)
    }
}
