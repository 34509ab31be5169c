//! Vault-wide tier and breakthrough tallies.

use crate::analysis::tier::Tier;
use crate::metadata::DocumentMetadata;
use crate::settings::Settings;
use serde::Serialize;
use tracing::{debug, trace};

/// Counts gathered over every note with frontmatter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateCounts {
    pub tier1_count: usize,
    pub tier2_count: usize,
    pub tier3_count: usize,
    pub breakthrough_count: usize,
    /// Level-2 note names in scan order.
    pub tier2_members: Vec<String>,
    /// Level-3 note names in scan order.
    pub tier3_members: Vec<String>,
    /// Notes that had frontmatter and were therefore considered.
    pub analyzed: usize,
}

impl AggregateCounts {
    /// Notes per level-2 note, with the divisor clamped to at least one.
    pub fn signal_noise_ratio(&self) -> f64 {
        self.tier1_count as f64 / self.tier2_count.max(1) as f64
    }
}

/// Tally tiers and breakthroughs across a collection.
///
/// Notes without frontmatter are skipped. Only the three canonical tiers are
/// counted: a note with a custom `type` contributes to `analyzed` and may
/// still be a breakthrough, but lands in no tier bucket.
pub fn aggregate<'a, D, I>(docs: I, settings: &Settings) -> AggregateCounts
where
    D: DocumentMetadata + ?Sized + 'a,
    I: IntoIterator<Item = &'a D>,
{
    let mut counts = AggregateCounts::default();

    for doc in docs {
        if doc.frontmatter().is_none() {
            trace!(note = doc.name(), "no frontmatter, skipped");
            continue;
        }
        counts.analyzed += 1;

        match Tier::classify(doc.type_field().as_deref()) {
            Tier::Level1 => counts.tier1_count += 1,
            Tier::Level2 => {
                counts.tier2_count += 1;
                counts.tier2_members.push(doc.name().to_string());
            }
            Tier::Level3 => {
                counts.tier3_count += 1;
                counts.tier3_members.push(doc.name().to_string());
            }
            Tier::Custom(_) => {}
        }

        if doc.has_tag(&settings.breakthrough_tag) || doc.flag(&settings.breakthrough_field) {
            counts.breakthrough_count += 1;
        }
    }

    debug!(
        analyzed = counts.analyzed,
        tier1 = counts.tier1_count,
        tier2 = counts.tier2_count,
        tier3 = counts.tier3_count,
        breakthroughs = counts.breakthrough_count,
        "aggregated vault"
    );
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::NoteSnapshot;
    use crate::note::Note;

    fn snap(name: &str, content: &str) -> NoteSnapshot {
        NoteSnapshot::from_note(&Note::new(format!("{}.md", name), content))
    }

    #[test]
    fn test_counts_and_members() {
        let docs = vec![
            snap("A", "---\ntype: atom\n---\n"),
            snap("B", "---\ntitle: untyped\n---\n"),
            snap("C", "---\ntype: Pattern\n---\n"),
            snap("D", "---\ntype: molecule\n---\n"),
            snap("E", "---\ntype: constant\n---\n"),
            snap("F", "no frontmatter"),
            snap("G", "---\ntype: Hypothesis\n---\n"),
        ];
        let counts = aggregate(&docs, &Settings::default());

        assert_eq!(counts.tier1_count, 2);
        assert_eq!(counts.tier2_count, 2);
        assert_eq!(counts.tier3_count, 1);
        assert_eq!(counts.tier2_members, vec!["C", "D"]);
        assert_eq!(counts.tier3_members, vec!["E"]);
        assert_eq!(counts.analyzed, 6);
        assert!(counts.tier1_count + counts.tier2_count + counts.tier3_count <= counts.analyzed);
    }

    #[test]
    fn test_breakthrough_tag_or_flag_counted_once() {
        let docs = vec![
            snap("Tagged", "---\ntags: [breakthrough]\n---\n"),
            snap("Flagged", "---\nbreakthrough: true\n---\n"),
            snap("Both", "---\nbreakthrough: true\n---\n#breakthrough"),
            snap("False", "---\nbreakthrough: false\n---\n"),
            snap("NoFm", "#breakthrough"),
        ];
        let counts = aggregate(&docs, &Settings::default());
        assert_eq!(counts.breakthrough_count, 3);
    }

    #[test]
    fn test_custom_breakthrough_settings() {
        let mut settings = Settings::default();
        settings.set("breakthroughTag", "eureka").unwrap();
        settings.set("breakthroughField", "milestone").unwrap();
        let docs = vec![
            snap("A", "---\ntags: eureka\n---\n"),
            snap("B", "---\nmilestone: true\n---\n"),
            snap("C", "---\nbreakthrough: true\n---\n"),
        ];
        assert_eq!(aggregate(&docs, &settings).breakthrough_count, 2);
    }

    #[test]
    fn test_empty_collection() {
        let docs: Vec<NoteSnapshot> = Vec::new();
        assert_eq!(aggregate(&docs, &Settings::default()), AggregateCounts::default());
    }

    #[test]
    fn test_signal_noise_ratio() {
        let counts = AggregateCounts {
            tier1_count: 11,
            ..Default::default()
        };
        assert_eq!(counts.signal_noise_ratio(), 11.0);
    }
}
