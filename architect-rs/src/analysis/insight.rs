//! Dashboard insight selection.
//!
//! Insights are an ordered list of rules. The first rule whose predicate
//! holds produces the insight; the last rule always holds, so exactly one
//! insight is chosen for any counts.

use crate::analysis::aggregate::AggregateCounts;
use crate::settings::TierLabels;
use serde::Serialize;

/// Ratio of level-1 to level-2 notes above which the vault is noisy.
pub const SIGNAL_NOISE_THRESHOLD: f64 = 10.0;

/// Level-2 count above which a vault without level-3 notes is ready to synthesize.
pub const BREAKTHROUGH_READY_THRESHOLD: usize = 5;

/// Severity of an insight; maps onto an Obsidian callout type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Warning,
    Tip,
    Success,
}

impl InsightKind {
    pub fn callout(self) -> &'static str {
        match self {
            InsightKind::Warning => "warning",
            InsightKind::Tip => "tip",
            InsightKind::Success => "success",
        }
    }
}

/// A rendered recommendation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    /// Name of the rule that produced this insight.
    pub rule: &'static str,
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

/// One entry of the insight policy.
pub struct InsightRule {
    pub name: &'static str,
    pub applies: fn(&AggregateCounts) -> bool,
    pub build: fn(&'static str, &AggregateCounts, &TierLabels) -> Insight,
}

/// The insight policy, evaluated first-match-wins.
pub static RULES: &[InsightRule] = &[
    InsightRule {
        name: "high-signal-noise",
        applies: is_noisy,
        build: signal_noise_warning,
    },
    InsightRule {
        name: "ready-for-breakthrough",
        applies: is_ready_for_breakthrough,
        build: breakthrough_tip,
    },
    InsightRule {
        name: HEALTHY_RULE,
        applies: always,
        build: healthy,
    },
];

const HEALTHY_RULE: &str = "healthy-architecture";

fn always(_: &AggregateCounts) -> bool {
    true
}

fn is_noisy(c: &AggregateCounts) -> bool {
    c.signal_noise_ratio() > SIGNAL_NOISE_THRESHOLD
}

fn is_ready_for_breakthrough(c: &AggregateCounts) -> bool {
    c.tier3_count == 0 && c.tier2_count > BREAKTHROUGH_READY_THRESHOLD
}

fn signal_noise_warning(rule: &'static str, c: &AggregateCounts, labels: &TierLabels) -> Insight {
    Insight {
        rule,
        kind: InsightKind::Warning,
        title: "High signal noise".to_string(),
        message: format!(
            "There are {:.1} {} notes for every {} note.",
            c.signal_noise_ratio(),
            labels.level1,
            labels.level2
        ),
        action: Some(
            "Group related raw notes and distill each cluster into a single connected note."
                .to_string(),
        ),
    }
}

fn breakthrough_tip(rule: &'static str, c: &AggregateCounts, labels: &TierLabels) -> Insight {
    Insight {
        rule,
        kind: InsightKind::Tip,
        title: "Ready for breakthrough".to_string(),
        message: format!(
            "{} {} notes and no {} note yet.",
            c.tier2_count, labels.level2, labels.level3
        ),
        action: Some(
            "Review your strongest patterns and write down the principle they share.".to_string(),
        ),
    }
}

fn healthy(rule: &'static str, _: &AggregateCounts, _: &TierLabels) -> Insight {
    Insight {
        rule,
        kind: InsightKind::Success,
        title: "Healthy architecture".to_string(),
        message: "Your knowledge base is well balanced across all tiers.".to_string(),
        action: None,
    }
}

/// Pick the insight for the given counts.
pub fn select_insight(counts: &AggregateCounts, labels: &TierLabels) -> Insight {
    select_with(RULES, counts, labels)
}

/// Evaluate an arbitrary rule list, first match wins. When nothing matches
/// the healthy insight is returned.
pub fn select_with(rules: &[InsightRule], counts: &AggregateCounts, labels: &TierLabels) -> Insight {
    match rules.iter().find(|r| (r.applies)(counts)) {
        Some(rule) => (rule.build)(rule.name, counts, labels),
        None => healthy(HEALTHY_RULE, counts, labels),
    }
}
