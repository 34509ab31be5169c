//! Tier classification from the frontmatter `type` field.

use crate::settings::TierLabels;
use serde::Serialize;

/// Classification bucket for a note.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Level1,
    Level2,
    Level3,
    /// Unrecognized `type` value, kept verbatim.
    Custom(String),
}

impl Tier {
    /// Classify a note by its `type` field.
    ///
    /// Comparison is case-insensitive. `atom`/`signal` map to level 1,
    /// `molecule`/`pattern` to level 2 and `law`/`constant` to level 3. A
    /// missing field defaults to level 1; any other value becomes a custom
    /// tier carrying the original text.
    pub fn classify(type_field: Option<&str>) -> Tier {
        let Some(raw) = type_field else {
            return Tier::Level1;
        };
        match raw.to_lowercase().as_str() {
            "law" | "constant" => Tier::Level3,
            "molecule" | "pattern" => Tier::Level2,
            "atom" | "signal" => Tier::Level1,
            _ => Tier::Custom(raw.to_string()),
        }
    }

    /// Whether this is one of the three configured tiers.
    pub fn is_canonical(&self) -> bool {
        !matches!(self, Tier::Custom(_))
    }

    /// Human-readable label under the given configuration.
    pub fn label<'a>(&'a self, labels: &'a TierLabels) -> &'a str {
        match self {
            Tier::Level1 => &labels.level1,
            Tier::Level2 => &labels.level2,
            Tier::Level3 => &labels.level3,
            Tier::Custom(name) => name,
        }
    }

    /// Style class name: the lower-cased label reduced to ASCII alphanumerics.
    ///
    /// Falls back to `tier1`..`tier3` (or `custom`) when nothing is left.
    pub fn class_name(&self, labels: &TierLabels) -> String {
        let class = sanitize_identifier(&self.label(labels).to_lowercase());
        if !class.is_empty() {
            return class;
        }
        match self {
            Tier::Level1 => "tier1".to_string(),
            Tier::Level2 => "tier2".to_string(),
            Tier::Level3 => "tier3".to_string(),
            Tier::Custom(_) => "custom".to_string(),
        }
    }
}

/// Strip everything that is not an ASCII letter or digit.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}
