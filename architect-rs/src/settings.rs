//! Per-vault settings and their persistence.

use crate::error::{ArchitectError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Settings file location relative to the vault root.
pub const DEFAULT_SETTINGS_PATH: &str = ".architect/settings.toml";

/// Display labels for the three canonical tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierLabels {
    pub level1: String,
    pub level2: String,
    pub level3: String,
}

impl Default for TierLabels {
    fn default() -> Self {
        Self {
            level1: "Atom".to_string(),
            level2: "Molecule".to_string(),
            level3: "Law".to_string(),
        }
    }
}

/// Vault analysis settings.
///
/// Every field is optional in the persisted record; missing fields take
/// their defaults, including individual labels inside `schema`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Vault-relative folder the dashboard is written to.
    #[serde(rename = "analysisFolder")]
    pub report_folder: String,

    /// Tag that marks a note as a breakthrough.
    #[serde(rename = "breakthroughTag")]
    pub breakthrough_tag: String,

    /// Boolean frontmatter field that marks a note as a breakthrough.
    #[serde(rename = "breakthroughField")]
    pub breakthrough_field: String,

    /// Kept last so the TOML table follows the plain values.
    #[serde(rename = "schema")]
    pub tier_labels: TierLabels,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            report_folder: "Architect".to_string(),
            tier_labels: TierLabels::default(),
            breakthrough_tag: "breakthrough".to_string(),
            breakthrough_field: "breakthrough".to_string(),
        }
    }
}

/// Keys accepted by [`Settings::set`].
pub const SETTING_KEYS: &[&str] = &[
    "analysisFolder",
    "schema.level1",
    "schema.level2",
    "schema.level3",
    "breakthroughTag",
    "breakthroughField",
];

impl Settings {
    /// Update one field by its persisted key.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        if value.is_empty() {
            return Err(ArchitectError::InvalidSettings(format!("{} must not be empty", key)));
        }

        match key {
            "analysisFolder" => self.report_folder = normalize_folder(value)?,
            "schema.level1" => self.tier_labels.level1 = value.to_string(),
            "schema.level2" => self.tier_labels.level2 = value.to_string(),
            "schema.level3" => self.tier_labels.level3 = value.to_string(),
            "breakthroughTag" => self.breakthrough_tag = value.trim_start_matches('#').to_string(),
            "breakthroughField" => self.breakthrough_field = value.to_string(),
            other => {
                return Err(ArchitectError::InvalidSettings(format!(
                    "unknown key '{}' (expected one of: {})",
                    other,
                    SETTING_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}

/// Reduce a report folder to plain vault-relative segments joined by `/`.
///
/// `.` segments and stray slashes are dropped. Absolute paths and `..`
/// segments are rejected: the folder must stay inside the vault.
pub fn normalize_folder(folder: &str) -> Result<String> {
    let mut segments = Vec::new();
    for component in Path::new(folder.trim()).components() {
        match component {
            Component::Normal(segment) => segments.push(segment.to_string_lossy().into_owned()),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(ArchitectError::InvalidSettings(format!(
                    "analysisFolder must be a path inside the vault, got '{}'",
                    folder
                )));
            }
        }
    }
    Ok(segments.join("/"))
}

/// Storage capability for settings.
pub trait SettingsStore {
    /// Load settings, falling back to defaults when nothing is stored.
    fn load(&self) -> Result<Settings>;

    /// Persist settings, replacing what was stored.
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// Settings persisted as a TOML file.
#[derive(Debug, Clone)]
pub struct TomlSettingsStore {
    path: PathBuf,
}

impl TomlSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store inside a vault.
    pub fn for_vault(vault_root: &Path) -> Self {
        Self::new(vault_root.join(DEFAULT_SETTINGS_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.is_file() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let mut settings: Settings = toml::from_str(&raw).map_err(|e| {
            ArchitectError::InvalidSettings(format!("{}: {}", self.path.display(), e))
        })?;
        let folder = normalize_folder(&settings.report_folder).map_err(|e| match e {
            ArchitectError::InvalidSettings(message) => {
                ArchitectError::InvalidSettings(format!("{}: {}", self.path.display(), message))
            }
            other => other,
        })?;
        settings.report_folder = folder;
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string_pretty(settings)?)?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }
}
