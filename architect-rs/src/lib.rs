//! vault-architect: tier analytics and link maps for Obsidian-style vaults.
//!
//! # Overview
//!
//! Notes declare what kind of knowledge they hold through a frontmatter
//! `type` field. vault-architect reads those declarations and:
//! - classifies each note into one of three tiers (or a custom tier)
//! - renders a note's outgoing links as a Mermaid diagram
//! - tallies tiers and breakthroughs across the vault into a dashboard note
//!
//! # Example
//!
//! ```no_run
//! use vault_architect::{analysis, export, Settings, Vault};
//!
//! let vault = Vault::new("/path/to/vault").unwrap();
//! let settings = Settings::default();
//!
//! let snapshots = vault.snapshots(&[]).unwrap();
//! let counts = analysis::aggregate(&snapshots, &settings);
//! let report = export::compose(&counts, &settings.tier_labels, chrono::Local::now().naive_local());
//! println!("{}", report);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod metadata;
pub mod note;
pub mod parser;
pub mod report;
pub mod settings;
pub mod types;
pub mod vault;

// Re-export main types at crate root
pub use config::Config;
pub use error::{ArchitectError, Result};
pub use metadata::{DocumentMetadata, NoteSnapshot};
pub use note::Note;
pub use settings::{Settings, SettingsStore, TierLabels, TomlSettingsStore};
pub use types::*;
pub use vault::Vault;
