//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vault-architect")]
#[command(author, version, about = "Tier analytics and link maps for Obsidian-style vaults", long_about = None)]
pub struct Cli {
    /// Path to the vault (overrides config default)
    #[arg(long, global = true)]
    pub vault: Option<PathBuf>,

    /// Settings file (default: <vault>/.architect/settings.toml)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Output as JSON (default)
    #[arg(long, global = true, conflicts_with_all = ["yaml", "toml"])]
    pub json: bool,

    /// Output as YAML
    #[arg(long, global = true, conflicts_with_all = ["json", "toml"])]
    pub yaml: bool,

    /// Output as TOML
    #[arg(long, global = true, conflicts_with_all = ["json", "yaml"])]
    pub toml: bool,

    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output_format(&self) -> OutputFormat {
        if self.yaml {
            OutputFormat::Yaml
        } else if self.toml {
            OutputFormat::Toml
        } else {
            OutputFormat::Json
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Map a note's tier and outgoing links as a Mermaid diagram
    #[command(name = "local-map")]
    LocalMap(LocalMapArgs),

    /// Generate the vault-wide analytics dashboard
    Dashboard(DashboardArgs),

    /// Show or edit vault settings
    Settings(SettingsArgs),
}

// === Local map ===

#[derive(Parser, Debug)]
pub struct LocalMapArgs {
    /// Note path, name or alias. Without one, nothing happens.
    pub note: Option<String>,

    /// Print only the Mermaid diagram
    #[arg(long)]
    pub diagram_only: bool,

    /// Append the diagram to the note in a mermaid code block
    #[arg(long)]
    pub append: bool,
}

// === Dashboard ===

#[derive(Parser, Debug)]
pub struct DashboardArgs {
    /// Print the dashboard instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

// === Settings ===

#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommands,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommands {
    /// Print the effective settings
    Show,

    /// Set one field and save immediately
    Set {
        /// analysisFolder, schema.level1, schema.level2, schema.level3,
        /// breakthroughTag or breakthroughField
        key: String,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_local_map() {
        let cli = Cli::parse_from(["vault-architect", "--vault", "/v", "local-map", "Entropy", "--append"]);
        match cli.command {
            Commands::LocalMap(args) => {
                assert_eq!(args.note.as_deref(), Some("Entropy"));
                assert!(args.append);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_output_format_flags() {
        let cli = Cli::parse_from(["vault-architect", "dashboard", "--yaml"]);
        assert_eq!(cli.output_format(), OutputFormat::Yaml);
        let cli = Cli::parse_from(["vault-architect", "dashboard"]);
        assert_eq!(cli.output_format(), OutputFormat::Json);
    }
}
