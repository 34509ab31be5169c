//! vault-architect CLI entry point.

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use vault_architect::cli::args::{Cli, Commands};
use vault_architect::cli::output::Output;
use vault_architect::cli::{dashboard, local_map, settings as settings_cmd};
use vault_architect::config::Config;
use vault_architect::error::{ArchitectError, ExitCode as ArchitectExitCode};
use vault_architect::settings::{SettingsStore, TomlSettingsStore};
use vault_architect::vault::Vault;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code.code() as u8),
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code().code() as u8)
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vault_architect={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ArchitectExitCode, ArchitectError> {
    let config = Config::load()?;
    let vault_path = config.resolve_vault_path(cli.vault.as_deref())?;
    let vault = Vault::new(vault_path)?;

    let store = match &cli.settings {
        Some(path) => TomlSettingsStore::new(path),
        None => TomlSettingsStore::for_vault(&vault.root),
    };

    let output = Output::new(cli.output_format(), cli.quiet);

    match &cli.command {
        Commands::LocalMap(args) => {
            let settings = store.load()?;
            local_map::run(&vault, &settings, args, &output)
        }
        Commands::Dashboard(args) => {
            let settings = store.load()?;
            let now = chrono::Local::now().naive_local();
            dashboard::run(&vault, &settings, args, now, &output)
        }
        Commands::Settings(args) => settings_cmd::run(&store, &args.command, &output),
    }
}
