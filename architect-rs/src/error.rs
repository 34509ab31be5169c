//! Error types and exit codes for vault-architect.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOTE_NOT_FOUND: i32 = 2;
    pub const AMBIGUOUS_RESOLUTION: i32 = 4;
    pub const INVALID_SETTINGS: i32 = 5;
}

/// Main error type for vault-architect operations.
#[derive(Error, Debug)]
pub enum ArchitectError {
    #[error("Note not found: {0}")]
    NoteNotFound(PathBuf),

    #[error("Ambiguous resolution: {count} notes match '{query}'")]
    AmbiguousResolution {
        query: String,
        count: usize,
        matches: Vec<PathBuf>,
    },

    #[error("Cannot read note {path}: {source}")]
    NoteRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid frontmatter in {path}: {message}")]
    InvalidFrontmatter { path: PathBuf, message: String },

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl ArchitectError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ArchitectError::NoteNotFound(_) => ExitCode::NoteNotFound,
            ArchitectError::AmbiguousResolution { .. } => ExitCode::AmbiguousResolution,
            ArchitectError::InvalidSettings(_) => ExitCode::InvalidSettings,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Result type alias for vault-architect operations.
pub type Result<T> = std::result::Result<T, ArchitectError>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    GeneralError,
    NoteNotFound,
    AmbiguousResolution,
    InvalidSettings,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::GeneralError => exit_code::GENERAL_ERROR,
            ExitCode::NoteNotFound => exit_code::NOTE_NOT_FOUND,
            ExitCode::AmbiguousResolution => exit_code::AMBIGUOUS_RESOLUTION,
            ExitCode::InvalidSettings => exit_code::INVALID_SETTINGS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = ArchitectError::NoteNotFound(PathBuf::from("x.md")).exit_code();
        assert_eq!(not_found, ExitCode::NoteNotFound);
        assert_eq!(not_found.code(), 2);
        let ambiguous = ArchitectError::AmbiguousResolution {
            query: "x".into(),
            count: 2,
            matches: vec![],
        };
        assert_eq!(ambiguous.exit_code().code(), 4);
        assert_eq!(ArchitectError::InvalidSettings("bad".into()).exit_code().code(), 5);
        assert_eq!(ArchitectError::ConfigError("bad".into()).exit_code().code(), 1);
        assert_eq!(ExitCode::Success.code(), 0);
    }
}
