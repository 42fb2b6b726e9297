use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for forkfleet operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Target repository name cannot be used as a repository or directory name.
    #[error("Invalid target name '{0}': must be non-empty and must not contain path separators")]
    InvalidTargetName(String),

    /// External CLI (gh or git) could not be spawned or exited non-zero.
    #[error("{tool} error running '{command}': {details}")]
    ExternalToolError { tool: String, command: String, details: String },

    /// An allow-listed file is not valid UTF-8.
    #[error("Failed to decode '{}' as UTF-8", path.display())]
    DecodeError { path: PathBuf },

    /// Directory traversal of a working copy failed.
    #[error("Failed to walk working copy: {0}")]
    WalkError(String),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub(crate) fn external<T, C, D>(tool: T, command: C, details: D) -> Self
    where
        T: Into<String>,
        C: Into<String>,
        D: Into<String>,
    {
        AppError::ExternalToolError {
            tool: tool.into(),
            command: command.into(),
            details: details.into(),
        }
    }
}
