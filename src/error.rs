//! Error types for oc-release
//!
//! All modules use `ReleaseResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for release operations
pub type ReleaseResult<T> = Result<T, ReleaseError>;

/// All errors that can occur while resolving release metadata
#[derive(Error, Debug)]
pub enum ReleaseError {
    // Input errors
    #[error("neither releaseImage, nor releaseImageMirror are provided")]
    MissingReleaseImage,

    #[error("No pull secret provided")]
    PullSecretMissing,

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed to start: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' exited with non-zero exit code {code}: {stdout}\n{stderr}")]
    CommandExecution {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },

    // Parse errors
    #[error("Malformed version '{version}': {reason}")]
    VersionParse { version: String, reason: String },

    #[error("Failed to read release architecture: {0}")]
    ArchitectureParse(String),

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl ReleaseError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a version parse error
    pub fn version_parse(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::VersionParse {
            version: version.into(),
            reason: reason.into(),
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingReleaseImage => Some("Pass --release-image or --mirror"),
            Self::PullSecretMissing => {
                Some("Pass --pull-secret-file or set release.pull_secret_file in the config")
            }
            Self::CommandFailed { .. } => {
                Some("Install the oc CLI or point --oc-binary at it")
            }
            _ => None,
        }
    }
}
