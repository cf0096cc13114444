//! CLI error types and exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | General error |
//! | 2 | Invalid configuration |
//! | 3 | Invalid input |
//! | 4 | I/O or serialization failure |

use std::path::PathBuf;

use life_engine::{LifeError, LifeErrorKind};
use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum CliExitCode {
    Success = 0,
    General = 1,
    InvalidConfiguration = 2,
    InvalidInput = 3,
    Io = 4,
}

impl CliExitCode {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Engine rejected configuration or input
    #[error(transparent)]
    Engine(#[from] LifeError),

    /// Failed to read or write a file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed JSON document
    #[error("Invalid JSON in {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// Bad command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CliError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(context: impl Into<String>, source: serde_json::Error) -> Self {
        CliError::Json {
            context: context.into(),
            source,
        }
    }

    pub fn exit_code(&self) -> CliExitCode {
        match self {
            CliError::Engine(err) => match err.kind() {
                LifeErrorKind::Configuration => CliExitCode::InvalidConfiguration,
                LifeErrorKind::Input => CliExitCode::InvalidInput,
                LifeErrorKind::Serialization => CliExitCode::Io,
                LifeErrorKind::Computation => CliExitCode::General,
            },
            CliError::Io { .. } | CliError::Json { .. } => CliExitCode::Io,
            CliError::InvalidArgument(_) => CliExitCode::InvalidInput,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
