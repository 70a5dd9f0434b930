//! Error types for the migration pipeline.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while migrating a source tree.
///
/// `Parse` and `Emit` are file-scoped: the pipeline logs them and moves on
/// to the next file. `Io` is fatal to the run (it only arises when reading
/// the tree root or writing a rewritten file / report artifact).
#[derive(Error, Debug, Diagnostic)]
pub enum MigrateError {
    /// Input text does not conform to the expected TypeScript/JSX grammar
    #[error("Failed to parse {}: {message}", path.display())]
    #[diagnostic(code(nextshift::parse_failed))]
    Parse { path: PathBuf, message: String },

    /// Regenerating source text from the collected edits failed
    #[error("Failed to regenerate {}: {reason}", path.display())]
    #[diagnostic(code(nextshift::emit_failed))]
    Emit { path: PathBuf, reason: String },

    /// File system failure while reading or writing
    #[error("I/O error on {}: {source}", path.display())]
    #[diagnostic(code(nextshift::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MigrateError {
    /// Create a Parse error
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create an Emit error
    pub fn emit(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Emit {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create an Io error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for migration operations
pub type Result<T> = std::result::Result<T, MigrateError>;
