//! Tool error handling
//!
//! Every library operation returns a `ToolResult`. The binaries wrap these
//! in `anyhow` at the top level.

use std::path::{Path, PathBuf};

/// Type alias for tool results
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors raised while walking trees or driving external tools
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {}: {message}", .root.display())]
    Walk { root: PathBuf, message: String },

    #[error("Failed to run {program}: {message}")]
    Spawn { program: String, message: String },

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to create worker pool: {message}")]
    ThreadPool { message: String },

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

/// Helper trait attaching a path to I/O failures
pub trait ErrorContext<T> {
    fn io_context(self, path: impl AsRef<Path>) -> ToolResult<T>
    where
        Self: Sized;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn io_context(self, path: impl AsRef<Path>) -> ToolResult<T> {
        self.map_err(|source| ToolError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Create a spawn error for an external program
pub fn spawn_error(program: &str, error: impl std::fmt::Display) -> ToolError {
    ToolError::Spawn {
        program: program.to_string(),
        message: error.to_string(),
    }
}
