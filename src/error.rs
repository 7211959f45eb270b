//! Error types for the release builder
//!
//! Every variant is fatal to the run: the builder stops at the first one.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the release builder
#[derive(Error, Debug)]
pub enum BuilderError {
    /// A module directory has no build descriptor
    #[error("Failed to find file: {}", .path.display())]
    MissingDescriptor { path: PathBuf },

    /// Building one module failed
    #[error("Error building {}.", .module.display())]
    Build {
        module: PathBuf,
        #[source]
        source: Box<BuilderError>,
    },

    /// Process execution errors
    #[error("Process error: {command} failed{}", .exit_code.map(|c| format!(" with exit code {c}")).unwrap_or_default())]
    Process {
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BuilderError {
    /// Create a new missing descriptor error
    pub fn missing_descriptor<P: Into<PathBuf>>(path: P) -> Self {
        Self::MissingDescriptor { path: path.into() }
    }

    /// Wrap a failure that happened while building `module`
    pub fn build<P: Into<PathBuf>>(module: P, source: Self) -> Self {
        Self::Build {
            module: module.into(),
            source: Box::new(source),
        }
    }

    /// Create a new process error for a command that ran and exited unsuccessfully
    pub fn process(command: impl Into<String>, exit_code: Option<i32>) -> Self {
        Self::Process {
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    /// Create a new process error for a command that could not be spawned
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Process {
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, BuilderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_descriptor_names_path() {
        let err = BuilderError::missing_descriptor("/repo/src/azdos-cli/setup.py");
        assert_eq!(err.to_string(), "Failed to find file: /repo/src/azdos-cli/setup.py");
    }

    #[test]
    fn test_build_error_keeps_process_source() {
        let err = BuilderError::build(
            "/repo/src/azdos-cli",
            BuilderError::process("python setup.py bdist_wheel -d /tmp/out", Some(2)),
        );
        assert_eq!(err.to_string(), "Error building /repo/src/azdos-cli.");

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(
            source.to_string(),
            "Process error: python setup.py bdist_wheel -d /tmp/out failed with exit code 2"
        );
    }

    #[test]
    fn test_spawn_error_surfaces_io_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = BuilderError::spawn("python", io);

        assert_eq!(err.to_string(), "Process error: python failed");
        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "no such file");
        assert!(matches!(err, BuilderError::Process { exit_code: None, .. }));
    }
}
