//! Top-level error types.
//!
//! This module defines the errors surfaced by the command line, with
//! recovery suggestions for the common failure causes.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error;

        match self {
            BundlerError::Cli(CliError::InvalidArguments { .. }) => {
                vec!["Run with --help to see the accepted arguments".to_string()]
            }
            BundlerError::Bundler(Error::PackagerUnavailable(_)) => vec![
                "Install PyInstaller: python -m pip install pyinstaller".to_string(),
                "Or drop --no-provision to let the build install it".to_string(),
                "Use --python to point at a specific interpreter".to_string(),
            ],
            BundlerError::Bundler(Error::PackagerFailed { .. }) => vec![
                "Read the PyInstaller error output above".to_string(),
                "Check that the entry point and data globs in release.toml exist".to_string(),
            ],
            BundlerError::Bundler(Error::ArtifactMissing(_)) => vec![
                "PyInstaller wrote its output somewhere unexpected; check the spec file name"
                    .to_string(),
            ],
            BundlerError::Bundler(Error::Config { .. }) => {
                vec!["Fix or remove the release configuration file".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
