//! Error types for release packaging operations.
//!
//! Every step of the pipeline reports failures through [`Error`]. The
//! [`ErrorExt`] and [`Context`] extension traits attach the operation and path
//! that failed so the final message tells the user what to look at.

use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process::ExitStatus,
};

/// Result alias used throughout the bundler module.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while packaging a release.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Free-form error message.
    #[error("{0}")]
    GenericError(String),

    /// Bare I/O error without path information.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File system operation failed on a known path.
    #[error("{context} {}: {error}", path.display())]
    Fs {
        /// What was being done when the error occurred
        context: &'static str,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        error: std::io::Error,
    },

    /// An external command could not be started.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Command line that was attempted
        command: String,
        /// Spawn error
        #[source]
        error: std::io::Error,
    },

    /// The packaging tool ran but exited unsuccessfully.
    #[error("packaging tool exited with {status}\nError output:\n{stderr}")]
    PackagerFailed {
        /// Exit status reported by the packaging tool
        status: ExitStatus,
        /// Captured standard error
        stderr: String,
    },

    /// The packaging tool reported success but left no executable behind.
    #[error("packaging tool reported success but no executable was produced at {}", .0.display())]
    ArtifactMissing(PathBuf),

    /// The packaging tool is not installed and provisioning is disabled or failed.
    #[error("packaging tool unavailable: {0}")]
    PackagerUnavailable(String),

    /// Template registration or rendering failed.
    #[error("template error: {0}")]
    Template(String),

    /// Release archive creation failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// The release configuration file could not be read or parsed.
    #[error("invalid release configuration {}: {reason}", path.display())]
    Config {
        /// Configuration file path
        path: PathBuf,
        /// Parse or read failure
        reason: String,
    },

    /// An error wrapped with additional context.
    #[error("{context}: {source}")]
    Context {
        /// Description of the failed operation
        context: String,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },
}

impl From<handlebars::RenderError> for Error {
    fn from(e: handlebars::RenderError) -> Self {
        Error::Template(e.to_string())
    }
}

impl From<handlebars::TemplateError> for Error {
    fn from(e: handlebars::TemplateError) -> Self {
        Error::Template(e.to_string())
    }
}

/// Attaches file system context to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`] naming the operation and path.
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: &Path) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.to_path_buf(),
            error,
        })
    }
}

/// Adds a human readable context message to fallible values.
pub trait Context<T> {
    /// Wraps the failure with `context`.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::Context {
            context: context.to_string(),
            source: Box::new(e.into()),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Returns early with a [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fs_context_names_operation_and_path() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result
            .fs_context("removing directory", Path::new("dist"))
            .unwrap_err();
        let message = err.to_string();
        assert!(message.contains("removing directory dist"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn option_context_becomes_generic_error() {
        let err = None::<u8>.context("no executable name").unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m == "no executable name"));
    }

    #[test]
    fn result_context_wraps_source() {
        let inner: Result<()> = Err(Error::Archive("truncated".into()));
        let err = inner.context("creating release archive").unwrap_err();
        assert_eq!(
            err.to_string(),
            "creating release archive: archive error: truncated"
        );
    }
}
