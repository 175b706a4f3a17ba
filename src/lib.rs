//! Release packaging for the Base Converter application
//!
//! This library builds a single-file executable of the Python application
//! with PyInstaller for the host platform and generates:
//! - a platform-tagged executable under `dist/`
//! - an installer script (`.bat` on Windows, `.sh` on macOS and Linux)
//! - `PACKAGE_INFO.txt` release notes
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
