//! File system utilities for release packaging.
//!
//! Idempotent directory removal, text file writing with a chosen line ending,
//! and executable permission handling.

use crate::bundler::error::{ErrorExt, Result};
use std::{io, path::Path};
use tokio::fs;

/// Output directories removed before every build.
pub const BUILD_DIRS: [&str; 3] = ["build", "dist", "__pycache__"];

/// Line ending convention for generated text files.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineEnding {
    /// `\n`, for POSIX shells and plain text
    Lf,
    /// `\r\n`, for Windows batch files
    CrLf,
}

impl LineEnding {
    /// Rewrites `\n`-terminated text to this convention.
    pub fn apply(self, text: &str) -> String {
        match self {
            LineEnding::Lf => text.to_string(),
            LineEnding::CrLf => text.replace("\r\n", "\n").replace('\n', "\r\n"),
        }
    }
}

/// Removes the directory and its contents if it exists.
///
/// Returns `true` when something was removed.
pub async fn remove_dir_all(path: &Path) -> Result<bool> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false), // Idempotent
        Err(e) => Err(e).fs_context("removing directory", path),
    }
}

/// Removes each named directory under `project_dir`.
///
/// Absent directories are skipped. Any other failure aborts immediately and
/// leaves earlier removals in place.
pub async fn clean_build_dirs(project_dir: &Path, names: &[&str]) -> Result<Vec<String>> {
    let mut cleaned = Vec::new();
    for name in names {
        let dir = project_dir.join(name);
        if remove_dir_all(&dir).await? {
            log::info!("Cleaned {} directory", name);
            cleaned.push((*name).to_string());
        }
    }
    Ok(cleaned)
}

/// Writes text to `path`, replacing any previous file.
///
/// Parent directories are created as needed.
pub async fn write_text(path: &Path, contents: &str, ending: LineEnding) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .fs_context("creating parent directory", parent)?;
    }
    fs::write(path, ending.apply(contents))
        .await
        .fs_context("writing file", path)
}

/// Marks a file as executable (0755). No-op on non-unix hosts.
pub async fn set_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
            .await
            .fs_context("setting executable permission", path)?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// Removes a file if it exists.
pub async fn remove_file(path: &Path) -> Result<bool> {
    match fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).fs_context("removing file", path),
    }
}
