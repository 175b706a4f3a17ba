//! Python and PyInstaller detection and provisioning.
//!
//! Finding the interpreter, probing whether PyInstaller is importable, and
//! installing it through pip when the caller allows it.

use crate::bundler::error::{Error, ErrorExt, Result};
use path_absolutize::Absolutize;
use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

/// Interpreter names tried in order when none is given.
pub const PYTHON_CANDIDATES: [&str; 2] = ["python3", "python"];

/// Locates a Python interpreter on PATH.
pub fn find_python() -> Result<PathBuf> {
    for candidate in PYTHON_CANDIDATES {
        match which::which(candidate) {
            Ok(path) => {
                log::debug!("Found {} at: {}", candidate, path.display());
                return Ok(path);
            }
            Err(e) => log::debug!("{} not found in PATH: {}", candidate, e),
        }
    }
    Err(Error::PackagerUnavailable(format!(
        "no Python interpreter found in PATH (tried {}); pass --python",
        PYTHON_CANDIDATES.join(", ")
    )))
}

/// Turns a user supplied interpreter into an absolute path.
///
/// A bare name such as `python3.12` is looked up on PATH; anything with a
/// directory part is resolved against the current directory. The result
/// stays valid when the packager later runs inside the project directory.
pub fn resolve_python(python: &Path) -> Result<PathBuf> {
    if !python.is_absolute() && python.components().count() == 1 {
        return which::which(python).map_err(|e| {
            Error::PackagerUnavailable(format!("{} not found in PATH: {}", python.display(), e))
        });
    }

    Ok(python
        .absolutize()
        .fs_context("resolving Python interpreter", python)?
        .into_owned())
}

/// Returns the installed PyInstaller version, or `None` if it cannot be imported.
pub async fn probe_pyinstaller(python: &Path) -> Option<String> {
    let output = tokio::process::Command::new(python)
        .args(["-c", "import PyInstaller; print(PyInstaller.__version__)"])
        .stdin(Stdio::null())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            Some(if version.is_empty() {
                "unknown".to_string()
            } else {
                version
            })
        }
        Ok(output) => {
            log::debug!(
                "PyInstaller import failed (exit code: {:?}): {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            None
        }
        Err(e) => {
            log::debug!("failed to execute {}: {}", python.display(), e);
            None
        }
    }
}

/// Installs PyInstaller with `python -m pip install pyinstaller`.
pub async fn install_pyinstaller(python: &Path) -> Result<()> {
    let command = format!("{} -m pip install pyinstaller", python.display());
    let output = tokio::process::Command::new(python)
        .args(["-m", "pip", "install", "pyinstaller"])
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command.clone(),
            error,
        })?;

    if !output.status.success() {
        return Err(Error::PackagerUnavailable(format!(
            "`{}` failed ({}): {}",
            command,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }
    Ok(())
}

/// Makes sure PyInstaller is importable, returning its version.
///
/// When it is missing and `provision` is true it is installed and probed
/// again. With `provision` false a missing packager is an error.
pub async fn ensure_packager(python: &Path, provision: bool) -> Result<String> {
    if let Some(version) = probe_pyinstaller(python).await {
        log::info!("PyInstaller version: {}", version);
        return Ok(version);
    }

    if !provision {
        return Err(Error::PackagerUnavailable(format!(
            "PyInstaller is not installed for {} and provisioning is disabled",
            python.display()
        )));
    }

    log::warn!("PyInstaller not found. Installing...");
    install_pyinstaller(python).await?;

    match probe_pyinstaller(python).await {
        Some(version) => {
            log::info!("✓ Installed PyInstaller {}", version);
            Ok(version)
        }
        None => Err(Error::PackagerUnavailable(
            "PyInstaller still cannot be imported after installation".into(),
        )),
    }
}
