//! Platform installer scripts.
//!
//! Exactly one installer variant is produced per run, selected from the
//! platform tag: a batch file on Windows, a shell script on macOS, and a
//! shell script with a desktop entry everywhere else.
//!
//! Every script assumes it is run from the directory holding the renamed
//! executable and locates it with a shell glob.

mod linux;
mod macos;
mod windows;

use crate::bundler::{
    error::Result,
    settings::{Os, PlatformTag, Settings},
    utils::fs::{LineEnding, set_executable, write_text},
};
use std::path::PathBuf;

/// Installer script variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InstallerKind {
    /// `install-windows.bat`
    Windows,
    /// `install-macos.sh`
    MacOs,
    /// `install-linux.sh`
    Linux,
}

impl InstallerKind {
    /// Selects the variant for a platform. Unknown systems get the Linux script.
    pub fn for_platform(tag: &PlatformTag) -> Self {
        match tag.os {
            Os::Windows => InstallerKind::Windows,
            Os::Darwin => InstallerKind::MacOs,
            Os::Linux | Os::Other(_) => InstallerKind::Linux,
        }
    }

    /// File name of the generated script.
    pub fn file_name(self) -> &'static str {
        match self {
            InstallerKind::Windows => "install-windows.bat",
            InstallerKind::MacOs => "install-macos.sh",
            InstallerKind::Linux => "install-linux.sh",
        }
    }

    /// Line ending convention of the script.
    pub fn line_ending(self) -> LineEnding {
        match self {
            InstallerKind::Windows => LineEnding::CrLf,
            InstallerKind::MacOs | InstallerKind::Linux => LineEnding::Lf,
        }
    }

    /// Whether the written file gets the executable bit.
    pub fn is_executable(self) -> bool {
        !matches!(self, InstallerKind::Windows)
    }
}

/// A rendered installer script.
#[derive(Clone, Debug)]
pub struct InstallerScript {
    /// Variant
    pub kind: InstallerKind,
    /// Script text with `\n` line endings
    pub contents: String,
}

impl InstallerScript {
    /// File name the script is written under.
    pub fn file_name(&self) -> &'static str {
        self.kind.file_name()
    }
}

/// Renders the installer script for the settings' platform.
pub fn render_installer(settings: &Settings) -> Result<InstallerScript> {
    let kind = InstallerKind::for_platform(settings.platform());
    let rendered = match kind {
        InstallerKind::Windows => windows::render(settings)?,
        InstallerKind::MacOs => macos::render(settings)?,
        InstallerKind::Linux => linux::render(settings)?,
    };
    Ok(InstallerScript {
        kind,
        contents: rendered.trim().to_string(),
    })
}

/// Writes the installer script into the project directory.
///
/// Overwrites a previous copy. POSIX scripts are made executable.
pub async fn write_installer(settings: &Settings) -> Result<PathBuf> {
    let script = render_installer(settings)?;
    let path = settings.project_directory().join(script.file_name());

    write_text(&path, &script.contents, script.kind.line_ending()).await?;
    if script.kind.is_executable() {
        set_executable(&path).await?;
    }

    log::info!("Created {} installer script", script.file_name());
    Ok(path)
}
