//! Release packaging for the Base Converter application.
//!
//! Turns the Python sources into a platform-tagged single-file executable
//! with PyInstaller and writes the files shipped next to it:
//!
//! - `dist/<product>-<os>-<arch>[.exe]` - the executable
//! - `install-windows.bat` / `install-macos.sh` / `install-linux.sh`
//! - `PACKAGE_INFO.txt` - release notes
//! - optionally a `.sha256` file and a `.tar.gz` / `.zip` archive
//!
//! Only the host platform is ever built.

pub mod builder;
pub mod error;
pub mod packager;
pub mod platform;
pub mod release_notes;
pub mod settings;
pub mod utils;

#[cfg(all(test, unix))]
mod test_support;

pub use builder::{PipelineOptions, ReleasePipeline, ReleaseReport, SmokeOutcome};
pub use error::{Error, Result};
pub use packager::{BuildOutcome, PackagerCommand};
pub use platform::{InstallerKind, InstallerScript};
pub use settings::{
    Arch, DataFile, InstallerSettings, Os, PackageSettings, PackagerSettings, PlatformTag,
    ReleaseConfig, Settings, SettingsBuilder,
};
