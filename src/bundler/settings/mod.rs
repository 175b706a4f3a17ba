//! Configuration structures for release packaging.
//!
//! Product metadata, PyInstaller inputs and installer settings, the optional
//! `release.toml` file they can be loaded from, and the host platform tag.

mod builder;
mod core;
mod file;
mod installer;
mod package;
mod packager;
mod platform;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use self::core::{DIST_DIR, Settings};
pub use file::{CONFIG_FILE_NAME, ReleaseConfig};
pub use installer::InstallerSettings;
pub use package::PackageSettings;
pub use packager::{DataFile, PackagerSettings};
pub use platform::{Arch, Os, PlatformTag};
