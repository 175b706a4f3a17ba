//! Core Settings struct and implementations.

use super::{InstallerSettings, PackageSettings, PackagerSettings, PlatformTag};
use std::path::{Path, PathBuf};

/// Directory PyInstaller writes finished executables to.
pub const DIST_DIR: &str = "dist";

/// Main settings for a release run.
///
/// Central configuration for the pipeline, constructed via [`SettingsBuilder`].
/// Holds product metadata, packager inputs, installer settings, the project
/// directory every step works in, and the platform tag the run targets.
///
/// # Examples
///
/// ```
/// use base_converter_release::bundler::{Arch, Os, PlatformTag, SettingsBuilder};
///
/// # fn example() -> base_converter_release::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory("/work/base-converter")
///     .platform(PlatformTag::new(Os::Windows, Arch::Amd64))
///     .build()?;
///
/// assert_eq!(
///     settings.platform_artifact_path(),
///     std::path::Path::new("/work/base-converter/dist/base-converter-windows-amd64.exe")
/// );
/// # Ok(())
/// # }
/// ```
///
/// [`SettingsBuilder`]: super::SettingsBuilder
#[derive(Clone, Debug)]
pub struct Settings {
    /// Product metadata.
    package: PackageSettings,

    /// PyInstaller spec inputs.
    packager: PackagerSettings,

    /// Installer script settings.
    installer: InstallerSettings,

    /// Directory containing the application sources.
    ///
    /// The spec file, installer script and release notes are written here;
    /// executables land in its `dist/` subdirectory.
    project_directory: PathBuf,

    /// Platform the run builds for.
    platform: PlatformTag,
}

impl Settings {
    /// Returns the executable base name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    /// Returns the human readable product name.
    pub fn display_name(&self) -> &str {
        &self.package.display_name
    }

    /// Returns the version string.
    pub fn version_string(&self) -> &str {
        &self.package.version
    }

    /// Returns the product description.
    pub fn description(&self) -> &str {
        &self.package.description
    }

    /// Returns the project homepage.
    pub fn homepage(&self) -> &str {
        &self.package.homepage
    }

    /// Returns the packager settings.
    pub fn packager_settings(&self) -> &PackagerSettings {
        &self.packager
    }

    /// Returns the installer settings.
    pub fn installer_settings(&self) -> &InstallerSettings {
        &self.installer
    }

    /// Returns the project directory.
    pub fn project_directory(&self) -> &Path {
        &self.project_directory
    }

    /// Returns the directory executables are produced in.
    pub fn dist_directory(&self) -> PathBuf {
        self.project_directory.join(DIST_DIR)
    }

    /// Returns the platform tag of this run.
    pub fn platform(&self) -> &PlatformTag {
        &self.platform
    }

    /// Path of the generated PyInstaller spec file.
    pub fn spec_path(&self) -> PathBuf {
        self.project_directory
            .join(format!("{}.spec", self.product_name()))
    }

    /// File name PyInstaller gives the executable, e.g. `base-converter.exe`.
    pub fn artifact_file_name(&self) -> String {
        format!(
            "{}{}",
            self.product_name(),
            self.platform.os.executable_suffix()
        )
    }

    /// Path PyInstaller writes the executable to.
    pub fn artifact_path(&self) -> PathBuf {
        self.dist_directory().join(self.artifact_file_name())
    }

    /// Platform qualified file name, e.g. `base-converter-linux-amd64`.
    pub fn platform_artifact_file_name(&self) -> String {
        format!(
            "{}-{}{}",
            self.product_name(),
            self.platform,
            self.platform.os.executable_suffix()
        )
    }

    /// Path the executable is renamed to after a successful build.
    pub fn platform_artifact_path(&self) -> PathBuf {
        self.dist_directory()
            .join(self.platform_artifact_file_name())
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        packager: PackagerSettings,
        installer: InstallerSettings,
        project_directory: PathBuf,
        platform: PlatformTag,
    ) -> Self {
        Self {
            package,
            packager,
            installer,
            project_directory,
            platform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Arch, Os, SettingsBuilder};
    use super::*;

    fn settings_for(os: Os, arch: Arch) -> Settings {
        SettingsBuilder::new()
            .project_directory("proj")
            .platform(PlatformTag::new(os, arch))
            .build()
            .unwrap()
    }

    fn project_root() -> PathBuf {
        std::env::current_dir().unwrap().join("proj")
    }

    #[test]
    fn unix_artifacts_have_no_suffix() {
        let settings = settings_for(Os::Linux, Arch::Amd64);
        assert_eq!(
            settings.artifact_path(),
            project_root().join("dist").join("base-converter")
        );
        assert_eq!(
            settings.platform_artifact_path(),
            project_root().join("dist").join("base-converter-linux-amd64")
        );
    }

    #[test]
    fn windows_artifacts_get_exe_suffix() {
        let settings = settings_for(Os::Windows, Arch::Arm64);
        assert_eq!(settings.artifact_file_name(), "base-converter.exe");
        assert_eq!(
            settings.platform_artifact_file_name(),
            "base-converter-windows-arm64.exe"
        );
    }

    #[test]
    fn unknown_arch_degrades_into_file_name() {
        let settings = settings_for(Os::Darwin, Arch::normalize("ppc64le"));
        assert_eq!(
            settings.platform_artifact_file_name(),
            "base-converter-darwin-ppc64le"
        );
    }

    #[test]
    fn spec_is_named_after_product() {
        let settings = settings_for(Os::Linux, Arch::Arm);
        assert_eq!(settings.spec_path(), project_root().join("base-converter.spec"));
    }
}
