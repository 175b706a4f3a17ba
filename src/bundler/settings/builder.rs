//! Builder for constructing Settings.

use super::{
    InstallerSettings, PackageSettings, PackagerSettings, PlatformTag, ReleaseConfig, Settings,
};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Provides a fluent API for building release settings.
///
/// # Examples
///
/// ```
/// use base_converter_release::bundler::{PackageSettings, SettingsBuilder};
///
/// # fn example() -> base_converter_release::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .project_directory(".")
///     .package_settings(PackageSettings {
///         version: "1.1".into(),
///         ..Default::default()
///     })
///     .build()?;
/// assert_eq!(settings.version_string(), "1.1");
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    project_directory: Option<PathBuf>,
    package_settings: PackageSettings,
    packager_settings: PackagerSettings,
    installer_settings: InstallerSettings,
    platform: Option<PlatformTag>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the project directory.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn project_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.project_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets product metadata.
    ///
    /// Default: Base Converter metadata
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = settings;
        self
    }

    /// Sets the PyInstaller spec inputs.
    pub fn packager_settings(mut self, settings: PackagerSettings) -> Self {
        self.packager_settings = settings;
        self
    }

    /// Sets installer script settings.
    pub fn installer_settings(mut self, settings: InstallerSettings) -> Self {
        self.installer_settings = settings;
        self
    }

    /// Applies every section of a loaded configuration file.
    pub fn config(self, config: ReleaseConfig) -> Self {
        self.package_settings(config.package)
            .packager_settings(config.packager)
            .installer_settings(config.installer)
    }

    /// Sets the platform tag.
    ///
    /// Default: the host platform
    pub fn platform(mut self, platform: PlatformTag) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `project_directory` is missing or the product
    /// name is empty.
    ///
    /// A relative project directory is made absolute against the current
    /// directory, since the packager runs with the project as its cwd.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        use crate::bundler::error::{Context, ErrorExt};

        if self.package_settings.product_name.trim().is_empty() {
            crate::bail!("product_name must not be empty");
        }

        let platform = self.platform.unwrap_or_else(PlatformTag::host);
        let project_directory = self
            .project_directory
            .context("project_directory is required")?;
        let project_directory = project_directory
            .absolutize()
            .fs_context("resolving project directory", &project_directory)?
            .into_owned();

        Ok(Settings::new(
            self.package_settings,
            self.packager_settings,
            self.installer_settings,
            project_directory,
            platform,
        ))
    }
}
