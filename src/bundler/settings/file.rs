//! Optional `release.toml` configuration file.

use super::{InstallerSettings, PackageSettings, PackagerSettings};
use crate::bundler::error::{Error, ErrorExt, Result};
use serde::Deserialize;
use std::path::Path;

/// Name of the configuration file looked up in the project directory.
pub const CONFIG_FILE_NAME: &str = "release.toml";

/// Contents of a release configuration file.
///
/// Every section and every field is optional; missing values fall back to
/// the Base Converter defaults.
///
/// ```toml
/// [package]
/// version = "1.1"
///
/// [packager]
/// excludes = ["numpy"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReleaseConfig {
    /// `[package]` section
    pub package: PackageSettings,
    /// `[packager]` section
    pub packager: PackagerSettings,
    /// `[installer]` section
    pub installer: InstallerSettings,
}

impl ReleaseConfig {
    /// Parses configuration from TOML text.
    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Reads and parses a configuration file.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .fs_context("reading release configuration", path)?;
        Self::parse(&contents, path)
    }

    /// Loads the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `release.toml` in the
    /// project directory is used when present, defaults otherwise.
    pub async fn discover(explicit: Option<&Path>, project_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path).await;
        }

        let candidate = project_dir.join(CONFIG_FILE_NAME);
        if tokio::fs::try_exists(&candidate)
            .await
            .fs_context("checking for release configuration", &candidate)?
        {
            log::debug!("Using release configuration {}", candidate.display());
            Self::load(&candidate).await
        } else {
            log::debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ReleaseConfig::parse("", Path::new("release.toml")).unwrap();
        assert_eq!(config.package.product_name, "base-converter");
        assert_eq!(config.packager.entry_point, "src/main.py");
        assert_eq!(config.packager.excludes.len(), 6);
        assert_eq!(config.installer.unix_install_dir, "/usr/local/bin");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = ReleaseConfig::parse(
            r#"
            [package]
            version = "2.3"

            [packager]
            hidden_imports = ["argparse"]
            datas = [{ source = "assets/*", destination = "assets" }]
            "#,
            Path::new("release.toml"),
        )
        .unwrap();

        assert_eq!(config.package.version, "2.3");
        assert_eq!(config.package.display_name, "Base Converter");
        assert_eq!(config.packager.hidden_imports, vec!["argparse".to_string()]);
        assert_eq!(config.packager.datas[0].destination, "assets");
        assert!(config.packager.upx);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = ReleaseConfig::parse(
            "[package]\nproduct = \"typo\"\n",
            Path::new("conf/release.toml"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("conf/release.toml"));
    }

    #[tokio::test]
    async fn discover_prefers_project_file() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[package]\nproduct_name = \"radix\"\n",
        )
        .await
        .unwrap();

        let config = ReleaseConfig::discover(None, dir.path()).await.unwrap();
        assert_eq!(config.package.product_name, "radix");
    }

    #[tokio::test]
    async fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReleaseConfig::discover(None, dir.path()).await.unwrap();
        assert_eq!(config.package.product_name, "base-converter");
    }

    #[tokio::test]
    async fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ReleaseConfig::discover(Some(&missing), dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Fs { .. }));
    }
}
