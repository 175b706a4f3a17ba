//! Product metadata shown in generated files.

use serde::Deserialize;

/// Product metadata and configuration.
///
/// Used to name artifacts and fill installer scripts and release notes.
/// Defaults describe the Base Converter application.
///
/// # Examples
///
/// ```
/// use base_converter_release::bundler::PackageSettings;
///
/// let settings = PackageSettings {
///     product_name: "hex-tool".into(),
///     display_name: "Hex Tool".into(),
///     ..Default::default()
/// };
/// assert_eq!(settings.version, "1.0");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackageSettings {
    /// Executable base name, e.g. `base-converter`.
    ///
    /// Artifacts are named `<product_name>-<os>-<arch>`.
    pub product_name: String,

    /// Human readable name used in installer messages and release notes.
    pub display_name: String,

    /// Version string printed in the release notes title line.
    pub version: String,

    /// One-line description, used as the desktop entry comment.
    pub description: String,

    /// Project URL printed at the end of the release notes.
    pub homepage: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "base-converter".into(),
            display_name: "Base Converter".into(),
            version: "1.0".into(),
            description: "A comprehensive base conversion utility".into(),
            homepage: "https://github.com/6639835/base-converter".into(),
        }
    }
}
