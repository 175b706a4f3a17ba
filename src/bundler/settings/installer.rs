//! Installer script settings.

use serde::Deserialize;

/// Settings baked into the generated installer scripts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InstallerSettings {
    /// Folder under `%PROGRAMFILES%` that receives the Windows executable.
    pub windows_install_folder: String,

    /// Target directory on macOS and Linux.
    pub unix_install_dir: String,

    /// Freedesktop icon name for the Linux desktop entry.
    pub desktop_icon: String,

    /// Freedesktop categories for the Linux desktop entry.
    pub desktop_categories: String,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            windows_install_folder: "BaseConverter".into(),
            unix_install_dir: "/usr/local/bin".into(),
            desktop_icon: "accessories-calculator".into(),
            desktop_categories: "Utility;Calculator;".into(),
        }
    }
}
