//! Windows batch installer.
//!
//! Copies the executable into a folder under `%PROGRAMFILES%` and appends
//! that folder to the machine-wide PATH. Must be run as administrator.

use crate::bundler::{error::Result, settings::Settings, utils::template};
use serde_json::json;

const TEMPLATE: &str = r#"@echo off
echo Installing {{display_name}}...

REM Create installation directory
set INSTALL_DIR={{install_dir}}
if not exist "%INSTALL_DIR%" mkdir "%INSTALL_DIR%"

REM Copy executable
copy {{artifact_glob}} "{{installed_exe}}"

REM Add to PATH (requires admin privileges)
setx PATH "%PATH%;%INSTALL_DIR%" /M

echo {{display_name}} installed successfully!
echo You can now use '{{product_name}}' command from any command prompt.
pause
"#;

/// Renders the batch script with `\n` line endings.
pub fn render(settings: &Settings) -> Result<String> {
    let product = settings.product_name();
    // Backslashes are joined here: in a template a `\` before `{{` escapes it.
    let data = json!({
        "display_name": settings.display_name(),
        "product_name": product,
        "install_dir": format!(
            "%PROGRAMFILES%\\{}",
            settings.installer_settings().windows_install_folder
        ),
        "artifact_glob": format!("{}-{}-*.exe", product, settings.platform().os),
        "installed_exe": format!("%INSTALL_DIR%\\{}.exe", product),
    });
    template::render("install-windows.bat", TEMPLATE, &data)
}
