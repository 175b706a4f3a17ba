//! macOS shell installer.

use crate::bundler::{error::Result, settings::Settings, utils::template};
use serde_json::json;

const TEMPLATE: &str = r#"#!/bin/bash
echo "Installing {{display_name}}..."

# Create installation directory
INSTALL_DIR="{{install_dir}}"
sudo mkdir -p "$INSTALL_DIR"

# Copy executable
sudo cp {{artifact_glob}} "$INSTALL_DIR/{{product_name}}"
sudo chmod +x "$INSTALL_DIR/{{product_name}}"

echo "{{display_name}} installed successfully!"
echo "You can now use '{{product_name}}' command from any terminal."
"#;

pub fn render(settings: &Settings) -> Result<String> {
    let data = json!({
        "display_name": settings.display_name(),
        "product_name": settings.product_name(),
        "install_dir": settings.installer_settings().unix_install_dir,
        "artifact_glob": format!("{}-{}-*", settings.product_name(), settings.platform().os),
    });
    template::render("install-macos.sh", TEMPLATE, &data)
}
