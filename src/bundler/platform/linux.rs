//! Linux shell installer with a desktop launcher.
//!
//! Installs like the macOS script, then writes a freedesktop.org entry to
//! `~/.local/share/applications` that starts the GUI.

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

# Create desktop entry (optional)
DESKTOP_FILE="$HOME/.local/share/applications/{{product_name}}.desktop"
mkdir -p "$(dirname "$DESKTOP_FILE")"
cat > "$DESKTOP_FILE" << EOF
[Desktop Entry]
Name={{display_name}}
Comment={{description}}
Exec={{product_name}} --gui
Icon={{icon}}
Terminal=false
Type=Application
Categories={{categories}}
EOF

echo "{{display_name}} installed successfully!"
echo "You can now use '{{product_name}}' command from any terminal."
echo "A desktop entry has been created for GUI access."
"#;

pub fn render(settings: &Settings) -> Result<String> {
    let installer = settings.installer_settings();
    let data = json!({
        "display_name": settings.display_name(),
        "product_name": settings.product_name(),
        "description": settings.description(),
        "install_dir": installer.unix_install_dir,
        "artifact_glob": format!("{}-{}-*", settings.product_name(), settings.platform().os),
        "icon": installer.desktop_icon,
        "categories": installer.desktop_categories,
    });
    template::render("install-linux.sh", TEMPLATE, &data)
}
