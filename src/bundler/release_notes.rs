//! `PACKAGE_INFO.txt` generation.

use crate::bundler::{
    error::Result,
    settings::{PlatformTag, Settings},
    utils::{
        fs::{LineEnding, write_text},
        template,
    },
};
use chrono::NaiveDateTime;
use serde_json::json;
use std::path::PathBuf;

/// File name of the release notes.
pub const RELEASE_NOTES_FILE: &str = "PACKAGE_INFO.txt";

/// Timestamp format of the `Build Date:` line.
pub const BUILD_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TEMPLATE: &str = r#"{{display_name}} v{{version}}
Platform: {{platform}}
Build Date: {{build_date}}

INSTALLATION:
Run the appropriate installer script for your platform:
- Windows: install-windows.bat (run as administrator)
- macOS: ./install-macos.sh
- Linux: ./install-linux.sh

MANUAL INSTALLATION:
Copy the executable to a directory in your PATH.

USAGE:
{{product_name}} --gui          # Launch graphical interface
{{product_name}} 1010 -f 2 -t 10  # Convert binary to decimal
{{product_name}} --help         # Show help

For more information, visit:
{{homepage}}
"#;

/// Renders the release notes for a platform and build time.
pub fn render_release_notes(
    settings: &Settings,
    platform: &PlatformTag,
    built_at: NaiveDateTime,
) -> Result<String> {
    let data = json!({
        "display_name": settings.display_name(),
        "version": settings.version_string(),
        "platform": platform.to_string(),
        "build_date": built_at.format(BUILD_DATE_FORMAT).to_string(),
        "product_name": settings.product_name(),
        "homepage": settings.homepage(),
    });
    let rendered = template::render(RELEASE_NOTES_FILE, TEMPLATE, &data)?;
    Ok(rendered.trim().to_string())
}

/// Writes `PACKAGE_INFO.txt` into the project directory.
pub async fn write_release_notes(settings: &Settings, built_at: NaiveDateTime) -> Result<PathBuf> {
    let contents = render_release_notes(settings, settings.platform(), built_at)?;
    let path = settings.project_directory().join(RELEASE_NOTES_FILE);
    write_text(&path, &contents, LineEnding::Lf).await?;
    log::info!("Created package information file");
    Ok(path)
}
