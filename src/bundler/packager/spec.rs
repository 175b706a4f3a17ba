//! PyInstaller spec file generation.
//!
//! Renders the spec template from [`PackagerSettings`] using Handlebars.
//! Lists are formatted as Python literals before rendering so the template
//! stays free of block helpers.

use super::template::SPEC_TEMPLATE;
use crate::bundler::{
    error::Result,
    settings::{PackagerSettings, Settings},
    utils::{
        fs::{LineEnding, write_text},
        template,
    },
};
use serde_json::json;
use std::path::PathBuf;

/// Quotes a value as a single-quoted Python string literal.
fn py_str(value: &str) -> String {
    format!("'{}'", value.replace('\\', "\\\\").replace('\'', "\\'"))
}

/// Formats a list of already rendered Python expressions.
///
/// Non-empty lists are laid out one item per line, indented to sit inside
/// the `Analysis(...)` call.
fn py_block_list(items: impl IntoIterator<Item = String>) -> String {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        return "[]".to_string();
    }
    let mut out = String::from("[\n");
    for item in items {
        out.push_str("        ");
        out.push_str(&item);
        out.push_str(",\n");
    }
    out.push_str("    ]");
    out
}

fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Renders the spec file contents.
pub fn render_spec(product_name: &str, packager: &PackagerSettings) -> Result<String> {
    let pathex = format!(
        "[{}]",
        packager
            .pathex
            .iter()
            .map(|p| py_str(p))
            .collect::<Vec<_>>()
            .join(", ")
    );

    let data = json!({
        "product_name": py_str(product_name),
        "entry_point": py_str(&packager.entry_point),
        "pathex": pathex,
        "datas": py_block_list(
            packager
                .datas
                .iter()
                .map(|d| format!("({}, {})", py_str(&d.source), py_str(&d.destination))),
        ),
        "hidden_imports": py_block_list(packager.hidden_imports.iter().map(|m| py_str(m))),
        "excludes": py_block_list(packager.excludes.iter().map(|m| py_str(m))),
        "upx": py_bool(packager.upx),
        "console": py_bool(packager.console),
    });

    let rendered = template::render("spec", SPEC_TEMPLATE, &data)?;
    Ok(rendered.trim().to_string())
}

/// Writes `<product>.spec` into the project directory, overwriting any
/// previous version, and returns its path.
pub async fn write_spec(settings: &Settings) -> Result<PathBuf> {
    let contents = render_spec(settings.product_name(), settings.packager_settings())?;
    let spec_path = settings.spec_path();
    write_text(&spec_path, &contents, LineEnding::Lf).await?;
    log::info!("Created PyInstaller spec file {}", spec_path.display());
    Ok(spec_path)
}
