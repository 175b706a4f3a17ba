//! Handlebars rendering for generated text files.

use crate::bundler::error::Result;
use handlebars::Handlebars;
use serde::Serialize;

/// Renders `template` with `data`.
///
/// HTML escaping is disabled and strict mode is on, so a placeholder
/// without a value is an error rather than an empty string.
pub fn render<T: Serialize>(name: &str, template: &str, data: &T) -> Result<String> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);
    handlebars.set_strict_mode(true);
    handlebars.register_template_string(name, template)?;
    Ok(handlebars.render(name, data)?)
}
