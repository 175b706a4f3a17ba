//! Single-file executable creation with PyInstaller.
//!
//! # Module Organization
//!
//! - `template` - spec file template constant
//! - `spec` - spec file generation from settings
//! - `build` - PyInstaller execution and artifact renaming

mod build;
mod spec;
mod template;

pub use build::{BuildOutcome, BuildReport, PackagerCommand, build_executable};
pub use spec::{render_spec, write_spec};
