//! Shared helpers for the pipeline steps.

pub mod fs;
pub mod template;
