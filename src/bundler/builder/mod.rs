//! Release orchestration and the steps around the executable build.
//!
//! # Module Organization
//!
//! - [`orchestrator`] - [`ReleasePipeline`] running every step in order
//! - [`tool_detection`] - Python/PyInstaller detection and provisioning
//! - [`smoke`] - liveness check of the built executable
//! - [`checksum`] - SHA-256 checksum files
//! - [`archive`] - `.tar.gz` / `.zip` release archives

pub mod archive;
pub mod checksum;
pub mod orchestrator;
pub mod smoke;
pub mod tool_detection;

pub use orchestrator::{PipelineOptions, ReleasePipeline, ReleaseReport};
pub use smoke::{DEFAULT_SMOKE_TIMEOUT, SmokeOutcome, smoke_test};
