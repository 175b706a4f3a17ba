//! Release pipeline orchestration.
//!
//! This module provides the [`ReleasePipeline`] that runs every packaging
//! step in order for the platform in [`Settings`].

use super::{
    archive::create_archive,
    checksum::write_checksum,
    smoke::{DEFAULT_SMOKE_TIMEOUT, SmokeOutcome, smoke_test},
    tool_detection::{ensure_packager, find_python, resolve_python},
};
use crate::bundler::{
    Result, Settings,
    error::Error,
    packager::{BuildOutcome, PackagerCommand, build_executable, write_spec},
    platform::write_installer,
    release_notes::write_release_notes,
    utils::fs::{BUILD_DIRS, clean_build_dirs},
};
use std::{path::PathBuf, time::Duration};

/// Switches controlling a pipeline run.
#[derive(Clone, Debug)]
pub struct PipelineOptions {
    /// Python interpreter. Located on PATH when `None`.
    pub python: Option<PathBuf>,

    /// Packaging command override. When set, interpreter lookup and
    /// provisioning are skipped and this command is run instead.
    pub packager: Option<PackagerCommand>,

    /// Install PyInstaller through pip when it is missing.
    pub provision: bool,

    /// Remove `build/`, `dist/` and `__pycache__/` before building.
    pub clean: bool,

    /// Run the smoke test on the built executable.
    pub smoke_test: bool,

    /// Time limit for the smoke test.
    pub smoke_timeout: Duration,

    /// Write a checksum file and a release archive.
    pub archive: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            python: None,
            packager: None,
            provision: true,
            clean: true,
            smoke_test: true,
            smoke_timeout: DEFAULT_SMOKE_TIMEOUT,
            archive: false,
        }
    }
}

/// Files and results produced by a successful run.
#[derive(Clone, Debug)]
pub struct ReleaseReport {
    /// PyInstaller version, when it was probed
    pub packager_version: Option<String>,
    /// Directories removed before the build
    pub cleaned: Vec<String>,
    /// Generated spec file
    pub spec: PathBuf,
    /// Renamed executable
    pub artifact: PathBuf,
    /// Captured packager output
    pub packager_output: String,
    /// Smoke test result; failures here do not fail the run
    pub smoke_test: SmokeOutcome,
    /// Generated installer script
    pub installer: PathBuf,
    /// Generated `PACKAGE_INFO.txt`
    pub release_notes: PathBuf,
    /// `<artifact>.sha256`, when archiving was requested
    pub checksum: Option<PathBuf>,
    /// Release archive, when archiving was requested
    pub archive: Option<PathBuf>,
}

/// Runs the packaging steps for one platform.
///
/// Steps run strictly in order and each is attempted once:
///
/// 1. Resolve the packager (and provision PyInstaller if allowed)
/// 2. Clean previous build output
/// 3. Write the spec file
/// 4. Build and rename the executable
/// 5. Smoke test it (failure only warns)
/// 6. Write the installer script and release notes
/// 7. Optionally checksum and archive
///
/// # Examples
///
/// ```no_run
/// use base_converter_release::bundler::{PipelineOptions, ReleasePipeline, SettingsBuilder};
///
/// # async fn example() -> base_converter_release::bundler::Result<()> {
/// let settings = SettingsBuilder::new().project_directory(".").build()?;
/// let report = ReleasePipeline::new(settings, PipelineOptions::default())
///     .run()
///     .await?;
/// println!("Created: {}", report.artifact.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ReleasePipeline {
    settings: Settings,
    options: PipelineOptions,
}

impl ReleasePipeline {
    /// Creates a pipeline.
    pub fn new(settings: Settings, options: PipelineOptions) -> Self {
        Self { settings, options }
    }

    /// Returns a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the run options.
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Runs every step.
    ///
    /// # Errors
    ///
    /// Fails on packager resolution, cleaning, spec writing, a failed
    /// packager run, a missing executable after a successful packager run,
    /// or when writing the generated files fails. Smoke test problems never
    /// fail the run.
    pub async fn run(&self) -> Result<ReleaseReport> {
        let settings = &self.settings;
        log::info!(
            "Packaging {} {} for {}",
            settings.display_name(),
            settings.version_string(),
            settings.platform()
        );

        let (packager, packager_version) = self.resolve_packager().await?;

        let cleaned = if self.options.clean {
            clean_build_dirs(settings.project_directory(), &BUILD_DIRS).await?
        } else {
            Vec::new()
        };

        let spec = write_spec(settings).await?;
        let build = build_executable(settings, &packager, &spec).await?;
        let artifact = match build.outcome {
            BuildOutcome::Renamed(path) => path,
            BuildOutcome::ArtifactMissing(expected) => return Err(Error::ArtifactMissing(expected)),
        };

        let smoke = if self.options.smoke_test {
            smoke_test(&artifact, self.options.smoke_timeout).await
        } else {
            SmokeOutcome::Skipped
        };
        if !smoke.passed() && smoke != SmokeOutcome::Skipped {
            log::warn!("Executable test failed, but build completed");
        }

        let installer = write_installer(settings).await?;
        let release_notes = write_release_notes(settings, chrono::Local::now().naive_local()).await?;

        let (checksum, archive) = if self.options.archive {
            let checksum = write_checksum(&artifact).await?;
            let archive = create_archive(
                settings,
                &[artifact.clone(), installer.clone(), release_notes.clone()],
            )
            .await?;
            (Some(checksum), Some(archive))
        } else {
            (None, None)
        };

        Ok(ReleaseReport {
            packager_version,
            cleaned,
            spec,
            artifact,
            packager_output: build.stdout,
            smoke_test: smoke,
            installer,
            release_notes,
            checksum,
            archive,
        })
    }

    /// Picks the command that builds the executable.
    async fn resolve_packager(&self) -> Result<(PackagerCommand, Option<String>)> {
        if let Some(packager) = &self.options.packager {
            log::debug!("Using packager override {}", packager.program().display());
            return Ok((packager.clone(), None));
        }

        let python = match &self.options.python {
            Some(python) => resolve_python(python)?,
            None => find_python()?,
        };

        if !self.options.provision {
            log::debug!("PyInstaller provisioning disabled");
        }
        let version = ensure_packager(&python, self.options.provision).await?;
        Ok((PackagerCommand::pyinstaller(python), Some(version)))
    }
}
