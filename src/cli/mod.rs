//! Command line interface for the release packager.
//!
//! Parses arguments, loads the release configuration, runs the
//! [`ReleasePipeline`](crate::bundler::ReleasePipeline) and prints the summary.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::{
    bundler::{ReleaseConfig, ReleasePipeline, ReleaseReport, SettingsBuilder, SmokeOutcome},
    error::{CliError, Result},
};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();

    validate_args(&args).map_err(|reason| CliError::InvalidArguments { reason })?;

    let config = create_runtime_config(&args);
    execute(&args, &config).await
}

/// Runs the release pipeline described by `args`.
async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let release_config = ReleaseConfig::discover(args.config.as_deref(), &args.project_dir).await?;
    let settings = SettingsBuilder::new()
        .project_directory(&args.project_dir)
        .config(release_config)
        .build()?;

    config.section(&format!("{} Build Script", settings.display_name()))?;
    config.verbose_println(&format!(
        "Project: {}",
        settings.project_directory().display()
    ))?;
    config.progress(&format!(
        "Building {} for {}...",
        settings.platform_artifact_file_name(),
        settings.platform()
    ))?;

    let pipeline = ReleasePipeline::new(settings, args.pipeline_options());
    let report = match pipeline.run().await {
        Ok(report) => report,
        Err(e) => {
            config.error("Build failed!")?;
            return Err(e.into());
        }
    };

    print_report(&pipeline, &report, config)?;
    Ok(0)
}

fn print_report(
    pipeline: &ReleasePipeline,
    report: &ReleaseReport,
    config: &RuntimeConfig,
) -> std::io::Result<()> {
    let settings = pipeline.settings();

    if let Some(version) = &report.packager_version {
        config.verbose_println(&format!("PyInstaller version: {version}"))?;
    }
    for dir in &report.cleaned {
        config.verbose_println(&format!("Cleaned {dir}/"))?;
    }

    if config.output().is_verbose() {
        for line in report.packager_output.lines() {
            config.indent(line)?;
        }
    }
    config.success(&format!("Built {}", report.artifact.display()))?;

    match &report.smoke_test {
        SmokeOutcome::Passed => config.success(&report.smoke_test.to_string())?,
        SmokeOutcome::Skipped => config.verbose_println(&report.smoke_test.to_string())?,
        failed => {
            config.warn(&failed.to_string())?;
            config.warn("Executable test failed, but build completed")?;
        }
    }

    config.success(&format!("Created installer {}", report.installer.display()))?;
    config.success(&format!("Created {}", report.release_notes.display()))?;
    if let Some(checksum) = &report.checksum {
        config.success(&format!("Created {}", checksum.display()))?;
    }
    if let Some(archive) = &report.archive {
        config.success(&format!("Created {}", archive.display()))?;
    }

    config.info("")?;
    config.success("Build completed successfully!")?;

    config.info("")?;
    config.info("Files created:")?;
    config.indent(&format!(
        "- {}/{}",
        crate::bundler::settings::DIST_DIR,
        settings.platform_artifact_file_name()
    ))?;
    config.indent("- Installer script")?;
    config.indent(&format!("- {}", crate::bundler::release_notes::RELEASE_NOTES_FILE))?;

    config.info("")?;
    config.info("To create a release package:")?;
    config.indent("1. Test the executable thoroughly")?;
    if report.archive.is_some() {
        config.indent("2. Check the archive contents in dist/")?;
    } else {
        config.indent("2. Create a zip/tar.gz archive with the executable and installer")?;
    }
    config.indent("3. Upload to GitHub Releases")
}

/// Parse arguments without executing (for testing)
pub fn parse_args() -> Args {
    Args::parse_args()
}

/// Validate arguments without executing (for testing)
pub fn validate_args(args: &Args) -> std::result::Result<(), String> {
    args.validate()
}

/// Create runtime configuration from arguments
pub fn create_runtime_config(args: &Args) -> RuntimeConfig {
    RuntimeConfig::from(args)
}
