//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! and the runtime configuration derived from the arguments.

use crate::bundler::PipelineOptions;
use clap::Parser;
use std::{path::PathBuf, time::Duration};

/// Release packager for the Base Converter application
#[derive(Parser, Debug)]
#[command(
    name = "base-converter-release",
    version,
    about = "Package Base Converter into a platform executable with installer scripts",
    long_about = "Builds a single-file executable of the Base Converter application with PyInstaller \
for the current platform, then writes an installer script and release notes.

Outputs (in the project directory):
  dist/base-converter-<os>-<arch>[.exe]   the executable
  install-<platform>.bat|.sh              the installer script for this platform
  PACKAGE_INFO.txt                        release notes
  base-converter.spec                     the generated PyInstaller spec

Usage:
  base-converter-release
  base-converter-release --project-dir ../base-converter --archive
  base-converter-release --python /usr/bin/python3.12 --no-provision

Exit code 0 = the executable exists at its platform path. A failed smoke test only warns."
)]
pub struct Args {
    /// Directory containing the application sources
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Release configuration file (default: <DIR>/release.toml if present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Python interpreter used to run PyInstaller (default: python3 or python on PATH)
    #[arg(long, value_name = "PATH")]
    pub python: Option<PathBuf>,

    /// Do not install PyInstaller when it is missing
    #[arg(long)]
    pub no_provision: bool,

    /// Keep build/, dist/ and __pycache__/ from previous runs
    #[arg(long)]
    pub no_clean: bool,

    /// Do not run the built executable
    #[arg(long)]
    pub skip_smoke_test: bool,

    /// Seconds the executable gets to answer the smoke test
    #[arg(long, value_name = "SECS", default_value_t = 10)]
    pub smoke_timeout: u64,

    /// Also write a SHA-256 file and a .tar.gz/.zip release archive
    #[arg(long)]
    pub archive: bool,

    /// Show packager output and extra detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }

        if let Some(config) = &self.config
            && !config.is_file()
        {
            return Err(format!(
                "Configuration file does not exist: {}",
                config.display()
            ));
        }

        if self.smoke_timeout == 0 {
            return Err("--smoke-timeout must be at least 1 second".to_string());
        }

        Ok(())
    }

    /// Pipeline switches selected by the arguments.
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            python: self.python.clone(),
            packager: None,
            provision: !self.no_provision,
            clean: !self.no_clean,
            smoke_test: !self.skip_smoke_test,
            smoke_timeout: Duration::from_secs(self.smoke_timeout),
            archive: self.archive,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print error message
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.output.error(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print plain text
    pub fn info(&self, message: &str) -> std::io::Result<()> {
        self.output.info(message)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
