//! PyInstaller execution and artifact renaming.

use crate::bundler::{
    error::{Error, ErrorExt, Result},
    settings::Settings,
    utils::fs::remove_file,
};
use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::Stdio,
};

/// Command used to invoke the packaging tool.
///
/// `--clean <spec>` is appended to `args` for every build.
#[derive(Clone, Debug)]
pub struct PackagerCommand {
    program: PathBuf,
    args: Vec<OsString>,
}

impl PackagerCommand {
    /// Creates a command from a program and leading arguments.
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `<python> -m PyInstaller`
    pub fn pyinstaller(python: impl Into<PathBuf>) -> Self {
        Self::new(python, ["-m", "PyInstaller"])
    }

    /// Program that is executed.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command line for log and error messages.
    pub fn display(&self, spec_path: &Path) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.push("--clean".into());
        parts.push(spec_path.display().to_string());
        parts.join(" ")
    }
}

/// What happened to the executable after a successful packager run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The executable was renamed to its platform qualified path.
    Renamed(PathBuf),
    /// The packager exited 0 but nothing was found at the expected path.
    ArtifactMissing(PathBuf),
}

/// Result of a successful packager run.
#[derive(Clone, Debug)]
pub struct BuildReport {
    /// Artifact handling outcome
    pub outcome: BuildOutcome,
    /// Captured standard output of the packager
    pub stdout: String,
}

/// Run the packaging tool on a spec file and rename its output.
///
/// Runs `<packager> --clean <spec>` inside the project directory with no
/// time limit, capturing both output streams.
///
/// On exit 0 the executable at `dist/<product>[.exe]` is renamed to
/// `dist/<product>-<os>-<arch>[.exe]`, replacing an existing file of that
/// name. If the executable is absent the run still counts as successful and
/// [`BuildOutcome::ArtifactMissing`] is returned; the caller decides whether
/// that is fatal.
///
/// # Errors
///
/// - [`Error::CommandFailed`] if the packager cannot be started
/// - [`Error::PackagerFailed`] on a non-zero exit, carrying captured stderr
pub async fn build_executable(
    settings: &Settings,
    packager: &PackagerCommand,
    spec_path: &Path,
) -> Result<BuildReport> {
    log::info!("Building for {}...", settings.platform());

    let command_line = packager.display(spec_path);
    log::debug!("Running {}", command_line);

    let output = tokio::process::Command::new(packager.program())
        .args(&packager.args)
        .arg("--clean")
        .arg(spec_path)
        .current_dir(settings.project_directory())
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command_line.clone(),
            error,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::error!("Build failed: {} exited with {}", command_line, output.status);
        return Err(Error::PackagerFailed {
            status: output.status,
            stderr,
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    log::info!("Build successful!");
    for line in stdout.lines() {
        log::debug!("{}", line);
    }

    let outcome = rename_artifact(settings).await?;
    Ok(BuildReport { outcome, stdout })
}

/// Moves the packager output to its platform qualified name.
async fn rename_artifact(settings: &Settings) -> Result<BuildOutcome> {
    let original = settings.artifact_path();
    let target = settings.platform_artifact_path();

    if !tokio::fs::try_exists(&original)
        .await
        .fs_context("checking for built executable", &original)?
    {
        log::warn!(
            "Packager succeeded but {} does not exist; nothing to rename",
            original.display()
        );
        return Ok(BuildOutcome::ArtifactMissing(original));
    }

    if remove_file(&target).await? {
        log::debug!("Removed previous artifact {}", target.display());
    }
    tokio::fs::rename(&original, &target)
        .await
        .fs_context("renaming built executable", &original)?;

    log::info!("Created: {}", target.display());
    Ok(BuildOutcome::Renamed(target))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::bundler::settings::{Arch, Os, PlatformTag, SettingsBuilder};

    fn settings(dir: &Path, os: Os) -> Settings {
        SettingsBuilder::new()
            .project_directory(dir)
            .platform(PlatformTag::new(os, Arch::Amd64))
            .build()
            .unwrap()
    }

    fn shell(script: &str) -> PackagerCommand {
        PackagerCommand::new("sh", ["-c", script])
    }

    #[tokio::test]
    async fn renames_artifact_with_platform_tag() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Linux);
        let packager = shell("mkdir -p dist && echo built > dist/base-converter && echo done");

        let report = build_executable(&settings, &packager, Path::new("base-converter.spec"))
            .await
            .unwrap();

        let expected = dir.path().join("dist/base-converter-linux-amd64");
        assert_eq!(report.outcome, BuildOutcome::Renamed(expected.clone()));
        assert_eq!(report.stdout.trim(), "done");
        assert!(expected.exists());
        assert!(!dir.path().join("dist/base-converter").exists());
    }

    #[tokio::test]
    async fn windows_tag_uses_exe_names() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Windows);
        let packager = shell("mkdir -p dist && echo built > dist/base-converter.exe");

        let report = build_executable(&settings, &packager, Path::new("x.spec"))
            .await
            .unwrap();

        let expected = dir.path().join("dist/base-converter-windows-amd64.exe");
        assert_eq!(report.outcome, BuildOutcome::Renamed(expected.clone()));
        assert!(!dir.path().join("dist/base-converter.exe").exists());
    }

    #[tokio::test]
    async fn replaces_existing_platform_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Linux);
        std::fs::create_dir_all(dir.path().join("dist")).unwrap();
        std::fs::write(dir.path().join("dist/base-converter-linux-amd64"), "old").unwrap();
        let packager = shell("echo new > dist/base-converter");

        build_executable(&settings, &packager, Path::new("x.spec"))
            .await
            .unwrap();

        let contents =
            std::fs::read_to_string(dir.path().join("dist/base-converter-linux-amd64")).unwrap();
        assert_eq!(contents.trim(), "new");
        let entries = std::fs::read_dir(dir.path().join("dist")).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[tokio::test]
    async fn missing_artifact_is_reported_not_renamed() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Linux);

        let report = build_executable(&settings, &shell("exit 0"), Path::new("x.spec"))
            .await
            .unwrap();

        assert_eq!(
            report.outcome,
            BuildOutcome::ArtifactMissing(dir.path().join("dist/base-converter"))
        );
        assert!(!dir.path().join("dist/base-converter-linux-amd64").exists());
    }

    #[tokio::test]
    async fn nonzero_exit_carries_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Linux);
        let packager = shell("mkdir -p dist && touch dist/base-converter; echo 'spec error' >&2; exit 3");

        let err = build_executable(&settings, &packager, Path::new("x.spec"))
            .await
            .unwrap_err();

        match err {
            Error::PackagerFailed { status, stderr } => {
                assert_eq!(status.code(), Some(3));
                assert!(stderr.contains("spec error"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!dir.path().join("dist/base-converter-linux-amd64").exists());
    }

    #[tokio::test]
    async fn passes_clean_flag_and_spec_path() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Linux);
        // With `sh -c`, trailing arguments become $0 and $1.
        let packager = shell("echo \"$0 $1\"");

        let report = build_executable(&settings, &packager, Path::new("base-converter.spec"))
            .await
            .unwrap();

        assert_eq!(report.stdout.trim(), "--clean base-converter.spec");
    }

    #[tokio::test]
    async fn unstartable_packager_is_command_failure() {
        let dir = tempfile::tempdir().unwrap();
        let settings = settings(dir.path(), Os::Linux);
        let packager = PackagerCommand::pyinstaller(dir.path().join("no-such-python"));

        let err = build_executable(&settings, &packager, Path::new("x.spec"))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CommandFailed { .. }));
    }
}
