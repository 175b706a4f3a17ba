//! Tests for the `base-converter-release` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("base-converter-release").unwrap()
}

#[test]
fn help_lists_pipeline_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PyInstaller"))
        .stdout(predicate::str::contains("--no-provision"))
        .stdout(predicate::str::contains("--skip-smoke-test"))
        .stdout(predicate::str::contains("--archive"));
}

#[test]
fn missing_project_dir_is_rejected() {
    let dir = tempfile::tempdir().unwrap();

    cmd()
        .arg("--project-dir")
        .arg(dir.path().join("nope"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid arguments"))
        .stderr(predicate::str::contains("--help"));
}

#[test]
fn broken_config_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("release.toml"), "[package]\nunknown = 1\n").unwrap();

    cmd()
        .arg("--project-dir")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("release.toml"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use base_converter_release::bundler::{PlatformTag, SettingsBuilder};
    use std::{
        os::unix::fs::PermissionsExt,
        path::{Path, PathBuf},
    };

    const BUILD: &str = r#"mkdir -p dist
printf '#!/bin/sh\necho "Binary Octal Decimal Hexadecimal"\n' > dist/base-converter
chmod +x dist/base-converter
echo "stub build complete""#;

    /// Fake interpreter answering the PyInstaller probe and build calls.
    fn fake_python(dir: &Path, build: &str) -> PathBuf {
        let path = dir.join("python");
        let body = format!(
            "#!/bin/sh\nif [ \"$1\" = \"-c\" ]; then echo 6.3.0; exit 0; fi\n{build}\n"
        );
        std::fs::write(&path, body).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn host_artifact(project: &Path) -> PathBuf {
        SettingsBuilder::new()
            .project_directory(project)
            .platform(PlatformTag::host())
            .build()
            .unwrap()
            .platform_artifact_path()
    }

    #[test]
    fn successful_build_writes_release_files() {
        let project = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let python = fake_python(bin.path(), BUILD);

        cmd()
            .arg("--project-dir")
            .arg(project.path())
            .arg("--python")
            .arg(&python)
            .assert()
            .success()
            .stdout(predicate::str::contains("Base Converter Build Script"))
            .stdout(predicate::str::contains("Executable test passed!"))
            .stdout(predicate::str::contains("Build completed successfully!"));

        assert!(host_artifact(project.path()).exists());
        assert!(project.path().join("PACKAGE_INFO.txt").exists());
        assert!(project.path().join("base-converter.spec").exists());
        assert!(!project.path().join("dist/base-converter").exists());
    }

    #[test]
    fn relative_project_dir_and_interpreter_resolve_from_cwd() {
        let root = tempfile::tempdir().unwrap();
        let project = root.path().join("proj");
        std::fs::create_dir(&project).unwrap();
        std::fs::create_dir(root.path().join("venv")).unwrap();
        // Fails unless the spec argument names an existing file from the
        // packager's working directory.
        let build = format!(
            "[ -f \"$4\" ] || {{ echo \"spec file not found: $4\" >&2; exit 1; }}\n{BUILD}"
        );
        fake_python(&root.path().join("venv"), &build);

        cmd()
            .current_dir(root.path())
            .args(["--project-dir", "proj", "--python", "venv/python"])
            .assert()
            .success()
            .stderr(predicate::str::contains("spec file not found").not());

        assert!(host_artifact(&project).exists());
        assert!(project.join("base-converter.spec").exists());
    }

    #[test]
    fn failing_smoke_test_still_exits_zero() {
        let project = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let build = "mkdir -p dist && printf '#!/bin/sh\\nexit 2\\n' > dist/base-converter && chmod +x dist/base-converter";
        let python = fake_python(bin.path(), build);

        cmd()
            .arg("--project-dir")
            .arg(project.path())
            .arg("--python")
            .arg(&python)
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Executable test failed, but build completed",
            ));
    }

    #[test]
    fn packager_failure_exits_one_with_its_stderr() {
        let project = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let python = fake_python(bin.path(), "echo 'SyntaxError: bad entry point' >&2\nexit 1");

        cmd()
            .arg("--project-dir")
            .arg(project.path())
            .arg("--python")
            .arg(&python)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Build failed!"))
            .stderr(predicate::str::contains("SyntaxError: bad entry point"));

        assert!(!project.path().join("PACKAGE_INFO.txt").exists());
    }

    #[test]
    fn no_provision_fails_when_pyinstaller_is_missing() {
        let project = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let python = bin.path().join("python");
        std::fs::write(&python, "#!/bin/sh\nexit 1\n").unwrap();
        std::fs::set_permissions(&python, std::fs::Permissions::from_mode(0o755)).unwrap();

        cmd()
            .arg("--project-dir")
            .arg(project.path())
            .arg("--python")
            .arg(&python)
            .arg("--no-provision")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("pip install pyinstaller"));
    }

    #[test]
    fn quiet_mode_prints_nothing_on_success() {
        let project = tempfile::tempdir().unwrap();
        let bin = tempfile::tempdir().unwrap();
        let python = fake_python(bin.path(), BUILD);

        cmd()
            .arg("--project-dir")
            .arg(project.path())
            .arg("--python")
            .arg(&python)
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());
    }
}
