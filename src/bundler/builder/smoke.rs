//! Liveness check of a built executable.
//!
//! Runs the artifact with `--list-bases` and looks for a marker in its
//! output. This only proves the executable starts; it does not check any
//! conversion results.

use std::{
    fmt,
    path::{Path, PathBuf},
    process::Stdio,
    time::Duration,
};

/// Flag that makes the application list its supported bases and exit.
pub const SMOKE_TEST_FLAG: &str = "--list-bases";

/// Text the listing must contain.
pub const SMOKE_TEST_MARKER: &str = "Binary";

/// Default time the executable gets to answer.
pub const DEFAULT_SMOKE_TIMEOUT: Duration = Duration::from_secs(10);

/// Result of a smoke test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SmokeOutcome {
    /// Exit 0 and the marker was printed.
    Passed,
    /// The test was not requested.
    Skipped,
    /// No executable at the given path.
    Missing(PathBuf),
    /// The executable did not finish in time and was killed.
    TimedOut(Duration),
    /// The executable finished without the expected result.
    Failed {
        /// Exit code, if the process exited normally
        code: Option<i32>,
        /// Captured standard error
        stderr: String,
    },
    /// Spawning or waiting failed.
    Errored(String),
}

impl SmokeOutcome {
    /// Whether the executable passed.
    pub fn passed(&self) -> bool {
        matches!(self, SmokeOutcome::Passed)
    }
}

impl fmt::Display for SmokeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmokeOutcome::Passed => write!(f, "Executable test passed!"),
            SmokeOutcome::Skipped => write!(f, "Executable test skipped"),
            SmokeOutcome::Missing(path) => write!(f, "Executable not found: {}", path.display()),
            SmokeOutcome::TimedOut(limit) => {
                write!(f, "Executable test timed out after {}s", limit.as_secs_f32())
            }
            SmokeOutcome::Failed { code, stderr } => {
                write!(f, "Executable test failed (exit code: {code:?})")?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            SmokeOutcome::Errored(message) => write!(f, "Error testing executable: {message}"),
        }
    }
}

/// Runs `<artifact> --list-bases` bounded by `timeout`.
///
/// Never fails: every problem is folded into the returned outcome. A child
/// that exceeds the timeout is killed when its handle is dropped.
pub async fn smoke_test(artifact: &Path, timeout: Duration) -> SmokeOutcome {
    match tokio::fs::try_exists(artifact).await {
        Ok(true) => {}
        Ok(false) => return SmokeOutcome::Missing(artifact.to_path_buf()),
        Err(e) => return SmokeOutcome::Errored(e.to_string()),
    }

    let child = tokio::process::Command::new(artifact)
        .arg(SMOKE_TEST_FLAG)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn();

    let child = match child {
        Ok(child) => child,
        Err(e) => return SmokeOutcome::Errored(e.to_string()),
    };

    let outcome = match tokio::time::timeout(timeout, child.wait_with_output()).await {
        Err(_elapsed) => SmokeOutcome::TimedOut(timeout),
        Ok(Err(e)) => SmokeOutcome::Errored(e.to_string()),
        Ok(Ok(output)) => {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if output.status.success() && stdout.contains(SMOKE_TEST_MARKER) {
                SmokeOutcome::Passed
            } else {
                SmokeOutcome::Failed {
                    code: output.status.code(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                }
            }
        }
    };

    if outcome.passed() {
        log::info!("{}", outcome);
    } else {
        log::warn!("{}", outcome);
    }
    outcome
}
