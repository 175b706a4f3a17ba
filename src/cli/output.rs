//! Colored terminal output.
//!
//! Progress goes to stdout, warnings and errors to stderr. Quiet mode keeps
//! only errors; verbose mode adds detail lines.

use colored::Colorize;
use std::io::{self, Write};

/// Terminal output manager honoring verbose and quiet modes.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Whether detail lines are shown.
    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    fn out(&self, line: impl std::fmt::Display) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stdout().lock(), "{line}")
    }

    /// Plain informational line.
    pub fn info(&self, message: &str) -> io::Result<()> {
        self.out(message)
    }

    /// Detail line, shown only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        self.out(message.dimmed())
    }

    /// Step in progress.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.out(format!("{} {}", "→".cyan(), message))
    }

    /// Completed step.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.out(format!("{} {}", "✓".green(), message))
    }

    /// Non-fatal problem.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(io::stderr().lock(), "{} {}", "warning:".yellow().bold(), message)
    }

    /// Fatal problem. Shown even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        writeln!(io::stderr().lock(), "{} {}", "error:".red().bold(), message)
    }

    /// Section header followed by a rule.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.out(title.bold())?;
        self.out("=".repeat(40))
    }

    /// Indented detail line, e.g. captured tool output.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.out(format!("  {message}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_verbose() {
        assert!(!OutputManager::new(true, true).is_verbose());
        assert!(OutputManager::new(true, false).is_verbose());
        assert!(!OutputManager::new(false, false).is_verbose());
    }
}
