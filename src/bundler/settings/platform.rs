//! Host platform detection and naming.

use std::fmt;

/// Operating system a release is built for.
///
/// Names follow the lowercase system names used in artifact file names
/// (`windows`, `darwin`, `linux`). Any other system keeps its raw name.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Os {
    /// Microsoft Windows
    Windows,
    /// macOS
    Darwin,
    /// Linux
    Linux,
    /// Any other system, kept as its lowercase raw name
    Other(String),
}

impl Os {
    /// Parses a raw system name. Never fails.
    ///
    /// Accepts both `darwin` and Rust's `macos` spelling.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "windows" => Os::Windows,
            "darwin" | "macos" => Os::Darwin,
            "linux" => Os::Linux,
            _ => Os::Other(raw),
        }
    }

    /// Name used in artifact and installer file names.
    pub fn as_str(&self) -> &str {
        match self {
            Os::Windows => "windows",
            Os::Darwin => "darwin",
            Os::Linux => "linux",
            Os::Other(raw) => raw,
        }
    }

    /// Suffix appended to executables on this system.
    pub fn executable_suffix(&self) -> &'static str {
        match self {
            Os::Windows => ".exe",
            _ => "",
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CPU architecture, normalized to a small vocabulary.
///
/// # Examples
///
/// ```
/// use base_converter_release::bundler::Arch;
///
/// assert_eq!(Arch::normalize("x86_64"), Arch::Amd64);
/// assert_eq!(Arch::normalize("armv7l"), Arch::Arm);
/// assert_eq!(Arch::normalize("riscv64").to_string(), "riscv64");
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Arch {
    /// x86_64 / AMD64
    Amd64,
    /// AArch64 / ARM64
    Arm64,
    /// 32-bit ARM of any flavour
    Arm,
    /// Anything else, kept as its lowercase raw name
    Other(String),
}

impl Arch {
    /// Normalizes a raw machine name.
    ///
    /// `x86_64` becomes `amd64`, `aarch64` and `arm64` become `arm64`, any
    /// other `arm*` becomes `arm`. Unknown names pass through lowercased.
    pub fn normalize(raw: &str) -> Self {
        let raw = raw.trim().to_lowercase();
        match raw.as_str() {
            "x86_64" => Arch::Amd64,
            "aarch64" | "arm64" => Arch::Arm64,
            other if other.starts_with("arm") => Arch::Arm,
            _ => Arch::Other(raw),
        }
    }

    /// Name used in artifact file names.
    pub fn as_str(&self) -> &str {
        match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
            Arch::Arm => "arm",
            Arch::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (operating system, architecture) pair a release targets.
///
/// Computed once per run and passed explicitly to every step that names
/// files or selects templates. Displays as `<os>-<arch>`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct PlatformTag {
    /// Operating system
    pub os: Os,
    /// Normalized architecture
    pub arch: Arch,
}

impl PlatformTag {
    /// Creates a tag from already parsed parts.
    pub fn new(os: Os, arch: Arch) -> Self {
        Self { os, arch }
    }

    /// Creates a tag from raw system and machine names.
    pub fn from_raw(os: &str, arch: &str) -> Self {
        Self::new(Os::parse(os), Arch::normalize(arch))
    }

    /// Detects the tag of the running host.
    pub fn host() -> Self {
        Self::from_raw(std::env::consts::OS, std::env::consts::ARCH)
    }

    /// Returns true when the tag targets Windows.
    pub fn is_windows(&self) -> bool {
        self.os == Os::Windows
    }
}

impl fmt::Display for PlatformTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}
