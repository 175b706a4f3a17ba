//! PyInstaller build inputs.

use serde::Deserialize;

/// A data file glob bundled into the executable.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataFile {
    /// Source glob relative to the project directory (e.g. `src/*.py`)
    pub source: String,
    /// Destination directory inside the bundle
    pub destination: String,
}

impl DataFile {
    /// Creates a data file mapping.
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Settings for the generated PyInstaller spec file.
///
/// The defaults bundle a Tk application whose entry point is `src/main.py`
/// and keep heavy scientific libraries out of the executable.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PackagerSettings {
    /// Entry point script.
    pub entry_point: String,

    /// Extra module search paths.
    pub pathex: Vec<String>,

    /// Data files bundled next to the code.
    pub datas: Vec<DataFile>,

    /// Modules PyInstaller cannot discover by itself.
    pub hidden_imports: Vec<String>,

    /// Modules kept out of the bundle.
    pub excludes: Vec<String>,

    /// Build a console executable.
    pub console: bool,

    /// Compress the executable with UPX when available.
    pub upx: bool,
}

impl Default for PackagerSettings {
    fn default() -> Self {
        Self {
            entry_point: "src/main.py".into(),
            pathex: vec!["src".into()],
            datas: vec![DataFile::new("src/*.py", "src")],
            hidden_imports: [
                "tkinter",
                "tkinter.ttk",
                "tkinter.messagebox",
                "tkinter.filedialog",
                "tkinter.scrolledtext",
                "argparse",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            excludes: ["matplotlib", "numpy", "pandas", "scipy", "IPython", "jupyter"]
                .into_iter()
                .map(String::from)
                .collect(),
            console: true,
            upx: true,
        }
    }
}
