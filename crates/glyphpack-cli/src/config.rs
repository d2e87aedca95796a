//! Export configuration.

use std::path::PathBuf;

/// Atlas read when no file is given on the command line.
pub const DEFAULT_SOURCE: &str = "assets/characters.png";

/// Where to read the atlas from and where to write the rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Source image path.
    pub source: PathBuf,
    /// Output file; `None` writes to stdout.
    pub output: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output: None,
        }
    }
}

impl ExportConfig {
    /// Build a config from optional command-line values.
    pub fn from_args(file: Option<&str>, output: Option<&str>) -> Self {
        Self {
            source: file.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_SOURCE)),
            output: output.map(PathBuf::from),
        }
    }
}
