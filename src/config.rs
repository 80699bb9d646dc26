//
// config.rs
// Dicom-Scanner-rs
//
// Runtime options for a scan, filled from the command line.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::PathBuf;

/// Output file name, resolved against the working directory of the process.
pub const DEFAULT_OUTPUT_FILE: &str = "input.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Visit dot-prefixed series directories and files too.
    /// Off by default, matching a plain `*` glob.
    pub include_hidden: bool,
    pub output: PathBuf,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            include_hidden: false,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

impl ScanConfig {
    pub fn include_hidden(mut self, enabled: bool) -> Self {
        self.include_hidden = enabled;
        self
    }

    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Whether a directory entry with this name takes part in the scan.
    pub fn should_visit(&self, name: &str) -> bool {
        self.include_hidden || !name.starts_with('.')
    }
}
