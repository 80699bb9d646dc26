//
// error.rs
// Dicom-Scanner-rs
//
// Error taxonomy for the scan: fatal study-root failures plus the per-entry failures that are downgraded to skips.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    /// The study root given on the command line cannot be used. Always fatal.
    #[error("cannot access study data directory {path:?}: {source}")]
    StudyRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path:?} is not a directory")]
    NotADirectory { path: PathBuf },

    #[error("cannot list directory {path:?}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The file could not be parsed as a DICOM Part 10 file.
    #[error("error reading file as DICOM {path:?}: {source}")]
    ReadTags {
        path: PathBuf,
        #[source]
        source: dicom::object::ReadError,
    },

    #[error("failed to serialize study index: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The offending path, when the error is tied to one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ScanError::StudyRoot { path, .. }
            | ScanError::NotADirectory { path }
            | ScanError::ListDirectory { path, .. }
            | ScanError::ReadTags { path, .. }
            | ScanError::Write { path, .. }
            | ScanError::Read { path, .. } => Some(path.as_path()),
            ScanError::Serialize(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScanError>;
