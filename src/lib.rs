//
// lib.rs
// Dicom-Scanner-rs
//
// Exposes the crate's modules and re-exports the CLI entry point for both binary and library consumers.
//
// Thales Matheus Mendonça Santos - November 2025

// Leaf to root: tag access, per-file reader, collectors, serialization, CLI glue.
pub mod cli;
pub mod config;
pub mod dicom_access;
pub mod error;
pub mod json;
pub mod metadata;
pub mod models;
pub mod scanner;

pub use cli::{run as run_cli, Cli};
pub use config::ScanConfig;
pub use error::ScanError;
pub use metadata::{DicomTagReader, InstanceTags, TagReader};
pub use models::{InstanceRecord, ScanOutcome, SeriesRecord, StudyIndex, StudyRecord, TagValue};
pub use scanner::{scan_study, Scanner};
