//
// models.rs
// Dicom-Scanner-rs
//
// Defines the serializable study → series → instance index written to input.json.
//
// Thales Matheus Mendonça Santos - November 2025

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ScanError;

/// Sentinel used when the first readable file carries no StudyDescription.
pub const NO_STUDY_DESCRIPTION: &str = "NoStudyDescription";
/// Sentinel used when the first readable file of a series carries no SeriesDescription.
pub const NO_SERIES_DESCRIPTION: &str = "NoSeriesDescription";

/// Opaque number tag (SeriesNumber, InstanceNumber) as found in the header.
///
/// Integer strings become JSON numbers, anything else is kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagValue {
    Integer(i64),
    Text(String),
}

impl TagValue {
    /// Interpret a raw element string, dropping the space/NUL padding DICOM adds.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim_matches(|c: char| c == '\0' || c.is_whitespace());
        match trimmed.parse::<i64>() {
            Ok(value) => TagValue::Integer(value),
            Err(_) => TagValue::Text(trimmed.to_string()),
        }
    }
}

impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        TagValue::Integer(value)
    }
}

/// Top-level document: `{"study": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyIndex {
    pub study: StudyRecord,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyRecord {
    pub description: String,
    pub series: Vec<SeriesRecord>,
}

impl Default for StudyRecord {
    fn default() -> Self {
        Self {
            description: NO_STUDY_DESCRIPTION.to_string(),
            series: Vec::new(),
        }
    }
}

/// One series directory that yielded at least one readable instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRecord {
    pub description: String,
    pub number: Option<TagValue>,
    pub instance: Vec<InstanceRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceRecord {
    pub number: Option<TagValue>,
    pub filename: String,
}

/// Entry the collectors passed over, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: String,
}

impl SkippedEntry {
    /// Record `err` against the path it names, or `fallback` when it names none.
    pub fn from_error(fallback: &Path, err: &ScanError) -> Self {
        Self {
            path: err.path().unwrap_or(fallback).to_path_buf(),
            reason: err.to_string(),
        }
    }
}

/// Result of a full scan: the index plus everything that was skipped on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    pub index: StudyIndex,
    pub skipped: Vec<SkippedEntry>,
}

impl ScanOutcome {
    pub fn series_count(&self) -> usize {
        self.index.study.series.len()
    }

    pub fn instance_count(&self) -> usize {
        self.index
            .study
            .series
            .iter()
            .map(|series| series.instance.len())
            .sum()
    }
}
