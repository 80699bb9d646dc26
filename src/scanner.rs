//
// scanner.rs
// Dicom-Scanner-rs
//
// Walks a study directory (one level of series directories holding instance files) and folds the readable files into a StudyIndex.
//
// Thales Matheus Mendonça Santos - November 2025

use std::io;
use std::path::Path;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;
use crate::error::{Result, ScanError};
use crate::metadata::{DicomTagReader, InstanceTags, TagReader};
use crate::models::{
    InstanceRecord, ScanOutcome, SeriesRecord, SkippedEntry, StudyIndex, StudyRecord,
    NO_SERIES_DESCRIPTION, NO_STUDY_DESCRIPTION,
};

/// Instances read from one series directory, in enumeration order.
#[derive(Debug, Default)]
pub struct CollectedInstances {
    /// Tags of the first file that parsed. Set once, never overwritten.
    pub header: Option<InstanceTags>,
    pub instances: Vec<InstanceRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// A scanned series directory, ready to be folded into the study.
#[derive(Debug, Default)]
pub struct CollectedSeries {
    /// Tags of the first readable file, kept for study-level fields.
    pub first: Option<InstanceTags>,
    /// `None` when the directory held no readable instance.
    pub record: Option<SeriesRecord>,
    pub skipped: Vec<SkippedEntry>,
}

/// Read every candidate file in `series_dir`.
///
/// Unreadable files are logged and recorded as skipped. Only a directory that
/// cannot be listed at all is an error.
pub fn collect_instances<R: TagReader + ?Sized>(
    reader: &R,
    series_dir: &Path,
    config: &ScanConfig,
) -> Result<CollectedInstances> {
    let mut collected = CollectedInstances::default();

    for entry in sorted_entries(series_dir, config, &mut collected.skipped)? {
        let path = entry.path();
        let tags = match reader.read_tags(path) {
            Ok(tags) => tags,
            Err(err) => {
                warn!("Error reading file as DICOM: {}", path.display());
                debug!("{err}");
                collected.skipped.push(SkippedEntry::from_error(path, &err));
                continue;
            }
        };

        collected.instances.push(InstanceRecord {
            number: tags.instance_number.clone(),
            filename: path.to_string_lossy().into_owned(),
        });
        if collected.header.is_none() {
            collected.header = Some(tags);
        }
    }

    Ok(collected)
}

/// Collect one series directory and derive its record from the first readable file.
pub fn collect_series<R: TagReader + ?Sized>(
    reader: &R,
    series_dir: &Path,
    config: &ScanConfig,
) -> Result<CollectedSeries> {
    let CollectedInstances {
        header,
        instances,
        skipped,
    } = collect_instances(reader, series_dir, config)?;

    let record = match &header {
        Some(first) if !instances.is_empty() => Some(SeriesRecord {
            description: first
                .series_description
                .clone()
                .unwrap_or_else(|| NO_SERIES_DESCRIPTION.to_string()),
            number: first.series_number.clone(),
            instance: instances,
        }),
        _ => None,
    };

    Ok(CollectedSeries {
        first: header,
        record,
        skipped,
    })
}

/// Builds the study index for one study directory.
pub struct Scanner<R = DicomTagReader> {
    reader: R,
    config: ScanConfig,
}

impl Scanner<DicomTagReader> {
    pub fn new(config: ScanConfig) -> Self {
        Self::with_reader(DicomTagReader, config)
    }
}

impl<R: TagReader> Scanner<R> {
    pub fn with_reader(reader: R, config: ScanConfig) -> Self {
        Self { reader, config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Scan `study_dir`. Each top-level entry is a candidate series directory.
    ///
    /// Entries are visited in file-name order so repeated runs over the same
    /// tree give the same index. The only fatal failure is an unusable
    /// `study_dir`; everything below it is skipped and reported.
    pub fn scan(&self, study_dir: &Path) -> Result<ScanOutcome> {
        let mut skipped = Vec::new();
        let entries =
            sorted_entries(study_dir, &self.config, &mut skipped).map_err(|err| match err {
                ScanError::ListDirectory { path, source } => ScanError::StudyRoot {
                    path,
                    source: source.into(),
                },
                ScanError::NotADirectory { path } => ScanError::StudyRoot {
                    path,
                    source: io::Error::other("not a directory"),
                },
                other => other,
            })?;

        let mut description: Option<String> = None;
        let mut series = Vec::new();

        for entry in entries {
            let series_dir = entry.path();
            info!("Scanning: {}", series_dir.display());

            let collected = match collect_series(&self.reader, series_dir, &self.config) {
                Ok(collected) => collected,
                Err(err) => {
                    warn!("Error entering series directory: {}", series_dir.display());
                    debug!("{err}");
                    skipped.push(SkippedEntry::from_error(series_dir, &err));
                    continue;
                }
            };
            skipped.extend(collected.skipped);

            if let (None, Some(first)) = (&description, &collected.first) {
                description = Some(
                    first
                        .study_description
                        .clone()
                        .unwrap_or_else(|| NO_STUDY_DESCRIPTION.to_string()),
                );
            }
            if let Some(record) = collected.record {
                series.push(record);
            }
        }

        let study = StudyRecord {
            description: description.unwrap_or_else(|| NO_STUDY_DESCRIPTION.to_string()),
            series,
        };

        Ok(ScanOutcome {
            index: StudyIndex { study },
            skipped,
        })
    }
}

/// Scan a study directory with the DICOM reader.
pub fn scan_study(study_dir: &Path, config: &ScanConfig) -> Result<ScanOutcome> {
    Scanner::new(config.clone()).scan(study_dir)
}

/// Direct children of `dir`, sorted by file name, hidden names filtered out.
///
/// Failing to open `dir` itself is an error; a child that cannot be inspected
/// is recorded in `skipped` and left out.
fn sorted_entries(
    dir: &Path,
    config: &ScanConfig,
    skipped: &mut Vec<SkippedEntry>,
) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
        match entry {
            Ok(entry) if entry.depth() == 0 => {
                if !entry.file_type().is_dir() {
                    return Err(ScanError::NotADirectory {
                        path: dir.to_path_buf(),
                    });
                }
            }
            Ok(entry) => {
                if config.should_visit(&entry.file_name().to_string_lossy()) {
                    entries.push(entry);
                } else {
                    debug!("Ignoring hidden entry: {}", entry.path().display());
                }
            }
            Err(err) if err.depth() == 0 => {
                return Err(ScanError::ListDirectory {
                    path: dir.to_path_buf(),
                    source: err,
                });
            }
            Err(err) => {
                let path = err.path().unwrap_or(dir).to_path_buf();
                warn!("Cannot inspect entry: {}", path.display());
                skipped.push(SkippedEntry {
                    path,
                    reason: err.to_string(),
                });
            }
        }
    }

    Ok(entries)
}
