use std::path::Path;

use dicom::dictionary_std::tags;
use dicom::object::{DefaultDicomObject, OpenFileOptions};

use crate::dicom_access::ElementAccess;
use crate::error::{Result, ScanError};
use crate::models::TagValue;

/// The handful of header fields the index needs from each instance.
///
/// Every field is optional: the format does not guarantee any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstanceTags {
    pub study_description: Option<String>,
    pub series_description: Option<String>,
    pub series_number: Option<TagValue>,
    pub instance_number: Option<TagValue>,
}

pub fn extract_instance_tags<T: ElementAccess>(obj: &T) -> InstanceTags {
    InstanceTags {
        study_description: obj.element_str(tags::STUDY_DESCRIPTION),
        series_description: obj.element_str(tags::SERIES_DESCRIPTION),
        series_number: obj
            .element_str(tags::SERIES_NUMBER)
            .map(|s| TagValue::parse(&s)),
        instance_number: obj
            .element_str(tags::INSTANCE_NUMBER)
            .map(|s| TagValue::parse(&s)),
    }
}

/// Source of per-file header fields. The scanner only talks to this trait.
pub trait TagReader {
    fn read_tags(&self, path: &Path) -> Result<InstanceTags>;
}

/// Reads DICOM Part 10 files, stopping before Pixel Data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DicomTagReader;

impl TagReader for DicomTagReader {
    fn read_tags(&self, path: &Path) -> Result<InstanceTags> {
        let obj: DefaultDicomObject = OpenFileOptions::new()
            .read_until(tags::PIXEL_DATA)
            .open_file(path)
            .map_err(|source| ScanError::ReadTags {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(extract_instance_tags(&obj))
    }
}
