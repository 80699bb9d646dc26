//
// json.rs
// Dicom-Scanner-rs
//
// Writes the study index as stable, pretty-printed JSON and reads it back.
//
// Thales Matheus Mendonça Santos - November 2025

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::error::{Result, ScanError};
use crate::models::StudyIndex;

/// Render the index with sorted keys and 4-space indentation.
///
/// Keys are sorted explicitly so the output is byte-identical for identical
/// input whether or not serde_json's `preserve_order` feature is enabled.
pub fn to_json_string(index: &StudyIndex) -> Result<String> {
    let value = sort_keys(serde_json::to_value(index)?);

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;

    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

// Rebuild every object with its entries inserted in key order. An insertion
// ordered map then iterates sorted, and a BTreeMap is sorted anyway.
fn sort_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(sort_keys).collect()),
        other => other,
    }
}

/// Write the index to `output`, replacing any previous file.
pub fn write_index(index: &StudyIndex, output: &Path) -> Result<()> {
    let json_string = to_json_string(index)?;
    fs::write(output, json_string).map_err(|source| ScanError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Load an index previously written by [`write_index`].
pub fn read_index(input: &Path) -> Result<StudyIndex> {
    let text = fs::read_to_string(input).map_err(|source| ScanError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InstanceRecord, SeriesRecord, StudyRecord, TagValue};
    use tempfile::tempdir;

    fn sample() -> StudyIndex {
        StudyIndex {
            study: StudyRecord {
                description: "Hirn ß".into(),
                series: vec![SeriesRecord {
                    description: "T1".into(),
                    number: Some(TagValue::Integer(1)),
                    instance: vec![InstanceRecord {
                        number: Some(TagValue::Integer(1)),
                        filename: "study/seriesA/f1".into(),
                    }],
                }],
            },
        }
    }

    #[test]
    fn output_is_sorted_and_indented_with_four_spaces() {
        let json = to_json_string(&sample()).unwrap();
        let expected = r#"{
    "study": {
        "description": "Hirn ß",
        "series": [
            {
                "description": "T1",
                "instance": [
                    {
                        "filename": "study/seriesA/f1",
                        "number": 1
                    }
                ],
                "number": 1
            }
        ]
    }
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn nested_objects_are_reordered_by_key() {
        let value = serde_json::json!({
            "zeta": [{"number": 2, "filename": "b"}],
            "alpha": {"series": [], "description": "x"}
        });
        let sorted = sort_keys(value);

        let top: Vec<&String> = sorted.as_object().unwrap().keys().collect();
        assert_eq!(top, ["alpha", "zeta"]);
        let inner: Vec<&String> = sorted["alpha"].as_object().unwrap().keys().collect();
        assert_eq!(inner, ["description", "series"]);
        let item: Vec<&String> = sorted["zeta"][0].as_object().unwrap().keys().collect();
        assert_eq!(item, ["filename", "number"]);
    }

    #[test]
    fn empty_series_list_is_written_inline() {
        let index = StudyIndex {
            study: StudyRecord::default(),
        };
        let json = to_json_string(&index).unwrap();
        assert!(json.contains(r#""description": "NoStudyDescription""#));
        assert!(json.contains(r#""series": []"#));
    }

    #[test]
    fn written_index_reads_back_equal() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("input.json");

        write_index(&sample(), &path).unwrap();
        let first = fs::read(&path).unwrap();
        assert_eq!(read_index(&path).unwrap(), sample());

        write_index(&sample(), &path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn reading_missing_index_reports_the_path() {
        let dir = tempdir().unwrap();
        let err = read_index(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ScanError::Read { .. }));
    }
}
