//! NDJSON rendering: one JSON object per line.
//!
//! The first line is the export metadata (repo label, revisions, generation
//! timestamp); every following line is one annotated record. Line-oriented
//! JSON keeps the output streamable into `jq` and log pipelines.

use super::ExportMeta;
use crate::diff::AnnotatedLine;
use crate::error::{DifflameError, Result};
use std::io::Write;

/// Render export metadata plus records as NDJSON.
pub fn render<W: Write>(
    meta: &ExportMeta,
    records: &[AnnotatedLine],
    writer: &mut W,
) -> Result<()> {
    writeln!(writer, "{}", to_line(meta)?).map_err(super::write_error)?;

    for record in records {
        writeln!(writer, "{}", to_line(record)?).map_err(super::write_error)?;
    }

    Ok(())
}

fn to_line<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value)
        .map_err(|e| DifflameError::UserError(format!("failed to serialize record to JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blame::BlameRecord;
    use crate::diff::DiffLineKind;

    #[test]
    fn emits_meta_then_one_object_per_record() {
        let meta = ExportMeta::new("repo".to_string(), "r1", "r2");
        let records = vec![
            AnnotatedLine {
                kind: DiffLineKind::Deletion,
                text: "-old".to_string(),
                before_line: Some(2),
                after_line: None,
                blame: Some(BlameRecord {
                    commit_hash: "0e2b5b3d".to_string(),
                    author: "Mael Kim".to_string(),
                    datetime: "2019-11-04 23:04:00 +0900".to_string(),
                    line_number: 2,
                    content: "old".to_string(),
                }),
            },
            AnnotatedLine {
                kind: DiffLineKind::Other,
                text: String::new(),
                before_line: None,
                after_line: None,
                blame: None,
            },
        ];

        let mut out = Vec::new();
        render(&meta, &records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let meta_value: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(meta_value["label"], "repo");
        assert_eq!(meta_value["revision_1"], "r1");
        assert!(meta_value["generated_at"].is_string());

        let record_value: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(record_value["kind"], "deletion");
        assert_eq!(record_value["before_line"], 2);
        assert_eq!(record_value["blame"]["commit_hash"], "0e2b5b3d");
        // Absent numbers are omitted, not null
        assert!(record_value.get("after_line").is_none());

        let plain_value: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert!(plain_value.get("blame").is_none());
    }
}
