//! Delimited (CSV/TSV) rendering.

use crate::diff::AnnotatedLine;
use crate::error::Result;
use std::io::Write;

const HEADER: [&str; 7] = [
    "before", "after", "kind", "commit", "author", "datetime", "text",
];

/// Render annotated records as delimited rows, one record per line, with a
/// header row. Fields that contain the delimiter, quotes, or newlines are
/// quoted CSV-style.
pub fn render<W: Write>(records: &[AnnotatedLine], writer: &mut W, delimiter: char) -> Result<()> {
    write_row(writer, delimiter, &HEADER.map(String::from))?;

    for record in records {
        let (commit, author, datetime) = match &record.blame {
            Some(blame) => (
                blame.commit_hash.clone(),
                blame.author.clone(),
                blame.datetime.clone(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        let fields = [
            record
                .before_line
                .map(|n| n.to_string())
                .unwrap_or_default(),
            record.after_line.map(|n| n.to_string()).unwrap_or_default(),
            super::kind_label(record.kind).to_string(),
            commit,
            author,
            datetime,
            record.text.clone(),
        ];
        write_row(writer, delimiter, &fields)?;
    }

    Ok(())
}

fn write_row<W: Write>(writer: &mut W, delimiter: char, fields: &[String; 7]) -> Result<()> {
    let row = fields
        .iter()
        .map(|field| escape_field(field, delimiter))
        .collect::<Vec<_>>()
        .join(&delimiter.to_string());
    writeln!(writer, "{}", row).map_err(super::write_error)
}

/// Quote a field if it contains the delimiter, a quote, or a line break;
/// embedded quotes are doubled.
fn escape_field(field: &str, delimiter: char) -> String {
    if field.contains(delimiter) || field.contains('"') || field.contains('\n') || field.contains('\r')
    {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
