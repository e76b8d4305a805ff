use crate::cell::decode_cell;
use crate::record::PathRecord;
use crate::{Error, Result};
use std::path::Path;

/// Splits one row on tabs. A trailing `\r` (CRLF input) is dropped first.
pub fn split_row(line: &str) -> Vec<&str> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split('\t').collect()
}

/// Parses one non-empty row. `line_no` is 1-based.
pub fn parse_line(line_no: usize, line: &str) -> Result<PathRecord> {
    let cells = split_row(line).into_iter().map(decode_cell).collect();
    PathRecord::from_cells(line_no, cells)
}

/// Parses a whole dump. Blank lines are skipped; the first malformed row aborts the parse.
pub fn parse_records(text: &str) -> Result<Vec<PathRecord>> {
    let mut out = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim_end_matches('\r').is_empty() {
            continue;
        }
        out.push(parse_line(idx + 1, line)?);
    }
    tracing::debug!(records = out.len(), "parsed path tree dump");
    Ok(out)
}

/// Reads and parses a dump file.
pub fn read_records(path: impl AsRef<Path>) -> Result<Vec<PathRecord>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(&text)
}
