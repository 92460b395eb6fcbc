use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::Enumerate;
use std::path::{Path, PathBuf};

use super::model::Row;
use crate::error::{Result, RosterError};

pub const FIELD_SEPARATOR: char = '|';

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Open a roster file and stream its rows in file order.
///
/// The file handle lives inside the returned reader and is released when the
/// reader is dropped, so callers can stop early without reading the rest.
pub fn open_rows(path: &Path) -> Result<RowReader> {
    let file = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::trace!("opened roster file {}", path.display());

    Ok(RowReader {
        path: path.to_path_buf(),
        lines: BufReader::new(file).lines().enumerate(),
    })
}

/// Read every row of a roster file into memory.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let rows = open_rows(path)?.collect::<Result<Vec<_>>>()?;
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Row streaming
// ---------------------------------------------------------------------------

/// Iterator over the parsed rows of one roster file.
///
/// Every line is a row: a blank line is malformed, not skipped.
pub struct RowReader {
    path: PathBuf,
    lines: Enumerate<Lines<BufReader<File>>>,
}

impl Iterator for RowReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, line) = self.lines.next()?;
        let line_no = idx as u64 + 1;
        let row = line
            .map_err(|source| RosterError::Read {
                path: self.path.clone(),
                line: line_no,
                source,
            })
            .and_then(|text| parse_line(&self.path, line_no, &text));
        Some(row)
    }
}

/// Split one line into a [`Row`], failing on a wrong field count.
/// Trailing whitespace is dropped before splitting.
fn parse_line(path: &Path, line: u64, text: &str) -> Result<Row> {
    let fields: Vec<&str> = text.trim_end().split(FIELD_SEPARATOR).collect();

    let &[first_name, last_name, house, advisor, cohort_or_flag] = fields.as_slice() else {
        return Err(RosterError::MalformedLine {
            path: path.to_path_buf(),
            line,
            fields: fields.len(),
        });
    };

    let row = Row {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        house: house.to_string(),
        advisor: advisor.to_string(),
        cohort_or_flag: cohort_or_flag.to_string(),
    };
    log::trace!("line {line}: {}", row.full_name());
    Ok(row)
}
