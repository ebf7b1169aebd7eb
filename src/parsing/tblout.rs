//! Streaming parser for HMMER3 `--tblout` per-sequence hit tables.
//!
//! Columns are separated by runs of spaces. Lines starting with `#` are
//! headers or trailing run metadata and are skipped. Of the 18+ columns only
//! four are read:
//!
//! | Column | Field |
//! |--------|-------|
//! | 1 | target (query sequence) name |
//! | 3 | query (profile) name |
//! | 5 | full-sequence E-value |
//! | 6 | full-sequence bit score |

use std::io::{BufRead, Lines};
use std::path::Path;

use crate::core::record::TbloutRecord;
use crate::parsing::{open_input, ParseError};

const QUERY_COLUMN: usize = 0;
const PROFILE_COLUMN: usize = 2;
const EVALUE_COLUMN: usize = 4;
const SCORE_COLUMN: usize = 5;

/// Minimum number of columns a data line must have
pub const MIN_FIELDS: usize = SCORE_COLUMN + 1;

/// Split a line into fields, treating every run of whitespace as one delimiter.
///
/// Leading whitespace is itself a run and so produces an empty first field;
/// an empty line is a single empty field.
fn normalize_fields(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    if line.is_empty() || line.starts_with(char::is_whitespace) {
        fields.push("");
    }
    fields.extend(line.split_whitespace());
    fields
}

/// Parse one line of tblout text.
///
/// Returns `Ok(None)` for comment lines. Blank lines are data lines with a
/// single empty field and fail like any other short line.
///
/// # Errors
///
/// Returns `ParseError::ShortRecord` if the line has fewer than 6 columns, or
/// `ParseError::MalformedScore` if the bit score is not a number.
pub fn parse_tblout_line(text: &str, line: usize) -> Result<Option<TbloutRecord>, ParseError> {
    let text = text.trim_end();
    if text.starts_with('#') {
        return Ok(None);
    }

    let fields = normalize_fields(text);
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::ShortRecord {
            line,
            found: fields.len(),
            expected: MIN_FIELDS,
        });
    }

    let score = fields[SCORE_COLUMN];
    let bit_score: f64 = score.parse().map_err(|_| ParseError::MalformedScore {
        line,
        value: score.to_string(),
    })?;

    Ok(Some(
        TbloutRecord::new(
            fields[QUERY_COLUMN],
            fields[PROFILE_COLUMN],
            fields[EVALUE_COLUMN],
            bit_score,
        )
        .with_line(line),
    ))
}

/// Lazy, single-pass reader over tblout records.
///
/// Yields one `TbloutRecord` per data line in file order. The first error
/// is yielded as-is; callers are expected to stop there.
pub struct TbloutReader<R> {
    lines: Lines<R>,
    line_num: usize,
}

impl TbloutReader<Box<dyn BufRead>> {
    /// Open a tblout file (plain, gzip compressed, or `-` for stdin)
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InputNotFound` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self, ParseError> {
        Ok(Self::new(open_input(path)?))
    }
}

impl<R: BufRead> TbloutReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_num: 0,
        }
    }

    /// Number of lines consumed so far, comments included
    #[cfg(test)]
    #[must_use]
    pub fn lines_read(&self) -> usize {
        self.line_num
    }
}

impl<R: BufRead> Iterator for TbloutReader<R> {
    type Item = Result<TbloutRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_num += 1;

            match parse_tblout_line(&line, self.line_num) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
