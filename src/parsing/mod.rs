//! Readers for the two input tables.
//!
//! - **Description tables**: tab-separated `profile_id .. .. description` lookups
//! - **HMMER3 `--tblout` files**: whitespace-delimited per-sequence hit tables
//!
//! Both readers accept plain text or gzip/bgzip compressed files. Only the
//! tblout reader accepts `-` for standard input.
//!
//! ## Example
//!
//! ```rust,no_run
//! use hmm_besthit::parsing::descriptions::DescriptionTable;
//! use hmm_besthit::parsing::tblout::TbloutReader;
//! use std::path::Path;
//!
//! let descriptions = DescriptionTable::load(Path::new("TIGRFAMs_INFO.tsv")).unwrap();
//! for record in TbloutReader::open(Path::new("hits.tblout")).unwrap() {
//!     let record = record.unwrap();
//!     println!("{}\t{}", record.query_id, descriptions.get(&record.profile_id));
//! }
//! ```

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use thiserror::Error;

pub mod descriptions;
pub mod tblout;

/// Path that selects standard input instead of a file
pub const STDIN_PATH: &str = "-";

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Cannot open '{}': {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid bit score on line {line}: '{value}'")]
    MalformedScore { line: usize, value: String },

    #[error("Line {line} has {found} fields, expected at least {expected}")]
    ShortRecord {
        line: usize,
        found: usize,
        expected: usize,
    },
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open an input table for line-by-line reading.
///
/// `-` reads standard input; anything else goes through [`open_file`].
///
/// # Errors
///
/// Returns `ParseError::InputNotFound` if the file cannot be opened.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(BufReader::new(std::io::stdin())));
    }
    open_file(path)
}

/// Open a file on disk for line-by-line reading.
///
/// Files ending in `.gz` or `.bgz` are decompressed on the fly; bgzip output
/// is a series of gzip members, so a multi-member decoder is used for both.
///
/// # Errors
///
/// Returns `ParseError::InputNotFound` if the file cannot be opened.
pub fn open_file(path: &Path) -> Result<Box<dyn BufRead>, ParseError> {
    let file = std::fs::File::open(path).map_err(|source| ParseError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    if is_gzipped(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
