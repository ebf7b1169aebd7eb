//! Parser for profile description tables.
//!
//! Format: tab-separated, one profile per line. Column 1 is the profile
//! identifier and column 4 its description; other columns are ignored.
//! This matches the layout of the TIGRFAM `INFO` tables and the COG
//! definition files distributed with them.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use tracing::debug;

use crate::parsing::{open_file, ParseError};

/// Column holding the profile identifier
const KEY_COLUMN: usize = 0;

/// Column holding the human-readable description
const DESCRIPTION_COLUMN: usize = 3;

/// Lookup from profile identifier to description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionTable {
    descriptions: HashMap<String, String>,
}

impl DescriptionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a description table from a file (plain or gzip compressed).
    ///
    /// `-` is an ordinary file name here, not standard input.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InputNotFound` if the file cannot be opened,
    /// `ParseError::Io` if reading fails, or `ParseError::ShortRecord` if a
    /// line has fewer than 4 fields.
    pub fn load(path: &Path) -> Result<Self, ParseError> {
        let table = Self::from_reader(open_file(path)?)?;
        debug!(
            "Loaded {} profile descriptions from {}",
            table.len(),
            path.display()
        );
        Ok(table)
    }

    /// Parse description table text
    ///
    /// # Errors
    ///
    /// Returns `ParseError::ShortRecord` if a line has fewer than 4 fields.
    pub fn from_text(text: &str) -> Result<Self, ParseError> {
        Self::from_reader(text.as_bytes())
    }

    /// Read a description table from any buffered source.
    ///
    /// Later lines overwrite earlier ones for the same identifier.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` if reading fails, or `ParseError::ShortRecord`
    /// if a line has fewer than 4 fields.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, ParseError> {
        let mut table = Self::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();
            let fields: Vec<&str> = line.split('\t').collect();
            if fields.len() <= DESCRIPTION_COLUMN {
                return Err(ParseError::ShortRecord {
                    line: i + 1,
                    found: fields.len(),
                    expected: DESCRIPTION_COLUMN + 1,
                });
            }

            let key = fields[KEY_COLUMN];
            if let Some(previous) = table.insert(key, fields[DESCRIPTION_COLUMN]) {
                debug!(
                    "Duplicate description for '{key}' on line {}, replacing '{previous}'",
                    i + 1
                );
            }
        }

        Ok(table)
    }

    /// Insert a description, returning the one it replaced
    pub fn insert(
        &mut self,
        profile_id: impl Into<String>,
        description: impl Into<String>,
    ) -> Option<String> {
        self.descriptions
            .insert(profile_id.into(), description.into())
    }

    /// Description for a profile, or an empty string if it is not listed
    #[must_use]
    pub fn get(&self, profile_id: &str) -> &str {
        self.descriptions
            .get(profile_id)
            .map_or("", String::as_str)
    }

    #[cfg(test)]
    #[must_use]
    pub fn contains(&self, profile_id: &str) -> bool {
        self.descriptions.contains_key(profile_id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptions.is_empty()
    }
}
