//! Two-segment fixture files.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::TestingError;

/// Errors from splitting a fixture into its segments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    /// No `-----` line was found.
    #[error("no \"-----\" split line found")]
    MissingSplitLine,

    /// More than one `-----` line was found.
    #[error("expected exactly one \"-----\" split line, found {found}")]
    MultipleSplitLines {
        /// How many split lines the file contains.
        found: usize,
    },
}

/// A fixture file's two segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    /// Everything before the split line.
    pub input: String,

    /// Everything after the split line.
    pub expected: String,
}

impl Fixture {
    /// Reads and splits the fixture at `path`.
    pub fn from_path(path: &Path) -> Result<Self, TestingError> {
        let raw = fs::read_to_string(path)?;

        split_fixture(&raw).map_err(|source| TestingError::Format {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Splits `raw` on its single split line.
///
/// The split line is five dashes followed by an optional carriage return
/// and a newline, and must make up a whole line. Both segments are
/// returned byte-for-byte, so joining `input`, the split line and
/// `expected` reproduces `raw`.
pub fn split_fixture(raw: &str) -> Result<Fixture, SplitError> {
    let mut split_lines = Vec::new();
    let mut offset = 0;

    for line in raw.split_inclusive('\n') {
        if line == "-----\n" || line == "-----\r\n" {
            split_lines.push((offset, offset + line.len()));
        }
        offset += line.len();
    }

    match split_lines.as_slice() {
        [] => Err(SplitError::MissingSplitLine),
        [(start, end)] => Ok(Fixture {
            input: raw[..*start].to_string(),
            expected: raw[*end..].to_string(),
        }),
        found => Err(SplitError::MultipleSplitLines { found: found.len() }),
    }
}
