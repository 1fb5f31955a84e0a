//! Harness error types.

use thiserror::Error;

use ecslint_checker::ProcessorError;

use crate::fixture::SplitError;

/// Errors a fixture test can fail with.
///
/// Each value is fatal to the test that raised it and carries enough
/// context to locate the offending fixture.
#[derive(Debug, Error)]
pub enum TestingError {
    /// Neither a fixer nor a sniff is registered.
    #[error("no fixers nor sniffs were found, register them in your config")]
    NoCheckersRegistered,

    /// The fixture file is malformed.
    #[error("fixture \"{path}\": {source}")]
    Format {
        /// Fixture path as given.
        path: String,
        /// What was wrong with the file.
        source: SplitError,
    },

    /// Processed content differs from the expected segment.
    #[error(
        "processed content of \"{path}\" does not match the expected segment\n\
         --- expected\n{expected}--- actual\n{actual}"
    )]
    ContentMismatch {
        /// Fixture path relative to the working directory.
        path: String,
        /// Expected content.
        expected: String,
        /// Content the processor produced.
        actual: String,
    },

    /// Diagnostic count differs from the expected count.
    #[error("there should be {expected} errors in \"{path}\", {actual} found")]
    DiagnosticCount {
        /// Checked file path relative to the working directory.
        path: String,
        /// Expected number of diagnostics.
        expected: usize,
        /// Number actually reported.
        actual: usize,
    },

    /// Processor failure.
    #[error(transparent)]
    Processor(#[from] ProcessorError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
