//! Fixture-driven checker test harness.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use ecslint_checker::{Configuration, FileProcessor, FixerProcessor, SniffProcessor};

use crate::error::TestingError;
use crate::fixture::Fixture;

/// Drives registered checkers against fixture files.
///
/// Every entry point guards that at least one checker is registered, runs
/// the processors, then asserts. Each call is one independent test; a
/// failure does not affect other calls.
pub struct CheckerTester {
    fixer_processor: FixerProcessor,
    sniff_processor: SniffProcessor,
}

impl CheckerTester {
    /// Creates a tester around the two configured processors.
    pub fn new(fixer_processor: FixerProcessor, sniff_processor: SniffProcessor) -> Self {
        Self {
            fixer_processor,
            sniff_processor,
        }
    }

    /// Asserts that the fixture's input segment is rewritten into its
    /// expected segment, byte for byte.
    ///
    /// The rewriting capability is the fixer processor when one is
    /// registered, otherwise the sniff processor's pass-through.
    pub fn assert_fixture(&self, fixture_path: &Path) -> Result<(), TestingError> {
        self.ensure_checkers_registered()?;

        debug!("Running fixture {}", fixture_path.display());
        let fixture = Fixture::from_path(fixture_path)?;
        let input_file = scratch_file(&fixture.input)?;

        let actual = if !self.fixer_processor.checkers().is_empty() {
            self.fixer_processor.process_file_to_string(input_file.path())?
        } else {
            self.sniff_processor.process_file_to_string(input_file.path())?
        };

        assert_content_equals(&fixture.expected, &actual, fixture_path)
    }

    /// Asserts that the file is already clean: no processor rewrites it
    /// and the sniffs report nothing.
    pub fn assert_clean(&self, path: &Path) -> Result<(), TestingError> {
        self.ensure_checkers_registered()?;

        debug!("Asserting {} is clean", path.display());
        let content = fs::read_to_string(path)?;

        let processors: [&dyn FileProcessor; 2] = [&self.fixer_processor, &self.sniff_processor];
        for processor in processors {
            if processor.checkers().is_empty() {
                continue;
            }

            let processed = processor.process_file_to_string(path)?;
            assert_content_equals(&content, &processed, path)?;
        }

        if !self.sniff_processor.checkers().is_empty() {
            let result = self
                .sniff_processor
                .process_file(path, &Configuration::default())?;
            if result.error_count() != 0 {
                return Err(TestingError::DiagnosticCount {
                    path: relative_to_cwd(path),
                    expected: 0,
                    actual: result.error_count(),
                });
            }
        }

        Ok(())
    }

    /// Asserts that checking the file yields exactly `expected`
    /// diagnostics.
    pub fn assert_diagnostic_count(
        &self,
        path: &Path,
        expected: usize,
    ) -> Result<(), TestingError> {
        self.ensure_checkers_registered()?;

        debug!("Counting diagnostics in {}", path.display());
        let result = self
            .sniff_processor
            .process_file(path, &Configuration::default())?;

        let actual = result.error_count();
        if actual != expected {
            return Err(TestingError::DiagnosticCount {
                path: relative_to_cwd(path),
                expected,
                actual,
            });
        }

        Ok(())
    }

    fn ensure_checkers_registered(&self) -> Result<(), TestingError> {
        let registered =
            self.fixer_processor.checkers().len() + self.sniff_processor.checkers().len();

        if registered == 0 {
            return Err(TestingError::NoCheckersRegistered);
        }

        Ok(())
    }
}

fn assert_content_equals(
    expected: &str,
    actual: &str,
    fixture_path: &Path,
) -> Result<(), TestingError> {
    if expected != actual {
        return Err(TestingError::ContentMismatch {
            path: relative_to_cwd(fixture_path),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    Ok(())
}

/// Renders `path` relative to the working directory for messages.
fn relative_to_cwd(path: &Path) -> String {
    match env::current_dir() {
        Ok(cwd) => path.strip_prefix(&cwd).unwrap_or(path).display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

fn scratch_file(content: &str) -> Result<NamedTempFile, TestingError> {
    let mut file = NamedTempFile::new()?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    Ok(file)
}
