//! # ecslint_testing
//!
//! Fixture-based regression harness for ecslint checkers.
//!
//! This crate provides:
//! - The two-segment fixture file splitter
//! - The `CheckerTester` harness driving registered checkers against
//!   fixtures
//! - A `Once`-guarded process-wide test bootstrap
//!
//! ## Fixture format
//!
//! A fixture is one text file holding the checker input and the expected
//! output, separated by a line of five dashes:
//!
//! ```text
//! $value = 1 ;
//! -----
//! $value = 1;
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use ecslint_testing::CheckerTester;
//!
//! let tester = CheckerTester::new(fixer_processor, sniff_processor);
//! tester.assert_fixture("tests/fixtures/spacing.php.inc".as_ref())?;
//! ```

pub mod bootstrap;
mod error;
mod fixture;
mod harness;

pub use error::TestingError;
pub use fixture::{Fixture, SplitError, split_fixture};
pub use harness::CheckerTester;
