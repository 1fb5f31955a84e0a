//! # ecslint_checker
//!
//! Checker capability contract for ecslint.
//!
//! This crate provides:
//! - The value types a check run produces (`Diagnostic`, `FileDiff`,
//!   `CheckResult`)
//! - The `Sniff` and `Fixer` capability traits
//! - Sequential file processors implementing the pipeline contract
//! - The `Configuration` value object passed through a run
//!
//! ## Example
//!
//! ```rust,ignore
//! use ecslint_checker::{FileProcessor, FixerProcessor};
//!
//! let mut processor = FixerProcessor::new();
//! processor.register(Box::new(MyFixer));
//!
//! let fixed = processor.process_file_to_string("src/file.php".as_ref())?;
//! ```

mod checker;
mod configuration;
mod diagnostic;
mod error;
mod processor;

pub use checker::{Fixer, Sniff};
pub use configuration::Configuration;
pub use diagnostic::{CheckResult, Diagnostic, FileDiff};
pub use error::ProcessorError;
pub use processor::{FileProcessor, FixerProcessor, SniffProcessor};
