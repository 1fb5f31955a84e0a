//! # ecslint_report
//!
//! Report aggregation and output formatters for ecslint.
//!
//! This crate provides:
//! - Per-file aggregation of a run's diagnostics and applied fixes
//! - The checkstyle XML formatter
//! - A JSON formatter
//! - The exit-status resolver seam
//!
//! ## Example
//!
//! ```rust,ignore
//! use ecslint_report::{CheckstyleFormatter, OutputFormatter};
//!
//! let formatter = CheckstyleFormatter::default();
//! let status = formatter.report(&result, &configuration, &mut std::io::stdout())?;
//! std::process::exit(status);
//! ```

mod aggregate;
mod exit_status;
pub mod formatters;

pub use aggregate::{FileReport, aggregate};
pub use exit_status::{DefaultExitStatusResolver, ExitStatusResolver};
pub use formatters::{CheckstyleFormatter, JsonFormatter, OutputFormatter};

pub use ecslint_checker::{CheckResult, Configuration, Diagnostic, FileDiff};
