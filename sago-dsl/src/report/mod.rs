//! Report data structures for pipeline runs.
//!
//! Runs collect what happened into report values; rendering to an
//! [`Output`] target happens afterwards, so the console protocol stays in
//! one place and tests can capture transcripts verbatim.

mod dsl;
mod output;
mod verify;

pub use dsl::{DslReport, ErrorEvent};
pub use output::{Output, RecordedOutput, Report, TerminalOutput};
pub use verify::VerifyReport;
