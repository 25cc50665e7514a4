//! Write-mode run report.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::error::DslError;

/// An error reported while processing one requested constant, optionally
/// followed by the inline removal of that constant's previous file.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub error: DslError,
    /// Display path of the file removed directly under the error line.
    pub removed: Option<PathBuf>,
}

impl ErrorEvent {
    pub fn new(error: DslError) -> Self {
        Self {
            error,
            removed: None,
        }
    }
}

/// Everything a write-mode run reports, in protocol order.
#[derive(Debug, Default)]
pub struct DslReport {
    /// Suppress per-write lines (banners and blank lines are kept).
    pub quiet: bool,
    /// Errors in request order, with inline removals for targeted runs.
    pub errors: Vec<ErrorEvent>,
    /// Written file display paths, ascending.
    pub written: Vec<PathBuf>,
    /// Stale removals reported under the banner, ascending display paths.
    pub stale_removed: Vec<PathBuf>,
}

impl DslReport {
    /// Exit code for the run; errors map to the configured error code.
    pub fn exit_code(&self, error_exit_code: i32) -> i32 {
        if self.errors.is_empty() {
            0
        } else {
            error_exit_code
        }
    }
}

impl Report for DslReport {
    fn render(&self, out: &mut dyn Output) {
        out.line("Compiling DSL RBI files...");
        out.blank();

        for event in &self.errors {
            out.line(&format!("Error: {}", event.error));
            if let Some(path) = &event.removed {
                out.line(&format!("-- Removing: {}", path.display()));
            }
        }

        if !self.quiet {
            for path in &self.written {
                out.line(&format!("Wrote: {}", path.display()));
            }
        }

        if !self.stale_removed.is_empty() {
            out.blank();
            out.line("Removing stale RBI files...");
            for path in &self.stale_removed {
                out.line(&format!("-- Removing: {}", path.display()));
            }
        }

        if !self.errors.is_empty() {
            return;
        }

        if self.written.is_empty() && self.stale_removed.is_empty() {
            out.line("No classes/modules can be matched for RBI generation.");
            out.line("Please check that the requested classes/modules include processable DSL methods.");
        } else {
            out.blank();
            out.line("Done");
            out.line("All operations performed in working directory.");
            out.line("Please review changes and commit them.");
        }
    }
}
