//! Verify-mode run report.

use std::path::PathBuf;

use super::output::{Output, Report};
use crate::error::DslError;
use crate::verify::Diff;

/// Everything a verify run reports. The diff carries display paths.
#[derive(Debug, Default)]
pub struct VerifyReport {
    /// Resolution and generator errors, in request order.
    pub errors: Vec<DslError>,
    /// The run aborted before a diff could be computed (registry failure).
    pub aborted: bool,
    pub diff: Diff,
}

impl VerifyReport {
    pub fn exit_code(&self) -> i32 {
        if self.errors.is_empty() && !self.aborted && self.diff.is_empty() {
            0
        } else {
            1
        }
    }
}

impl Report for VerifyReport {
    fn render(&self, out: &mut dyn Output) {
        out.line("Checking for out-of-date RBIs...");
        out.blank();

        for error in &self.errors {
            out.line(&format!("Error: {}", error));
        }
        if self.aborted {
            return;
        }
        out.blank();

        if self.diff.is_empty() {
            out.line("Nothing to do, all RBIs are up-to-date.");
            return;
        }

        out.line("RBI files are out-of-date. In your development environment, please run:");
        out.line("  `sago dsl`");
        out.line("Once it is complete, be sure to commit and push any changes");
        out.blank();
        out.line("Reason:");
        category(out, "added", &self.diff.added);
        category(out, "removed", &self.diff.removed);
        category(out, "changed", &self.diff.changed);
    }
}

fn category(out: &mut dyn Output, label: &str, paths: &[PathBuf]) {
    if paths.is_empty() {
        return;
    }
    out.line(&format!("  File(s) {}:", label));
    for path in paths {
        out.line(&format!("  - {}", path.display()));
    }
}
