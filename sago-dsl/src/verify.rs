//! Drift detection between the desired set and the live tree.

use std::collections::BTreeSet;
use std::path::PathBuf;

use eyre::Result;
use sago_core::OutputTree;

/// Disjoint classification of drifted paths, each set in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diff {
    /// Desired but absent from the live tree.
    pub added: Vec<PathBuf>,
    /// Present live but no longer desired.
    pub removed: Vec<PathBuf>,
    /// Present in both with differing content.
    pub changed: Vec<PathBuf>,
}

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Classify drift between a scratch tree holding the desired output and the
/// live tree. The live tree is only read, never mutated.
///
/// `removed_scope`, when given, restricts the Removed category to those
/// paths (targeted verify).
pub fn diff_trees(
    scratch: &dyn OutputTree,
    live: &dyn OutputTree,
    removed_scope: Option<&BTreeSet<PathBuf>>,
) -> Result<Diff> {
    let mut diff = Diff::default();

    let desired_paths = scratch.list()?;
    for path in &desired_paths {
        match live.read(path)? {
            None => diff.added.push(path.clone()),
            Some(live_content) => {
                if scratch.read(path)?.as_deref() != Some(live_content.as_str()) {
                    diff.changed.push(path.clone());
                }
            }
        }
    }

    let desired: BTreeSet<PathBuf> = desired_paths.into_iter().collect();
    for path in live.list()? {
        if desired.contains(&path) {
            continue;
        }
        if let Some(scope) = removed_scope {
            if !scope.contains(&path) {
                continue;
            }
        }
        diff.removed.push(path);
    }

    Ok(diff)
}
