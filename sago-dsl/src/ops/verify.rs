//! Verify-mode drift check.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use eyre::Result;
use sago_app::Application;
use sago_core::{MemoryTree, OutputTree};

use crate::engine::{Engine, GeneratedFile};
use crate::error::DslError;
use crate::generator::GeneratorRegistry;
use crate::reconcile;
use crate::report::VerifyReport;
use crate::resolver::{self, TypeReference};
use crate::verify::{Diff, diff_trees};

/// Options for one verify run.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Requested constants; empty means every type in the snapshot.
    pub constants: Vec<String>,
    pub file_header: bool,
    pub generators: Vec<String>,
    pub exclude_generators: Vec<String>,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            constants: Vec::new(),
            file_header: true,
            generators: Vec::new(),
            exclude_generators: Vec::new(),
        }
    }
}

/// Execute a verify run against the live tree, which is never mutated.
///
/// Generation happens into an in-memory scratch tree; the resulting diff is
/// classified against the live tree. Resolution and generator errors are
/// reported the same way as in write mode but never reclassify the diff.
pub fn run(
    app: &Application,
    registry: &GeneratorRegistry,
    live: &dyn OutputTree,
    opts: &VerifyOptions,
) -> Result<VerifyReport> {
    let selected = match registry.select(&opts.generators, &opts.exclude_generators) {
        Ok(selected) => selected,
        Err(errors) => {
            return Ok(VerifyReport {
                errors,
                aborted: true,
                diff: Diff::default(),
            });
        }
    };

    let targeted = !opts.constants.is_empty();
    let references = resolver::resolve(app, &opts.constants);
    let engine = Engine::new(selected, opts.file_header);

    let mut errors = Vec::new();
    let mut desired: BTreeMap<PathBuf, GeneratedFile> = BTreeMap::new();

    for reference in &references {
        match reference {
            TypeReference::Unresolved { requested, .. } => {
                errors.push(DslError::UnresolvedConstant(requested.clone()));
            }
            TypeReference::Resolved { name, entry, .. } => {
                let (file, faults) = engine.compile(name, entry);
                errors.extend(faults);
                if let Some(file) = file {
                    desired.insert(file.path.clone(), file);
                }
            }
        }
    }

    let mut scratch = MemoryTree::new();
    reconcile::write_desired(&desired, &mut scratch)?;

    let removed_scope: Option<BTreeSet<PathBuf>> = targeted.then(|| {
        references
            .iter()
            .filter_map(TypeReference::derived_path)
            .collect()
    });
    let diff = diff_trees(&scratch, live, removed_scope.as_ref())?;

    Ok(VerifyReport {
        errors,
        aborted: false,
        diff: Diff {
            added: display_all(live, diff.added),
            removed: display_all(live, diff.removed),
            changed: display_all(live, diff.changed),
        },
    })
}

fn display_all(live: &dyn OutputTree, paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.iter().map(|path| live.display_path(path)).collect()
}
