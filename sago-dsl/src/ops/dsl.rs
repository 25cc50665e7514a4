//! Write-mode DSL compilation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use eyre::Result;
use sago_app::Application;
use sago_core::OutputTree;

use crate::engine::{Engine, GeneratedFile};
use crate::error::DslError;
use crate::generator::GeneratorRegistry;
use crate::reconcile;
use crate::report::{DslReport, ErrorEvent};
use crate::resolver::{self, TypeReference};

/// Options for one write-mode run.
#[derive(Debug, Clone)]
pub struct DslOptions {
    /// Requested constants; empty means every type in the snapshot.
    pub constants: Vec<String>,
    pub quiet: bool,
    pub file_header: bool,
    pub generators: Vec<String>,
    pub exclude_generators: Vec<String>,
}

impl Default for DslOptions {
    fn default() -> Self {
        Self {
            constants: Vec::new(),
            quiet: false,
            file_header: true,
            generators: Vec::new(),
            exclude_generators: Vec::new(),
        }
    }
}

/// Execute a write-mode run against the given tree.
///
/// The tree is mutated in exactly one pass, after the full desired set has
/// been computed; the only exception is the immediate removal of files
/// whose requested constant failed to resolve (targeted runs).
pub fn run(
    app: &Application,
    registry: &GeneratorRegistry,
    tree: &mut dyn OutputTree,
    opts: &DslOptions,
) -> Result<DslReport> {
    let mut report = DslReport {
        quiet: opts.quiet,
        ..Default::default()
    };

    let selected = match registry.select(&opts.generators, &opts.exclude_generators) {
        Ok(selected) => selected,
        Err(errors) => {
            report.errors = errors.into_iter().map(ErrorEvent::new).collect();
            return Ok(report);
        }
    };

    let targeted = !opts.constants.is_empty();
    let references = resolver::resolve(app, &opts.constants);
    let engine = Engine::new(selected, opts.file_header);

    let mut desired: BTreeMap<PathBuf, GeneratedFile> = BTreeMap::new();
    let mut stale_candidates: Vec<PathBuf> = Vec::new();

    for reference in &references {
        match reference {
            TypeReference::Unresolved { requested, .. } => {
                let mut event =
                    ErrorEvent::new(DslError::UnresolvedConstant(requested.clone()));
                if targeted {
                    if let Some(path) = reference.derived_path() {
                        if tree.read(&path)?.is_some() {
                            tree.delete(&path)?;
                            event.removed = Some(tree.display_path(&path));
                        }
                    }
                }
                report.errors.push(event);
            }
            TypeReference::Resolved { name, entry, .. } => {
                let (file, faults) = engine.compile(name, entry);
                report
                    .errors
                    .extend(faults.into_iter().map(ErrorEvent::new));
                match file {
                    Some(file) => {
                        desired.insert(file.path.clone(), file);
                    }
                    None if targeted => stale_candidates.push(name.relative_path()),
                    None => {}
                }
            }
        }
    }

    let written = reconcile::write_desired(&desired, tree)?;
    report.written = written.iter().map(|path| tree.display_path(path)).collect();

    let removed = if targeted {
        reconcile::remove_stale_among(&stale_candidates, &desired, tree)?
    } else {
        reconcile::remove_stale(&desired, tree)?
    };
    report.stale_removed = removed.iter().map(|path| tree.display_path(path)).collect();

    Ok(report)
}
