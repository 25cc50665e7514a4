//! Per-type fragment collection and file assembly.

use std::collections::BTreeSet;
use std::path::PathBuf;

use sago_app::TypeEntry;
use sago_core::QualifiedName;

use crate::error::DslError;
use crate::fragment::SignatureFragment;
use crate::generator::Generator;
use crate::rbi::RbiFile;

/// A fully rendered declaration file for one type.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// Path relative to the output root, derived from the qualified name.
    pub path: PathBuf,
    /// Complete rendered content.
    pub content: String,
    /// Names of the generators that contributed fragments.
    pub generators: BTreeSet<String>,
}

/// Invokes every applicable generator against a resolved type and merges
/// the fragments into one file.
pub struct Engine<'a> {
    generators: Vec<&'a dyn Generator>,
    file_header: bool,
}

impl<'a> Engine<'a> {
    pub fn new(generators: Vec<&'a dyn Generator>, file_header: bool) -> Self {
        Self {
            generators,
            file_header,
        }
    }

    /// Compile one resolved type.
    ///
    /// Returns the merged file when at least one generator contributed
    /// fragments, plus every generator fault encountered along the way.
    /// A fault never stops the remaining generators for the same type, and
    /// a type with zero contributions yields no file.
    ///
    /// Fragments are ordered by (generator name, emission order), so the
    /// rendered content is identical regardless of generator iteration
    /// order.
    pub fn compile(
        &self,
        name: &QualifiedName,
        entry: &TypeEntry,
    ) -> (Option<GeneratedFile>, Vec<DslError>) {
        let mut contributions: Vec<(&str, Vec<SignatureFragment>)> = Vec::new();
        let mut faults = Vec::new();

        for generator in &self.generators {
            if !generator.applies(entry) {
                continue;
            }
            match generator.emit(entry) {
                Ok(fragments) if !fragments.is_empty() => {
                    contributions.push((generator.name(), fragments));
                }
                Ok(_) => {}
                Err(err) => faults.push(DslError::GeneratorFault {
                    generator: generator.name().to_string(),
                    constant: entry.name.clone(),
                    reason: err.to_string(),
                }),
            }
        }

        if contributions.is_empty() {
            return (None, faults);
        }

        contributions.sort_by(|a, b| a.0.cmp(b.0));

        let mut file = RbiFile::new(name.clone(), entry.kind, self.file_header);
        let mut contributors = BTreeSet::new();
        for (generator_name, fragments) in contributions {
            contributors.insert(generator_name.to_string());
            for fragment in fragments {
                file.push(fragment.signature);
            }
        }

        let generated = GeneratedFile {
            path: name.relative_path(),
            content: file.render(),
            generators: contributors,
        };
        (Some(generated), faults)
    }
}
