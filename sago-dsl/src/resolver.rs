//! Constant resolution against the reflection snapshot.

use std::path::PathBuf;

use sago_app::{Application, TypeEntry};
use sago_core::QualifiedName;

/// A requested constant and its resolution, created fresh per run.
#[derive(Debug, Clone)]
pub enum TypeReference {
    Resolved {
        /// The name exactly as requested.
        requested: String,
        name: QualifiedName,
        entry: TypeEntry,
    },
    Unresolved {
        requested: String,
        /// Parsed form when the request is at least syntactically a constant.
        name: Option<QualifiedName>,
    },
}

impl TypeReference {
    pub fn requested(&self) -> &str {
        match self {
            TypeReference::Resolved { requested, .. } => requested,
            TypeReference::Unresolved { requested, .. } => requested,
        }
    }

    /// Derived output path for this request, when the name parses.
    pub fn derived_path(&self) -> Option<PathBuf> {
        match self {
            TypeReference::Resolved { name, .. } => Some(name.relative_path()),
            TypeReference::Unresolved { name, .. } => {
                name.as_ref().map(QualifiedName::relative_path)
            }
        }
    }
}

/// Resolve requested constants, in request order.
///
/// An empty request means every type in the snapshot, in ascending
/// qualified-name order. Duplicates are not deduplicated; each request is
/// resolved independently.
pub fn resolve(app: &Application, requested: &[String]) -> Vec<TypeReference> {
    if requested.is_empty() {
        let mut entries: Vec<&TypeEntry> = app.types.iter().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        return entries
            .into_iter()
            .filter_map(|entry| {
                // Snapshot names are validated at load time.
                let name = QualifiedName::parse(&entry.name)?;
                Some(TypeReference::Resolved {
                    requested: entry.name.clone(),
                    name,
                    entry: entry.clone(),
                })
            })
            .collect();
    }

    requested.iter().map(|raw| resolve_one(app, raw)).collect()
}

fn resolve_one(app: &Application, raw: &str) -> TypeReference {
    let Some(qualified) = QualifiedName::parse(raw) else {
        return TypeReference::Unresolved {
            requested: raw.to_string(),
            name: None,
        };
    };
    match app.find(&qualified.to_string()) {
        Some(entry) => TypeReference::Resolved {
            requested: raw.to_string(),
            name: qualified,
            entry: entry.clone(),
        },
        None => TypeReference::Unresolved {
            requested: raw.to_string(),
            name: Some(qualified),
        },
    }
}
