//! Reflection snapshot model.
//!
//! The snapshot is the contract between sago and the collaborator that
//! inspects the live host application: a versioned JSON document listing
//! every declared type together with the DSL patterns detected on it. A
//! pattern payload is opaque to the pipeline; only the generator registered
//! for that pattern key knows how to read it.

use std::collections::BTreeMap;
use std::path::Path;

use miette::SourceSpan;
use sago_core::QualifiedName;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Snapshot contract version understood by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The host application as reported by the reflection dumper.
#[derive(Debug, Clone, Deserialize)]
pub struct Application {
    /// Contract version of the snapshot document.
    pub version: u32,
    /// Host application name, informational only.
    #[serde(default)]
    pub name: Option<String>,
    /// Every declared type the dumper reported.
    #[serde(default)]
    pub types: Vec<TypeEntry>,
}

/// One declared type and the DSL patterns detected on it.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    /// Fully qualified constant name, e.g. `Namespace::Comment`.
    pub name: String,
    /// Whether the constant is a class or a module.
    #[serde(default)]
    pub kind: TypeKind,
    /// Detected DSL patterns keyed by pattern id, payload per generator.
    #[serde(default)]
    pub dsl: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    #[default]
    Class,
    Module,
}

impl Application {
    /// Load a snapshot from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        Self::from_json(&content, &path.display().to_string())
    }

    /// Parse and validate a snapshot document.
    pub fn from_json(content: &str, filename: &str) -> Result<Self> {
        let app: Application = serde_json::from_str(content)
            .map_err(|e| Error::parse(filename, content, json_span(content, &e), e.to_string()))?;

        if app.version != SNAPSHOT_VERSION {
            return Err(Box::new(Error::SnapshotVersion {
                found: app.version,
                expected: SNAPSHOT_VERSION,
            }));
        }
        for entry in &app.types {
            if QualifiedName::parse(&entry.name).is_none() {
                return Err(Error::validation(
                    filename,
                    content,
                    format!("invalid constant name '{}' in snapshot", entry.name),
                ));
            }
        }
        Ok(app)
    }

    /// Look up a type by its fully qualified name.
    pub fn find(&self, name: &str) -> Option<&TypeEntry> {
        self.types.iter().find(|entry| entry.name == name)
    }
}

/// Byte offset of a serde_json line/column position, for the miette label.
fn json_span(content: &str, err: &serde_json::Error) -> Option<SourceSpan> {
    if err.line() == 0 {
        return None;
    }
    let mut offset = 0usize;
    for (index, line) in content.lines().enumerate() {
        if index + 1 == err.line() {
            return Some((offset + err.column().saturating_sub(1)).into());
        }
        offset += line.len() + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_minimal() {
        let app = Application::from_json(r#"{"version": 1}"#, "reflection.json").unwrap();
        assert_eq!(app.version, SNAPSHOT_VERSION);
        assert!(app.types.is_empty());
    }

    #[test]
    fn test_from_json_entry_with_payload() {
        let app = Application::from_json(
            r#"{
                "version": 1,
                "name": "blog",
                "types": [
                    {
                        "name": "Post",
                        "dsl": {
                            "smart_properties": {
                                "properties": [{"name": "title", "accepts": "String"}]
                            }
                        }
                    },
                    {"name": "Baz", "kind": "module"}
                ]
            }"#,
            "reflection.json",
        )
        .unwrap();

        assert_eq!(app.name.as_deref(), Some("blog"));
        let post = app.find("Post").unwrap();
        assert_eq!(post.kind, TypeKind::Class);
        assert!(post.dsl.contains_key("smart_properties"));
        assert_eq!(app.find("Baz").unwrap().kind, TypeKind::Module);
        assert!(app.find("User").is_none());
    }

    #[test]
    fn test_from_json_rejects_unknown_version() {
        let err = Application::from_json(r#"{"version": 7}"#, "reflection.json").unwrap_err();
        assert!(matches!(
            *err,
            Error::SnapshotVersion {
                found: 7,
                expected: SNAPSHOT_VERSION
            }
        ));
    }

    #[test]
    fn test_from_json_rejects_invalid_constant_name() {
        let err = Application::from_json(
            r#"{"version": 1, "types": [{"name": "lowercase"}]}"#,
            "reflection.json",
        )
        .unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }

    #[test]
    fn test_from_json_reports_parse_errors() {
        let err = Application::from_json("{", "reflection.json").unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
