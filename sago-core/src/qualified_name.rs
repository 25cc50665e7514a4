//! Namespace-qualified constant names and their derived file paths.

use std::fmt;
use std::path::PathBuf;

use crate::naming::to_snake_case;
use crate::tree::RBI_EXTENSION;

/// A namespace-qualified constant name, e.g. `Baz::Role`.
///
/// Segments are ordered outermost first and immutable once parsed. The
/// derived output path mirrors the namespace nesting: `Baz::Role` maps to
/// `baz/role.rbi`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    segments: Vec<String>,
}

impl QualifiedName {
    /// Parse a `::`-separated constant name.
    ///
    /// A leading `::` (explicit root scope) is accepted and dropped. Returns
    /// `None` when the name is empty or any segment does not look like a
    /// constant: segments must start with an uppercase ASCII letter, with
    /// the remaining characters alphanumeric or underscore.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.strip_prefix("::").unwrap_or(name);
        if name.is_empty() {
            return None;
        }
        let segments: Vec<String> = name.split("::").map(str::to_owned).collect();
        for segment in &segments {
            let mut chars = segment.chars();
            match chars.next() {
                Some(c) if c.is_ascii_uppercase() => {}
                _ => return None,
            }
            if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return None;
            }
        }
        Some(Self { segments })
    }

    /// The leaf constant name.
    pub fn leaf(&self) -> &str {
        // Parsing guarantees at least one segment.
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Enclosing namespace segments, outermost first; empty for top-level
    /// constants.
    pub fn namespace(&self) -> &[String] {
        &self.segments[..self.segments.len() - 1]
    }

    /// Derived output path relative to the tree root.
    ///
    /// Namespace segments become nested directories, the leaf becomes the
    /// file name. Each segment maps to its own path component, so distinct
    /// qualified names always derive distinct paths.
    pub fn relative_path(&self) -> PathBuf {
        let mut path = PathBuf::new();
        for segment in self.namespace() {
            path.push(to_snake_case(segment));
        }
        path.push(format!("{}.{}", to_snake_case(self.leaf()), RBI_EXTENSION));
        path
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}
