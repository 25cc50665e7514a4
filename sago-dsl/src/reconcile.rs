//! Write-mode reconciliation of the desired file set against a tree.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use eyre::Result;
use sago_core::OutputTree;

use crate::engine::GeneratedFile;

/// Write every desired file that is missing or differs from what the tree
/// holds. Returns the written paths in ascending order; up-to-date files
/// are neither rewritten nor reported.
pub fn write_desired(
    desired: &BTreeMap<PathBuf, GeneratedFile>,
    tree: &mut dyn OutputTree,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for (path, file) in desired {
        if tree.read(path)?.as_deref() != Some(file.content.as_str()) {
            tree.write(path, &file.content)?;
            written.push(path.clone());
        }
    }
    Ok(written)
}

/// Delete every existing file with no counterpart in the desired set.
///
/// Full-run semantics: the whole tree is fair game. Returns the deleted
/// paths in ascending order.
pub fn remove_stale(
    desired: &BTreeMap<PathBuf, GeneratedFile>,
    tree: &mut dyn OutputTree,
) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();
    for path in tree.list()? {
        if !desired.contains_key(&path) {
            tree.delete(&path)?;
            removed.push(path);
        }
    }
    Ok(removed)
}

/// Delete stale files among the given candidate paths only.
///
/// Targeted-run semantics: a requested constant that resolved but no longer
/// yields a file loses its previously generated file; everything else in
/// the tree is left untouched.
pub fn remove_stale_among(
    candidates: &[PathBuf],
    desired: &BTreeMap<PathBuf, GeneratedFile>,
    tree: &mut dyn OutputTree,
) -> Result<Vec<PathBuf>> {
    let candidates: BTreeSet<&PathBuf> = candidates.iter().collect();
    let mut removed = Vec::new();
    for path in candidates {
        if !desired.contains_key(path) && tree.read(path)?.is_some() {
            tree.delete(path)?;
            removed.push(path.clone());
        }
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::path::Path;

    use sago_core::MemoryTree;

    use super::*;

    fn desired(entries: &[(&str, &str)]) -> BTreeMap<PathBuf, GeneratedFile> {
        entries
            .iter()
            .map(|(path, content)| {
                let path = PathBuf::from(path);
                (
                    path.clone(),
                    GeneratedFile {
                        path,
                        content: content.to_string(),
                        generators: BTreeSet::new(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn test_write_desired_skips_identical_content() {
        let mut tree = MemoryTree::new();
        tree.write(Path::new("post.rbi"), "same").unwrap();
        tree.write(Path::new("job.rbi"), "old").unwrap();

        let desired = desired(&[("post.rbi", "same"), ("job.rbi", "new"), ("baz/role.rbi", "role")]);
        let written = write_desired(&desired, &mut tree).unwrap();

        assert_eq!(
            written,
            vec![PathBuf::from("baz/role.rbi"), PathBuf::from("job.rbi")]
        );
        assert_eq!(tree.read(Path::new("job.rbi")).unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn test_remove_stale_deletes_everything_undesired() {
        let mut tree = MemoryTree::new();
        tree.write(Path::new("post.rbi"), "post").unwrap();
        tree.write(Path::new("to_be_deleted/foo.rbi"), "").unwrap();
        tree.write(Path::new("to_be_deleted/baz.rbi"), "").unwrap();

        let desired = desired(&[("post.rbi", "post")]);
        let removed = remove_stale(&desired, &mut tree).unwrap();

        assert_eq!(
            removed,
            vec![
                PathBuf::from("to_be_deleted/baz.rbi"),
                PathBuf::from("to_be_deleted/foo.rbi"),
            ]
        );
        assert_eq!(tree.list().unwrap(), vec![PathBuf::from("post.rbi")]);
    }

    #[test]
    fn test_remove_stale_among_only_touches_candidates() {
        let mut tree = MemoryTree::new();
        tree.write(Path::new("user.rbi"), "").unwrap();
        tree.write(Path::new("unrelated.rbi"), "").unwrap();

        let desired = desired(&[]);
        let removed =
            remove_stale_among(&[PathBuf::from("user.rbi")], &desired, &mut tree).unwrap();

        assert_eq!(removed, vec![PathBuf::from("user.rbi")]);
        assert_eq!(tree.list().unwrap(), vec![PathBuf::from("unrelated.rbi")]);
    }
}
