//! Output-tree abstraction over the directory of generated files.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eyre::Result;

use crate::file::write_file;

/// File extension of generated declaration files.
pub const RBI_EXTENSION: &str = "rbi";

/// Operations over the tree holding generated declaration files.
///
/// All paths are relative to the tree root. Only declaration files (`.rbi`)
/// participate in `list`; anything else under the root is invisible to the
/// pipeline and never touched.
pub trait OutputTree {
    /// Every declaration file currently present, in ascending path order.
    fn list(&self) -> Result<Vec<PathBuf>>;

    /// Read a file's content, or `None` when it does not exist.
    fn read(&self, path: &Path) -> Result<Option<String>>;

    /// Write a file, creating parent directories as needed.
    fn write(&mut self, path: &Path, content: &str) -> Result<()>;

    /// Delete a file.
    fn delete(&mut self, path: &Path) -> Result<()>;

    /// Root-joined form of a relative path, used in console reports.
    fn display_path(&self, path: &Path) -> PathBuf;
}

/// Output tree rooted at a directory on disk.
pub struct FsTree {
    root: PathBuf,
}

impl FsTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn collect(&self, dir: &Path, found: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                self.collect(&path, found)?;
            } else if path.extension().is_some_and(|ext| ext == RBI_EXTENSION) {
                // Paths under root are always strippable back to relative form.
                if let Ok(relative) = path.strip_prefix(&self.root) {
                    found.push(relative.to_path_buf());
                }
            }
        }
        Ok(())
    }
}

impl OutputTree for FsTree {
    fn list(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut found = Vec::new();
        self.collect(&self.root, &mut found)?;
        found.sort();
        Ok(found)
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        match fs::read_to_string(self.root.join(path)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        write_file(&self.root.join(path), content)
    }

    fn delete(&mut self, path: &Path) -> Result<()> {
        fs::remove_file(self.root.join(path))?;
        Ok(())
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

/// In-memory output tree, used as the scratch target in verify mode and in
/// tests.
#[derive(Debug, Default)]
pub struct MemoryTree {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputTree for MemoryTree {
    fn list(&self) -> Result<Vec<PathBuf>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, path: &Path) -> Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }

    fn write(&mut self, path: &Path, content: &str) -> Result<()> {
        self.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn delete(&mut self, path: &Path) -> Result<()> {
        self.files.remove(path);
        Ok(())
    }

    fn display_path(&self, path: &Path) -> PathBuf {
        path.to_path_buf()
    }
}
