use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{InstallError, Result};

/// Project-relative text store the installer patches.
///
/// Paths are forward-slash separated and relative to the workspace root.
pub trait FileTree {
    fn exists(&self, path: &str) -> bool;

    fn read(&self, path: &str) -> Result<String>;

    /// Write a new file. Fails with [`InstallError::FileConflict`] if the path exists.
    fn create(&mut self, path: &str, text: &str) -> Result<()>;

    fn overwrite(&mut self, path: &str, text: &str) -> Result<()>;

    /// Read a file, treating a missing one as `None`.
    fn read_optional(&self, path: &str) -> Result<Option<String>> {
        if !self.exists(path) {
            return Ok(None);
        }
        self.read(path).map(Some)
    }
}

/// Join a project-relative directory and a file name without doubling slashes.
pub fn join(dir: &str, name: &str) -> String {
    let dir = dir.trim_end_matches('/');
    let name = name.trim_start_matches('/');
    if dir.is_empty() || dir == "." {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// `FileTree` over a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        path.split('/')
            .filter(|segment| !segment.is_empty() && *segment != ".")
            .fold(self.root.clone(), |acc, segment| acc.join(segment))
    }

    fn write(&self, target: &Path, text: &str) -> Result<()> {
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| InstallError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(target, text).map_err(|source| InstallError::Io {
            path: target.to_path_buf(),
            source,
        })
    }
}

impl FileTree for DiskTree {
    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_file()
    }

    fn read(&self, path: &str) -> Result<String> {
        let target = self.resolve(path);
        if !target.is_file() {
            return Err(InstallError::FileMissing(path.to_string()));
        }

        fs::read_to_string(&target).map_err(|source| InstallError::Io {
            path: target,
            source,
        })
    }

    fn create(&mut self, path: &str, text: &str) -> Result<()> {
        let target = self.resolve(path);
        if target.exists() {
            return Err(InstallError::FileConflict(path.to_string()));
        }
        self.write(&target, text)
    }

    fn overwrite(&mut self, path: &str, text: &str) -> Result<()> {
        let target = self.resolve(path);
        self.write(&target, text)
    }
}

/// In-memory `FileTree`.
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, String>,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(path.to_string(), text.to_string());
        self
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl FileTree for MemoryTree {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn read(&self, path: &str) -> Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| InstallError::FileMissing(path.to_string()))
    }

    fn create(&mut self, path: &str, text: &str) -> Result<()> {
        if self.files.contains_key(path) {
            return Err(InstallError::FileConflict(path.to_string()));
        }
        self.files.insert(path.to_string(), text.to_string());
        Ok(())
    }

    fn overwrite(&mut self, path: &str, text: &str) -> Result<()> {
        self.files.insert(path.to_string(), text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_empty_and_trailing_slashes() {
        assert_eq!(join("", "index.html"), "index.html");
        assert_eq!(join(".", "index.html"), "index.html");
        assert_eq!(join("src/", "index.html"), "src/index.html");
        assert_eq!(join("projects/app/src", "/styles"), "projects/app/src/styles");
    }

    #[test]
    fn memory_create_fails_on_conflict() {
        let mut tree = MemoryTree::new().with_file("a.txt", "one");

        let err = tree.create("a.txt", "two").unwrap_err();
        assert!(matches!(err, InstallError::FileConflict(ref p) if p == "a.txt"));
        assert_eq!(tree.get("a.txt"), Some("one"));
    }

    #[test]
    fn memory_read_optional_missing_is_none() {
        let tree = MemoryTree::new();
        assert!(tree.read_optional("nope").unwrap().is_none());
        assert!(matches!(
            tree.read("nope"),
            Err(InstallError::FileMissing(_))
        ));
    }

    #[test]
    fn disk_tree_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let mut tree = DiskTree::new(dir.path());

        tree.create("src/styles/_palette.scss", "x").unwrap();
        assert!(tree.exists("src/styles/_palette.scss"));
        assert!(dir.path().join("src").join("styles").join("_palette.scss").is_file());

        let err = tree.create("src/styles/_palette.scss", "y").unwrap_err();
        assert!(matches!(err, InstallError::FileConflict(_)));

        tree.overwrite("src/styles/_palette.scss", "y").unwrap();
        assert_eq!(tree.read("src/styles/_palette.scss").unwrap(), "y");
    }
}
