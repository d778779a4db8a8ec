//! In-memory file system used to drive the bundler in tests.

use crate::infra::file_system::{DirListing, DirectoryLister, FileReader, ReadError};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: BTreeMap<PathBuf, Vec<u8>>,
    dirs: BTreeSet<PathBuf>,
    unreadable: BTreeSet<PathBuf>,
    unlistable: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut fs = Self::default();
        fs.dirs.insert(root.into());
        fs
    }

    pub fn add_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        for ancestor in path.ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        self
    }

    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> &mut Self {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent.to_path_buf());
        }
        self.files.insert(path, content.into());
        self
    }

    /// Registers a file whose reads fail with `PermissionDenied`.
    pub fn add_unreadable_file(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        self.add_file(path.clone(), Vec::new());
        self.unreadable.insert(path);
        self
    }

    /// Registers a directory whose listing fails with `PermissionDenied`.
    pub fn add_unlistable_dir(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        self.add_dir(path.clone());
        self.unlistable.insert(path);
        self
    }
}

impl DirectoryLister for MemoryFileSystem {
    fn list(&self, dir: &Path) -> io::Result<DirListing> {
        if self.unlistable.contains(dir) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        if !self.dirs.contains(dir) {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such directory"));
        }

        let child_name = |path: &PathBuf| match path.parent() {
            Some(parent) if parent == dir => path.file_name().map(|n| n.to_os_string()),
            _ => None,
        };

        Ok(DirListing {
            files: self.files.keys().filter_map(child_name).collect(),
            subdirs: self.dirs.iter().filter_map(child_name).collect(),
        })
    }
}

impl FileReader for MemoryFileSystem {
    fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        if self.unreadable.contains(path) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied").into());
        }
        let bytes = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))?;
        Ok(String::from_utf8(bytes)?)
    }
}
