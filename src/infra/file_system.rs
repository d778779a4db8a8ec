use log::{debug, trace};
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::Path;
use std::string::FromUtf8Error;
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("not valid UTF-8 text ({0})")]
    Decode(#[from] FromUtf8Error),
}

/// Direct children of one directory, split by kind.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirListing {
    pub files: Vec<OsString>,
    pub subdirs: Vec<OsString>,
}

pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> io::Result<DirListing>;
}

pub trait FileReader {
    fn read_text(&self, path: &Path) -> Result<String, ReadError>;
}

pub trait FileSystem: DirectoryLister + FileReader {}

impl<T: DirectoryLister + FileReader> FileSystem for T {}

/// The real file system. Listings are sorted by file name and symlinked
/// directories are reported as neither files nor subdirectories.
pub struct LocalFileSystem;

impl DirectoryLister for LocalFileSystem {
    fn list(&self, dir: &Path) -> io::Result<DirListing> {
        trace!("Listing directory: {}", dir.display());
        let mut listing = DirListing::default();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(io::Error::from)?;
            let file_type = entry.file_type();
            let name = entry.file_name().to_os_string();

            if file_type.is_dir() {
                listing.subdirs.push(name);
            } else if file_type.is_symlink() {
                match fs::metadata(entry.path()) {
                    Ok(meta) if meta.is_dir() => {
                        debug!("Not following directory symlink: {}", entry.path().display());
                    }
                    // broken links land here too and fail later at read time
                    _ => listing.files.push(name),
                }
            } else {
                listing.files.push(name);
            }
        }

        trace!(
            "{}: {} files, {} subdirectories",
            dir.display(),
            listing.files.len(),
            listing.subdirs.len()
        );
        Ok(listing)
    }
}

impl FileReader for LocalFileSystem {
    fn read_text(&self, path: &Path) -> Result<String, ReadError> {
        debug!("Reading file contents: {}", path.display());
        let bytes = fs::read(path)?;
        let contents = String::from_utf8(bytes)?;
        debug!("Read {} bytes from file", contents.len());
        Ok(contents)
    }
}
