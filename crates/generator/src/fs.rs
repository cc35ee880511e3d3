//! File-system access behind a single interface
//!
//! [`LocalFs`] works on the real disk through `std::fs`, which is portable
//! across platforms. [`MemoryFs`] keeps everything in memory and mirrors the
//! disk's rule that a file can only be written into an existing directory.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Operations the generator needs from a file system
pub trait FileSystem {
    /// Create a directory and all of its missing parents
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    fn is_file(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate a file; the parent directory must exist
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Copy a file byte for byte, replacing the destination
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Names of the regular files directly inside `dir`, sorted
    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// The host file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl FileSystem for LocalFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::copy(from, to).map(|_| ())
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_owned());
                }
            }
        }
        names.sort();
        Ok(names)
    }
}

/// In-memory file system
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, String>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories
    pub fn insert_file(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.mark_dirs(parent);
        }
        self.files.borrow_mut().insert(path, contents.into());
    }

    /// Contents of a file, if present
    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        path.as_os_str().is_empty() || self.dirs.borrow().contains(path)
    }

    /// Every file under `root`, keyed by full path
    pub fn files_under(&self, root: impl AsRef<Path>) -> BTreeMap<PathBuf, String> {
        let root = root.as_ref();
        self.files
            .borrow()
            .iter()
            .filter(|(path, _)| path.starts_with(root))
            .map(|(path, contents)| (path.clone(), contents.clone()))
            .collect()
    }

    fn mark_dirs(&self, path: &Path) {
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }

    fn check_parent(&self, path: &Path) -> io::Result<()> {
        match path.parent() {
            Some(parent) if !self.is_dir(parent) => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory {} does not exist", parent.display()),
            )),
            _ => Ok(()),
        }
    }
}

impl FileSystem for MemoryFs {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        if self.files.borrow().contains_key(path) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} is a file", path.display()),
            ));
        }
        self.mark_dirs(path);
        Ok(())
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_parent(path)?;
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.to_owned());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        let contents = self.read_to_string(from)?;
        self.write(to, &contents)
    }

    fn list_files(&self, dir: &Path) -> io::Result<Vec<String>> {
        if !self.is_dir(dir) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("directory {} does not exist", dir.display()),
            ));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| path.parent() == Some(dir))
            .filter_map(|path| path.file_name()?.to_str().map(str::to_owned))
            .collect())
    }
}
