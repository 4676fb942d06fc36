use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Classification of a directory child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Directory => "directory",
            EntryKind::File => "file",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render a kind list for messages: `directory`, `file or directory`,
/// `a, b or c`.
pub fn describe_kinds(kinds: &[EntryKind]) -> String {
    match kinds.split_last() {
        None => String::from("entry"),
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => {
            let head: Vec<&str> = rest.iter().map(|k| k.as_str()).collect();
            format!("{} or {}", head.join(", "), last)
        }
    }
}

/// Immediate children of one directory, split by kind.
///
/// Order within each kind is the enumeration order of the underlying
/// file system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryListing {
    directories: Vec<String>,
    files: Vec<String>,
}

impl DirectoryListing {
    pub fn new(directories: Vec<String>, files: Vec<String>) -> Self {
        Self { directories, files }
    }

    /// Enumerate `path` one level deep.
    ///
    /// Symlinks are classified by what they point to; a dangling link
    /// counts as a file. Names that are not valid UTF-8 are skipped.
    pub fn read(path: &Path) -> Result<Self> {
        let read_err = |source| Error::ReadDir {
            path: path.to_path_buf(),
            source,
        };

        let mut listing = Self::default();
        for entry in fs::read_dir(path).map_err(read_err)? {
            let entry = entry.map_err(read_err)?;
            let file_type = entry.file_type().map_err(read_err)?;

            let is_dir = if file_type.is_symlink() {
                fs::metadata(entry.path()).map(|m| m.is_dir()).unwrap_or(false)
            } else {
                file_type.is_dir()
            };

            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(raw) => {
                    tracing::warn!(name = ?raw, dir = %path.display(), "skipping non UTF-8 entry");
                    continue;
                }
            };

            if is_dir {
                listing.directories.push(name);
            } else {
                listing.files.push(name);
            }
        }

        Ok(listing)
    }

    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    pub fn files(&self) -> &[String] {
        &self.files
    }

    pub fn of_kind(&self, kind: EntryKind) -> &[String] {
        match kind {
            EntryKind::Directory => &self.directories,
            EntryKind::File => &self.files,
        }
    }

    /// Names of the requested kinds, concatenated in the order requested.
    ///
    /// # Panics
    ///
    /// Panics if `kinds` is empty or contains a kind twice. Callers own the
    /// kind set, so either is a programming error.
    pub fn filter_kinds(&self, kinds: &[EntryKind]) -> Vec<&str> {
        assert!(!kinds.is_empty(), "at least one entry kind is required");
        for (i, kind) in kinds.iter().enumerate() {
            assert!(
                !kinds[..i].contains(kind),
                "duplicate entry kind in {kinds:?}"
            );
        }

        kinds
            .iter()
            .flat_map(|kind| self.of_kind(*kind).iter().map(String::as_str))
            .collect()
    }
}
