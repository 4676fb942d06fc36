//! Error types for specifier resolution.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::listing::{EntryKind, describe_kinds};

#[derive(Debug, Error)]
pub enum Error {
    #[error(
        "no {} in '{}' matched specifier '{specifier}'",
        describe_kinds(.kinds),
        .directory.display()
    )]
    NoMatch {
        specifier: String,
        directory: PathBuf,
        kinds: Vec<EntryKind>,
    },

    #[error(
        "more than one {} in '{}' matched specifier '{specifier}': {}",
        describe_kinds(.kinds),
        .directory.display(),
        .candidates.join(", ")
    )]
    MultipleMatches {
        specifier: String,
        directory: PathBuf,
        kinds: Vec<EntryKind>,
        candidates: Vec<String>,
    },

    #[error("failed to read directory '{}'", .path.display())]
    ReadDir { path: PathBuf, source: io::Error },

    #[error("invalid exclusion pattern '{pattern}'")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl Error {
    /// The specifier a resolution failure is about, if any.
    pub fn specifier(&self) -> Option<&str> {
        match self {
            Error::NoMatch { specifier, .. } | Error::MultipleMatches { specifier, .. } => {
                Some(specifier)
            }
            _ => None,
        }
    }

    /// The directory that was being searched or read.
    pub fn directory(&self) -> Option<&std::path::Path> {
        match self {
            Error::NoMatch { directory, .. } | Error::MultipleMatches { directory, .. } => {
                Some(directory)
            }
            Error::ReadDir { path, .. } => Some(path),
            Error::InvalidPattern { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
