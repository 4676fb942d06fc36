//! Walk a directory tree one resolved specifier at a time.
//!
//! Enumeration goes through [`ListingSource`], the only contract between the
//! walker and whatever holds the tree. [`FsListing`] reads the real file
//! system.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::filter::ExclusionRules;
use crate::listing::{DirectoryListing, EntryKind};
use crate::resolver::{Resolution, resolve};

pub trait ListingSource {
    fn list(&self, dir: &Path) -> Result<DirectoryListing>;
}

/// Lists directories from the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsListing;

impl ListingSource for FsListing {
    fn list(&self, dir: &Path) -> Result<DirectoryListing> {
        DirectoryListing::read(dir)
    }
}

const INTERMEDIATE_KINDS: [EntryKind; 1] = [EntryKind::Directory];

#[derive(Debug, Clone)]
pub struct PathWalker<S = FsListing> {
    source: S,
    exclusions: ExclusionRules,
}

impl PathWalker<FsListing> {
    pub fn new(exclusions: ExclusionRules) -> Self {
        Self::with_source(FsListing, exclusions)
    }
}

impl<S> PathWalker<S>
where
    S: ListingSource,
{
    pub fn with_source(source: S, exclusions: ExclusionRules) -> Self {
        Self { source, exclusions }
    }

    /// Resolve one specifier among the children of `dir`.
    pub fn step(&self, dir: &Path, specifier: &str, kinds: &[EntryKind]) -> Result<PathBuf> {
        let listing = self.source.list(dir)?;
        let candidates = self.exclusions.apply(listing.filter_kinds(kinds));

        match resolve(&candidates, specifier) {
            Resolution::Unique { name, rule } => {
                tracing::debug!(
                    specifier,
                    dir = %dir.display(),
                    %rule,
                    resolved = name,
                    "specifier resolved"
                );
                Ok(dir.join(name))
            }
            Resolution::NoMatch => Err(Error::NoMatch {
                specifier: specifier.to_string(),
                directory: dir.to_path_buf(),
                kinds: kinds.to_vec(),
            }),
            Resolution::Ambiguous(names) => Err(Error::MultipleMatches {
                specifier: specifier.to_string(),
                directory: dir.to_path_buf(),
                kinds: kinds.to_vec(),
                candidates: names.into_iter().map(String::from).collect(),
            }),
        }
    }

    /// Resolve `specifiers` left to right starting at `base`.
    ///
    /// Every step but the last only considers directories; the last uses
    /// `target_kinds`. The first failing step aborts the walk. With no
    /// specifiers, `base` is returned as is.
    pub fn walk<T>(&self, base: &Path, target_kinds: &[EntryKind], specifiers: &[T]) -> Result<PathBuf>
    where
        T: AsRef<str>,
    {
        let mut current = base.to_path_buf();

        for (i, specifier) in specifiers.iter().enumerate() {
            let is_last = i + 1 == specifiers.len();
            let kinds = if is_last {
                target_kinds
            } else {
                &INTERMEDIATE_KINDS[..]
            };

            current = self.step(&current, specifier.as_ref(), kinds)?;
        }

        Ok(current)
    }
}
