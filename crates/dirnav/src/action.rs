use std::fmt;
use std::path::Path;

use dirnav_platform::launch;
use dirnav_resolve::EntryKind;
use thiserror::Error;

const DIRECTORY_ONLY: &[EntryKind] = &[EntryKind::Directory];
const FILE_ONLY: &[EntryKind] = &[EntryKind::File];
const FILE_OR_DIRECTORY: &[EntryKind] = &[EntryKind::File, EntryKind::Directory];

#[derive(Debug, Error)]
#[error("unknown action '{name}', expected one of: {}", Action::names().join(", "))]
pub struct ActionError {
    pub name: String,
}

/// Side effects an action can have on the desktop.
pub trait Desktop {
    fn open_item(&self, path: &Path) -> dirnav_platform::Result<()>;
    fn open_terminal(&self, dir: &Path) -> dirnav_platform::Result<()>;
    fn copy_text(&self, text: &str) -> dirnav_platform::Result<()>;
}

/// The real desktop of the current machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDesktop;

impl Desktop for SystemDesktop {
    fn open_item(&self, path: &Path) -> dirnav_platform::Result<()> {
        launch::open_item(path)
    }

    fn open_terminal(&self, dir: &Path) -> dirnav_platform::Result<()> {
        launch::open_terminal(dir)
    }

    fn copy_text(&self, text: &str) -> dirnav_platform::Result<()> {
        launch::copy_to_clipboard(text)
    }
}

/// What to do with the resolved path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenFileExplorer,
    OpenFile,
    OpenCmd,
    OpenItem,
    CopyFullPath,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::OpenFileExplorer,
        Action::OpenFile,
        Action::OpenCmd,
        Action::OpenItem,
        Action::CopyFullPath,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Action::OpenFileExplorer => "open_file_explorer",
            Action::OpenFile => "open_file",
            Action::OpenCmd => "open_cmd",
            Action::OpenItem => "open_item",
            Action::CopyFullPath => "copy_full_path",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|a| a.name()).collect()
    }

    /// Parse an action identifier as typed on the command line.
    pub fn from_name(name: &str) -> Result<Self, ActionError> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| ActionError {
                name: name.to_string(),
            })
    }

    /// Kinds the last specifier may resolve to, in candidate order.
    pub fn accepted_kinds(self) -> &'static [EntryKind] {
        match self {
            Action::OpenFileExplorer | Action::OpenCmd => DIRECTORY_ONLY,
            Action::OpenFile => FILE_ONLY,
            Action::OpenItem | Action::CopyFullPath => FILE_OR_DIRECTORY,
        }
    }

    pub fn perform<D: Desktop>(self, path: &Path, desktop: &D) -> dirnav_platform::Result<()> {
        tracing::debug!(action = %self, path = %path.display(), "performing action");
        match self {
            Action::OpenFileExplorer | Action::OpenFile | Action::OpenItem => {
                desktop.open_item(path)
            }
            Action::OpenCmd => desktop.open_terminal(path),
            Action::CopyFullPath => desktop.copy_text(&path.to_string_lossy()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
