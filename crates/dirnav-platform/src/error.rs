use std::process::ExitStatus;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown shell: {0}")]
    UnknownShell(String),

    #[error("command not found: {cmd}")]
    CommandNotFound { cmd: String },

    #[error("command failed: {cmd}")]
    CommandFailed { cmd: String, source: std::io::Error },

    #[error("command {cmd} exited with {status}")]
    ExitStatus { cmd: String, status: ExitStatus },

    #[error("no clipboard tool available (tried: {})", .tried.join(", "))]
    NoClipboard { tried: Vec<String> },

    #[error("no terminal or shell available to open")]
    NoTerminal,
}
