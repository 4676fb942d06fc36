//! Shell detection and helpers.

pub use query_shell::Shell as QueryShell;
use std::path::Path;
use std::str::FromStr;

use crate::error::Error;

/// Shell types supported by the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Pwsh,
    Cmd,
    Nushell,
    Elvish,
    Ion,
    Xonsh,
}

fn from_query_shell(qs: QueryShell) -> Option<Shell> {
    match qs {
        QueryShell::Bash => Some(Shell::Bash),
        QueryShell::Zsh => Some(Shell::Zsh),
        QueryShell::Fish => Some(Shell::Fish),
        QueryShell::Powershell => Some(Shell::Powershell),
        QueryShell::Nushell => Some(Shell::Nushell),
        QueryShell::Elvish => Some(Shell::Elvish),
        QueryShell::Ion => Some(Shell::Ion),
        QueryShell::Xonsh => Some(Shell::Xonsh),
        _ => None,
    }
}

impl FromStr for Shell {
    type Err = Error;

    /// Parse a shell from its name or executable path, e.g. `/bin/zsh`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = Path::new(s)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(s)
            .to_ascii_lowercase();

        match name.as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            "powershell" => Ok(Shell::Powershell),
            "pwsh" => Ok(Shell::Pwsh),
            "cmd" => Ok(Shell::Cmd),
            "nu" | "nushell" => Ok(Shell::Nushell),
            "elvish" => Ok(Shell::Elvish),
            "ion" => Ok(Shell::Ion),
            "xonsh" => Ok(Shell::Xonsh),
            _ => Err(Error::UnknownShell(s.to_string())),
        }
    }
}

impl Shell {
    /// Executable name used to start the shell.
    pub fn executable(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::Powershell => "powershell",
            Shell::Pwsh => "pwsh",
            Shell::Cmd => "cmd.exe",
            Shell::Nushell => "nu",
            Shell::Elvish => "elvish",
            Shell::Ion => "ion",
            Shell::Xonsh => "xonsh",
        }
    }
}

/// Detect the current shell.
///
/// Asks the process tree first, then falls back to `$SHELL`.
/// Returns `None` if both fail.
pub fn detect() -> Option<Shell> {
    query_shell::get_shell()
        .ok()
        .and_then(from_query_shell)
        .or_else(|| {
            let var = std::env::var("SHELL").ok()?;
            match var.parse() {
                Ok(shell) => Some(shell),
                Err(e) => {
                    tracing::debug!("ignoring $SHELL: {e}");
                    None
                }
            }
        })
}
