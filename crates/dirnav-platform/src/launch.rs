//! Desktop side effects: opening items, terminals and the clipboard.
//!
//! Each effect is split into a planner that only builds a [`Command`] and a
//! runner that executes it, so the platform choices stay testable.

use std::path::Path;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::os::{self, OS};
use crate::shell::{self, Shell};

/// Build the command that hands `path` to the desktop opener.
///
/// Directories open in the file manager; files open in their default
/// application.
pub fn opener_command(os: OS, path: &Path) -> Command {
    match os {
        OS::Windows => Command::new("explorer").arg(path),
        OS::Macos => Command::new("open").arg(path),
        OS::Unix => Command::new("xdg-open").arg(path),
    }
}

pub fn open_item(path: &Path) -> Result<()> {
    let mut cmd = opener_command(os::detect(), path);
    cmd.spawn()?;
    tracing::info!(path = %path.display(), opener = cmd.program(), "opened");
    Ok(())
}

/// How a terminal command has to be run.
#[derive(Debug)]
pub enum TerminalLaunch {
    /// A separate window; dirnav does not wait for it.
    Detached(Command),
    /// A shell in the current terminal; dirnav waits until it exits.
    Attached(Command),
}

/// What the environment offers for opening a terminal.
#[derive(Debug, Clone, Default)]
pub struct TerminalEnv {
    /// Value of `$TERMINAL`, possibly with arguments.
    pub terminal: Option<String>,
    pub has_x_terminal_emulator: bool,
    pub shell: Option<Shell>,
}

impl TerminalEnv {
    pub fn detect() -> Self {
        Self {
            terminal: std::env::var("TERMINAL").ok().filter(|t| !t.trim().is_empty()),
            has_x_terminal_emulator: which::which("x-terminal-emulator").is_ok(),
            shell: shell::detect(),
        }
    }
}

pub fn terminal_command(os: OS, dir: &Path, env: &TerminalEnv) -> Result<TerminalLaunch> {
    let launch = match os {
        OS::Windows => TerminalLaunch::Detached(
            Command::new("cmd")
                .args(["/C", "start", "", "cmd", "/K"])
                .current_dir(dir),
        ),
        OS::Macos => TerminalLaunch::Detached(
            Command::new("open").args(["-a", "Terminal"]).arg(dir),
        ),
        OS::Unix => {
            if let Some(terminal) = &env.terminal {
                let mut parts = terminal.split_whitespace();
                let program = parts.next().ok_or(Error::NoTerminal)?;
                TerminalLaunch::Detached(Command::new(program).args(parts).current_dir(dir))
            } else if env.has_x_terminal_emulator {
                TerminalLaunch::Detached(Command::new("x-terminal-emulator").current_dir(dir))
            } else if let Some(shell) = env.shell {
                TerminalLaunch::Attached(Command::new(shell.executable()).current_dir(dir))
            } else {
                return Err(Error::NoTerminal);
            }
        }
    };

    Ok(launch)
}

pub fn open_terminal(dir: &Path) -> Result<()> {
    match terminal_command(os::detect(), dir, &TerminalEnv::detect())? {
        TerminalLaunch::Detached(mut cmd) => {
            cmd.spawn()?;
            tracing::info!(dir = %dir.display(), terminal = cmd.program(), "terminal opened");
        }
        TerminalLaunch::Attached(mut cmd) => {
            tracing::info!(dir = %dir.display(), shell = cmd.program(), "starting shell");
            cmd.status()?;
        }
    }
    Ok(())
}

type ClipboardTool = (&'static str, &'static [&'static str]);

const WAYLAND_CLIPBOARD_TOOL: ClipboardTool = ("wl-copy", &[]);

const X11_CLIPBOARD_TOOLS: [ClipboardTool; 2] = [
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

/// Build the command that reads clipboard text from stdin.
///
/// `available` reports whether a tool is installed; it is only consulted
/// on systems without a built-in clipboard tool.
pub fn clipboard_command<F>(os: OS, wayland: bool, available: F) -> Result<Command>
where
    F: Fn(&str) -> bool,
{
    match os {
        OS::Windows => return Ok(Command::new("clip")),
        OS::Macos => return Ok(Command::new("pbcopy")),
        OS::Unix => {}
    }

    let candidates = wayland
        .then_some(WAYLAND_CLIPBOARD_TOOL)
        .into_iter()
        .chain(X11_CLIPBOARD_TOOLS);

    let mut tried = Vec::new();
    for (program, args) in candidates {
        if available(program) {
            return Ok(Command::new(program).args(args));
        }
        tried.push(program.to_string());
    }

    Err(Error::NoClipboard { tried })
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut cmd = clipboard_command(os::detect(), os::is_wayland(), |tool| {
        which::which(tool).is_ok()
    })?;
    cmd.pipe_in(text.as_bytes())?;
    tracing::info!(tool = cmd.program(), "copied to clipboard");
    Ok(())
}
