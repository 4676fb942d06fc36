use crate::error::{Error, Result};
use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Child, Command as StdCommand, ExitStatus, Stdio};

#[derive(Debug)]
pub struct Command {
    inner: StdCommand,
    program: String,
}

impl Command {
    pub fn new(program: impl Into<String>) -> Self {
        let program = program.into();
        Self {
            inner: StdCommand::new(&program),
            program,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> impl Iterator<Item = &OsStr> {
        self.inner.get_args()
    }

    pub fn get_current_dir(&self) -> Option<&Path> {
        self.inner.get_current_dir()
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.inner.arg(arg);
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.inner.args(args);
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.inner.current_dir(dir);
        self
    }

    pub fn env<K, V>(mut self, key: K, val: V) -> Self
    where
        K: AsRef<OsStr>,
        V: AsRef<OsStr>,
    {
        self.inner.env(key, val);
        self
    }

    fn failed(&self, source: std::io::Error) -> Error {
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::CommandNotFound {
                cmd: self.program.clone(),
            }
        } else {
            Error::CommandFailed {
                cmd: self.program.clone(),
                source,
            }
        }
    }

    fn check(&self, status: ExitStatus) -> Result<()> {
        if status.success() {
            Ok(())
        } else {
            Err(Error::ExitStatus {
                cmd: self.program.clone(),
                status,
            })
        }
    }

    /// Start the process without waiting for it.
    pub fn spawn(&mut self) -> Result<Child> {
        tracing::debug!(cmd = %self.program, "spawning");
        self.inner.spawn().map_err(|e| self.failed(e))
    }

    /// Run the process attached to the current terminal and wait for it.
    pub fn status(&mut self) -> Result<()> {
        tracing::debug!(cmd = %self.program, "running");
        let status = self.inner.status().map_err(|e| self.failed(e))?;
        self.check(status)
    }

    /// Run the process with `input` written to its stdin, then wait for it.
    pub fn pipe_in(&mut self, input: &[u8]) -> Result<()> {
        tracing::debug!(cmd = %self.program, bytes = input.len(), "piping");
        self.inner
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::inherit());

        let mut child = self.inner.spawn().map_err(|e| self.failed(e))?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input).map_err(|e| self.failed(e))?;
        }

        let status = child.wait().map_err(|e| self.failed(e))?;
        self.check(status)
    }
}
