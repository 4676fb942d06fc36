use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use dirnav_resolve::PathWalker;
use tracing_subscriber::EnvFilter;

use crate::action::{Action, Desktop, SystemDesktop};
use crate::cli::app::App;
use crate::config::Config;

mod action;
mod cli;
mod config;
mod report;

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Resolve `specifiers` below the configured root and perform `action` on
/// the result.
fn run<D: Desktop>(
    action: Action,
    specifiers: &[String],
    config: &Config,
    desktop: &D,
) -> Result<PathBuf> {
    let exclusions = config
        .exclusions()
        .context("invalid `ignore` patterns in configuration")?;
    let walker = PathWalker::new(exclusions);

    let path = walker
        .walk(&config.root, action.accepted_kinds(), specifiers)
        .with_context(|| format!("cannot resolve a path for {action}"))?;

    action
        .perform(&path, desktop)
        .with_context(|| format!("{action} failed for '{}'", path.display()))?;
    tracing::info!(%action, path = %path.display(), "done");

    Ok(path)
}

fn print_path(out: &mut impl Write, path: &Path) -> io::Result<()> {
    writeln!(out, "{}", path.display())?;
    out.flush()
}

fn main() -> ExitCode {
    let app = App::parse();
    init_tracing(app.log_level());

    if let Some(shell) = app.completions {
        cli::setup::completions(shell, &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    let config = match Config::load(&app.overrides()) {
        Ok(config) => config,
        Err(e) => {
            let err = anyhow::Error::new(e).context("cannot load configuration");
            report::report(&err, !app.no_pause);
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "configuration loaded");

    // `required_unless_present` guarantees an action without `--completions`.
    let Some(action) = app.action else {
        return ExitCode::FAILURE;
    };

    match run(action, &app.specifiers, &config, &SystemDesktop) {
        Ok(path) => {
            if app.print {
                if let Err(e) = print_path(&mut io::stdout(), &path) {
                    tracing::warn!("cannot print resolved path: {e}");
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report::report(&err, config.pause_on_error && !app.no_pause);
            ExitCode::FAILURE
        }
    }
}
