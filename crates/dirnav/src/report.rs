//! User facing error reports.

use std::io::{self, BufRead, IsTerminal, Write};

use dirnav_resolve::Error as ResolveError;

/// Write `err` and its causes, followed by the details of a resolution
/// failure when the chain contains one.
pub fn render(err: &anyhow::Error, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "error: {err}")?;
    for cause in err.chain().skip(1) {
        writeln!(out, "  caused by: {cause}")?;
    }

    let Some(resolve) = err.chain().find_map(|e| e.downcast_ref::<ResolveError>()) else {
        return Ok(());
    };

    let (Some(specifier), Some(directory)) = (resolve.specifier(), resolve.directory()) else {
        return Ok(());
    };

    let failure = match resolve {
        ResolveError::MultipleMatches { .. } => "multiple matches",
        _ => "no match",
    };
    writeln!(out)?;
    writeln!(out, "  failure:   {failure}")?;
    writeln!(out, "  specifier: {specifier}")?;
    writeln!(out, "  directory: {}", directory.display())?;
    if let ResolveError::MultipleMatches { candidates, .. } = resolve {
        writeln!(out, "  matches:")?;
        for name in candidates {
            writeln!(out, "    {name}")?;
        }
    }

    Ok(())
}

/// Block until the user presses Enter, so a window opened only for this
/// process stays up long enough to read the report.
pub fn pause(input: &mut impl BufRead, out: &mut impl Write) -> io::Result<()> {
    write!(out, "press enter to exit...")?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

/// Print the report to stderr and pause when an interactive user is there
/// to acknowledge it.
pub fn report(err: &anyhow::Error, pause_requested: bool) {
    let mut stderr = io::stderr().lock();
    if let Err(e) = render(err, &mut stderr) {
        tracing::warn!("cannot write error report: {e}");
        return;
    }

    let stdin = io::stdin();
    if pause_requested
        && stdin.is_terminal()
        && let Err(e) = pause(&mut stdin.lock(), &mut stderr)
    {
        tracing::debug!("pause interrupted: {e}");
    }
}
