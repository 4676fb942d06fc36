use std::io::Write;

use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::app::App;
use crate::config::APP_NAME;

/// Write the completion script for `shell` to `out`.
pub fn completions(shell: Shell, out: &mut impl Write) {
    let mut cmd = App::command();
    generate(shell, &mut cmd, APP_NAME, out);
}
