use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::action::Action;
use crate::config::Overrides;

#[derive(Clone, Debug, Parser)]
#[command(name = "dirnav", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// What to do with the resolved path: open_file_explorer, open_file,
    /// open_cmd, open_item or copy_full_path
    #[arg(
        value_name = "ACTION",
        value_parser = Action::from_name,
        required_unless_present = "completions"
    )]
    pub action: Option<Action>,

    /// Abbreviated name of each path segment below the root
    #[arg(value_name = "SPECIFIER")]
    pub specifiers: Vec<String>,

    #[arg(short, long, value_name = "DIR", help = "Start from DIR instead of the configured root")]
    pub root: Option<PathBuf>,

    #[arg(short, long, value_name = "FILE", help = "Read configuration from FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, action = ArgAction::Count, help = "Raise log verbosity (-v, -vv, -vvv)")]
    pub verbose: u8,

    #[arg(long, help = "Do not wait for Enter after an error")]
    pub no_pause: bool,

    #[arg(long, help = "Print the resolved path to stdout")]
    pub print: bool,

    #[arg(long, value_name = "SHELL", exclusive = true, help = "Print a completion script and exit")]
    pub completions: Option<clap_complete::Shell>,
}

impl App {
    /// Default log filter for the requested verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    pub fn overrides(&self) -> Overrides {
        Overrides {
            config_file: self.config.clone(),
            root: self.root.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_parse_action_and_specifiers() {
        let app = App::try_parse_from(["dirnav", "open_cmd", "proj", "src"]).unwrap();
        assert_eq!(app.action, Some(Action::OpenCmd));
        assert_eq!(app.specifiers, ["proj", "src"]);
        assert!(app.root.is_none());
        assert_eq!(app.log_level(), "warn");
    }

    #[test]
    fn test_no_specifiers_is_allowed() {
        let app = App::try_parse_from(["dirnav", "copy_full_path"]).unwrap();
        assert_eq!(app.action, Some(Action::CopyFullPath));
        assert!(app.specifiers.is_empty());
    }

    #[test]
    fn test_unknown_action_is_invalid_value() {
        let err = App::try_parse_from(["dirnav", "open_everything", "x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("open_everything"));
    }

    #[test]
    fn test_action_required_without_completions() {
        let err = App::try_parse_from(["dirnav"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);

        let app = App::try_parse_from(["dirnav", "--completions", "bash"]).unwrap();
        assert_eq!(app.completions, Some(clap_complete::Shell::Bash));
        assert!(app.action.is_none());
    }

    #[test]
    fn test_options() {
        let app = App::try_parse_from([
            "dirnav", "-vv", "--root", "/srv", "-c", "/etc/dirnav.toml", "--no-pause", "--print",
            "open_item", "docs",
        ])
        .unwrap();
        assert_eq!(app.log_level(), "debug");
        assert!(app.no_pause);
        assert!(app.print);

        let overrides = app.overrides();
        assert_eq!(overrides.root, Some(PathBuf::from("/srv")));
        assert_eq!(overrides.config_file, Some(PathBuf::from("/etc/dirnav.toml")));
    }
}
