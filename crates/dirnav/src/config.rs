//! Layered configuration.
//!
//! Precedence, lowest first: built-in defaults, the TOML config file,
//! `DIRNAV_*` environment variables, command line overrides.

use std::path::{Path, PathBuf};

use dirnav_resolve::{DEFAULT_PATTERNS, ExclusionRules};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const APP_NAME: &str = "dirnav";
const CONFIG_FILE: &str = "config.toml";
const ENV_PREFIX: &str = "DIRNAV_";

#[derive(Debug, Error)]
pub enum Error {
    #[error("config file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),

    #[error("cannot make root '{}' absolute", .root.display())]
    Root {
        root: PathBuf,
        source: std::io::Error,
    },
}

impl From<figment::Error> for Error {
    fn from(e: figment::Error) -> Self {
        Self::Figment(Box::new(e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory every walk starts from.
    pub root: PathBuf,
    /// Regexes for names that are never candidates.
    pub ignore: Vec<String>,
    pub pause_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: dirnav_platform::dir::user_home().unwrap_or_else(|| PathBuf::from(".")),
            ignore: DEFAULT_PATTERNS.iter().map(|p| p.to_string()).collect(),
            pause_on_error: true,
        }
    }
}

/// Values from the command line that take precedence over everything else.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        dirnav_platform::dir::app_config(APP_NAME).map(|dir| dir.join(CONFIG_FILE))
    }

    fn figment(file: Option<&Path>, overrides: &Overrides) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(file) = file {
            figment = figment.merge(Toml::file(file));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX));
        if let Some(root) = &overrides.root {
            figment = figment.merge(Serialized::default("root", root));
        }
        figment
    }

    pub fn load(overrides: &Overrides) -> Result<Self, Error> {
        let file = match &overrides.config_file {
            Some(path) if !path.is_file() => return Err(Error::Missing(path.clone())),
            Some(path) => Some(path.clone()),
            None => Self::default_path(),
        };
        tracing::debug!(file = ?file, "loading config");

        let mut config: Config = Self::figment(file.as_deref(), overrides).extract()?;
        config.root = std::path::absolute(&config.root).map_err(|source| Error::Root {
            root: config.root.clone(),
            source,
        })?;

        Ok(config)
    }

    pub fn exclusions(&self) -> dirnav_resolve::Result<ExclusionRules> {
        ExclusionRules::from_patterns(&self.ignore)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn extract(overrides: &Overrides) -> Config {
        Config::figment(overrides.config_file.as_deref(), overrides)
            .extract()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.ignore, [".*~", "#.*#"]);
        assert!(config.pause_on_error);
    }

    #[test]
    fn test_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                root = "/srv/projects"
                ignore = ['.*\.bak']
                "#,
            )?;
            let config = extract(&Overrides {
                config_file: Some(jail.directory().join("config.toml")),
                root: None,
            });
            assert_eq!(config.root, PathBuf::from("/srv/projects"));
            assert_eq!(config.ignore, [r".*\.bak"]);
            assert!(config.pause_on_error);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", r#"root = "/from/file""#)?;
            jail.set_env("DIRNAV_ROOT", "/from/env");
            jail.set_env("DIRNAV_PAUSE_ON_ERROR", "false");
            let config = extract(&Overrides {
                config_file: Some(jail.directory().join("config.toml")),
                root: None,
            });
            assert_eq!(config.root, PathBuf::from("/from/env"));
            assert!(!config.pause_on_error);
            Ok(())
        });
    }

    #[test]
    fn test_cli_root_wins() {
        Jail::expect_with(|jail| {
            jail.set_env("DIRNAV_ROOT", "/from/env");
            let config = extract(&Overrides {
                config_file: None,
                root: Some(PathBuf::from("/from/cli")),
            });
            assert_eq!(config.root, PathBuf::from("/from/cli"));
            Ok(())
        });
    }

    #[test]
    fn test_load_makes_root_absolute() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", r#"root = "relative/dir""#)?;
            let config = Config::load(&Overrides {
                config_file: Some(jail.directory().join("config.toml")),
                root: None,
            })
            .unwrap();
            assert!(config.root.is_absolute());
            assert!(config.root.ends_with("relative/dir"));
            Ok(())
        });
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(&Overrides {
            config_file: Some(missing.clone()),
            root: None,
        })
        .unwrap_err();
        assert!(matches!(err, Error::Missing(ref p) if p == &missing));
    }

    #[test]
    fn test_exclusions_from_config() {
        let config = Config {
            ignore: vec!["target".into()],
            ..Config::default()
        };
        let rules = config.exclusions().unwrap();
        assert!(rules.is_excluded("target"));
        assert!(!rules.is_excluded("readme.txt~"));

        let config = Config {
            ignore: vec!["[".into()],
            ..Config::default()
        };
        assert!(config.exclusions().is_err());
    }
}
