use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

/// Editor backups (`notes.txt~`) and autosave files (`#notes.txt#`).
pub const DEFAULT_PATTERNS: [&str; 2] = [".*~", "#.*#"];

static DEFAULT_RULES: Lazy<ExclusionRules> = Lazy::new(|| {
    ExclusionRules::from_patterns(DEFAULT_PATTERNS).expect("default exclusion patterns are valid")
});

/// Names dropped from a listing before any matching happens.
///
/// A pattern excludes a name only when it matches the whole name.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    patterns: Vec<Regex>,
}

impl Default for ExclusionRules {
    fn default() -> Self {
        DEFAULT_RULES.clone()
    }
}

impl ExclusionRules {
    /// Rules that exclude nothing.
    pub fn none() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(&format!("^(?:{pattern})$")).map_err(|source| Error::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn apply<'a>(&self, names: Vec<&'a str>) -> Vec<&'a str> {
        if self.is_empty() {
            return names;
        }
        names
            .into_iter()
            .filter(|name| {
                let excluded = self.is_excluded(name);
                if excluded {
                    tracing::trace!(name, "excluded");
                }
                !excluded
            })
            .collect()
    }
}
