//! Single-step resolution of a specifier against a candidate list.
//!
//! Rules from [`MatchRule::CASCADE`] are tried in order. The first rule that
//! narrows the candidates to exactly one wins. When no rule does, the outcome
//! is decided by the last rule tried.

use crate::matcher::MatchRule;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    Unique { name: &'a str, rule: MatchRule },
    NoMatch,
    /// Names matched by the last rule tried.
    Ambiguous(Vec<&'a str>),
}

pub fn resolve<'a>(candidates: &[&'a str], specifier: &str) -> Resolution<'a> {
    let mut matched = Vec::new();

    for rule in MatchRule::CASCADE {
        matched = candidates
            .iter()
            .copied()
            .filter(|name| rule.matches(name, specifier))
            .collect();

        tracing::trace!(%rule, specifier, count = matched.len(), "rule applied");

        if let [name] = matched[..] {
            return Resolution::Unique { name, rule };
        }
    }

    if matched.is_empty() {
        Resolution::NoMatch
    } else {
        Resolution::Ambiguous(matched)
    }
}
