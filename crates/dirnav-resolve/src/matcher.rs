//! Match rules for comparing a candidate name against a specifier.

use std::fmt;

/// A single way of matching a specifier against a candidate name.
///
/// Rules have a fixed priority, see [`MatchRule::CASCADE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    Prefix,
    Substring,
    Fuzzy,
}

impl MatchRule {
    /// All rules, highest priority first.
    pub const CASCADE: [MatchRule; 3] = [MatchRule::Prefix, MatchRule::Substring, MatchRule::Fuzzy];

    pub fn matches(self, candidate: &str, specifier: &str) -> bool {
        match self {
            MatchRule::Prefix => prefix(candidate, specifier),
            MatchRule::Substring => substring(candidate, specifier),
            MatchRule::Fuzzy => fuzzy(candidate, specifier),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MatchRule::Prefix => "prefix",
            MatchRule::Substring => "substring",
            MatchRule::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-sensitive prefix test.
pub fn prefix(candidate: &str, specifier: &str) -> bool {
    candidate.starts_with(specifier)
}

/// Case-sensitive substring test.
pub fn substring(candidate: &str, specifier: &str) -> bool {
    candidate.contains(specifier)
}

/// Case-insensitive ordered subsequence test.
///
/// Each specifier character is looked up at its first occurrence in the
/// rest of the candidate, and the search continues just past it. The scan
/// is greedy and never backtracks. An empty specifier matches anything.
///
/// ```
/// use dirnav_resolve::matcher::fuzzy;
///
/// assert!(fuzzy("hello world", "hw"));
/// assert!(fuzzy("hEllo", "ell"));
/// assert!(!fuzzy("hello world", "allo"));
/// ```
pub fn fuzzy(candidate: &str, specifier: &str) -> bool {
    let candidate = candidate.to_lowercase();
    let specifier = specifier.to_lowercase();

    let mut remaining = candidate.as_str();
    for ch in specifier.chars() {
        match remaining.find(ch) {
            Some(idx) => remaining = &remaining[idx + ch.len_utf8()..],
            None => return false,
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_fuzzy_examples() {
        assert!(fuzzy("hello", "h"));
        assert!(fuzzy("hEllo", "ell"));
        assert!(fuzzy("hello", "ho"));
        assert!(!fuzzy("hello", "bel"));
        assert!(fuzzy("hello world", "hw"));
        assert!(fuzzy("hello world", "helwo"));
        assert!(!fuzzy("hello world", "allo"));
        assert!(!fuzzy("", "a"));
        assert!(fuzzy("a", ""));
    }

    #[test]
    fn test_fuzzy_is_case_insensitive_both_ways() {
        assert!(fuzzy("Project-Alpha", "PALPHA"));
        assert!(fuzzy("project-alpha", "PAlpha"));
    }

    #[test]
    fn test_fuzzy_requires_order() {
        assert!(!fuzzy("abc", "cba"));
        assert!(fuzzy("abc", "ac"));
    }

    #[test]
    fn test_fuzzy_consumes_repeated_chars() {
        assert!(fuzzy("aa", "aa"));
        assert!(!fuzzy("a", "aa"));
    }

    #[test]
    fn test_fuzzy_non_ascii() {
        assert!(fuzzy("Überblick", "übk"));
        assert!(!fuzzy("Überblick", "kü"));
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        assert!(prefix("Docs", "Do"));
        assert!(!prefix("Docs", "do"));
    }

    #[test]
    fn test_substring_is_case_sensitive() {
        assert!(substring("my-Docs", "Doc"));
        assert!(!substring("my-Docs", "doc"));
    }

    #[test]
    fn test_rule_dispatch() {
        assert!(MatchRule::Prefix.matches("readme.txt", "read"));
        assert!(!MatchRule::Prefix.matches("readme.txt", "me"));
        assert!(MatchRule::Substring.matches("readme.txt", "me"));
        assert!(MatchRule::Fuzzy.matches("readme.txt", "RMT"));
    }

    #[test]
    fn test_cascade_order() {
        assert_eq!(
            MatchRule::CASCADE,
            [MatchRule::Prefix, MatchRule::Substring, MatchRule::Fuzzy]
        );
    }

    proptest! {
        #[test]
        fn prop_empty_specifier_matches_everything(name in ".*") {
            for rule in MatchRule::CASCADE {
                prop_assert!(rule.matches(&name, ""));
            }
        }

        #[test]
        fn prop_prefix_implies_substring(name in "[a-z]{0,12}", cut in 0usize..12) {
            let cut = cut.min(name.len());
            let abbrev = &name[..cut];
            prop_assert!(prefix(&name, abbrev));
            prop_assert!(substring(&name, abbrev));
        }

        #[test]
        fn prop_substring_implies_fuzzy(name in "[a-zA-Z0-9_-]{0,16}", start in 0usize..16, len in 0usize..16) {
            let start = start.min(name.len());
            let end = (start + len).min(name.len());
            let abbrev = &name[start..end];
            prop_assert!(substring(&name, abbrev));
            prop_assert!(fuzzy(&name, abbrev));
        }

        #[test]
        fn prop_every_other_char_is_fuzzy_match(name in "[a-z]{0,16}") {
            let abbrev: String = name.chars().step_by(2).collect();
            prop_assert!(fuzzy(&name, &abbrev));
        }
    }
}
