// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Plural,
    Singular,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plural => "plural",
            Self::Singular => "singular",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plural" | "pluralize" => Some(Self::Plural),
            "singular" | "singularize" => Some(Self::Singular),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suffix pattern and the replacement applied to its first match.
///
/// Replacements use the regex crate's `${n}` group syntax. Groups that did
/// not participate in the match expand to the empty string.
#[derive(Debug, Clone)]
pub struct InflectionRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl InflectionRule {
    /// Compile a rule. Patterns are matched case-insensitively.
    pub fn new(pattern: &str, replacement: &'static str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&format!("(?i){pattern}"))?,
            replacement,
        })
    }

    pub fn apply(&self, word: &str) -> Option<String> {
        if self.pattern.is_match(word) {
            Some(self.pattern.replace(word, self.replacement).into_owned())
        } else {
            None
        }
    }
}

/// Singular and plural spellings of a noun that no suffix rule produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrregularPair {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl IrregularPair {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// `(from, to)` for the given target direction.
    pub fn forms(&self, direction: Direction) -> (&'static str, &'static str) {
        match direction {
            Direction::Plural => (self.singular, self.plural),
            Direction::Singular => (self.plural, self.singular),
        }
    }
}
