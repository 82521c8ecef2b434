// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use std::sync::LazyLock;

use tracing::debug;

use crate::domain::{Direction, InflectionRule, IrregularPair};
use crate::error::{Error, Result};

/// Plural rules, most specific first. The final `$` rule matches every word.
const PLURAL_RULES: &[(&str, &str)] = &[
    (r"(quiz)$", "${1}zes"),
    (r"^(ox)$", "${1}en"),
    (r"([ml])ouse$", "${1}ice"),
    (r"(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    (r"(x|ch|ss|sh)$", "${1}es"),
    // already plural
    (r"([^aeiouy]|qu)ies$", "${1}ies"),
    (r"([^aeiouy]|qu)y$", "${1}ies"),
    (r"(hive)$", "${1}s"),
    (r"(lea|loa|thie|shea)f$", "${1}ves"),
    (r"(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    (r"sis$", "ses"),
    (r"([ti])um$", "${1}a"),
    (r"(buffal|tomat)o$", "${1}oes"),
    (r"(bu)s$", "${1}ses"),
    (r"(alias|status)$", "${1}es"),
    (r"(octop|vir)us$", "${1}i"),
    (r"(ax|test)is$", "${1}es"),
    (r"s$", "s"),
    (r"$", "s"),
];

const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(quiz)zes$", "${1}"),
    (r"(matr)ices$", "${1}ix"),
    (r"(vert|ind)ices$", "${1}ex"),
    (r"^(ox)en$", "${1}"),
    (r"(alias|status)es$", "${1}"),
    (r"(octop|vir)i$", "${1}us"),
    (r"(cris|ax|test)es$", "${1}is"),
    (r"(shoe)s$", "${1}"),
    (r"(o)es$", "${1}"),
    (r"(bus)es$", "${1}"),
    (r"([ml])ice$", "${1}ouse"),
    (r"(x|ch|ss|sh)es$", "${1}"),
    (r"(m)ovies$", "${1}ovie"),
    (r"(s)eries$", "${1}eries"),
    (r"([^aeiouy]|qu)ies$", "${1}y"),
    (r"(lea|loa|thie|shea)ves$", "${1}f"),
    (r"([lr])ves$", "${1}f"),
    (r"(tive)s$", "${1}"),
    (r"(hive)s$", "${1}"),
    (r"([^f])ves$", "${1}fe"),
    (r"(^analy)ses$", "${1}sis"),
    (r"(analy|ba|diagno|parenthe|progno|synop|the)ses$", "${1}sis"),
    (r"([ti])a$", "${1}um"),
    (r"(n)ews$", "${1}ews"),
    (r"s$", ""),
];

const IRREGULAR: &[IrregularPair] = &[
    IrregularPair::new("person", "people"),
    IrregularPair::new("man", "men"),
    IrregularPair::new("child", "children"),
    IrregularPair::new("sex", "sexes"),
    IrregularPair::new("move", "moves"),
];

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
];

static ENGLISH: LazyLock<Inflector> = LazyLock::new(|| {
    Inflector::new(
        compile(PLURAL_RULES),
        compile(SINGULAR_RULES),
        IRREGULAR.to_vec(),
        UNCOUNTABLE.to_vec(),
    )
});

fn compile(table: &[(&str, &'static str)]) -> Vec<InflectionRule> {
    table
        .iter()
        .map(|(pattern, replacement)| InflectionRule::new(pattern, *replacement).unwrap())
        .collect()
}

/// Table-driven English noun inflection.
///
/// Lookup order per word: uncountable suffixes, irregular suffixes, then the
/// ordered rule list for the requested direction. The first hit wins.
#[derive(Debug, Clone)]
pub struct Inflector {
    plural_rules: Vec<InflectionRule>,
    singular_rules: Vec<InflectionRule>,
    irregular: Vec<IrregularPair>,
    uncountable: Vec<&'static str>,
}

impl Inflector {
    pub fn new(
        plural_rules: Vec<InflectionRule>,
        singular_rules: Vec<InflectionRule>,
        irregular: Vec<IrregularPair>,
        uncountable: Vec<&'static str>,
    ) -> Self {
        Self {
            plural_rules,
            singular_rules,
            irregular,
            uncountable,
        }
    }

    /// Shared instance with the built-in English tables.
    pub fn english() -> &'static Inflector {
        &ENGLISH
    }

    pub fn inflect(&self, word: &str, direction: Direction) -> Result<String> {
        match direction {
            Direction::Plural => self.pluralize(word),
            Direction::Singular => Ok(self.singularize(word)),
        }
    }

    /// Plural form of `word`, or `NoRuleMatched` if no table entry applies.
    pub fn pluralize(&self, word: &str) -> Result<String> {
        self.apply(word, Direction::Plural)
            .ok_or_else(|| Error::NoRuleMatched {
                word: word.to_string(),
            })
    }

    /// Singular form of `word`. Words no rule recognises are returned as-is.
    pub fn singularize(&self, word: &str) -> String {
        self.apply(word, Direction::Singular)
            .unwrap_or_else(|| word.to_string())
    }

    /// Plural form, falling back to the input when no rule matched.
    pub fn pluralize_or_original(&self, word: &str) -> String {
        self.pluralize(word).unwrap_or_else(|_| word.to_string())
    }

    pub fn is_uncountable(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.uncountable.iter().any(|u| lower.ends_with(u))
    }

    fn apply(&self, word: &str, direction: Direction) -> Option<String> {
        if word.trim().is_empty() || self.is_uncountable(word) {
            return Some(word.to_string());
        }

        if let Some(result) = self.apply_irregular(word, direction) {
            debug!(word, %direction, result = %result, "irregular match");
            return Some(result);
        }

        let rules = match direction {
            Direction::Plural => &self.plural_rules,
            Direction::Singular => &self.singular_rules,
        };

        rules.iter().enumerate().find_map(|(index, rule)| {
            let result = rule.apply(word)?;
            debug!(word, %direction, rule = index, result = %result, "rule match");
            Some(result)
        })
    }

    /// Splice the irregular form onto the unmatched prefix, keeping the case
    /// of the first matched character. Pairs with an empty form are ignored.
    fn apply_irregular(&self, word: &str, direction: Direction) -> Option<String> {
        self.irregular.iter().find_map(|pair| {
            let (from, to) = pair.forms(direction);
            if from.is_empty() || to.is_empty() {
                return None;
            }
            let split = word.len().checked_sub(from.len())?;
            if !word.is_char_boundary(split) {
                return None;
            }
            let (prefix, matched) = word.split_at(split);
            if !matched.eq_ignore_ascii_case(from) {
                return None;
            }
            let first = matched.chars().next()?;
            let rest = to.char_indices().nth(1).map_or("", |(i, _)| &to[i..]);
            let mut result = String::with_capacity(prefix.len() + to.len());
            result.push_str(prefix);
            result.push(first);
            result.push_str(rest);
            Some(result)
        })
    }
}

/// Plural form via the English tables.
pub fn pluralize(word: &str) -> Result<String> {
    Inflector::english().pluralize(word)
}

/// Singular form via the English tables.
pub fn singularize(word: &str) -> String {
    Inflector::english().singularize(word)
}
