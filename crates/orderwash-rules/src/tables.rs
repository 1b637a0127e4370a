//! The three lookup tables the pipeline consults.
//!
//! All of these reflect observed noise in upstream feeds rather than fixed
//! logic, so they are open tables: a new sentinel spelling or country
//! abbreviation is a rules-file edit, not a code change. Matching is
//! case-insensitive throughout; entries are stored folded to lowercase.

use std::collections::{BTreeMap, BTreeSet};

/// Order-id values that mark a structurally invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSentinels {
    entries: BTreeSet<String>,
}

impl IdSentinels {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(&value.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Placeholder product names that mark a record as unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductBlacklist {
    entries: BTreeSet<String>,
}

impl ProductBlacklist {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, product_name: &str) -> bool {
        self.entries.contains(&product_name.trim().to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Known abbreviation/casing variants mapped to one canonical country name.
///
/// Unmapped values are not an error: the table grows as new variants are
/// observed, and callers pass unrecognized spellings through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryAliases {
    aliases: BTreeMap<String, String>,
}

impl CountryAliases {
    pub fn new<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(k, v)| (k.as_ref().trim().to_lowercase(), v.into()))
                .collect(),
        }
    }

    /// The canonical name for a known variant, `None` when unmapped.
    pub fn canonical(&self, value: &str) -> Option<&str> {
        self.aliases
            .get(&value.trim().to_lowercase())
            .map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
