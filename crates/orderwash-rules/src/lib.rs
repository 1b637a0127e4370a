//! Data-quality rule tables for the orderwash pipeline.
//!
//! The sentinel list, product placeholder blacklist, and country alias map
//! are configuration data, not logic. They ship with compiled-in defaults
//! covering the noise observed so far and can be replaced wholesale or in
//! part by a TOML rules file (see [`RuleSet::load`]).

use std::path::{Path, PathBuf};

pub mod error;
mod loader;
pub mod tables;

pub use error::RulesError;
pub use tables::{CountryAliases, IdSentinels, ProductBlacklist};

/// Environment variable naming a rules file to load instead of the defaults.
pub const RULES_ENV_VAR: &str = "ORDERWASH_RULES";

/// The complete set of lookup tables a pipeline run consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    pub id_sentinels: IdSentinels,
    pub product_blacklist: ProductBlacklist,
    pub country_aliases: CountryAliases,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            id_sentinels: IdSentinels::new(["", "0", "???", "99999", "ORDX", "OrderID"]),
            product_blacklist: ProductBlacklist::new([
                "unknown",
                "unknown item",
                "unknown product",
                "n/a",
                "none",
                "()",
                "???",
                "-",
            ]),
            country_aliases: CountryAliases::new([
                ("us", "United States"),
                ("usa", "United States"),
                ("u.s.", "United States"),
                ("u.s.a.", "United States"),
                ("united states", "United States"),
                ("united states of america", "United States"),
                ("uk", "United Kingdom"),
                ("u.k.", "United Kingdom"),
                ("gb", "United Kingdom"),
                ("great britain", "United Kingdom"),
                ("united kingdom", "United Kingdom"),
                ("uae", "United Arab Emirates"),
                ("united arab emirates", "United Arab Emirates"),
                ("de", "Germany"),
                ("ger", "Germany"),
                ("deutschland", "Germany"),
                ("germany", "Germany"),
                ("nl", "Netherlands"),
                ("holland", "Netherlands"),
                ("netherlands", "Netherlands"),
                ("ca", "Canada"),
                ("can", "Canada"),
                ("canada", "Canada"),
                ("au", "Australia"),
                ("aus", "Australia"),
                ("australia", "Australia"),
                ("fr", "France"),
                ("france", "France"),
                ("es", "Spain"),
                ("spain", "Spain"),
                ("in", "India"),
                ("ind", "India"),
                ("india", "India"),
            ]),
        }
    }
}

impl RuleSet {
    /// Load a rules file, keeping defaults for any omitted section.
    pub fn load(path: &Path) -> Result<Self, RulesError> {
        loader::load_rules_file(path)
    }

    /// The tables a run uses when no explicit rules file is given:
    /// `ORDERWASH_RULES` if set, otherwise the compiled-in defaults.
    pub fn load_default() -> Result<Self, RulesError> {
        match std::env::var(RULES_ENV_VAR) {
            Ok(path) => Self::load(&PathBuf::from(path)),
            Err(_) => Ok(Self::default()),
        }
    }
}
