//! TOML rules-file loading.
//!
//! A rules file may override any subset of the tables; omitted sections keep
//! the compiled-in defaults. Example:
//!
//! ```toml
//! [identity]
//! sentinels = ["", "0", "???", "99999", "ORDX", "OrderID", "TEST"]
//!
//! [product]
//! placeholders = ["unknown", "unknown item", "()"]
//!
//! [country.aliases]
//! usa = "United States"
//! "u.s." = "United States"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::RuleSet;
use crate::error::RulesError;
use crate::tables::{CountryAliases, IdSentinels, ProductBlacklist};

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RulesFile {
    #[serde(default)]
    identity: Option<IdentitySection>,
    #[serde(default)]
    product: Option<ProductSection>,
    #[serde(default)]
    country: Option<CountrySection>,
}

#[derive(Debug, Deserialize)]
struct IdentitySection {
    sentinels: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ProductSection {
    placeholders: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct CountrySection {
    aliases: std::collections::BTreeMap<String, String>,
}

impl RulesFile {
    pub(crate) fn into_rule_set(self) -> RuleSet {
        let defaults = RuleSet::default();
        RuleSet {
            id_sentinels: self
                .identity
                .map(|s| IdSentinels::new(s.sentinels))
                .unwrap_or(defaults.id_sentinels),
            product_blacklist: self
                .product
                .map(|s| ProductBlacklist::new(s.placeholders))
                .unwrap_or(defaults.product_blacklist),
            country_aliases: self
                .country
                .map(|s| CountryAliases::new(s.aliases))
                .unwrap_or(defaults.country_aliases),
        }
    }
}

pub(crate) fn load_rules_file(path: &Path) -> Result<RuleSet, RulesError> {
    let text = std::fs::read_to_string(path).map_err(|source| RulesError::io(path, source))?;
    let file: RulesFile = toml::from_str(&text).map_err(|source| RulesError::Toml {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.into_rule_set())
}
