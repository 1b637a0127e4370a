//! Country canonicalization.

use orderwash_rules::CountryAliases;

/// Map a country value to its canonical full name where the alias table
/// knows the variant; unmapped values pass through trimmed but unchanged.
/// Blank input becomes `None`.
pub fn normalize_country(aliases: &CountryAliases, value: Option<&str>) -> Option<String> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }
    match aliases.canonical(raw) {
        Some(canonical) => Some(canonical.to_string()),
        None => Some(raw.to_string()),
    }
}
