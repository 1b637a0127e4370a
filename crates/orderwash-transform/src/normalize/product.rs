//! Product-name validation against the placeholder blacklist.

use orderwash_rules::ProductBlacklist;

/// A usable product name: trimmed, non-blank, and not a known placeholder.
/// Returns `None` when the record must be rejected as `invalid_product`.
pub fn usable_product_name(blacklist: &ProductBlacklist, value: Option<&str>) -> Option<String> {
    let raw = value?.trim();
    if raw.is_empty() || blacklist.matches(raw) {
        return None;
    }
    Some(raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blacklist() -> ProductBlacklist {
        ProductBlacklist::new(["unknown", "unknown item", "()", "???"])
    }

    #[test]
    fn real_names_pass() {
        assert_eq!(
            usable_product_name(&blacklist(), Some(" Denim Jacket ")),
            Some("Denim Jacket".to_string())
        );
    }

    #[test]
    fn placeholders_are_rejected_case_insensitively() {
        assert_eq!(usable_product_name(&blacklist(), Some("Unknown Item")), None);
        assert_eq!(usable_product_name(&blacklist(), Some("UNKNOWN")), None);
        assert_eq!(usable_product_name(&blacklist(), Some("()")), None);
    }

    #[test]
    fn missing_or_blank_is_rejected() {
        assert_eq!(usable_product_name(&blacklist(), None), None);
        assert_eq!(usable_product_name(&blacklist(), Some("   ")), None);
    }
}
