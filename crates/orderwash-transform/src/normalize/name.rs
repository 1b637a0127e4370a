//! Customer-name cleaning.

/// Clean a customer name: strip quote artifacts, collapse whitespace runs,
/// and apply first-upper/rest-lower casing.
///
/// A blank name is not an error; it becomes `None`. This normalizer never
/// rejects a record.
pub fn clean_customer_name(value: Option<&str>) -> Option<String> {
    let raw = value?.trim();
    if raw.is_empty() {
        return None;
    }

    let stripped: String = raw.chars().filter(|c| !matches!(c, '\'' | '"')).collect();
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        return None;
    }

    Some(capitalize_first(&collapsed))
}

fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
