//! Sequence ids derived from the persisted collection (max existing + 1).

/// Next id for plain decimal ids (`"1"`, `"2"`, ...).
pub fn next_numeric_id<'a>(existing: impl IntoIterator<Item = &'a str>) -> String {
    next_prefixed_id("", existing)
}

/// Next id of the form `<prefix><n>`. Ids without the prefix or a numeric
/// suffix are ignored.
pub fn next_prefixed_id<'a>(prefix: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let max = existing
        .into_iter()
        .filter_map(|id| id.strip_prefix(prefix))
        .filter_map(|n| n.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    format!("{}{}", prefix, max + 1)
}
