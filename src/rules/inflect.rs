//! Table-name singularization for `exists:users` → `user`.

/// Singularize a (possibly snake_case) plural table name. Only the last
/// segment changes, so `order_items` becomes `order_item`.
pub fn singularize(word: &str) -> String {
    match word.rfind('_') {
        Some(idx) => format!("{}{}", &word[..=idx], facet_singularize::singularize(&word[idx + 1..])),
        None => facet_singularize::singularize(word),
    }
}
