// src/core/names.rs

/// Canonical cross-system join key: lower-cased, separators stripped.
/// `IRON_PLATE` becomes `ironplate`, matching the Showdown id scheme.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
