// src/specs/items.rs

use std::collections::{BTreeMap, HashMap};
use std::error::Error;

use super::IdMap;
use crate::core::{defines, names};

/// Sentinel/placeholder constants that never name a real item.
pub const EXCLUDED_NAMES: &[&str] = &["NONE", "USE_MAIL_EDIT"];

/// Manual verification set: (constant suffix, expansion id).
pub const TEST_ITEMS: &[(&str, u32)] = &[("IRON_PLATE", 265), ("GRASS_GEM", 343)];

/// Everything the item pipeline hands to the emitter.
pub struct ItemMapBundle {
    pub map: IdMap,
    /// Constants with no Showdown counterpart: (expansion id, normalized name).
    pub misses: Vec<(u32, String)>,
    /// The reference table, kept for the verification lines.
    pub showdown: HashMap<String, i64>,
}

/// Expansion id -> normalized name, from raw items.h text. Sentinels and
/// non-positive ids are dropped here.
pub fn expansion_items(text: &str) -> Result<BTreeMap<u32, String>, Box<dyn Error>> {
    let mut out = BTreeMap::new();
    for (name, id) in defines::scan_defines(text, "ITEM")? {
        if EXCLUDED_NAMES.contains(&name.as_str()) || id == 0 {
            continue;
        }
        out.insert(id, names::normalize(&name));
    }
    Ok(out)
}

/// Join expansion constants against the Showdown reference by normalized
/// name. Matches with a non-positive Showdown id are neither mapping nor
/// miss; they simply fall through to the identity default.
pub fn cross_reference(
    expansion: &BTreeMap<u32, String>,
    showdown: HashMap<String, i64>,
) -> ItemMapBundle {
    let mut map = IdMap::new();
    let mut misses = Vec::new();
    for (&exp_id, norm) in expansion {
        match showdown.get(norm) {
            Some(&sd_id) if sd_id > 0 => map.insert(exp_id, sd_id as u32),
            Some(_) => {}
            None => misses.push((exp_id, norm.clone())),
        }
    }
    ItemMapBundle { map, misses, showdown }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEMS_H: &str = r#"
#define ITEM_NONE 0
#define ITEM_IRON_PLATE 265
#define ITEM_GRASS_GEM 343
#define ITEM_USE_MAIL_EDIT 372
#define ITEM_ODDITY 400
#define ITEM_DUMMY 401
"#;

    fn showdown() -> HashMap<String, i64> {
        HashMap::from([
            (s!("ironplate"), 265),
            (s!("grassgem"), 571),
            (s!("dummy"), 0),
        ])
    }

    #[test]
    fn sentinels_and_zero_ids_are_dropped() {
        let items = expansion_items(ITEMS_H).unwrap();
        assert!(!items.values().any(|n| n == "none"));
        assert!(!items.values().any(|n| n == "usemailedit"));
        assert_eq!(items.get(&265), Some(&s!("ironplate")));
    }

    #[test]
    fn equal_ids_match_without_an_override() {
        let items = expansion_items(ITEMS_H).unwrap();
        let bundle = cross_reference(&items, showdown());

        // iron plate: both systems say 265
        assert!(!bundle.map.overrides().any(|(source, _)| source == 265));
        assert_eq!(bundle.map.resolve(265), 265);
    }

    #[test]
    fn differing_ids_become_overrides() {
        let items = expansion_items(ITEMS_H).unwrap();
        let bundle = cross_reference(&items, showdown());

        assert!(bundle.map.overrides().any(|pair| pair == (343, 571)));
        assert_eq!(bundle.map.resolve(343), 571);
    }

    #[test]
    fn unknown_names_count_as_misses() {
        let items = expansion_items(ITEMS_H).unwrap();
        let bundle = cross_reference(&items, showdown());

        assert_eq!(bundle.misses, vec![(400, s!("oddity"))]);
    }

    #[test]
    fn nonpositive_reference_ids_fall_through() {
        let items = expansion_items(ITEMS_H).unwrap();
        let bundle = cross_reference(&items, showdown());

        // "dummy" matched but its reference id is 0: no mapping, no miss
        assert!(!bundle.map.overrides().any(|(source, _)| source == 401));
        assert!(!bundle.misses.iter().any(|(id, _)| *id == 401));
        assert_eq!(bundle.map.resolve(401), 401);
    }
}
