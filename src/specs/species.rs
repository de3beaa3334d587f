// src/specs/species.rs

use std::collections::{BTreeMap, HashMap};
use std::error::Error;

use super::IdMap;
use crate::core::defines;

/// Sentinel constants excluded from the internal-id table.
pub const EXCLUDED_NAMES: &[&str] = &["NONE", "EGG"];

/// Diagnostic examples printed after the table.
pub const EXAMPLE_NAMES: &[&str] =
    &["FLORAGATO", "SPRIGATITO", "MEOWSCARADA", "KLANG", "EEVEE", "TORKOAL"];

/// Everything the species pipeline hands to the emitter.
pub struct SpeciesMapBundle {
    pub map: IdMap,
    /// name -> internal id, kept for the example lines.
    pub species: BTreeMap<String, u32>,
    /// name -> national dex number, kept for the example lines.
    pub national: HashMap<String, u32>,
}

/// name -> internal id from species.h constants.
pub fn species_constants(text: &str) -> Result<BTreeMap<String, u32>, Box<dyn Error>> {
    let mut out = BTreeMap::new();
    for (name, id) in defines::scan_defines(text, "SPECIES")? {
        if EXCLUDED_NAMES.contains(&name.as_str()) || id == 0 {
            continue;
        }
        out.insert(name, id);
    }
    Ok(out)
}

/// name -> dex number from the positional pokedex.h enumeration. The
/// NONE sentinel consumes position 0 but never reaches the table.
pub fn national_dex(text: &str) -> Result<HashMap<String, u32>, Box<dyn Error>> {
    let mut out = HashMap::new();
    for (name, position) in defines::scan_enum_positions(text, "NATIONAL_DEX")? {
        if name != "NONE" {
            out.insert(name, position);
        }
    }
    Ok(out)
}

/// Candidate pairs internal id -> dex number for names present in both
/// tables. Dex number 0 is a reserved absence and never joins.
pub fn cross_reference(
    species: BTreeMap<String, u32>,
    national: HashMap<String, u32>,
) -> SpeciesMapBundle {
    let mut map = IdMap::new();
    for (name, &internal) in &species {
        if let Some(&dex) = national.get(name) {
            if dex > 0 {
                map.insert(internal, dex);
            }
        }
    }
    SpeciesMapBundle { map, species, national }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPECIES_H: &str = r#"
#define SPECIES_NONE 0
#define SPECIES_EEVEE 133
#define SPECIES_TORKOAL 324
#define SPECIES_SPRIGATITO 1289
#define SPECIES_EGG 1290
"#;

    const POKEDEX_H: &str = r#"
    NATIONAL_DEX_NONE,
    NATIONAL_DEX_EEVEE,
    NATIONAL_DEX_TORKOAL,
    NATIONAL_DEX_SPRIGATITO,
"#;

    // Fixture positions: EEVEE=1, TORKOAL=2, SPRIGATITO=3.

    #[test]
    fn sentinels_never_reach_the_tables() {
        let species = species_constants(SPECIES_H).unwrap();
        assert!(!species.contains_key("NONE"));
        assert!(!species.contains_key("EGG"));

        let national = national_dex(POKEDEX_H).unwrap();
        assert!(!national.contains_key("NONE"));
        assert_eq!(national.get("EEVEE"), Some(&1));
    }

    #[test]
    fn differing_ids_become_overrides() {
        let species = species_constants(SPECIES_H).unwrap();
        let national = national_dex(POKEDEX_H).unwrap();
        let bundle = cross_reference(species, national);

        assert!(bundle.map.overrides().any(|pair| pair == (324, 2)));
        assert!(bundle.map.overrides().any(|pair| pair == (1289, 3)));
    }

    #[test]
    fn equal_ids_match_without_an_override() {
        let species = BTreeMap::from([(s!("EEVEE"), 133)]);
        let national = HashMap::from([(s!("EEVEE"), 133)]);
        let bundle = cross_reference(species, national);

        assert_eq!(bundle.map.len(), 1);
        assert_eq!(bundle.map.override_count(), 0);
        assert_eq!(bundle.map.resolve(133), 133);
    }

    #[test]
    fn names_missing_from_either_side_are_dropped() {
        let species = species_constants(SPECIES_H).unwrap();
        let national = national_dex(POKEDEX_H).unwrap();
        let bundle = cross_reference(species, national);

        // EEVEE=133 vs dex 1 differs, TORKOAL and SPRIGATITO join too,
        // nothing else made it through
        assert_eq!(bundle.map.len(), 3);
    }
}
