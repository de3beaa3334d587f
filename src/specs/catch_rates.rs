// src/specs/catch_rates.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Paginated collection header; only the total count matters.
#[derive(Debug, Deserialize)]
pub struct SpeciesCount {
    pub count: u32,
}

/// The slice of one PokeAPI species record this pipeline consumes.
#[derive(Debug, Deserialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub capture_rate: u32,
    pub name: Option<String>,
}

impl SpeciesRecord {
    /// Console label: the API's name, or a placeholder built from the id.
    pub fn label(&self, id: u32) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("unknown-{id}"),
        }
    }
}

/// Catch rates keyed by species id; gaps where the API had no record.
#[derive(Debug, Default)]
pub struct CatchRateTable {
    rates: BTreeMap<u32, u32>,
}

impl CatchRateTable {
    pub fn new() -> Self {
        Self { rates: BTreeMap::new() }
    }

    pub fn insert(&mut self, id: u32, rate: u32) {
        self.rates.insert(id, rate);
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Entries ascending by id.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.rates.iter().map(|(id, rate)| (*id, *rate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_fields_default_when_absent() {
        let full: SpeciesRecord =
            serde_json::from_str(r#"{"capture_rate": 45, "name": "bulbasaur"}"#).unwrap();
        assert_eq!(full.capture_rate, 45);
        assert_eq!(full.label(1), "bulbasaur");

        let bare: SpeciesRecord = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(bare.capture_rate, 0);
        assert_eq!(bare.label(42), "unknown-42");
    }

    #[test]
    fn table_iterates_in_numeric_order() {
        let mut table = CatchRateTable::new();
        table.insert(10, 3);
        table.insert(2, 190);
        table.insert(1, 45);

        let got: Vec<_> = table.iter().collect();
        assert_eq!(got, vec![(1, 45), (2, 190), (10, 3)]);
    }
}
