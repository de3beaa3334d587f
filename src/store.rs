// src/store.rs

// Read-only access to the local Showdown reference data.

use std::{collections::HashMap, error::Error, fs, path::Path};

use serde::Deserialize;

/// One entry of the Showdown item table. The file is keyed by Showdown
/// item id, which is already the normalized item name.
#[derive(Debug, Deserialize)]
pub struct ShowdownItem {
    #[serde(default)]
    pub num: i64,
    #[serde(default)]
    pub name: String,
}

/// Load the reference table as normalized name -> canonical numeric id.
pub fn load_showdown_items(path: &Path) -> Result<HashMap<String, i64>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let items: HashMap<String, ShowdownItem> = serde_json::from_str(&text)?;
    Ok(items.into_iter().map(|(id, item)| (id, item.num)).collect())
}
