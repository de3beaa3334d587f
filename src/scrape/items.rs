// src/scrape/items.rs

use std::{error::Error, path::Path};

use crate::config::consts::EXPANSION_RAW;
use crate::core::net;
use crate::progress::Progress;
use crate::specs::items::{self, ItemMapBundle};
use crate::store;

/// Load the local Showdown reference, fetch items.h, and join the two.
/// Both inputs are required; either failing aborts the run.
pub fn collect_item_map(
    items_path: &Path,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<ItemMapBundle, Box<dyn Error>> {
    let showdown = store::load_showdown_items(items_path)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "Loaded {} Showdown items from {}",
            showdown.len(),
            items_path.display()
        ));
    }

    let url = format!("{EXPANSION_RAW}/items.h");
    let text = net::get_text(&url)?;
    let expansion = items::expansion_items(&text)?;
    logf!("items.h: {} usable constants", expansion.len());

    Ok(items::cross_reference(&expansion, showdown))
}
