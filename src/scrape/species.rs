// src/scrape/species.rs

use std::error::Error;

use crate::config::consts::EXPANSION_RAW;
use crate::core::net;
use crate::progress::Progress;
use crate::specs::species::{self, SpeciesMapBundle};

/// Fetch species.h and pokedex.h, then join explicit constants against
/// the positional dex enumeration. Both fetches are required.
pub fn collect_species_map(
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<SpeciesMapBundle, Box<dyn Error>> {
    let species_url = format!("{EXPANSION_RAW}/species.h");
    let species_text = net::get_text(&species_url)?;
    let constants = species::species_constants(&species_text)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("species.h: {} usable constants", constants.len()));
    }

    let pokedex_url = format!("{EXPANSION_RAW}/pokedex.h");
    let pokedex_text = net::get_text(&pokedex_url)?;
    let national = species::national_dex(&pokedex_text)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("pokedex.h: {} dex entries", national.len()));
    }
    logf!(
        "species join inputs: {} constants, {} dex entries",
        constants.len(),
        national.len()
    );

    Ok(species::cross_reference(constants, national))
}
