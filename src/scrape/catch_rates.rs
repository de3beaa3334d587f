// src/scrape/catch_rates.rs

use std::{error::Error, thread, time::Duration};

use crate::config::consts::{POKEAPI_SPECIES, THROTTLE_EVERY, THROTTLE_PAUSE_MS};
use crate::core::net;
use crate::progress::Progress;
use crate::specs::catch_rates::{CatchRateTable, SpeciesCount, SpeciesRecord};

/// Discover the species count, then walk every id in `1..=count`.
/// Only the count fetch is fatal; per-id failures are logged and the
/// loop moves on. A 404 is an expected gap, not a failure.
pub fn collect_catch_rates(
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<CatchRateTable, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching Pokemon count...");
    }

    let count_url = format!("{POKEAPI_SPECIES}?limit=1");
    let total = net::get_json::<SpeciesCount>(&count_url)?
        .ok_or("species collection endpoint returned 404")?
        .count;

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Total Pokemon species: {total}"));
        p.begin(total as usize);
    }

    let mut table = CatchRateTable::new();
    for id in 1..=total {
        let url = format!("{POKEAPI_SPECIES}/{id}");
        match net::get_json::<SpeciesRecord>(&url) {
            Ok(Some(record)) => {
                table.insert(id, record.capture_rate);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, &format!("{}: {}", record.label(id), record.capture_rate));
                }
            }
            Ok(None) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, "Not found");
                }
            }
            Err(e) => {
                loge!("species {id}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(id, &format!("Error: {e}"));
                }
            }
        }

        // be polite
        if id % THROTTLE_EVERY == 0 {
            thread::sleep(Duration::from_millis(THROTTLE_PAUSE_MS));
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(table)
}
