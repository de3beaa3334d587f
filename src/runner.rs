// src/runner.rs
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::options::{Options, PageKind},
    file,
    progress::Progress,
    scrape,
};

/// Summary of what was produced. The mappers write to stdout only, so
/// their summaries carry no paths.
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
}

/// Top-level runner: dispatch on page kind and run.
/// `progress` can be None (no console updates) or Some(&mut impl Progress).
pub fn run(
    opts: &Options,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    match opts.page {
        PageKind::CatchRates => run_catch_rates(opts, progress),
        PageKind::ItemMap => run_item_map(opts, progress),
        PageKind::SpeciesMap => run_species_map(opts, progress),
    }
}

fn run_catch_rates(
    opts: &Options,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let table = scrape::collect_catch_rates(progress.as_deref_mut())?;

    let path = opts.catch_rates_path();
    let written = file::write_catch_rates(&path, &table)?;
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!(
            "\nWrote {} catch rates to {}",
            table.len(),
            written.display()
        ));
    }

    Ok(RunSummary { files_written: vec![written] })
}

fn run_item_map(
    opts: &Options,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let bundle = scrape::collect_item_map(&opts.items_path(), progress.as_deref_mut())?;

    let mut text = file::render_id_table(
        "EXPANSION_ITEM_TO_SHOWDOWN",
        &[
            "Maps pokeemerald-expansion item IDs to Showdown item IDs.",
            "Only items where the IDs differ are included.",
        ],
        &bundle.map,
    );
    text.push('\n');
    text.push_str(&format!("// Total mappings: {}\n", bundle.map.override_count()));
    text.push_str(&format!("// Items not found in Showdown: {}\n", bundle.misses.len()));
    text.push_str(&file::render_item_checks(&bundle));
    print!("{text}");

    Ok(RunSummary { files_written: Vec::new() })
}

fn run_species_map(
    _opts: &Options,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let bundle = scrape::collect_species_map(progress.as_deref_mut())?;

    let mut text = file::render_id_table(
        "EXPANSION_TO_NATIONAL_DEX",
        &[
            "Maps pokeemerald-expansion internal species IDs to national dex numbers.",
            "Generated from pokeemerald-expansion species.h and pokedex.h.",
        ],
        &bundle.map,
    );
    text.push('\n');
    text.push_str(&format!(
        "// Total mappings where internal != national: {}\n",
        bundle.map.override_count()
    ));
    text.push_str(&format!("// Total species: {}\n", bundle.map.len()));
    text.push_str(&file::render_species_examples(&bundle));
    print!("{text}");

    Ok(RunSummary { files_written: Vec::new() })
}
