// src/bin/dexgen.rs
use color_eyre::eyre::eyre;
use dexgen::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run().map_err(|e| eyre!("{e}"))
}
