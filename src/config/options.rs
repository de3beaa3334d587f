// src/config/options.rs
use std::path::PathBuf;

use super::consts::{CATCH_RATES_FILE, DEFAULT_DATA_DIR, SHOWDOWN_ITEMS_FILE};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    CatchRates,
    ItemMap,
    SpeciesMap,
}

#[derive(Clone, Debug)]
pub struct Options {
    pub page: PageKind,
    pub out: Option<PathBuf>,   // catch-rates artifact path override
    pub items: Option<PathBuf>, // Showdown reference path override
}

impl Options {
    pub fn new(page: PageKind) -> Self {
        Self { page, out: None, items: None }
    }

    /// Where the catch-rates artifact lands.
    pub fn catch_rates_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(CATCH_RATES_FILE))
    }

    /// Where the local Showdown item reference is read from.
    pub fn items_path(&self) -> PathBuf {
        self.items
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join(SHOWDOWN_ITEMS_FILE))
    }
}
