// src/config/consts.rs

// Net config
pub const USER_AGENT: &str = "dexgen/0.3";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Remote sources
pub const POKEAPI_SPECIES: &str = "https://pokeapi.co/api/v2/pokemon-species";
pub const EXPANSION_RAW: &str =
    "https://raw.githubusercontent.com/rh-hideout/pokeemerald-expansion/master/include/constants";

// Scrape
pub const THROTTLE_EVERY: u32 = 100; // ids per chunk
pub const THROTTLE_PAUSE_MS: u64 = 1000; // be polite

// Local reference + artifacts
pub const DEFAULT_DATA_DIR: &str = "data";
pub const CATCH_RATES_FILE: &str = "catchrates.json";
pub const SHOWDOWN_ITEMS_FILE: &str = "items.json";
