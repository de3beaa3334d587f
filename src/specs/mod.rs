// src/specs/mod.rs
//! # Pipeline specs
//!
//! Each spec owns the **pure** half of one generation pipeline: how raw
//! fetched material (API JSON, header text) turns into mapping values.
//!
//! ## What lives here
//! - Constant extraction and name joining for the two id mappers.
//! - The record/table types the catch-rate fetcher assembles.
//! - Exclusion lists for sentinel names, and the fixed verification and
//!   example sets printed alongside the mapper output.
//!
//! ## What does **not** live here
//! - **Fetching**: `scrape::collect_*` drives the network and feeds the
//!   raw text/records in.
//! - **Emission**: `file` decides how a finished mapping is serialized
//!   (JSON artifact vs. source-literal text).
//!
//! Keeping the specs free of I/O means every one of them is testable
//! offline against captured fixture text.

pub mod catch_rates;
pub mod items;
pub mod species;

use std::collections::BTreeMap;

/// Cross-reference mapping between two id systems. Holds every matched
/// pair; identity pairs stay in so counts and verification lines can see
/// them, but emission is restricted to pairs whose ids differ.
#[derive(Debug, Default)]
pub struct IdMap {
    pairs: BTreeMap<u32, u32>,
}

impl IdMap {
    pub fn new() -> Self {
        Self { pairs: BTreeMap::new() }
    }

    pub fn insert(&mut self, source: u32, target: u32) {
        self.pairs.insert(source, target);
    }

    /// Pairs whose ids differ, ascending by source id.
    pub fn overrides(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.pairs
            .iter()
            .filter(|(source, target)| source != target)
            .map(|(source, target)| (*source, *target))
    }

    pub fn override_count(&self) -> usize {
        self.overrides().count()
    }

    /// Total matched pairs, identity pairs included.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Identity-fallback lookup: an id with no override resolves to
    /// itself. Downstream consumers are expected to share this contract.
    pub fn resolve(&self, id: u32) -> u32 {
        self.pairs.get(&id).copied().unwrap_or(id)
    }
}
