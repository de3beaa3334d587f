// src/file.rs

// Output formatting. Pipelines hand over finished mapping values; this
// module decides how they land on disk or stdout. Extraction code never
// formats anything.

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use serde_json::{Map, Value};

use crate::core::names;
use crate::specs::IdMap;
use crate::specs::catch_rates::CatchRateTable;
use crate::specs::items::{ItemMapBundle, TEST_ITEMS};
use crate::specs::species::{EXAMPLE_NAMES, SpeciesMapBundle};

pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    if !path.as_os_str().is_empty() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Write the catch-rate artifact: pretty-printed JSON whose stringified
/// keys are ordered by numeric value, not lexical string order.
pub fn write_catch_rates(path: &Path, table: &CatchRateTable) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        ensure_directory(parent)?;
    }

    let mut object = Map::new();
    for (id, rate) in table.iter() {
        object.insert(id.to_string(), Value::from(rate));
    }
    let mut text = serde_json::to_string_pretty(&Value::Object(object))?;
    text.push('\n');

    fs::write(path, text)?;
    Ok(path.to_path_buf())
}

/// Render a cross-reference table as a source literal ready to paste
/// into the downstream codebase. Only differing pairs are written; the
/// consumer defaults every other id to itself.
pub fn render_id_table(const_name: &str, doc_lines: &[&str], map: &IdMap) -> String {
    let mut out = s!();
    for line in doc_lines {
        out.push_str("// ");
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&format!("pub static {const_name}: &[(u32, u32)] = &[\n"));
    for (source, target) in map.overrides() {
        out.push_str(&format!("    ({source}, {target}),\n"));
    }
    out.push_str("];\n");
    out
}

/// Manual verification lines for the item table: raw ids on both sides
/// plus the final value the identity-fallback lookup would produce.
pub fn render_item_checks(bundle: &ItemMapBundle) -> String {
    let mut out = s!("\n// Verification:\n");
    for &(name, exp_id) in TEST_ITEMS {
        let norm = names::normalize(name);
        let showdown = match bundle.showdown.get(&norm) {
            Some(num) => num.to_string(),
            None => s!("NOT FOUND"),
        };
        let mapped = bundle.map.resolve(exp_id);
        out.push_str(&format!(
            "// {name}: expansion={exp_id}, showdown={showdown}, mapped={mapped}\n"
        ));
    }
    out
}

/// Diagnostic example lines for the species table, raw ids only, for
/// the names present in both source tables.
pub fn render_species_examples(bundle: &SpeciesMapBundle) -> String {
    let mut out = s!("\n// Examples:\n");
    for &name in EXAMPLE_NAMES {
        if let (Some(&internal), Some(&dex)) =
            (bundle.species.get(name), bundle.national.get(name))
        {
            out.push_str(&format!("// {name}: internal={internal}, national={dex}\n"));
        }
    }
    out
}
