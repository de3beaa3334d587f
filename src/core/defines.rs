// src/core/defines.rs

// State-free extraction over C-style constant headers. Callers pass raw
// text plus a symbol prefix and get `(name, value)` pairs back in
// appearance order. Filtering sentinels is the caller's concern.

use std::error::Error;

use regex::Regex;

/// All `#define <prefix>_<NAME> <value>` pairs, in appearance order.
/// Values are read as decimal digits; a hex value like `0xFF` captures
/// its leading `0`, which downstream non-positive filters discard.
pub fn scan_defines(text: &str, prefix: &str) -> Result<Vec<(String, u32)>, Box<dyn Error>> {
    let re = Regex::new(&format!(r"#define\s+{prefix}_(\w+)\s+(\d+)"))?;
    let mut out = Vec::new();
    for cap in re.captures_iter(text) {
        if let Ok(value) = cap[2].parse::<u32>() {
            out.push((cap[1].to_string(), value));
        }
    }
    Ok(out)
}

/// Positional enumeration scan: each line opening with `<prefix>_<NAME>`
/// consumes the next zero-based position. Sentinel entries are returned
/// too; they hold a position even though no real mapping uses them.
pub fn scan_enum_positions(text: &str, prefix: &str) -> Result<Vec<(String, u32)>, Box<dyn Error>> {
    let re = Regex::new(&format!(r"^\s*{prefix}_(\w+)\s*,?"))?;
    let mut out = Vec::new();
    let mut position = 0u32;
    for line in text.lines() {
        if let Some(cap) = re.captures(line) {
            out.push((cap[1].to_string(), position));
            position += 1;
        }
    }
    Ok(out)
}
