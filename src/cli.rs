// src/cli.rs
use std::{env, path::PathBuf};

use crate::config::options::{Options, PageKind};
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cli()?;
    let mut progress = ConsoleProgress::default();
    runner::run(&opts, Some(&mut progress)).map(|_| ())
}

fn parse_cli() -> Result<Options, Box<dyn std::error::Error>> {
    let mut page = None;
    let mut out = None;
    let mut items = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--page" => {
                let v = args.next().ok_or("Missing value for --page")?;
                page = Some(match v.to_ascii_lowercase().as_str() {
                    "catch-rates" => PageKind::CatchRates,
                    "item-map" => PageKind::ItemMap,
                    "species-map" => PageKind::SpeciesMap,
                    other => return Err(format!("Unknown page: {}", other).into()),
                });
            }
            "-o" | "--out" => out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--items" => {
                items = Some(PathBuf::from(args.next().ok_or("Missing value for --items")?))
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    let page = page.ok_or("Specify --page <catch-rates|item-map|species-map>")?;
    let mut opts = Options::new(page);
    opts.out = out;
    opts.items = items;
    Ok(opts)
}

/// Prints one line per processed id, `[id/total]`-prefixed like the
/// rest of the generation tooling.
#[derive(Default)]
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, id: u32, msg: &str) {
        println!("[{}/{}] {}", id, self.total, msg);
    }
}
