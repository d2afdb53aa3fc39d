//! provpop-report: command-line report generator for the provincial
//! population dataset.
//!
//! Usage:
//!   provpop-report --seed 800 --total 202000000 --data data/province_data.json

use anyhow::Result;
use provpop_core::{
    Dataset, GeneratorConfig, LatexTable, PlainTextReport, ProvinceCatalog, DEFAULT_TARGET_TOTAL,
    REFERENCE_SEED,
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", REFERENCE_SEED);
    let total = parse_arg(&args, "--total", DEFAULT_TARGET_TOTAL);
    let data = args
        .windows(2)
        .find(|w| w[0] == "--data")
        .map(|w| w[1].as_str())
        .unwrap_or("data/province_data.json");

    log::info!("generating dataset: seed={seed} total={total} data={data}");

    let mut config = GeneratorConfig::new(seed);
    config.target_total = total;
    let dataset = Dataset::generate(config)?;

    let catalog = ProvinceCatalog::load(Path::new(data))?;
    let provinces = catalog.into_provinces(&dataset)?;

    println!();
    println!("{}", PlainTextReport::new(&provinces).render());
    println!();
    println!("Iteration count: {}", dataset.iterations());
    println!();
    println!("{}", LatexTable::new(&provinces).render());

    Ok(())
}

fn parse_arg<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
