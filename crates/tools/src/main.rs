use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mapgen::generate_map;
use tools::init_tracing;
use tools::params::GenerationArgs;

#[derive(Parser)]
#[command(author, version, about = "Generate a map and write it as JSON", long_about = None)]
struct Args {
    #[command(flatten)]
    generation: GenerationArgs,
    /// Write the JSON to this file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.generation.resolve()?;
    tracing::info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        strategy = config.strategy.name(),
        "resolved generation settings"
    );
    let map = generate_map(config).context("Map generation failed")?;

    let json = if args.pretty { map.to_json_pretty() } else { map.to_json() };
    let json = json.context("Failed to serialize map JSON")?;

    match &args.out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write map file: {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
