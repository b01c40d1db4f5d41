use anyhow::{Context, Result};
use clap::Parser;
use mapgen::generate_map;
use tools::init_tracing;
use tools::params::GenerationArgs;
use tools::preview::render_preview;

#[derive(Parser)]
#[command(author, version, about = "Print a generated map as text, one character per cell")]
struct Args {
    #[command(flatten)]
    generation: GenerationArgs,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let config = args.generation.resolve()?;
    let seed = config.seed;
    let map = generate_map(config).context("Map generation failed")?;

    println!("seed {seed}, fingerprint {:016x}", map.fingerprint());
    print!("{}", render_preview(&map));
    Ok(())
}
