//! Generation settings layered from defaults, an optional TOML file, and command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use mapgen::{GenerationConfig, IslandParams, LayeredParams, Strategy};
use serde::Deserialize;

/// TOML schema for `--params` files. Every key is optional.
///
/// ```toml
/// width = 64
/// seed = 7
///
/// [strategy]
/// kind = "layered"
/// mountains = { axiom = ["S"], generations = 12 }
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParamsFile {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub seed: Option<u64>,
    pub strategy: Option<Strategy>,
}

impl ParamsFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read params file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse params file: {}", path.display()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    Layered,
    Island,
}

#[derive(Args, Debug, Default)]
pub struct GenerationArgs {
    /// Map width in cells [default: 100]
    #[arg(long)]
    pub width: Option<usize>,
    /// Map height in cells [default: 100]
    #[arg(long)]
    pub height: Option<usize>,
    /// Generation seed [default: fresh random seed]
    #[arg(long)]
    pub seed: Option<u64>,
    /// Generation strategy; overrides the params file kind but keeps its tuning when kinds match
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyKind>,
    /// TOML file with width, height, seed, and strategy tuning
    #[arg(long)]
    pub params: Option<PathBuf>,
}

impl GenerationArgs {
    /// Flags win over the params file, which wins over library defaults.
    pub fn resolve(&self) -> Result<GenerationConfig> {
        let file = match &self.params {
            Some(path) => ParamsFile::load(path)?,
            None => ParamsFile::default(),
        };

        let strategy = match self.strategy {
            Some(kind) => Some(strategy_of_kind(kind, file.strategy)),
            None => file.strategy,
        };

        GenerationConfig::builder()
            .width(self.width.or(file.width))
            .height(self.height.or(file.height))
            .seed(self.seed.or(file.seed))
            .strategy(strategy)
            .build()
            .context("Invalid generation settings")
    }
}

fn strategy_of_kind(kind: StrategyKind, from_file: Option<Strategy>) -> Strategy {
    match (kind, from_file) {
        (StrategyKind::Layered, Some(strategy @ Strategy::Layered(_)))
        | (StrategyKind::Island, Some(strategy @ Strategy::Island(_))) => strategy,
        (StrategyKind::Layered, _) => Strategy::Layered(LayeredParams::default()),
        (StrategyKind::Island, _) => Strategy::Island(IslandParams::default()),
    }
}
