//! Public data models for generated maps.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::config::GenerationConfig;
use crate::grid::Coord;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Sea,
    Grass,
    Beach,
    Mountain,
    Empty,
}

impl CellType {
    fn code(self) -> u8 {
        match self {
            Self::Sea => 0,
            Self::Grass => 1,
            Self::Beach => 2,
            Self::Mountain => 3,
            Self::Empty => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapCell {
    #[serde(rename = "type")]
    pub kind: CellType,
    /// Noise height in `[-1, 1]`; only noise-driven generation sets it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl MapCell {
    pub const fn new(kind: CellType) -> Self {
        Self { kind, depth: None }
    }

    pub const fn with_depth(kind: CellType, depth: f64) -> Self {
        Self { kind, depth: Some(depth) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaData {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
}

impl From<&GenerationConfig> for MetaData {
    fn from(config: &GenerationConfig) -> Self {
        Self { width: config.width, height: config.height, seed: config.seed }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub cells: Vec<Vec<MapCell>>,
}

impl Layer {
    pub fn cell_at(&self, coord: Coord) -> Option<&MapCell> {
        if coord.y < 0 || coord.x < 0 {
            return None;
        }
        self.cells.get(coord.y as usize)?.get(coord.x as usize)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Map {
    pub metadata: MetaData,
    #[serde(rename = "mapGrid")]
    pub map_grid: Vec<Layer>,
}

impl Map {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.metadata.width as u32).to_le_bytes());
        bytes.extend((self.metadata.height as u32).to_le_bytes());
        bytes.extend(self.metadata.seed.to_le_bytes());
        bytes.extend((self.map_grid.len() as u32).to_le_bytes());
        for layer in &self.map_grid {
            for row in &layer.cells {
                for cell in row {
                    bytes.push(cell.kind.code());
                    match cell.depth {
                        Some(depth) => {
                            bytes.push(1);
                            bytes.extend(depth.to_bits().to_le_bytes());
                        }
                        None => bytes.push(0),
                    }
                }
            }
        }
        bytes
    }

    /// xxh3 digest of [`Map::canonical_bytes`].
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
