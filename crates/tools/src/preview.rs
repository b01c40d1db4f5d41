//! Plain-text rendering of a generated map, one character per cell.

use mapgen::{CellType, Map};

pub fn cell_symbol(kind: CellType) -> char {
    match kind {
        CellType::Sea => '~',
        CellType::Grass => '.',
        CellType::Beach => ':',
        CellType::Mountain => '^',
        CellType::Empty => ' ',
    }
}

/// Renders the topmost layer, one text line per row.
pub fn render_preview(map: &Map) -> String {
    let Some(layer) = map.map_grid.last() else {
        return String::new();
    };
    let mut out = String::with_capacity((map.metadata.width + 1) * map.metadata.height);
    for row in &layer.cells {
        out.extend(row.iter().map(|cell| cell_symbol(cell.kind)));
        out.push('\n');
    }
    out
}
