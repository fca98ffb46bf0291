//! Conway's Game of Life survival rule over a 3x3 neighbourhood.
//!
//! Cells are laid out row by row; index 4 is the centre cell. Live cells are
//! 1.0, dead cells 0.0.

const CENTRE: usize = 4;

/// Number of live cells around the centre.
pub fn live_neighbours(cells: &[f64; 9]) -> usize {
    cells
        .iter()
        .enumerate()
        .filter(|&(i, &c)| i != CENTRE && c == 1.0)
        .count()
}

/// 1.0 if the centre cell is alive in the next generation, else 0.0.
///
/// A dead centre is born with exactly three live neighbours; a live centre
/// survives with two or three.
pub fn survives(cells: &[f64; 9]) -> f64 {
    let neighbours = live_neighbours(cells);
    let alive = if cells[CENTRE] == 1.0 {
        neighbours == 2 || neighbours == 3
    } else {
        cells[CENTRE] == 0.0 && neighbours == 3
    };
    if alive { 1.0 } else { 0.0 }
}
