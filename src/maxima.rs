extern crate alloc;
use alloc::vec::Vec;

use crate::grid::{Grid, NEIGHBOR_OFFSETS};

/// A local maximum of the histogram: a cell whose hit count no neighbor
/// strictly exceeds, carrying the cell's average color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMaximum {
    /// Hit count of the originating cell.
    pub hit_count: u32,
    /// Linear index of the originating cell.
    pub cell_index: usize,
    /// Average red of the cell, normalized to [0, 1].
    pub r: f32,
    /// Average green of the cell, normalized to [0, 1].
    pub g: f32,
    /// Average blue of the cell, normalized to [0, 1].
    pub b: f32,
}

impl LocalMaximum {
    /// Euclidean distance from this maximum's average color to another
    /// normalized RGB color.
    pub fn distance_to(&self, r: f32, g: f32, b: f32) -> f32 {
        let dr = self.r - r;
        let dg = self.g - g;
        let db = self.b - b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Find every local maximum of a populated grid, sorted by descending hit
/// count.
///
/// Cells are scanned in ascending linear-index order and the sort is stable,
/// so equal hit counts keep discovery order and the result is deterministic
/// for a given input. Equal neighbor counts do not disqualify a cell;
/// adjacent cells of a plateau all qualify independently.
pub fn find_local_maxima(grid: &Grid) -> Vec<LocalMaximum> {
    let resolution = grid.resolution();
    let mut maxima = Vec::new();

    for b in 0..resolution {
        for g in 0..resolution {
            for r in 0..resolution {
                let index = grid.cell_index(r, g, b);
                let cell = grid.cell(index);
                // Zero-hit cells are not candidates.
                if cell.hit_count == 0 {
                    continue;
                }
                if !is_local_maximum(grid, r, g, b, cell.hit_count) {
                    continue;
                }

                let count = cell.hit_count as f64;
                maxima.push(LocalMaximum {
                    hit_count: cell.hit_count,
                    cell_index: index,
                    r: (cell.r_acc / count) as f32,
                    g: (cell.g_acc / count) as f32,
                    b: (cell.b_acc / count) as f32,
                });
            }
        }
    }

    // Stable sort: tie order is part of the output contract.
    maxima.sort_by(|left, right| right.hit_count.cmp(&left.hit_count));
    maxima
}

/// True when no stencil neighbor, clipped to the grid bounds, has a strictly
/// greater hit count than `hit_count`.
fn is_local_maximum(grid: &Grid, r: usize, g: usize, b: usize, hit_count: u32) -> bool {
    let resolution = grid.resolution() as i32;

    for offset in &NEIGHBOR_OFFSETS {
        let rn = r as i32 + offset[0];
        let gn = g as i32 + offset[1];
        let bn = b as i32 + offset[2];
        if rn < 0 || gn < 0 || bn < 0 || rn >= resolution || gn >= resolution || bn >= resolution {
            continue;
        }
        let neighbor = grid.cell(grid.cell_index(rn as usize, gn as usize, bn as usize));
        if neighbor.hit_count > hit_count {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(grid: &mut Grid, r: usize, g: usize, b: usize, hits: u32, color: (f32, f32, f32)) {
        let index = grid.cell_index(r, g, b);
        for _ in 0..hits {
            grid.accumulate(index, color.0, color.1, color.2);
        }
    }

    #[test]
    fn empty_grid_has_no_maxima() {
        let grid = Grid::new(4);
        assert!(find_local_maxima(&grid).is_empty());
    }

    #[test]
    fn single_cell_is_a_maximum() {
        let mut grid = Grid::new(4);
        put(&mut grid, 1, 2, 3, 5, (0.4, 0.6, 0.8));

        let maxima = find_local_maxima(&grid);
        assert_eq!(maxima.len(), 1);
        assert_eq!(maxima[0].hit_count, 5);
        assert_eq!(maxima[0].cell_index, grid.cell_index(1, 2, 3));
        assert!((maxima[0].r - 0.4).abs() < 1e-6);
        assert!((maxima[0].g - 0.6).abs() < 1e-6);
        assert!((maxima[0].b - 0.8).abs() < 1e-6);
    }

    #[test]
    fn greater_neighbor_disqualifies() {
        let mut grid = Grid::new(4);
        put(&mut grid, 1, 1, 1, 3, (0.3, 0.3, 0.3));
        put(&mut grid, 2, 1, 1, 7, (0.6, 0.3, 0.3));

        let maxima = find_local_maxima(&grid);
        assert_eq!(maxima.len(), 1);
        assert_eq!(maxima[0].hit_count, 7);
    }

    #[test]
    fn plateau_cells_all_qualify() {
        let mut grid = Grid::new(4);
        put(&mut grid, 1, 1, 1, 4, (0.3, 0.3, 0.3));
        put(&mut grid, 2, 1, 1, 4, (0.6, 0.3, 0.3));

        let maxima = find_local_maxima(&grid);
        assert_eq!(maxima.len(), 2);
        assert_eq!(maxima[0].hit_count, 4);
        assert_eq!(maxima[1].hit_count, 4);
        // Ascending cell index is the discovery order, kept through the sort.
        assert!(maxima[0].cell_index < maxima[1].cell_index);
    }

    #[test]
    fn distant_cells_both_qualify() {
        let mut grid = Grid::new(8);
        put(&mut grid, 0, 0, 0, 2, (0.0, 0.0, 0.0));
        put(&mut grid, 7, 7, 7, 9, (1.0, 1.0, 1.0));

        let maxima = find_local_maxima(&grid);
        assert_eq!(maxima.len(), 2);
        // Sorted descending by hit count.
        assert_eq!(maxima[0].hit_count, 9);
        assert_eq!(maxima[1].hit_count, 2);
    }

    #[test]
    fn corner_cells_use_clipped_stencil() {
        let mut grid = Grid::new(3);
        put(&mut grid, 0, 0, 0, 1, (0.1, 0.1, 0.1));
        put(&mut grid, 2, 2, 2, 1, (0.9, 0.9, 0.9));

        let maxima = find_local_maxima(&grid);
        assert_eq!(maxima.len(), 2);
    }

    #[test]
    fn average_color_divides_accumulators() {
        let mut grid = Grid::new(4);
        let index = grid.cell_index(2, 2, 2);
        grid.accumulate(index, 0.6, 0.6, 0.6);
        grid.accumulate(index, 0.8, 0.8, 0.8);

        let maxima = find_local_maxima(&grid);
        assert_eq!(maxima.len(), 1);
        assert!((maxima[0].r - 0.7).abs() < 1e-6);
    }

    #[test]
    fn distance_is_symmetric_and_zero_on_self() {
        let m = LocalMaximum {
            hit_count: 1,
            cell_index: 0,
            r: 0.2,
            g: 0.4,
            b: 0.6,
        };
        let n = LocalMaximum {
            hit_count: 1,
            cell_index: 1,
            r: 0.5,
            g: 0.1,
            b: 0.9,
        };
        assert_eq!(m.distance_to(m.r, m.g, m.b), 0.0);
        assert!((m.distance_to(n.r, n.g, n.b) - n.distance_to(m.r, m.g, m.b)).abs() < 1e-6);
    }
}
